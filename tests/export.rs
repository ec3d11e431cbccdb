//! End-to-end checks on the exported JSON document.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

use tokengen::types::seeded_rng;
use tokengen::{write_document, DesignSystem, Seeds, ShadeStrategy, EXPORT_FILENAME};

fn document(strategy: ShadeStrategy) -> DesignSystem {
    let seeds = Seeds {
        primary: Some("#3B82F6".to_string()),
        secondary: Some("#8b5cf6".to_string()),
        accent: Some("#f59e0b".to_string()),
        strategy,
        ..Default::default()
    };
    let at = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    seeds.generate_at(&mut seeded_rng(Some(1)), at).unwrap()
}

fn exported(doc: &DesignSystem) -> Value {
    let dir = tempdir().unwrap();
    let path = write_document(doc, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), EXPORT_FILENAME);
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn keys(value: &Value) -> Vec<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

#[test]
fn test_top_level_shape() {
    let json = exported(&document(ShadeStrategy::Hsl));

    assert_eq!(
        keys(&json),
        ["name", "description", "colors", "typography", "variables", "metadata"]
    );
    assert_eq!(
        keys(&json["colors"]),
        ["primary", "secondary", "accent", "gray", "success", "warning", "error"]
    );
    assert_eq!(keys(&json["variables"]), ["spacing", "borderRadius", "shadows"]);
    assert_eq!(json["metadata"]["generatedAt"], "2026-03-14T15:09:26.000Z");
    assert_eq!(json["metadata"]["version"], "1.0.0");
}

#[test]
fn test_colour_ramps() {
    let json = exported(&document(ShadeStrategy::Hsl));

    for (group, ramp) in json["colors"].as_object().unwrap() {
        let ramp = ramp.as_object().unwrap();
        assert_eq!(ramp.len(), 10, "{} should have ten shades", group);
    }

    assert_eq!(json["colors"]["primary"]["500"], "#3B82F6");
    assert_eq!(json["colors"]["gray"]["500"], "#6B7280");

    let first = json["colors"]["primary"]["50"].as_str().unwrap();
    assert_eq!(first.len(), 7);
    assert_eq!(first, first.to_lowercase());
}

#[test]
fn test_brightness_strategy_changes_ramps() {
    let hsl = document(ShadeStrategy::Hsl);
    let brightness = document(ShadeStrategy::Brightness);

    assert_eq!(hsl.colors.primary.base(), brightness.colors.primary.base());
    assert_ne!(hsl.colors.primary.get(50), brightness.colors.primary.get(50));
    assert_eq!(hsl.typography, brightness.typography);
}

#[test]
fn test_type_scale_snapshot() {
    let doc = document(ShadeStrategy::Hsl);

    insta::assert_json_snapshot!(doc.typography.type_scale, @r#"
    {
      "xs": 10,
      "sm": 13,
      "base": 16,
      "lg": 20,
      "xl": 25,
      "2xl": 31,
      "3xl": 39,
      "4xl": 49,
      "5xl": 61
    }
    "#);
}

#[test]
fn test_variables() {
    let json = exported(&document(ShadeStrategy::Hsl));
    let variables = &json["variables"];

    assert_eq!(variables["spacing"]["0"], 0);
    assert_eq!(variables["spacing"]["12"], 48);
    assert_eq!(variables["borderRadius"]["sm"], 2);
    assert_eq!(variables["borderRadius"]["md"], 6);
    assert_eq!(variables["borderRadius"]["full"], 9999);
    assert_eq!(variables["shadows"]["1"], "0 2px 4px rgba(0, 0, 0, 0.15)");
    assert_eq!(variables["shadows"]["5"], "0 10px 20px rgba(0, 0, 0, 0.35)");
    assert_eq!(json["typography"]["fontFamily"], "Inter, sans-serif");
    assert_eq!(json["typography"]["weights"], serde_json::json!([300, 400, 500, 600, 700]));
}

#[test]
fn test_export_round_trips() {
    let doc = document(ShadeStrategy::Brightness);
    let parsed = DesignSystem::from_json(&doc.to_json().unwrap()).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_invalid_brand_colour_degrades_only_its_group() {
    let seeds = Seeds {
        primary: Some("#3b82f6".to_string()),
        accent: Some("orange".to_string()),
        ..Default::default()
    };
    let at = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let doc = seeds.generate_at(&mut seeded_rng(Some(1)), at).unwrap();
    let json = exported(&doc);

    assert_eq!(json["colors"]["accent"], serde_json::json!({"500": "orange"}));
    assert_eq!(json["colors"]["secondary"].as_object().unwrap().len(), 10);
    assert_eq!(json["colors"]["gray"].as_object().unwrap().len(), 10);
}
