//! Spacing, border radius and shadow scales.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest spacing step; steps run `0..=SPACING_STEPS`.
pub const SPACING_STEPS: u32 = 12;

/// Radius used for fully rounded ("pill") corners.
pub const RADIUS_FULL: f64 = 9999.0;

/// Spacing step to pixel value.
pub type SpacingScale = BTreeMap<u32, u32>;

/// Shadow level to CSS `box-shadow` value.
pub type ShadowScale = BTreeMap<u32, String>;

/// Border radii derived from a base radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    #[serde(with = "number")]
    pub none: f64,
    #[serde(with = "number")]
    pub sm: f64,
    #[serde(with = "number")]
    pub base: f64,
    #[serde(with = "number")]
    pub md: f64,
    #[serde(with = "number")]
    pub lg: f64,
    #[serde(with = "number")]
    pub xl: f64,
    #[serde(with = "number")]
    pub full: f64,
}

impl RadiusScale {
    /// Iterate `(key, radius)` in export order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("none", self.none),
            ("sm", self.sm),
            ("base", self.base),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("full", self.full),
        ]
        .into_iter()
    }
}

/// The `variables` block of the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables {
    pub spacing: SpacingScale,
    pub border_radius: RadiusScale,
    pub shadows: ShadowScale,
}

impl Variables {
    pub fn generate(spacing_base: u32, radius_base: u32, shadow_levels: u32) -> Self {
        Self {
            spacing: generate_spacing(spacing_base),
            border_radius: generate_radius(radius_base),
            shadows: generate_shadows(shadow_levels),
        }
    }
}

/// Spacing steps `0..=12`, each a multiple of `base`, saturating at `u32::MAX`.
pub fn generate_spacing(base: u32) -> SpacingScale {
    (0..=SPACING_STEPS)
        .map(|step| (step, step.saturating_mul(base)))
        .collect()
}

/// Radii at fixed multiples of `base`, plus a constant `full`.
pub fn generate_radius(base: u32) -> RadiusScale {
    let base = f64::from(base);
    RadiusScale {
        none: 0.0,
        sm: base / 2.0,
        base,
        md: base * 1.5,
        lg: base * 2.0,
        xl: base * 3.0,
        full: RADIUS_FULL,
    }
}

/// Shadow levels `1..=levels`.
pub fn generate_shadows(levels: u32) -> ShadowScale {
    (1..=levels).map(|level| (level, shadow(level))).collect()
}

/// The shadow for one elevation level.
///
/// Offset grows by 2px, blur by 4px and opacity by 0.05 per level.
pub fn shadow(level: u32) -> String {
    let y = u64::from(level) * 2;
    let blur = u64::from(level) * 4;
    format!(
        "0 {}px {}px rgba(0, 0, 0, {})",
        y,
        blur,
        format_opacity(shadow_opacity(level))
    )
}

/// Opacity of a shadow level.
pub fn shadow_opacity(level: u32) -> f64 {
    0.1 + 0.05 * f64::from(level)
}

/// Two decimals at most, trailing zeros dropped: `0.15`, `0.2`, `1`.
fn format_opacity(opacity: f64) -> String {
    let text = format!("{:.2}", opacity);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Serialize whole floats as integers so radii read `4` rather than `4.0`.
mod number {
    use serde::{Deserialize, Deserializer, Serializer};

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() < MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer)
    }
}
