//! Individual seed checks.
//!
//! Each check looks at one concern and returns the diagnostics it found.

use crate::scale::{shadow_opacity, SPACING_STEPS};
use crate::seeds::Seeds;
use crate::types::Colour;

use super::diagnostic::Diagnostic;

/// Typical range for a modular type scale ratio.
const TYPICAL_RATIO: (f64, f64) = (1.0, 2.0);

/// Most shadow levels generated in one run.
pub const MAX_SHADOW_LEVELS: u32 = 100;

/// Largest spacing base whose top step still fits in a `u32`.
pub const MAX_SPACING_BASE: u32 = u32::MAX / SPACING_STEPS;

/// Brand colours that are set should be six-digit hex.
///
/// An unparseable colour keeps only its raw value at shade 500.
pub fn check_colours(seeds: &Seeds) -> Vec<Diagnostic> {
    [
        ("primary", &seeds.primary),
        ("secondary", &seeds.secondary),
        ("accent", &seeds.accent),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
        let value = value.as_deref()?;
        Colour::from_hex(value).err().map(|_| {
            Diagnostic::warning(
                "tokengen::validate::invalid-colour",
                format!(
                    "{} colour {:?} is not a #rrggbb hex colour, only shade 500 will be set",
                    name, value
                ),
            )
            .with_help("Use six hex digits, e.g. #3b82f6")
        })
    })
    .collect()
}

pub fn check_ratio(seeds: &Seeds) -> Vec<Diagnostic> {
    let ratio = seeds.scale_ratio;

    if !ratio.is_finite() || ratio <= 0.0 {
        return vec![Diagnostic::error(
            "tokengen::validate::invalid-ratio",
            format!("Scale ratio {} must be a positive number", ratio),
        )
        .with_help("Common ratios are 1.125, 1.25, 1.333 and 1.5")];
    }

    if ratio < TYPICAL_RATIO.0 || ratio > TYPICAL_RATIO.1 {
        return vec![Diagnostic::warning(
            "tokengen::validate::unusual-ratio",
            format!(
                "Scale ratio {} is outside the usual {}-{} range",
                ratio, TYPICAL_RATIO.0, TYPICAL_RATIO.1
            ),
        )];
    }

    vec![]
}

pub fn check_sizes(seeds: &Seeds) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if seeds.base_size == 0 {
        diagnostics.push(
            Diagnostic::error(
                "tokengen::validate::zero-base-size",
                "Base font size must be greater than 0",
            )
            .with_help("16px is a common default"),
        );
    }

    if seeds.spacing_base > MAX_SPACING_BASE {
        diagnostics.push(
            Diagnostic::error(
                "tokengen::validate::spacing-overflow",
                format!("Spacing base {} is too large", seeds.spacing_base),
            )
            .with_help(format!("Use a spacing base of at most {}", MAX_SPACING_BASE)),
        );
    }

    if seeds.spacing_base == 0 {
        diagnostics.push(Diagnostic::warning(
            "tokengen::validate::zero-spacing",
            "Spacing base is 0, every spacing step will be 0",
        ));
    }

    diagnostics
}

pub fn check_font_family(seeds: &Seeds) -> Vec<Diagnostic> {
    if seeds.font_family.trim().is_empty() {
        vec![Diagnostic::error(
            "tokengen::validate::empty-font-family",
            "Font family is empty",
        )
        .with_help("Name a font stack, e.g. \"Inter, sans-serif\"")]
    } else {
        vec![]
    }
}

/// Shadow opacity grows with level and stops being a shadow at 1.
pub fn check_shadows(seeds: &Seeds) -> Vec<Diagnostic> {
    let levels = seeds.shadow_levels;
    if levels > MAX_SHADOW_LEVELS {
        return vec![Diagnostic::error(
            "tokengen::validate::too-many-shadows",
            format!("{} shadow levels requested", levels),
        )
        .with_help(format!("Use at most {} shadow levels", MAX_SHADOW_LEVELS))];
    }

    if levels > 0 && shadow_opacity(levels) >= 1.0 - 1e-9 {
        vec![Diagnostic::warning(
            "tokengen::validate::opaque-shadow",
            format!("Shadow level {} is fully opaque", levels),
        )
        .with_help("Use 17 or fewer shadow levels")]
    } else {
        vec![]
    }
}
