//! Shade ramp generation.
//!
//! A ramp holds ten tonal variants of one base colour, keyed
//! `50, 100, 200, ..., 900`. Key `500` is always the base colour itself;
//! lower keys are lighter and higher keys are darker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::colour::{adjust_brightness, Colour};

/// Shade keys in ramp order, lightest first.
pub const SHADE_KEYS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// The key that holds the unmodified base colour.
pub const BASE_SHADE: u16 = 500;

/// Lightest lightness a generated shade may reach.
pub const MAX_LIGHTNESS: f64 = 95.0;

/// Darkest lightness a generated shade may reach.
pub const MIN_LIGHTNESS: f64 = 5.0;

/// Lightness change per shade key step.
const LIGHTNESS_PER_KEY: f64 = 0.1;

/// How shades are derived from the base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShadeStrategy {
    /// Move HSL lightness, keeping hue and saturation fixed.
    #[default]
    Hsl,
    /// Multiply RGB channels. Legacy; drifts hue at the ends of the ramp.
    Brightness,
}

/// An ordered mapping from shade key to colour string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadeRamp(BTreeMap<u16, String>);

impl ShadeRamp {
    /// A ramp holding only the base entry, used when the base can't be parsed.
    fn degenerate(base: &str) -> Self {
        let mut shades = BTreeMap::new();
        shades.insert(BASE_SHADE, base.to_string());
        Self(shades)
    }

    /// Get the colour at a shade key.
    pub fn get(&self, key: u16) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// The base (500) colour.
    pub fn base(&self) -> Option<&str> {
        self.get(BASE_SHADE)
    }

    /// Iterate shades from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the base colour could not be parsed and only key 500 exists.
    pub fn is_degenerate(&self) -> bool {
        self.0.len() == 1 && self.0.contains_key(&BASE_SHADE)
    }
}

/// Generate a ramp with the default (HSL) strategy.
pub fn generate_shades(base: &str) -> ShadeRamp {
    generate_shades_with(base, ShadeStrategy::Hsl)
}

/// Generate a ramp with an explicit strategy.
///
/// Key 500 holds `base` verbatim. If `base` is not a valid hex colour the
/// ramp holds only that entry.
pub fn generate_shades_with(base: &str, strategy: ShadeStrategy) -> ShadeRamp {
    let Ok(colour) = Colour::from_hex(base) else {
        return ShadeRamp::degenerate(base);
    };

    let hsl = colour.to_hsl();
    let shades = SHADE_KEYS
        .iter()
        .map(|&key| {
            let value = if key == BASE_SHADE {
                base.to_string()
            } else {
                match strategy {
                    ShadeStrategy::Hsl => hsl.with_lightness(shade_lightness(hsl.l, key)).to_hex(),
                    ShadeStrategy::Brightness => adjust_brightness(base, brightness_percent(key)),
                }
            };
            (key, value)
        })
        .collect();

    ShadeRamp(shades)
}

/// Target lightness for a shade key given the base lightness.
///
/// Lighter keys never fall below the base and darker keys never rise above
/// it, so bases outside `[5, 95]` keep a monotonic ramp.
pub fn shade_lightness(base_lightness: f64, key: u16) -> f64 {
    let distance = f64::from(key.abs_diff(BASE_SHADE)) * LIGHTNESS_PER_KEY;

    if key < BASE_SHADE {
        (base_lightness + distance).min(MAX_LIGHTNESS).max(base_lightness)
    } else if key > BASE_SHADE {
        (base_lightness - distance).max(MIN_LIGHTNESS).min(base_lightness)
    } else {
        base_lightness
    }
}

/// Brightness percentage applied to a shade key by the legacy strategy.
fn brightness_percent(key: u16) -> f64 {
    (f64::from(BASE_SHADE) - f64::from(key)) / f64::from(BASE_SHADE) * 100.0
}
