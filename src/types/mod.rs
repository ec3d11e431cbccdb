//! Colour domain types for tokengen.
//!
//! - `Colour` / `Hsl` - RGB and HSL colour values with hex conversion
//! - `ShadeRamp` - ten tonal variants of one base colour
//! - `Scheme` - split-complementary secondary/accent derivation
//! - `Palette` - shade ramps for every colour group

mod colour;
mod palette;
mod scheme;
mod shades;

pub use colour::{adjust_brightness, Colour, Hsl};
pub use palette::{Palette, PaletteGroup, ERROR_BASE, GRAY_BASE, SUCCESS_BASE, WARNING_BASE};
pub use scheme::{
    derive_scheme, harmonic_hues, random_primary, random_scheme, scheme_for, seeded_rng, Scheme,
    ACCENT_OFFSET, SCHEME_LIGHTNESS, SECONDARY_OFFSET,
};
pub use shades::{
    generate_shades, generate_shades_with, shade_lightness, ShadeRamp, ShadeStrategy, BASE_SHADE,
    MAX_LIGHTNESS, MIN_LIGHTNESS, SHADE_KEYS,
};
