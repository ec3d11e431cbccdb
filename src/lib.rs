//! tokengen - Design token generator
//!
//! Turns a handful of seed values (brand colours, base font size, scale
//! ratio, spacing and radius bases) into a complete design token set and
//! exports it as Figma-compatible JSON.

pub mod cli;
pub mod error;
pub mod export;
pub mod output;
pub mod scale;
pub mod seeds;
pub mod types;
pub mod validation;

pub use error::{Result, TokenError};
pub use export::{write_document, DesignSystem, Metadata, EXPORT_FILENAME};
pub use scale::{
    generate_radius, generate_shadows, generate_spacing, generate_type_scale, RadiusScale,
    TypeScale, Typography, Variables,
};
pub use seeds::{Config, SeedColours, Seeds};
pub use types::{
    adjust_brightness, derive_scheme, generate_shades, generate_shades_with, Colour, Hsl, Palette,
    PaletteGroup, Scheme, ShadeRamp, ShadeStrategy,
};
pub use validation::{validate_seeds, Diagnostic, Severity, ValidationResult};
