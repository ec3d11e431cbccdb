//! Numeric token scales: typography, spacing, radius and shadows.

mod typography;
mod variables;

pub use typography::{generate_type_scale, TypeScale, Typography, FONT_WEIGHTS, TYPE_STEPS};
pub use variables::{
    generate_radius, generate_shadows, generate_spacing, shadow, shadow_opacity, RadiusScale,
    ShadowScale, SpacingScale, Variables, RADIUS_FULL, SPACING_STEPS,
};
