//! Palette of shade ramps for every colour group.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::shades::{generate_shades_with, ShadeRamp, ShadeStrategy};

/// Fixed base for the `gray` group.
pub const GRAY_BASE: &str = "#6B7280";

/// Fixed base for the `success` group.
pub const SUCCESS_BASE: &str = "#10B981";

/// Fixed base for the `warning` group.
pub const WARNING_BASE: &str = "#F59E0B";

/// Fixed base for the `error` group.
pub const ERROR_BASE: &str = "#EF4444";

/// A named colour group in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteGroup {
    Primary,
    Secondary,
    Accent,
    Gray,
    Success,
    Warning,
    Error,
}

impl PaletteGroup {
    /// All groups in export order.
    pub const ALL: [PaletteGroup; 7] = [
        PaletteGroup::Primary,
        PaletteGroup::Secondary,
        PaletteGroup::Accent,
        PaletteGroup::Gray,
        PaletteGroup::Success,
        PaletteGroup::Warning,
        PaletteGroup::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteGroup::Primary => "primary",
            PaletteGroup::Secondary => "secondary",
            PaletteGroup::Accent => "accent",
            PaletteGroup::Gray => "gray",
            PaletteGroup::Success => "success",
            PaletteGroup::Warning => "warning",
            PaletteGroup::Error => "error",
        }
    }

    /// Base colour for the fixed semantic groups.
    pub fn fixed_base(self) -> Option<&'static str> {
        match self {
            PaletteGroup::Gray => Some(GRAY_BASE),
            PaletteGroup::Success => Some(SUCCESS_BASE),
            PaletteGroup::Warning => Some(WARNING_BASE),
            PaletteGroup::Error => Some(ERROR_BASE),
            _ => None,
        }
    }
}

impl fmt::Display for PaletteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shade ramps for the seven colour groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Palette {
    pub primary: ShadeRamp,
    pub secondary: ShadeRamp,
    pub accent: ShadeRamp,
    pub gray: ShadeRamp,
    pub success: ShadeRamp,
    pub warning: ShadeRamp,
    pub error: ShadeRamp,
}

impl Palette {
    /// Generate ramps for the three brand colours plus the fixed groups.
    pub fn generate(primary: &str, secondary: &str, accent: &str, strategy: ShadeStrategy) -> Self {
        let ramp = |base: &str| generate_shades_with(base, strategy);

        Self {
            primary: ramp(primary),
            secondary: ramp(secondary),
            accent: ramp(accent),
            gray: ramp(GRAY_BASE),
            success: ramp(SUCCESS_BASE),
            warning: ramp(WARNING_BASE),
            error: ramp(ERROR_BASE),
        }
    }

    /// Get the ramp for a group.
    pub fn get(&self, group: PaletteGroup) -> &ShadeRamp {
        match group {
            PaletteGroup::Primary => &self.primary,
            PaletteGroup::Secondary => &self.secondary,
            PaletteGroup::Accent => &self.accent,
            PaletteGroup::Gray => &self.gray,
            PaletteGroup::Success => &self.success,
            PaletteGroup::Warning => &self.warning,
            PaletteGroup::Error => &self.error,
        }
    }

    /// Iterate groups in export order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteGroup, &ShadeRamp)> {
        PaletteGroup::ALL.into_iter().map(move |group| (group, self.get(group)))
    }

    /// Total number of colour tokens across all groups.
    pub fn token_count(&self) -> usize {
        self.iter().map(|(_, ramp)| ramp.len()).sum()
    }
}
