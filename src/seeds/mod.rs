//! Seed inputs and the path from seeds to a finished document.
//!
//! Seeds are validated here, at the boundary, so the generators themselves
//! never see a zero base size or a NaN ratio.

mod config;

pub use config::{Config, CONFIG_FILENAME};

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{Result, TokenError};
use crate::export::DesignSystem;
use crate::scale::{Typography, Variables};
use crate::types::{derive_scheme, random_primary, Palette, ShadeStrategy};
use crate::validation::{validate_seeds, Severity};

/// Every input the generators need.
#[derive(Debug, Clone, PartialEq)]
pub struct Seeds {
    /// Brand colours; missing ones are filled by [`Seeds::resolve_colours`].
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub font_family: String,
    pub base_size: u32,
    pub scale_ratio: f64,
    pub spacing_base: u32,
    pub radius_base: u32,
    pub shadow_levels: u32,
    pub strategy: ShadeStrategy,
}

impl Default for Seeds {
    fn default() -> Self {
        Self {
            primary: None,
            secondary: None,
            accent: None,
            font_family: "Inter, sans-serif".to_string(),
            base_size: 16,
            scale_ratio: 1.25,
            spacing_base: 4,
            radius_base: 4,
            shadow_levels: 5,
            strategy: ShadeStrategy::Hsl,
        }
    }
}

/// The three brand colours after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedColours {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Seeds {
    /// Fill in missing brand colours.
    ///
    /// A missing primary is random. Missing secondary/accent colours come
    /// from the primary's split-complementary scheme.
    pub fn resolve_colours<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SeedColours> {
        let primary = match &self.primary {
            Some(primary) => primary.clone(),
            None => random_primary(rng).to_hex(),
        };

        let (secondary, accent) = match (&self.secondary, &self.accent) {
            (Some(secondary), Some(accent)) => (secondary.clone(), accent.clone()),
            (secondary, accent) => {
                let scheme = derive_scheme(&primary).map_err(|_| TokenError::Validation {
                    message: format!("Cannot derive a colour scheme from {:?}", primary),
                    help: Some("Give a #rrggbb primary, or set secondary and accent".to_string()),
                })?;
                (
                    secondary.clone().unwrap_or_else(|| scheme.secondary.to_hex()),
                    accent.clone().unwrap_or_else(|| scheme.accent.to_hex()),
                )
            }
        };

        Ok(SeedColours {
            primary,
            secondary,
            accent,
        })
    }

    /// Fail on the first validation error.
    pub fn check(&self) -> Result<()> {
        let result = validate_seeds(self);
        let first = result.iter().find(|d| d.severity == Severity::Error);
        match first {
            Some(first) => Err(TokenError::Validation {
                message: first.message.clone(),
                help: first.help.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Validate and generate a document stamped with the current time.
    ///
    /// An unparseable brand colour only degrades its own ramp. Generation
    /// fails when secondary or accent has to be derived from a primary that
    /// can't be parsed.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DesignSystem> {
        self.generate_at(rng, Utc::now())
    }

    /// Validate and generate a document stamped with `at`.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        at: DateTime<Utc>,
    ) -> Result<DesignSystem> {
        self.check()?;
        let colours = self.resolve_colours(rng)?;

        let palette = Palette::generate(
            &colours.primary,
            &colours.secondary,
            &colours.accent,
            self.strategy,
        );
        let typography = Typography::new(self.font_family.clone(), self.base_size, self.scale_ratio);
        let variables = Variables::generate(self.spacing_base, self.radius_base, self.shadow_levels);

        Ok(DesignSystem::build(palette, typography, variables, at))
    }
}
