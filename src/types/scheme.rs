//! Split-complementary colour schemes.
//!
//! A primary hue gets a secondary 30° around the wheel and an accent 195°
//! around (just past its complement). Both are re-encoded at the primary's
//! saturation and a fixed mid lightness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;

use super::colour::{Colour, Hsl};

/// Hue offset of the secondary colour.
pub const SECONDARY_OFFSET: f64 = 30.0;

/// Hue offset of the accent colour.
pub const ACCENT_OFFSET: f64 = 195.0;

/// Lightness shared by every generated scheme colour.
pub const SCHEME_LIGHTNESS: f64 = 50.0;

/// Saturation range for random primaries.
pub const RANDOM_SATURATION: (f64, f64) = (30.0, 80.0);

/// A primary colour with its harmonic secondary and accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
}

/// Secondary and accent hues for a primary hue.
pub fn harmonic_hues(hue: f64) -> (f64, f64) {
    (
        (hue + SECONDARY_OFFSET).rem_euclid(360.0),
        (hue + ACCENT_OFFSET).rem_euclid(360.0),
    )
}

/// Derive a scheme from a primary given as hex.
pub fn derive_scheme(primary: &str) -> Result<Scheme> {
    Colour::from_hex(primary).map(scheme_for)
}

/// Derive a scheme from an already parsed primary.
pub fn scheme_for(primary: Colour) -> Scheme {
    let hsl = primary.to_hsl();
    let (secondary, accent) = harmonic_hues(hsl.h);

    Scheme {
        primary,
        secondary: Hsl::new(secondary, hsl.s, SCHEME_LIGHTNESS).to_colour(),
        accent: Hsl::new(accent, hsl.s, SCHEME_LIGHTNESS).to_colour(),
    }
}

/// A random mid-lightness primary with moderate saturation.
pub fn random_primary<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    let hue = rng.random_range(0.0..360.0);
    let saturation = rng.random_range(RANDOM_SATURATION.0..=RANDOM_SATURATION.1);
    Hsl::new(hue, saturation, SCHEME_LIGHTNESS).to_colour()
}

/// A scheme seeded from a random primary.
pub fn random_scheme<R: Rng + ?Sized>(rng: &mut R) -> Scheme {
    scheme_for(random_primary(rng))
}

/// Build an RNG, reproducible when a seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hue(actual: f64, expected: f64) {
        let diff = (actual - expected).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        assert!(diff < 1.0, "hue {} is not close to {}", actual, expected);
    }

    #[test]
    fn test_harmonic_hues() {
        assert_eq!(harmonic_hues(0.0), (30.0, 195.0));
        assert_eq!(harmonic_hues(200.0), (230.0, 35.0));
        assert_eq!(harmonic_hues(340.0), (10.0, 175.0));
    }

    #[test]
    fn test_scheme_from_red() {
        let scheme = derive_scheme("#ff0000").unwrap();
        let secondary = scheme.secondary.to_hsl();
        let accent = scheme.accent.to_hsl();

        assert_hue(secondary.h, 30.0);
        assert_hue(accent.h, 195.0);
        assert!((secondary.l - 50.0).abs() < 0.5);
        assert!((accent.l - 50.0).abs() < 0.5);
        assert!((secondary.s - 100.0).abs() < 0.5);

        assert_eq!(scheme.secondary.to_hex(), "#ff8000");
        assert_eq!(scheme.accent.to_hex(), "#00bfff");
    }

    #[test]
    fn test_scheme_keeps_primary_saturation() {
        let primary = Hsl::new(210.0, 40.0, 30.0).to_colour();
        let scheme = scheme_for(primary);
        assert_eq!(scheme.primary, primary);

        let secondary = scheme.secondary.to_hsl();
        assert!((secondary.s - 40.0).abs() < 1.0);
        assert!((secondary.l - 50.0).abs() < 0.5);
        assert_hue(secondary.h, 240.0);
        assert_hue(scheme.accent.to_hsl().h, 45.0);
    }

    #[test]
    fn test_scheme_from_grey_is_grey() {
        let scheme = derive_scheme("#6b7280").unwrap();
        // Not quite achromatic, but saturation carries over
        assert!(scheme.secondary.to_hsl().s < 15.0);

        let scheme = derive_scheme("#808080").unwrap();
        assert_eq!(scheme.secondary, scheme.accent);
    }

    #[test]
    fn test_derive_scheme_invalid() {
        assert!(derive_scheme("red").is_err());
    }

    #[test]
    fn test_random_primary_ranges() {
        let mut rng = seeded_rng(Some(7));
        for _ in 0..200 {
            let hsl = random_primary(&mut rng).to_hsl();
            assert!((hsl.l - SCHEME_LIGHTNESS).abs() < 0.5, "lightness {}", hsl.l);
            assert!(hsl.s >= RANDOM_SATURATION.0 - 1.0, "saturation {}", hsl.s);
            assert!(hsl.s <= RANDOM_SATURATION.1 + 1.0, "saturation {}", hsl.s);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = random_scheme(&mut seeded_rng(Some(42)));
        let b = random_scheme(&mut seeded_rng(Some(42)));
        assert_eq!(a, b);
    }
}
