//! Colour type, hex parsing and HSL conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TokenError};

/// An opaque 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour in HSL space.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#rrggbb` hex colour.
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    /// Shorthand (`#rgb`) and alpha (`#rrggbbaa`) forms are rejected.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::Parse {
                message: format!("Invalid hex colour: {:?}", s),
                help: Some("Use six hex digits, e.g. #3b82f6".to_string()),
            });
        }

        Ok(Self::rgb(
            parse_hex_byte(&hex[0..2])?,
            parse_hex_byte(&hex[2..4])?,
            parse_hex_byte(&hex[4..6])?,
        ))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        use palette::{IntoColor, Srgb};

        let rgb: Srgb<f64> = Srgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );

        // Grey has no hue; pin it rather than trusting float noise.
        if self.r == self.g && self.g == self.b {
            return Hsl::new(0.0, 0.0, rgb.red * 100.0);
        }

        let hsl: palette::Hsl<palette::encoding::Srgb, f64> = rgb.into_color();
        Hsl::new(
            hsl.hue.into_positive_degrees(),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    /// Convert from HSL, rounding each channel to the nearest integer.
    pub fn from_hsl(hsl: Hsl) -> Self {
        use palette::{IntoColor, Srgb};

        // Fields are public; values built as struct literals skip `Hsl::new`
        let hsl = Hsl::new(hsl.h, hsl.s, hsl.l);
        let source: palette::Hsl<palette::encoding::Srgb, f64> =
            palette::Hsl::new(hsl.h, hsl.s / 100.0, hsl.l / 100.0);
        let rgb: Srgb<f64> = source.into_color();

        Self::rgb(
            unit_to_channel(rgb.red),
            unit_to_channel(rgb.green),
            unit_to_channel(rgb.blue),
        )
    }

    /// Scale every channel by `1 + percent / 100`, clamping to `[0, 255]`.
    ///
    /// This is the simple brightness model used by the legacy shade
    /// strategy. It drifts hue at extreme factors and cannot lighten black.
    pub fn scale_brightness(self, percent: f64) -> Self {
        let factor = 1.0 + percent / 100.0;
        let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Perceived lightness in `[0, 100]`, as HSL defines it.
    pub fn lightness(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (f64::from(max) + f64::from(min)) / 510.0 * 100.0
    }
}

impl Hsl {
    /// Create an HSL value, wrapping hue and clamping saturation/lightness.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        let mut h = h.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if h >= 360.0 {
            h = 0.0;
        }
        Self {
            h,
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Parse a hex colour straight into HSL.
    pub fn from_hex(s: &str) -> Result<Self> {
        Colour::from_hex(s).map(Colour::to_hsl)
    }

    /// Encode as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        self.to_colour().to_hex()
    }

    pub fn to_colour(self) -> Colour {
        Colour::from_hsl(self)
    }

    /// Same hue and saturation at a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Rotate hue by `degrees`, wrapping around the colour wheel.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

/// Adjust a hex colour's brightness by a percentage.
///
/// Unparseable input is returned unchanged.
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    match Colour::from_hex(hex) {
        Ok(colour) => colour.scale_brightness(percent).to_hex(),
        Err(_) => hex.to_string(),
    }
}

impl FromStr for Colour {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Hsl> for Colour {
    fn from(hsl: Hsl) -> Self {
        Colour::from_hsl(hsl)
    }
}

impl From<Colour> for Hsl {
    fn from(colour: Colour) -> Self {
        colour.to_hsl()
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TokenError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
