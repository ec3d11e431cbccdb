//! Modular type scale.

use serde::{Deserialize, Serialize};

/// Font weights exported with every type scale.
pub const FONT_WEIGHTS: [u16; 5] = [300, 400, 500, 600, 700];

/// Size keys and their exponent relative to `base`.
pub const TYPE_STEPS: [(&str, i32); 9] = [
    ("xs", -2),
    ("sm", -1),
    ("base", 0),
    ("lg", 1),
    ("xl", 2),
    ("2xl", 3),
    ("3xl", 4),
    ("4xl", 5),
    ("5xl", 6),
];

/// Font sizes in pixels, one per named step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeScale {
    pub xs: u32,
    pub sm: u32,
    pub base: u32,
    pub lg: u32,
    pub xl: u32,
    #[serde(rename = "2xl")]
    pub xl2: u32,
    #[serde(rename = "3xl")]
    pub xl3: u32,
    #[serde(rename = "4xl")]
    pub xl4: u32,
    #[serde(rename = "5xl")]
    pub xl5: u32,
}

impl TypeScale {
    /// Look up a size by its exported key (`"base"`, `"2xl"`, ...).
    pub fn get(&self, key: &str) -> Option<u32> {
        let size = match key {
            "xs" => self.xs,
            "sm" => self.sm,
            "base" => self.base,
            "lg" => self.lg,
            "xl" => self.xl,
            "2xl" => self.xl2,
            "3xl" => self.xl3,
            "4xl" => self.xl4,
            "5xl" => self.xl5,
            _ => return None,
        };
        Some(size)
    }

    /// Iterate `(key, size)` from smallest to largest step.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        TYPE_STEPS
            .iter()
            .filter_map(move |(key, _)| self.get(key).map(|size| (*key, size)))
    }
}

/// Build a type scale as `round(base * ratio^step)`.
///
/// `base` is kept exactly. Rounding is half away from zero.
pub fn generate_type_scale(base_size: u32, ratio: f64) -> TypeScale {
    let size = |step: i32| {
        if step == 0 {
            base_size
        } else {
            (f64::from(base_size) * ratio.powi(step)).round() as u32
        }
    };

    TypeScale {
        xs: size(-2),
        sm: size(-1),
        base: size(0),
        lg: size(1),
        xl: size(2),
        xl2: size(3),
        xl3: size(4),
        xl4: size(5),
        xl5: size(6),
    }
}

/// Typography block of the exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub type_scale: TypeScale,
    pub weights: Vec<u16>,
}

impl Typography {
    pub fn new(font_family: impl Into<String>, base_size: u32, ratio: f64) -> Self {
        Self {
            font_family: font_family.into(),
            type_scale: generate_type_scale(base_size, ratio),
            weights: FONT_WEIGHTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_third() {
        let scale = generate_type_scale(16, 1.25);
        assert_eq!(scale.base, 16);
        assert_eq!(scale.lg, 20);
        assert_eq!(scale.sm, 13);
        assert_eq!(scale.xs, 10);
        assert_eq!(scale.xl, 25);
        assert_eq!(scale.xl2, 31);
        assert_eq!(scale.xl3, 39);
        assert_eq!(scale.xl4, 49);
        assert_eq!(scale.xl5, 61);
    }

    #[test]
    fn test_unit_ratio_is_flat() {
        let scale = generate_type_scale(14, 1.0);
        assert!(scale.iter().all(|(_, size)| size == 14));
    }

    #[test]
    fn test_scale_is_non_decreasing() {
        for ratio in [1.067, 1.125, 1.2, 1.333, 1.5, 1.618, 2.0] {
            let sizes: Vec<u32> = generate_type_scale(16, ratio).iter().map(|(_, s)| s).collect();
            assert!(sizes.windows(2).all(|w| w[0] <= w[1]), "{}: {:?}", ratio, sizes);
        }
    }

    #[test]
    fn test_get_and_iter_agree() {
        let scale = generate_type_scale(18, 1.2);
        let keys: Vec<&str> = scale.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl"]);
        assert_eq!(scale.get("2xl"), Some(scale.xl2));
        assert_eq!(scale.get("6xl"), None);
    }

    #[test]
    fn test_serialized_keys() {
        let typography = Typography::new("Inter", 16, 1.25);
        let json = serde_json::to_value(&typography).unwrap();
        assert_eq!(json["fontFamily"], "Inter");
        assert_eq!(json["typeScale"]["2xl"], 31);
        assert_eq!(json["typeScale"]["base"], 16);
        assert_eq!(json["weights"], serde_json::json!([300, 400, 500, 600, 700]));
    }
}
