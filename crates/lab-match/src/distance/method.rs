use std::fmt;
use std::str::FromStr;

use crate::color::Lab;
use crate::error::{InvalidLightnessDamping, UnknownDistanceMethod};

/// Default lightness damping for [`DistanceMethod::Hue`].
///
/// Scaling ΔL by 0.1 is the same as weighting (ΔL)² by 0.01, so a full
/// black-to-white difference (ΔL = 100) counts like a chroma difference of 10.
pub const DEFAULT_LIGHTNESS_DAMPING: f64 = 0.1;

/// Lightness damping `k` for [`DistanceMethod::Hue`].
///
/// Always in the open interval (0, 1). Zero would make shades of one color
/// indistinguishable, and values of 1 or more would weight lightness at
/// least as much as [`DistanceMethod::Absolute`] does.
///
/// ```
/// use lab_match::LightnessDamping;
///
/// assert_eq!(LightnessDamping::new(0.25).unwrap().get(), 0.25);
/// assert!(LightnessDamping::new(0.0).is_err());
/// assert!(LightnessDamping::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessDamping(f64);

impl LightnessDamping {
    /// [`DEFAULT_LIGHTNESS_DAMPING`] as a checked value.
    pub const DEFAULT: Self = Self(DEFAULT_LIGHTNESS_DAMPING);

    pub fn new(k: f64) -> Result<Self, InvalidLightnessDamping> {
        // Written so that NaN fails both comparisons
        if k > 0.0 && k < 1.0 {
            Ok(Self(k))
        } else {
            Err(InvalidLightnessDamping(k))
        }
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for LightnessDamping {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for LightnessDamping {
    type Error = InvalidLightnessDamping;

    fn try_from(k: f64) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// Distance method for ranking swatches.
///
/// Controls how the lightness axis contributes to the distance between a
/// query color and a swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceMethod {
    /// Euclidean distance with a damped lightness term.
    ///
    /// Formula: `sqrt((k * dL)² + da² + db²)`
    ///
    /// Two colors that differ mostly in brightness rank closer than they
    /// would under [`DistanceMethod::Absolute`].
    Hue {
        /// Lower values make brightness matter less.
        lightness_damping: LightnessDamping,
    },

    /// Euclidean distance in full Lab space.
    ///
    /// Formula: `sqrt(dL² + da² + db²)`
    Absolute,
}

impl DistanceMethod {
    /// Hue method with [`DEFAULT_LIGHTNESS_DAMPING`].
    pub const fn hue() -> Self {
        DistanceMethod::Hue {
            lightness_damping: LightnessDamping::DEFAULT,
        }
    }

    /// Hue method with a custom damping, rejected unless 0 < `k` < 1.
    pub fn hue_with(k: f64) -> Result<Self, InvalidLightnessDamping> {
        Ok(DistanceMethod::Hue {
            lightness_damping: LightnessDamping::new(k)?,
        })
    }

    /// Canonical lowercase name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            DistanceMethod::Hue { .. } => "hue",
            DistanceMethod::Absolute => "absolute",
        }
    }

    /// Distance between two Lab colors under this method.
    ///
    /// Symmetric, non-negative, and zero exactly when both colors are equal.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{DistanceMethod, Lab};
    ///
    /// let dark = Lab::new(30.0, 20.0, 10.0);
    /// let light = Lab::new(70.0, 20.0, 10.0);
    ///
    /// let absolute = DistanceMethod::Absolute.distance(dark, light);
    /// let hue = DistanceMethod::hue().distance(dark, light);
    /// assert_eq!(absolute, 40.0);
    /// assert!(hue < absolute);
    /// ```
    #[inline]
    pub fn distance(self, a: Lab, b: Lab) -> f64 {
        let dl = a.l - b.l;
        let da = a.a - b.a;
        let db = a.b - b.b;

        let dl = match self {
            DistanceMethod::Hue { lightness_damping } => lightness_damping.get() * dl,
            DistanceMethod::Absolute => dl,
        };

        (dl * dl + da * da + db * db).sqrt()
    }
}

impl Default for DistanceMethod {
    fn default() -> Self {
        DistanceMethod::hue()
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMethod {
    type Err = UnknownDistanceMethod;

    /// Parse `"hue"` or `"absolute"` (ASCII case-insensitive).
    ///
    /// `"hue"` uses [`DEFAULT_LIGHTNESS_DAMPING`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hue") {
            Ok(DistanceMethod::hue())
        } else if s.eq_ignore_ascii_case("absolute") {
            Ok(DistanceMethod::Absolute)
        } else {
            Err(UnknownDistanceMethod(s.to_string()))
        }
    }
}

/// Distance between `a` and `b` under `method`.
#[inline]
pub fn distance(a: Lab, b: Lab, method: DistanceMethod) -> f64 {
    method.distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn lab(hex: &str) -> Lab {
        Lab::from(hex.parse::<Rgb>().unwrap())
    }

    const METHODS: [DistanceMethod; 3] = [
        DistanceMethod::Absolute,
        DistanceMethod::hue(),
        DistanceMethod::Hue {
            lightness_damping: LightnessDamping(0.5),
        },
    ];

    #[test]
    fn test_identity_is_zero() {
        for hex in ["000000", "FFFFFF", "FF0000", "3A7BD5", "010203"] {
            let c = lab(hex);
            for method in METHODS {
                assert_eq!(distance(c, c, method), 0.0, "{hex} under {method}");
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("FF0000", "FE0101"), ("000000", "FFFFFF"), ("12AB34", "9F0E77")];
        for (x, y) in pairs {
            for method in METHODS {
                assert_eq!(
                    distance(lab(x), lab(y), method),
                    distance(lab(y), lab(x), method),
                    "{x}/{y} under {method}"
                );
            }
        }
    }

    #[test]
    fn test_positive_for_distinct_colors() {
        // Differ only in a, only in b, only in L
        let base = Lab::new(50.0, 10.0, 10.0);
        let others = [
            Lab::new(50.0, 10.5, 10.0),
            Lab::new(50.0, 10.0, 9.5),
            Lab::new(50.5, 10.0, 10.0),
        ];
        for other in others {
            for method in METHODS {
                assert!(distance(base, other, method) > 0.0);
            }
        }
    }

    #[test]
    fn test_absolute_is_euclidean() {
        let a = Lab::new(10.0, 0.0, 0.0);
        let b = Lab::new(13.0, 4.0, 0.0);
        assert_eq!(DistanceMethod::Absolute.distance(a, b), 5.0);

        // FF0000 vs 0000FF, cross-checked against an independent computation
        let d = DistanceMethod::Absolute.distance(lab("FF0000"), lab("0000FF"));
        assert!((d - 176.314).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn test_hue_damps_lightness_only() {
        // Pure lightness difference is scaled by k exactly
        let dark = lab("808080");
        let light = lab("A0A0A0");
        let absolute = DistanceMethod::Absolute.distance(dark, light);
        let hue = DistanceMethod::hue().distance(dark, light);
        assert!(hue < absolute);
        assert!((hue - absolute * DEFAULT_LIGHTNESS_DAMPING).abs() < 1e-3);

        // Pure chroma difference is untouched
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(50.0, 3.0, 4.0);
        assert_eq!(DistanceMethod::hue().distance(a, b), 5.0);
        assert_eq!(DistanceMethod::Absolute.distance(a, b), 5.0);
    }

    #[test]
    fn test_hue_prefers_shade_over_other_hue() {
        let grey = lab("808080");
        let light_grey = lab("C0C0C0");
        let dusty_red = lab("8A7070");

        // In absolute terms, the lighter grey is further away than the tinted one...
        assert!(
            DistanceMethod::Absolute.distance(grey, light_grey)
                > DistanceMethod::Absolute.distance(grey, dusty_red)
        );
        // ...but by hue it is the closer one.
        assert!(
            DistanceMethod::hue().distance(grey, light_grey)
                < DistanceMethod::hue().distance(grey, dusty_red)
        );
    }

    #[test]
    fn test_damping_outside_unit_interval_is_rejected() {
        for k in [0.0, -0.1, 1.0, 2.0, f64::NAN, f64::INFINITY] {
            assert!(LightnessDamping::new(k).is_err(), "{k} accepted");
            assert!(DistanceMethod::hue_with(k).is_err(), "{k} accepted");
        }
        assert_eq!(
            LightnessDamping::new(2.0),
            Err(InvalidLightnessDamping(2.0))
        );
    }

    #[test]
    fn test_checked_hue_never_exceeds_absolute() {
        let dark = Lab::new(20.0, 0.0, 0.0);
        let light = Lab::new(80.0, 0.0, 0.0);
        let absolute = DistanceMethod::Absolute.distance(dark, light);

        for k in [1e-6, 0.1, 0.5, 0.999] {
            let hue = DistanceMethod::hue_with(k).unwrap().distance(dark, light);
            assert!(hue > 0.0, "k = {k}");
            assert!(hue < absolute, "k = {k}");
        }
    }

    #[test]
    fn test_default_damping() {
        assert_eq!(LightnessDamping::default().get(), DEFAULT_LIGHTNESS_DAMPING);
        assert_eq!(
            DistanceMethod::hue_with(DEFAULT_LIGHTNESS_DAMPING),
            Ok(DistanceMethod::hue())
        );
    }

    #[test]
    fn test_parse_method_names() {
        assert_eq!("hue".parse::<DistanceMethod>(), Ok(DistanceMethod::hue()));
        assert_eq!("HUE".parse::<DistanceMethod>(), Ok(DistanceMethod::hue()));
        assert_eq!(
            "absolute".parse::<DistanceMethod>(),
            Ok(DistanceMethod::Absolute)
        );
        assert_eq!(
            "Absolute".parse::<DistanceMethod>(),
            Ok(DistanceMethod::Absolute)
        );
    }

    #[test]
    fn test_parse_unknown_method() {
        for name in ["", "euclidean", "hue ", "abs"] {
            assert_eq!(
                name.parse::<DistanceMethod>(),
                Err(UnknownDistanceMethod(name.to_string()))
            );
        }
    }

    #[test]
    fn test_display_round_trips_name() {
        for method in [DistanceMethod::hue(), DistanceMethod::Absolute] {
            assert_eq!(method.to_string().parse::<DistanceMethod>(), Ok(method));
        }
        assert_eq!(DistanceMethod::default(), DistanceMethod::hue());
    }
}
