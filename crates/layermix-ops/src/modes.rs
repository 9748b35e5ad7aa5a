//! The blend-mode catalog.
//!
//! Each mode is a pure elementwise formula over two values `a` (base, the
//! bottom layer) and `b` (blend, the top layer) in [0, 1]. The catalog is
//! closed: modes carry no state and no identity beyond their name and
//! formula.
//!
//! Formulas follow the classic Photoshop blend-mode equations. Modes built
//! on division or unbounded addition can leave [0, 1]; those report
//! [`BlendMode::clips`] and get their output clamped by the pipeline. Every
//! division carries a guard branch, so no mode ever divides by zero.
//!
//! # Example
//!
//! ```rust
//! use layermix_ops::BlendMode;
//!
//! let v = BlendMode::Screen.value(0.5, 0.5);
//! assert!((v - 0.75).abs() < 1e-6);
//!
//! let mode: BlendMode = "color_burn".parse().unwrap();
//! assert_eq!(mode, BlendMode::ColorBurn);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A blending algorithm from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Replace the base value with the blend value.
    Replace,
    /// Keep the darker of the two values.
    Darker,
    /// Keep the lighter of the two values.
    Lighter,
    /// Multiply the values, darkening the image.
    #[default]
    Multiply,
    /// Inverse multiply, brightening the image.
    Screen,
    /// Darker than multiply, with higher contrast.
    ColorBurn,
    /// Darker than multiply, with more contrast in the shadows.
    LinearBurn,
    /// Brighter than screen, with decreased contrast.
    ColorDodge,
    /// Additive brightening, stronger than screen.
    LinearDodge,
    /// Absolute difference of the two values.
    Difference,
    /// Like difference, tending toward gray rather than black.
    Exclusion,
    /// The blend layer as a harsh light on the base.
    HardLight,
    /// Threshold to pure black or white; best used faded or masked.
    HardMix,
    /// Linear dodge and linear burn combined.
    LinearLight,
    /// Screen and multiply combined.
    Overlay,
    /// Lighten and darken combined.
    PinLight,
    /// Like overlay, biased toward the blend value.
    SoftLight,
    /// Color dodge and color burn combined; suits faded color grading.
    VividLight,
}

/// The string did not name a catalog mode.
#[derive(Debug, Error)]
#[error("unknown blend mode: {0}")]
pub struct ParseModeError(String);

impl BlendMode {
    /// Every mode in the catalog, in catalog order.
    pub const ALL: [BlendMode; 18] = [
        BlendMode::Replace,
        BlendMode::Darker,
        BlendMode::Lighter,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::ColorBurn,
        BlendMode::LinearBurn,
        BlendMode::ColorDodge,
        BlendMode::LinearDodge,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::HardLight,
        BlendMode::HardMix,
        BlendMode::LinearLight,
        BlendMode::Overlay,
        BlendMode::PinLight,
        BlendMode::SoftLight,
        BlendMode::VividLight,
    ];

    /// Evaluates the mode's formula for one pair of values.
    ///
    /// Inputs are assumed to be in [0, 1]. The result may leave that range
    /// for modes that report [`clips`](Self::clips).
    #[inline]
    pub fn value(self, a: f32, b: f32) -> f32 {
        match self {
            Self::Replace => b,
            Self::Darker => a.min(b),
            Self::Lighter => a.max(b),
            Self::Multiply => a * b,
            Self::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            Self::ColorBurn => {
                if b != 0.0 {
                    1.0 - (1.0 - a) / b
                } else {
                    0.0
                }
            }
            Self::LinearBurn => a + b - 1.0,
            Self::ColorDodge => {
                if b != 1.0 {
                    a / (1.0 - b)
                } else {
                    1.0
                }
            }
            Self::LinearDodge => a + b,
            Self::Difference => (a - b).abs(),
            Self::Exclusion => a + b - 2.0 * a * b,
            // Both key the branch on the base value.
            Self::HardLight | Self::Overlay => {
                if a < 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            }
            // The tie a == 1 - b lands in the dark branch.
            Self::HardMix => {
                if a > 1.0 - b {
                    1.0
                } else {
                    0.0
                }
            }
            Self::LinearLight => b + 2.0 * a - 1.0,
            Self::PinLight => {
                if b < 2.0 * a - 1.0 {
                    2.0 * a - 1.0
                } else if b > 2.0 * a {
                    2.0 * a
                } else {
                    b
                }
            }
            Self::SoftLight => {
                if a < 0.5 {
                    (2.0 * a - 1.0) * (b - b * b) + b
                } else {
                    (2.0 * a - 1.0) * (b.sqrt() - b) + b
                }
            }
            // a at exactly 0 or 1 would divide by zero; both map to 0.
            Self::VividLight => {
                if a == 0.0 || a == 1.0 {
                    0.0
                } else if a <= 0.5 {
                    1.0 - (1.0 - b) / (2.0 * a)
                } else {
                    b / (2.0 * (1.0 - a))
                }
            }
        }
    }

    /// Whether the raw formula can leave [0, 1] and needs output clipping.
    ///
    /// Pure replacement and min/max/multiply formulas are self-bounded;
    /// everything else passes through the clipping stage. `difference` is
    /// self-bounded too but kept in the clipped set with the rest of the
    /// inversion modes.
    #[inline]
    pub fn clips(self) -> bool {
        !matches!(
            self,
            Self::Replace | Self::Darker | Self::Lighter | Self::Multiply
        )
    }

    /// The canonical snake_case name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Darker => "darker",
            Self::Lighter => "lighter",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::ColorBurn => "color_burn",
            Self::LinearBurn => "linear_burn",
            Self::ColorDodge => "color_dodge",
            Self::LinearDodge => "linear_dodge",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::HardLight => "hard_light",
            Self::HardMix => "hard_mix",
            Self::LinearLight => "linear_light",
            Self::Overlay => "overlay",
            Self::PinLight => "pin_light",
            Self::SoftLight => "soft_light",
            Self::VividLight => "vivid_light",
        }
    }

    /// A one-line description of the mode's visual effect.
    pub fn description(self) -> &'static str {
        match self {
            Self::Replace => "replace the base values with the blend values",
            Self::Darker => "keep the darker value at each pixel",
            Self::Lighter => "keep the lighter value at each pixel",
            Self::Multiply => "multiply values; useful for shadows",
            Self::Screen => "inverse multiply; brightens overall",
            Self::ColorBurn => "like multiply, darker and higher contrast",
            Self::LinearBurn => "darker, with more contrast in the shadows",
            Self::ColorDodge => "like screen, brighter with less contrast",
            Self::LinearDodge => "additive; stronger than screen",
            Self::Difference => "absolute difference; useful for alignment",
            Self::Exclusion => "like difference, tending toward gray",
            Self::HardLight => "harsh light from the blend layer",
            Self::HardMix => "threshold to black or white",
            Self::LinearLight => "linear dodge and linear burn combined",
            Self::Overlay => "screen and multiply combined",
            Self::PinLight => "lighten and darken combined",
            Self::SoftLight => "soft overlay biased toward the blend value",
            Self::VividLight => "dodge and burn combined; grade when faded",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = ParseModeError;

    /// Parses a canonical mode name; hyphens are accepted for underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_replace_takes_blend_value() {
        assert_eq!(BlendMode::Replace.value(0.3, 0.8), 0.8);
    }

    #[test]
    fn test_darker_lighter_are_duals() {
        for &(a, b) in &[(0.0, 1.0), (0.25, 0.75), (0.6, 0.6), (1.0, 0.1)] {
            assert_eq!(BlendMode::Darker.value(a, b), BlendMode::Darker.value(b, a));
            assert_eq!(BlendMode::Lighter.value(a, b), BlendMode::Lighter.value(b, a));
            // together they partition the pair
            assert_eq!(
                BlendMode::Darker.value(a, b) + BlendMode::Lighter.value(a, b),
                a + b
            );
        }
    }

    #[test]
    fn test_multiply_and_screen() {
        assert_abs_diff_eq!(BlendMode::Multiply.value(0.8, 0.5), 0.4);
        assert_abs_diff_eq!(BlendMode::Screen.value(0.5, 0.5), 0.75);
        // screen is the inverse of multiply
        let (a, b) = (0.3, 0.7);
        assert_abs_diff_eq!(
            BlendMode::Screen.value(a, b),
            1.0 - BlendMode::Multiply.value(1.0 - a, 1.0 - b),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_color_burn_guards_zero_blend() {
        assert_eq!(BlendMode::ColorBurn.value(0.3, 0.0), 0.0);
        assert_abs_diff_eq!(BlendMode::ColorBurn.value(0.75, 0.5), 0.5);
    }

    #[test]
    fn test_color_dodge_guards_full_blend() {
        assert_eq!(BlendMode::ColorDodge.value(0.3, 1.0), 1.0);
        assert_abs_diff_eq!(BlendMode::ColorDodge.value(0.25, 0.5), 0.5);
    }

    #[test]
    fn test_linear_modes_overshoot() {
        assert_abs_diff_eq!(BlendMode::LinearDodge.value(0.5, 1.0), 1.5);
        assert_abs_diff_eq!(BlendMode::LinearBurn.value(0.25, 0.25), -0.5);
        assert!(BlendMode::LinearDodge.clips());
        assert!(BlendMode::LinearBurn.clips());
    }

    #[test]
    fn test_difference_and_exclusion() {
        assert_abs_diff_eq!(BlendMode::Difference.value(0.25, 0.75), 0.5);
        assert_abs_diff_eq!(BlendMode::Difference.value(0.75, 0.25), 0.5);
        // exclusion of equal mid-grays tends toward gray
        assert_abs_diff_eq!(BlendMode::Exclusion.value(0.5, 0.5), 0.5);
        assert_abs_diff_eq!(BlendMode::Exclusion.value(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_hard_light_branches() {
        // dark base: 2ab
        assert_abs_diff_eq!(BlendMode::HardLight.value(0.25, 0.5), 0.25);
        // light base: 1 - 2(1-a)(1-b)
        assert_abs_diff_eq!(BlendMode::HardLight.value(0.75, 0.5), 0.75);
        // overlay shares the formula
        assert_eq!(
            BlendMode::Overlay.value(0.25, 0.5),
            BlendMode::HardLight.value(0.25, 0.5)
        );
    }

    #[test]
    fn test_hard_mix_thresholds() {
        assert_eq!(BlendMode::HardMix.value(0.75, 0.75), 1.0);
        assert_eq!(BlendMode::HardMix.value(0.25, 0.25), 0.0);
        // tie a == 1 - b resolves dark
        assert_eq!(BlendMode::HardMix.value(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_pin_light_branches() {
        // b < 2a - 1 -> 2a - 1
        assert_abs_diff_eq!(BlendMode::PinLight.value(0.9, 0.1), 0.8);
        // b > 2a -> 2a
        assert_abs_diff_eq!(BlendMode::PinLight.value(0.1, 0.9), 0.2);
        // otherwise keep b
        assert_abs_diff_eq!(BlendMode::PinLight.value(0.5, 0.5), 0.5);
    }

    #[test]
    fn test_soft_light_branches() {
        // a < 0.5: (2a-1)(b - b^2) + b
        assert_abs_diff_eq!(
            BlendMode::SoftLight.value(0.25, 0.5),
            (2.0 * 0.25 - 1.0) * (0.5 - 0.25) + 0.5
        );
        // a >= 0.5: (2a-1)(sqrt(b) - b) + b
        let expected = (2.0 * 0.75f32 - 1.0) * (0.5f32.sqrt() - 0.5) + 0.5;
        assert_abs_diff_eq!(BlendMode::SoftLight.value(0.75, 0.5), expected);
    }

    #[test]
    fn test_vivid_light_guards() {
        assert_eq!(BlendMode::VividLight.value(0.0, 0.5), 0.0);
        assert_eq!(BlendMode::VividLight.value(1.0, 0.5), 0.0);
        // dark half: 1 - (1-b)/(2a)
        assert_abs_diff_eq!(BlendMode::VividLight.value(0.5, 0.75), 0.75);
        // light half: b / (2(1-a))
        assert_abs_diff_eq!(BlendMode::VividLight.value(0.75, 0.25), 0.5);
    }

    #[test]
    fn test_clips_metadata() {
        for mode in BlendMode::ALL {
            let bounded = matches!(
                mode,
                BlendMode::Replace | BlendMode::Darker | BlendMode::Lighter | BlendMode::Multiply
            );
            assert_eq!(mode.clips(), !bounded, "{mode}");
        }
    }

    #[test]
    fn test_round_trip_names() {
        for mode in BlendMode::ALL {
            let parsed: BlendMode = mode.name().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert_eq!("Vivid-Light".parse::<BlendMode>().unwrap(), BlendMode::VividLight);
        assert!("plasma".parse::<BlendMode>().is_err());
    }
}
