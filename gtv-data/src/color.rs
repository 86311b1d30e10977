//! Colors and the cividis sequential interpolator.

use serde::Serialize;
use std::fmt;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Maps a normalized position in [0, 1] to a color.
pub type Interpolator = fn(f64) -> Rgb;

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Cividis: a blue-to-yellow ramp that stays readable under color vision
/// deficiency. Polynomial fit of the reference colormap; `t` is clamped.
pub fn interpolate_cividis(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let r = -4.54 - t * (35.34 - t * (2381.73 - t * (6402.7 - t * (7024.72 - t * 2710.57))));
    let g = 32.49 + t * (170.73 + t * (52.82 - t * (131.46 - t * (176.58 - t * 67.37))));
    let b = 81.24 + t * (442.36 - t * (2482.43 - t * (6167.24 - t * (6614.94 - t * 2475.67))));
    Rgb(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cividis_endpoints() {
        assert_eq!(interpolate_cividis(0.0), Rgb(0, 32, 81));
        assert_eq!(interpolate_cividis(1.0), Rgb(253, 234, 69));
    }

    #[test]
    fn test_cividis_clamps_input() {
        assert_eq!(interpolate_cividis(-3.0), interpolate_cividis(0.0));
        assert_eq!(interpolate_cividis(7.5), interpolate_cividis(1.0));
        assert_eq!(interpolate_cividis(f64::NAN), interpolate_cividis(0.0));
    }

    #[test]
    fn test_cividis_green_rises() {
        let greens: Vec<u8> = (0..=10)
            .map(|i| interpolate_cividis(i as f64 / 10.0).1)
            .collect();
        assert!(greens.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_display_matches_css() {
        assert_eq!(Rgb(0, 32, 81).to_string(), "rgb(0, 32, 81)");
    }
}
