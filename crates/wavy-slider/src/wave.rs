//! Wave sampling
//!
//! A wave kind plus spatial frequency and phase defines a signed unit
//! oscillator; the path generator scales its samples by the configured
//! amplitude around the track baseline.

use serde::{Deserialize, Deserializer, Serialize};
use std::f32::consts::{PI, TAU};

/// Shape of the animated wave
///
/// Unrecognized values in config/preset files deserialize to `Sine`: wave
/// shape is purely cosmetic, so a stale preset should render rather than fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveKind {
    #[default]
    Sine,
    Cosine,
    Triangle,
    Square,
    Sawtooth,
}

impl<'de> Deserialize<'de> for WaveKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "sine" => Self::Sine,
            "cosine" => Self::Cosine,
            "triangle" => Self::Triangle,
            "square" => Self::Square,
            "sawtooth" => Self::Sawtooth,
            other => {
                log::warn!("Unknown wave kind '{}', using sine", other);
                Self::Sine
            }
        })
    }
}

/// Sample the unit wave at position `x`
///
/// Returns a value in `[-1, 1]`. `Square` returns exactly -1, 0 or 1.
pub fn sample(kind: WaveKind, x: f32, frequency: f32, phase: f32) -> f32 {
    let t = x * frequency + phase;
    match kind {
        WaveKind::Sine => t.sin(),
        WaveKind::Cosine => t.cos(),
        // Arcsine folding of a sine gives a smooth triangular wave
        WaveKind::Triangle => (2.0 / PI) * t.sin().asin(),
        WaveKind::Square => {
            let s = t.sin();
            if s > 0.0 {
                1.0
            } else if s < 0.0 {
                -1.0
            } else {
                0.0
            }
        }
        WaveKind::Sawtooth => {
            let u = t / TAU;
            2.0 * (u - (0.5 + u).floor())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_sine_and_cosine_quadrature() {
        // cos(x) == sin(x + pi/2)
        for x in [0.0, 1.0, 3.7, 12.0] {
            let c = sample(WaveKind::Cosine, x, 0.5, 0.0);
            let s = sample(WaveKind::Sine, x, 0.5, FRAC_PI_2);
            assert!((c - s).abs() < 1e-5);
        }
    }

    #[test]
    fn test_triangle_peaks_and_zeros() {
        // frequency 1, phase 0: peak at pi/2, zero at 0 and pi
        assert!(sample(WaveKind::Triangle, 0.0, 1.0, 0.0).abs() < 1e-6);
        assert!((sample(WaveKind::Triangle, FRAC_PI_2, 1.0, 0.0) - 1.0).abs() < 1e-5);
        assert!(sample(WaveKind::Triangle, PI, 1.0, 0.0).abs() < 1e-5);
    }

    #[test]
    fn test_square_is_exact() {
        for i in 0..100 {
            let x = i as f32 * 0.37;
            let s = sample(WaveKind::Square, x, 0.13, 0.0);
            assert!(s == 1.0 || s == -1.0 || s == 0.0, "got {s}");
        }
        // sin(0) == 0 -> square sample is exactly 0
        assert_eq!(sample(WaveKind::Square, 0.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_sawtooth_range_and_ramp() {
        // Ramps from 0 at phase 0 up toward 1, wraps to -1
        assert!(sample(WaveKind::Sawtooth, 0.0, 1.0, 0.0).abs() < 1e-6);
        assert!((sample(WaveKind::Sawtooth, PI * 0.5, 1.0, 0.0) - 0.5).abs() < 1e-5);
        for i in 0..200 {
            let x = i as f32 * 0.11;
            let s = sample(WaveKind::Sawtooth, x, 0.7, 0.3);
            assert!((-1.0..1.0 + 1e-6).contains(&s));
        }
    }

    #[test]
    fn test_unknown_kind_falls_back_to_sine() {
        let kind: WaveKind = serde_yaml::from_str("zigzag").unwrap();
        assert_eq!(kind, WaveKind::Sine);
        let kind: WaveKind = serde_yaml::from_str("square").unwrap();
        assert_eq!(kind, WaveKind::Square);
    }
}
