//! Slider configuration
//!
//! All knobs of the widget live in small serde-backed config structs so that
//! presets can be stored as YAML files. Every struct is `#[serde(default)]`:
//! a preset only has to spell out what it changes.
//!
//! Resolution precedence for every field, applied by [`SliderConfig::resolved`]:
//!
//! 1. explicit quick-param override ([`QuickParams`])
//! 2. nested config field (what the user or a preset set)
//! 3. default constant (`Default` impl of the nested struct)

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::wave::WaveKind;

/// Default widget height in pixels
pub const DEFAULT_HEIGHT: f32 = 60.0;

/// Direction the wave appears to travel while animating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveDirection {
    #[default]
    Left,
    Right,
}

/// Wave geometry and animation parameters
///
/// Exactly one of `wavelength` / `cycles` / `frequency` is effective per
/// span: `wavelength > 0` wins, then `cycles > 0`, then `frequency`. The
/// choice is re-derived on every path generation because `cycles` depends
/// on the current span width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Wave shape
    pub kind: WaveKind,
    /// Peak height in pixels (0 = flat line)
    pub amplitude: f32,
    /// Spatial frequency in radians per pixel
    pub frequency: f32,
    /// Wavelength in pixels (0 = use frequency)
    pub wavelength: f32,
    /// Complete cycles across the active span (0 = use frequency)
    pub cycles: f32,
    /// Phase advance per animation tick
    pub speed: f32,
    /// Apparent travel direction
    pub direction: WaveDirection,
    /// Stroke thickness of the active wave
    pub thickness: f32,
    /// Sampling stride in pixels (lower = smoother, more vertices)
    pub resolution: f32,
    /// Static phase offset in radians
    pub phase_offset: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            kind: WaveKind::Sine,
            amplitude: 8.0,
            frequency: 0.1,
            wavelength: 0.0,
            cycles: 0.0,
            speed: 0.08,
            direction: WaveDirection::Left,
            thickness: 4.0,
            resolution: 2.0,
            phase_offset: 0.0,
        }
    }
}

/// Inactive track styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Stroke thickness of the inactive track
    pub thickness: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self { thickness: 4.0 }
    }
}

/// Thumb shape variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbShape {
    Rectangle,
    Circle,
    #[default]
    RoundedRect,
    Diamond,
    Line,
}

/// Thumb appearance and drag feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbConfig {
    /// Show or hide the thumb
    pub visible: bool,
    /// Thumb shape
    pub shape: ThumbShape,
    /// Thumb width in pixels
    pub width: f32,
    /// Thumb height in pixels
    pub height: f32,
    /// Corner radius for rectangular shapes
    pub border_radius: f32,
    /// Scale factor applied while dragging
    pub scale_on_drag: f32,
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            visible: true,
            shape: ThumbShape::RoundedRect,
            width: 5.0,
            height: 24.0,
            border_radius: 2.0,
            scale_on_drag: 1.2,
        }
    }
}

/// Visual gap between active and inactive segments while dragging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    /// Enable the gap effect
    pub enabled: bool,
    /// Gap size in pixels
    pub size: f32,
    /// Animate the gap in and out; when false the gap snaps to its full
    /// size the moment a drag starts (no interpolation)
    pub animated: bool,
    /// Gap transition duration in milliseconds (timing mode)
    pub animation_duration_ms: f32,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 12.0,
            animated: true,
            animation_duration_ms: 150.0,
        }
    }
}

/// Animation behavior for the wave, gap and thumb transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Use a spring for transitions; false = linear timing
    pub use_spring: bool,
    /// Spring damping
    pub damping: f32,
    /// Spring stiffness
    pub stiffness: f32,
    /// Spring mass
    pub mass: f32,
    /// Timing transition duration in milliseconds
    pub duration_ms: f32,
    /// Animate the wave phase at all
    pub wave_enabled: bool,
    /// Keep the wave moving while playback is paused
    pub animate_when_paused: bool,
    /// Flatten the wave to a straight line while dragging
    pub flatten_on_drag: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            use_spring: true,
            damping: 15.0,
            stiffness: 150.0,
            mass: 1.0,
            duration_ms: 200.0,
            wave_enabled: true,
            animate_when_paused: false,
            flatten_on_drag: true,
        }
    }
}

/// Colors, specified as hex strings so presets stay editable by hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Active (progress) track color
    pub active_color: String,
    /// Inactive (remaining) track color
    pub inactive_color: String,
    /// Thumb color
    pub thumb_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            active_color: "#C9FE00".to_string(),
            inactive_color: "#3F4D10".to_string(),
            thumb_color: "#C9FE00".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn active(&self) -> Color {
        parse_hex_color(&self.active_color)
    }

    pub fn inactive(&self) -> Color {
        parse_hex_color(&self.inactive_color)
    }

    pub fn thumb(&self) -> Color {
        parse_hex_color(&self.thumb_color)
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports "#RRGGBB" or "RRGGBB". Returns white on parse failure.
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }
    let channel = |range| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::from_rgb8(r, g, b),
        _ => {
            log::warn!("Invalid hex color '{}', using white", hex);
            Color::WHITE
        }
    }
}

/// Value range and stepping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Minimum value
    pub min: f32,
    /// Maximum value
    pub max: f32,
    /// Step increment (0 = continuous)
    pub step: f32,
    /// Snap mapped values to step multiples
    pub snap_to_step: bool,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.0,
            snap_to_step: true,
        }
    }
}

impl BoundsConfig {
    /// Continuous bounds from 0 to `max`
    pub fn to_max(max: f32) -> Self {
        Self {
            max,
            ..Self::default()
        }
    }
}

/// How the accessibility adapter formats the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// "42%" relative to max
    #[default]
    PercentOfMax,
    /// The raw value rounded to an integer
    Absolute,
}

/// Screen-reader strings and stepping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Control label announced by screen readers
    pub label: String,
    /// Hint describing the effect of adjusting the control
    pub hint: String,
    /// Value formatting for announcements
    pub format: ValueFormat,
    /// Increment applied by accessibility adjust actions
    pub increment: f32,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            label: "Slider".to_string(),
            hint: "Adjusts the value".to_string(),
            format: ValueFormat::PercentOfMax,
            increment: 0.1,
        }
    }
}

impl AccessibilityConfig {
    /// Format `value` for announcement
    pub fn value_text(&self, value: f32, _min: f32, max: f32) -> String {
        match self.format {
            ValueFormat::PercentOfMax => {
                let percent = if max == 0.0 {
                    0.0
                } else {
                    (value / max) * 100.0
                };
                format!("{}%", percent.round() as i64)
            }
            ValueFormat::Absolute => format!("{}", value.round() as i64),
        }
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub wave: WaveConfig,
    pub track: TrackConfig,
    pub thumb: ThumbConfig,
    pub gap: GapConfig,
    pub animation: AnimationConfig,
    pub theme: ThemeConfig,
    pub accessibility: AccessibilityConfig,
    /// Widget height in pixels (None = default)
    pub height: Option<f32>,
    /// Widget width in pixels (None = fill available space)
    pub width: Option<f32>,
}

impl SliderConfig {
    pub fn height(&self) -> f32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    /// Apply quick-param overrides, returning the resolved config
    ///
    /// Quick params sit at the top of the precedence order: any `Some`
    /// field replaces the corresponding nested config field, whatever it
    /// was set to.
    pub fn resolved(mut self, quick: &QuickParams) -> Self {
        if let Some(amplitude) = quick.amplitude {
            self.wave.amplitude = amplitude;
        }
        if let Some(frequency) = quick.frequency {
            self.wave.frequency = frequency;
        }
        if let Some(speed) = quick.speed {
            self.wave.speed = speed;
        }
        if let Some(thickness) = quick.wave_thickness {
            self.wave.thickness = thickness;
        }
        if let Some(thickness) = quick.track_thickness {
            self.track.thickness = thickness;
        }
        if let Some(width) = quick.thumb_width {
            self.thumb.width = width;
        }
        if let Some(height) = quick.thumb_height {
            self.thumb.height = height;
        }
        if let Some(ref color) = quick.active_color {
            self.theme.active_color = color.clone();
        }
        if let Some(ref color) = quick.inactive_color {
            self.theme.inactive_color = color.clone();
        }
        if let Some(ref color) = quick.thumb_color {
            self.theme.thumb_color = color.clone();
        }
        self
    }
}

/// Flat per-field overrides for the most common customizations
///
/// Callers that only want to recolor the track or tweak the amplitude set a
/// field here instead of building nested configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickParams {
    pub amplitude: Option<f32>,
    pub frequency: Option<f32>,
    pub speed: Option<f32>,
    pub wave_thickness: Option<f32>,
    pub track_thickness: Option<f32>,
    pub thumb_width: Option<f32>,
    pub thumb_height: Option<f32>,
    pub active_color: Option<String>,
    pub inactive_color: Option<String>,
    pub thumb_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = SliderConfig::default();
        assert_eq!(config.wave.amplitude, 8.0);
        assert_eq!(config.wave.frequency, 0.1);
        assert_eq!(config.wave.resolution, 2.0);
        assert_eq!(config.gap.size, 12.0);
        assert!(config.animation.flatten_on_drag);
        assert_eq!(config.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_quick_params_take_precedence() {
        let mut config = SliderConfig::default();
        config.wave.amplitude = 20.0;

        let quick = QuickParams {
            amplitude: Some(3.0),
            active_color: Some("#FF0000".to_string()),
            ..Default::default()
        };
        let resolved = config.resolved(&quick);
        assert_eq!(resolved.wave.amplitude, 3.0);
        assert_eq!(resolved.theme.active_color, "#FF0000");
        // untouched fields keep their configured / default values
        assert_eq!(resolved.wave.frequency, 0.1);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "wave:\n  amplitude: 2.5\n  kind: square\n";
        let config: SliderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.wave.amplitude, 2.5);
        assert_eq!(config.wave.kind, crate::wave::WaveKind::Square);
        // everything unspecified comes from Default
        assert_eq!(config.wave.frequency, 0.1);
        assert_eq!(config.track.thickness, 4.0);
    }

    #[test]
    fn test_hex_color_parsing() {
        let c = parse_hex_color("#C9FE00");
        assert!((c.r - 201.0 / 255.0).abs() < 1e-4);
        assert!((c.g - 254.0 / 255.0).abs() < 1e-4);
        assert_eq!(c.b, 0.0);
        // bare digits also accepted
        assert_eq!(parse_hex_color("000000"), Color::from_rgb8(0, 0, 0));
        // garbage falls back to white
        assert_eq!(parse_hex_color("#zzz"), Color::WHITE);
    }

    #[test]
    fn test_value_text_formats() {
        let access = AccessibilityConfig::default();
        assert_eq!(access.value_text(0.42, 0.0, 1.0), "42%");
        assert_eq!(access.value_text(0.0, 0.0, 0.0), "0%");

        let absolute = AccessibilityConfig {
            format: ValueFormat::Absolute,
            ..Default::default()
        };
        assert_eq!(absolute.value_text(73.6, 0.0, 100.0), "74");
    }
}
