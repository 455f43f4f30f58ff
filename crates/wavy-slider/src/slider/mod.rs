//! The wavy slider widget state
//!
//! Following the idiomatic split used across this workspace: a plain state
//! struct owned by the application, a canvas program translating pointer
//! events into [`SliderEvent`]s, and a view function wiring them together.
//!
//! ```rust,ignore
//! // App state
//! let mut slider = WavySlider::new(30.0, BoundsConfig::to_max(100.0), SliderConfig::default());
//!
//! // View
//! wavy_slider(&slider, Message::Slider)
//!
//! // Update
//! if let Some(value) = slider.handle_event(event) {
//!     // value changed during a drag
//! }
//!
//! // Frame subscription
//! slider.tick(1.0 / 60.0);
//! ```

mod canvas;
mod view;

pub use canvas::{DragInteraction, SliderCanvas};
pub use view::wavy_slider;

use crate::animation::{Phase, Transition, TransitionMode};
use crate::config::{AnimationConfig, BoundsConfig, SliderConfig, WaveDirection};
use crate::math::{clamp, denormalize, normalize, snap_to_step, trunc2};
use crate::path::{self, PathPair};

use iced::Point;

/// Pointer events delivered by the canvas program
///
/// `x` is the pointer offset in local coordinates, already clamped to
/// `[0, width]` and truncated to whole pixels; `width` is the measured
/// container width at the time of the event (0 while layout is pending).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    Pressed { x: f32, width: f32 },
    Moved { x: f32, width: f32 },
    Released,
}

/// Thumb placement and progress extent for one render pass
///
/// All coordinates truncated to 2 decimals before leaving the geometry
/// core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub thumb_x: f32,
    pub thumb_y: f32,
    pub baseline_y: f32,
    pub progress_width: f32,
}

/// Rounded values and formatted text handed to the platform accessibility
/// adapter
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityInfo {
    pub label: String,
    pub hint: String,
    pub min: i32,
    pub max: i32,
    pub value: i32,
    pub text: String,
    /// Step applied by [`WavySlider::adjust`] for assistive increment /
    /// decrement actions
    pub increment: f32,
}

/// Map a horizontal pointer offset to a domain value
///
/// Precondition: `container_width > 0` — callers suppress mapping entirely
/// while layout is unmeasured instead of producing a degenerate value.
/// Snapping applies only when `step > 0` and enabled; the result always
/// lies in `[min, max]`.
pub fn map_offset_to_value(offset_x: f32, container_width: f32, bounds: &BoundsConfig) -> f32 {
    debug_assert!(container_width > 0.0);
    let ratio = offset_x / container_width;
    let raw = denormalize(ratio, bounds.min, bounds.max);
    let clamped = clamp(raw, bounds.min, bounds.max);
    if bounds.step > 0.0 && bounds.snap_to_step {
        clamp(
            snap_to_step(clamped, bounds.step, bounds.min),
            bounds.min,
            bounds.max,
        )
    } else {
        clamped
    }
}

/// Compute thumb placement and progress extent
///
/// A degenerate range (`max == min`) yields ratio 0 rather than dividing
/// by zero.
pub fn compute_dimensions(
    value: f32,
    min: f32,
    max: f32,
    container_width: f32,
    container_height: f32,
    thumb_width: f32,
    thumb_height: f32,
) -> Dimensions {
    let ratio = normalize(value, min, max);
    let baseline_y = container_height / 2.0;
    let progress_width = container_width * ratio;
    Dimensions {
        thumb_x: trunc2(progress_width - thumb_width / 2.0),
        thumb_y: trunc2(baseline_y - thumb_height / 2.0),
        baseline_y: trunc2(baseline_y),
        progress_width: trunc2(progress_width),
    }
}

/// Stateful wavy slider
///
/// Owns the committed value, the wave phase accumulator, and the gap/thumb
/// transition scalars. One instance per slider on screen; instances share
/// nothing.
#[derive(Debug, Clone)]
pub struct WavySlider {
    config: SliderConfig,
    bounds: BoundsConfig,
    value: f32,
    /// Last value handed to the caller; equal values are suppressed so a
    /// continuous drag does not re-notify every frame
    last_emitted: f32,
    playing: bool,
    dragging: bool,
    phase: Phase,
    gap_size: Transition,
    thumb_scale: Transition,
}

impl WavySlider {
    pub fn new(value: f32, bounds: BoundsConfig, config: SliderConfig) -> Self {
        let value = clamp(value, bounds.min, bounds.max);
        let gap_mode = gap_transition_mode(&config);
        let thumb_mode = thumb_transition_mode(&config.animation);
        Self {
            config,
            bounds,
            value,
            last_emitted: value,
            playing: false,
            dragging: false,
            phase: Phase::new(),
            gap_size: Transition::new(0.0, gap_mode),
            thumb_scale: Transition::new(1.0, thumb_mode),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value programmatically (playback progress, reset)
    pub fn set_value(&mut self, value: f32) {
        let value = clamp(value, self.bounds.min, self.bounds.max);
        self.value = value;
        self.last_emitted = value;
    }

    pub fn bounds(&self) -> &BoundsConfig {
        &self.bounds
    }

    pub fn set_bounds(&mut self, bounds: BoundsConfig) {
        self.bounds = bounds;
        self.set_value(self.value);
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the configuration, rebuilding the transition modes
    pub fn set_config(&mut self, config: SliderConfig) {
        self.gap_size = Transition::new(self.gap_size.value(), gap_transition_mode(&config));
        self.thumb_scale =
            Transition::new(self.thumb_scale.value(), thumb_transition_mode(&config.animation));
        self.config = config;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Playing state: the wave animates while playing (or always, with
    /// `animate_when_paused`)
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn phase(&self) -> f32 {
        self.phase.value()
    }

    /// Current thumb scale factor (animates toward `scale_on_drag` during a
    /// drag)
    pub fn thumb_scale(&self) -> f32 {
        self.thumb_scale.value()
    }

    /// Advance the animation by one frame of `dt` seconds
    ///
    /// Phase moves by the configured per-frame speed, signed by direction;
    /// the gap and thumb transitions integrate over `dt`.
    pub fn tick(&mut self, dt: f32) {
        let animation = &self.config.animation;
        if animation.wave_enabled && (self.playing || animation.animate_when_paused) {
            let delta = match self.config.wave.direction {
                WaveDirection::Left => -self.config.wave.speed,
                WaveDirection::Right => self.config.wave.speed,
            };
            self.phase.advance(delta);
        }
        self.gap_size.step(dt);
        self.thumb_scale.step(dt);
    }

    /// Feed a pointer event through the gesture mapper
    ///
    /// Returns the new value when it changed, `None` otherwise (no drag in
    /// progress, unmeasured layout, or a duplicate of the last emission).
    /// A drag may be abandoned without a `Released` event ever arriving;
    /// nothing here depends on the terminal event beyond visual feedback.
    pub fn handle_event(&mut self, event: SliderEvent) -> Option<f32> {
        match event {
            SliderEvent::Pressed { x, width } => {
                if width <= 0.0 {
                    // Layout has not completed; suppress the mapping
                    return None;
                }
                self.dragging = true;
                self.begin_drag_feedback();
                self.apply_offset(x, width)
            }
            SliderEvent::Moved { x, width } => {
                if !self.dragging || width <= 0.0 {
                    return None;
                }
                self.apply_offset(x, width)
            }
            SliderEvent::Released => {
                self.dragging = false;
                self.end_drag_feedback();
                None
            }
        }
    }

    fn apply_offset(&mut self, x: f32, width: f32) -> Option<f32> {
        let value = map_offset_to_value(x, width, &self.bounds);
        if value == self.last_emitted {
            return None;
        }
        self.last_emitted = value;
        self.value = value;
        Some(value)
    }

    fn begin_drag_feedback(&mut self) {
        self.thumb_scale.retarget(self.config.thumb.scale_on_drag);
        let gap = &self.config.gap;
        if gap.enabled {
            if gap.animated {
                self.gap_size.retarget(gap.size);
            } else {
                // No interpolation without `animated`: the gap appears at
                // full size on the first dragged frame
                self.gap_size.set(gap.size);
            }
        }
    }

    fn end_drag_feedback(&mut self) {
        self.thumb_scale.retarget(1.0);
        if self.config.gap.enabled {
            self.gap_size.retarget(0.0);
        }
    }

    /// Thumb placement for the given measured size
    pub fn dimensions(&self, container_width: f32, container_height: f32) -> Dimensions {
        compute_dimensions(
            self.value,
            self.bounds.min,
            self.bounds.max,
            container_width,
            container_height,
            self.config.thumb.width,
            self.config.thumb.height,
        )
    }

    /// Active and inactive track polylines for the given measured size
    ///
    /// An unmeasured container (width 0) short-circuits to empty polylines.
    pub fn track_polylines(&self, container_width: f32, container_height: f32) -> (Vec<Point>, Vec<Point>) {
        if container_width <= 0.0 {
            return (Vec::new(), Vec::new());
        }
        let dims = self.dimensions(container_width, container_height);
        let mut gap = self.config.gap.clone();
        gap.size = self.gap_size.value();
        path::segment_polylines(
            container_width,
            dims.progress_width,
            dims.baseline_y,
            &self.config.wave,
            self.phase.value(),
            self.dragging,
            &gap,
            self.config.animation.flatten_on_drag,
            self.config.track.thickness,
        )
    }

    /// String form of [`Self::track_polylines`], the contract consumed by
    /// path-based rendering surfaces
    pub fn track_paths(&self, container_width: f32, container_height: f32) -> PathPair {
        let (active, inactive) = self.track_polylines(container_width, container_height);
        PathPair {
            active: path::to_path_string(&active),
            inactive: path::to_path_string(&inactive),
        }
    }

    /// Nudge the value by the accessibility increment (negative `steps` =
    /// decrement)
    ///
    /// The entry point for assistive "adjustable" actions, which adjust the
    /// value without a pointer gesture. Returns the new value when it
    /// changed.
    pub fn adjust(&mut self, steps: i32) -> Option<f32> {
        let increment = self.config.accessibility.increment;
        let target = clamp(
            self.value + steps as f32 * increment,
            self.bounds.min,
            self.bounds.max,
        );
        if target == self.value {
            return None;
        }
        self.value = target;
        self.last_emitted = target;
        Some(target)
    }

    /// Values and text for the platform accessibility adapter
    pub fn accessibility(&self) -> AccessibilityInfo {
        let access = &self.config.accessibility;
        AccessibilityInfo {
            label: access.label.clone(),
            hint: access.hint.clone(),
            min: self.bounds.min.round() as i32,
            max: self.bounds.max.round() as i32,
            value: self.value.round() as i32,
            text: access.value_text(self.value, self.bounds.min, self.bounds.max),
            increment: access.increment,
        }
    }
}

fn gap_transition_mode(config: &SliderConfig) -> TransitionMode {
    if config.animation.use_spring {
        spring_mode(&config.animation)
    } else {
        TransitionMode::Timing {
            duration_ms: config.gap.animation_duration_ms,
        }
    }
}

fn thumb_transition_mode(animation: &AnimationConfig) -> TransitionMode {
    if animation.use_spring {
        spring_mode(animation)
    } else {
        TransitionMode::Timing {
            duration_ms: animation.duration_ms,
        }
    }
}

fn spring_mode(animation: &AnimationConfig) -> TransitionMode {
    TransitionMode::Spring {
        damping: animation.damping,
        stiffness: animation.stiffness,
        mass: animation.mass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GapConfig, SliderConfig};
    use crate::math::normalize;

    fn continuous_bounds() -> BoundsConfig {
        BoundsConfig::to_max(100.0)
    }

    #[test]
    fn test_mapping_round_trips_through_normalize() {
        let bounds = continuous_bounds();
        let width = 320.0;
        for value in [0.0, 12.5, 50.0, 99.0, 100.0] {
            let offset = normalize(value, bounds.min, bounds.max) * width;
            let mapped = map_offset_to_value(offset, width, &bounds);
            assert!((mapped - value).abs() < 1e-3, "value {value} mapped to {mapped}");
        }
    }

    #[test]
    fn test_mapping_snaps_to_step_multiples() {
        let bounds = BoundsConfig {
            min: 10.0,
            max: 20.0,
            step: 0.5,
            snap_to_step: true,
        };
        let width = 300.0;
        for px in 0..=300 {
            let value = map_offset_to_value(px as f32, width, &bounds);
            assert!((bounds.min..=bounds.max).contains(&value));
            let steps = (value - bounds.min) / bounds.step;
            assert!((steps - steps.round()).abs() < 1e-3, "{value} is off-step");
        }
    }

    #[test]
    fn test_mapping_ignores_step_when_snapping_disabled() {
        let bounds = BoundsConfig {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            snap_to_step: false,
        };
        let value = map_offset_to_value(33.0, 100.0, &bounds);
        assert!((value - 3.3).abs() < 1e-4);
    }

    #[test]
    fn test_drag_lifecycle_emits_and_dedups() {
        let mut slider = WavySlider::new(0.0, continuous_bounds(), SliderConfig::default());

        assert_eq!(slider.handle_event(SliderEvent::Pressed { x: 50.0, width: 100.0 }), Some(50.0));
        assert!(slider.is_dragging());
        // same offset again: suppressed
        assert_eq!(slider.handle_event(SliderEvent::Moved { x: 50.0, width: 100.0 }), None);
        assert_eq!(slider.handle_event(SliderEvent::Moved { x: 75.0, width: 100.0 }), Some(75.0));
        assert_eq!(slider.handle_event(SliderEvent::Released), None);
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 75.0);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut slider = WavySlider::new(0.0, continuous_bounds(), SliderConfig::default());
        assert_eq!(slider.handle_event(SliderEvent::Moved { x: 10.0, width: 100.0 }), None);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_unmeasured_layout_suppresses_mapping() {
        let mut slider = WavySlider::new(25.0, continuous_bounds(), SliderConfig::default());
        assert_eq!(slider.handle_event(SliderEvent::Pressed { x: 10.0, width: 0.0 }), None);
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 25.0);
    }

    #[test]
    fn test_abandoned_drag_needs_no_terminal_event() {
        let mut slider = WavySlider::new(0.0, continuous_bounds(), SliderConfig::default());
        slider.handle_event(SliderEvent::Pressed { x: 30.0, width: 100.0 });
        // interaction interrupted: the committed value stays where it was
        assert_eq!(slider.value(), 30.0);
        // a later press starts a fresh interaction
        assert_eq!(slider.handle_event(SliderEvent::Pressed { x: 60.0, width: 100.0 }), Some(60.0));
    }

    #[test]
    fn test_dimensions_degenerate_range() {
        let dims = compute_dimensions(0.0, 0.0, 0.0, 200.0, 60.0, 5.0, 24.0);
        assert_eq!(dims.progress_width, 0.0);
        assert_eq!(dims.baseline_y, 30.0);
        assert_eq!(dims.thumb_x, -2.5);
        assert_eq!(dims.thumb_y, 18.0);
    }

    #[test]
    fn test_dimensions_truncate_to_hundredths() {
        let dims = compute_dimensions(1.0, 0.0, 3.0, 100.0, 61.0, 5.0, 24.0);
        // 100/3 = 33.333... truncated, not rounded
        assert_eq!(dims.progress_width, 33.33);
        assert_eq!(dims.baseline_y, 30.5);
    }

    #[test]
    fn test_non_animated_gap_is_immediate() {
        let mut config = SliderConfig::default();
        config.gap = GapConfig {
            animated: false,
            ..GapConfig::default()
        };
        let mut slider = WavySlider::new(50.0, continuous_bounds(), config);
        slider.handle_event(SliderEvent::Pressed { x: 50.0, width: 100.0 });
        // full size without any ticks elapsing
        let (active, inactive) = slider.track_polylines(100.0, 60.0);
        assert_eq!(active.last().unwrap().x, 38.0);
        assert_eq!(inactive.first().unwrap().x, 62.0);
    }

    #[test]
    fn test_animated_gap_grows_over_ticks() {
        let mut slider = WavySlider::new(50.0, continuous_bounds(), SliderConfig::default());
        slider.handle_event(SliderEvent::Pressed { x: 50.0, width: 100.0 });
        let (active_before, _) = slider.track_polylines(100.0, 60.0);
        // spring starts at 0: segments still touch on the first frame
        assert_eq!(active_before.last().unwrap().x, 50.0);
        for _ in 0..240 {
            slider.tick(1.0 / 60.0);
        }
        let (active_after, inactive_after) = slider.track_polylines(100.0, 60.0);
        assert!((active_after.last().unwrap().x - 38.0).abs() < 0.1);
        assert!((inactive_after.first().unwrap().x - 62.0).abs() < 0.1);
    }

    #[test]
    fn test_track_polylines_short_circuit_when_unmeasured() {
        let slider = WavySlider::new(50.0, continuous_bounds(), SliderConfig::default());
        let (active, inactive) = slider.track_polylines(0.0, 60.0);
        assert!(active.is_empty());
        assert!(inactive.is_empty());
    }

    #[test]
    fn test_track_paths_match_composer_contract() {
        let slider = WavySlider::new(50.0, continuous_bounds(), SliderConfig::default());
        let paths = slider.track_paths(100.0, 60.0);
        // idle: wave active segment ends exactly at the progress position
        let tokens: Vec<&str> = paths.active.split_whitespace().collect();
        assert_eq!(tokens[tokens.len() - 2], "50.00");
        assert!(paths.inactive.starts_with("M 50.00"));
    }

    #[test]
    fn test_set_config_keeps_animated_scalars() {
        let mut slider = WavySlider::new(50.0, continuous_bounds(), SliderConfig::default());
        slider.handle_event(SliderEvent::Pressed { x: 60.0, width: 100.0 });
        for _ in 0..30 {
            slider.tick(1.0 / 60.0);
        }
        let scale = slider.thumb_scale();
        let mut config = SliderConfig::default();
        config.animation.use_spring = false;
        slider.set_config(config);
        // swapping configs must not visually jump the thumb
        assert_eq!(slider.thumb_scale(), scale);
    }

    #[test]
    fn test_set_value_clamps_and_resets_dedup() {
        let mut slider = WavySlider::new(0.0, continuous_bounds(), SliderConfig::default());
        slider.set_value(150.0);
        assert_eq!(slider.value(), 100.0);
        // the externally set value becomes the dedup reference
        assert_eq!(slider.handle_event(SliderEvent::Pressed { x: 100.0, width: 100.0 }), None);
    }

    #[test]
    fn test_accessibility_info() {
        let slider = WavySlider::new(42.4, continuous_bounds(), SliderConfig::default());
        let info = slider.accessibility();
        assert_eq!(info.label, "Slider");
        assert_eq!(info.min, 0);
        assert_eq!(info.max, 100);
        assert_eq!(info.value, 42);
        assert_eq!(info.text, "42%");
        assert_eq!(info.increment, 0.1);
    }

    #[test]
    fn test_adjust_applies_configured_increment() {
        let mut config = SliderConfig::default();
        config.accessibility.increment = 5.0;
        let mut slider = WavySlider::new(50.0, continuous_bounds(), config);

        assert_eq!(slider.adjust(1), Some(55.0));
        assert_eq!(slider.adjust(-2), Some(45.0));
        // clamps at the range edge, then further decrements are no-ops
        assert_eq!(slider.adjust(-10), Some(0.0));
        assert_eq!(slider.adjust(-1), None);
        // adjusted value becomes the drag dedup reference
        assert_eq!(slider.handle_event(SliderEvent::Pressed { x: 0.0, width: 100.0 }), None);
    }

    #[test]
    fn test_phase_advances_only_while_playing() {
        let mut slider = WavySlider::new(0.0, continuous_bounds(), SliderConfig::default());
        slider.tick(1.0 / 60.0);
        assert_eq!(slider.phase(), 0.0);

        slider.set_playing(true);
        slider.tick(1.0 / 60.0);
        // default direction is Left: phase runs negative
        assert!((slider.phase() + 0.08).abs() < 1e-5);
    }
}
