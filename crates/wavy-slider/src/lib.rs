//! Animated wavy progress slider widget for iced
//!
//! A draggable slider whose active (progress) segment renders as an
//! animated wave, with a movable thumb, a configurable "gap" effect that
//! breaks the track apart while dragging, and a large surface of visual
//! configuration (wave shape, track, thumb, theme, presets).
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State struct**: [`WavySlider`] is pure data owned by the application
//! - **View function**: [`wavy_slider`] takes state + a callback, returns
//!   `Element<Message>`
//! - **Canvas Program**: [`SliderCanvas`] handles custom rendering and
//!   event-to-callback translation
//!
//! The geometry core (wave sampling, path generation, gesture-to-value
//! mapping) is a set of pure functions, callable at any frequency, with no
//! state beyond the phase accumulator the application ticks once per frame.
//!
//! ```rust,ignore
//! use wavy_slider::{wavy_slider, BoundsConfig, SliderConfig, SliderEvent, WavySlider};
//!
//! // App state
//! let mut slider = WavySlider::new(0.0, BoundsConfig::to_max(100.0), SliderConfig::default());
//!
//! // view()
//! wavy_slider(&slider, Message::Slider)
//!
//! // update()
//! Message::Slider(event) => {
//!     if let Some(value) = slider.handle_event(event) {
//!         // react to the new value
//!     }
//! }
//! Message::Tick => slider.tick(1.0 / 60.0),
//! ```

pub mod animation;
pub mod config;
pub mod math;
pub mod path;
pub mod presets;
pub mod slider;
pub mod wave;

// Widget state, events and view function
pub use slider::{
    compute_dimensions, map_offset_to_value, wavy_slider, AccessibilityInfo, Dimensions,
    DragInteraction, SliderCanvas, SliderEvent, WavySlider,
};

// Configuration surface
pub use config::{
    parse_hex_color, AccessibilityConfig, AnimationConfig, BoundsConfig, GapConfig, QuickParams,
    SliderConfig, ThemeConfig, ThumbConfig, ThumbShape, TrackConfig, ValueFormat, WaveConfig,
    WaveDirection, DEFAULT_HEIGHT,
};

// Geometry core
pub use path::{
    generate_paths, generate_straight_path, generate_wave_path, segment_polylines, PathPair,
    MIN_PATH_WIDTH,
};
pub use wave::{sample, WaveKind};

// Animation primitives
pub use animation::{Phase, Transition, TransitionMode, PHASE_CYCLE};
