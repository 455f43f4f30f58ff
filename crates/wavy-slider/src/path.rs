//! Track path generation
//!
//! The track is rendered as two polyline strokes: the active (progress)
//! segment, wavy unless flattened, and the inactive remainder, always
//! straight. Geometry is produced as a list of `iced::Point`s for the canvas
//! program, with an SVG-style string form (`M x y L x y ...`, 2-decimal
//! coordinates) as the stable external contract.
//!
//! All entities here are recomputed from scratch on every call; nothing is
//! cached between frames.

use iced::Point;
use std::f32::consts::TAU;
use std::fmt::Write;

use crate::config::{GapConfig, WaveConfig};
use crate::wave;

/// Spans narrower than this render as a straight line: there is no room for
/// a meaningful wave, and cycles-based frequency would blow up.
pub const MIN_PATH_WIDTH: f32 = 5.0;

/// Fallback sampling stride when a config slips through with a
/// non-positive resolution
const DEFAULT_RESOLUTION: f32 = 2.0;

/// The composer's output: active and inactive segment path strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub active: String,
    pub inactive: String,
}

/// Resolve the effective spatial frequency for a span
///
/// Precedence: wavelength, then cycles, then the configured frequency.
/// Cycles mode divides by the span width, so it only applies to spans at
/// least `MIN_PATH_WIDTH` wide. Re-derived per call because the answer
/// changes with the span while dragging.
fn effective_frequency(config: &WaveConfig, span: f32) -> f32 {
    if config.wavelength > 0.0 {
        TAU / config.wavelength
    } else if config.cycles > 0.0 && span >= MIN_PATH_WIDTH {
        config.cycles * TAU / span
    } else {
        config.frequency
    }
}

/// Sample the wavy active segment as a polyline
///
/// Edge cases, in order: an empty or inverted span collapses to a single
/// point; flattening, a span below `MIN_PATH_WIDTH`, or zero amplitude all
/// produce a straight baseline segment. Otherwise the wave is sampled at the
/// configured stride, with a final vertex forced exactly onto `end_x` so the
/// path terminates at the requested boundary regardless of how the stride
/// divides the span.
pub fn wave_polyline(
    start_x: f32,
    end_x: f32,
    baseline_y: f32,
    config: &WaveConfig,
    phase: f32,
    flatten: bool,
) -> Vec<Point> {
    if end_x <= start_x {
        return vec![Point::new(start_x, baseline_y)];
    }

    if flatten || end_x - start_x < MIN_PATH_WIDTH || config.amplitude == 0.0 {
        return vec![
            Point::new(start_x, baseline_y),
            Point::new(end_x, baseline_y),
        ];
    }

    let frequency = effective_frequency(config, end_x - start_x);
    let phase = phase + config.phase_offset;
    let stride = if config.resolution > 0.0 {
        config.resolution
    } else {
        DEFAULT_RESOLUTION
    };
    let sample_y =
        |x: f32| baseline_y + config.amplitude * wave::sample(config.kind, x, frequency, phase);

    let mut points = vec![Point::new(start_x, sample_y(start_x))];
    let mut x = start_x + stride;
    while x <= end_x {
        points.push(Point::new(x, sample_y(x)));
        x += stride;
    }
    // Terminate exactly at the requested boundary
    points.push(Point::new(end_x, sample_y(end_x)));
    points
}

/// Straight baseline segment as a polyline
///
/// A positive `stroke_width` pulls the end back by half the stroke so a
/// round cap does not overrun the container edge.
pub fn straight_polyline(start_x: f32, end_x: f32, baseline_y: f32, stroke_width: f32) -> Vec<Point> {
    if end_x <= start_x {
        return vec![Point::new(start_x, baseline_y)];
    }
    let adjusted_end = if stroke_width > 0.0 {
        end_x - stroke_width / 2.0
    } else {
        end_x
    };
    vec![
        Point::new(start_x, baseline_y),
        Point::new(adjusted_end, baseline_y),
    ]
}

/// Format a polyline as an SVG-style path string
///
/// `M x y` then `L x y` per vertex, every coordinate with exactly
/// 2 decimal digits.
pub fn to_path_string(points: &[Point]) -> String {
    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{command} {:.2} {:.2}", point.x, point.y);
    }
    path
}

/// Wavy active-segment path as a string
pub fn generate_wave_path(
    start_x: f32,
    end_x: f32,
    baseline_y: f32,
    config: &WaveConfig,
    phase: f32,
    flatten: bool,
) -> String {
    to_path_string(&wave_polyline(start_x, end_x, baseline_y, config, phase, flatten))
}

/// Straight path as a string
pub fn generate_straight_path(start_x: f32, end_x: f32, baseline_y: f32, stroke_width: f32) -> String {
    to_path_string(&straight_polyline(start_x, end_x, baseline_y, stroke_width))
}

/// Split the track at the current progress position into active and
/// inactive polylines
///
/// While dragging with the gap enabled, the two segments pull apart by
/// `gap.size` on each side of `progress_x`; otherwise they touch there.
/// The active segment always starts at the track origin.
pub fn segment_polylines(
    container_width: f32,
    progress_x: f32,
    baseline_y: f32,
    wave_config: &WaveConfig,
    phase: f32,
    is_dragging: bool,
    gap: &GapConfig,
    flatten_on_drag: bool,
    track_thickness: f32,
) -> (Vec<Point>, Vec<Point>) {
    let gap_size = if is_dragging && gap.enabled { gap.size } else { 0.0 };

    let active_end = (progress_x - gap_size).max(0.0);
    let inactive_start = (progress_x + gap_size).min(container_width);

    let should_flatten = flatten_on_drag && is_dragging;
    let active = if should_flatten {
        straight_polyline(0.0, active_end, baseline_y, 0.0)
    } else {
        wave_polyline(0.0, active_end, baseline_y, wave_config, phase, false)
    };
    let inactive = straight_polyline(inactive_start, container_width, baseline_y, track_thickness);

    (active, inactive)
}

/// Active and inactive segment paths in string form
#[allow(clippy::too_many_arguments)]
pub fn generate_paths(
    container_width: f32,
    progress_x: f32,
    baseline_y: f32,
    wave_config: &WaveConfig,
    phase: f32,
    is_dragging: bool,
    gap: &GapConfig,
    flatten_on_drag: bool,
    track_thickness: f32,
) -> PathPair {
    let (active, inactive) = segment_polylines(
        container_width,
        progress_x,
        baseline_y,
        wave_config,
        phase,
        is_dragging,
        gap,
        flatten_on_drag,
        track_thickness,
    );
    PathPair {
        active: to_path_string(&active),
        inactive: to_path_string(&inactive),
    }
}
