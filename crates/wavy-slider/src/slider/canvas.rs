//! Canvas program for the wavy slider
//!
//! Implements the iced canvas `Program` trait: translates pointer events
//! into [`SliderEvent`]s through a callback closure and strokes the two
//! track segments plus the thumb every redraw. All geometry comes from the
//! slider state; nothing is cached here.

use iced::border::Radius;
use iced::widget::canvas::{
    self, stroke, Event, Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke,
};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};

use super::{SliderEvent, WavySlider};
use crate::config::ThumbShape;

/// Canvas-local interaction state: whether the press started on this slider
#[derive(Debug, Clone, Copy, Default)]
pub struct DragInteraction {
    pub is_dragging: bool,
}

/// Canvas program rendering one [`WavySlider`]
///
/// `on_event` converts slider events into the application's message type;
/// the application feeds them back through [`WavySlider::handle_event`].
pub struct SliderCanvas<'a, Message, F>
where
    F: Fn(SliderEvent) -> Message,
{
    pub slider: &'a WavySlider,
    pub on_event: F,
}

/// Pointer offsets cross into the state as whole pixels within the track
fn local_x(x: f32, width: f32) -> f32 {
    x.clamp(0.0, width).trunc()
}

fn segment_stroke(color: Color, width: f32) -> Stroke<'static> {
    Stroke {
        style: stroke::Style::Solid(color),
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

fn polyline_path(points: &[Point]) -> Path {
    Path::new(|builder| {
        builder.move_to(points[0]);
        for point in &points[1..] {
            builder.line_to(*point);
        }
    })
}

impl<'a, Message, F> Program<Message> for SliderCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(SliderEvent) -> Message,
{
    type State = DragInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    interaction.is_dragging = true;
                    let event = SliderEvent::Pressed {
                        x: local_x(position.x, bounds.width),
                        width: bounds.width,
                    };
                    return Some(canvas::Action::publish((self.on_event)(event)));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Keep tracking while the pointer leaves the bounds mid-drag;
                // the offset clamps to the track edges
                if interaction.is_dragging {
                    if let Some(position) = cursor.position() {
                        let event = SliderEvent::Moved {
                            x: local_x(position.x - bounds.x, bounds.width),
                            width: bounds.width,
                        };
                        return Some(canvas::Action::publish((self.on_event)(event)));
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if interaction.is_dragging {
                    interaction.is_dragging = false;
                    return Some(canvas::Action::publish((self.on_event)(SliderEvent::Released)));
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let config = self.slider.config();
        let (active, inactive) = self.slider.track_polylines(bounds.width, bounds.height);

        if inactive.len() >= 2 {
            frame.stroke(
                &polyline_path(&inactive),
                segment_stroke(config.theme.inactive(), config.track.thickness),
            );
        }
        if active.len() >= 2 {
            frame.stroke(
                &polyline_path(&active),
                segment_stroke(config.theme.active(), config.wave.thickness),
            );
        }

        if config.thumb.visible {
            draw_thumb(&mut frame, self.slider, bounds);
        }

        vec![frame.into_geometry()]
    }
}

fn draw_thumb(frame: &mut Frame, slider: &WavySlider, bounds: Rectangle) {
    let config = slider.config();
    let thumb = &config.thumb;
    let dims = slider.dimensions(bounds.width, bounds.height);

    let scale = slider.thumb_scale();
    let width = thumb.width * scale;
    let height = thumb.height * scale;
    let center = Point::new(dims.progress_width, dims.baseline_y);
    let top_left = Point::new(center.x - width / 2.0, center.y - height / 2.0);
    let color = config.theme.thumb();

    match thumb.shape {
        ThumbShape::Rectangle => {
            frame.fill(&Path::rectangle(top_left, Size::new(width, height)), color);
        }
        ThumbShape::RoundedRect => {
            let path = Path::rounded_rectangle(
                top_left,
                Size::new(width, height),
                Radius::from(thumb.border_radius * scale),
            );
            frame.fill(&path, color);
        }
        ThumbShape::Circle => {
            frame.fill(&Path::circle(center, width.min(height) / 2.0), color);
        }
        ThumbShape::Diamond => {
            let path = Path::new(|builder| {
                builder.move_to(Point::new(center.x, top_left.y));
                builder.line_to(Point::new(top_left.x + width, center.y));
                builder.line_to(Point::new(center.x, top_left.y + height));
                builder.line_to(Point::new(top_left.x, center.y));
                builder.close();
            });
            frame.fill(&path, color);
        }
        ThumbShape::Line => {
            let path = Path::line(
                Point::new(center.x, top_left.y),
                Point::new(center.x, top_left.y + height),
            );
            frame.stroke(&path, segment_stroke(color, width));
        }
    }
}
