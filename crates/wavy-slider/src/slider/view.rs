//! View function for the wavy slider

use iced::widget::canvas::Canvas;
use iced::{Element, Length};

use super::{SliderCanvas, SliderEvent, WavySlider};

/// Build the slider element
///
/// Sizing comes from the slider's config: a fixed height (default 60) and
/// either a fixed width or the full available width.
pub fn wavy_slider<'a, Message: Clone + 'a>(
    slider: &'a WavySlider,
    on_event: impl Fn(SliderEvent) -> Message + 'a,
) -> Element<'a, Message> {
    let config = slider.config();
    let width = match config.width {
        Some(width) => Length::Fixed(width),
        None => Length::Fill,
    };

    Canvas::new(SliderCanvas { slider, on_event })
        .width(width)
        .height(Length::Fixed(config.height()))
        .into()
}
