//! Demo application for the wavy slider widget
//!
//! Shows two independent slider instances: a continuous "seek bar" with the
//! animated wave, and a stepped volume-style slider. A preset picker swaps
//! the seek bar's configuration between the built-in styles and any user
//! presets found under the config directory.

use std::path::PathBuf;

use iced::time;
use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Element, Length, Subscription, Task, Theme};

use wavy_slider::{
    presets, wavy_slider, BoundsConfig, QuickParams, SliderConfig, SliderEvent, WavySlider,
};

/// Animation tick interval (~60fps)
const TICK_MS: u64 = 16;

/// User presets live in ~/.config/wavy-demo/presets/*.yaml
fn presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wavy-demo")
        .join("presets")
}

struct DemoApp {
    seek: WavySlider,
    volume: WavySlider,
    playing: bool,
    preset: String,
    preset_names: Vec<String>,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Seek(SliderEvent),
    Volume(SliderEvent),
    Tick,
    TogglePlay,
    PresetSelected(String),
}

impl DemoApp {
    fn new() -> (Self, Task<Message>) {
        let mut seek = WavySlider::new(30.0, BoundsConfig::to_max(100.0), SliderConfig::default());
        seek.set_playing(true);

        let volume_bounds = BoundsConfig {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            snap_to_step: true,
        };
        // Recolor the minimal preset through the quick-param layer
        let volume_config = presets::minimal().resolved(&QuickParams {
            active_color: Some("#C9FE00".to_string()),
            thumb_color: Some("#C9FE00".to_string()),
            thumb_height: Some(14.0),
            ..QuickParams::default()
        });
        let volume = WavySlider::new(7.0, volume_bounds, volume_config);

        let mut preset_names: Vec<String> =
            presets::BUILTIN_PRESETS.iter().map(|s| s.to_string()).collect();
        let dir = presets_dir();
        if dir.exists() {
            for name in presets::list_presets(&dir) {
                if !preset_names.contains(&name) {
                    preset_names.push(name);
                }
            }
        }

        let app = Self {
            seek,
            volume,
            playing: true,
            preset: "default".to_string(),
            preset_names,
            status: String::new(),
        };
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Seek(event) => {
                if let Some(value) = self.seek.handle_event(event) {
                    self.status = format!("seek: {value:.1}");
                }
            }
            Message::Volume(event) => {
                if let Some(value) = self.volume.handle_event(event) {
                    self.status = format!("volume: {value:.0}");
                }
            }
            Message::Tick => {
                let dt = TICK_MS as f32 / 1000.0;
                self.seek.tick(dt);
                self.volume.tick(dt);
            }
            Message::TogglePlay => {
                self.playing = !self.playing;
                self.seek.set_playing(self.playing);
            }
            Message::PresetSelected(name) => {
                let config = presets::by_name(&name)
                    .or_else(|| match presets::load_preset(&presets_dir(), &name) {
                        Ok(config) => Some(config),
                        Err(e) => {
                            log::warn!("{e}");
                            self.status = format!("failed to load preset '{name}'");
                            None
                        }
                    });
                if let Some(config) = config {
                    self.seek.set_config(config);
                    self.preset = name;
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        time::every(std::time::Duration::from_millis(TICK_MS)).map(|_| Message::Tick)
    }

    fn view(&self) -> Element<'_, Message> {
        let seek_info = self.seek.accessibility();

        let header = row![
            button(text(if self.playing { "Pause" } else { "Play" }).size(12))
                .on_press(Message::TogglePlay),
            pick_list(
                self.preset_names.clone(),
                Some(self.preset.clone()),
                Message::PresetSelected,
            )
            .text_size(12),
            text(format!("{} ({})", seek_info.text, seek_info.value)).size(12),
        ]
        .spacing(12)
        .align_y(iced::Center);

        let content = column![
            header,
            wavy_slider(&self.seek, Message::Seek),
            row![
                text("Volume").size(12),
                wavy_slider(&self.volume, Message::Volume),
            ]
            .spacing(12)
            .align_y(iced::Center),
            text(&self.status).size(11),
        ]
        .spacing(16)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("wavy-demo starting up");

    iced::application(DemoApp::new, DemoApp::update, DemoApp::view)
        .title("wavy-slider demo")
        .window_size(iced::Size::new(560.0, 280.0))
        .theme(DemoApp::theme)
        .subscription(DemoApp::subscription)
        .run()
}
