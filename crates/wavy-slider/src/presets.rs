//! Built-in and file-backed slider presets
//!
//! Built-ins reproduce familiar player styles; user presets are YAML files
//! in a presets directory, one file per preset, loadable by name. Partial
//! files are fine: anything unspecified falls back to the config defaults.

use std::path::{Path, PathBuf};

use crate::config::{
    AnimationConfig, GapConfig, SliderConfig, ThumbConfig, TrackConfig, WaveConfig,
};

/// Names of the built-in presets, in display order
pub const BUILTIN_PRESETS: [&str; 8] = [
    "default",
    "spotify",
    "soundcloud",
    "youtube",
    "minimal",
    "neon",
    "podcast",
    "accessible",
];

/// Look up a built-in preset by name
pub fn by_name(name: &str) -> Option<SliderConfig> {
    match name {
        "default" => Some(SliderConfig::default()),
        "spotify" => Some(spotify()),
        "soundcloud" => Some(soundcloud()),
        "youtube" => Some(youtube()),
        "minimal" => Some(minimal()),
        "neon" => Some(neon()),
        "podcast" => Some(podcast()),
        "accessible" => Some(accessible()),
        _ => None,
    }
}

/// Spotify-like green slider: flat track, round thumb
pub fn spotify() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#1DB954".into();
    config.theme.inactive_color = "#535353".into();
    config.theme.thumb_color = "#1DB954".into();
    config.wave = WaveConfig {
        amplitude: 0.0,
        thickness: 4.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 12.0,
        height: 12.0,
        border_radius: 6.0,
        scale_on_drag: 1.3,
        ..ThumbConfig::default()
    };
    config.track = TrackConfig { thickness: 4.0 };
    config.height = Some(40.0);
    config
}

/// Soundcloud-like static waveform: tall, frozen wave with a needle thumb
pub fn soundcloud() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#FF5500".into();
    config.theme.inactive_color = "#333333".into();
    config.theme.thumb_color = "#FF5500".into();
    config.wave = WaveConfig {
        amplitude: 12.0,
        frequency: 0.15,
        speed: 0.0,
        thickness: 3.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 2.0,
        height: 30.0,
        border_radius: 1.0,
        ..ThumbConfig::default()
    };
    config.animation = AnimationConfig {
        wave_enabled: false,
        flatten_on_drag: false,
        ..AnimationConfig::default()
    };
    config.height = Some(60.0);
    config
}

/// YouTube style: red flat track, round thumb, no gap
pub fn youtube() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#FF0000".into();
    config.theme.inactive_color = "#717171".into();
    config.theme.thumb_color = "#FF0000".into();
    config.wave = WaveConfig {
        amplitude: 0.0,
        thickness: 3.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 13.0,
        height: 13.0,
        border_radius: 7.0,
        ..ThumbConfig::default()
    };
    config.track = TrackConfig { thickness: 3.0 };
    config.gap = GapConfig {
        enabled: false,
        ..GapConfig::default()
    };
    config.height = Some(40.0);
    config
}

/// Minimal monochrome line
pub fn minimal() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#FFFFFF".into();
    config.theme.inactive_color = "#4D4D4D".into();
    config.theme.thumb_color = "#FFFFFF".into();
    config.wave = WaveConfig {
        amplitude: 0.0,
        thickness: 2.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 4.0,
        height: 16.0,
        border_radius: 2.0,
        ..ThumbConfig::default()
    };
    config.track = TrackConfig { thickness: 2.0 };
    config.height = Some(40.0);
    config
}

/// Neon glow: cyan wave on a near-black track
pub fn neon() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#00FFFF".into();
    config.theme.inactive_color = "#001A1A".into();
    config.theme.thumb_color = "#00FFFF".into();
    config.wave = WaveConfig {
        amplitude: 8.0,
        frequency: 0.1,
        speed: 0.1,
        thickness: 4.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 6.0,
        height: 24.0,
        border_radius: 3.0,
        ..ThumbConfig::default()
    };
    config.height = Some(60.0);
    config
}

/// Podcast player: purple, gentle short wave, large round thumb
pub fn podcast() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#8B5CF6".into();
    config.theme.inactive_color = "#374151".into();
    config.theme.thumb_color = "#8B5CF6".into();
    config.wave = WaveConfig {
        amplitude: 4.0,
        frequency: 0.2,
        speed: 0.06,
        thickness: 4.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 16.0,
        height: 16.0,
        border_radius: 8.0,
        ..ThumbConfig::default()
    };
    config.height = Some(50.0);
    config
}

/// High-contrast accessible: flat thick yellow on black, oversized thumb
pub fn accessible() -> SliderConfig {
    let mut config = SliderConfig::default();
    config.theme.active_color = "#FFFF00".into();
    config.theme.inactive_color = "#000000".into();
    config.theme.thumb_color = "#FFFFFF".into();
    config.wave = WaveConfig {
        amplitude: 0.0,
        thickness: 6.0,
        ..WaveConfig::default()
    };
    config.thumb = ThumbConfig {
        width: 24.0,
        height: 24.0,
        border_radius: 12.0,
        ..ThumbConfig::default()
    };
    config.track = TrackConfig { thickness: 6.0 };
    config.height = Some(60.0);
    config
}

/// Path of the preset file for `name`
pub fn preset_path(presets_dir: &Path, name: &str) -> PathBuf {
    presets_dir.join(format!("{name}.yaml"))
}

/// Load a user preset by name from the presets directory
pub fn load_preset(presets_dir: &Path, name: &str) -> Result<SliderConfig, String> {
    let path = preset_path(presets_dir, name);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read preset '{}': {}", path.display(), e))?;
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse preset '{}': {}", path.display(), e))
}

/// Save a preset under `name`, creating the directory if needed
pub fn save_preset(presets_dir: &Path, name: &str, config: &SliderConfig) -> Result<(), String> {
    std::fs::create_dir_all(presets_dir)
        .map_err(|e| format!("Failed to create presets directory: {e}"))?;
    let path = preset_path(presets_dir, name);
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| format!("Failed to serialize preset '{name}': {e}"))?;
    std::fs::write(&path, yaml)
        .map_err(|e| format!("Failed to write preset '{}': {}", path.display(), e))
}

/// List user preset names (file stems of `*.yaml` files), sorted
pub fn list_presets(presets_dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(presets_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to list presets in '{}': {}", presets_dir.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .filter_map(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}
