use crate::events::AppEvent;
use arcslide::{Preset, SliderConfig, SliderError};
use async_channel::Sender;
use directories::ProjectDirs;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Side of the square drawing area.
    pub size: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { size: 320.0 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub preset: Preset,
    /// Replaces the preset entirely when present.
    #[serde(default)]
    pub slider: Option<SliderConfig>,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    pub fn slider_config(&self) -> SliderConfig {
        self.slider
            .clone()
            .unwrap_or_else(|| self.preset.config())
    }

    pub fn use_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.slider = None;
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Edits arriving within this window of each other cause a single reload.
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(150);

pub fn config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("org", "arcslide", "arcslide")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::ConfigDirNotFound)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(config_path()?).required(false))
        .add_source(
            config::Environment::with_prefix("ARCSLIDE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    })
}

/// Writes the commented default file unless one exists. Returns its path.
pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        log::info!("Keeping existing config at {}", path.display());
        return Ok(path);
    }
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    fs_err::write(&path, DEFAULT_CONFIG)?;
    Ok(path)
}

/// Whether `event` changed the contents of the config file. Removal keeps the
/// running slider, and metadata or access events never alter the settings.
fn is_reload_trigger(event: &Event, config_path: &Path) -> bool {
    let content_change = match event.kind {
        EventKind::Create(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };
    content_change && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let path = config_path()?;
    let dir = path.parent().ok_or(ConfigError::ConfigDirNotFound)?;
    // editors replace the file, so the directory is watched instead
    fs_err::create_dir_all(dir)?;

    let (events_tx, events) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {} for changes", path.display());

    while let Ok(res) = events.recv().await {
        match res {
            Ok(event) if is_reload_trigger(&event, &path) => {
                // swallow the burst a single save produces
                while let Ok(Ok(_)) = tokio::time::timeout(RELOAD_DEBOUNCE, events.recv()).await {}
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("Watch error: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcslide::{CircularSlider, HandleType, LineCap, Size};
    use notify::event::{CreateKind, DataChange, MetadataKind, RemoveKind};

    #[test]
    fn test_default_config_file_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset, Preset::Labels);
        assert!(config.slider.is_none());
        assert_eq!(config.window.size, 320.0);

        let slider = CircularSlider::new(Size::square(config.window.size), config.slider_config());
        assert!(slider.is_ok());
    }

    #[test]
    fn test_slider_table_replaces_preset() {
        let toml = r##"
preset = "partial"

[slider]
max_angle = 180
line_width = 8
handle_type = "big-circle"
handle_color = "#3366ffcc"
inner_marking_labels = ["min", "max"]
unfilled_arc_line_cap = "square"

[slider.label_font]
size = 14

[window]
size = 240
"##;
        let config = parse_config(toml).unwrap();
        let slider = config.slider_config();
        assert_eq!(slider.max_angle, 180.0);
        assert_eq!(slider.handle_type, HandleType::BigCircle);
        assert_eq!(slider.unfilled_arc_line_cap, LineCap::Square);
        assert_eq!(slider.label_font.size, 14.0);
        assert_eq!(slider.label_font.family, "Sans");
        assert_eq!(config.window.size, 240.0);

        let mut config = config;
        config.use_preset(Preset::Full);
        assert_eq!(config.slider_config(), Preset::Full.config());
    }

    #[test]
    fn test_invalid_enum_is_an_error() {
        assert!(parse_config("preset = \"hexagon\"").is_err());
    }

    #[test]
    fn test_slider_table_can_disable_rotation() {
        let config = parse_config("[slider]\nmax_angle = 270\nrotated = false").unwrap();
        assert!(!config.slider_config().rotated);
        assert!(Preset::Partial.config().rotated);
    }

    #[test]
    fn test_reload_triggers() {
        let path = PathBuf::from("/tmp/arcslide/config.toml");
        let event = |kind| Event::new(kind).add_path(path.clone());

        assert!(is_reload_trigger(
            &event(EventKind::Modify(ModifyKind::Data(DataChange::Content))),
            &path
        ));
        assert!(is_reload_trigger(
            &event(EventKind::Create(CreateKind::File)),
            &path
        ));
        assert!(!is_reload_trigger(
            &event(EventKind::Modify(ModifyKind::Metadata(MetadataKind::Any))),
            &path
        ));
        assert!(!is_reload_trigger(
            &event(EventKind::Remove(RemoveKind::File)),
            &path
        ));

        let other = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/arcslide/config.toml~"));
        assert!(!is_reload_trigger(&other, &path));
    }
}
