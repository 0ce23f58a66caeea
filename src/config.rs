//! Settings loaded from `config.toml`, merged with command-line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::error::{Error, Result};

const CONFIG_DIR: &str = "crmdash";
const CONFIG_FILENAME: &str = "config.toml";

/// Viewport width (logical px) at and above which the layout is "desktop".
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Upper bound for `layout.cell_width_px`.
pub const MAX_CELL_WIDTH_PX: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub breakpoint_px: u32,
    /// Logical pixels per terminal column.
    pub cell_width_px: u32,
    /// Sidebar width in columns.
    pub sidebar_width: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            cell_width_px: 8,
            sidebar_width: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Input poll interval in milliseconds.
    pub poll_ms: u64,
    pub mouse: bool,
    /// Whether the host grants full-screen requests.
    pub allow_fullscreen: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            poll_ms: 100,
            mouse: true,
            allow_fullscreen: true,
        }
    }
}

impl Settings {
    /// Load settings for a run: the config file (explicit or default
    /// location), then command-line overrides, then validation.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match cli.config {
            Some(ref path) => load_settings_from(path)?,
            None => match default_config_path() {
                Some(path) => load_settings_or_default(&path),
                None => Settings::default(),
            },
        };

        if let Some(px) = cli.cell_width {
            settings.layout.cell_width_px = px;
        }
        if let Some(px) = cli.breakpoint {
            settings.layout.breakpoint_px = px;
        }
        if cli.no_mouse {
            settings.ui.mouse = false;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.cell_width_px == 0 || self.layout.cell_width_px > MAX_CELL_WIDTH_PX {
            return Err(Error::config(format!(
                "layout.cell_width_px must be between 1 and {}",
                MAX_CELL_WIDTH_PX
            )));
        }
        if self.layout.sidebar_width < 16 {
            return Err(Error::config("layout.sidebar_width must be at least 16"));
        }
        if self.ui.poll_ms < 10 {
            return Err(Error::config("ui.poll_ms must be at least 10"));
        }
        Ok(())
    }
}

/// `<config_dir>/crmdash/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load the implicit config file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_or_default(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match load_settings_from(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}
