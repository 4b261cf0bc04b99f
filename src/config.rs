// Configuration for the viewer
//
// Configuration is loaded in order of precedence:
// 1. Command-line flags (highest priority, applied in main)
// 2. Config file (~/.config/pmn/config.toml)
// 3. Built-in defaults (lowest priority)

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::ActiveView;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_NAME_WIDTH, DEFAULT_PID_WIDTH,
};
use crate::ui::{parse_color, ColorPair, Palette};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid color {value:?} for colors.{slot}")]
    InvalidColor { slot: String, value: String },
}

/// Minimum widths of the fixed columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub pid_width: usize,
    pub name_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pid_width: DEFAULT_PID_WIDTH,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "pmn=debug"
    pub level: String,
    /// Write to `<dir>/pmn.log`
    pub file: bool,
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: true,
            dir: default_log_dir(),
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub start_view: ActiveView,
    pub layout: LayoutConfig,
    pub palette: Palette,
    pub logging: LoggingConfig,
    /// File the values were read from, if any
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLayout {
    pid_width: Option<usize>,
    name_width: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct FilePair {
    fg: Option<String>,
    bg: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileColors {
    normal: Option<FilePair>,
    selected: Option<FilePair>,
    branch: Option<FilePair>,
    branch_selected: Option<FilePair>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file: Option<bool>,
    dir: Option<PathBuf>,
}

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    start_view: Option<ActiveView>,
    layout: Option<FileLayout>,
    colors: Option<FileColors>,
    logging: Option<FileLogging>,
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CONFIG_DIR_NAME)
}

fn apply_pair(
    slot: &str,
    pair: Option<FilePair>,
    target: &mut ColorPair,
) -> Result<(), ConfigError> {
    let Some(pair) = pair else {
        return Ok(());
    };

    let parse = |channel: &str, value: String| {
        parse_color(&value).ok_or_else(|| ConfigError::InvalidColor {
            slot: format!("{slot}.{channel}"),
            value,
        })
    };

    if let Some(fg) = pair.fg {
        target.fg = parse("fg", fg)?;
    }
    if let Some(bg) = pair.bg {
        target.bg = parse("bg", bg)?;
    }
    Ok(())
}

impl Config {
    /// Get the config file path: ~/.config/pmn/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default config file when `path` is None.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let mut config = Self::from_toml(&contents).map_err(|e| match e {
                    ConfigError::Parse { source, .. } => ConfigError::Parse {
                        path: path.clone(),
                        source,
                    },
                    other => other,
                })?;
                config.source = Some(path);
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Parses config file contents on top of the defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        let mut config = Self::default();

        if let Some(view) = file.start_view {
            config.start_view = view;
        }

        if let Some(layout) = file.layout {
            if let Some(w) = layout.pid_width {
                config.layout.pid_width = w;
            }
            if let Some(w) = layout.name_width {
                config.layout.name_width = w;
            }
        }

        if let Some(colors) = file.colors {
            let palette = &mut config.palette;
            apply_pair("normal", colors.normal, &mut palette.normal)?;
            apply_pair("selected", colors.selected, &mut palette.selected)?;
            apply_pair("branch", colors.branch, &mut palette.branch)?;
            apply_pair("branch_selected", colors.branch_selected, &mut palette.branch_selected)?;
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                config.logging.level = level;
            }
            if let Some(file) = logging.file {
                config.logging.file = file;
            }
            if let Some(dir) = logging.dir {
                config.logging.dir = dir;
            }
        }

        Ok(config)
    }
}
