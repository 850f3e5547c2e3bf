use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

/// Board sizes offered by the size menu.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub presets: Vec<BoardPreset>,
}

/// A named board size. The core accepts any positive dimensions; this list
/// only constrains what the menu offers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BoardPreset {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
}

impl BoardPreset {
    fn new(name: &str, rows: usize, cols: usize) -> Self {
        BoardPreset {
            name: name.to_string(),
            rows,
            cols,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            presets: vec![
                BoardPreset::new("Classic", 6, 7),
                BoardPreset::new("Wide", 6, 14),
                BoardPreset::new("Mega", 6, 21),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.presets.is_empty() {
            return Err(ConfigError::Validation(
                "board.presets must not be empty".into(),
            ));
        }
        for (i, preset) in self.board.presets.iter().enumerate() {
            if preset.name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "board.presets[{i}].name must not be empty"
                )));
            }
            if preset.rows == 0 {
                return Err(ConfigError::Validation(format!(
                    "board.presets[{i}].rows must be > 0"
                )));
            }
            if preset.cols == 0 {
                return Err(ConfigError::Validation(format!(
                    "board.presets[{i}].cols must be > 0"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
