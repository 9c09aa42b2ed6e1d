use codetidy_engine::rewrite::DEFAULT_PARAM_HELPER;
use codetidy_engine::rewrite::imports::{DEFAULT_IMPORT_LINE, DEFAULT_IMPORT_TRIGGER};
use codetidy_engine::sorting::{DEFAULT_BLOCK_PATTERN, DEFAULT_IDENTIFIER_PATTERN};
use codetidy_engine::{BlockPatterns, ImportRule, PatternError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings shared by all codetidy commands. Every field is optional in the
/// file; missing ones take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory walked by `replace-params` and `add-import` when no
    /// argument is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_path: Option<PathBuf>,
    /// Extension of the files the walk tools visit.
    pub extension: String,
    pub sort: SortConfig,
    pub params: ParamsConfig,
    pub imports: ImportsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub block_pattern: String,
    pub identifier_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub helper: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportsConfig {
    pub line: String,
    pub trigger: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_path: None,
            extension: "rs".to_string(),
            sort: SortConfig::default(),
            params: ParamsConfig::default(),
            imports: ImportsConfig::default(),
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            block_pattern: DEFAULT_BLOCK_PATTERN.to_string(),
            identifier_pattern: DEFAULT_IDENTIFIER_PATTERN.to_string(),
        }
    }
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            helper: DEFAULT_PARAM_HELPER.to_string(),
        }
    }
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            line: DEFAULT_IMPORT_LINE.to_string(),
            trigger: DEFAULT_IMPORT_TRIGGER.to_string(),
        }
    }
}

impl SortConfig {
    pub fn patterns(&self) -> Result<BlockPatterns, PatternError> {
        BlockPatterns::new(&self.block_pattern, &self.identifier_pattern)
    }
}

impl ImportsConfig {
    pub fn rule(&self) -> Result<ImportRule, PatternError> {
        ImportRule::new(&self.trigger, &self.line)
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the project path
        config.project_path = config
            .project_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// The config file if present, otherwise the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/codetidy");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
