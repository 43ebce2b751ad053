use crate::error::{ConfigError, PearlError};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "PEARLERIZER_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Block size used when no target width is set
    #[serde(default = "default_block_size")]
    pub block_size: u32,

    /// Desired output width; overrides `block_size` when set
    #[serde(default)]
    pub target_width: Option<u32>,

    /// Image whose distinct colors form the palette
    #[serde(default = "default_palette")]
    pub palette: PathBuf,

    /// Explicit hex palette; takes precedence over `palette` when set
    #[serde(default)]
    pub colors: Option<Vec<String>>,

    /// Directory scanned for input images
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving the PNG outputs
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_block_size() -> u32 {
    16
}

fn default_palette() -> PathBuf {
    PathBuf::from("palette.png")
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("input")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            block_size = config.block_size,
            target_width = ?config.target_width,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the quantizer cannot work with
    pub fn validate(&self) -> Result<(), PearlError> {
        if self.block_size == 0 {
            return Err(PearlError::InvalidArgument(
                "block_size must be a positive integer".to_string(),
            ));
        }
        if self.target_width == Some(0) {
            return Err(PearlError::InvalidArgument(
                "target_width must be a positive integer".to_string(),
            ));
        }
        if matches!(self.colors, Some(ref c) if c.is_empty()) {
            return Err(PearlError::InvalidArgument(
                "colors must list at least one color".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(block_size) = overrides.block_size {
            self.block_size = block_size;
        }
        if let Some(width) = overrides.target_width {
            self.target_width = Some(width);
        }
        if let Some(palette) = overrides.palette {
            self.palette = palette;
            // An explicit palette image wins over colors from the file
            self.colors = None;
        }
        if let Some(colors) = overrides.colors {
            self.colors = Some(colors);
        }
        if let Some(dir) = overrides.input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            target_width: None,
            palette: default_palette(),
            colors: None,
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub block_size: Option<u32>,
    pub target_width: Option<u32>,
    pub palette: Option<PathBuf>,
    pub colors: Option<Vec<String>>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Config file to load: `--config` wins over `$PEARLERIZER_CONFIG`; an
/// empty variable counts as unset.
pub fn resolve_config_path(flag: Option<PathBuf>, env_value: Option<OsString>) -> Option<PathBuf> {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Split a comma-separated color list, e.g. `"#000,#fff"`
pub fn parse_color_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
