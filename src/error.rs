use std::path::{Path, PathBuf};

use block_quant::{PaletteError, QuantizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PearlError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode image {}: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl PearlError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        PearlError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Split decoder errors into unreadable files and undecodable contents.
    pub fn from_image(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => PearlError::io(path, source),
            other => PearlError::Format {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        }
    }
}

impl From<PaletteError> for PearlError {
    fn from(e: PaletteError) -> Self {
        PearlError::InvalidArgument(e.to_string())
    }
}

impl From<QuantizeError> for PearlError {
    fn from(e: QuantizeError) -> Self {
        PearlError::InvalidArgument(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
