use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level failure of the program outside of gameplay.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Problems with the settings file or the resulting settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("field {width}x{height} does not split into whole {cell_size}px cells")]
    InvalidGeometry {
        width: u16,
        height: u16,
        cell_size: u16,
    },
    #[error("tick rate must be at least 1 per second")]
    InvalidTickRate,
}
