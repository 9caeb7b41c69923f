use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::GridSize;
use crate::input::Direction;

const APP_DIR_NAME: &str = "snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Field width in pixels.
pub const DEFAULT_FIELD_WIDTH: u16 = 640;

/// Field height in pixels.
pub const DEFAULT_FIELD_HEIGHT: u16 = 480;

/// Edge length of one cell in pixels.
pub const DEFAULT_CELL_SIZE: u16 = 20;

/// Ticks per second.
pub const DEFAULT_TICK_RATE: u32 = 15;

pub const DEFAULT_TITLE: &str = "Snake";

/// 32×24 cells of 20 px.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: DEFAULT_FIELD_WIDTH,
    height: DEFAULT_FIELD_HEIGHT,
    cell_size: DEFAULT_CELL_SIZE,
};

/// Direction a fresh or reset snake starts moving in.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Runtime settings, loadable from a JSON file.
///
/// Missing keys fall back to the compile-time defaults above.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: u16,
    pub field_height: u16,
    pub cell_size: u16,
    pub tick_rate: u32,
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl GameConfig {
    /// Loads and validates the config at `path`.
    ///
    /// Returns defaults when `path` does not exist and `required` is false,
    /// which is how the implicit per-user config file is treated.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the field splits into whole cells and the clock can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry_is_valid = self.cell_size > 0
            && self.field_width >= self.cell_size
            && self.field_height >= self.cell_size
            && self.field_width % self.cell_size == 0
            && self.field_height % self.cell_size == 0;

        if !geometry_is_valid {
            return Err(ConfigError::InvalidGeometry {
                width: self.field_width,
                height: self.field_height,
                cell_size: self.cell_size,
            });
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.field_width,
            height: self.field_height,
            cell_size: self.cell_size,
        }
    }
}

/// Returns the platform-correct per-user config path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}
