use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::snake::Position;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, rounding toward the origin on even sides.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Playing-field geometry read from the optional settings file.
///
/// The grid is derived from a virtual window measured in pixels, so a
/// settings file written for an 800x600 window with 20px cells yields a
/// 40x30 board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Settings {
    /// Loads settings from an explicit path, or from the user config
    /// directory when no path is given. A missing default file means
    /// defaults; a missing explicit file is an error.
    pub fn resolve(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::load(path);
        }

        match settings_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parses and validates a JSON settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects geometry that cannot produce a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let width = self.window_width / self.cell_size;
        let height = self.window_height / self.cell_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid {
                window_width: self.window_width,
                window_height: self.window_height,
                cell_size: self.cell_size,
            });
        }

        if u16::try_from(width).is_err() || u16::try_from(height).is_err() {
            return Err(ConfigError::GridTooLarge { width, height });
        }

        Ok(())
    }

    /// Returns the board dimensions implied by window and cell size.
    ///
    /// Callers are expected to have run [`Settings::validate`]; oversized
    /// axes saturate at `u16::MAX`.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        let cell_size = self.cell_size.max(1);
        GridSize {
            width: u16::try_from(self.window_width / cell_size).unwrap_or(u16::MAX),
            height: u16::try_from(self.window_height / cell_size).unwrap_or(u16::MAX),
        }
    }
}

/// Returns the platform-correct default settings file path.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

/// Opens the log file, creating parent directories when needed.
pub fn create_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::File::create(path)
}

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Points granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Fixed simulation rate.
pub const TICKS_PER_SECOND: u64 = 10;

/// Terminal columns used to draw one logical cell.
pub const CELL_COLUMNS: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "██";

pub const COLOR_SNAKE_HEAD: Color = Color::LightGreen;
pub const COLOR_SNAKE_BODY: Color = Color::Green;
pub const COLOR_FOOD: Color = Color::Red;
pub const COLOR_TEXT: Color = Color::White;
pub const COLOR_GAME_OVER: Color = Color::Red;
pub const COLOR_BORDER: Color = Color::White;
