use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::terminal_runtime::InitStage;

/// Invalid or unreadable settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cell_size must be greater than zero")]
    ZeroCellSize,

    #[error(
        "a {window_width}x{window_height} window with {cell_size}px cells leaves no playable grid"
    )]
    EmptyGrid {
        window_width: u32,
        window_height: u32,
        cell_size: u32,
    },

    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: u32, height: u32 },
}

/// Startup and runtime failures of the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("cannot start the display ({stage}): {source}")]
    TerminalInit {
        stage: InitStage,
        #[source]
        source: io::Error,
    },

    #[error("terminal I/O failed during play: {0}")]
    Io(#[from] io::Error),
}
