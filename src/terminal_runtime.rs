use std::fmt;
use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::AppError;
use crate::game::GameState;
use crate::renderer;

type Backend = CrosstermBackend<io::Stdout>;

/// Setup step that failed while taking over the terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InitStage {
    RawMode,
    AlternateScreen,
    Backend,
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RawMode => "enabling raw mode",
            Self::AlternateScreen => "entering the alternate screen",
            Self::Backend => "creating the terminal backend",
        })
    }
}

/// The game's display: raw mode plus alternate screen for one run.
///
/// Dropping the session gives the terminal back, also when the loop exits
/// through `?` or a panic unwinds past it.
pub struct TerminalSession {
    terminal: Terminal<Backend>,
}

impl TerminalSession {
    /// Takes over the terminal and installs the restoring panic hook.
    ///
    /// Fails with [`AppError::TerminalInit`] naming the step that broke; any
    /// step already taken is undone first.
    pub fn enter() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|source| init_error(InitStage::RawMode, source))?;

        let mut stdout = io::stdout();
        if let Err(source) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(init_error(InitStage::AlternateScreen, source));
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|source| {
            restore_terminal();
            init_error(InitStage::Backend, source)
        })?;

        install_panic_hook();
        log::debug!("terminal session started");
        Ok(Self { terminal })
    }

    /// Paints one frame of `state`.
    pub fn draw(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, state))
            .map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        log::debug!("terminal session ended");
    }
}

fn init_error(stage: InitStage, source: io::Error) -> AppError {
    AppError::TerminalInit { stage, source }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        log::error!("panic: {panic_info}");
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
