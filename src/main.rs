use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

use grid_snake::config::{Settings, TICKS_PER_SECOND, create_log_file};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (JSON) with window_width, window_height and cell_size.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Include per-tick detail in the log.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path, cli.verbose)?;
    }

    let settings = Settings::resolve(cli.config.as_deref())?;
    let bounds = settings.grid_size();
    info!(
        "starting with {}x{} grid ({}x{} window, {}px cells)",
        bounds.width,
        bounds.height,
        settings.window_width,
        settings.window_height,
        settings.cell_size
    );

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let tick_interval = Duration::from_millis(1000 / TICKS_PER_SECOND);
    let mut last_tick = Instant::now();

    loop {
        session.draw(&state)?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(game_input) = input.poll_input(timeout)? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            handle_input(&mut state, game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.update();
            last_tick = Instant::now();
        }
    }

    info!("quit with score {}", state.score());
    Ok(())
}

/// On the game-over screen every non-quit key restarts.
fn handle_input(state: &mut GameState, input: GameInput) {
    if state.is_game_over() {
        state.apply_input(GameInput::Restart);
    } else {
        state.apply_input(input);
    }
}

fn init_logging(path: &Path, verbose: bool) -> Result<(), AppError> {
    let file = create_log_file(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use grid_snake::config::GridSize;
    use grid_snake::game::GameState;
    use grid_snake::input::{Direction, GameInput};
    use grid_snake::snake::{Position, Snake};

    use super::handle_input;

    fn crashed_state() -> GameState {
        let mut state = GameState::new_with_seed(
            GridSize {
                width: 4,
                height: 4,
            },
            5,
        );
        state.set_layout(
            Snake::new(Position { x: 3, y: 1 }),
            Direction::Right,
            Position { x: 0, y: 0 },
        );
        state.update();
        assert!(state.is_game_over());
        state
    }

    #[test]
    fn any_key_restarts_after_game_over() {
        let mut state = crashed_state();

        handle_input(&mut state, GameInput::Direction(Direction::Up));

        assert!(!state.is_game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Position { x: 2, y: 2 });
    }

    #[test]
    fn direction_keys_steer_while_playing() {
        let mut state = GameState::new_with_seed(
            GridSize {
                width: 10,
                height: 10,
            },
            6,
        );
        state.set_layout(
            Snake::new(Position { x: 5, y: 5 }),
            Direction::Right,
            Position { x: 0, y: 0 },
        );

        handle_input(&mut state, GameInput::Direction(Direction::Down));
        state.update();

        assert_eq!(state.snake().head(), Position { x: 5, y: 6 });
    }
}
