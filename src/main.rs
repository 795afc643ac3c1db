//! Entry point and game loop.

mod config;
mod domain;
mod error;
mod logging;
mod sim;
mod ui;

use std::io;
use std::process::ExitCode;

use tracing::{debug, error, info, warn};

use config::GameConfig;
use domain::word::{Word, TARGET_WORD};
use error::GameError;
use sim::assets::AssetStore;
use sim::controller::GameController;
use sim::world::Phase;
use ui::input::{Key, KeyBindings};
use ui::layout::Layout;
use ui::surface::Surface;
use ui::terminal::Terminal;

fn main() -> ExitCode {
    let config = GameConfig::load();

    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled ({}): {e}", config.log_dir.display());
            None
        }
    };
    for w in &config.warnings {
        warn!("config: {w}");
    }

    match run(&config) {
        Ok(phase) => {
            info!(?phase, "game finished");
            match phase {
                Phase::Won => println!("You guessed it: {TARGET_WORD}"),
                Phase::Lost => println!("Hanged! The word was: {TARGET_WORD}"),
                Phase::Playing => println!("Bye!"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "fatal");
            eprintln!("hangman: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Check the terminal, load assets, and play one game.
fn run(config: &GameConfig) -> Result<Phase, GameError> {
    let (cols, rows) = crossterm::terminal::size()?;
    let layout = Layout::compute(cols, rows)?;
    info!(cols, rows, ?layout, "terminal geometry");

    let assets = AssetStore::load(&config.assets_path)?;
    info!(path = %config.assets_path.display(), images = assets.len(), "assets loaded");

    let word = Word::new(TARGET_WORD)?;

    let (bindings, key_warnings) = KeyBindings::from_names(&config.keys.commit, &config.keys.quit);
    for w in key_warnings {
        warn!("config: {w}");
    }

    let mut controller = GameController::new(word, assets, layout);
    let mut terminal = Terminal::new(config.palette, bindings);
    start_terminal(&mut terminal, Terminal::init, Terminal::cleanup)?;

    let result = game_loop(&mut controller, &mut terminal);

    if let Err(e) = terminal.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    result
}

/// Bring the terminal up. If `init` fails partway (raw mode on, alternate
/// screen not), `restore` runs before the error is returned.
fn start_terminal<T>(
    term: &mut T,
    init: impl FnOnce(&mut T) -> io::Result<()>,
    restore: impl FnOnce(&mut T) -> io::Result<()>,
) -> io::Result<()> {
    if let Err(e) = init(term) {
        if let Err(re) = restore(term) {
            eprintln!("Terminal cleanup failed: {re}");
        }
        return Err(e);
    }
    Ok(())
}

fn game_loop(controller: &mut GameController, surface: &mut dyn Surface) -> Result<Phase, GameError> {
    controller.start(surface)?;

    loop {
        let key = surface.read_key()?;
        if key == Key::Quit {
            info!("quit requested");
            return Ok(controller.phase());
        }

        for ev in controller.handle_key(key, surface)? {
            debug!(?ev, pending = ?controller.pending(), "event");
        }

        if controller.phase().is_over() {
            // Hold the final screen until the player acknowledges it.
            surface.read_key()?;
            return Ok(controller.phase());
        }
    }
}
