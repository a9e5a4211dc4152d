//! FOLIO portfolio terminal entry point.
//!
//! Interactive mode takes over the terminal (raw mode, alternate screen).
//! Type commands, Up/Down recall history, Tab accepts the completion hint,
//! Ctrl+L clears the screen, Esc or Ctrl+C quits.
//!
//! `folio --batch` reads one command per stdin line and prints the final
//! session as JSON.

mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use folio_terminal::{InputController, InputResult};
use folio_types::config::TerminalConfig;

/// Poll interval while the rain is not running.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut batch = false;
    let mut config_arg = None;
    for arg in std::env::args().skip(1) {
        if arg == "--batch" {
            batch = true;
        } else {
            config_arg = Some(arg);
        }
    }

    // Resolve config from CLI arg or FOLIO_CONFIG env var.
    let config_path = config_arg.or_else(|| std::env::var("FOLIO_CONFIG").ok());
    let config = load_config(config_path.as_deref());

    if batch {
        run_batch(config)
    } else {
        run_interactive(&config)
    }
}

fn load_config(path: Option<&str>) -> TerminalConfig {
    let Some(path) = path else {
        return TerminalConfig::default();
    };
    match TerminalConfig::load(Path::new(path)) {
        Ok(config) => {
            log::info!("Loaded config from {path}");
            config
        },
        Err(e) => {
            log::warn!("Failed to load config {path}: {e}; using defaults");
            TerminalConfig::default()
        },
    }
}

fn run_batch(mut config: TerminalConfig) -> Result<()> {
    config.matrix.animate = false;
    let mut controller = InputController::desktop(&config);
    for line in io::stdin().lock().lines() {
        controller.on_character_input(&line?);
        controller.on_submit();
    }
    let json = controller.session().snapshot().to_json()?;
    writeln!(io::stdout().lock(), "{json}")?;
    Ok(())
}

/// Restores the terminal on every exit path.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
    }
}

fn run_interactive(config: &TerminalConfig) -> Result<()> {
    let mut controller = InputController::desktop(config);
    let rain_poll = Duration::from_millis(config.matrix.tick_ms);
    log::info!("Starting interactive terminal");

    let _guard = ScreenGuard::enter()?;
    let mut stdout = io::stdout();
    loop {
        render::draw(&mut stdout, &controller, crossterm::terminal::size()?)?;

        let timeout = if controller.overlay().is_running() {
            rain_poll
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && let Some(ev) = input::map_key(&key)
            && controller.on_input(&ev) == InputResult::Quit
        {
            break;
        }
    }
    log::info!("Exiting");
    Ok(())
}
