//! dig - page through git history one commit at a time

mod app;
mod config;
mod input;
mod logging;
mod state;
mod views;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dig_core::{Direction, GitRepo, PanelLayout, Point};
use ratatui::prelude::*;
use state::PersistedState;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

/// Pending terminal events before the reader thread blocks
const EVENT_QUEUE_CAPACITY: usize = 64;

#[derive(Parser, Debug)]
#[command(name = "dig")]
#[command(author, version, about = "Page through git history and diffs")]
struct Args {
    /// List the initial commit first (default)
    #[arg(long, conflicts_with = "down")]
    up: bool,

    /// List the newest commit first
    #[arg(long)]
    down: bool,

    /// Repository to read
    #[arg(short = 'C', value_name = "DIR", default_value = ".")]
    repo: PathBuf,

    /// Side panel width, overriding config and the saved width
    #[arg(long)]
    side_width: Option<usize>,
}

impl Args {
    fn direction(&self) -> Direction {
        if self.down {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init();
    let config = config::Config::load();

    let repo_path = std::path::absolute(&args.repo)
        .with_context(|| format!("Failed to resolve {}", args.repo.display()))?;
    let repo = GitRepo::new(repo_path.clone());
    let records = repo
        .records(args.direction())
        .with_context(|| format!("could not get commits from {}", repo_path.display()))?;
    if records.is_empty() {
        anyhow::bail!("No commits in {}", repo_path.display());
    }
    tracing::info!(repo = %repo_path.display(), count = records.len(), "loaded records");

    let state_path = PersistedState::default_path();
    let mut saved = match state_path.as_deref() {
        Some(path) => PersistedState::load(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring saved state");
            PersistedState::default()
        }),
        None => PersistedState::default(),
    };

    let side_width = args
        .side_width
        .or(saved.side_width)
        .unwrap_or(config.ui.side_width);
    let restore_index = saved
        .last_key(&repo_path)
        .and_then(|key| records.iter().position(|record| record.key == key))
        .unwrap_or(0);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = terminal
        .size()
        .context("Failed to read terminal size")
        .and_then(|size| {
            let size = Point::new(size.height as usize, size.width as usize);
            let layout = PanelLayout::new(size, side_width, config.ui.side_width_hidden);
            let mut app = App::new(repo_path.clone(), records, Box::new(repo), layout);
            app.theme = config.theme.resolve();
            app.horizontal_step = config.ui.horizontal_step;
            if !config.ui.side_visible {
                app.show_side(false);
            }
            app.select(restore_index);

            let events = spawn_input_thread()?;
            run_app(&mut terminal, &mut app, &events)?;
            Ok(app)
        });

    restore_terminal(&mut terminal)?;

    let app = result?;
    if let Some(path) = state_path.as_deref() {
        saved.record_session(&app);
        if let Err(err) = saved.save(path) {
            tracing::warn!(%err, "failed to save state");
        }
    }

    Ok(())
}

/// Raw mode plus alternate screen. Raw mode is turned back off when a
/// later step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout, || {
        let _ = disable_raw_mode();
    })?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|err| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        err.into()
    })
}

/// Switch `out` to the alternate screen, running `rollback` if the switch fails.
fn enter_screen<W: Write>(out: &mut W, rollback: impl FnOnce()) -> io::Result<()> {
    execute!(out, EnterAlternateScreen).inspect_err(|_| rollback())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Put the terminal back before the default hook prints the panic message.
fn install_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        tracing::error!(%info, "panic");
        default_panic(info);
    }));
}

/// Read terminal events on a dedicated thread. The thread ends when the
/// receiver is dropped or reading fails.
fn spawn_input_thread() -> Result<Receiver<Event>> {
    let (tx, rx) = crossbeam_channel::bounded(EVENT_QUEUE_CAPACITY);
    std::thread::Builder::new()
        .name("dig-input".to_string())
        .spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::error!(%err, "terminal read failed");
                    break;
                }
            }
        })
        .context("Failed to spawn input thread")?;
    Ok(rx)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &Receiver<Event>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| views::draw(f, app))?;

        let ev = events
            .recv()
            .context("Terminal input closed")?;
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = input::map_key(key, app.session.mode) {
                    tracing::trace!(?action, "key");
                    app.handle(action);
                }
            }
            Event::Resize(width, height) => {
                app.resize(Point::new(height as usize, width as usize));
            }
            _ => {}
        }
    }
    Ok(())
}
