//! newsdesk — the latest news, in your terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐ fetch_articles ┌──────────────┐  watch   ┌──────────┐  draw()  ┌──────────┐
//! │  news/   │ ◄───────────── │ controller.rs│ ───────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (HTTP)   │                │ (tokio task) │ (channel)│ (state)  │          │ (render) │
//! └──────────┘                └──────────────┘          └──────────┘          └──────────┘
//!                                    ▲ load/retry/refresh    ▲
//!                                    │                       │ handle_key_event()
//!                                    └──── Action ──── ┌──────────┐
//!                                                      │ input.rs │
//!                                                      └──────────┘
//! ```
//!
//! * **`news/`** — the `Fetcher` trait, the HTTP implementation and the
//!   `Article` record.
//! * **`controller`** — the fetch state machine; publishes every transition.
//! * **`app`** — presentation state (selection, list/detail view, notices).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations and `Action`s.
//! * **`config`**, **`logging`**, **`browser`** — ambient plumbing.
//! * **`main`** — wires everything together: parse args, build the runtime,
//!   set up the terminal, and run the event loop.

mod app;
mod browser;
mod config;
mod controller;
mod input;
mod logging;
mod news;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use app::App;
use config::Config;
use controller::{FetchState, NewsController};
use input::Action;
use news::HttpFetcher;

// ---------------------------------------------------------------------------
// RAII terminal guard — cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Pick the trigger that matches the controller's current state.
fn reload(controller: &NewsController) {
    match controller.state() {
        FetchState::Idle => controller.load(),
        FetchState::Failed(_) => controller.retry(),
        FetchState::Loading | FetchState::Loaded(_) => controller.refresh(),
    };
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref(), &config.log_level)?;

    // The UI loop stays on this thread; fetches run on the runtime's workers.
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let _runtime_guard = runtime.enter();

    // -- composition ---------------------------------------------------------
    let fetcher = HttpFetcher::new(&config.endpoint).context("building HTTP client")?;
    info!(endpoint = fetcher.endpoint(), "starting");
    let controller = NewsController::new(Arc::new(fetcher), config.load_policy());
    let mut state_rx = controller.subscribe();

    install_panic_hook();
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();

    controller.load();

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Adopt the controller's state if it changed.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Controller state
        if state_rx.has_changed().unwrap_or(false) {
            let state = state_rx.borrow_and_update().clone();
            app.sync(state);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match input::handle_key_event(&mut app, key) {
                    Some(Action::Reload) => reload(&controller),
                    Some(Action::OpenLink(url)) => {
                        if let Err(e) = browser::open(&url) {
                            warn!(error = %e, "could not open browser");
                            app.notice = Some("Could not open the browser".into());
                        }
                    }
                    None => {}
                }
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.  Dropping the runtime
    // afterwards abandons any fetch still in flight.
    Ok(())
}
