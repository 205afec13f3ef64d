//! # Binary: Price Dashboard
//!
//! ## Responsibility
//! Entry point for the pricewatch terminal dashboard. Initializes the
//! terminal, runs the event loop, and ensures clean exit.
//!
//! ## Usage
//! ```bash
//! cargo run --bin tui                         # poll the default local endpoint
//! cargo run --bin tui -- --url http://host:8000/latest/data
//! cargo run --bin tui -- --mock               # synthetic feed, no network
//! ```
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C
//! - The data timer keeps firing no matter how many cycles fail

use std::io;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use pricewatch::config::DashConfig;
use pricewatch::tui::app::App;
use pricewatch::tui::events::{apply_event, poll_event};
use pricewatch::tui::feed::{LiveFeed, MockFeed};
use pricewatch::tui::ui;

/// Render refresh rate: 10 frames per second.
const FRAME_RATE: Duration = Duration::from_millis(100);

/// Sets up the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = DashConfig::from_args(std::env::args().skip(1));

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let source = if cfg.mock {
        "mock".to_string()
    } else {
        cfg.endpoint.clone()
    };
    let mut app = App::new(source, cfg.period);

    let result = if cfg.mock {
        run_mock(&mut terminal, &mut app, &cfg)
    } else {
        run_live(&mut terminal, &mut app, &cfg)
    };

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("dashboard error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Runs the event loop against the synthetic feed.
fn run_mock(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cfg: &DashConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut feed = MockFeed::new();
    let mut last_data_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(FRAME_RATE);
        apply_event(app, event);

        if app.should_quit {
            break;
        }

        if last_data_tick.elapsed() >= cfg.period && !app.paused {
            feed.tick(app);
            last_data_tick = Instant::now();
        }
    }

    Ok(())
}

/// Runs the event loop against the live endpoint.
///
/// The data tick blocks on the fetch, so cycles are serialized: a fetch
/// that outlasts the period delays the next cycle instead of overlapping
/// it, and the last completed cycle's writes are the ones on screen.
fn run_live(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cfg: &DashConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut feed = LiveFeed::new(cfg.endpoint.clone());
    let mut last_data_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(FRAME_RATE);
        apply_event(app, event);

        if app.should_quit {
            break;
        }

        if last_data_tick.elapsed() >= cfg.period && !app.paused {
            rt.block_on(feed.tick(app));
            last_data_tick = Instant::now();
        }
    }

    Ok(())
}
