//! Elastic Volume TUI: mouse-driven terminal rendition of the elastic slider.
//!
//! Drag the track past either end to stretch it; release and it springs
//! back. Logs go to a file because the terminal is owned by the UI.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use elastic_core::SliderConfig;

use crate::app::AppState;

/// Poll interval while something is animating (~60 FPS).
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval while idle.
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "elastic-tui", version, about = "Elastic-overflow volume slider in the terminal")]
struct Args {
    /// Slider configuration (TOML). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path. Defaults to `elastic-tui.log` in the state directory.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter (e.g. `info`, `elastic_core=trace`). `RUST_LOG` wins when set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Width of one terminal cell in slider layout units.
    #[arg(long, default_value_t = 8.0)]
    cell_width: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        args.cell_width.is_finite() && args.cell_width > 0.0,
        "--cell-width must be positive (got {})",
        args.cell_width
    );

    let state_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("elastic-volume");
    let state_path = state_dir.join("state.json");
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| state_dir.join("elastic-tui.log"));
    let _log_guard = init_tracing(&log_path, &args.log_level)?;

    let config = match &args.config {
        Some(path) => SliderConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => SliderConfig::default(),
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let persisted = persistence::load(&state_path);
    let mut app = AppState::new(config, args.cell_width, state_path);
    persistence::apply(&mut app, persisted);
    info!(volume = %app.slider.volume(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    if let Err(err) = persistence::save(&app.state_path, &persisted) {
        tracing::warn!(error = %err, "failed to save state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(volume = %app.slider.volume(), "exiting");
    result
}

fn init_tracing(log_path: &Path, log_level: &str) -> Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .context("log file path must name a file")?;
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        // 1. Render, then feed the new layout back into the model.
        let mut placed = None;
        terminal.draw(|f| placed = ui::draw(f, app))?;
        app.sync_layout(placed);

        // 2. Poll for input: fast while animating, slow while idle.
        let timeout = if app.slider.is_animating() { FRAME } else { IDLE_POLL };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Advance animations by real elapsed time.
        let now = Instant::now();
        app.slider.tick(now.duration_since(last_frame).as_secs_f64());
        last_frame = now;

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
