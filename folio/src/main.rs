//! Folio - a terminal portfolio.
//!
//! A typed-out self-introduction, filterable project and skill galleries,
//! and a contact form that delivers through EmailJS.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting:
//!
//! ```bash
//! printf '#tick 5\n#page work\n#filter Web Development\n#quit\n' | cargo run -p folio -- --headless
//! ```

mod app;
mod events;
mod headless;
mod logging;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{ContactRelay, FolioConfig, Portfolio, Site};
use mailrelay::EmailJs;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use app::App;
use events::{handle_event, EventResult};
use headless::HeadlessSession;
use ui::render::render;

/// Frame interval of the UI loop. Short enough for a smooth 40ms reveal.
const FRAME_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Terminal portfolio")]
struct Cli {
    /// Line-oriented mode reading #commands from stdin
    #[arg(long)]
    headless: bool,

    /// Portfolio content file (JSON) to show instead of the built-in one
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Milliseconds between revealed dialogue characters
    #[arg(long, value_name = "MS")]
    reveal_ms: Option<u64>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Write the current content to PATH as JSON and exit
    #[arg(long, value_name = "PATH")]
    dump_content: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, mut config: FolioConfig) -> FolioConfig {
        if let Some(path) = &self.content {
            config = config.with_content_path(path);
        }
        if let Some(ms) = self.reveal_ms {
            config = config.with_reveal_interval(Duration::from_millis(ms));
        }
        if let Some(dir) = &self.log_dir {
            config = config.with_log_dir(dir);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(FolioConfig::from_env());
    let _log_guard = logging::init_tracing(&config, cli.headless)?;

    let portfolio = match &config.content_path {
        Some(path) => {
            info!(path = %path.display(), "loading content");
            Portfolio::load(path).await?
        }
        None => Portfolio::default(),
    };

    if let Some(path) = &cli.dump_content {
        portfolio.save(path).await?;
        println!("Wrote content to {}", path.display());
        return Ok(());
    }

    let relay = build_relay(&config);
    let site = Site::new(portfolio, config.reveal_interval)?;

    if cli.headless {
        return headless::run_headless(HeadlessSession::new(site, relay))
            .await
            .map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(site, relay)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// The configured mail relay, if the EmailJS account is set up.
fn build_relay(config: &FolioConfig) -> Option<Arc<dyn ContactRelay>> {
    let Some(relay_config) = config.relay.clone() else {
        warn!("EmailJS is not configured; the contact form will report failures");
        return None;
    };
    match EmailJs::new(relay_config) {
        Ok(client) => {
            let relay: Arc<dyn ContactRelay> = Arc::new(client);
            Some(relay)
        }
        Err(e) => {
            warn!(error = %e, "could not create EmailJS client");
            None
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| {
            app.screen = f.area();
            render(f, &app);
        })?;

        // Deliver a queued contact message, showing "Sending..." first
        if app.pending_submit.is_some() {
            app.process_pending_submit().await;
            continue;
        }

        // Poll for events with timeout for animations
        if event::poll(FRAME_INTERVAL)? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        }

        // Tick animations and apply due dialogue reveals
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
