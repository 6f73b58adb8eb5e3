// dsviz: animated queue and linked list visualizer

use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use dsviz::config::{AppConfig, ConfigError, LoggingConfig, StartView};
use dsviz::model::list::ListKind;
use dsviz::ui::App;

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated queue and linked list visualizer", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Queue capacity
    #[arg(long)]
    capacity: Option<NonZeroUsize>,

    /// Linked list flavour to start with
    #[arg(long, value_enum)]
    list_kind: Option<ListKind>,

    /// Duration of each animation step in milliseconds
    #[arg(long)]
    step_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Visualizer shown on startup
    #[arg(long, value_enum)]
    view: Option<StartView>,
}

impl Cli {
    fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.queue.capacity = capacity;
        }
        if let Some(kind) = self.list_kind {
            config.list.kind = kind;
        }
        if let Some(step_ms) = self.step_ms {
            config.animation.step_millis = step_ms;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(view) = self.view {
            config.view = view;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging)?;
    tracing::info!(?config, "starting dsviz");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Route tracing output to the configured file. Without a file logging stays off,
/// since stdout and stderr belong to the TUI.
fn init_tracing(config: &LoggingConfig) -> io::Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter)),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
