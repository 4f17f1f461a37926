use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use cadence::config::Config;
use cadence::controller::AppController;
use cadence::engine::{DesktopEngine, EngineEvent};
use cadence::event::AppEvent;
use cadence::logging;
use cadence::media_controls::MediaControlsManager;
use cadence::model::RepeatMode;
use cadence::view::AppView;

#[derive(Parser, Debug)]
#[command(name = "cadence", version, about = "Terminal music player")]
struct Cli {
    /// Audio files or folders to queue at startup
    files: Vec<PathBuf>,

    /// Property-list playlist to load at startup
    #[arg(long)]
    playlist: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with shuffle enabled
    #[arg(long)]
    shuffle: bool,

    /// Initial repeat mode
    #[arg(long, value_enum, default_value_t = RepeatArg::Off)]
    repeat: RepeatArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RepeatArg {
    Off,
    One,
    All,
}

impl From<RepeatArg> for RepeatMode {
    fn from(arg: RepeatArg) -> Self {
        match arg {
            RepeatArg::Off => RepeatMode::Off,
            RepeatArg::One => RepeatMode::One,
            RepeatArg::All => RepeatMode::All,
        }
    }
}

type Controller = AppController<DesktopEngine>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Cadence Starting ===");

    let (app_tx, app_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (engine_tx, engine_rx) = mpsc::unbounded_channel::<EngineEvent>();

    let media_controls = if config.media_controls {
        MediaControlsManager::new(app_tx.clone())
    } else {
        MediaControlsManager::disabled()
    };

    let mut controller = AppController::new(
        DesktopEngine::new(engine_tx),
        Box::new(media_controls),
        app_tx,
        &config,
    );

    if cli.shuffle {
        controller.toggle_shuffle();
    }
    controller.set_repeat(cli.repeat.into());

    if let Some(playlist) = &cli.playlist {
        controller.load_playlist(playlist);
    }
    for path in &cli.files {
        controller.add_path(path);
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, app_rx, engine_rx).await;

    controller.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Cadence shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller,
    mut app_rx: UnboundedReceiver<AppEvent>,
    mut engine_rx: UnboundedReceiver<EngineEvent>,
) -> io::Result<()> {
    let mut input = EventStream::new();

    loop {
        controller.housekeeping();

        terminal.draw(|f| {
            AppView::render(f, controller.model());
        })?;

        tokio::select! {
            maybe_input = input.next() => match maybe_input {
                Some(Ok(Event::Key(key))) => controller.handle_key_event(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(event) = app_rx.recv() => controller.handle_event(event),
            Some(event) = engine_rx.recv() => controller.handle_engine_event(event),
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
