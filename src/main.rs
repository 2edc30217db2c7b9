use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::sync::mpsc;
use tokio::sync::mpsc::unbounded_channel;
use tokio_util::sync::CancellationToken;

use clipdeck::app::{App, Route};
use clipdeck::backend::{Autostart, Backend, HistoryStorage, worker};
use clipdeck::clipboard::SystemClipboard;
use clipdeck::config::{self, Config};
use clipdeck::gateway::{ChannelGateway, EventBus};

/// Terminal clipboard history
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal clipboard history with keyboard-driven paste"
)]
struct Args {
    /// Page to open at startup: /, /about or /prefs
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: Route,

    /// Print the config file location and exit
    #[arg(long)]
    print_config_path: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config_path {
        println!("{}", config::config_path().display());
        return Ok(());
    }

    init_logging();
    color_eyre::install()?;

    log::info!("=== clipdeck {} started ===", env!("CARGO_PKG_VERSION"));

    // Load config early to avoid defaults during startup
    let config_result = config::load_config();

    let events = EventBus::new();
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    // Pages subscribe here, before the backend announces its initial state.
    let mut app = App::new(
        Box::new(ChannelGateway::new(request_tx, response_rx)),
        &events,
    )
    .with_route(args.route);

    if let Some(warning) = &config_result.warning {
        app.notification.show_warning(warning);
    }

    let config = config_result.config;
    let poll_interval = config.clipboard.poll_interval();
    let backend = build_backend(config, events);

    let shutdown = CancellationToken::new();
    let worker = worker::spawn_worker(
        backend,
        poll_interval,
        request_rx,
        response_tx,
        shutdown.clone(),
    )?;

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;

    shutdown.cancel();
    if worker.join().is_err() {
        log::error!("backend worker thread panicked");
    }

    log::info!("=== clipdeck stopped ===");
    result
}

fn build_backend(config: Config, events: EventBus) -> Backend {
    let clipboard = SystemClipboard::new(config.clipboard.backend);
    let mut backend =
        Backend::new(config, Box::new(clipboard), events).with_config_path(config::config_path());

    if let Some(autostart) = Autostart::for_current_exe() {
        backend = backend.with_autostart(autostart);
    }

    match HistoryStorage::in_data_dir() {
        Ok(storage) => {
            log::debug!("history file: {:?}", storage.path());
            backend = backend.with_storage(storage);
        }
        Err(e) => log::warn!("history will not be saved: {}", e),
    }
    backend
}

/// Sends `log` output to `<cache_dir>/clipdeck/clipdeck.log`.
///
/// The level comes from `CLIPDECK_LOG`. Logging is skipped when the file
/// cannot be opened; it must never reach the terminal.
fn init_logging() {
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("clipdeck")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("clipdeck.log"))
    else {
        return;
    };

    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CLIPDECK_LOG", default_level))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
