use anyhow::{Context, Result};
use gh_client::{OctocrabClient, RepositoryClient};
use gh_fork_config::{AppConfig, AuditLog, AuditSink};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod effect;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod scheduler;
mod session;
mod state;
mod store;
mod theme;
mod utils;
mod views;

use actions::{Action, GlobalAction, SessionAction};
use middleware::{
    keyboard::KeyboardMiddleware, logging::LoggingMiddleware, text_input::TextInputMiddleware,
};
use scheduler::EffectScheduler;
use session::{SessionContext, SessionState};
use state::AppState;
use store::Store;

/// How long the loop waits for terminal input before draining effect results
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting gh-fork-manager, logging to {}", log_file.display());

    let config = AppConfig::load().context("Failed to load configuration")?;
    log::info!("API base {}, scope {}", config.api_base, config.scope.label());

    let runtime = scheduler::build_runtime().context("Failed to start async runtime")?;
    let client = {
        let _guard = runtime.enter();
        OctocrabClient::new(&config.api_base, config.token.as_deref())
            .context("Failed to create GitHub client")?
    };
    let authenticated = client.is_authenticated();
    if !authenticated {
        log::warn!("No GitHub token configured");
    }
    let client: Arc<dyn RepositoryClient> = Arc::new(client);
    let effects = EffectScheduler::new(
        runtime,
        client,
        Duration::from_secs(config.request_timeout_secs),
    );

    let audit_log = AuditLog::new(config.log_path.clone());
    log::info!("Recording delete outcomes in {}", audit_log.path().display());
    let audit: Arc<dyn AuditSink> = Arc::new(audit_log);
    let session = SessionState::new(
        SessionContext {
            audit,
            confirm_deletes: config.confirm_deletes,
        },
        config.scope,
    );

    let mut store = Store::new(AppState::new(session, authenticated), Box::new(effects));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("gh-fork-manager stopped: {:#}", err);
    }

    log::info!("Exiting gh-fork-manager");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Session(SessionAction::ResizeViewport { rows: size.height }));
    store.dispatch(Action::Session(SessionAction::LoadRequested));
    store.dispatch(Action::Session(SessionAction::WhoAmIRequested));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, rows) => {
                    store.dispatch(Action::Session(SessionAction::ResizeViewport { rows }));
                }
                _ => {}
            }
        }

        // Results of background effects
        store.process_pending();
    }

    Ok(())
}
