//! doc-assist-tui: interactive terminal UI for the RAG document assistant.
//! Reads config, fetches the document list, then runs the render loop until
//! Esc or Ctrl-C.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use doc_assist_client::{config, Client};
use doc_assist_tui::app::{App, AppContext, UiEvent};
use doc_assist_tui::{logging, ui};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

fn resolve_config_path() -> anyhow::Result<PathBuf> {
    // 1. --config <path> flag
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        if let Some(path) = args.get(pos + 1) {
            return Ok(PathBuf::from(path));
        }
    }
    // 2. DOC_ASSIST_CONFIG env var
    if let Ok(val) = std::env::var("DOC_ASSIST_CONFIG") {
        return Ok(PathBuf::from(val));
    }
    // 3. Default path (~/.doc-assist/config.yaml)
    config::default_config_path()
        .context("unable to determine config path (set --config or DOC_ASSIST_CONFIG)")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let cfg = config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let base_url = cfg.require_base_url()?.to_string();

    if let Some(dir) = config_path.parent() {
        logging::init(&dir.join("logs"));
    }
    tracing::info!(%base_url, "starting doc-assist-tui");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (ctx, mut events) = AppContext::new(Client::new(base_url));
    let mut app = App::default();
    app.fetch_documents(&ctx);

    let result = run(&mut terminal, &mut app, &ctx, &mut events).await;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    ctx: &AppContext,
    events: &mut UnboundedReceiver<UiEvent>,
) -> anyhow::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Fold completed requests into the state.
        while let Ok(event) = events.try_recv() {
            app.apply_event(ctx, event);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(ctx, key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
