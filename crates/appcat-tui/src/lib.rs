pub mod action;
pub mod app;
pub mod grouping;
mod render;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use appcat::CatalogItem;
use appcat_store::CatalogStore;
use crossterm::ExecutableCommand;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use crate::action::{Action, AppCommand};
use crate::app::App;

/// Outcome of a sync attempt, shaped for display.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Summary message (e.g., "Catalog updated to revision abc123").
    pub message: String,
    /// Whether the local database changed (a reload is needed).
    pub updated: bool,
}

/// Callback the host provides to trigger a sync.
pub type SyncFn = Box<
    dyn Fn() -> Pin<Box<dyn Future<Output = anyhow::Result<SyncReport>> + Send>> + Send + Sync,
>;

/// Launch the interactive catalog browser. Returns when the user quits.
///
/// The catalog file is reopened read-only for every load instead of holding
/// one handle across the session; a sync may replace the file on disk at
/// any time, and a handle opened before the swap would read stale pages.
pub async fn run(catalog_path: PathBuf, on_sync: SyncFn) -> anyhow::Result<()> {
    // Load initial data.
    let items = load_items(&catalog_path)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {e}"))?;

    // Terminal setup.
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, catalog_path, on_sync, items).await;

    // Terminal teardown (always runs).
    disable_raw_mode()?;
    std::io::stdout().execute(DisableMouseCapture)?;
    std::io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn load_items(path: &Path) -> Result<Vec<CatalogItem>, String> {
    let store = CatalogStore::open_read_only(path).map_err(|e| e.to_string())?;
    store.items().map_err(|e| e.to_string())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    catalog_path: PathBuf,
    on_sync: SyncFn,
    items: Vec<CatalogItem>,
) -> anyhow::Result<()> {
    use futures::StreamExt;

    let mut app = App::new(items);

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(32);
    let mut event_stream = EventStream::new();
    let mut tick_interval = interval(Duration::from_millis(250));

    loop {
        // Render.
        terminal.draw(|frame| render::render(frame, &app))?;

        // Wait for next event.
        let command = tokio::select! {
            Some(event_result) = event_stream.next() => {
                match event_result {
                    Ok(event) => {
                        // Filter events: only key presses (not release or
                        // repeat) and mouse events.
                        match &event {
                            Event::Key(key) if key.kind != KeyEventKind::Press => continue,
                            Event::Key(_) | Event::Mouse(_) => {}
                            _ => continue,
                        }
                        app.handle_event(event)
                    }
                    Err(_) => continue,
                }
            }
            Some(action) = action_rx.recv() => {
                app.handle_action(action)
            }
            _ = tick_interval.tick() => {
                app.tick();
                AppCommand::None
            }
        };

        // Execute side effects.
        match command {
            AppCommand::None => {}
            AppCommand::Quit => break,
            AppCommand::Sync => {
                let tx = action_tx.clone();
                let future = on_sync();
                tokio::spawn(async move {
                    let result = future.await.map_err(|e| e.to_string());
                    let _ = tx.send(Action::SyncCompleted(result)).await;
                });
            }
            AppCommand::ReloadList => {
                let path = catalog_path.clone();
                let tx = action_tx.clone();
                tokio::spawn(async move {
                    let result = tokio::task::spawn_blocking(move || load_items(&path))
                        .await
                        .unwrap_or_else(|e| Err(format!("Task panicked: {e}")));
                    let _ = tx.send(Action::ListReloaded(result)).await;
                });
            }
        }
    }

    Ok(())
}
