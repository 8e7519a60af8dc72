use appcat::CatalogItem;

use crate::SyncReport;

/// Commands returned by the app to the event loop for side-effect execution.
#[derive(Debug)]
pub enum AppCommand {
    /// No side effect needed.
    None,
    /// Quit the application.
    Quit,
    /// Trigger a catalog sync.
    Sync,
    /// Reload the package list from the store.
    ReloadList,
}

/// Actions dispatched back into the app from async tasks.
#[derive(Debug)]
pub enum Action {
    /// The package list was reloaded.
    ListReloaded(Result<Vec<CatalogItem>, String>),
    /// A sync attempt finished.
    SyncCompleted(Result<SyncReport, String>),
}
