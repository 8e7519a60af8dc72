use appcat::CatalogItem;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::SyncReport;
use crate::action::{Action, AppCommand};
use crate::grouping::{self, Group, ListRow};

/// Catalog table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Category,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Id, Column::Name, Column::Category];

    pub fn title(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Category => "Category",
        }
    }
}

/// UI mode the app is currently in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
    CategoryFilter,
    ColumnPicker,
    Settings,
    SyncProgress,
}

/// State of background loading operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState {
    Idle,
    Syncing,
}

/// Transient status message shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// Remaining ticks before the message expires.
    pub ticks_remaining: u8,
}

/// Toggles exposed in the settings overlay, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub group_by_category: bool,
    pub show_key_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            group_by_category: true,
            show_key_hints: true,
        }
    }
}

/// Number of rows in the settings overlay.
pub const SETTINGS_COUNT: usize = 2;

/// The TUI application state. This is a pure state machine: inputs produce
/// commands (side effects), actions update state.
pub struct App {
    /// All loaded packages (unfiltered).
    pub items: Vec<CatalogItem>,
    /// Current view (filtered by search/category or same as items).
    pub view_items: Vec<CatalogItem>,
    /// Computed category groups from the current view.
    pub groups: Vec<Group>,
    /// Flattened rows for cursor navigation.
    pub flat_items: Vec<ListRow>,
    /// Current cursor position in flat_items.
    pub cursor: usize,
    /// Viewport scroll offset for the catalog pane.
    pub list_scroll_offset: usize,

    /// Current UI mode.
    pub mode: Mode,
    /// Active search query.
    pub search_query: String,

    /// Active category filter (None = show all). Matches group labels, so
    /// it can also select the uncategorized bucket.
    pub category_filter: Option<String>,
    /// Cursor position in the category filter overlay list.
    pub category_cursor: usize,

    /// Per-column visibility, indexed like `Column::ALL`.
    pub visible_columns: [bool; Column::ALL.len()],
    /// Cursor position in the column picker overlay.
    pub column_cursor: usize,

    /// Whether the side menu is collapsed to its icon rail.
    pub menu_collapsed: bool,

    /// Settings overlay state.
    pub settings: Settings,
    /// Cursor position in the settings overlay.
    pub settings_cursor: usize,

    /// Transient feedback message.
    pub status_message: Option<StatusMessage>,
    /// Background loading state.
    pub loading: LoadingState,
    /// Result of the last sync attempt (for display in the overlay).
    pub sync_report: Option<SyncReport>,
}

impl App {
    /// Create a new App from the initial package list.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let view_items = items.clone();
        let (groups, flat_items) = grouping::build_groups(&view_items);
        let cursor = grouping::first_item_index(&flat_items).unwrap_or(0);

        Self {
            items,
            view_items,
            groups,
            flat_items,
            cursor,
            list_scroll_offset: 0,
            mode: Mode::Normal,
            search_query: String::new(),
            category_filter: None,
            category_cursor: 0,
            visible_columns: [true; Column::ALL.len()],
            column_cursor: 0,
            menu_collapsed: false,
            settings: Settings::default(),
            settings_cursor: 0,
            status_message: None,
            loading: LoadingState::Idle,
            sync_report: None,
        }
    }

    /// Handle a terminal event, returning a command for the event loop.
    pub fn handle_event(&mut self, event: Event) -> AppCommand {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => AppCommand::None,
        }
    }

    /// Handle an async action (result from a background task).
    pub fn handle_action(&mut self, action: Action) -> AppCommand {
        match action {
            Action::ListReloaded(result) => {
                match result {
                    Ok(items) => {
                        self.reload(items);
                        self.set_status("Catalog reloaded".into(), false);
                    }
                    Err(msg) => {
                        self.set_status(format!("Reload failed: {msg}"), true);
                    }
                }
                AppCommand::None
            }
            Action::SyncCompleted(result) => {
                self.loading = LoadingState::Idle;
                match result {
                    Ok(report) => {
                        let updated = report.updated;
                        self.sync_report = Some(report);
                        // Stay in SyncProgress mode so the result is seen.
                        if updated {
                            return AppCommand::ReloadList;
                        }
                    }
                    Err(msg) => {
                        // The current catalog stays on screen; the failure
                        // is only a transient message.
                        self.mode = Mode::Normal;
                        self.set_status(format!("Sync failed: {msg}"), true);
                    }
                }
                AppCommand::None
            }
        }
    }

    /// Tick the app forward (called on interval). Expires status messages.
    pub fn tick(&mut self) {
        if let Some(msg) = &mut self.status_message {
            if msg.ticks_remaining == 0 {
                self.status_message = None;
            } else {
                msg.ticks_remaining -= 1;
            }
        }
    }

    /// Replace the package list (e.g., after sync). Preserves active
    /// filters.
    pub fn reload(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
        self.recompute_view();
    }

    /// Get the item index for the current cursor position, if it is on a
    /// selectable row.
    pub fn selected_item_index(&self) -> Option<usize> {
        self.flat_items.get(self.cursor).and_then(|row| match row {
            ListRow::Item { item_index } => Some(*item_index),
            ListRow::Header { .. } => None,
        })
    }

    /// Get the currently selected package.
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.selected_item_index()
            .and_then(|idx| self.view_items.get(idx))
    }

    /// Columns currently visible, in display order.
    pub fn visible_column_list(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .copied()
            .enumerate()
            .filter(|(idx, _)| self.visible_columns[*idx])
            .map(|(_, col)| col)
            .collect()
    }

    /// Distinct category labels present in the full (unfiltered) list,
    /// sorted with the uncategorized bucket last.
    pub fn available_categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for item in &self.items {
            let label = grouping::category_label(item);
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_owned());
            }
        }
        labels.sort_by_key(|label| (label == grouping::UNCATEGORIZED, label.clone()));
        labels
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        // Ctrl+C always quits.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::CategoryFilter => self.handle_category_filter_key(key),
            Mode::ColumnPicker => self.handle_column_picker_key(key),
            Mode::Settings => self.handle_settings_key(key),
            Mode::SyncProgress => self.handle_sync_progress_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> AppCommand {
        // Only the catalog list reacts to the wheel; overlays are
        // keyboard-driven.
        if self.mode != Mode::Normal && self.mode != Mode::Search {
            return AppCommand::None;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.move_cursor_down_n(3);
                AppCommand::None
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor_up_n(3);
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor_down();
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor_up();
                AppCommand::None
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
                self.search_query.clear();
                AppCommand::None
            }
            KeyCode::Char('f') => {
                self.mode = Mode::CategoryFilter;
                self.category_cursor = 0;
                AppCommand::None
            }
            KeyCode::Char('v') => {
                self.mode = Mode::ColumnPicker;
                self.column_cursor = 0;
                AppCommand::None
            }
            KeyCode::Char('o') => {
                self.mode = Mode::Settings;
                self.settings_cursor = 0;
                AppCommand::None
            }
            KeyCode::Char('m') => {
                self.menu_collapsed = !self.menu_collapsed;
                AppCommand::None
            }
            KeyCode::Char('r') => AppCommand::ReloadList,
            KeyCode::Char('s') => {
                if self.loading == LoadingState::Idle {
                    self.loading = LoadingState::Syncing;
                    self.mode = Mode::SyncProgress;
                    self.sync_report = None;
                    AppCommand::Sync
                } else {
                    AppCommand::None
                }
            }
            KeyCode::Enter => {
                // Enter on a header row filters to that category.
                if let Some(label) = self.header_label_at_cursor() {
                    self.category_filter = Some(label);
                    self.recompute_view();
                }
                AppCommand::None
            }
            KeyCode::Esc => {
                if self.category_filter.is_some() || !self.search_query.is_empty() {
                    self.category_filter = None;
                    self.search_query.clear();
                    self.recompute_view();
                }
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.search_query.clear();
                self.recompute_view();
                AppCommand::None
            }
            KeyCode::Enter => {
                // Keep the current filter active.
                self.mode = Mode::Normal;
                AppCommand::None
            }
            KeyCode::Down => {
                self.move_cursor_down();
                AppCommand::None
            }
            KeyCode::Up => {
                self.move_cursor_up();
                AppCommand::None
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.recompute_view();
                AppCommand::None
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.recompute_view();
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_category_filter_key(&mut self, key: KeyEvent) -> AppCommand {
        let categories = self.available_categories();
        // Option count: "All" + each category.
        let option_count = 1 + categories.len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.category_cursor + 1 < option_count {
                    self.category_cursor += 1;
                }
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.category_cursor = self.category_cursor.saturating_sub(1);
                AppCommand::None
            }
            KeyCode::Enter => {
                if self.category_cursor == 0 {
                    self.category_filter = None;
                } else if let Some(label) = categories.get(self.category_cursor - 1) {
                    self.category_filter = Some(label.clone());
                }
                self.mode = Mode::Normal;
                self.recompute_view();
                AppCommand::None
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_column_picker_key(&mut self, key: KeyEvent) -> AppCommand {
        let column_count = Column::ALL.len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.column_cursor + 1 < column_count {
                    self.column_cursor += 1;
                }
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.column_cursor = self.column_cursor.saturating_sub(1);
                AppCommand::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_column(self.column_cursor);
                AppCommand::None
            }
            KeyCode::Esc | KeyCode::Char('v') => {
                self.mode = Mode::Normal;
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.settings_cursor + 1 < SETTINGS_COUNT {
                    self.settings_cursor += 1;
                }
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.settings_cursor = self.settings_cursor.saturating_sub(1);
                AppCommand::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                match self.settings_cursor {
                    0 => {
                        self.settings.group_by_category = !self.settings.group_by_category;
                        self.recompute_view();
                    }
                    1 => {
                        self.settings.show_key_hints = !self.settings.show_key_hints;
                    }
                    _ => {}
                }
                AppCommand::None
            }
            KeyCode::Esc | KeyCode::Char('o') => {
                self.mode = Mode::Normal;
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_sync_progress_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                if self.loading == LoadingState::Syncing {
                    // Sync still running in the background; just hide the
                    // overlay.
                    self.mode = Mode::Normal;
                    return AppCommand::None;
                }
                self.mode = Mode::Normal;
                if let Some(report) = &self.sync_report {
                    self.set_status(report.message.clone(), false);
                }
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    /// Toggle a column's visibility. The last visible column cannot be
    /// hidden, otherwise the table would have nothing to render.
    fn toggle_column(&mut self, index: usize) {
        if index >= self.visible_columns.len() {
            return;
        }

        let visible_count = self.visible_columns.iter().filter(|v| **v).count();
        if self.visible_columns[index] && visible_count == 1 {
            self.set_status("At least one column must stay visible".into(), true);
            return;
        }

        self.visible_columns[index] = !self.visible_columns[index];
    }

    fn move_cursor_down(&mut self) {
        self.cursor = grouping::next_item_index(&self.flat_items, self.cursor);
    }

    fn move_cursor_up(&mut self) {
        self.cursor = grouping::prev_item_index(&self.flat_items, self.cursor);
    }

    fn move_cursor_down_n(&mut self, n: usize) {
        for _ in 0..n {
            self.move_cursor_down();
        }
    }

    fn move_cursor_up_n(&mut self, n: usize) {
        for _ in 0..n {
            self.move_cursor_up();
        }
    }

    /// Get the group label if the cursor is on a header row.
    fn header_label_at_cursor(&self) -> Option<String> {
        match self.flat_items.get(self.cursor)? {
            ListRow::Header { label, .. } => Some(label.clone()),
            ListRow::Item { .. } => None,
        }
    }

    fn recompute_view(&mut self) {
        let query = self.search_query.to_lowercase();

        let view: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|item| {
                if let Some(ref filter) = self.category_filter
                    && grouping::category_label(item) != filter
                {
                    return false;
                }
                if !query.is_empty()
                    && !item.name.to_lowercase().contains(&query)
                    && !item.id.to_lowercase().contains(&query)
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        self.view_items = view;

        if self.settings.group_by_category {
            let (groups, flat_items) = grouping::build_groups(&self.view_items);
            self.groups = groups;
            self.flat_items = flat_items;
        } else {
            self.groups = Vec::new();
            self.flat_items = grouping::build_flat(&self.view_items);
        }

        self.cursor = grouping::first_item_index(&self.flat_items).unwrap_or(0);
        self.list_scroll_offset = 0;
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text,
            is_error,
            ticks_remaining: 12, // ~3 seconds at 250ms tick
        });
    }
}
