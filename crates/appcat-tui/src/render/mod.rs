mod category_overlay;
mod column_picker;
mod list_pane;
mod search_bar;
mod settings_overlay;
mod side_menu;
mod status_bar;
mod sync_overlay;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Mode};

/// Side menu widths, matching the expanded/collapsed states.
const MENU_WIDTH_EXPANDED: u16 = 22;
const MENU_WIDTH_COLLAPSED: u16 = 6;

pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Outer layout: title bar (1), main content, bottom bar (1).
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, outer[0], app);

    // Main content: side menu and catalog pane.
    let menu_width = if app.menu_collapsed {
        MENU_WIDTH_COLLAPSED
    } else {
        MENU_WIDTH_EXPANDED
    };
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(menu_width), Constraint::Min(20)])
        .split(outer[1]);

    side_menu::render(frame, panes[0], app);
    list_pane::render(frame, panes[1], app);

    // Bottom bar: depends on mode.
    match app.mode {
        Mode::Search => search_bar::render(frame, outer[2], app),
        _ => status_bar::render(frame, outer[2], app),
    }

    // Overlays (rendered on top).
    match app.mode {
        Mode::CategoryFilter => category_overlay::render(frame, size, app),
        Mode::ColumnPicker => column_picker::render(frame, size, app),
        Mode::Settings => settings_overlay::render(frame, size, app),
        Mode::SyncProgress => sync_overlay::render(frame, size, app),
        Mode::Normal | Mode::Search => {}
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let filter_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(" Software Catalog", title_style)];

    if let Some(ref category) = app.category_filter {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("{{category:{category}}}"), filter_style));
    }

    if !app.search_query.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("{{search:{}}}", app.search_query),
            filter_style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Helper to create a centered rectangle with fixed dimensions.
pub(crate) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [vertical_area] = vertical.areas(area);
    let [centered] = horizontal.areas(vertical_area);
    centered
}
