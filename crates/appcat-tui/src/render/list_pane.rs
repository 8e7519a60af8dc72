use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};

use crate::app::{App, Column};
use crate::grouping::ListRow;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Packages ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let columns = app.visible_column_list();

    // One row of the viewport goes to the table header.
    let visible_height = (inner.height as usize).saturating_sub(1);
    if visible_height == 0 || app.flat_items.is_empty() {
        return;
    }

    let scroll_offset = compute_scroll_offset(app.cursor, app.list_scroll_offset, visible_height);

    let header = Row::new(
        columns
            .iter()
            .map(|col| Cell::from(col.title()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

    let rows: Vec<Row> = app
        .flat_items
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(idx, row)| render_row(row, &columns, idx == app.cursor, app))
        .collect();

    let widths: Vec<Constraint> = columns.iter().map(|col| column_width(*col)).collect();

    let table = Table::new(rows, widths).header(header);
    frame.render_widget(table, inner);

    // Scrollbar when content exceeds the viewport.
    if app.flat_items.len() > visible_height {
        let mut scrollbar_state = ScrollbarState::new(app.flat_items.len())
            .position(scroll_offset)
            .viewport_content_length(visible_height);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::Id => Constraint::Length(24),
        Column::Name => Constraint::Min(20),
        Column::Category => Constraint::Length(18),
    }
}

fn render_row<'a>(row: &ListRow, columns: &[Column], is_selected: bool, app: &App) -> Row<'a> {
    match row {
        ListRow::Header { label, count } => {
            let mut cells = vec![Cell::from(format!("{label} ({count})"))];
            cells.resize(columns.len(), Cell::from(""));

            Row::new(cells).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }
        ListRow::Item { item_index } => {
            let mut texts: Vec<String> = match app.view_items.get(*item_index) {
                Some(item) => columns
                    .iter()
                    .map(|col| match col {
                        Column::Id => item.id.clone(),
                        Column::Name => item.name.clone(),
                        Column::Category => item.category.clone().unwrap_or_default(),
                    })
                    .collect(),
                None => vec!["???".to_owned(); columns.len()],
            };

            // Indent under the group headers.
            if let Some(first) = texts.first_mut() {
                *first = format!("  {first}");
            }

            let cells: Vec<Cell> = texts.into_iter().map(Cell::from).collect();

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(cells).style(style)
        }
    }
}

fn compute_scroll_offset(cursor: usize, current_offset: usize, visible_height: usize) -> usize {
    if cursor < current_offset {
        cursor
    } else if cursor >= current_offset + visible_height {
        cursor.saturating_sub(visible_height - 1)
    } else {
        current_offset
    }
}
