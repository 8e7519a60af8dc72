use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

const ENTRIES: [(&str, &str); 4] = [
    ("/", "Search"),
    ("f", "Category filter"),
    ("s", "Sync catalog"),
    ("o", "Settings"),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.menu_collapsed { "" } else { " Menu " };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = ENTRIES
        .iter()
        .map(|(key, label)| {
            let mut spans = vec![Span::styled(format!(" {key}"), key_style)];
            if !app.menu_collapsed {
                spans.push(Span::raw(format!("  {label}")));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    // Collapse toggle hint pinned to the bottom row.
    let hint = if app.menu_collapsed { " m ▶" } else { " m  ◀ collapse" };
    let hint_area = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        hint_area,
    );
}
