use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, SETTINGS_COUNT};
use crate::render::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let popup_height = SETTINGS_COUNT as u16 + 2;
    let popup_width = 32u16.min(area.width.saturating_sub(4));
    let popup = centered_rect_fixed(popup_width, popup_height, area);

    frame.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(" Settings ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let entries = [
        ("Group by category", app.settings.group_by_category),
        ("Show key hints", app.settings.show_key_hints),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(idx, (label, enabled))| {
            let checked = if *enabled { "x" } else { " " };
            let style = if idx == app.settings_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(Span::styled(format!("[{checked}] {label}"), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
