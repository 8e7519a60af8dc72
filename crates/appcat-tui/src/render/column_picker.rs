use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, Column};
use crate::render::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let popup_height = Column::ALL.len() as u16 + 2;
    let popup_width = 26u16.min(area.width.saturating_sub(4));
    let popup = centered_rect_fixed(popup_width, popup_height, area);

    frame.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(" Columns ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = Column::ALL
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            let checked = if app.visible_columns[idx] { "x" } else { " " };
            let style = if idx == app.column_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(Span::styled(format!("[{checked}] {}", col.title()), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
