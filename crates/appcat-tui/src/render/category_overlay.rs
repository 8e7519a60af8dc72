use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;
use crate::render::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let categories = app.available_categories();
    let option_count = 1 + categories.len();

    let popup_height = (option_count as u16).min(15) + 2;
    let popup_width = 34u16.min(area.width.saturating_sub(4));
    let popup = centered_rect_fixed(popup_width, popup_height, area);

    frame.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(" Category ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut labels = vec!["All".to_owned()];
    labels.extend(categories);

    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let selected = idx == app.category_cursor;
            let active = match idx {
                0 => app.category_filter.is_none(),
                _ => app.category_filter.as_deref() == Some(label.as_str()),
            };

            let marker = if active { "● " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(Span::styled(format!("{marker}{label}"), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
