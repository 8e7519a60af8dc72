use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(" /", Style::default().fg(Color::Cyan)),
        Span::raw(app.search_query.clone()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
        Span::styled(
            "  (Enter keep · Esc clear)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
