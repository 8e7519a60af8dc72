use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, LoadingState};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    // A transient message takes over the whole bar.
    if let Some(msg) = &app.status_message {
        let style = if msg.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        let line = Line::from(Span::styled(format!(" {}", msg.text), style));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut spans = vec![Span::raw(format!(" {} packages", count_items(app)))];

    if app.loading == LoadingState::Syncing {
        spans.push(Span::styled(
            "  syncing…",
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.settings.show_key_hints {
        spans.push(Span::styled(
            "  ·  / search · f category · v columns · m menu · o settings · s sync · q quit",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn count_items(app: &App) -> usize {
    app.view_items.len()
}
