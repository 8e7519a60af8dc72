use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, LoadingState};
use crate::render::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let syncing = app.loading == LoadingState::Syncing;

    let message = if syncing {
        "Syncing catalog…".to_owned()
    } else if let Some(report) = &app.sync_report {
        report.message.clone()
    } else {
        "Syncing catalog…".to_owned()
    };

    let popup_width = (message.len() as u16 + 6)
        .max(30)
        .min(area.width.saturating_sub(4));
    let popup = centered_rect_fixed(popup_width, 5, area);

    frame.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(" Sync ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = vec![Line::from(Span::raw(message)).alignment(Alignment::Center)];
    if !syncing {
        lines.push(
            Line::from(Span::styled(
                "(Enter to dismiss)",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
