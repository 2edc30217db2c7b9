use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Render the current notification in the top-right corner.
///
/// Call after the page so the toast is drawn on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };
    let colors = notif.kind.colors();

    // message + 2 padding + 2 borders
    let width = Line::from(notif.message.as_str()).width() as u16 + 4;
    let height = 3;

    let frame_area = frame.area();
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: MARGIN,
        width: width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: height.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
