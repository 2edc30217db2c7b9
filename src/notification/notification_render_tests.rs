//! Tests for notification_render

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_lines(notification: &mut NotificationState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

#[test]
fn test_notification_drawn_top_right() {
    let mut notification = NotificationState::new();
    notification.show("Preferences saved");

    let lines = render_lines(&mut notification, 60, 10);

    // Border row, text row, border row starting at the margin.
    assert!(lines[3].contains(" Preferences saved "));
    assert!(lines[3].trim_end().ends_with("│"));
    assert_eq!(lines[3].len() - lines[3].trim_end().len(), 2);
    assert!(lines[0].trim().is_empty());
}

#[test]
fn test_nothing_drawn_without_notification() {
    let mut notification = NotificationState::new();

    let lines = render_lines(&mut notification, 40, 8);

    assert!(lines.iter().all(|line| line.trim().is_empty()));
}

#[test]
fn test_tiny_terminal_skips_render() {
    let mut notification = NotificationState::new();
    notification.show_warning("Config file is invalid");

    let lines = render_lines(&mut notification, 6, 4);

    assert!(lines.iter().all(|line| line.trim().is_empty()));
}
