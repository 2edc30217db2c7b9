//! Tests for prefs/prefs_render

use super::*;
use crate::config::Config;
use crate::gateway::{CommandKind, Reply, Response};
use crate::test_utils::test_helpers::MockGateway;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_lines(prefs: &PrefsState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_prefs(prefs, f, f.area()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn loaded(config: Config) -> PrefsState {
    let mut prefs = PrefsState::default();
    prefs.apply_config_response(Response::new(
        1,
        CommandKind::GetConfig,
        Ok(Reply::Config(config)),
    ));
    prefs
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_unloaded_shows_placeholder_only() {
    let lines = render_lines(&PrefsState::default(), 50, 8);

    assert!(contains(&lines, LOADING_TEXT));
    assert!(!contains(&lines, AUTOSTART_LABEL));
}

#[test]
fn test_loaded_autostart_renders_checked() {
    let prefs = loaded(Config {
        autostart: true,
        ..Config::default()
    });

    let lines = render_lines(&prefs, 50, 8);

    assert!(contains(&lines, &format!("[x] {}", AUTOSTART_LABEL)));
    assert!(!contains(&lines, LOADING_TEXT));
}

#[test]
fn test_exactly_one_autostart_toggle() {
    let prefs = loaded(Config::default());

    let lines = render_lines(&prefs, 50, 8);

    let toggles = lines
        .iter()
        .filter(|line| line.contains(AUTOSTART_LABEL))
        .count();
    assert_eq!(toggles, 1);
    assert!(contains(&lines, &format!("[ ] {}", AUTOSTART_LABEL)));
}

#[test]
fn test_history_limit_value_shown() {
    let prefs = loaded(Config {
        history_limit: 120,
        ..Config::default()
    });

    let lines = render_lines(&prefs, 50, 8);

    assert!(contains(&lines, HISTORY_LIMIT_LABEL));
    assert!(contains(&lines, "◀ 120 ▶"));
}

#[test]
fn test_history_limit_shows_enforced_value() {
    let prefs = loaded(Config {
        history_limit: 5000,
        ..Config::default()
    });

    let lines = render_lines(&prefs, 50, 8);

    assert!(contains(&lines, "◀ 1000 ▶"));
    assert!(!contains(&lines, "5000"));
}

#[test]
fn test_pending_write_is_rendered_with_saving_title() {
    let mut gateway = MockGateway::new();
    let mut prefs = loaded(Config::default());
    prefs.toggle_autostart(&mut gateway);

    let lines = render_lines(&prefs, 50, 8);

    assert!(lines[0].contains("Preferences (saving…)"));
    assert!(contains(&lines, &format!("[x] {}", AUTOSTART_LABEL)));
}

#[test]
fn test_focus_marker_follows_focus() {
    let mut prefs = loaded(Config::default());
    prefs.focus_next();

    let lines = render_lines(&prefs, 50, 8);

    let marked: Vec<&String> = lines.iter().filter(|line| line.contains('►')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains(HISTORY_LIMIT_LABEL));
}
