use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{PrefsField, PrefsState};
use crate::theme;

pub const LOADING_TEXT: &str = "Loading preferences…";
pub const AUTOSTART_LABEL: &str = "Launch clipdeck at login";
pub const HISTORY_LIMIT_LABEL: &str = "History limit";

/// Render the preferences page into `area`.
pub fn render_prefs(prefs: &PrefsState, frame: &mut Frame, area: Rect) {
    let title = if prefs.is_saving() {
        " Preferences (saving…) "
    } else {
        " Preferences "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(theme::prefs::TITLE)
        .border_style(Style::default().fg(theme::prefs::BORDER))
        .style(Style::default().bg(theme::prefs::BACKGROUND));

    let Some(config) = prefs.displayed() else {
        let loading = Paragraph::new(Line::from(Span::styled(
            format!(" {}", LOADING_TEXT),
            Style::default().fg(theme::prefs::LOADING),
        )))
        .block(block);
        frame.render_widget(loading, area);
        return;
    };

    let checkbox = if config.autostart { "[x]" } else { "[ ]" };
    let checkbox_style = if config.autostart {
        Style::default().fg(theme::prefs::CHECKED)
    } else {
        Style::default().fg(theme::prefs::UNCHECKED)
    };

    let lines = vec![
        Line::from(""),
        control_line(
            prefs.focus() == PrefsField::Autostart,
            vec![
                Span::styled(checkbox, checkbox_style),
                Span::raw(" "),
                Span::raw(AUTOSTART_LABEL),
            ],
        ),
        control_line(
            prefs.focus() == PrefsField::HistoryLimit,
            vec![
                Span::raw(format!("{:<16}", HISTORY_LIMIT_LABEL)),
                Span::styled("◀ ", Style::default().fg(theme::prefs::STEPPER)),
                Span::styled(
                    config.effective_history_limit().to_string(),
                    Style::default().fg(theme::prefs::VALUE),
                ),
                Span::styled(" ▶", Style::default().fg(theme::prefs::STEPPER)),
            ],
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn control_line(focused: bool, spans: Vec<Span<'static>>) -> Line<'static> {
    let (marker, style) = if focused {
        (
            " ► ",
            Style::default()
                .fg(theme::prefs::FOCUSED_FG)
                .bg(theme::prefs::FOCUSED_BG),
        )
    } else {
        ("   ", Style::default().fg(theme::prefs::LABEL))
    };

    let mut all = vec![Span::raw(marker)];
    all.extend(spans);
    Line::from(all).style(style)
}

#[cfg(test)]
#[path = "prefs_render_tests.rs"]
mod prefs_render_tests;
