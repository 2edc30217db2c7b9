//! Static About page

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::theme;
use crate::widgets::popup;

/// Key bindings listed on the About page, as (keys, description).
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "Next entry"),
    ("k / ↑", "Previous entry"),
    ("Enter / Space", "Paste selected entry"),
    ("Click", "Paste clicked entry"),
    ("Esc", "Hide (any key shows again)"),
    ("Ctrl+P", "Preferences"),
    ("Ctrl+A", "About"),
    ("Ctrl+Q / Ctrl+C", "Quit"),
];

const KEY_COLUMN_WIDTH: usize = 18;

pub fn render_about(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("clipdeck {}", env!("CARGO_PKG_VERSION")),
            theme::about::HEADING,
        )),
        Line::from(Span::styled(
            env!("CARGO_PKG_DESCRIPTION"),
            Style::default().fg(theme::about::TEXT),
        )),
        Line::from(""),
    ];

    lines.extend(KEY_BINDINGS.iter().map(|(keys, description)| {
        Line::from(vec![
            Span::styled(format!("{:<KEY_COLUMN_WIDTH$}", keys), theme::about::KEY),
            Span::styled(*description, Style::default().fg(theme::about::TEXT)),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to go back",
        Style::default().fg(theme::about::FOOTER),
    )));

    let height = lines.len() as u16 + 2;
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let popup_area = popup::centered_popup(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" About ")
        .title_style(theme::about::TITLE)
        .border_style(Style::default().fg(theme::about::BORDER))
        .style(Style::default().bg(theme::about::BACKGROUND))
        .padding(Padding::horizontal(1));

    popup::clear_area(frame, popup_area);
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_about(f, f.area())).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_about_shows_name_and_version() {
        let output = render_to_string(80, 24);
        assert!(output.contains(&format!("clipdeck {}", env!("CARGO_PKG_VERSION"))));
        assert!(output.contains(" About "));
    }

    #[test]
    fn test_about_lists_every_binding() {
        let output = render_to_string(80, 24);
        for (_, description) in KEY_BINDINGS {
            assert!(output.contains(description), "missing `{}`", description);
        }
    }

    #[test]
    fn test_about_survives_tiny_terminal() {
        render_to_string(10, 3);
    }
}
