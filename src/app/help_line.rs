use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::route::Route;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

pub(super) fn route_hints(route: Route) -> Vec<(&'static str, &'static str)> {
    match route {
        Route::Root => {
            hints!["↑↓/jk" => "Select", "Enter" => "Paste", "Esc" => "Hide", "Ctrl+P" => "Preferences", "Ctrl+A" => "About", "Ctrl+Q" => "Quit"]
        }
        Route::Prefs => {
            hints!["↑↓/jk" => "Move", "Space" => "Toggle", "←→/+-" => "Limit", "Esc" => "Back", "Ctrl+Q" => "Quit"]
        }
        Route::About => hints!["Esc" => "Back", "Ctrl+Q" => "Quit"],
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub(super) fn render_line(route: Route, frame: &mut Frame, area: Rect) {
    let spans = build_styled_spans(&route_hints(route));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_offers_quit() {
        for route in [Route::Root, Route::About, Route::Prefs] {
            assert!(route_hints(route).contains(&("Ctrl+Q", "Quit")));
        }
    }

    #[test]
    fn test_spans_separate_hints() {
        let spans = build_styled_spans(&[("a", "one"), ("b", "two")]);
        let text: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, " a one \u{2022} b two");
    }
}
