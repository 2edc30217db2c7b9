use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, HighlightSpacing, List, ListItem},
};

use super::HistoryState;
use crate::theme;
use crate::widgets::scrollbar;

const SELECTED_SYMBOL: &str = " ► ";

/// Render the clipboard history list into `area`.
///
/// Records the inner list area so mouse clicks can be mapped back to rows.
pub fn render_list(history: &mut HistoryState, frame: &mut Frame, area: Rect) {
    history.clamp_selection();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" Clipboard History ({}) ", history.len()))
        .title_style(theme::history::TITLE)
        .border_style(Style::default().fg(theme::history::BORDER))
        .style(Style::default().bg(theme::history::BACKGROUND));

    let inner = block.inner(area);
    history.list_area = Some(inner);

    // Room left for text after the selection gutter and a trailing space
    let max_text_len = (inner.width as usize).saturating_sub(SELECTED_SYMBOL.chars().count() + 1);

    let rows: Vec<ListItem> = history
        .items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(Span::styled(
                display_text(&item.value, max_text_len),
                Style::default().fg(theme::history::ITEM_NORMAL_FG),
            )))
        })
        .collect();

    let selected = (!history.is_empty()).then(|| history.selected_index());
    history.list_state.select(selected);

    let list = List::new(rows)
        .block(block)
        .highlight_symbol(SELECTED_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(
            Style::default()
                .fg(theme::history::ITEM_SELECTED_FG)
                .bg(theme::history::ITEM_SELECTED_BG)
                .add_modifier(theme::history::ITEM_SELECTED_MODIFIER),
        );

    frame.render_stateful_widget(list, area, &mut history.list_state);

    let scrollbar_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    scrollbar::render_vertical_scrollbar_styled(
        frame,
        scrollbar_area,
        history.len(),
        inner.height as usize,
        history.list_state.offset(),
        theme::history::SCROLLBAR,
    );
}

/// Single-line preview of an entry: line breaks and tabs become spaces and
/// text past `max_len` characters is cut with an ellipsis.
pub fn display_text(value: &str, max_len: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flat.chars().count() > max_len {
        let truncated: String = flat.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        flat
    }
}

#[cfg(test)]
#[path = "history_render_tests.rs"]
mod history_render_tests;
