use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use super::help_line;
use super::route::Route;
use crate::about::render_about;
use crate::history::history_render::{self, render_list};
use crate::notification::render_notification;
use crate::prefs::prefs_render::render_prefs;
use crate::theme;
use crate::window::WindowControl;

const LATEST_PREVIEW_LEN: usize = 40;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        if !self.window.is_visible() {
            let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                .split(frame.area());
            self.render_status_bar(frame, layout[0]);
            return;
        }

        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let page_area = layout[0];

        match self.route {
            Route::Root => render_list(&mut self.history, frame, page_area),
            Route::Prefs => render_prefs(&self.prefs, frame, page_area),
            Route::About => {
                render_list(&mut self.history, frame, page_area);
                render_about(frame, page_area);
            }
        }

        help_line::render_line(self.route, frame, layout[1]);

        render_notification(frame, &mut self.notification);
    }

    /// The collapsed one-line view shown while the window is hidden.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let text_style = Style::default().fg(theme::status_bar::TEXT);

        let mut spans = vec![
            Span::styled(" clipdeck ", theme::status_bar::NAME),
            Span::styled(format!("│ {} entries ", self.history.len()), text_style),
        ];

        if let Some(latest) = self.history.items().first() {
            spans.push(Span::styled("│ ", text_style));
            spans.push(Span::styled(
                history_render::display_text(&latest.value, LATEST_PREVIEW_LEN),
                Style::default().fg(theme::status_bar::LATEST),
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled("│ any key to show • q to quit", text_style));

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme::status_bar::BACKGROUND));
        frame.render_widget(bar, area);
    }
}
