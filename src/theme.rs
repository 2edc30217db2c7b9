//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` and never hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette shared by the component modules below.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);
    pub const TEXT_SOFT: Color = Color::Rgb(180, 182, 200);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Clipboard history list
pub mod history {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const SCROLLBAR: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);

    pub const ITEM_NORMAL_FG: Color = palette::TEXT_SOFT;
    pub const ITEM_SELECTED_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
}

/// Preferences page
pub mod prefs {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);

    pub const LABEL: Color = palette::TEXT_SOFT;
    pub const FOCUSED_FG: Color = palette::TEXT;
    pub const FOCUSED_BG: Color = palette::BG_HOVER;

    pub const CHECKED: Color = palette::GREEN;
    pub const UNCHECKED: Color = palette::TEXT_MUTED;
    pub const STEPPER: Color = palette::PINK;
    pub const VALUE: Color = palette::YELLOW;

    pub const LOADING: Color = palette::TEXT_MUTED;
}

/// About page
pub mod about {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const HEADING: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(palette::YELLOW)
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const FOOTER: Color = palette::TEXT_DIM;
}

/// Key hints under the current page
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// One-line bar shown while the window is hidden
pub mod status_bar {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const NAME: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT_MUTED;
    pub const LATEST: Color = palette::TEXT_SOFT;
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };
}
