//! Color theme definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// A complete color theme for the TUI.
pub struct Theme {
    pub header_bar: Style,
    pub status_bar: Style,
    pub list_selected: Style,
    pub list_urgent: Style,
    pub list_header: Style,
    pub list_normal: Style,
    pub detail_label: Style,
    pub detail_value: Style,
    pub border: Style,
    pub popup: Style,
    pub popup_title: Style,
    pub hint_key: Style,
    pub help_dim: Style,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .bg(Color::Rgb(30, 30, 46)),
            status_bar: Style::default()
                .fg(Color::Rgb(150, 150, 170))
                .bg(Color::Rgb(30, 30, 46)),
            list_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 100)),
            list_urgent: Style::default().fg(Color::Yellow),
            list_header: Style::default()
                .fg(Color::Rgb(180, 180, 200))
                .bg(Color::Rgb(40, 40, 60))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(200, 200, 220)),
            detail_label: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            detail_value: Style::default().fg(Color::Rgb(220, 220, 230)),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            popup: Style::default()
                .fg(Color::Rgb(220, 220, 230))
                .bg(Color::Rgb(20, 20, 35)),
            popup_title: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            hint_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            help_dim: Style::default().fg(Color::Rgb(140, 140, 160)),
        }
    }

    /// Light theme for bright terminals.
    pub fn light() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(40, 40, 60))
                .bg(Color::Rgb(220, 220, 235)),
            status_bar: Style::default()
                .fg(Color::Rgb(90, 90, 110))
                .bg(Color::Rgb(220, 220, 235)),
            list_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(90, 90, 160)),
            list_urgent: Style::default().fg(Color::Rgb(160, 100, 0)),
            list_header: Style::default()
                .fg(Color::Rgb(50, 50, 80))
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(40, 40, 60)),
            detail_label: Style::default()
                .fg(Color::Rgb(40, 80, 170))
                .add_modifier(Modifier::BOLD),
            detail_value: Style::default().fg(Color::Rgb(40, 40, 60)),
            border: Style::default().fg(Color::Rgb(150, 150, 170)),
            popup: Style::default()
                .fg(Color::Rgb(40, 40, 60))
                .bg(Color::Rgb(235, 235, 245)),
            popup_title: Style::default()
                .fg(Color::Rgb(40, 80, 170))
                .add_modifier(Modifier::BOLD),
            hint_key: Style::default()
                .fg(Color::Rgb(160, 100, 0))
                .add_modifier(Modifier::BOLD),
            help_dim: Style::default().fg(Color::Rgb(120, 120, 140)),
        }
    }

    /// Resolve a theme by its config name. Unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
