//! Render functions for the dashboard: header bar, item list, detail panel,
//! status bar, and the help popup.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use super::{App, LayoutMode};

/// Version string shown in the status bar and help popup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Items at or above this importance are highlighted in the list.
const URGENT_IMPORTANCE: u8 = 5;

/// Render the entire TUI frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Vertical layout: header (1) + content (flex) + status (1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Min(3),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    render_header_bar(frame, app, vertical[0]);

    // Main content — depends on layout mode
    match app.layout {
        LayoutMode::ListOnly => {
            render_item_list(frame, app, vertical[1]);
        }
        LayoutMode::Split => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(vertical[1]);
            render_item_list(frame, app, split[0]);
            render_item_detail(frame, app, split[1]);
        }
    }

    render_status_bar(frame, app, vertical[2]);

    // Popup (rendered on top of everything)
    if app.show_help {
        render_help_popup(frame, app);
    }
}

/// Render the top header bar with app name and item count.
fn render_header_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let total = app.item_count();
    let mut spans = vec![
        Span::styled(" dispatchdeck", theme.header_bar),
        Span::styled(format!(" | {total} items"), theme.header_bar),
    ];

    // Right-aligned help hint
    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let right_text = " [?] Help ";
    if area.width as usize > left_len + right_text.len() {
        let padding = area.width as usize - left_len - right_text.len();
        spans.push(Span::styled(" ".repeat(padding), theme.header_bar));
    }
    spans.push(Span::styled(right_text, theme.header_bar));

    let bar = Paragraph::new(Line::from(spans)).style(theme.header_bar);
    frame.render_widget(bar, area);
}

/// Render the item list table.
fn render_item_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" Dispatch ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // Column widths
    let (imp_w, kind_w, owner_w) = app.column_widths;
    let owner_w = if app.show_owner_column { owner_w } else { 0 };
    let fixed = imp_w + kind_w + owner_w + 3; // 3 for padding
    let title_w = inner.width.saturating_sub(fixed);

    let mut constraints = vec![
        Constraint::Length(imp_w),
        Constraint::Length(kind_w),
        Constraint::Min(title_w),
    ];
    if app.show_owner_column {
        constraints.push(Constraint::Length(owner_w));
    }

    let mut header_cells = vec!["!".to_string(), "Kind".to_string(), "Title".to_string()];
    if app.show_owner_column {
        header_cells.push("Owner".to_string());
    }
    let header = Row::new(header_cells).style(theme.list_header);

    let rows: Vec<Row> = app
        .ctrl
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = idx == app.selected;

            let mut cells = vec![
                item.importance.to_string(),
                item.kind.to_string(),
                truncate_str(&item.title, title_w as usize),
            ];
            if app.show_owner_column {
                cells.push(truncate_str(&item.owner.name, owner_w as usize));
            }

            let style = if is_selected {
                theme.list_selected
            } else if item.importance >= URGENT_IMPORTANCE {
                theme.list_urgent
            } else {
                theme.list_normal
            };

            Row::new(cells).style(style)
        })
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(1);

    frame.render_widget(table, inner);
}

/// Render the detail panel for the selected item.
fn render_item_detail(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" Item ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(item) = app.current_item() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No item selected",
            theme.help_dim,
        )));
        frame.render_widget(empty, inner);
        return;
    };

    let field = |label: &str, value: String| -> Line {
        Line::from(vec![
            Span::styled(format!(" {label:<12}"), theme.detail_label),
            Span::styled(value, theme.detail_value),
        ])
    };

    let lines = vec![
        field("Title", item.title.clone()),
        field("Owner", item.owner.name.clone()),
        field("Gravatar", item.owner.gravatar.clone()),
        field("Importance", item.importance.to_string()),
        field("Kind", item.kind.to_string()),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Render the status bar at the bottom with hints and version.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let version_text = format!("v{VERSION} ");
    let version_width = version_text.len() as u16;

    // Split: hints (flexible) | version (fixed)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(version_width)])
        .split(area);

    // Left side: hints or transient status message
    let content = if let Some((msg, _)) = &app.status_message {
        Line::from(Span::styled(format!(" {msg}"), theme.status_bar))
    } else {
        let hints = build_hints(app);
        let mut spans = Vec::new();
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", theme.status_bar));
            }
            spans.push(Span::styled(format!(" {key}"), theme.hint_key));
            spans.push(Span::styled(format!(":{desc}"), theme.status_bar));
        }
        Line::from(spans)
    };

    let bar = Paragraph::new(content).style(theme.status_bar);
    frame.render_widget(bar, chunks[0]);

    // Right side: version
    let version = Paragraph::new(Line::from(Span::styled(version_text, theme.border)))
        .alignment(Alignment::Right)
        .style(theme.status_bar);
    frame.render_widget(version, chunks[1]);
}

/// Return context-sensitive hint pairs (key, description).
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("j/k", "select"), ("g", "fetch")];

    match app.layout {
        LayoutMode::ListOnly => hints.push(("Enter", "detail")),
        LayoutMode::Split => hints.push(("Esc", "close")),
    }

    hints.push(("?", "help"));
    hints.push(("q", "quit"));
    hints
}

/// Render the help popup centered on screen.
fn render_help_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let screen = frame.area();

    let shortcuts: &[(&str, &str)] = &[
        ("j / k", "Select next / previous item"),
        ("Enter / 2", "Open the detail panel"),
        ("Esc / 1", "Close the detail panel"),
        ("g", "Trigger a mail fetch"),
        ("Home / End", "Jump to first / last item"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("  dispatchdeck", theme.popup_title),
        Span::styled(format!("  v{VERSION}"), theme.help_dim),
    ]));
    lines.push(Line::from(Span::styled(
        "  Terminal dashboard for dispatch mail items",
        theme.help_dim,
    )));
    lines.push(Line::from(""));
    for (key, desc) in shortcuts {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), theme.hint_key),
            Span::styled((*desc).to_string(), theme.popup),
        ]));
    }

    let popup_width = 48u16.min(screen.width.saturating_sub(4));
    let popup_height = (lines.len() as u16 + 3).min(screen.height.saturating_sub(2));
    let area = centered_rect_exact(popup_width, popup_height, screen);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .title(" Help ")
        .style(theme.popup);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Compute a centered rectangle of exact width/height within `screen`.
fn centered_rect_exact(width: u16, height: u16, screen: Rect) -> Rect {
    let x = screen.x + screen.width.saturating_sub(width) / 2;
    let y = screen.y + screen.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(screen.width), height.min(screen.height))
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    let width = UnicodeWidthStr::width(s);
    if width <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let mut result = String::new();
        let mut current_width = 0;
        for ch in s.chars() {
            let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width + 3 > max_width {
                break;
            }
            result.push(ch);
            current_width += ch_width;
        }
        result.push_str("...");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("Read this!", 20), "Read this!");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let out = truncate_str("Could you do this?", 10);
        assert!(out.ends_with("..."));
        assert!(UnicodeWidthStr::width(out.as_str()) <= 10);
    }

    #[test]
    fn test_centered_rect_fits_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = centered_rect_exact(48, 12, screen);
        assert!(area.x + area.width <= 80);
        assert!(area.y + area.height <= 24);
    }
}
