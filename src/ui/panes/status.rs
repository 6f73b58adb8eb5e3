//! Status bar rendering with input field, keybindings and busy indicator

use crate::ui::app::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub input: &'a str,
    pub view: View,
    pub is_animating: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let input_text = if data.input.is_empty() {
        " value: _ ".to_string()
    } else {
        format!(" value: {} ", data.input)
    };

    let left_spans = vec![
        Span::styled(
            input_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", data.message), bar.fg(DEFAULT_THEME.fg)),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = match data.view {
        View::Queue => &[("e", "enqueue"), ("d", "dequeue"), ("x", "clear")],
        View::List => &[
            ("f/b", "insert"),
            ("h/l", "delete"),
            ("r", "reverse"),
            ("t", "sll/dll"),
        ],
    };

    let mut right_spans = Vec::new();
    for (key, desc) in bindings
        .iter()
        .chain(&[("⇥", "view"), ("c", "code"), ("q", "quit")])
    {
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
        right_spans.push(Span::styled("│", sep_style));
    }

    if data.is_animating {
        right_spans.push(Span::styled(
            " ▶ ANIMATING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        right_spans.push(Span::styled(
            " READY ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
