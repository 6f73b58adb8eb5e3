//! Structure pane rendering
//!
//! Draws the queue as a row of slots and a linked list as a chain of boxes joined by
//! arrows. Elements highlighted by the current animation step are drawn inverted.
//! Below the drawing the pane shows the step message and the step counter.

use crate::animation::AnimationState;
use crate::model::{
    list::{LinkedList, ListKind},
    queue::Queue,
    NodeId, Value,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CELL_WIDTH: usize = 7;

fn pane_block(title: String, is_busy: bool) -> Block<'static> {
    let border_style = if is_busy {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn cell(value: Value, highlighted: bool) -> Span<'static> {
    let style = if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    };
    Span::styled(format!("[{:^5}]", value), style)
}

fn footer<K: Eq + std::hash::Hash>(
    lines: &mut Vec<Line<'static>>,
    state: &AnimationState<K>,
    progress: Option<(usize, usize)>,
    summary: String,
) {
    lines.push(Line::default());
    if !state.message.is_empty() {
        lines.push(Line::from(Span::styled(
            state.message.clone(),
            Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
        )));
    }
    let mut info = vec![Span::styled(summary, Style::default().fg(DEFAULT_THEME.comment))];
    if let Some((step, total)) = progress {
        info.push(Span::styled(
            format!("  step {}/{}", step + 1, total),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    lines.push(Line::from(info));
}

/// Render a queue with its empty slots
pub fn render_queue_pane(
    frame: &mut Frame,
    area: Rect,
    queue: &Queue,
    state: &AnimationState<usize>,
    progress: Option<(usize, usize)>,
) {
    let block = pane_block(" Queue ".to_string(), progress.is_some());

    let mut indices = Vec::new();
    let mut slots = Vec::new();
    let mut markers = Vec::new();

    for i in 0..queue.capacity() {
        indices.push(Span::styled(
            format!("{:^width$} ", i, width = CELL_WIDTH),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        match queue.get(i) {
            Some(node) => slots.push(cell(node.value, state.is_highlighted(&i))),
            None => slots.push(Span::styled(
                format!("[{:5}]", ""),
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        }
        slots.push(Span::raw(" "));

        let is_front = i == 0 && !queue.is_empty();
        let is_rear = queue.len().checked_sub(1) == Some(i);
        let marker = match (is_front, is_rear) {
            (true, true) => "F/R",
            (true, false) => "FRONT",
            (false, true) => "REAR",
            (false, false) => "",
        };
        markers.push(Span::styled(
            format!("{:^width$} ", marker, width = CELL_WIDTH),
            Style::default().fg(DEFAULT_THEME.pointer),
        ));
    }

    let mut lines = vec![Line::from(indices), Line::from(slots), Line::from(markers)];
    footer(
        &mut lines,
        state,
        progress,
        format!("size {}/{}", queue.len(), queue.capacity()),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render a linked list as a chain
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    list: &LinkedList,
    state: &AnimationState<NodeId>,
    progress: Option<(usize, usize)>,
) {
    let title = match list.kind() {
        ListKind::Sll => " Singly Linked List ",
        ListKind::Dll => " Doubly Linked List ",
    };
    let block = pane_block(title.to_string(), progress.is_some());

    let pointer = Style::default().fg(DEFAULT_THEME.pointer);
    let null = Style::default().fg(DEFAULT_THEME.comment);
    let link = match list.kind() {
        ListKind::Sll => " → ",
        ListKind::Dll => " ⇄ ",
    };

    let mut chain = vec![Span::styled("HEAD → ", pointer)];
    if list.kind() == ListKind::Dll && !list.is_empty() {
        chain.push(Span::styled("NULL ← ", null));
    }
    for (i, node) in list.iter().enumerate() {
        if i > 0 {
            chain.push(Span::styled(link, pointer));
        }
        chain.push(cell(node.value, state.is_highlighted(&node.id)));
    }
    if list.is_empty() {
        chain.push(Span::styled("NULL", null));
    } else {
        chain.push(Span::styled(" → ", pointer));
        chain.push(Span::styled("NULL", null));
    }
    if list.kind() == ListKind::Dll {
        chain.push(Span::styled("   ← TAIL", pointer));
    }

    let mut lines = vec![Line::from(chain)];
    footer(&mut lines, state, progress, format!("{} node(s)", list.len()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
