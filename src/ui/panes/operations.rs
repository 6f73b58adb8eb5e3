//! Operation log pane rendering

use crate::oplog::{LogOrder, OperationLog};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the operations pane
pub fn render_operations_pane(
    frame: &mut Frame,
    area: Rect,
    log: &OperationLog,
    scroll_offset: &mut usize,
) {
    let order = match log.order() {
        LogOrder::NewestFirst => "newest first",
        LogOrder::OldestFirst => "oldest first",
    };
    let block = Block::default()
        .title(format!(" Operations ({}) ", order))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no operations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = log
        .iter()
        .map(|record| {
            let text_style = if record.applied {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::ITALIC)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", record.seq + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(record.description.clone(), text_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Borders

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
