//! Supplier list panel: filter inputs and the filtered results

use crate::components::widgets::render_text_input;
use crate::model::{Focus, Supplier, SupplierFilter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Shown instead of the list when nothing matches
pub const EMPTY_PLACEHOLDER: &str = "No suppliers registered.";

/// Everything the list panel needs to render
pub struct ListView<'a> {
    /// Suppliers left after filtering, in registration order
    pub visible: &'a [&'a Supplier],
    /// Number of registered suppliers before filtering
    pub total: usize,
    pub filter: &'a SupplierFilter,
    pub focus: Focus,
}

/// Keep the list selection inside the visible range
pub fn clamp_selection(list_state: &mut ListState, visible_len: usize) {
    if visible_len == 0 {
        list_state.select(None);
        return;
    }
    match list_state.selected() {
        Some(idx) if idx >= visible_len => list_state.select(Some(visible_len - 1)),
        Some(_) => {}
        None => list_state.select(Some(0)),
    }
}

/// Render the panel, returning the cursor position of a focused filter input
pub fn render_supplier_panel(
    frame: &mut Frame,
    area: Rect,
    view: &ListView,
    list_state: &mut ListState,
) -> Option<Position> {
    let focused_panel = matches!(
        view.focus,
        Focus::NameFilter | Focus::CategoryFilter | Focus::SupplierList
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused_panel {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
        .title(" Supplier List ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name search
            Constraint::Length(3), // Category filter
            Constraint::Min(0),    // Results
        ])
        .split(inner);

    let mut cursor = render_text_input(
        frame,
        chunks[0],
        "Search by name",
        &view.filter.name_query,
        "Type part of a name",
        view.focus == Focus::NameFilter,
    );
    cursor = cursor.or(render_text_input(
        frame,
        chunks[1],
        "Filter by category",
        &view.filter.category_query,
        "Type a whole category",
        view.focus == Focus::CategoryFilter,
    ));

    render_results(frame, chunks[2], view, list_state);

    cursor
}

fn render_results(frame: &mut Frame, area: Rect, view: &ListView, list_state: &mut ListState) {
    let list_focused = view.focus == Focus::SupplierList;
    let title = if view.filter.is_active() {
        format!(" Results ({} of {}) ", view.visible.len(), view.total)
    } else {
        format!(" Results ({}) ", view.total)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if list_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
        .title(title);

    clamp_selection(list_state, view.visible.len());

    if view.visible.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = view.visible.iter().map(|s| supplier_item(s)).collect();

    let highlight = if list_focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if list_focused { "▶ " } else { "  " });

    frame.render_stateful_widget(list, area, list_state);
}

fn supplier_item(supplier: &Supplier) -> ListItem<'static> {
    let label = Style::default().fg(Color::Cyan);
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                supplier.name().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", supplier.formatted_time()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Address: ", label),
            Span::raw(supplier.address().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Contact: ", label),
            Span::raw(supplier.contact().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Categories: ", label),
            Span::raw(supplier.categories_label()),
        ]),
        Line::from(""),
    ])
}
