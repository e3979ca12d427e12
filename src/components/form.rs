//! Registration form: supplier fields, category composer and submit button

use crate::components::layout::FormHeights;
use crate::components::widgets::{render_button, render_text_input};
use crate::model::{Focus, SupplierScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const INPUT_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const ADD_BUTTON_WIDTH: u16 = 11;

/// Input and button height when the form is compact
const COMPACT_ROW_HEIGHT: u16 = 1;

/// Columns taken by a chip besides its label: " {label} ✕ "
const CHIP_DECORATION: usize = 4;

/// Everything the form needs to render
pub struct FormView<'a> {
    pub screen: &'a SupplierScreen,
    pub focus: Focus,
    pub selected_chip: usize,
    /// Draw one-row inputs and buttons without borders
    pub compact: bool,
}

/// Greedily pack chips into rows of at most `width` columns
///
/// Returns the category indices of each row. A chip wider than the row
/// gets a row of its own.
pub fn pack_chips(categories: &[String], width: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;

    for (idx, category) in categories.iter().enumerate() {
        let chip_width = category.width() + CHIP_DECORATION;
        let needed = if current.is_empty() { chip_width } else { chip_width + 1 };
        if !current.is_empty() && used + needed > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += if current.is_empty() { chip_width } else { chip_width + 1 };
        current.push(idx);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Rows of chips at the given width (0 when there are no chips)
fn chip_rows(categories: &[String], width: u16) -> u16 {
    if categories.is_empty() {
        return 0;
    }
    pack_chips(categories, width as usize).len() as u16
}

/// Height of the bordered chip box for the given form width
fn chips_height(categories: &[String], form_inner_width: u16) -> u16 {
    match chip_rows(categories, form_inner_width.saturating_sub(2)) {
        0 => 0,
        rows => rows + 2,
    }
}

/// Heights the form wants at the given outer width
pub fn form_heights(screen: &SupplierScreen, width: u16) -> FormHeights {
    let inner_width = width.saturating_sub(2);
    let categories = screen.draft_categories();
    FormHeights {
        full: 2 + INPUT_HEIGHT * 4 + chips_height(categories, inner_width) + BUTTON_HEIGHT,
        compact: 2 + COMPACT_ROW_HEIGHT * 5 + chip_rows(categories, inner_width),
    }
}

/// Render the form, returning the cursor position of the focused input
pub fn render_form(frame: &mut Frame, area: Rect, view: &FormView) -> Option<Position> {
    let focused_form = matches!(
        view.focus,
        Focus::Name
            | Focus::Address
            | Focus::Contact
            | Focus::CategoryInput
            | Focus::AddButton
            | Focus::CategoryChips
            | Focus::RegisterButton
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused_form {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
        .title(" Supplier Registration ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let screen = view.screen;
    let (row, button, chips) = if view.compact {
        // Inputs and the button keep their rows, chips get what is left
        let fixed = COMPACT_ROW_HEIGHT * 5;
        let rows = chip_rows(screen.draft_categories(), inner.width);
        (
            COMPACT_ROW_HEIGHT,
            COMPACT_ROW_HEIGHT,
            rows.min(inner.height.saturating_sub(fixed)),
        )
    } else {
        (
            INPUT_HEIGHT,
            BUTTON_HEIGHT,
            chips_height(screen.draft_categories(), inner.width),
        )
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(row),   // Name
            Constraint::Length(row),   // Address
            Constraint::Length(row),   // Contact
            Constraint::Length(row),   // Category input + Add
            Constraint::Length(chips), // Draft categories
            Constraint::Length(button),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut cursor = render_text_input(
        frame,
        chunks[0],
        "Name:",
        &screen.name,
        "Enter the supplier name",
        view.focus == Focus::Name,
    );
    cursor = cursor.or(render_text_input(
        frame,
        chunks[1],
        "Address:",
        &screen.address,
        "Enter the supplier address",
        view.focus == Focus::Address,
    ));
    cursor = cursor.or(render_text_input(
        frame,
        chunks[2],
        "Contact (phone):",
        &screen.contact,
        "Enter the supplier contact",
        view.focus == Focus::Contact,
    ));

    let category_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(ADD_BUTTON_WIDTH)])
        .split(chunks[3]);
    cursor = cursor.or(render_text_input(
        frame,
        category_row[0],
        "Product Categories:",
        &screen.category_input,
        "Add category",
        view.focus == Focus::CategoryInput,
    ));
    render_button(
        frame,
        category_row[1],
        "Add",
        Color::Blue,
        view.focus == Focus::AddButton,
    );

    if chips > 0 {
        render_chips(frame, chunks[4], view);
    }

    render_button(
        frame,
        chunks[5],
        "Register",
        Color::Green,
        view.focus == Focus::RegisterButton,
    );

    cursor
}

fn render_chips(frame: &mut Frame, area: Rect, view: &FormView) {
    let categories = view.screen.draft_categories();
    let chips_focused = view.focus == Focus::CategoryChips;

    let block = (!view.compact).then(|| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if chips_focused {
                Color::Cyan
            } else {
                Color::DarkGray
            }))
            .title(format!(" Draft Categories ({}) ", categories.len()))
    });
    let inner = block.as_ref().map_or(area, |b| b.inner(area));

    let rows = pack_chips(categories, inner.width as usize);

    // Keep the row holding the selected chip in view
    let selected_row = rows
        .iter()
        .position(|row| row.contains(&view.selected_chip))
        .unwrap_or(0) as u16;
    let scroll = (selected_row + 1).saturating_sub(inner.height);

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (pos, idx) in row.into_iter().enumerate() {
                if pos > 0 {
                    spans.push(Span::raw(" "));
                }
                let selected = chips_focused && idx == view.selected_chip;
                let chip_style = if selected {
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                };
                spans.push(Span::styled(format!(" {} ", categories[idx]), chip_style));
                spans.push(Span::styled(
                    "✕ ",
                    chip_style.fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let mut paragraph = Paragraph::new(lines).scroll((scroll, 0));
    if let Some(block) = block {
        paragraph = paragraph.block(block);
    }
    frame.render_widget(paragraph, area);
}
