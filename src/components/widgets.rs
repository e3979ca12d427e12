//! Small building blocks shared by the form and the filter inputs

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest suffix of `value` that fits in `max_width` terminal columns
pub fn visible_tail(value: &str, max_width: usize) -> &str {
    if value.width() <= max_width {
        return value;
    }

    let mut width = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }
    &value[start..]
}

/// Render a bordered, labeled single-line input
///
/// Areas shorter than a bordered box get the inline `Label: value` form.
/// Returns where the terminal cursor belongs when the input is focused.
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) -> Option<Position> {
    if area.height < 3 {
        return render_inline_input(frame, area, label, value, placeholder, focused);
    }

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", label))
        .title_style(
            Style::default()
                .fg(if focused { Color::Cyan } else { Color::White })
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);

    // Leave one column for the cursor
    let text_width = inner.width.saturating_sub(1) as usize;
    let shown = visible_tail(value, text_width);

    let line = if value.is_empty() {
        Line::from(placeholder_span(placeholder))
    } else {
        Line::from(Span::styled(
            shown.to_string(),
            Style::default().fg(Color::White),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = (shown.width() as u16).min(inner.width.saturating_sub(1));
        Some(Position::new(inner.x + offset, inner.y))
    } else {
        None
    }
}

fn placeholder_span(placeholder: &str) -> Span<'static> {
    Span::styled(
        placeholder.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

fn render_inline_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) -> Option<Position> {
    let prefix = format!("{} ", label);
    let prefix_width = prefix.width() as u16;
    let text_width = area.width.saturating_sub(prefix_width + 1) as usize;
    let shown = visible_tail(value, text_width);

    let label_style = Style::default()
        .fg(if focused { Color::Cyan } else { Color::White })
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(prefix, label_style)];
    if value.is_empty() {
        spans.push(placeholder_span(placeholder));
    } else {
        spans.push(Span::styled(
            shown.to_string(),
            Style::default().fg(Color::White),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if focused && area.width > 0 && area.height > 0 {
        let offset = (prefix_width + shown.width() as u16).min(area.width.saturating_sub(1));
        Some(Position::new(area.x + offset, area.y))
    } else {
        None
    }
}

/// Render a push button; focused buttons are drawn inverted
///
/// Areas shorter than a bordered box get a bracketed `[ label ]` instead.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color, focused: bool) {
    let (text_style, border_style) = if focused {
        (
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(color),
        )
    } else {
        (
            Style::default().fg(color).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::DarkGray),
        )
    };

    if area.height < 3 {
        let text = Span::styled(format!("[ {} ]", label), text_style);
        let button = Paragraph::new(Line::from(text)).alignment(Alignment::Center);
        frame.render_widget(button, area);
        return;
    }

    let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_short_value() {
        assert_eq!(visible_tail("Acme", 10), "Acme");
    }

    #[test]
    fn test_visible_tail_keeps_end_of_long_value() {
        assert_eq!(visible_tail("Acme Foods Ltd", 5), "s Ltd");
    }

    #[test]
    fn test_visible_tail_counts_wide_chars() {
        // Each CJK character takes two columns
        assert_eq!(visible_tail("食品供应商", 4), "应商");
        assert_eq!(visible_tail("食品供应商", 5), "应商");
    }

    #[test]
    fn test_visible_tail_zero_width() {
        assert_eq!(visible_tail("Acme", 0), "");
    }

    fn draw_inline(value: &str, focused: bool) -> (String, Option<Position>) {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        let mut cursor = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                cursor = render_text_input(frame, area, "Name:", value, "Enter a name", focused);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (text, cursor)
    }

    #[test]
    fn test_one_row_input_is_drawn_inline() {
        let (text, cursor) = draw_inline("", false);
        assert!(text.starts_with("Name: Enter a name"));
        assert_eq!(cursor, None);

        let (text, cursor) = draw_inline("Acme", true);
        assert!(text.starts_with("Name: Acme"));
        assert_eq!(cursor, Some(Position::new(10, 0)));
    }
}
