//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "Tab", "Focus next field");
    add_shortcut(&mut lines, "Shift+Tab", "Focus previous field");
    add_shortcut(&mut lines, "↓ / ↑", "Next / previous field (in inputs)");

    add_section(&mut lines, "Registration Form");
    add_shortcut(&mut lines, "Type", "Edit the focused field");
    add_shortcut(&mut lines, "Backspace", "Delete last character");
    add_shortcut(&mut lines, "Enter", "Add category (category field / Add)");
    add_shortcut(&mut lines, "Enter", "Register supplier (Register button)");
    add_shortcut(&mut lines, "Ctrl+s", "Register supplier from anywhere");

    add_section(&mut lines, "Draft Categories");
    add_shortcut(&mut lines, "← / →", "Select category");
    add_shortcut(&mut lines, "x / Del", "Remove selected category");
    add_shortcut(&mut lines, "Enter / Bksp", "Remove selected category");

    add_section(&mut lines, "Supplier List");
    add_shortcut(&mut lines, "j / ↓", "Next supplier");
    add_shortcut(&mut lines, "k / ↑", "Previous supplier");
    add_shortcut(&mut lines, "/", "Search by name");
    add_shortcut(&mut lines, "f", "Filter by category");

    add_section(&mut lines, "Application");
    add_shortcut(&mut lines, "F1", "Show this help");
    add_shortcut(&mut lines, "Esc", "Quit (asks for confirmation)");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut dialog = HelpDialog::default();
        dialog
            .handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 0);

        dialog
            .handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 10);
    }

    #[test]
    fn test_chip_removal_keys_are_listed() {
        let text: Vec<String> = build_help_content()
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect();
        for keys in ["x / Del", "Enter / Bksp"] {
            assert!(text
                .iter()
                .any(|line| line.contains(keys) && line.contains("Remove selected category")));
        }
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
