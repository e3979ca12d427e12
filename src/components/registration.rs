//! Registration screen component
//!
//! Owns the presentation state of the single screen (focus, chip selection,
//! list selection) and maps keys to Actions depending on the focused widget.
//! The supplier data itself lives in `SupplierScreen`.

use crate::action::Action;
use crate::component::Component;
use crate::components::form::{form_heights, render_form, FormView};
use crate::components::header::render_header;
use crate::components::layout::{calculate_main_layout, form_width};
use crate::components::supplier_list::{clamp_selection, render_supplier_panel, ListView};
use crate::model::{Focus, SupplierScreen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListState, Paragraph},
    Frame,
};

/// Presentation state of the registration screen
pub struct RegistrationComponent {
    /// Widget receiving typed input
    pub focus: Focus,

    /// Highlighted draft category chip
    pub selected_chip: usize,

    /// Selection in the filtered supplier list
    pub list_state: ListState,
}

impl Default for RegistrationComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationComponent {
    pub fn new() -> Self {
        Self {
            focus: Focus::Name,
            selected_chip: 0,
            list_state: ListState::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self, chip_count: usize) {
        self.focus = self.focus.next(chip_count > 0);
    }

    pub fn focus_prev(&mut self, chip_count: usize) {
        self.focus = self.focus.prev(chip_count > 0);
    }

    pub fn focus_on(&mut self, focus: Focus, chip_count: usize) {
        if focus == Focus::CategoryChips && chip_count == 0 {
            return;
        }
        self.focus = focus;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chips
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_chip(&mut self, chip_count: usize) {
        if self.selected_chip + 1 < chip_count {
            self.selected_chip += 1;
        }
    }

    pub fn previous_chip(&mut self) {
        self.selected_chip = self.selected_chip.saturating_sub(1);
    }

    /// Keep chip selection and focus valid after the draft list changed
    pub fn sync_chips(&mut self, chip_count: usize) {
        if chip_count == 0 {
            self.selected_chip = 0;
            if self.focus == Focus::CategoryChips {
                self.focus = Focus::CategoryInput;
            }
        } else if self.selected_chip >= chip_count {
            self.selected_chip = chip_count - 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Supplier List
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_supplier(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < visible_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous_supplier(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// Reset presentation state after a successful registration
    pub fn on_registered(&mut self) {
        self.focus = Focus::Name;
        self.selected_chip = 0;
    }

    /// Select the last supplier in the visible list
    pub fn select_last_supplier(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(visible_len - 1));
        }
    }

    fn handle_focused_key(&self, key: KeyEvent) -> Option<Action> {
        match self.focus {
            focus if focus.is_text_input() => match key.code {
                KeyCode::Char(c) => Some(Action::InputChar(c)),
                KeyCode::Backspace => Some(Action::InputBackspace),
                KeyCode::Enter if focus == Focus::CategoryInput => Some(Action::AddCategory),
                KeyCode::Enter | KeyCode::Down => Some(Action::FocusNext),
                KeyCode::Up => Some(Action::FocusPrev),
                _ => None,
            },
            Focus::AddButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::AddCategory),
                KeyCode::Down => Some(Action::FocusNext),
                KeyCode::Up => Some(Action::FocusPrev),
                _ => None,
            },
            Focus::CategoryChips => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevChip),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::NextChip),
                KeyCode::Enter | KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
                    Some(Action::RemoveCategory(self.selected_chip))
                }
                KeyCode::Down => Some(Action::FocusNext),
                KeyCode::Up => Some(Action::FocusPrev),
                _ => None,
            },
            Focus::RegisterButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::RegisterSupplier),
                KeyCode::Down => Some(Action::FocusNext),
                KeyCode::Up => Some(Action::FocusPrev),
                _ => None,
            },
            Focus::SupplierList => match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(Action::NextItem),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevItem),
                KeyCode::Char('/') => Some(Action::FocusOn(Focus::NameFilter)),
                KeyCode::Char('f') => Some(Action::FocusOn(Focus::CategoryFilter)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Component for RegistrationComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::RegisterSupplier),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => self.handle_focused_key(key),
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the screen state; see draw_registration_screen
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// State from outside the component needed to draw the screen
pub struct ScreenRenderContext<'a> {
    pub screen: &'a SupplierScreen,
    pub title: &'a str,
    pub status_message: Option<&'a str>,
    /// Whether a modal covers the screen (hides the text cursor)
    pub modal_open: bool,
}

/// Draw the whole registration screen
pub fn draw_registration_screen(
    frame: &mut Frame,
    area: Rect,
    component: &mut RegistrationComponent,
    ctx: &ScreenRenderContext,
) {
    let screen = ctx.screen;
    let layout = calculate_main_layout(
        area,
        ctx.status_message.is_some(),
        form_heights(screen, form_width(area)),
    );

    render_header(frame, layout.header, ctx.title);

    let form_view = FormView {
        screen,
        focus: component.focus,
        selected_chip: component.selected_chip,
        compact: layout.compact_form,
    };
    let form_cursor = render_form(frame, layout.form, &form_view);

    let visible = screen.visible_suppliers();
    clamp_selection(&mut component.list_state, visible.len());
    let list_view = ListView {
        visible: &visible,
        total: screen.suppliers().len(),
        filter: &screen.filter,
        focus: component.focus,
    };
    let list_cursor = render_supplier_panel(
        frame,
        layout.list,
        &list_view,
        &mut component.list_state,
    );

    if !ctx.modal_open {
        if let Some(position) = form_cursor.or(list_cursor) {
            frame.set_cursor_position(position);
        }
    }

    if let (Some(status_area), Some(message)) = (layout.status, ctx.status_message) {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        )));
        frame.render_widget(status, status_area);
    }

    render_help_bar(frame, layout.help, component.focus);
}

fn render_help_bar(frame: &mut Frame, area: Rect, focus: Focus) {
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Tab ", key_style(Color::Cyan)),
        Span::raw("Next "),
        Span::styled(" S-Tab ", key_style(Color::Cyan)),
        Span::raw("Prev "),
    ];

    match focus {
        Focus::CategoryInput | Focus::AddButton => {
            spans.push(Span::styled(" Enter ", key_style(Color::Green)));
            spans.push(Span::raw("Add category "));
        }
        Focus::CategoryChips => {
            spans.push(Span::styled(" ←/→ ", key_style(Color::Cyan)));
            spans.push(Span::raw("Select "));
            spans.push(Span::styled(" Enter/x/Del/Bksp ", key_style(Color::Red)));
            spans.push(Span::raw("Remove "));
        }
        Focus::RegisterButton => {
            spans.push(Span::styled(" Enter ", key_style(Color::Green)));
            spans.push(Span::raw("Register "));
        }
        Focus::SupplierList => {
            spans.push(Span::styled(" j/k ", key_style(Color::Cyan)));
            spans.push(Span::raw("Navigate "));
        }
        _ => {}
    }

    spans.extend([
        Span::styled(" Ctrl+S ", key_style(Color::Green)),
        Span::raw("Register "),
        Span::styled(" F1 ", key_style(Color::White)),
        Span::raw("Help "),
        Span::styled(" Esc ", key_style(Color::Yellow)),
        Span::raw("Quit"),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
