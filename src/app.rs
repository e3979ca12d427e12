//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Supplier data changes only through `SupplierScreen`; App routes Actions to it
//! and keeps the presentation state in sync.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_registration_screen, AlertDialog, HelpDialog, QuitDialog, RegistrationComponent,
    ScreenRenderContext,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{Focus, FormPhase, SupplierScreen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::debug;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Form, draft categories, registered suppliers and filters
    pub screen: SupplierScreen,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display, cleared on the next key press
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub registration: RegistrationComponent,
    pub alert_dialog: AlertDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config) -> App {
        App {
            config,
            screen: SupplierScreen::new(),
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            registration: RegistrationComponent::new(),
            alert_dialog: AlertDialog::default(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    fn chip_count(&self) -> usize {
        self.screen.draft_categories().len()
    }

    /// Text buffer behind the focused input, if the focus is an input
    fn focused_input(&mut self) -> Option<&mut String> {
        match self.registration.focus {
            Focus::Name => Some(&mut self.screen.name),
            Focus::Address => Some(&mut self.screen.address),
            Focus::Contact => Some(&mut self.screen.contact),
            Focus::CategoryInput => Some(&mut self.screen.category_input),
            Focus::NameFilter => Some(&mut self.screen.filter.name_query),
            Focus::CategoryFilter => Some(&mut self.screen.filter.category_query),
            _ => None,
        }
    }

    fn after_input_change(&mut self) {
        if matches!(
            self.registration.focus,
            Focus::NameFilter | Focus::CategoryFilter
        ) {
            debug!(
                name_query = %self.screen.filter.name_query,
                category_query = %self.screen.filter.category_query,
                "filter changed"
            );
            // The visible list changed; start from its top again
            self.registration.list_state.select(None);
        }
    }

    fn register_supplier(&mut self) -> Option<Action> {
        match self.screen.register_supplier() {
            Ok(_) => {
                self.registration.on_registered();
                let visible = self.screen.visible_suppliers().len();
                self.registration.select_last_supplier(visible);
                let name = self
                    .screen
                    .suppliers()
                    .last()
                    .map(|s| s.name().to_string())
                    .unwrap_or_default();
                self.status_message = Some(format!("Supplier '{}' registered", name));
                None
            }
            Err(err) => Some(Action::ShowAlert(err.to_string())),
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::Alert { .. } => self.alert_dialog.handle_key_event(key),
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::Alert { message } => {
                self.alert_dialog.set_message(message);
                self.alert_dialog.draw(frame, area)?;
            }
            Modal::QuitConfirm => {
                self.quit_dialog.supplier_count = self.screen.suppliers().len();
                self.quit_dialog.form_in_progress = self.screen.phase() == FormPhase::Composing;
                self.quit_dialog.draw(frame, area)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        self.status_message = None;
        self.registration.handle_key_event(key)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Focus (delegate to RegistrationComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext => self.registration.focus_next(self.chip_count()),
            Action::FocusPrev => self.registration.focus_prev(self.chip_count()),
            Action::FocusOn(focus) => self.registration.focus_on(focus, self.chip_count()),

            // ─────────────────────────────────────────────────────────────────
            // Text Input
            // ─────────────────────────────────────────────────────────────────
            Action::InputChar(c) => {
                if let Some(buffer) = self.focused_input() {
                    buffer.push(c);
                    self.after_input_change();
                }
            }
            Action::InputBackspace => {
                if let Some(buffer) = self.focused_input() {
                    if buffer.pop().is_some() {
                        self.after_input_change();
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Categories
            // ─────────────────────────────────────────────────────────────────
            Action::AddCategory => {
                self.screen.add_category();
                self.registration.sync_chips(self.chip_count());
            }
            Action::RemoveCategory(index) => {
                self.screen.remove_category(index);
                self.registration.sync_chips(self.chip_count());
            }
            Action::NextChip => self.registration.next_chip(self.chip_count()),
            Action::PrevChip => self.registration.previous_chip(),

            // ─────────────────────────────────────────────────────────────────
            // Registration
            // ─────────────────────────────────────────────────────────────────
            Action::RegisterSupplier => return Ok(self.register_supplier()),

            // ─────────────────────────────────────────────────────────────────
            // Supplier List
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                let visible = self.screen.visible_suppliers().len();
                self.registration.next_supplier(visible);
            }
            Action::PrevItem => {
                let visible = self.screen.visible_suppliers().len();
                self.registration.previous_supplier(visible);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::ShowAlert(message) => {
                self.modals.push(Modal::Alert { message });
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = ScreenRenderContext {
            screen: &self.screen,
            title: &self.config.title,
            status_message: self.status_message.as_deref(),
            modal_open: !self.modals.is_empty(),
        };
        draw_registration_screen(frame, area, &mut self.registration, &ctx);

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::supplier_list::EMPTY_PLACEHOLDER;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        let mut action = app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill the whole form through the keyboard, leaving focus on Register
    fn fill_form(app: &mut App, name: &str, categories: &[&str]) {
        app.registration.focus = Focus::Name;
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, "1 Main St");
        press(app, KeyCode::Tab);
        type_text(app, "555-0100");
        press(app, KeyCode::Tab);
        for category in categories {
            type_text(app, category);
            press(app, KeyCode::Enter);
        }
        app.registration.focus = Focus::RegisterButton;
    }

    fn render(app: &mut App) -> String {
        render_at(app, 120, 48)
    }

    fn render_at(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_register_through_keyboard() {
        let mut app = App::default();
        fill_form(&mut app, "Acme Foods", &["Dairy", " Bakery "]);
        assert_eq!(app.screen.draft_categories(), ["Dairy", "Bakery"]);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen.suppliers().len(), 1);
        assert!(app.modals.is_empty());
        assert!(app.screen.name.is_empty());
        assert!(app.screen.draft_categories().is_empty());
        assert_eq!(app.registration.focus, Focus::Name);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Supplier 'Acme Foods' registered")
        );
    }

    #[test]
    fn test_incomplete_form_shows_blocking_alert() {
        let mut app = App::default();
        type_text(&mut app, "Acme Foods");
        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(app.screen.suppliers().is_empty());
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Alert {
                message: "Please fill in all fields.".to_string()
            })
        );

        // Typing is swallowed while the alert is open
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.screen.name, "Acme Foods");

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.screen.name, "Acme Foods");
    }

    #[test]
    fn test_blank_category_is_ignored() {
        let mut app = App::default();
        app.registration.focus = Focus::CategoryInput;
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.screen.draft_categories().is_empty());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_remove_chip_through_keyboard() {
        let mut app = App::default();
        fill_form(&mut app, "Acme Foods", &["Dairy", "Bakery", "Meat"]);

        app.registration.focus = Focus::CategoryChips;
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.screen.draft_categories(), ["Dairy", "Meat"]);

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Delete);
        assert!(app.screen.draft_categories().is_empty());
        assert_eq!(app.registration.focus, Focus::CategoryInput);
    }

    #[test]
    fn test_filter_inputs_update_visible_list() {
        let mut app = App::default();
        fill_form(&mut app, "Acme Foods", &["Dairy", "Bakery"]);
        press(&mut app, KeyCode::Enter);
        fill_form(&mut app, "Best Meats", &["Meat"]);
        press(&mut app, KeyCode::Enter);

        app.registration.focus = Focus::CategoryFilter;
        type_text(&mut app, "meat");
        let visible: Vec<_> = app
            .screen
            .visible_suppliers()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(visible, vec!["Best Meats"]);

        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        assert_eq!(app.screen.visible_suppliers().len(), 2);
    }

    #[test]
    fn test_quit_flow() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_modal() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.modals.top(), Some(&Modal::Help));
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_empty_screen_shows_placeholder() {
        let mut app = App::default();
        let text = render(&mut app);
        assert!(text.contains("Projeto RGP0023"));
        assert!(text.contains("Supplier Registration"));
        assert!(text.contains("Supplier List"));
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(text.contains("Enter the supplier name"));
    }

    #[test]
    fn test_render_lists_registered_suppliers() {
        let mut app = App::default();
        fill_form(&mut app, "Acme Foods", &["Dairy", "Bakery"]);
        press(&mut app, KeyCode::Enter);

        let text = render(&mut app);
        assert!(text.contains("Acme Foods"));
        assert!(text.contains("Address: 1 Main St"));
        assert!(text.contains("Contact: 555-0100"));
        assert!(text.contains("Categories: Dairy, Bakery"));
        assert!(!text.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_render_placeholder_when_filter_matches_nothing() {
        let mut app = App::default();
        fill_form(&mut app, "Acme Foods", &["Dairy"]);
        press(&mut app, KeyCode::Enter);

        app.registration.focus = Focus::NameFilter;
        type_text(&mut app, "zzz");

        let text = render(&mut app);
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(text.contains("Results (0 of 1)"));
    }

    #[test]
    fn test_render_alert_popup() {
        let mut app = App::default();
        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        let text = render(&mut app);
        assert!(text.contains("Please fill in all fields."));
        assert!(text.contains("Attention"));
    }

    /// Everything above the help bar, which also mentions Register
    fn screen_rows(text: &str) -> Vec<&str> {
        let mut rows: Vec<&str> = text.lines().collect();
        rows.pop();
        rows
    }

    #[test]
    fn test_standard_terminal_shows_form_and_list() {
        let mut app = App::default();
        let text = render_at(&mut app, 80, 24);

        assert!(text.contains("Projeto RGP0023"));
        assert!(text.contains("Supplier List"));
        assert!(text.contains("Search by name"));
        assert!(text.contains("Filter by category"));
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(text.contains("Name: Enter the supplier name"));
        assert!(screen_rows(&text)
            .iter()
            .any(|row| row.contains(" Register ")));
    }

    #[test]
    fn test_short_wide_terminal_keeps_inputs_readable_with_chips() {
        let mut app = App::default();
        fill_form(&mut app, "Acme Foods", &["Dairy", "Bakery"]);
        app.registration.focus = Focus::Name;

        let text = render_at(&mut app, 100, 24);

        assert!(text.contains("Address:"));
        assert!(text.contains("1 Main St"));
        assert!(text.contains("Product Categories:"));
        assert!(text.contains("Dairy ✕"));
        assert!(text.contains("Supplier List"));
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(screen_rows(&text)
            .iter()
            .any(|row| row.contains(" Register ")));
    }
}
