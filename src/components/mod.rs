//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alert_dialog;
pub mod form;
pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod registration;
pub mod supplier_list;
pub mod widgets;

pub use alert_dialog::AlertDialog;
pub use help_dialog::HelpDialog;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
pub use registration::{draw_registration_screen, RegistrationComponent, ScreenRenderContext};
