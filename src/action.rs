//! Action enum - All possible application actions
//!
//! Components turn key events into Actions, and the App processes them to
//! update state.

use crate::model::Focus;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick with no input
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next widget
    FocusNext,
    /// Move focus to the previous widget
    FocusPrev,
    /// Move focus to a specific widget
    FocusOn(Focus),

    // ─────────────────────────────────────────────────────────────────────────
    // Text Input
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a character to the focused input
    InputChar(char),
    /// Remove the last character of the focused input
    InputBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Categories
    // ─────────────────────────────────────────────────────────────────────────
    /// Add the typed category to the draft list
    AddCategory,
    /// Remove the draft category at the given position
    RemoveCategory(usize),
    /// Select the next draft category chip
    NextChip,
    /// Select the previous draft category chip
    PrevChip,

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────
    /// Validate the form and register the supplier
    RegisterSupplier,

    // ─────────────────────────────────────────────────────────────────────────
    // Supplier List
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next supplier in the list
    NextItem,
    /// Move to previous supplier in the list
    PrevItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a blocking notification
    ShowAlert(String),
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::FocusOn(focus) => write!(f, "FocusOn({:?})", focus),
            Action::InputChar(c) => write!(f, "InputChar('{}')", c),
            Action::InputBackspace => write!(f, "InputBackspace"),
            Action::AddCategory => write!(f, "AddCategory"),
            Action::RemoveCategory(idx) => write!(f, "RemoveCategory({})", idx),
            Action::NextChip => write!(f, "NextChip"),
            Action::PrevChip => write!(f, "PrevChip"),
            Action::RegisterSupplier => write!(f, "RegisterSupplier"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::ShowAlert(msg) => write!(f, "ShowAlert({})", msg),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
