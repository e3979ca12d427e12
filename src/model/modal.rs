//! Modal stack for managing overlays
//!
//! Only the top modal receives input; the screen underneath is frozen
//! until the stack is empty again.

/// Represents a modal overlay that can be displayed on top of the screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Blocking notification that must be dismissed
    Alert { message: String },
    /// Quit confirmation dialog
    QuitConfirm,
    /// Key binding overview
    Help,
}

/// A stack of modal overlays, rendered bottom to top
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterate from the bottom modal to the top one
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}
