//! Component trait - Interface for UI components
//!
//! Components turn key events into Actions, apply Actions to their own
//! state and render themselves.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` - map a key to an Action (no state changes)
/// 2. `update` - apply an Action, optionally returning a follow-up Action
/// 3. `draw` - render into the given area
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component. Must not change state.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
