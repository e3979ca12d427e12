//! Model layer - centralized state management
//!
//! - `SupplierScreen` - form fields, draft categories, registry, filters
//! - `Focus` - which widget receives input
//! - `ModalStack` - modal overlay management

pub mod filter;
pub mod modal;
pub mod screen;
pub mod supplier;
pub mod ui;

pub use filter::SupplierFilter;
pub use screen::{FormPhase, SupplierScreen};
pub use supplier::Supplier;
pub use ui::Focus;
