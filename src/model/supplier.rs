//! Registered supplier record

use chrono::{DateTime, Local};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier of a registered supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupplierId(Uuid);

impl SupplierId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SupplierId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A supplier as it was submitted
///
/// Suppliers are never edited after registration, so the fields are only
/// exposed through getters.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: String,
    contact: String,
    categories: Vec<String>,
    registered_at: DateTime<Local>,
}

impl Supplier {
    pub(crate) fn new(
        name: String,
        address: String,
        contact: String,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: SupplierId::new(),
            name,
            address,
            contact,
            categories,
            registered_at: Local::now(),
        }
    }

    pub fn id(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Categories joined for the list view, e.g. "Dairy, Bakery"
    pub fn categories_label(&self) -> String {
        self.categories.join(", ")
    }

    pub fn formatted_time(&self) -> String {
        self.registered_at.format("%H:%M:%S").to_string()
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Case-insensitive exact match against any single category
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }
}
