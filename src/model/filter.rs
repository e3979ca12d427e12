//! Render-time filtering of the supplier list

use super::supplier::Supplier;

/// The two filter inputs shown above the supplier list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    /// Substring searched in supplier names
    pub name_query: String,
    /// Category that must match one of the supplier categories exactly
    pub category_query: String,
}

impl SupplierFilter {
    pub fn is_active(&self) -> bool {
        !self.name_query.is_empty() || !self.category_query.is_empty()
    }

    pub fn apply<'a>(&self, all: &'a [Supplier]) -> Vec<&'a Supplier> {
        visible_suppliers(all, &self.name_query, &self.category_query)
    }
}

/// Select the suppliers to display, keeping registration order
///
/// An empty query disables its predicate. Names match by substring,
/// categories match whole (both ignore case). Queries are not trimmed.
pub fn visible_suppliers<'a>(
    all: &'a [Supplier],
    name_query: &str,
    category_query: &str,
) -> Vec<&'a Supplier> {
    all.iter()
        .filter(|supplier| name_query.is_empty() || supplier.name_contains(name_query))
        .filter(|supplier| category_query.is_empty() || supplier.has_category(category_query))
        .collect()
}
