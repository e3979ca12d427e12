//! Screen state - the form, the draft categories, the registry and filters
//!
//! Every mutation of the registration screen goes through the methods here.
//! Nothing in this module knows about the terminal.

use super::filter::SupplierFilter;
use super::supplier::{Supplier, SupplierId};
use crate::error::{RegistrationError, RequiredField};
use tracing::{debug, info, warn};

/// Whether the form holds a supplier in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Form cleared, waiting for the next entry
    Idle,
    /// Some field or draft category has been filled in
    Composing,
}

/// All state owned by the supplier registration screen
#[derive(Debug, Default)]
pub struct SupplierScreen {
    pub name: String,
    pub address: String,
    pub contact: String,

    /// Text typed in the category input, not yet added
    pub category_input: String,

    /// Categories added to the supplier being composed
    categories: Vec<String>,

    /// Registered suppliers in registration order (append-only)
    suppliers: Vec<Supplier>,

    pub filter: SupplierFilter,
}

impl SupplierScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft_categories(&self) -> &[String] {
        &self.categories
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn phase(&self) -> FormPhase {
        if self.name.is_empty()
            && self.address.is_empty()
            && self.contact.is_empty()
            && self.categories.is_empty()
        {
            FormPhase::Idle
        } else {
            FormPhase::Composing
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Category Composer
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the trimmed category input into the draft list
    ///
    /// Blank input is ignored and left in the buffer. Returns whether a
    /// category was added.
    pub fn add_category(&mut self) -> bool {
        let category = self.category_input.trim();
        if category.is_empty() {
            debug!("ignoring blank category input");
            return false;
        }

        let category = category.to_string();
        info!(category = %category, "category added to draft");
        self.categories.push(category);
        self.category_input.clear();
        true
    }

    /// Remove the draft category at `index`; out of range is a no-op
    pub fn remove_category(&mut self, index: usize) -> Option<String> {
        if index >= self.categories.len() {
            debug!(index, len = self.categories.len(), "category index out of range");
            return None;
        }
        let removed = self.categories.remove(index);
        info!(category = %removed, index, "category removed from draft");
        Some(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.address.trim().is_empty() {
            missing.push(RequiredField::Address);
        }
        if self.contact.trim().is_empty() {
            missing.push(RequiredField::Contact);
        }
        if self.categories.is_empty() {
            missing.push(RequiredField::Categories);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistrationError::Incomplete { missing })
        }
    }

    /// Register the supplier being composed and reset the form
    ///
    /// On error nothing is changed.
    pub fn register_supplier(&mut self) -> Result<SupplierId, RegistrationError> {
        if let Err(err) = self.validate() {
            let RegistrationError::Incomplete { missing } = &err;
            let missing: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            warn!(missing = ?missing, "supplier registration rejected");
            return Err(err);
        }

        let supplier = Supplier::new(
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.address),
            std::mem::take(&mut self.contact),
            self.categories.clone(),
        );
        self.categories.clear();

        let id = supplier.id();
        info!(
            %id,
            categories = supplier.categories().len(),
            total = self.suppliers.len() + 1,
            "supplier registered"
        );
        self.suppliers.push(supplier);
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Suppliers matching the current filter inputs
    pub fn visible_suppliers(&self) -> Vec<&Supplier> {
        self.filter.apply(&self.suppliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SupplierScreen {
        let mut screen = SupplierScreen::new();
        screen.name = "Acme Foods".to_string();
        screen.address = "1 Main St".to_string();
        screen.contact = "555-0100".to_string();
        screen.category_input = "Dairy".to_string();
        screen.add_category();
        screen
    }

    #[test]
    fn test_add_category_trims_and_clears_input() {
        let mut screen = SupplierScreen::new();
        screen.category_input = " Produce ".to_string();
        assert!(screen.add_category());
        assert_eq!(screen.draft_categories(), ["Produce"]);
        assert!(screen.category_input.is_empty());
    }

    #[test]
    fn test_add_blank_category_is_ignored() {
        let mut screen = SupplierScreen::new();
        assert!(!screen.add_category());

        screen.category_input = "   ".to_string();
        assert!(!screen.add_category());
        assert!(screen.draft_categories().is_empty());
        assert_eq!(screen.category_input, "   ");
    }

    #[test]
    fn test_remove_category_keeps_order() {
        let mut screen = SupplierScreen::new();
        for c in ["a", "b", "c", "d"] {
            screen.category_input = c.to_string();
            screen.add_category();
        }
        assert_eq!(screen.remove_category(1), Some("b".to_string()));
        assert_eq!(screen.draft_categories(), ["a", "c", "d"]);
    }

    #[test]
    fn test_remove_category_out_of_range_is_noop() {
        let mut screen = filled();
        assert_eq!(screen.remove_category(5), None);
        assert_eq!(screen.draft_categories(), ["Dairy"]);
    }

    #[test]
    fn test_register_supplier_appends_and_resets_form() {
        let mut screen = filled();
        assert_eq!(screen.phase(), FormPhase::Composing);

        let id = screen.register_supplier().unwrap();

        assert_eq!(screen.suppliers().len(), 1);
        let supplier = &screen.suppliers()[0];
        assert_eq!(supplier.id(), id);
        assert_eq!(supplier.name(), "Acme Foods");
        assert_eq!(supplier.address(), "1 Main St");
        assert_eq!(supplier.contact(), "555-0100");
        assert_eq!(supplier.categories(), ["Dairy"]);

        assert!(screen.name.is_empty());
        assert!(screen.address.is_empty());
        assert!(screen.contact.is_empty());
        assert!(screen.draft_categories().is_empty());
        assert_eq!(screen.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        for field in [RequiredField::Name, RequiredField::Address, RequiredField::Contact] {
            let mut screen = filled();
            match field {
                RequiredField::Name => screen.name = "  ".to_string(),
                RequiredField::Address => screen.address.clear(),
                RequiredField::Contact => screen.contact = "\t".to_string(),
                RequiredField::Categories => unreachable!(),
            }

            let err = screen.register_supplier().unwrap_err();
            assert_eq!(
                err,
                RegistrationError::Incomplete {
                    missing: vec![field]
                }
            );
            assert!(screen.suppliers().is_empty());
            assert_eq!(screen.draft_categories(), ["Dairy"]);
        }
    }

    #[test]
    fn test_register_rejects_empty_categories() {
        let mut screen = filled();
        screen.remove_category(0);
        let name_before = screen.name.clone();

        let err = screen.register_supplier().unwrap_err();
        assert_eq!(
            err,
            RegistrationError::Incomplete {
                missing: vec![RequiredField::Categories]
            }
        );
        assert!(screen.suppliers().is_empty());
        assert_eq!(screen.name, name_before);
    }

    #[test]
    fn test_registered_categories_are_a_copy() {
        let mut screen = filled();
        screen.register_supplier().unwrap();

        screen.category_input = "Meat".to_string();
        screen.add_category();

        assert_eq!(screen.suppliers()[0].categories(), ["Dairy"]);
    }

    #[test]
    fn test_identical_registrations_get_distinct_ids() {
        let mut screen = filled();
        let first = screen.register_supplier().unwrap();

        screen.name = "Acme Foods".to_string();
        screen.address = "1 Main St".to_string();
        screen.contact = "555-0100".to_string();
        screen.category_input = "Dairy".to_string();
        screen.add_category();
        let second = screen.register_supplier().unwrap();

        assert_ne!(first, second);
        assert_eq!(screen.visible_suppliers().len(), 2);
    }

    #[test]
    fn test_visible_suppliers_uses_filter() {
        let mut screen = filled();
        screen.register_supplier().unwrap();

        screen.filter.name_query = "zzz".to_string();
        assert!(screen.visible_suppliers().is_empty());
        assert_eq!(screen.suppliers().len(), 1);

        screen.filter.name_query.clear();
        screen.filter.category_query = "DAIRY".to_string();
        assert_eq!(screen.visible_suppliers().len(), 1);
    }

    #[test]
    fn test_stored_fields_are_not_trimmed() {
        let mut screen = filled();
        screen.name = "  Acme  ".to_string();
        screen.register_supplier().unwrap();
        assert_eq!(screen.suppliers()[0].name(), "  Acme  ");
    }
}
