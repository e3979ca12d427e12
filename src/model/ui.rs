//! UI state - which widget on the screen receives input

/// Focusable widgets, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Address,
    Contact,
    CategoryInput,
    AddButton,
    CategoryChips,
    RegisterButton,
    NameFilter,
    CategoryFilter,
    SupplierList,
}

impl Focus {
    const ORDER: [Focus; 10] = [
        Focus::Name,
        Focus::Address,
        Focus::Contact,
        Focus::CategoryInput,
        Focus::AddButton,
        Focus::CategoryChips,
        Focus::RegisterButton,
        Focus::NameFilter,
        Focus::CategoryFilter,
        Focus::SupplierList,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next focus target; the chip row is skipped while it is empty
    pub fn next(self, has_chips: bool) -> Focus {
        let mut idx = self.position();
        loop {
            idx = (idx + 1) % Self::ORDER.len();
            let candidate = Self::ORDER[idx];
            if candidate != Focus::CategoryChips || has_chips {
                return candidate;
            }
        }
    }

    /// Previous focus target; the chip row is skipped while it is empty
    pub fn prev(self, has_chips: bool) -> Focus {
        let mut idx = self.position();
        loop {
            idx = (idx + Self::ORDER.len() - 1) % Self::ORDER.len();
            let candidate = Self::ORDER[idx];
            if candidate != Focus::CategoryChips || has_chips {
                return candidate;
            }
        }
    }

    /// Whether typed characters are inserted into this widget
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            Focus::Name
                | Focus::Address
                | Focus::Contact
                | Focus::CategoryInput
                | Focus::NameFilter
                | Focus::CategoryFilter
        )
    }
}
