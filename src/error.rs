//! Domain errors surfaced to the user

use std::fmt;
use thiserror::Error;

/// A form field that must be filled in before a supplier can be registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Address,
    Contact,
    Categories,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Address => write!(f, "address"),
            RequiredField::Contact => write!(f, "contact"),
            RequiredField::Categories => write!(f, "categories"),
        }
    }
}

/// Reasons a registration attempt is rejected
///
/// The user only ever sees the fixed message; `missing` is kept for logs
/// and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please fill in all fields.")]
    Incomplete { missing: Vec<RequiredField> },
}
