//! Root module for the validation system.
//! Exposes the public API for identifier validation.

mod constants;
mod error;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::{ErrorKind, ValidationError};
pub use types::{
    validate_ccc, validate_identity_card, validate_personal_identity, validate_phone_number,
    validate_postal_code, CccNumber, IdentityCardNumber, IdentityKind, PhoneNumber, PostalCode,
};
