//! Spanish-specific validators and form-field helpers.
//!
//! Validates NIF/NIE/CIF fiscal codes, CCC bank account codes, phone numbers
//! and postal codes, and exposes the province and region choice lists used
//! by selection inputs.

pub mod choices;
pub mod forms;
pub mod validation;

pub use choices::{province_choices, region_choices};
pub use validation::{
    validate_ccc, validate_identity_card, validate_personal_identity, validate_phone_number,
    validate_postal_code, CccNumber, ErrorKind, IdentityCardNumber, IdentityKind, PhoneNumber,
    PostalCode, ValidationError,
};
