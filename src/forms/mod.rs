//! Form fields built on the validators.
//!
//! Every field trims its input and treats an empty value as missing: an
//! optional field cleans it to `None`, a required one reports
//! [`FieldError::Required`]. Anything else goes through the field's
//! validator.

mod config;
mod fields;
mod select;

pub use config::{FieldOptions, FormConfig, IdentityCardOptions};
pub use fields::{CccField, IdentityCardNumberField, PhoneNumberField, PostalCodeField};
pub use select::Select;

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Select a valid choice. {0} is not one of the available choices.")]
    InvalidChoice(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidChoice(_) => "invalid_choice",
            Self::Invalid(error) => error.code(),
        }
    }

    /// The text to show next to the field
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// A single form input that turns raw text into a cleaned value
pub trait Field {
    type Value;

    fn options(&self) -> &FieldOptions;

    /// Validates a trimmed, non-empty value
    fn validate(&self, value: &str) -> Result<Self::Value, FieldError>;

    fn clean(&self, raw: &str) -> Result<Option<Self::Value>, FieldError> {
        let value = raw.trim();

        if value.is_empty() {
            return if self.options().required {
                Err(FieldError::Required)
            } else {
                Ok(None)
            };
        }

        self.validate(value).map(Some)
    }
}
