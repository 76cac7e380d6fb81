//! One field per validated identifier

use super::{Field, FieldError, FieldOptions, IdentityCardOptions};
use crate::validation::{
    validate_ccc, validate_identity_card, validate_personal_identity, validate_phone_number,
    validate_postal_code, CccNumber, IdentityCardNumber, PhoneNumber, PostalCode,
};

/// Generates a field whose only setting is whether it is required
macro_rules! simple_field {
    ($(#[$meta:meta])* $name:ident, $value:ty, $validate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            options: FieldOptions,
        }

        impl $name {
            pub fn new(options: FieldOptions) -> Self {
                Self { options }
            }

            pub fn optional() -> Self {
                Self::new(FieldOptions { required: false })
            }
        }

        impl Field for $name {
            type Value = $value;

            fn options(&self) -> &FieldOptions {
                &self.options
            }

            fn validate(&self, value: &str) -> Result<Self::Value, FieldError> {
                Ok($validate(value)?)
            }
        }
    };
}

simple_field!(
    /// Five digit postal code, 01XXX to 52XXX
    PostalCodeField,
    PostalCode,
    validate_postal_code
);

simple_field!(
    /// Nine digit phone number starting with 6, 8 or 9
    PhoneNumberField,
    PhoneNumber,
    validate_phone_number
);

simple_field!(
    /// Bank account code, cleaned to `EEEE-OOOO-CC-AAAAAAAAAA`
    CccField,
    CccNumber,
    validate_ccc
);

/// NIF, NIE or CIF. With `only_nif`, organization codes are refused.
#[derive(Debug, Clone, Default)]
pub struct IdentityCardNumberField {
    options: FieldOptions,
    only_nif: bool,
}

impl IdentityCardNumberField {
    pub fn new(options: IdentityCardOptions) -> Self {
        Self {
            options: FieldOptions {
                required: options.required,
            },
            only_nif: options.only_nif,
        }
    }

    pub fn only_nif() -> Self {
        Self::new(IdentityCardOptions {
            only_nif: true,
            ..Default::default()
        })
    }

    pub fn accepts_organizations(&self) -> bool {
        !self.only_nif
    }
}

impl Field for IdentityCardNumberField {
    type Value = IdentityCardNumber;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn validate(&self, value: &str) -> Result<Self::Value, FieldError> {
        let identity = if self.only_nif {
            validate_personal_identity(value)?
        } else {
            validate_identity_card(value)?
        };
        Ok(identity)
    }
}
