//! Type definitions for the validation system

/// Implements the string-facing traits shared by every validated identifier.
/// The type must hold its normalized form in a `value: String` field, and
/// every way of building it from a string goes through `$validate` so that
/// invalid values are rejected on deserialization too.
macro_rules! impl_validated_string {
    ($ty:ident, $validate:path) => {
        impl $ty {
            /// Returns the normalized value as a string slice
            pub fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::validation::ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                $validate(value)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::validation::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $validate(&value)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::validation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $validate(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.value)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                $validate(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

mod ccc;
mod identity_card;
mod phone_number;
mod postal_code;

// Re-export commonly used types and functions
pub use ccc::{validate_ccc, CccNumber};
pub use identity_card::{
    validate_identity_card, validate_personal_identity, IdentityCardNumber, IdentityKind,
};
pub use phone_number::{validate_phone_number, PhoneNumber};
pub use postal_code::{validate_postal_code, PostalCode};

/// Numeric value of a string the caller has already checked is ASCII digits
fn digit_values(digits: &str) -> impl Iterator<Item = u32> + '_ {
    digits.bytes().map(|b| u32::from(b - b'0'))
}
