//! Errors reported by the validators

use derive_more::Display;
use serde::Serialize;
use thiserror::Error;

/// Why an input was rejected: it either doesn't have the expected shape, or
/// it does but its check digit/letter disagrees with the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum ErrorKind {
    #[display("format")]
    Format,
    #[display("checksum")]
    Checksum,
}

/// A rejected input. The `Display` output is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Please enter a valid NIF, NIE, or CIF.")]
    InvalidIdentityCard,
    #[error("Please enter a valid NIF or NIE.")]
    InvalidPersonalIdentity,
    #[error("Invalid checksum for NIF.")]
    NifChecksum,
    #[error("Invalid checksum for NIE.")]
    NieChecksum,
    #[error("Invalid checksum for CIF.")]
    CifChecksum,
    #[error("Please enter a valid bank account number in format XXXX-XXXX-XX-XXXXXXXXXX.")]
    InvalidCcc,
    #[error("Invalid checksum for bank account number.")]
    CccChecksum,
    #[error("Enter a valid phone number in one of the formats 6XXXXXXXX, 8XXXXXXXX or 9XXXXXXXX.")]
    InvalidPhoneNumber,
    #[error("Enter a valid postal code in the range and format 01XXX - 52XXX.")]
    InvalidPostalCode,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NifChecksum | Self::NieChecksum | Self::CifChecksum | Self::CccChecksum => {
                ErrorKind::Checksum
            }
            Self::InvalidIdentityCard
            | Self::InvalidPersonalIdentity
            | Self::InvalidCcc
            | Self::InvalidPhoneNumber
            | Self::InvalidPostalCode => ErrorKind::Format,
        }
    }

    /// Stable code a form layer can key its messages on
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentityCard
            | Self::InvalidCcc
            | Self::InvalidPhoneNumber
            | Self::InvalidPostalCode => "invalid",
            Self::InvalidPersonalIdentity => "invalid_only_nif",
            Self::NifChecksum => "invalid_nif",
            Self::NieChecksum => "invalid_nie",
            Self::CifChecksum => "invalid_cif",
            Self::CccChecksum => "checksum",
        }
    }

    pub fn is_checksum(&self) -> bool {
        self.kind() == ErrorKind::Checksum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let checksum_errors = vec![
            ValidationError::NifChecksum,
            ValidationError::NieChecksum,
            ValidationError::CifChecksum,
            ValidationError::CccChecksum,
        ];
        for error in checksum_errors {
            assert_eq!(error.kind(), ErrorKind::Checksum, "{:?} should be a checksum error", error);
        }

        let format_errors = vec![
            ValidationError::InvalidIdentityCard,
            ValidationError::InvalidPersonalIdentity,
            ValidationError::InvalidCcc,
            ValidationError::InvalidPhoneNumber,
            ValidationError::InvalidPostalCode,
        ];
        for error in format_errors {
            assert_eq!(error.kind(), ErrorKind::Format, "{:?} should be a format error", error);
        }
    }

    #[test]
    fn test_codes_and_messages() {
        assert_eq!(ValidationError::InvalidPersonalIdentity.code(), "invalid_only_nif");
        assert_eq!(ValidationError::NieChecksum.code(), "invalid_nie");
        assert_eq!(ValidationError::CccChecksum.code(), "checksum");
        assert_eq!(
            ValidationError::CifChecksum.to_string(),
            "Invalid checksum for CIF."
        );
        assert_eq!(ErrorKind::Checksum.to_string(), "checksum");
    }
}
