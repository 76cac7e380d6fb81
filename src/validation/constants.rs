//! Constants used throughout the validation system

/// Check letters for NIF and NIE, indexed by `number % 23`
pub const NIF_CONTROL: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Check letters for CIF, indexed by the control digit
pub const CIF_CONTROL: &[u8; 10] = b"JABCDEFGHI";

/// Organization types whose CIF check character must be a digit
pub const CIF_DIGIT_TYPES: &str = "ABEH";

/// Organization types whose CIF check character must be a letter
pub const CIF_LETTER_TYPES: &str = "NPQRSW";

/// Prefixes of NIFs issued to people without a DNI (K, L and M). Their check
/// letter may be the CIF control letter or the mod 23 NIF letter.
pub const CIF_PERSONAL_TYPES: &str = "KLM";

/// Every type accepted as the leading CIF letter
pub const CIF_TYPES: &str = "ABCDEFGHJKLMNPQRSUVW";

/// NIE prefixes, each standing for the digit at its index
pub const NIE_TYPES: &str = "XYZ";

/// Per-position weights for both CCC check digits
pub const CCC_WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

/// Length of a CCC once separators are removed
pub const CCC_LENGTH: usize = 20;

/// Length of a phone number
pub const PHONE_NUMBER_LENGTH: usize = 9;

/// Length of a postal code
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Highest province code a postal code may start with
pub const MAX_PROVINCE_CODE: u8 = 52;
