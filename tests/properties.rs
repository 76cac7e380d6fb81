//! Property tests over the public validators

use localflavor_es::validation::NIF_CONTROL;
use localflavor_es::{
    validate_ccc, validate_identity_card, validate_phone_number, validate_postal_code, ErrorKind,
    ValidationError,
};
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ccc_check_digit(digits: &str) -> u32 {
    const WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];
    let sum: u32 = digits
        .bytes()
        .zip(WEIGHTS)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    match 11 - sum % 11 {
        11 => 0,
        10 => 1,
        digit => digit,
    }
}

/// A valid CCC split into its groups
fn valid_ccc() -> impl Strategy<Value = (String, String, String, String)> {
    ("[0-9]{4}", "[0-9]{4}", "[0-9]{10}").prop_map(|(entity, office, account)| {
        let checksum = format!(
            "{}{}",
            ccc_check_digit(&format!("00{entity}{office}")),
            ccc_check_digit(&account)
        );
        (entity, office, checksum, account)
    })
}

proptest! {
    #[test]
    fn validators_never_panic(raw in "\\PC{0,30}") {
        init_logger();
        let _ = validate_identity_card(&raw);
        let _ = validate_ccc(&raw);
        let _ = validate_phone_number(&raw);
        let _ = validate_postal_code(&raw);
    }

    #[test]
    fn nif_accepts_its_check_letter(number in 0u32..100_000_000) {
        let letter = NIF_CONTROL[(number % 23) as usize] as char;
        let raw = format!("{number:08}{letter}");
        let identity = validate_identity_card(&raw).unwrap();
        prop_assert_eq!(identity.as_str(), raw.as_str());
    }

    #[test]
    fn nif_rejects_other_letters(number in 0u32..100_000_000, offset in 1usize..23) {
        let letter = NIF_CONTROL[(number as usize % 23 + offset) % 23] as char;
        let error = validate_identity_card(&format!("{number:08}{letter}")).unwrap_err();
        prop_assert_eq!(error, ValidationError::NifChecksum);
        prop_assert_eq!(error.kind(), ErrorKind::Checksum);
    }

    #[test]
    fn identity_normalization_is_idempotent(number in 0u32..10_000_000, prefix in 0u32..3) {
        let letter = NIF_CONTROL[((prefix * 10_000_000 + number) % 23) as usize] as char;
        let prefix = ['x', 'y', 'z'][prefix as usize];
        let first = validate_identity_card(&format!(" {prefix}-{number:07} {letter} ")).unwrap();
        let second = validate_identity_card(first.as_str()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ccc_separator_styles_agree((entity, office, checksum, account) in valid_ccc()) {
        let canonical = format!("{entity}-{office}-{checksum}-{account}");
        let spaced = format!("{entity} {office} {checksum} {account}");
        let bare = format!("{entity}{office}{checksum}{account}");

        for raw in [&canonical, &spaced, &bare] {
            let ccc = validate_ccc(raw).unwrap();
            prop_assert_eq!(ccc.as_str(), canonical.as_str());
            prop_assert_eq!(validate_ccc(ccc.as_str()).unwrap(), ccc);
        }
    }

    #[test]
    fn ccc_detects_altered_check_digit((entity, office, checksum, account) in valid_ccc(), delta in 1u32..10) {
        let first = checksum.as_bytes()[0] - b'0';
        let altered = (u32::from(first) + delta) % 10;
        let raw = format!("{entity}{office}{altered}{}{account}", &checksum[1..]);
        prop_assert_eq!(validate_ccc(&raw), Err(ValidationError::CccChecksum));
    }

    #[test]
    fn phone_numbers_follow_their_prefix(first in 0u8..10, rest in "[0-9]{8}") {
        let raw = format!("{first}{rest}");
        let result = validate_phone_number(&raw);
        if matches!(first, 6 | 8 | 9) {
            let phone = result.unwrap();
            prop_assert_eq!(phone.as_str(), raw.as_str());
        } else {
            prop_assert_eq!(result, Err(ValidationError::InvalidPhoneNumber));
        }
    }

    #[test]
    fn postal_codes_follow_the_province_range(province in 0u32..100, rest in "[0-9]{3}") {
        let raw = format!("{province:02}{rest}");
        let result = validate_postal_code(&raw);
        if (1..=52).contains(&province) {
            let code = result.unwrap();
            prop_assert_eq!(code.as_str(), raw.as_str());
            prop_assert!(code.province().is_some());
        } else {
            prop_assert_eq!(result, Err(ValidationError::InvalidPostalCode));
        }
    }
}

#[test]
fn documented_examples() {
    init_logger();

    assert!(validate_identity_card("12345678Z").is_ok());
    assert_eq!(
        validate_identity_card("12345678A").unwrap_err().kind(),
        ErrorKind::Checksum
    );

    assert!(validate_phone_number("612345678").is_ok());
    assert_eq!(
        validate_phone_number("512345678").unwrap_err().kind(),
        ErrorKind::Format
    );

    assert!(validate_postal_code("28080").is_ok());
    assert_eq!(validate_postal_code("53000").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(validate_postal_code("2808").unwrap_err().kind(), ErrorKind::Format);

    let canonical: Vec<_> = [
        "2100 0418 45 0200051332",
        "2100-0418-45-0200051332",
        "21000418450200051332",
    ]
    .iter()
    .map(|raw| validate_ccc(raw).map(|ccc| ccc.to_string()))
    .collect();
    assert!(canonical
        .iter()
        .all(|result| result.as_deref() == Ok("2100-0418-45-0200051332")));
}
