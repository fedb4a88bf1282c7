// tests/core/params.rs
use crate::common::PatternRandom;
use bcrypt_kdf::consts::{MAX_KEY_LEN, MAX_SALT_LEN};
use bcrypt_kdf::kdf::validate;
use bcrypt_kdf::{InvalidParameter, KdfError, KdfParams, KdfSettings};

fn invalid(err: InvalidParameter) -> Result<(), KdfError> {
    Err(KdfError::InvalidParameters(err))
}

#[test]
fn test_validate_accepts_boundaries() {
    assert_eq!(validate(b"p", b"s", 1, 1), Ok(()));
    assert_eq!(validate(b"p", b"s", u32::MAX, MAX_KEY_LEN), Ok(()));
    assert_eq!(validate(b"p", &vec![0u8; MAX_SALT_LEN], 1, 32), Ok(()));
}

#[test]
fn test_validate_rejections_name_the_check() {
    assert_eq!(validate(b"p", b"s", 0, 32), invalid(InvalidParameter::ZeroRounds));
    assert_eq!(validate(b"", b"s", 1, 32), invalid(InvalidParameter::EmptyPassword));
    assert_eq!(validate(b"p", b"", 1, 32), invalid(InvalidParameter::EmptySalt));
    assert_eq!(validate(b"p", b"s", 1, 0), invalid(InvalidParameter::ZeroKeyLength));
    assert_eq!(
        validate(b"p", b"s", 1, MAX_KEY_LEN + 1),
        invalid(InvalidParameter::KeyLengthTooLong {
            len: MAX_KEY_LEN + 1,
            max: MAX_KEY_LEN
        })
    );
    assert_eq!(
        validate(b"p", &vec![0u8; MAX_SALT_LEN + 1], 1, 32),
        invalid(InvalidParameter::SaltTooLong {
            len: MAX_SALT_LEN + 1,
            max: MAX_SALT_LEN
        })
    );
}

#[test]
fn test_rounds_checked_before_lengths() {
    assert_eq!(validate(b"", b"", 0, 0), invalid(InvalidParameter::ZeroRounds));
}

#[test]
fn test_params_new_validates() {
    assert!(KdfParams::new(b"salt".to_vec(), 16).is_ok());
    assert_eq!(
        KdfParams::new(Vec::new(), 16).unwrap_err(),
        KdfError::InvalidParameters(InvalidParameter::EmptySalt)
    );
    assert_eq!(
        KdfParams::new(b"salt".to_vec(), 0).unwrap_err(),
        KdfError::InvalidParameters(InvalidParameter::ZeroRounds)
    );
}

#[test]
fn test_generate_uses_settings_and_fresh_salts() {
    let a = KdfParams::generate(&KdfSettings::DEFAULT).unwrap();
    let b = KdfParams::generate(&KdfSettings::DEFAULT).unwrap();

    assert_eq!(a.rounds(), 16);
    assert_eq!(a.salt().len(), 16);
    assert_ne!(a.salt(), b.salt());

    let paranoid = KdfParams::generate(&KdfSettings::PARANOID).unwrap();
    assert_eq!(paranoid.rounds(), 64);
    assert_eq!(paranoid.salt().len(), 32);
}

#[test]
fn test_generate_with_draws_salt_from_source() {
    let params = KdfParams::generate_with(&KdfSettings::TEST, &PatternRandom(0x42)).unwrap();
    assert_eq!(params.salt(), &[0x42; 16]);
    assert_eq!(params.rounds(), 1);
}

#[test]
fn test_generate_rejects_bad_settings() {
    let zero_salt = KdfSettings {
        rounds: 4,
        salt_len: 0,
    };
    assert!(KdfParams::generate(&zero_salt).is_err());

    let zero_rounds = KdfSettings {
        rounds: 0,
        salt_len: 16,
    };
    assert!(KdfParams::generate(&zero_rounds).is_err());
}

#[test]
fn test_params_debug_hides_salt() {
    let params = KdfParams::new(b"very-secret-salt".to_vec(), 8).unwrap();
    let debug = format!("{params:?}");
    assert_eq!(debug, "KdfParams { salt_len: 16, rounds: 8 }");
}
