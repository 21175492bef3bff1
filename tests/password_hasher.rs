//! End-to-end tests for hashing, verification, and record handling
//!
//! Work factors are kept at the accepted minimum so the suite stays fast in
//! debug builds; the defaults themselves are pinned by unit tests.

use pwkdf::{HashError, PasswordHasher};

const KNOWN_RECORD: &str =
    "3bc3ff808fecfa016e9b62580012ecb9137be9fd8c4cbdecb3cd454e741c6b80:test:10000:32:sha1";

fn cheap_hasher() -> PasswordHasher {
    PasswordHasher::new()
        .with_iterations(10_000)
        .with_length(32)
        .with_digest("sha256")
}

#[tokio::test]
async fn matches_known_sha1_vector() {
    let record = PasswordHasher::new()
        .with_salt("test")
        .with_iterations(10_000)
        .with_length(32)
        .with_digest("sha1")
        .hash("hola")
        .await
        .unwrap();
    assert_eq!(record, KNOWN_RECORD);
}

#[tokio::test]
async fn verifies_known_record() {
    assert!(pwkdf::verify_password("hola", KNOWN_RECORD).await.unwrap());
}

#[tokio::test]
async fn rejects_wrong_password() {
    assert!(!pwkdf::verify_password("adios", KNOWN_RECORD).await.unwrap());
}

#[tokio::test]
async fn round_trips_with_generated_salt() {
    let hasher = cheap_hasher();
    let record = hasher.hash("hunter2").await.unwrap();
    assert!(hasher.verify("hunter2", &record).await.unwrap());
    assert!(!hasher.verify("hunter3", &record).await.unwrap());
}

#[tokio::test]
async fn generated_salt_is_512_bytes_of_hex() {
    let record = cheap_hasher().hash("pw").await.unwrap();
    let salt = record.split(':').nth(1).unwrap().to_string();
    assert_eq!(salt.len(), 1024);
    assert!(salt.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[tokio::test]
async fn fixed_salt_hashing_is_deterministic() {
    let hasher = cheap_hasher().with_salt("pepper");
    let a = hasher.hash("pw").await.unwrap();
    let b = hasher.hash("pw").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn generated_salts_make_records_differ() {
    let hasher = cheap_hasher();
    let a = hasher.hash("pw").await.unwrap();
    let b = hasher.hash("pw").await.unwrap();
    assert_ne!(a, b);
    assert!(hasher.verify("pw", &a).await.unwrap());
    assert!(hasher.verify("pw", &b).await.unwrap());
}

#[tokio::test]
async fn key_length_boundary() {
    let base = PasswordHasher::new()
        .with_salt("test")
        .with_iterations(10_000)
        .with_digest("sha256");

    let err = base.clone().with_length(31).hash("pw").await.unwrap_err();
    assert!(matches!(err, HashError::InvalidKeyLength(31)));

    assert!(base.with_length(32).hash("pw").await.is_ok());
}

#[tokio::test]
async fn iterations_boundary() {
    let base = PasswordHasher::new()
        .with_salt("test")
        .with_length(32)
        .with_digest("sha256");

    let err = base
        .clone()
        .with_iterations(9_999)
        .hash("pw")
        .await
        .unwrap_err();
    assert!(matches!(err, HashError::InvalidIterations(9_999)));

    assert!(base.with_iterations(10_000).hash("pw").await.is_ok());
}

#[tokio::test]
async fn empty_digest_is_unsupported() {
    let err = PasswordHasher::new()
        .with_salt("test")
        .with_iterations(10_000)
        .with_length(32)
        .with_digest("")
        .hash("hola")
        .await
        .unwrap_err();
    assert!(matches!(err, HashError::UnsupportedDigest(_)));
}

#[tokio::test]
async fn malformed_records_reject() {
    let hasher = cheap_hasher();
    for record in [
        "missing:fields:10000:32",
        "key:salt:10.5:32:sha1",
        "key:salt:10000:1e2:sha1",
        "key:salt:10000:32:sha1:extra",
    ] {
        let err = hasher.verify("pw", record).await.unwrap_err();
        assert!(
            matches!(err, HashError::MalformedRecord(_)),
            "{record}: {err}"
        );
    }
}

#[tokio::test]
async fn verify_propagates_parameter_errors() {
    // Structurally valid records with out-of-range parameters must reject
    // with the parameter error, not return false.
    let err = pwkdf::verify_password("pw", "key:salt:5000:32:sha1")
        .await
        .unwrap_err();
    assert!(matches!(err, HashError::InvalidIterations(5_000)));

    let err = pwkdf::verify_password("pw", "key:salt:10000:16:sha1")
        .await
        .unwrap_err();
    assert!(matches!(err, HashError::InvalidKeyLength(16)));
}

#[tokio::test]
async fn verify_rejects_unknown_record_digest() {
    let err = pwkdf::verify_password("pw", "key:salt:10000:32:md5")
        .await
        .unwrap_err();
    assert!(matches!(err, HashError::UnsupportedDigest(_)));
}

#[tokio::test]
async fn empty_salt_record_never_matches() {
    // An empty salt field counts as absent, so re-hashing picks a fresh
    // random salt and the records cannot be equal.
    let record = PasswordHasher::new()
        .with_salt("test")
        .with_iterations(10_000)
        .with_length(32)
        .with_digest("sha256")
        .hash("pw")
        .await
        .unwrap();
    let emptied = record.replacen(":test:", "::", 1);
    assert!(!pwkdf::verify_password("pw", &emptied).await.unwrap());
}

#[tokio::test]
async fn custom_separator_round_trips() {
    let hasher = cheap_hasher().with_salt("test").with_separator("|");
    let record = hasher.hash("pw").await.unwrap();
    assert_eq!(record.split('|').count(), 5);
    assert!(hasher.verify("pw", &record).await.unwrap());

    // The default separator cannot decode it
    let err = pwkdf::verify_password("pw", &record).await.unwrap_err();
    assert!(matches!(err, HashError::MalformedRecord(_)));
}

#[tokio::test]
async fn salt_extracted_from_one_record_reproduces_it() {
    let hasher = cheap_hasher();
    let record = hasher.hash("pw").await.unwrap();
    let salt = record.split(':').nth(1).unwrap().to_string();
    let again = hasher.with_salt(salt).hash("pw").await.unwrap();
    assert_eq!(again, record);
}

#[tokio::test]
async fn empty_and_unicode_passwords() {
    let hasher = cheap_hasher().with_salt("test");

    let record = hasher.hash("").await.unwrap();
    assert!(hasher.verify("", &record).await.unwrap());
    assert!(!hasher.verify("x", &record).await.unwrap());

    let record = hasher.hash("contraseña🔐").await.unwrap();
    assert!(hasher.verify("contraseña🔐", &record).await.unwrap());
}

#[tokio::test]
async fn key_hex_length_tracks_requested_length() {
    let record = PasswordHasher::new()
        .with_salt("test")
        .with_iterations(10_000)
        .with_length(48)
        .with_digest("sha256")
        .hash("pw")
        .await
        .unwrap();
    let key_hex = record.split(':').next().unwrap();
    assert_eq!(key_hex.len(), 96);
    assert!(key_hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let hasher = cheap_hasher().with_salt("test");
    let (a, b, c) = tokio::join!(
        hasher.hash("one"),
        hasher.hash("two"),
        hasher.hash("one"),
    );
    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert_eq!(a, c);
    assert_ne!(a, b);
}
