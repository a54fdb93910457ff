// Codec tests against published digest and KDF vectors

use tapetty::codec::{self, base64, morse, CodecError};

#[test]
fn test_known_digests() {
    assert_eq!(
        codec::hash("md5", "").unwrap(),
        "D41D8CD98F00B204E9800998ECF8427E"
    );
    assert_eq!(
        codec::hash("sha1", "abc").unwrap(),
        "A9993E364706816ABA3E25717850C26C9CD0D89D"
    );
    assert_eq!(
        codec::hash("sha256", "abc").unwrap(),
        "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
    );
    assert_eq!(
        codec::hash("sha3_256", "").unwrap(),
        "A7FFC6F8BF1ED76651C14756A061D662F580FF4DE43B49FA82D80A4B80F8434A"
    );
}

#[test]
fn test_digest_is_uppercase_hex_of_expected_width() {
    for alg in codec::HASH_ALGORITHMS.iter() {
        let digest = codec::hash(alg.name, "tapetty").unwrap();
        assert_eq!(digest.len(), alg.output_size * 2, "{}", alg.name);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}

#[test]
fn test_unsupported_algorithm() {
    let err = codec::hash("whirlpool", "abc").unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedAlgorithm(ref name) if name == "whirlpool"));
}

#[test]
fn test_pbkdf2_sha1_vectors() {
    assert_eq!(
        codec::pbkdf2_hmac("sha1", "password", "salt", 1, Some(20)).unwrap(),
        "0C60C80F961F0E71F3A9B524AF6012062FE037A6"
    );
    assert_eq!(
        codec::pbkdf2_hmac("sha1", "password", "salt", 2, None).unwrap(),
        "EA6C014DC72D6F8CCD1ED92ACE1D41F0D8DE8957"
    );
}

#[test]
fn test_pbkdf2_sha256_vector() {
    assert_eq!(
        codec::pbkdf2_hmac("sha256", "password", "salt", 1, None).unwrap(),
        "120FB6CFFCF8B32C43E7225256C4F837A86548C92CCC35480805987CB70BE17B"
    );
}

#[test]
fn test_pbkdf2_custom_length() {
    let key = codec::pbkdf2_hmac("sha1", "password", "salt", 1, Some(8)).unwrap();
    assert_eq!(key, "0C60C80F961F0E71");
}

#[test]
fn test_pbkdf2_rejects_bad_parameters() {
    assert!(matches!(
        codec::pbkdf2_hmac("sha1", "p", "s", 0, None),
        Err(CodecError::InvalidParameter { name: "iterations", .. })
    ));
    assert!(matches!(
        codec::pbkdf2_hmac("sha1", "p", "s", 1, Some(0)),
        Err(CodecError::InvalidParameter { name: "dklen", .. })
    ));
    assert!(matches!(
        codec::pbkdf2_hmac("blake2b", "p", "s", 1, None),
        Err(CodecError::UnsupportedAlgorithm(_))
    ));
}

#[test]
fn test_pbkdf2_support_matches_table() {
    for alg in codec::HASH_ALGORITHMS.iter() {
        let derived = codec::pbkdf2_hmac(alg.name, "password", "salt", 1, Some(4));
        assert_eq!(derived.is_ok(), alg.supports_pbkdf2(), "{}", alg.name);
    }
}

#[test]
fn test_base64() {
    assert_eq!(base64::encode("hello"), "aGVsbG8=");
    assert_eq!(base64::encode(""), "");
    assert_eq!(base64::decode("aGVsbG8=").unwrap(), "hello");
    assert_eq!(base64::decode(&base64::encode("héllo wörld")).unwrap(), "héllo wörld");
}

#[test]
fn test_base64_decode_errors() {
    assert!(matches!(base64::decode("not base64!"), Err(CodecError::Base64(_))));
    // 0xFF alone is not valid UTF-8
    assert!(matches!(base64::decode("/w=="), Err(CodecError::Utf8(_))));
}

#[test]
fn test_morse_encode() {
    assert_eq!(morse::encode("SOS").unwrap(), "... --- ...");
    assert_eq!(morse::encode("sos").unwrap(), "... --- ...");
    assert_eq!(morse::encode("a b").unwrap(), ".-  -...");
    assert_eq!(morse::encode("k9").unwrap(), "-.- ----.");
}

#[test]
fn test_morse_decode() {
    assert_eq!(morse::decode("... --- ...").unwrap(), "sos");
    assert_eq!(morse::decode(".-  -...").unwrap(), "a b");
    assert_eq!(morse::decode("").unwrap(), " ");
    assert_eq!(morse::encode(" ").unwrap(), "");
    assert_eq!(morse::decode(&morse::encode(" ").unwrap()).unwrap(), " ");
    assert_eq!(
        morse::decode(&morse::encode("Hello World 2024").unwrap()).unwrap(),
        "hello world 2024"
    );
}

#[test]
fn test_morse_errors() {
    assert!(matches!(morse::encode("a?"), Err(CodecError::UnknownMorseChar('?'))));
    assert!(matches!(
        morse::decode(".- ......."),
        Err(CodecError::UnknownMorseCode(ref code)) if code == "......."
    ));
}

#[test]
fn test_rot13() {
    assert_eq!(codec::rot13("Hello, World!"), "Uryyb, Jbeyq!");
    assert_eq!(codec::rot13(&codec::rot13("Round trip 123")), "Round trip 123");
    assert_eq!(codec::rot13("ünïcode"), "üaïpbqr");
}
