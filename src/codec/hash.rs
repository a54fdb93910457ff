//! Digest algorithms by name
//!
//! [`HASH_ALGORITHMS`] is a fixed table built at compile time. Lookups by an
//! unknown name fail with [`CodecError::UnsupportedAlgorithm`].

use crate::codec::{to_hex_upper, CodecError};
use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

type DigestFn = fn(&[u8]) -> Vec<u8>;
type Pbkdf2Fn = fn(&[u8], &[u8], u32, &mut [u8]);

/// One named digest
pub struct HashAlgorithm {
    pub name: &'static str,
    /// Digest length in bytes
    pub output_size: usize,
    digest: DigestFn,
    /// PBKDF2-HMAC over this digest, where supported
    pbkdf2: Option<Pbkdf2Fn>,
}

impl HashAlgorithm {
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        (self.digest)(data)
    }

    pub fn supports_pbkdf2(&self) -> bool {
        self.pbkdf2.is_some()
    }
}

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

pub static HASH_ALGORITHMS: [HashAlgorithm; 12] = [
    HashAlgorithm {
        name: "md5",
        output_size: 16,
        digest: digest_with::<Md5>,
        pbkdf2: Some(pbkdf2::pbkdf2_hmac::<Md5>),
    },
    HashAlgorithm {
        name: "sha1",
        output_size: 20,
        digest: digest_with::<Sha1>,
        pbkdf2: Some(pbkdf2::pbkdf2_hmac::<Sha1>),
    },
    HashAlgorithm {
        name: "sha224",
        output_size: 28,
        digest: digest_with::<Sha224>,
        pbkdf2: Some(pbkdf2::pbkdf2_hmac::<Sha224>),
    },
    HashAlgorithm {
        name: "sha256",
        output_size: 32,
        digest: digest_with::<Sha256>,
        pbkdf2: Some(pbkdf2::pbkdf2_hmac::<Sha256>),
    },
    HashAlgorithm {
        name: "sha384",
        output_size: 48,
        digest: digest_with::<Sha384>,
        pbkdf2: Some(pbkdf2::pbkdf2_hmac::<Sha384>),
    },
    HashAlgorithm {
        name: "sha512",
        output_size: 64,
        digest: digest_with::<Sha512>,
        pbkdf2: Some(pbkdf2::pbkdf2_hmac::<Sha512>),
    },
    HashAlgorithm {
        name: "sha3_224",
        output_size: 28,
        digest: digest_with::<Sha3_224>,
        pbkdf2: None,
    },
    HashAlgorithm {
        name: "sha3_256",
        output_size: 32,
        digest: digest_with::<Sha3_256>,
        pbkdf2: None,
    },
    HashAlgorithm {
        name: "sha3_384",
        output_size: 48,
        digest: digest_with::<Sha3_384>,
        pbkdf2: None,
    },
    HashAlgorithm {
        name: "sha3_512",
        output_size: 64,
        digest: digest_with::<Sha3_512>,
        pbkdf2: None,
    },
    HashAlgorithm {
        name: "blake2b",
        output_size: 64,
        digest: digest_with::<Blake2b512>,
        pbkdf2: None,
    },
    HashAlgorithm {
        name: "blake2s",
        output_size: 32,
        digest: digest_with::<Blake2s256>,
        pbkdf2: None,
    },
];

/// Look up an algorithm by name
pub fn find(name: &str) -> Result<&'static HashAlgorithm, CodecError> {
    HASH_ALGORITHMS
        .iter()
        .find(|alg| alg.name == name)
        .ok_or_else(|| CodecError::UnsupportedAlgorithm(name.to_string()))
}

/// Names of every supported algorithm, in table order
pub fn algorithms() -> impl Iterator<Item = &'static str> {
    HASH_ALGORITHMS.iter().map(|alg| alg.name)
}

/// Uppercase hex digest of the UTF-8 bytes of `text`
pub fn hash(name: &str, text: &str) -> Result<String, CodecError> {
    let alg = find(name)?;
    Ok(to_hex_upper(&alg.digest(text.as_bytes())))
}

/// PBKDF2-HMAC key derivation, returned as uppercase hex.
///
/// `dklen` defaults to the digest size of `hash_name`.
pub fn pbkdf2_hmac(
    hash_name: &str,
    password: &str,
    salt: &str,
    iterations: u32,
    dklen: Option<usize>,
) -> Result<String, CodecError> {
    let alg = find(hash_name)?;
    let derive = alg
        .pbkdf2
        .ok_or_else(|| CodecError::UnsupportedAlgorithm(format!("pbkdf2 with {}", hash_name)))?;

    if iterations < 1 {
        return Err(CodecError::InvalidParameter {
            name: "iterations",
            message: "must be at least 1".to_string(),
        });
    }
    let dklen = dklen.unwrap_or(alg.output_size);
    if dklen < 1 {
        return Err(CodecError::InvalidParameter {
            name: "dklen",
            message: "must be at least 1".to_string(),
        });
    }

    let mut key = vec![0u8; dklen];
    derive(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
    Ok(to_hex_upper(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes_match_digests() {
        for alg in HASH_ALGORITHMS.iter() {
            assert_eq!(alg.digest(b"").len(), alg.output_size, "{}", alg.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = algorithms().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), HASH_ALGORITHMS.len());
    }
}
