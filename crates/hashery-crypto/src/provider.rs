//! Trait-based provider mechanism for digest algorithms.
//!
//! Every algorithm in the library, sponge-based and Merkle-Damgard-based
//! alike, satisfies the same streaming contract: incremental byte
//! ingestion, non-destructive finalization, and a pure padding rule.

use hashery_types::{HashAlgId, HashError};

/// A streaming hash / message digest algorithm.
///
/// `digest` never mutates the receiver: the implementation clones its full
/// mutable state (buffer, permutation or compression state, counters),
/// pads and finishes the clone, and returns the output. The original
/// instance keeps accepting `update` calls and can be finalized again,
/// each call yielding the digest of all bytes absorbed up to that point.
///
/// Each concrete algorithm additionally exposes an associated
/// `get_padding(len)` function — the exact bytes that, appended at byte
/// length `len`, reach a block boundary under its padding rule. It is a
/// pure function of the length and the algorithm's fixed parameters and
/// needs no instance.
pub trait Hasher: Send + Sync {
    /// The output size in bytes.
    fn output_size(&self) -> usize;

    /// The internal block size in bytes.
    fn block_size(&self) -> usize;

    /// Feed data into the hash state, processing every complete block and
    /// leaving a strict remainder shorter than one block buffered.
    fn update(&mut self, data: &[u8]);

    /// The finalized digest over all bytes absorbed so far.
    fn digest(&self) -> Vec<u8>;

    /// Lowercase hexadecimal encoding of `digest()`.
    fn hexdigest(&self) -> String {
        self.digest().iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Create a digest context for a fixed-output algorithm.
///
/// Extendable-output ids are rejected; their output length is a required
/// construction parameter, so they go through [`new_xof`] instead.
#[allow(unreachable_patterns)]
pub fn new_hasher(id: HashAlgId) -> Result<Box<dyn Hasher>, HashError> {
    match id {
        #[cfg(feature = "md2")]
        HashAlgId::Md2 => Ok(Box::new(crate::md2::Md2::new())),
        #[cfg(feature = "md4")]
        HashAlgId::Md4 => Ok(Box::new(crate::md4::Md4::new())),
        #[cfg(feature = "md5")]
        HashAlgId::Md5 => Ok(Box::new(crate::md5::Md5::new())),
        #[cfg(feature = "sha1")]
        HashAlgId::Sha1 => Ok(Box::new(crate::sha1::Sha1::new())),
        #[cfg(feature = "sha2")]
        HashAlgId::Sha224 => Ok(Box::new(crate::sha2::Sha224::new())),
        #[cfg(feature = "sha2")]
        HashAlgId::Sha256 => Ok(Box::new(crate::sha2::Sha256::new())),
        #[cfg(feature = "sha2")]
        HashAlgId::Sha384 => Ok(Box::new(crate::sha2::Sha384::new())),
        #[cfg(feature = "sha2")]
        HashAlgId::Sha512 => Ok(Box::new(crate::sha2::Sha512::new())),
        #[cfg(feature = "ripemd")]
        HashAlgId::Ripemd128 => Ok(Box::new(crate::ripemd::Ripemd128::new())),
        #[cfg(feature = "ripemd")]
        HashAlgId::Ripemd160 => Ok(Box::new(crate::ripemd::Ripemd160::new())),
        #[cfg(feature = "sha3")]
        HashAlgId::Sha3_224 => Ok(Box::new(crate::sha3::Sha3_224::new())),
        #[cfg(feature = "sha3")]
        HashAlgId::Sha3_256 => Ok(Box::new(crate::sha3::Sha3_256::new())),
        #[cfg(feature = "sha3")]
        HashAlgId::Sha3_384 => Ok(Box::new(crate::sha3::Sha3_384::new())),
        #[cfg(feature = "sha3")]
        HashAlgId::Sha3_512 => Ok(Box::new(crate::sha3::Sha3_512::new())),
        HashAlgId::Shake128 | HashAlgId::Shake256 => Err(HashError::InvalidConfig(
            "extendable-output functions take an output length; use new_xof",
        )),
        _ => Err(HashError::NotSupported),
    }
}

/// Create a digest context for an extendable-output function with a
/// caller-chosen output length in bits (must be a multiple of 8).
#[allow(unreachable_patterns, unused_variables)]
pub fn new_xof(id: HashAlgId, output_bits: usize) -> Result<Box<dyn Hasher>, HashError> {
    match id {
        #[cfg(feature = "sha3")]
        HashAlgId::Shake128 => Ok(Box::new(crate::sha3::Shake128::new(output_bits)?)),
        #[cfg(feature = "sha3")]
        HashAlgId::Shake256 => Ok(Box::new(crate::sha3::Shake256::new(output_bits)?)),
        id if !id.is_xof() => Err(HashError::InvalidConfig(
            "fixed-output algorithms do not take an output length; use new_hasher",
        )),
        _ => Err(HashError::NotSupported),
    }
}
