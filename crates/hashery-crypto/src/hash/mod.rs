//! Unified hash module.
//!
//! Re-exports all supported digest algorithm implementations together with
//! the streaming [`Hasher`](crate::provider::Hasher) contract they share.
//! Individual algorithms live in their own feature-gated modules and are
//! re-exported here for convenience.

pub use crate::provider::{new_hasher, new_xof, Hasher};

#[cfg(feature = "md2")]
pub use crate::md2::Md2;

#[cfg(feature = "md4")]
pub use crate::md4::Md4;

#[cfg(feature = "md5")]
pub use crate::md5::Md5;

#[cfg(feature = "sha1")]
pub use crate::sha1::Sha1;

#[cfg(feature = "sha2")]
pub use crate::sha2::{Sha224, Sha256, Sha384, Sha512};

#[cfg(feature = "ripemd")]
pub use crate::ripemd::{Ripemd128, Ripemd160};

#[cfg(feature = "sha3")]
pub use crate::sha3::{
    Keccak, KeccakParams, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256,
};
