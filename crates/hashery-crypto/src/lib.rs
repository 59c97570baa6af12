#![doc = "Streaming digest and extendable-output algorithms for hashery."]
#![forbid(unsafe_code)]
#![allow(clippy::new_without_default)]

// Core traits and trait-object factories
pub mod provider;

// Hash algorithms
#[cfg(feature = "md2")]
pub mod md2;
#[cfg(feature = "md4")]
pub mod md4;
#[cfg(feature = "md5")]
pub mod md5;
#[cfg(feature = "ripemd")]
pub mod ripemd;
#[cfg(feature = "sha1")]
pub mod sha1;
#[cfg(feature = "sha2")]
pub mod sha2;
#[cfg(feature = "sha3")]
pub mod sha3;

pub mod hash;

#[cfg(feature = "sha3")]
pub(crate) mod utils;
