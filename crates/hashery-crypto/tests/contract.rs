//! Cross-algorithm contract tests.
//!
//! Every digest in the library promises the same streaming behavior:
//! chunking never changes the result, finalization never consumes the
//! context, padding always lands exactly on a block boundary, and the
//! output length matches the advertised size. These tests exercise that
//! contract uniformly through `Box<dyn Hasher>`.

use hashery_crypto::hash::{new_hasher, new_xof, Hasher};
use hashery_crypto::md2::Md2;
use hashery_crypto::md4::Md4;
use hashery_crypto::md5::Md5;
use hashery_crypto::ripemd::{Ripemd128, Ripemd160};
use hashery_crypto::sha1::Sha1;
use hashery_crypto::sha2::{Sha224, Sha256, Sha384, Sha512};
use hashery_crypto::sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};
use hashery_types::{HashAlgId, HashError};

const FIXED_IDS: [HashAlgId; 14] = [
    HashAlgId::Md2,
    HashAlgId::Md4,
    HashAlgId::Md5,
    HashAlgId::Sha1,
    HashAlgId::Sha224,
    HashAlgId::Sha256,
    HashAlgId::Sha384,
    HashAlgId::Sha512,
    HashAlgId::Ripemd128,
    HashAlgId::Ripemd160,
    HashAlgId::Sha3_224,
    HashAlgId::Sha3_256,
    HashAlgId::Sha3_384,
    HashAlgId::Sha3_512,
];

fn all_hashers() -> Vec<(HashAlgId, Box<dyn Hasher>)> {
    let mut out: Vec<(HashAlgId, Box<dyn Hasher>)> = FIXED_IDS
        .iter()
        .map(|&id| (id, new_hasher(id).unwrap()))
        .collect();
    out.push((HashAlgId::Shake128, new_xof(HashAlgId::Shake128, 256).unwrap()));
    out.push((HashAlgId::Shake256, new_xof(HashAlgId::Shake256, 512).unwrap()));
    out
}

fn test_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 13) as u8).collect()
}

// ---------------------------------------------------------------------------
// Streaming equivalence
// ---------------------------------------------------------------------------

#[test]
fn chunking_never_changes_the_digest() {
    let data = test_input(500);
    for (id, mut whole) in all_hashers() {
        whole.update(&data);
        let expected = whole.digest();

        for split in [1usize, 3, 63, 64, 65, 128, 499] {
            let mut chunked = match id.is_xof() {
                true => new_xof(id, 8 * expected.len()).unwrap(),
                false => new_hasher(id).unwrap(),
            };
            for chunk in data.chunks(split) {
                chunked.update(chunk);
            }
            assert_eq!(chunked.digest(), expected, "{id:?} split {split}");
        }
    }
}

#[test]
fn empty_updates_are_no_ops() {
    for (id, mut ctx) in all_hashers() {
        ctx.update(b"");
        let before = ctx.digest();
        ctx.update(b"");
        assert_eq!(ctx.digest(), before, "{id:?}");
    }
}

// ---------------------------------------------------------------------------
// Non-destructive finalization
// ---------------------------------------------------------------------------

#[test]
fn digest_is_repeatable_and_does_not_consume() {
    let data = test_input(200);
    for (id, mut ctx) in all_hashers() {
        ctx.update(&data[..100]);
        let first = ctx.digest();
        assert_eq!(ctx.digest(), first, "{id:?} second digest differs");

        // the context must remain live after finalization
        ctx.update(&data[100..]);
        let extended = ctx.digest();
        assert_ne!(extended, first, "{id:?} digest ignored later input");

        let mut oneshot = match id.is_xof() {
            true => new_xof(id, 8 * first.len()).unwrap(),
            false => new_hasher(id).unwrap(),
        };
        oneshot.update(&data);
        assert_eq!(extended, oneshot.digest(), "{id:?} interleaved digest diverged");
    }
}

#[test]
fn hexdigest_matches_digest() {
    for (id, mut ctx) in all_hashers() {
        ctx.update(b"hello world");
        let hexed: String = ctx.digest().iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(ctx.hexdigest(), hexed, "{id:?}");
    }
}

// ---------------------------------------------------------------------------
// Output and block sizes
// ---------------------------------------------------------------------------

#[test]
fn output_length_matches_advertised_size() {
    for (id, mut ctx) in all_hashers() {
        ctx.update(b"size check");
        assert_eq!(ctx.digest().len(), ctx.output_size(), "{id:?}");
    }
}

#[test]
fn shake_output_length_is_caller_chosen() {
    for bits in [8usize, 128, 224, 333 * 8, 1344, 4096] {
        let mut xof = new_xof(HashAlgId::Shake128, bits).unwrap();
        xof.update(b"xof");
        assert_eq!(xof.digest().len(), bits / 8);
        assert_eq!(xof.output_size(), bits / 8);
    }
}

#[test]
fn shake_outputs_are_prefixes_of_each_other() {
    let mut short = new_xof(HashAlgId::Shake256, 128).unwrap();
    let mut long = new_xof(HashAlgId::Shake256, 4096).unwrap();
    short.update(b"prefix property");
    long.update(b"prefix property");
    let short = short.digest();
    let long = long.digest();
    assert_eq!(short[..], long[..16]);
}

// ---------------------------------------------------------------------------
// Padding rules
// ---------------------------------------------------------------------------

#[test]
fn padding_always_reaches_a_block_boundary() {
    fn check(name: &str, block: u64, pad: impl Fn(u64) -> Vec<u8>) {
        for len in (0..2 * block).chain([block * 100 - 1, u64::from(u32::MAX) + 5]) {
            let padding = pad(len);
            assert!(
                !padding.is_empty() && (len + padding.len() as u64) % block == 0,
                "{name} padding misaligned at len {len}"
            );
        }
    }

    check("md2", 16, Md2::get_padding);
    check("md4", 64, Md4::get_padding);
    check("md5", 64, Md5::get_padding);
    check("sha1", 64, Sha1::get_padding);
    check("sha224", 64, Sha224::get_padding);
    check("sha256", 64, Sha256::get_padding);
    check("sha384", 128, Sha384::get_padding);
    check("sha512", 128, Sha512::get_padding);
    check("ripemd128", 64, Ripemd128::get_padding);
    check("ripemd160", 64, Ripemd160::get_padding);
    check("sha3-224", 144, Sha3_224::get_padding);
    check("sha3-256", 136, Sha3_256::get_padding);
    check("sha3-384", 104, Sha3_384::get_padding);
    check("sha3-512", 72, Sha3_512::get_padding);
    check("shake128", 168, Shake128::get_padding);
    check("shake256", 136, Shake256::get_padding);
}

#[test]
fn padding_is_never_longer_than_necessary() {
    // MD-style padding spans at most one length field plus a block; sponge
    // padding spans at most one block.
    for len in 0..300u64 {
        assert!(Md5::get_padding(len).len() as u64 <= 64 + 8);
        assert!(Sha512::get_padding(len).len() as u64 <= 128 + 16);
        assert!(Sha3_256::get_padding(len).len() as u64 <= 136);
        assert!(Md2::get_padding(len).len() as u64 <= 16);
    }
}

// ---------------------------------------------------------------------------
// Block-aligned inputs
// ---------------------------------------------------------------------------

#[test]
fn block_multiple_inputs_leave_no_residue() {
    for (id, mut ctx) in all_hashers() {
        let block = ctx.block_size();
        let data = test_input(block * 3);
        ctx.update(&data);
        let whole = ctx.digest();

        let mut stepped = match id.is_xof() {
            true => new_xof(id, 8 * whole.len()).unwrap(),
            false => new_hasher(id).unwrap(),
        };
        for chunk in data.chunks(block) {
            stepped.update(chunk);
        }
        assert_eq!(stepped.digest(), whole, "{id:?}");
    }
}

// ---------------------------------------------------------------------------
// Factory errors
// ---------------------------------------------------------------------------

#[test]
fn fixed_output_factory_rejects_xofs() {
    for id in [HashAlgId::Shake128, HashAlgId::Shake256] {
        assert!(matches!(new_hasher(id), Err(HashError::InvalidConfig(_))));
    }
}

#[test]
fn xof_factory_rejects_fixed_output_algorithms() {
    for id in FIXED_IDS {
        assert!(
            matches!(new_xof(id, 256), Err(HashError::InvalidConfig(_))),
            "{id:?}"
        );
    }
}

#[test]
fn xof_factory_rejects_unaligned_output_length() {
    assert!(matches!(
        new_xof(HashAlgId::Shake128, 100),
        Err(HashError::InvalidConfig(_))
    ));
    assert!(matches!(
        new_xof(HashAlgId::Shake256, 0),
        Err(HashError::InvalidConfig(_))
    ));
}
