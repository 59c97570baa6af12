//! SHA-2 family of hash algorithms.
//!
//! Provides SHA-224, SHA-256, SHA-384, and SHA-512 as defined in FIPS
//! 180-4. SHA-224/SHA-256 share one 32-bit compression function and
//! SHA-384/SHA-512 share one 64-bit compression function; the variants
//! differ only in initial state and output truncation.

use crate::provider::Hasher;
use hashery_types::HashError;

/// Round constants for the 32-bit compression function.
#[rustfmt::skip]
const K32: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Round constants for the 64-bit compression function.
#[rustfmt::skip]
const K64: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

fn compress32(state: &mut [u32; 8], block: &[u8]) {
    let mut w = [0u32; 64];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for i in 16..64 {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for i in 0..64 {
        let big_s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let temp1 = h
            .wrapping_add(big_s1)
            .wrapping_add(ch)
            .wrapping_add(K32[i])
            .wrapping_add(w[i]);
        let big_s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = big_s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

fn compress64(state: &mut [u64; 8], block: &[u8]) {
    let mut w = [0u64; 80];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    for i in 16..80 {
        let s0 = w[i - 15].rotate_right(1) ^ w[i - 15].rotate_right(8) ^ (w[i - 15] >> 7);
        let s1 = w[i - 2].rotate_right(19) ^ w[i - 2].rotate_right(61) ^ (w[i - 2] >> 6);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for i in 0..80 {
        let big_s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
        let ch = (e & f) ^ (!e & g);
        let temp1 = h
            .wrapping_add(big_s1)
            .wrapping_add(ch)
            .wrapping_add(K64[i])
            .wrapping_add(w[i]);
        let big_s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = big_s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

/// Padding for the 64-byte-block variants: `0x80`, zero fill to 8 bytes
/// short of a boundary, then the bit length as a big-endian u64.
fn padding64(len: u64) -> Vec<u8> {
    let mut padding = vec![0x80u8];
    padding.resize(1 + (55u64.wrapping_sub(len) % 64) as usize, 0);
    padding.extend_from_slice(&(len.wrapping_mul(8)).to_be_bytes());
    padding
}

/// Padding for the 128-byte-block variants: the length field widens to a
/// big-endian u128.
fn padding128(len: u64) -> Vec<u8> {
    let mut padding = vec![0x80u8];
    padding.resize(1 + (111u64.wrapping_sub(len) % 128) as usize, 0);
    padding.extend_from_slice(&((len as u128) * 8).to_be_bytes());
    padding
}

// ---------------------------------------------------------------------------
// SHA-224
// ---------------------------------------------------------------------------

/// SHA-224 output size in bytes.
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// SHA-224 hash context.
#[derive(Clone)]
pub struct Sha224 {
    /// Internal state (eight 32-bit words, truncated output).
    state: [u32; 8],
    buffer: Vec<u8>,
    digested: u64,
}

impl Sha224 {
    const INITIAL_STATE: [u32; 8] = [
        0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7,
        0xbefa4fa4,
    ];

    /// Create a new SHA-224 hash context.
    pub fn new() -> Self {
        Sha224 {
            state: Self::INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 32-byte compression state (big-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        Ok(Sha224 {
            state: state32(state)?,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`.
    pub fn get_padding(len: u64) -> Vec<u8> {
        padding64(len)
    }

    /// One-shot: compute the SHA-224 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; SHA224_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; SHA224_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }
}

impl Hasher for Sha224 {
    fn output_size(&self) -> usize {
        SHA224_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        64
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        self.digested += data.len() as u64;
        while self.buffer.len() >= 64 {
            compress32(&mut self.state, &self.buffer[..64]);
            self.buffer.drain(..64);
        }
    }

    fn digest(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.update(&Self::get_padding(copy.digested));
        debug_assert!(copy.buffer.is_empty());
        // the eighth word is dropped
        copy.state[..7].iter().flat_map(|v| v.to_be_bytes()).collect()
    }
}

// ---------------------------------------------------------------------------
// SHA-256
// ---------------------------------------------------------------------------

/// SHA-256 output size in bytes.
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 hash context.
#[derive(Clone)]
pub struct Sha256 {
    /// Internal state (eight 32-bit words).
    state: [u32; 8],
    buffer: Vec<u8>,
    digested: u64,
}

impl Sha256 {
    const INITIAL_STATE: [u32; 8] = [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ];

    /// Create a new SHA-256 hash context.
    pub fn new() -> Self {
        Sha256 {
            state: Self::INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 32-byte compression state (big-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        Ok(Sha256 {
            state: state32(state)?,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`.
    pub fn get_padding(len: u64) -> Vec<u8> {
        padding64(len)
    }

    /// One-shot: compute the SHA-256 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }
}

impl Hasher for Sha256 {
    fn output_size(&self) -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        64
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        self.digested += data.len() as u64;
        while self.buffer.len() >= 64 {
            compress32(&mut self.state, &self.buffer[..64]);
            self.buffer.drain(..64);
        }
    }

    fn digest(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.update(&Self::get_padding(copy.digested));
        debug_assert!(copy.buffer.is_empty());
        copy.state.iter().flat_map(|v| v.to_be_bytes()).collect()
    }
}

// ---------------------------------------------------------------------------
// SHA-384
// ---------------------------------------------------------------------------

/// SHA-384 output size in bytes.
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// SHA-384 hash context.
#[derive(Clone)]
pub struct Sha384 {
    /// Internal state (eight 64-bit words, truncated output).
    state: [u64; 8],
    buffer: Vec<u8>,
    digested: u64,
}

impl Sha384 {
    const INITIAL_STATE: [u64; 8] = [
        0xcbbb9d5dc1059ed8,
        0x629a292a367cd507,
        0x9159015a3070dd17,
        0x152fecd8f70e5939,
        0x67332667ffc00b31,
        0x8eb44a8768581511,
        0xdb0c2e0d64f98fa7,
        0x47b5481dbefa4fa4,
    ];

    /// Create a new SHA-384 hash context.
    pub fn new() -> Self {
        Sha384 {
            state: Self::INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 64-byte compression state (big-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        Ok(Sha384 {
            state: state64(state)?,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`.
    pub fn get_padding(len: u64) -> Vec<u8> {
        padding128(len)
    }

    /// One-shot: compute the SHA-384 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; SHA384_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; SHA384_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }
}

impl Hasher for Sha384 {
    fn output_size(&self) -> usize {
        SHA384_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        128
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        self.digested += data.len() as u64;
        while self.buffer.len() >= 128 {
            compress64(&mut self.state, &self.buffer[..128]);
            self.buffer.drain(..128);
        }
    }

    fn digest(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.update(&Self::get_padding(copy.digested));
        debug_assert!(copy.buffer.is_empty());
        // the last two words are dropped
        copy.state[..6].iter().flat_map(|v| v.to_be_bytes()).collect()
    }
}

// ---------------------------------------------------------------------------
// SHA-512
// ---------------------------------------------------------------------------

/// SHA-512 output size in bytes.
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// SHA-512 hash context.
#[derive(Clone)]
pub struct Sha512 {
    /// Internal state (eight 64-bit words).
    state: [u64; 8],
    buffer: Vec<u8>,
    digested: u64,
}

impl Sha512 {
    const INITIAL_STATE: [u64; 8] = [
        0x6a09e667f3bcc908,
        0xbb67ae8584caa73b,
        0x3c6ef372fe94f82b,
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
    ];

    /// Create a new SHA-512 hash context.
    pub fn new() -> Self {
        Sha512 {
            state: Self::INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 64-byte compression state (big-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        Ok(Sha512 {
            state: state64(state)?,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`.
    pub fn get_padding(len: u64) -> Vec<u8> {
        padding128(len)
    }

    /// One-shot: compute the SHA-512 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; SHA512_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; SHA512_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }
}

impl Hasher for Sha512 {
    fn output_size(&self) -> usize {
        SHA512_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        128
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        self.digested += data.len() as u64;
        while self.buffer.len() >= 128 {
            compress64(&mut self.state, &self.buffer[..128]);
            self.buffer.drain(..128);
        }
    }

    fn digest(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.update(&Self::get_padding(copy.digested));
        debug_assert!(copy.buffer.is_empty());
        copy.state.iter().flat_map(|v| v.to_be_bytes()).collect()
    }
}

fn state32(state: &[u8]) -> Result<[u32; 8], HashError> {
    if state.len() != 32 {
        return Err(HashError::InvalidStateLength {
            expected: 32,
            got: state.len(),
        });
    }
    let mut words = [0u32; 8];
    for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    Ok(words)
}

fn state64(state: &[u8]) -> Result<[u64; 8], HashError> {
    if state.len() != 64 {
        return Err(HashError::InvalidStateLength {
            expected: 64,
            got: state.len(),
        });
    }
    let mut words = [0u64; 8];
    for (word, chunk) in words.iter_mut().zip(state.chunks_exact(8)) {
        *word = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_sha224_empty() {
        assert_eq!(
            hex(&Sha224::hash(b"")),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }

    #[test]
    fn test_sha224_quick_fox() {
        assert_eq!(
            hex(&Sha224::hash(b"The quick brown fox jumps over the lazy dog")),
            "730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525"
        );
        assert_eq!(
            hex(&Sha224::hash(b"The quick brown fox jumps over the lazy dog.")),
            "619cba8e8e05826e9b8c519c0a5c68f4fb653e8a3d8aa04bb2c8cd4c"
        );
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex(&Sha256::hash(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            hex(&Sha256::hash(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_two_block_message() {
        assert_eq!(
            hex(&Sha256::hash(
                b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
            )),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_sha384_empty() {
        assert_eq!(
            hex(&Sha384::hash(b"")),
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
             274edebfe76f65fbd51ad2f14898b95b"
        );
    }

    #[test]
    fn test_sha384_abc() {
        assert_eq!(
            hex(&Sha384::hash(b"abc")),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn test_sha512_empty() {
        assert_eq!(
            hex(&Sha512::hash(b"")),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn test_sha512_abc() {
        assert_eq!(
            hex(&Sha512::hash(b"abc")),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_sha256_length_extension() {
        let secret = b"count=10&lat=37.351";
        let suffix = b"&waffle=liege";

        let mut full = secret.to_vec();
        full.extend_from_slice(&Sha256::get_padding(secret.len() as u64));
        let resumed_from = full.len() as u64;
        full.extend_from_slice(suffix);

        let mut forged = Sha256::with_state(&Sha256::hash(secret), resumed_from).unwrap();
        forged.update(suffix);
        assert_eq!(forged.digest(), Sha256::hash(&full).to_vec());
    }

    #[test]
    fn test_sha512_block_aligned_input() {
        let data = vec![0x7eu8; 256];
        let mut ctx = Sha512::new();
        ctx.update(&data);
        assert_eq!(ctx.digest(), Sha512::hash(&data).to_vec());
    }

    #[test]
    fn test_with_state_rejects_wrong_length() {
        assert!(Sha256::with_state(&[0u8; 31], 0).is_err());
        assert!(Sha512::with_state(&[0u8; 32], 0).is_err());
    }
}
