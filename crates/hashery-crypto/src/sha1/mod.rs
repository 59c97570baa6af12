//! SHA-1 hash algorithm.
//!
//! SHA-1 produces a 160-bit (20-byte) hash value, as defined in FIPS 180-4.
//!
//! **Security warning**: practical collisions for SHA-1 are public. It is
//! provided for legacy protocol compatibility only.

use crate::provider::Hasher;
use hashery_types::HashError;

/// SHA-1 output size in bytes.
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// SHA-1 block size in bytes.
pub const SHA1_BLOCK_SIZE: usize = 64;

/// SHA-1 internal state size in bytes (for state resumption).
pub const SHA1_STATE_SIZE: usize = 20;

/// Per-quarter additive constants.
const ROUND_K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 hash context.
#[derive(Clone)]
pub struct Sha1 {
    /// Internal state (five 32-bit words).
    state: [u32; 5],
    buffer: Vec<u8>,
    digested: u64,
}

impl Sha1 {
    /// Create a new SHA-1 hash context.
    pub fn new() -> Self {
        Sha1 {
            state: INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 20-byte compression state (big-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        if state.len() != SHA1_STATE_SIZE {
            return Err(HashError::InvalidStateLength {
                expected: SHA1_STATE_SIZE,
                got: state.len(),
            });
        }
        let mut words = [0u32; 5];
        for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
            *word = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        Ok(Sha1 {
            state: words,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`: `0x80`, zero fill
    /// to 8 bytes short of a block boundary, then the bit length as a
    /// big-endian u64.
    pub fn get_padding(len: u64) -> Vec<u8> {
        let mut padding = vec![0x80u8];
        padding.resize(1 + (55u64.wrapping_sub(len) % 64) as usize, 0);
        padding.extend_from_slice(&(len.wrapping_mul(8)).to_be_bytes());
        padding
    }

    /// One-shot: compute the SHA-1 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; SHA1_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }

    fn compress_buffered(&mut self) {
        while self.buffer.len() >= SHA1_BLOCK_SIZE {
            let mut w = [0u32; 80];
            for (word, chunk) in w.iter_mut().zip(self.buffer[..64].chunks_exact(4)) {
                *word = u32::from_be_bytes(chunk.try_into().unwrap());
            }
            for i in 16..80 {
                w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
            }

            let [mut a, mut b, mut c, mut d, mut e] = self.state;
            for (i, &word) in w.iter().enumerate() {
                let f = match i / 20 {
                    0 => (b & c) | (!b & d),
                    1 => b ^ c ^ d,
                    2 => (b & c) | (b & d) | (c & d),
                    _ => b ^ c ^ d,
                };
                let t = a
                    .rotate_left(5)
                    .wrapping_add(f)
                    .wrapping_add(e)
                    .wrapping_add(ROUND_K[i / 20])
                    .wrapping_add(word);
                e = d;
                d = c;
                c = b.rotate_left(30);
                b = a;
                a = t;
            }

            self.state[0] = self.state[0].wrapping_add(a);
            self.state[1] = self.state[1].wrapping_add(b);
            self.state[2] = self.state[2].wrapping_add(c);
            self.state[3] = self.state[3].wrapping_add(d);
            self.state[4] = self.state[4].wrapping_add(e);
            self.buffer.drain(..SHA1_BLOCK_SIZE);
        }
    }
}

impl Hasher for Sha1 {
    fn output_size(&self) -> usize {
        SHA1_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        SHA1_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        self.digested += data.len() as u64;
        self.compress_buffered();
    }

    fn digest(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.buffer.extend_from_slice(&Self::get_padding(copy.digested));
        copy.compress_buffered();
        debug_assert!(copy.buffer.is_empty());
        copy.state.iter().flat_map(|v| v.to_be_bytes()).collect()
    }
}
