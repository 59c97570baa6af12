//! MD4 message digest algorithm.
//!
//! MD4 produces a 128-bit (16-byte) hash value. It is defined in RFC 1186.
//!
//! **Security warning**: MD4 is thoroughly broken (collisions are found by
//! hand). It is provided only for legacy formats that still depend on it.

use crate::provider::Hasher;
use hashery_types::HashError;

/// MD4 output size in bytes.
pub const MD4_OUTPUT_SIZE: usize = 16;

/// MD4 block size in bytes.
pub const MD4_BLOCK_SIZE: usize = 64;

/// MD4 internal state size in bytes (for state resumption).
pub const MD4_STATE_SIZE: usize = 16;

/// Per-step left-rotation amounts.
#[rustfmt::skip]
const S: [u32; 48] = [
    3,  7, 11, 19,  3,  7, 11, 19,  3,  7, 11, 19,  3,  7, 11, 19,
    3,  5,  9, 13,  3,  5,  9, 13,  3,  5,  9, 13,  3,  5,  9, 13,
    3,  9, 11, 15,  3,  9, 11, 15,  3,  9, 11, 15,  3,  9, 11, 15,
];

/// Per-step message word selection.
#[rustfmt::skip]
const G: [usize; 48] = [
    0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
    0,  4,  8, 12,  1,  5,  9, 13,  2,  6, 10, 14,  3,  7, 11, 15,
    0,  8,  4, 12,  2, 10,  6, 14,  1,  9,  5, 13,  3, 11,  7, 15,
];

/// Per-round additive constants (0, sqrt(2), sqrt(3)).
const ROUND_K: [u32; 3] = [0, 0x5a827999, 0x6ed9eba1];

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// MD4 hash context.
#[derive(Clone)]
pub struct Md4 {
    state: [u32; 4],
    buffer: Vec<u8>,
    digested: u64,
}

impl Md4 {
    /// Create a new MD4 hash context.
    pub fn new() -> Self {
        Md4 {
            state: INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 16-byte compression state and the byte
    /// count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        if state.len() != MD4_STATE_SIZE {
            return Err(HashError::InvalidStateLength {
                expected: MD4_STATE_SIZE,
                got: state.len(),
            });
        }
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Ok(Md4 {
            state: words,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`: `0x80`, zero fill
    /// to 8 bytes short of a block boundary, then the bit length as a
    /// little-endian u64.
    pub fn get_padding(len: u64) -> Vec<u8> {
        let mut padding = vec![0x80u8];
        padding.resize(1 + (55u64.wrapping_sub(len) % 64) as usize, 0);
        padding.extend_from_slice(&(len.wrapping_mul(8)).to_le_bytes());
        padding
    }

    /// One-shot: compute the MD4 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; MD4_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; MD4_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }

    fn compress_buffered(&mut self) {
        while self.buffer.len() >= MD4_BLOCK_SIZE {
            let mut m = [0u32; 16];
            for (word, chunk) in m.iter_mut().zip(self.buffer[..64].chunks_exact(4)) {
                *word = u32::from_le_bytes(chunk.try_into().unwrap());
            }

            let [mut a, mut b, mut c, mut d] = self.state;
            for i in 0..48 {
                let round = i / 16;
                let f = match round {
                    0 => d ^ (b & (c ^ d)),
                    1 => (b & c) | (c & d) | (b & d),
                    _ => b ^ c ^ d,
                };
                let t = f
                    .wrapping_add(a)
                    .wrapping_add(ROUND_K[round])
                    .wrapping_add(m[G[i]])
                    .rotate_left(S[i]);
                a = d;
                d = c;
                c = b;
                b = t;
            }

            self.state[0] = self.state[0].wrapping_add(a);
            self.state[1] = self.state[1].wrapping_add(b);
            self.state[2] = self.state[2].wrapping_add(c);
            self.state[3] = self.state[3].wrapping_add(d);
            self.buffer.drain(..MD4_BLOCK_SIZE);
        }
    }
}

impl Hasher for Md4 {
    fn output_size(&self) -> usize {
        MD4_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        MD4_BLOCK_SIZE
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
        copy.state.iter().flat_map(|v| v.to_le_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_md4_empty() {
        assert_eq!(hex(&Md4::hash(b"")), "31d6cfe0d16ae931b73c59d7e0c089c0");
    }

    #[test]
    fn test_md4_a() {
        assert_eq!(hex(&Md4::hash(b"a")), "bde52cb31de33e46245e05fbdbd6fb24");
    }

    #[test]
    fn test_md4_abc() {
        assert_eq!(hex(&Md4::hash(b"abc")), "a448017aaf21d8525fc10ae87aa6729d");
    }

    #[test]
    fn test_md4_message_digest() {
        assert_eq!(
            hex(&Md4::hash(b"message digest")),
            "d9130a8164549fe818874806e1c7014b"
        );
    }

    #[test]
    fn test_md4_block_aligned_input() {
        let data = vec![0x55u8; 128];
        let mut ctx = Md4::new();
        ctx.update(&data);
        assert_eq!(ctx.digest(), Md4::hash(&data).to_vec());
    }
}
