//! RIPEMD-128 and RIPEMD-160 hash algorithms.
//!
//! Both run two independent compression lines over each block and fold
//! them back into the chaining state. RIPEMD-160 remains unbroken but is
//! rarely a good choice for new designs; RIPEMD-128 offers too little
//! collision resistance for modern use.

use crate::provider::Hasher;
use hashery_types::HashError;

/// RIPEMD-128 output size in bytes.
pub const RIPEMD128_OUTPUT_SIZE: usize = 16;

/// RIPEMD-160 output size in bytes.
pub const RIPEMD160_OUTPUT_SIZE: usize = 20;

/// Block size in bytes, common to both variants.
pub const RIPEMD_BLOCK_SIZE: usize = 64;

/// Message word selection, left line. RIPEMD-128 uses the first four
/// rounds of each table.
#[rustfmt::skip]
const SELECT_LEFT: [usize; 80] = [
     0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
     7,  4, 13,  1, 10,  6, 15,  3, 12,  0,  9,  5,  2, 14, 11,  8,
     3, 10, 14,  4,  9, 15,  8,  1,  2,  7,  0,  6, 13, 11,  5, 12,
     1,  9, 11, 10,  0,  8, 12,  4, 13,  3,  7, 15, 14,  5,  6,  2,
     4,  0,  5,  9,  7, 12,  2, 10, 14,  1,  3,  8, 11,  6, 15, 13,
];

/// Message word selection, right line.
#[rustfmt::skip]
const SELECT_RIGHT: [usize; 80] = [
     5, 14,  7,  0,  9,  2, 11,  4, 13,  6, 15,  8,  1, 10,  3, 12,
     6, 11,  3,  7,  0, 13,  5, 10, 14, 15,  8, 12,  4,  9,  1,  2,
    15,  5,  1,  3,  7, 14,  6,  9, 11,  8, 12,  2, 10,  0,  4, 13,
     8,  6,  4,  1,  3, 11, 15,  0,  5, 12,  2, 13,  9,  7, 10, 14,
    12, 15, 10,  4,  1,  5,  8,  7,  6,  2, 13, 14,  0,  3,  9, 11,
];

/// Left-rotation amounts, left line.
#[rustfmt::skip]
const SHIFT_LEFT: [u32; 80] = [
    11, 14, 15, 12,  5,  8,  7,  9, 11, 13, 14, 15,  6,  7,  9,  8,
     7,  6,  8, 13, 11,  9,  7, 15,  7, 12, 15,  9, 11,  7, 13, 12,
    11, 13,  6,  7, 14,  9, 13, 15, 14,  8, 13,  6,  5, 12,  7,  5,
    11, 12, 14, 15, 14, 15,  9,  8,  9, 14,  5,  6,  8,  6,  5, 12,
     9, 15,  5, 11,  6,  8, 13, 12,  5, 12, 13, 14, 11,  8,  5,  6,
];

/// Left-rotation amounts, right line.
#[rustfmt::skip]
const SHIFT_RIGHT: [u32; 80] = [
     8,  9,  9, 11, 13, 15, 15,  5,  7,  7,  8, 11, 14, 14, 12,  6,
     9, 13, 15,  7, 12,  8,  9, 11,  7,  7, 12,  7,  6, 15, 13, 11,
     9,  7, 15, 11,  8,  6,  6, 14, 12, 13,  5, 14, 13, 13,  7,  5,
    15,  5,  8, 11, 14, 14,  6, 14,  6,  9, 12,  9, 12,  5, 15,  8,
     8,  5, 12,  9, 12,  5, 14,  6,  8, 13,  6,  5, 15, 13, 11, 11,
];

const K_LEFT: [u32; 5] = [0, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const K_RIGHT: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0];

// RIPEMD-128 drops the fifth round and zeroes the final right-line constant.
const K_LEFT_128: [u32; 4] = [0, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc];
const K_RIGHT_128: [u32; 4] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0];

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Shared MD-style padding: `0x80`, zero fill to 8 bytes short of a block
/// boundary, then the bit length as a little-endian u64.
fn md_padding(len: u64) -> Vec<u8> {
    let mut padding = vec![0x80u8];
    padding.resize(1 + (55u64.wrapping_sub(len) % 64) as usize, 0);
    padding.extend_from_slice(&(len.wrapping_mul(8)).to_le_bytes());
    padding
}

fn block_words(block: &[u8]) -> [u32; 16] {
    let mut m = [0u32; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().unwrap());
    }
    m
}

// ---------------------------------------------------------------------------
// RIPEMD-128
// ---------------------------------------------------------------------------

/// RIPEMD-128 hash context.
#[derive(Clone)]
pub struct Ripemd128 {
    state: [u32; 4],
    buffer: Vec<u8>,
    digested: u64,
}

impl Ripemd128 {
    /// Create a new RIPEMD-128 hash context.
    pub fn new() -> Self {
        Ripemd128 {
            state: [INITIAL_STATE[0], INITIAL_STATE[1], INITIAL_STATE[2], INITIAL_STATE[3]],
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 16-byte compression state (little-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        if state.len() != RIPEMD128_OUTPUT_SIZE {
            return Err(HashError::InvalidStateLength {
                expected: RIPEMD128_OUTPUT_SIZE,
                got: state.len(),
            });
        }
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Ok(Ripemd128 {
            state: words,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`.
    pub fn get_padding(len: u64) -> Vec<u8> {
        md_padding(len)
    }

    /// One-shot: compute the RIPEMD-128 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; RIPEMD128_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; RIPEMD128_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }

    fn compress_buffered(&mut self) {
        while self.buffer.len() >= RIPEMD_BLOCK_SIZE {
            let m = block_words(&self.buffer[..RIPEMD_BLOCK_SIZE]);

            let [mut a, mut b, mut c, mut d] = self.state;
            for i in 0..64 {
                let f = match i / 16 {
                    0 => b ^ c ^ d,
                    1 => (b & c) | (!b & d),
                    2 => (b | !c) ^ d,
                    _ => (b & d) | (c & !d),
                };
                let t = a
                    .wrapping_add(f)
                    .wrapping_add(m[SELECT_LEFT[i]])
                    .wrapping_add(K_LEFT_128[i / 16])
                    .rotate_left(SHIFT_LEFT[i]);
                a = d;
                d = c;
                c = b;
                b = t;
            }

            let [mut aa, mut bb, mut cc, mut dd] = self.state;
            for i in 0..64 {
                let f = match i / 16 {
                    0 => (bb & dd) | (cc & !dd),
                    1 => (bb | !cc) ^ dd,
                    2 => (bb & cc) | (!bb & dd),
                    _ => bb ^ cc ^ dd,
                };
                let t = aa
                    .wrapping_add(f)
                    .wrapping_add(m[SELECT_RIGHT[i]])
                    .wrapping_add(K_RIGHT_128[i / 16])
                    .rotate_left(SHIFT_RIGHT[i]);
                aa = dd;
                dd = cc;
                cc = bb;
                bb = t;
            }

            let t = self.state[1].wrapping_add(c).wrapping_add(dd);
            self.state[1] = self.state[2].wrapping_add(d).wrapping_add(aa);
            self.state[2] = self.state[3].wrapping_add(a).wrapping_add(bb);
            self.state[3] = self.state[0].wrapping_add(b).wrapping_add(cc);
            self.state[0] = t;
            self.buffer.drain(..RIPEMD_BLOCK_SIZE);
        }
    }
}

impl Hasher for Ripemd128 {
    fn output_size(&self) -> usize {
        RIPEMD128_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        RIPEMD_BLOCK_SIZE
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

// ---------------------------------------------------------------------------
// RIPEMD-160
// ---------------------------------------------------------------------------

/// RIPEMD-160 hash context.
#[derive(Clone)]
pub struct Ripemd160 {
    state: [u32; 5],
    buffer: Vec<u8>,
    digested: u64,
}

impl Ripemd160 {
    /// Create a new RIPEMD-160 hash context.
    pub fn new() -> Self {
        Ripemd160 {
            state: INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 20-byte compression state (little-endian
    /// words) and the byte count it covers.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        if state.len() != RIPEMD160_OUTPUT_SIZE {
            return Err(HashError::InvalidStateLength {
                expected: RIPEMD160_OUTPUT_SIZE,
                got: state.len(),
            });
        }
        let mut words = [0u32; 5];
        for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Ok(Ripemd160 {
            state: words,
            buffer: Vec::new(),
            digested,
        })
    }

    /// The padding bytes appended at input length `len`.
    pub fn get_padding(len: u64) -> Vec<u8> {
        md_padding(len)
    }

    /// One-shot: compute the RIPEMD-160 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; RIPEMD160_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; RIPEMD160_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }

    fn compress_buffered(&mut self) {
        while self.buffer.len() >= RIPEMD_BLOCK_SIZE {
            let m = block_words(&self.buffer[..RIPEMD_BLOCK_SIZE]);

            let [mut a, mut b, mut c, mut d, mut e] = self.state;
            for i in 0..80 {
                let f = match i / 16 {
                    0 => b ^ c ^ d,
                    1 => (b & c) | (!b & d),
                    2 => (b | !c) ^ d,
                    3 => (b & d) | (c & !d),
                    _ => b ^ (c | !d),
                };
                let t = a
                    .wrapping_add(f)
                    .wrapping_add(m[SELECT_LEFT[i]])
                    .wrapping_add(K_LEFT[i / 16])
                    .rotate_left(SHIFT_LEFT[i])
                    .wrapping_add(e);
                a = e;
                e = d;
                d = c.rotate_left(10);
                c = b;
                b = t;
            }

            let [mut aa, mut bb, mut cc, mut dd, mut ee] = self.state;
            for i in 0..80 {
                let f = match i / 16 {
                    0 => bb ^ (cc | !dd),
                    1 => (bb & dd) | (cc & !dd),
                    2 => (bb | !cc) ^ dd,
                    3 => (bb & cc) | (!bb & dd),
                    _ => bb ^ cc ^ dd,
                };
                let t = aa
                    .wrapping_add(f)
                    .wrapping_add(m[SELECT_RIGHT[i]])
                    .wrapping_add(K_RIGHT[i / 16])
                    .rotate_left(SHIFT_RIGHT[i])
                    .wrapping_add(ee);
                aa = ee;
                ee = dd;
                dd = cc.rotate_left(10);
                cc = bb;
                bb = t;
            }

            let t = self.state[1].wrapping_add(c).wrapping_add(dd);
            self.state[1] = self.state[2].wrapping_add(d).wrapping_add(ee);
            self.state[2] = self.state[3].wrapping_add(e).wrapping_add(aa);
            self.state[3] = self.state[4].wrapping_add(a).wrapping_add(bb);
            self.state[4] = self.state[0].wrapping_add(b).wrapping_add(cc);
            self.state[0] = t;
            self.buffer.drain(..RIPEMD_BLOCK_SIZE);
        }
    }
}

impl Hasher for Ripemd160 {
    fn output_size(&self) -> usize {
        RIPEMD160_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        RIPEMD_BLOCK_SIZE
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
