//! MD2 message digest algorithm.
//!
//! MD2 produces a 128-bit (16-byte) hash value. It is defined in RFC 1319
//! and, unlike the rest of the MD family, works byte-at-a-time over a
//! 48-byte mixing buffer plus a running 16-byte checksum.
//!
//! **Security warning**: MD2 is broken and obsolete. It survives here only
//! for very old certificate formats.

use crate::provider::Hasher;
use hashery_types::HashError;

/// MD2 output size in bytes.
pub const MD2_OUTPUT_SIZE: usize = 16;

/// MD2 block size in bytes.
pub const MD2_BLOCK_SIZE: usize = 16;

/// MD2 internal state size in bytes: 16 chaining bytes plus the 16-byte
/// checksum.
pub const MD2_STATE_SIZE: usize = 32;

/// Substitution table derived from the digits of pi.
#[rustfmt::skip]
const S: [u8; 256] = [
     41,  46,  67, 201, 162, 216, 124,   1,  61,  54,  84, 161, 236, 240,   6,  19,
     98, 167,   5, 243, 192, 199, 115, 140, 152, 147,  43, 217, 188,  76, 130, 202,
     30, 155,  87,  60, 253, 212, 224,  22, 103,  66, 111,  24, 138,  23, 229,  18,
    190,  78, 196, 214, 218, 158, 222,  73, 160, 251, 245, 142, 187,  47, 238, 122,
    169, 104, 121, 145,  21, 178,   7,  63, 148, 194,  16, 137,  11,  34,  95,  33,
    128, 127,  93, 154,  90, 144,  50,  39,  53,  62, 204, 231, 191, 247, 151,   3,
    255,  25,  48, 179,  72, 165, 181, 209, 215,  94, 146,  42, 172,  86, 170, 198,
     79, 184,  56, 210, 150, 164, 125, 182, 118, 252, 107, 226, 156, 116,   4, 241,
     69, 157, 112,  89, 100, 113, 135,  32, 134,  91, 207, 101, 230,  45, 168,   2,
     27,  96,  37, 173, 174, 176, 185, 246,  28,  70,  97, 105,  52,  64, 126,  15,
     85,  71, 163,  35, 221,  81, 175,  58, 195,  92, 249, 206, 186, 197, 234,  38,
     44,  83,  13, 110, 133,  40, 132,   9, 211, 223, 205, 244,  65, 129,  77,  82,
    106, 220,  55, 200, 108, 193, 171, 250,  36, 225, 123,   8,  12, 189, 177,  74,
    120, 136, 149, 139, 227,  99, 232, 109, 233, 203, 213, 254,  59,   0,  29,  57,
    242, 239, 183,  14, 102,  88, 208, 228, 166, 119, 114, 248, 235, 117,  75,  10,
     49,  68,  80, 180, 143, 237,  31,  26, 219, 153, 141,  51, 159,  17, 131,  20,
];

/// MD2 hash context.
#[derive(Clone)]
pub struct Md2 {
    /// 48-byte mixing buffer; the first 16 bytes are the chaining value.
    x: [u8; 48],
    checksum: [u8; 16],
    /// Last checksum byte written, feeds the next checksum update.
    l: u8,
    buffer: Vec<u8>,
}

impl Md2 {
    /// Create a new MD2 hash context.
    pub fn new() -> Self {
        Md2 {
            x: [0; 48],
            checksum: [0; 16],
            l: 0,
            buffer: Vec::new(),
        }
    }

    /// Resume a context from a 32-byte state: the 16 chaining bytes
    /// followed by the 16-byte checksum, as captured at a block boundary.
    pub fn with_state(state: &[u8]) -> Result<Self, HashError> {
        if state.len() != MD2_STATE_SIZE {
            return Err(HashError::InvalidStateLength {
                expected: MD2_STATE_SIZE,
                got: state.len(),
            });
        }
        let mut x = [0u8; 48];
        x[..16].copy_from_slice(&state[..16]);
        let mut checksum = [0u8; 16];
        checksum.copy_from_slice(&state[16..]);
        Ok(Md2 {
            x,
            checksum,
            // at a block boundary the last checksum byte written is the
            // final checksum slot
            l: checksum[15],
            buffer: Vec::new(),
        })
    }

    /// The padding bytes appended at input length `len`: `c` bytes of
    /// value `c`, where `c` fills up to the next block boundary (a whole
    /// block when already aligned).
    pub fn get_padding(len: u64) -> Vec<u8> {
        let c = (MD2_BLOCK_SIZE - (len as usize % MD2_BLOCK_SIZE)) as u8;
        vec![c; c as usize]
    }

    /// One-shot: compute the MD2 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; MD2_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; MD2_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }

    fn compress_buffered(&mut self) {
        while self.buffer.len() >= MD2_BLOCK_SIZE {
            for i in 0..MD2_BLOCK_SIZE {
                let c = self.buffer[i];
                self.x[i + 16] = c;
                self.x[i + 32] = c ^ self.x[i];
                self.checksum[i] ^= S[(c ^ self.l) as usize];
                self.l = self.checksum[i];
            }

            let mut t = 0u8;
            for j in 0..18u8 {
                for i in 0..48 {
                    self.x[i] ^= S[t as usize];
                    t = self.x[i];
                }
                t = t.wrapping_add(j);
            }
            self.buffer.drain(..MD2_BLOCK_SIZE);
        }
    }
}

impl Hasher for Md2 {
    fn output_size(&self) -> usize {
        MD2_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        MD2_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        self.compress_buffered();
    }

    fn digest(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.buffer
            .extend_from_slice(&Self::get_padding(copy.buffer.len() as u64));
        copy.compress_buffered();
        // the checksum snapshot is absorbed as one final block
        let sum = copy.checksum;
        copy.buffer.extend_from_slice(&sum);
        copy.compress_buffered();
        debug_assert!(copy.buffer.is_empty());
        copy.x[..MD2_OUTPUT_SIZE].to_vec()
    }
}
