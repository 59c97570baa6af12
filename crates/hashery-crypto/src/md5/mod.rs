//! MD5 message digest algorithm.
//!
//! MD5 produces a 128-bit (16-byte) hash value. It is defined in RFC 1321.
//!
//! **Security warning**: MD5 is cryptographically broken and should not be
//! used for security purposes. It is provided only for legacy compatibility
//! and non-security applications (e.g., checksums).

use crate::provider::Hasher;
use hashery_types::HashError;

/// MD5 output size in bytes.
pub const MD5_OUTPUT_SIZE: usize = 16;

/// MD5 block size in bytes.
pub const MD5_BLOCK_SIZE: usize = 64;

/// MD5 internal state size in bytes (for state resumption).
pub const MD5_STATE_SIZE: usize = 16;

/// Per-step left-rotation amounts.
#[rustfmt::skip]
const S: [u32; 64] = [
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    5,  9, 14, 20,  5,  9, 14, 20,  5,  9, 14, 20,  5,  9, 14, 20,
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// Per-step additive constants (binary digits of the sine function).
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// MD5 hash context.
#[derive(Clone)]
pub struct Md5 {
    /// Internal state (four 32-bit words: A, B, C, D).
    state: [u32; 4],
    /// Absorbed-but-not-yet-compressed input, always shorter than one block.
    buffer: Vec<u8>,
    /// Total bytes absorbed; drives the length field in the padding.
    digested: u64,
}

impl Md5 {
    /// Create a new MD5 hash context.
    pub fn new() -> Self {
        Md5 {
            state: INITIAL_STATE,
            buffer: Vec::new(),
            digested: 0,
        }
    }

    /// Resume a context from a 16-byte compression state (the digest of
    /// some block-aligned prefix) and the byte count it covers. Enables
    /// continuing a hash without the original input, e.g. for
    /// length-extension experiments.
    pub fn with_state(state: &[u8], digested: u64) -> Result<Self, HashError> {
        if state.len() != MD5_STATE_SIZE {
            return Err(HashError::InvalidStateLength {
                expected: MD5_STATE_SIZE,
                got: state.len(),
            });
        }
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Ok(Md5 {
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

    /// One-shot: compute the MD5 digest of `data`.
    pub fn hash(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
        let mut ctx = Self::new();
        ctx.update(data);
        let mut out = [0u8; MD5_OUTPUT_SIZE];
        out.copy_from_slice(&ctx.digest());
        out
    }

    fn compress_buffered(&mut self) {
        while self.buffer.len() >= MD5_BLOCK_SIZE {
            let mut m = [0u32; 16];
            for (word, chunk) in m.iter_mut().zip(self.buffer[..64].chunks_exact(4)) {
                *word = u32::from_le_bytes(chunk.try_into().unwrap());
            }

            let [mut a, mut b, mut c, mut d] = self.state;
            for i in 0..64 {
                let (f, g) = match i / 16 {
                    0 => (d ^ (b & (c ^ d)), i),
                    1 => (c ^ (d & (b ^ c)), (5 * i + 1) % 16),
                    2 => (b ^ c ^ d, (3 * i + 5) % 16),
                    _ => (c ^ (b | !d), (7 * i) % 16),
                };
                let f = f
                    .wrapping_add(a)
                    .wrapping_add(K[i])
                    .wrapping_add(m[g]);
                a = d;
                d = c;
                c = b;
                b = b.wrapping_add(f.rotate_left(S[i]));
            }

            self.state[0] = self.state[0].wrapping_add(a);
            self.state[1] = self.state[1].wrapping_add(b);
            self.state[2] = self.state[2].wrapping_add(c);
            self.state[3] = self.state[3].wrapping_add(d);
            self.buffer.drain(..MD5_BLOCK_SIZE);
        }
    }
}

impl Hasher for Md5 {
    fn output_size(&self) -> usize {
        MD5_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        MD5_BLOCK_SIZE
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
    fn test_md5_empty() {
        assert_eq!(hex(&Md5::hash(b"")), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_abc() {
        assert_eq!(hex(&Md5::hash(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_message_digest() {
        assert_eq!(
            hex(&Md5::hash(b"message digest")),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn test_md5_quick_fox() {
        assert_eq!(
            hex(&Md5::hash(b"The quick brown fox jumps over the lazy dog")),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn test_md5_streaming_matches_one_shot() {
        let data = vec![0x37u8; 300];
        let mut ctx = Md5::new();
        ctx.update(&data[..1]);
        ctx.update(&data[1..64]);
        ctx.update(&data[64..]);
        assert_eq!(ctx.digest(), Md5::hash(&data).to_vec());
    }

    #[test]
    fn test_md5_length_extension() {
        // Resuming from a digest-as-state continues the hash as if the
        // original message plus its padding had been absorbed.
        let secret = b"secret";
        let suffix = b"&admin=true";

        let mut full = secret.to_vec();
        full.extend_from_slice(&Md5::get_padding(secret.len() as u64));
        let resumed_from = full.len() as u64;
        full.extend_from_slice(suffix);

        let mut forged = Md5::with_state(&Md5::hash(secret), resumed_from).unwrap();
        forged.update(suffix);
        assert_eq!(forged.digest(), Md5::hash(&full).to_vec());
    }

    #[test]
    fn test_md5_with_state_rejects_wrong_length() {
        assert!(matches!(
            Md5::with_state(&[0u8; 15], 0),
            Err(HashError::InvalidStateLength {
                expected: 16,
                got: 15
            })
        ));
    }
}
