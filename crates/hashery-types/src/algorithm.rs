/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd128,
    Ripemd160,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

impl HashAlgId {
    /// Whether this algorithm is an extendable-output function, i.e. its
    /// output length is a caller-chosen parameter rather than fixed by the
    /// algorithm name.
    pub fn is_xof(self) -> bool {
        matches!(self, HashAlgId::Shake128 | HashAlgId::Shake256)
    }
}
