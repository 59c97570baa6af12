/// Digest construction errors.
///
/// Every variant is raised synchronously at construction time; once an
/// instance exists, all operations on it are infallible.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Invalid construction parameters (misaligned rate/capacity/output,
    /// permutation width outside the supported set, malformed resume blob).
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A resume state byte string does not match the algorithm's fixed
    /// state size.
    #[error("invalid state length: expected {expected}, got {got}")]
    InvalidStateLength { expected: usize, got: usize },

    /// The requested algorithm is not compiled into this build.
    #[error("algorithm not supported")]
    NotSupported,
}
