use cipher::InvalidLength;
use rand::rand_core;
use thiserror::Error;

/// Crate Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Cipher context initialisation failed at the cipher-library level.
    #[error("cipher initialisation failed: {0}")]
    Init(#[from] InvalidLength),

    /// Attempted to select a mode of operation outside the supported set.
    #[error("unsupported mode: {0:?} (expected \"ecb\" or \"cbc\")")]
    UnsupportedMode(String),

    /// Attempted to build an AES key from more than 16 bytes of material.
    #[error("invalid key length: {len} bytes (expected 16 bytes after zero padding)")]
    InvalidKeyLength { len: usize },

    /// Attempted to build an IV from anything other than 16 bytes.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// Provided ciphertext that did not match the expected format of the mode of operation.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Provided a bitmap shorter than its fixed 54-byte header.
    #[error("truncated bitmap: {len} bytes (54-byte header required)")]
    TruncatedImage { len: usize },

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
