//! Defines the [`Key`] and [`Iv`] structs, which hold validated AES-128 key material.
//! Both can be randomly generated or constructed from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::bmpcrypt::error::{Error, Result};

/// Contains a valid 128-bit AES key. Can be instantiated with a random key, built from a
/// slice of exactly 16 bytes, or zero padded up from shorter key material.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> bmpcrypt::Result<()> {
/// use bmpcrypt::Key;
///
/// let exact = Key::try_from_slice(&[0x42; 16])?;
/// assert_eq!(exact.as_bytes(), &[0x42; 16]);
///
/// // Shorter material is explicitly padded with zero bytes up to 128 bits:
/// let padded = Key::zero_pad(b"26445549")?;
/// assert_eq!(&padded.as_bytes()[..8], b"26445549");
/// assert_eq!(&padded.as_bytes()[8..], &[0u8; 8]);
///
/// // Anything longer than 16 bytes is rejected, never truncated:
/// assert!(Key::zero_pad(&[0u8; 17]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; 16],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of exactly 16 bytes. Returns an
    /// InvalidKeyLength error for any other input length.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 16 {
            return Err(Error::InvalidKeyLength { len: bytes.len() });
        }
        Ok(Self {
            bytes: bytes.try_into().unwrap(), // length checked above, safe unwrap
        })
    }

    /// Builds a key from at most 16 bytes of material, padding the remainder with
    /// zero bytes. The padding rule is deliberate and fixed: short keys are extended
    /// with `0x00`, and keys longer than 16 bytes are rejected with an
    /// InvalidKeyLength error rather than truncated.
    pub fn zero_pad(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > 16 {
            return Err(Error::InvalidKeyLength { len: bytes.len() });
        }
        let mut k = [0u8; 16];
        k[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: k })
    }

    /// Returns a reference to the internal key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Contains a 16-byte initialisation vector, matching the AES block size.
/// Required by CBC; accepted but unused by ECB, which performs no chaining.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Iv {
    bytes: [u8; 16],
}

impl Iv {
    /// Generate a random 16-byte IV. Returns Error if OsRng fails.
    pub fn rand_iv() -> Result<Self> {
        let mut iv = [0u8; 16];
        OsRng.try_fill_bytes(&mut iv)?;
        Ok(Self { bytes: iv })
    }

    /// Attempts to build an IV from a slice of exactly 16 bytes. Returns an
    /// InvalidIvLength error for any other input length.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 16 {
            return Err(Error::InvalidIvLength { len: bytes.len() });
        }
        Ok(Self {
            bytes: bytes.try_into().unwrap(), // length checked above, safe unwrap
        })
    }

    /// An all-zero IV, for calls where the mode performs no chaining.
    pub fn zero() -> Self {
        Self { bytes: [0u8; 16] }
    }

    /// Returns a reference to the internal IV bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
