use std::str::FromStr;

use crate::bmpcrypt::error::Error;

mod cbc;
mod ecb;
mod util;

pub use self::cbc::{cbc_decrypt, cbc_encrypt};
pub use self::ecb::{ecb_decrypt, ecb_encrypt};

/// Supported modes of operation. The enum is closed: a selector outside this set
/// cannot be constructed, so an unknown mode can only appear as a parse failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Electronic codebook. Blocks are encrypted independently.
    Ecb,
    /// Cipher block chaining. Each block is XOR'd with the previous ciphertext
    /// block (or the IV) before encryption.
    Cbc,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            other => Err(Error::UnsupportedMode(other.to_string())),
        }
    }
}
