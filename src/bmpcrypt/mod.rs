pub mod bmp;
mod cipher;
mod error;
mod key;
mod modes;

pub use self::cipher::Cipher;
pub use self::error::{Error, Result};
pub use self::key::{Iv, Key};
pub use self::modes::Mode;
