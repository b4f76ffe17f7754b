mod bmpcrypt;

pub use bmpcrypt::bmp;
pub use bmpcrypt::{Cipher, Error, Iv, Key, Mode, Result};
