//! Bitmap container handling. A BMP file is treated as an opaque 54-byte header
//! followed by the raw pixel payload; the header is never inspected or mutated,
//! only carried verbatim so encrypted output remains a loadable bitmap.

use crate::bmpcrypt::cipher::Cipher;
use crate::bmpcrypt::error::{Error, Result};
use crate::bmpcrypt::key::Iv;
use crate::bmpcrypt::modes::Mode;

/// Fixed length of the BMP header (file header + info header).
pub const HEADER_LEN: usize = 54;

/// Splits a bitmap into its 54-byte header and pixel payload. The payload may be
/// empty. Images shorter than the header are rejected.
pub fn split_header(image: &[u8]) -> Result<(&[u8], &[u8])> {
    if image.len() < HEADER_LEN {
        return Err(Error::TruncatedImage { len: image.len() });
    }
    Ok(image.split_at(HEADER_LEN))
}

/// Reattaches a header to a (typically transformed) payload.
pub fn assemble(header: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut image = Vec::with_capacity(header.len() + payload.len());
    image.extend_from_slice(header);
    image.extend_from_slice(payload);
    image
}

/// Encrypts a bitmap's pixel payload under the given mode, carrying the header
/// over unencrypted. The result is a valid bitmap container whose payload is 1 to
/// 16 bytes longer than the original due to padding.
pub fn encrypt_image(cipher: &Cipher, mode: Mode, iv: &Iv, image: &[u8]) -> Result<Vec<u8>> {
    let (header, payload) = split_header(image)?;
    let ciphertext = cipher.encrypt(mode, iv, payload)?;
    Ok(assemble(header, &ciphertext))
}

/// Decrypts a bitmap produced by [encrypt_image], recovering the original image.
pub fn decrypt_image(cipher: &Cipher, mode: Mode, iv: &Iv, image: &[u8]) -> Result<Vec<u8>> {
    let (header, ciphertext) = split_header(image)?;
    let payload = cipher.decrypt(mode, iv, ciphertext)?;
    Ok(assemble(header, &payload))
}
