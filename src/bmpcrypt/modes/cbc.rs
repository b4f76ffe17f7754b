use aes::Aes128;
use cbc::{Decryptor, Encryptor};
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::bmpcrypt::error::*;

type Aes128CbcEnc = Encryptor<Aes128>;
type Aes128CbcDec = Decryptor<Aes128>;

/// Core CBC encryption. Each 16-byte block is XOR'd with the previous ciphertext
/// block (the IV for the first block) before encryption, with PKCS#7 padding.
pub fn cbc_encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let enc = Aes128CbcEnc::new_from_slices(key, iv)?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Core CBC decryption. Assumes ciphertext was PKCS#7 padded.
pub fn cbc_decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    // CBC ciphertext must always be a nonzero multiple of 16 bytes.
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return Err(Error::InvalidCiphertext {
            len: ciphertext.len(),
            context: "CBC ciphertext not a nonzero multiple of 16 bytes",
        });
    }

    let dec = Aes128CbcDec::new_from_slices(key, iv)?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::InvalidCiphertext {
            len: ciphertext.len(),
            context: "invalid PKCS#7 padding",
        })
}
