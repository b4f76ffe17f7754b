use aes::Aes128;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use ecb::{Decryptor, Encryptor};

use crate::bmpcrypt::error::*;

type Aes128EcbEnc = Encryptor<Aes128>;
type Aes128EcbDec = Decryptor<Aes128>;

/// Core ECB encryption. Encrypts plaintext in independent 16-byte blocks with PKCS#7
/// padding, so the output is always one padding step longer than the input.
pub fn ecb_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let enc = Aes128EcbEnc::new_from_slice(key)?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Core ECB decryption. Assumes ciphertext was PKCS#7 padded.
pub fn ecb_decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    // ECB ciphertext must always be a nonzero multiple of 16 bytes.
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return Err(Error::InvalidCiphertext {
            len: ciphertext.len(),
            context: "ECB ciphertext not a nonzero multiple of 16 bytes",
        });
    }

    let dec = Aes128EcbDec::new_from_slice(key)?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::InvalidCiphertext {
            len: ciphertext.len(),
            context: "invalid PKCS#7 padding",
        })
}
