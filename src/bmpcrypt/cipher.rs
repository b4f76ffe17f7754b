use crate::bmpcrypt::error::Result;
use crate::bmpcrypt::key::{Iv, Key};
use crate::bmpcrypt::modes::*;

/// Provides AES-128 encryption and decryption in modes [ECB](crate::Cipher::encrypt_ecb)
/// and [CBC](crate::Cipher::encrypt_cbc), with PKCS#7 padding.
/// Instantiated with an AES [Key] and borrowed read-only per call; each call owns its
/// cipher context and its output buffer, so one instance may serve concurrent calls.
pub struct Cipher {
    key: Key,
}

impl Cipher {
    /// Stores the provided key in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self { key: key.clone() }
    }

    /// Encrypts under the given mode selector.
    ///
    /// The IV feeds the chain in [CBC](Mode::Cbc) and is accepted but unused by
    /// [ECB](Mode::Ecb). Output length is always the plaintext length rounded up to
    /// the next multiple of 16: a full padding block is appended when the input is
    /// already block aligned, and empty input yields exactly one padding block.
    pub fn encrypt(&self, mode: Mode, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => self.encrypt_ecb(plaintext),
            Mode::Cbc => self.encrypt_cbc(iv, plaintext),
        }
    }

    /// Decrypts under the given mode selector. Counterpart of [encrypt](Cipher::encrypt).
    pub fn decrypt(&self, mode: Mode, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => self.decrypt_ecb(ciphertext),
            Mode::Cbc => self.decrypt_cbc(iv, ciphertext),
        }
    }

    /// **Electronic codebook** encryption.
    ///
    /// Encrypts each 16-byte block entirely independently with the same key, so equal
    /// plaintext blocks produce equal ciphertext blocks wherever they appear.
    /// **Vulnerable to pattern emergence in the ciphertext.** Encrypting an image
    /// this way leaves its outlines visible, which is the point of the demo.
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        ecb_encrypt(plaintext, self.key.as_bytes())
    }

    /// **Electronic codebook** decryption.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_decrypt(ciphertext, self.key.as_bytes())
    }

    /// **Cipher block chaining** encryption.
    ///
    /// XORs each plaintext block with the previous ciphertext block (the IV for the
    /// first block) before encrypting, so equal plaintext blocks diverge unless their
    /// preceding context also matches.
    pub fn encrypt_cbc(&self, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        cbc_encrypt(plaintext, self.key.as_bytes(), iv.as_bytes())
    }

    /// **Cipher block chaining** decryption.
    pub fn decrypt_cbc(&self, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        cbc_decrypt(ciphertext, self.key.as_bytes(), iv.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_cipher() -> Cipher {
        let key = Key::try_from_slice(&[0x42; 16]).expect("valid key length");
        Cipher::new(&key)
    }

    fn fixed_iv() -> Iv {
        Iv::try_from_slice(&[0x24; 16]).expect("valid IV length")
    }

    #[test]
    fn ciphertext_length_invariant() -> Result<()> {
        let cipher = fixed_cipher();
        let iv = fixed_iv();

        for len in [0usize, 1, 15, 16, 17, 1024] {
            let plaintext = vec![0xA5u8; len];
            for mode in [Mode::Ecb, Mode::Cbc] {
                let ciphertext = cipher.encrypt(mode, &iv, &plaintext)?;
                assert_eq!(ciphertext.len(), len + (16 - len % 16));
                assert!(ciphertext.len() > len);
                assert_eq!(ciphertext.len() % 16, 0);
            }
        }
        Ok(())
    }

    #[test]
    fn empty_input_yields_one_padding_block() -> Result<()> {
        let cipher = fixed_cipher();
        let iv = fixed_iv();

        assert_eq!(cipher.encrypt(Mode::Ecb, &iv, &[])?.len(), 16);
        assert_eq!(cipher.encrypt(Mode::Cbc, &iv, &[])?.len(), 16);
        Ok(())
    }

    #[test]
    fn encryption_is_deterministic() -> Result<()> {
        let cipher = fixed_cipher();
        let iv = fixed_iv();
        let plaintext = b"the same bytes in, the same bytes out";

        for mode in [Mode::Ecb, Mode::Cbc] {
            let first = cipher.encrypt(mode, &iv, plaintext)?;
            let second = cipher.encrypt(mode, &iv, plaintext)?;
            assert_eq!(first, second);
        }
        Ok(())
    }

    #[test]
    fn ecb_equal_blocks_stay_equal() -> Result<()> {
        let cipher = fixed_cipher();
        let ciphertext = cipher.encrypt_ecb(&[0u8; 32])?;

        assert_eq!(ciphertext[..16], ciphertext[16..32]);
        Ok(())
    }

    #[test]
    fn cbc_equal_blocks_diverge() -> Result<()> {
        let cipher = fixed_cipher();
        let ciphertext = cipher.encrypt_cbc(&fixed_iv(), &[0u8; 32])?;

        assert_ne!(ciphertext[..16], ciphertext[16..32]);
        Ok(())
    }

    #[test]
    fn ecb_ignores_iv() -> Result<()> {
        let cipher = fixed_cipher();
        let plaintext = b"chainless mode";

        let with_iv = cipher.encrypt(Mode::Ecb, &fixed_iv(), plaintext)?;
        let with_zero_iv = cipher.encrypt(Mode::Ecb, &Iv::zero(), plaintext)?;
        assert_eq!(with_iv, with_zero_iv);
        Ok(())
    }

    #[test]
    fn round_trips_with_random_key() -> Result<()> {
        let key = Key::rand_key()?;
        let iv = Iv::rand_iv()?;
        let cipher = Cipher::new(&key);

        for len in [0usize, 1, 15, 16, 17, 1024] {
            let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
            for mode in [Mode::Ecb, Mode::Cbc] {
                let ciphertext = cipher.encrypt(mode, &iv, &plaintext)?;
                let decrypted = cipher.decrypt(mode, &iv, &ciphertext)?;
                assert_eq!(plaintext, decrypted);
            }
        }
        Ok(())
    }

    #[test]
    fn short_key_matches_its_padded_form() -> Result<()> {
        let short = Cipher::new(&Key::zero_pad(b"26445549")?);

        let mut padded_bytes = [0u8; 16];
        padded_bytes[..8].copy_from_slice(b"26445549");
        let padded = Cipher::new(&Key::try_from_slice(&padded_bytes)?);

        let plaintext = b"pixels";
        assert_eq!(short.encrypt_ecb(plaintext)?, padded.encrypt_ecb(plaintext)?);
        Ok(())
    }
}
