mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::time::Instant;

use thiserror::Error;

use bmpcrypt::{Cipher, Iv, Key, Mode, bmp};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Crypt(#[from] bmpcrypt::Error),
}

fn main() {
    if let Err(e) = bmp_cli() {
        eprintln!("error: {e}");
    }
}

fn bmp_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt(enc) => {
            // read the original image
            let image = fs::read(&enc.input)?;

            let key = Key::zero_pad(enc.key.as_bytes())?;
            let iv = Iv::try_from_slice(enc.iv.as_bytes())?;
            let cipher = Cipher::new(&key);

            let start = Instant::now();

            // encrypt the payload once per mode, carrying the header over
            let ecb_image = bmp::encrypt_image(&cipher, Mode::Ecb, &iv, &image)?;
            let cbc_image = bmp::encrypt_image(&cipher, Mode::Cbc, &iv, &image)?;

            let duration = start.elapsed();

            fs::write(&enc.ecb_output, &ecb_image)?;
            fs::write(&enc.cbc_output, &cbc_image)?;

            println!("ECB BMP file: {}", enc.ecb_output.display());
            println!("CBC BMP file: {}", enc.cbc_output.display());
            println!(
                "Encrypted {} payload bytes in {} ms",
                image.len() - bmp::HEADER_LEN,
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(dec) => {
            let image = fs::read(&dec.input)?;

            let key = Key::zero_pad(dec.key.as_bytes())?;
            let iv = Iv::try_from_slice(dec.iv.as_bytes())?;
            let cipher = Cipher::new(&key);

            let mode = match dec.mode {
                args::Mode::ModeECB => Mode::Ecb,
                args::Mode::ModeCBC => Mode::Cbc,
            };

            let start = Instant::now();
            let original = bmp::decrypt_image(&cipher, mode, &iv, &image)?;
            let duration = start.elapsed();

            fs::write(&dec.output, &original)?;

            println!(
                "Decrypted {} bytes in {} ms",
                original.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}
