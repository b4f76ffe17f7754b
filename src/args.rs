use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a bitmap's pixel payload under both ECB and CBC
    Encrypt(EncryptArgs),

    /// Decrypt an encrypted bitmap back to the original image
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Input bitmap path.
    #[arg(short = 'i', long = "input", default_value = "pic_original.bmp")]
    pub input: PathBuf,

    /// Key bytes. Zero padded to 128 bits when shorter than 16 bytes.
    #[arg(short = 'k', long = "key", default_value = "26445549")]
    pub key: String,

    /// 16-byte initialisation vector. Feeds the CBC chain only.
    #[arg(long = "iv", default_value = "1234567898765432")]
    pub iv: String,

    /// Output path for the ECB-encrypted bitmap.
    #[arg(long = "ecb-output", default_value = "ecb.bmp")]
    pub ecb_output: PathBuf,

    /// Output path for the CBC-encrypted bitmap.
    #[arg(long = "cbc-output", default_value = "cbc.bmp")]
    pub cbc_output: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DecryptArgs {
    /// Mode of operation the input was encrypted under.
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Mode,

    /// Encrypted bitmap path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output bitmap path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key bytes. Zero padded to 128 bits when shorter than 16 bytes.
    #[arg(short = 'k', long = "key", default_value = "26445549")]
    pub key: String,

    /// 16-byte initialisation vector. Must match the one used to encrypt.
    #[arg(long = "iv", default_value = "1234567898765432")]
    pub iv: String,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    #[value(name = "ecb")]
    ModeECB,
    #[value(name = "cbc")]
    ModeCBC,
}
