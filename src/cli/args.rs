use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding a file
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file to encode
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Destination for the encoded stream
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Alphabet to encode with, given literally in symbol order
    #[arg(short = 'c', long, conflicts_with = "preset")]
    pub charset: Option<String>,

    /// Named alphabet from the preset table
    #[arg(short = 'p', long)]
    pub preset: Option<String>,

    /// Truncate the alphabet to its largest power-of-two prefix and pack
    /// bits instead of doing base conversion
    #[arg(long)]
    pub pow2: bool,

    /// Bytes per input block
    #[arg(short = 'b', long, default_value_t = 8)]
    pub block: u32,

    /// Omit the self-describing container header
    #[arg(long)]
    pub no_header: bool,
}

/// Arguments for decoding a file
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file to decode
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Destination for the decoded bytes
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Alphabet used at encode time; required only with --no-header
    #[arg(short = 'c', long, conflicts_with = "preset")]
    pub charset: Option<String>,

    /// Named alphabet from the preset table
    #[arg(short = 'p', long)]
    pub preset: Option<String>,

    /// The alphabet was power-of-two truncated at encode time
    #[arg(long)]
    pub pow2: bool,

    /// Bytes per block used at encode time
    #[arg(short = 'b', long, default_value_t = 8)]
    pub block: u32,

    /// The stream has no container header; charset and block must be
    /// supplied to match the encoder
    #[arg(long)]
    pub no_header: bool,
}
