use std::fmt;
use std::io;
use std::path::PathBuf;

/// A convenience `Result` alias using the crate's error type.
pub type Result<T> = std::result::Result<T, FlxbError>;

/// Errors that can occur while building a charset, parsing a container
/// header, or streaming blocks through the codec.
#[derive(Debug)]
pub enum FlxbError {
    /// Invalid command-line usage or a malformed charset.
    Config(String),
    /// A named input or output file could not be opened.
    File { path: PathBuf, source: io::Error },
    /// An I/O read or write failed mid-stream.
    Io(io::Error),
    /// The header or encoded stream is structurally invalid.
    Format(String),
    /// A byte in the encoded stream is not part of the charset.
    InvalidSymbol { symbol: u8, offset: u64 },
}

impl FlxbError {
    /// Create a `Config` error from anything stringly.
    pub fn config(msg: impl Into<String>) -> Self {
        FlxbError::Config(msg.into())
    }

    /// Create a `Format` error from anything stringly.
    pub fn format(msg: impl Into<String>) -> Self {
        FlxbError::Format(msg.into())
    }

    /// Rebase an `InvalidSymbol` offset from block-relative to
    /// stream-relative. Other variants pass through untouched.
    pub(crate) fn offset_by(self, base: u64) -> Self {
        match self {
            FlxbError::InvalidSymbol { symbol, offset } => FlxbError::InvalidSymbol {
                symbol,
                offset: offset + base,
            },
            other => other,
        }
    }
}

impl fmt::Display for FlxbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlxbError::Config(msg) => write!(f, "{}", msg),
            FlxbError::File { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            FlxbError::Io(err) => write!(f, "I/O error: {}", err),
            FlxbError::Format(msg) => write!(f, "{}", msg),
            FlxbError::InvalidSymbol { symbol, offset } => {
                write!(
                    f,
                    "invalid symbol 0x{:02x} at offset {} of the encoded stream",
                    symbol, offset
                )
            }
        }
    }
}

impl std::error::Error for FlxbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlxbError::File { source, .. } => Some(source),
            FlxbError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FlxbError {
    fn from(err: io::Error) -> Self {
        FlxbError::Io(err)
    }
}
