//! Radix-agnostic block codec.
//!
//! `flxb` encodes binary data into printable symbols drawn from an
//! arbitrary alphabet (radix ≥ 2) and decodes it back. Familiar schemes
//! fall out as special cases: a hex alphabet gives base16, a 64-symbol
//! alphabet gives a base64-shaped stream, a 58-symbol alphabet gives
//! base58. Input is processed in fixed-size byte blocks, each encoded to a
//! fixed symbol width, so streams parse without delimiters; an optional
//! `FLXB` container header makes files self-describing.
//!
//! ```
//! use flxb::{codec, Charset};
//!
//! let charset = Charset::build(b"0123456789abcdef", true).unwrap();
//! let width = codec::output_length(1, charset.effective_radix());
//! let encoded = codec::encode_block(&[0xff], &charset, width);
//! assert_eq!(encoded, b"ff");
//! assert_eq!(codec::decode_block(&encoded, &charset, 1).unwrap(), [0xff]);
//! ```

mod charset;
pub mod codec;
mod error;
pub mod header;
pub mod presets;
mod stream;

pub use charset::Charset;
pub use error::{FlxbError, Result};
pub use header::Metadata;
pub use stream::{StreamingDecoder, StreamingEncoder};
