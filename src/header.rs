//! The `FLXB` v1 container header.
//!
//! A fixed little-endian record followed by the effective alphabet bytes,
//! carrying everything a decoder needs to run without out-of-band
//! configuration:
//!
//! ```text
//! [4 bytes] magic "FLXB"
//! [4 bytes] version (u32, = 1)
//! [1 byte ] pow2 flag
//! [4 bytes] block size in bytes (u32)
//! [4 bytes] output symbols per block (u32)
//! [4 bytes] charset length (u32)
//! [N bytes] charset
//! ```
//!
//! All integers are little-endian regardless of host byte order, so
//! containers move freely between machines.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, trace};

use crate::charset::Charset;
use crate::codec;
use crate::error::{FlxbError, Result};

const MAGIC: [u8; 4] = *b"FLXB";
const VERSION: u32 = 1;

/// Container metadata: everything the header records about a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: u32,
    pub pow2: bool,
    pub block_size: u32,
    pub output_length: u32,
    /// The *effective* symbols, after dedup and pow2 truncation.
    pub charset: Vec<u8>,
}

impl Metadata {
    /// Assembles the metadata an encoder stamps onto its output.
    pub fn new(charset: &Charset, block_size: u32, output_length: u32) -> Self {
        Metadata {
            version: VERSION,
            pow2: charset.is_pow2(),
            block_size,
            output_length,
            charset: charset.symbols().to_vec(),
        }
    }

    /// Bytes the serialized header occupies at the front of a stream.
    pub fn encoded_len(&self) -> usize {
        4 + 4 + 1 + 4 + 4 + 4 + self.charset.len()
    }

    /// Writes the fixed record followed by the alphabet bytes.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&MAGIC)?;
        writer.write_u32::<LittleEndian>(self.version)?;
        writer.write_u8(self.pow2 as u8)?;
        writer.write_u32::<LittleEndian>(self.block_size)?;
        writer.write_u32::<LittleEndian>(self.output_length)?;
        writer.write_u32::<LittleEndian>(self.charset.len() as u32)?;
        writer.write_all(&self.charset)?;
        debug!(
            "wrote header: block size {}, output length {}, charset of {}",
            self.block_size,
            self.output_length,
            self.charset.len()
        );
        Ok(())
    }

    /// Reads and validates a header from the front of a stream.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(map_truncation)?;
        if magic != MAGIC {
            return Err(FlxbError::format("Invalid header magic"));
        }

        let version = reader.read_u32::<LittleEndian>().map_err(map_truncation)?;
        if version != VERSION {
            return Err(FlxbError::format("Unsupported version"));
        }

        let pow2 = reader.read_u8().map_err(map_truncation)? != 0;
        let block_size = reader.read_u32::<LittleEndian>().map_err(map_truncation)?;
        let output_length = reader.read_u32::<LittleEndian>().map_err(map_truncation)?;
        let charset_length = reader.read_u32::<LittleEndian>().map_err(map_truncation)?;
        trace!(
            "header record: pow2 {}, block size {}, output length {}, charset length {}",
            pow2,
            block_size,
            output_length,
            charset_length
        );

        if block_size == 0 {
            return Err(FlxbError::format("Invalid block size in header"));
        }
        // Effective symbols are unique bytes; anything longer cannot be a
        // well-formed alphabet and would let a hostile header size the
        // allocation below.
        if charset_length > 256 {
            return Err(FlxbError::format("Invalid charset length in header"));
        }

        let mut charset = vec![0u8; charset_length as usize];
        reader
            .read_exact(&mut charset)
            .map_err(|err| match err.kind() {
                io::ErrorKind::UnexpectedEof => {
                    FlxbError::format("Incomplete charset in header")
                }
                _ => FlxbError::Io(err),
            })?;

        Ok(Metadata {
            version,
            pow2,
            block_size,
            output_length,
            charset,
        })
    }

    /// Checks that the stored output length matches the width the rebuilt
    /// charset implies, catching headers whose fields disagree.
    pub fn verify(&self, charset: &Charset) -> Result<()> {
        let derived = codec::output_length(self.block_size as usize, charset.effective_radix());
        if derived != self.output_length as usize {
            return Err(FlxbError::format(
                "Header output length does not match its charset",
            ));
        }
        Ok(())
    }
}

/// Truncation of the fixed record reads as a header failure rather than a
/// bare I/O error.
fn map_truncation(err: io::Error) -> FlxbError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => FlxbError::format("Failed to read header"),
        _ => FlxbError::Io(err),
    }
}
