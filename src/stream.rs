//! Block-at-a-time streaming over readers and writers.
//!
//! The streaming layer owns the buffers; the block codec borrows them for
//! one call at a time. Output bytes are produced in strict input order,
//! block by block, with blocking I/O and no shared state.

use std::io::{self, Read, Write};

use log::debug;

use crate::charset::Charset;
use crate::codec;
use crate::error::{FlxbError, Result};
use crate::header::Metadata;

/// Streaming encoder: reads fixed-size byte blocks, writes fixed-width
/// symbol chunks.
///
/// Processes one block at a time, so memory use is independent of input
/// size.
pub struct StreamingEncoder<'a, W: Write> {
    charset: &'a Charset,
    block_size: usize,
    output_length: usize,
    writer: W,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    /// Creates an encoder for the given charset and block size.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for a zero block size.
    pub fn new(charset: &'a Charset, block_size: usize, writer: W) -> Result<Self> {
        if block_size == 0 {
            return Err(FlxbError::config("Block size must be positive"));
        }
        let output_length = codec::output_length(block_size, charset.effective_radix());
        Ok(StreamingEncoder {
            charset,
            block_size,
            output_length,
            writer,
        })
    }

    /// Symbols emitted per block.
    pub fn output_length(&self) -> usize {
        self.output_length
    }

    /// The container metadata describing this encoder's output.
    pub fn metadata(&self) -> Metadata {
        Metadata::new(
            self.charset,
            self.block_size as u32,
            self.output_length as u32,
        )
    }

    /// Writes the container header. Call before [`encode`](Self::encode).
    pub fn write_header(&mut self) -> Result<()> {
        self.metadata().write(&mut self.writer)
    }

    /// Encodes the reader to the writer, returning the number of input
    /// bytes consumed.
    ///
    /// The final block may be short; it still encodes to the full symbol
    /// width via zero-symbol padding. Empty input produces no blocks.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let mut buffer = vec![0u8; self.block_size];
        let mut consumed = 0u64;
        let mut blocks = 0u64;

        loop {
            let got = read_full(reader, &mut buffer)?;
            if got == 0 {
                break;
            }
            let encoded = codec::encode_block(&buffer[..got], self.charset, self.output_length);
            self.writer.write_all(&encoded)?;
            consumed += got as u64;
            blocks += 1;
        }

        debug!("encoded {} bytes in {} blocks", consumed, blocks);
        Ok(consumed)
    }
}

/// Streaming decoder: reads fixed-width symbol chunks, writes fixed-size
/// byte blocks.
///
/// Output is always a multiple of the block size: the container carries no
/// length field for a short final block, so its missing high bytes come
/// back as zeros. Callers needing exact lengths must carry one themselves.
pub struct StreamingDecoder<'a, W: Write> {
    charset: &'a Charset,
    block_size: usize,
    output_length: usize,
    writer: W,
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    /// Creates a decoder for the given charset and block size.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for a zero block size.
    pub fn new(charset: &'a Charset, block_size: usize, writer: W) -> Result<Self> {
        if block_size == 0 {
            return Err(FlxbError::config("Block size must be positive"));
        }
        let output_length = codec::output_length(block_size, charset.effective_radix());
        Ok(StreamingDecoder {
            charset,
            block_size,
            output_length,
            writer,
        })
    }

    /// Symbols consumed per block.
    pub fn output_length(&self) -> usize {
        self.output_length
    }

    /// Decodes the reader to the writer, returning the number of bytes
    /// written.
    ///
    /// A clean EOF on a chunk boundary ends the stream; anything between
    /// one byte and a full chunk is a truncated stream. Invalid-symbol
    /// errors carry their offset within the encoded payload.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let mut chunk = vec![0u8; self.output_length];
        let mut written = 0u64;
        let mut position = 0u64;

        loop {
            let got = read_full(reader, &mut chunk)?;
            if got == 0 {
                break;
            }
            if got != self.output_length {
                return Err(FlxbError::format(
                    "Partial block encountered during decode",
                ));
            }
            let decoded = codec::decode_block(&chunk, self.charset, self.block_size)
                .map_err(|err| err.offset_by(position))?;
            self.writer.write_all(&decoded)?;
            written += decoded.len() as u64;
            position += self.output_length as u64;
        }

        debug!("decoded {} symbol bytes into {} bytes", position, written);
        Ok(written)
    }
}

/// Reads until `buf` is full or EOF, so pipes and files behave alike.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
