//! Bit-packing block codec for power-of-two radices.
//!
//! A block of `len` bytes is the big-endian integer occupying the low
//! `8·len` bits of an `output_length·k`-bit stream; the leading bits are
//! zero pad. Encode walks that stream emitting one symbol per k bits,
//! decode strips the leading pad and repacks. Exact, allocation-light, and
//! free of any big-integer work.

use crate::charset::Charset;
use crate::error::{FlxbError, Result};

/// Encodes one block into exactly `output_length` symbols.
pub fn encode_block(block: &[u8], charset: &Charset, output_length: usize) -> Vec<u8> {
    let k = charset.bits_per_symbol();
    let mask = (1u32 << k) - 1;
    let zero = charset.symbol(0);

    let pad_bits = output_length * k - block.len() * 8;

    let mut out = vec![zero; pad_bits / k];
    let mut bit_buffer = 0u32;
    // Partial pad shorter than one symbol shares the first payload symbol.
    let mut bits_in_buffer = pad_bits % k;

    for &byte in block {
        bit_buffer = (bit_buffer << 8) | u32::from(byte);
        bits_in_buffer += 8;

        while bits_in_buffer >= k {
            bits_in_buffer -= k;
            out.push(charset.symbol(((bit_buffer >> bits_in_buffer) & mask) as usize));
        }
        bit_buffer &= (1u32 << bits_in_buffer) - 1;
    }

    debug_assert_eq!(bits_in_buffer, 0);
    debug_assert_eq!(out.len(), output_length);
    out
}

/// Decodes one chunk of symbols into exactly `block_size` bytes.
///
/// Every symbol is validated against the alphabet, including those that
/// carry only pad bits.
pub fn decode_block(chunk: &[u8], charset: &Charset, block_size: usize) -> Result<Vec<u8>> {
    let k = charset.bits_per_symbol();
    let needed_bits = block_size * 8;
    let total_bits = chunk.len() * k;
    if total_bits < needed_bits {
        return Err(FlxbError::format("Encoded block shorter than expected"));
    }

    let mut skip_bits = total_bits - needed_bits;
    let mut out = Vec::with_capacity(block_size);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for (offset, &symbol) in chunk.iter().enumerate() {
        let digit = charset
            .decode_symbol(symbol)
            .ok_or(FlxbError::InvalidSymbol {
                symbol,
                offset: offset as u64,
            })? as u32;

        if skip_bits >= k {
            skip_bits -= k;
            continue;
        }
        let take = k - skip_bits;
        skip_bits = 0;

        bit_buffer = (bit_buffer << take) | (digit & ((1u32 << take) - 1));
        bits_in_buffer += take;

        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            out.push((bit_buffer >> bits_in_buffer) as u8);
            bit_buffer &= (1u32 << bits_in_buffer) - 1;
        }
    }

    debug_assert_eq!(out.len(), block_size);
    Ok(out)
}
