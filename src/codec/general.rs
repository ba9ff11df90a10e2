//! Big-integer block codec for arbitrary radices.
//!
//! The block is read as a non-negative big-endian integer and rewritten in
//! the charset's radix, most significant symbol first, padded with the zero
//! symbol to the canonical width. Blocks are small, so repeated division by
//! a small constant is nowhere near the hot path.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::charset::Charset;
use crate::error::{FlxbError, Result};

/// Encodes one block into exactly `output_length` symbols.
pub fn encode_block(block: &[u8], charset: &Charset, output_length: usize) -> Vec<u8> {
    let zero = charset.symbol(0);
    if block.iter().all(|&byte| byte == 0) {
        return vec![zero; output_length];
    }

    let radix = BigUint::from(charset.effective_radix());
    let mut num = BigUint::from_bytes_be(block);

    let mut digits = Vec::with_capacity(output_length);
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&radix);
        // The remainder is below the radix, so a single machine digit.
        let digit = remainder.to_u64_digits().first().copied().unwrap_or(0) as usize;
        digits.push(charset.symbol(digit));
        num = quotient;
    }

    digits.resize(output_length, zero);
    digits.reverse();
    digits
}

/// Decodes one chunk of symbols into exactly `block_size` bytes.
///
/// The accumulated value must fit `block_size` bytes; well-formed encoder
/// output always does, so an overflow means the stream was not produced by
/// a matching encoder.
pub fn decode_block(chunk: &[u8], charset: &Charset, block_size: usize) -> Result<Vec<u8>> {
    let radix = BigUint::from(charset.effective_radix());
    let mut num = BigUint::zero();

    for (offset, &symbol) in chunk.iter().enumerate() {
        let digit = charset
            .decode_symbol(symbol)
            .ok_or(FlxbError::InvalidSymbol {
                symbol,
                offset: offset as u64,
            })?;
        num *= &radix;
        num += BigUint::from(digit);
    }

    let bytes = num.to_bytes_be();
    if bytes.len() > block_size {
        return Err(FlxbError::format("Encoded value exceeds the block size"));
    }

    let mut out = vec![0u8; block_size - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}
