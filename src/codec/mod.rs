//! The block codec: fixed-size byte blocks to fixed-width symbol strings
//! and back.
//!
//! Two parallel paths share one dispatch point: [`pow2`] packs bits for
//! power-of-two radices, [`general`] does big-integer base conversion for
//! everything else. Both are pure functions over a single block.

pub mod general;
pub mod pow2;

use crate::charset::Charset;
use crate::error::Result;

/// Symbol count per encoded block: `⌈8·block_size / log2(radix)⌉`.
///
/// Power-of-two radices take an exact integer path so the pow2 codec and
/// the width calculation can never disagree by a float ulp. For the
/// remaining radices `f64::log2` is exact enough across the supported
/// range (radix in `[2, 256]`, block sizes through `u16::MAX`); errors of
/// one part in 2^52 cannot move the quotient across an integer boundary
/// unless the quotient is an integer, which only happens for power-of-two
/// radices.
pub fn output_length(block_size: usize, effective_radix: usize) -> usize {
    debug_assert!(effective_radix >= 2);
    let bits = block_size * 8;
    if effective_radix.is_power_of_two() {
        let bits_per_symbol = effective_radix.trailing_zeros() as usize;
        bits.div_ceil(bits_per_symbol)
    } else {
        (bits as f64 / (effective_radix as f64).log2()).ceil() as usize
    }
}

/// Encodes one block of up to `block_size` bytes into exactly
/// `output_length` symbols.
///
/// `output_length` must come from [`output_length`] for the charset's
/// effective radix and the *full* block size; a short final block encodes
/// to the same width via zero-symbol padding.
pub fn encode_block(block: &[u8], charset: &Charset, output_length: usize) -> Vec<u8> {
    if charset.is_pow2() {
        pow2::encode_block(block, charset, output_length)
    } else {
        general::encode_block(block, charset, output_length)
    }
}

/// Decodes one chunk of symbols back into exactly `block_size` bytes.
///
/// Fails on bytes outside the alphabet and on chunks that cannot carry
/// `block_size` bytes of payload.
pub fn decode_block(chunk: &[u8], charset: &Charset, block_size: usize) -> Result<Vec<u8>> {
    if charset.is_pow2() {
        pow2::decode_block(chunk, charset, block_size)
    } else {
        general::decode_block(chunk, charset, block_size)
    }
}
