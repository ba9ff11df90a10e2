use std::collections::HashMap;

use log::debug;

use crate::error::{FlxbError, Result};

/// An encoding alphabet with its radix configuration.
///
/// A charset defines the ordered symbol set used for converting binary data
/// to text. Symbols are raw bytes, so alphabets may contain NUL or high-bit
/// bytes. In pow2 mode the alphabet is truncated to its largest
/// power-of-two prefix and the codec packs bits instead of doing base
/// conversion.
///
/// Immutable once built; share it by reference for the duration of a run.
#[derive(Debug, Clone)]
pub struct Charset {
    symbols: Vec<u8>,
    symbol_to_digit: HashMap<u8, usize>,
    radix: usize,
    effective_radix: usize,
    bits_per_symbol: usize,
    pow2: bool,
}

impl Charset {
    /// Builds a charset from a raw alphabet.
    ///
    /// Duplicate bytes are dropped, keeping the first occurrence, so a
    /// base64 alphabet pasted with its `=` pad and a stray repeat still
    /// yields a clean 64-symbol charset. With `pow2` set, the deduplicated
    /// alphabet is further truncated to its largest `2^k` prefix.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if fewer than 2 unique symbols remain.
    pub fn build(raw: &[u8], pow2: bool) -> Result<Self> {
        let mut seen = [false; 256];
        let mut unique = Vec::with_capacity(raw.len().min(256));
        for &byte in raw {
            if !seen[byte as usize] {
                seen[byte as usize] = true;
                unique.push(byte);
            }
        }

        if unique.len() < 2 {
            return Err(FlxbError::config(
                "Charset must contain at least 2 unique symbols",
            ));
        }

        let radix = unique.len();
        let (symbols, effective_radix, bits_per_symbol) = if pow2 {
            let bits = radix.ilog2() as usize;
            let effective = 1usize << bits;
            unique.truncate(effective);
            (unique, effective, bits)
        } else {
            (unique, radix, 0)
        };

        let symbol_to_digit = symbols
            .iter()
            .enumerate()
            .map(|(digit, &byte)| (byte, digit))
            .collect();

        debug!(
            "built charset: radix {}, effective radix {}, pow2 {}",
            radix, effective_radix, pow2
        );

        Ok(Charset {
            symbols,
            symbol_to_digit,
            radix,
            effective_radix,
            bits_per_symbol,
            pow2,
        })
    }

    /// The effective symbol table, in digit order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of unique symbols in the raw alphabet.
    pub fn radix(&self) -> usize {
        self.radix
    }

    /// The radix actually used for arithmetic: equals `radix()` in general
    /// mode and the largest power of two ≤ `radix()` in pow2 mode.
    pub fn effective_radix(&self) -> usize {
        self.effective_radix
    }

    /// Bits packed per symbol; 0 in general mode.
    pub fn bits_per_symbol(&self) -> usize {
        self.bits_per_symbol
    }

    /// Whether the bit-packing path is in effect.
    pub fn is_pow2(&self) -> bool {
        self.pow2
    }

    /// The symbol for a digit value.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= effective_radix()`; callers produce digits by
    /// reducing modulo the effective radix, which keeps them in range.
    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    /// The digit value of a symbol, or `None` for bytes outside the
    /// alphabet.
    pub fn decode_symbol(&self, symbol: u8) -> Option<usize> {
        self.symbol_to_digit.get(&symbol).copied()
    }
}
