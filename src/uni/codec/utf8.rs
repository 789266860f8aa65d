//! UTF-8 decoding and encoding.
//!
//! Decoding accepts exactly the well-formed sequences of Unicode Table 3-7.
//! Anything else (stray continuation bytes, overlong forms, encoded
//! surrogates, values past U+10FFFF, truncated sequences) produces one
//! [`DecodedUnit::Invalid`] for the byte at the current position, and the
//! decoder moves on by a single byte.

use crate::uni::types::models::{Codepoint, DecodedUnit};

/// Lazy decoder over a byte slice.
///
/// Created by [`decode_all`]. Each call to `decode_all` starts a fresh pass.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Decode `bytes` left to right into codepoints and invalid bytes.
pub fn decode_all(bytes: &[u8]) -> Decoder<'_> {
    Decoder { bytes, pos: 0 }
}

impl Iterator for Decoder<'_> {
    type Item = DecodedUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.pos..).filter(|r| !r.is_empty())?;

        match decode_one(rest) {
            Some((cp, width)) => {
                self.pos += width;
                Some(DecodedUnit::Codepoint(cp))
            }
            None => {
                self.pos += 1;
                Some(DecodedUnit::Invalid(rest[0]))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bytes.len().saturating_sub(self.pos);
        (left.div_ceil(4), Some(left))
    }
}

/// Decode a single sequence at the start of `bytes`.
///
/// Returns the codepoint and the number of bytes it occupies, or `None`
/// if the bytes at this position are not well-formed.
fn decode_one(bytes: &[u8]) -> Option<(Codepoint, usize)> {
    let lead = *bytes.first()?;

    // Allowed range of the second byte, and total sequence width.
    let (second, width) = match lead {
        0x00..=0x7F => return Some((Codepoint(lead as u32), 1)),
        0xC2..=0xDF => (0x80..=0xBF, 2),
        0xE0 => (0xA0..=0xBF, 3),
        0xE1..=0xEC | 0xEE..=0xEF => (0x80..=0xBF, 3),
        0xED => (0x80..=0x9F, 3),
        0xF0 => (0x90..=0xBF, 4),
        0xF1..=0xF3 => (0x80..=0xBF, 4),
        0xF4 => (0x80..=0x8F, 4),
        _ => return None,
    };

    let seq = bytes.get(..width)?;
    if !second.contains(&seq[1]) {
        return None;
    }
    if !seq[2..].iter().all(|b| (0x80..=0xBF).contains(b)) {
        return None;
    }

    let lead_bits = match width {
        2 => lead as u32 & 0x1F,
        3 => lead as u32 & 0x0F,
        _ => lead as u32 & 0x07,
    };
    let value = seq[1..]
        .iter()
        .fold(lead_bits, |acc, b| (acc << 6) | (*b as u32 & 0x3F));

    Some((Codepoint(value), width))
}

/// Serialize a codepoint as UTF-8.
///
/// Lone surrogates get the generalized three-byte form so that explicit
/// `U+D800` input still has something to show. Values above U+10FFFF
/// yield an empty sequence.
pub fn encode_utf8(cp: Codepoint) -> Vec<u8> {
    let v = cp.value();
    match v {
        0x0000..=0x007F => vec![v as u8],
        0x0080..=0x07FF => vec![0xC0 | (v >> 6) as u8, 0x80 | (v & 0x3F) as u8],
        0x0800..=0xFFFF => vec![
            0xE0 | (v >> 12) as u8,
            0x80 | ((v >> 6) & 0x3F) as u8,
            0x80 | (v & 0x3F) as u8,
        ],
        0x1_0000..=Codepoint::MAX => vec![
            0xF0 | (v >> 18) as u8,
            0x80 | ((v >> 12) & 0x3F) as u8,
            0x80 | ((v >> 6) & 0x3F) as u8,
            0x80 | (v & 0x3F) as u8,
        ],
        _ => Vec::new(),
    }
}
