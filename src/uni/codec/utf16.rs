//! UTF-16 code units.

use crate::uni::types::models::Codepoint;

/// Encode a codepoint as one or two UTF-16 code units.
///
/// Codepoints below U+10000 map to a single unit equal to their value.
/// Higher ones become a surrogate pair.
pub fn encode_utf16(cp: Codepoint) -> Vec<u16> {
    let v = cp.value();
    if v < 0x1_0000 {
        return vec![v as u16];
    }
    let high = 0xD800 + ((v >> 10) - 0x40);
    let low = 0xDC00 + (v & 0x3FF);
    vec![high as u16, low as u16]
}

/// Inverse of [`encode_utf16`] for a single codepoint.
///
/// Returns `None` unless `units` is one unit or one well-formed
/// high/low surrogate pair.
pub fn decode_utf16(units: &[u16]) -> Option<Codepoint> {
    match *units {
        [unit] => Some(Codepoint(unit as u32)),
        [high @ 0xD800..=0xDBFF, low @ 0xDC00..=0xDFFF] => {
            let hi = (high as u32 - 0xD800) << 10;
            let lo = low as u32 - 0xDC00;
            Some(Codepoint(0x1_0000 + hi + lo))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogate_pair_for_emoji() {
        assert_eq!(encode_utf16(Codepoint(0x1F600)), vec![0xD83D, 0xDE00]);
        assert_eq!(encode_utf16(Codepoint(0x10000)), vec![0xD800, 0xDC00]);
        assert_eq!(encode_utf16(Codepoint(0x10FFFF)), vec![0xDBFF, 0xDFFF]);
    }

    #[test]
    fn bmp_is_single_unit() {
        assert_eq!(encode_utf16(Codepoint(0xE9)), vec![0xE9]);
        assert_eq!(encode_utf16(Codepoint(0xFFFF)), vec![0xFFFF]);
    }

    #[test]
    fn round_trips_whole_range() {
        for v in 0..=Codepoint::MAX {
            let cp = Codepoint(v);
            assert_eq!(decode_utf16(&encode_utf16(cp)), Some(cp), "U+{v:04X}");
        }
    }

    #[test]
    fn agrees_with_std() {
        for c in ['a', '\u{fffd}', '\u{1f600}', '\u{10ffff}'] {
            let mut buf = [0u16; 2];
            assert_eq!(encode_utf16(c.into()), c.encode_utf16(&mut buf));
        }
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert_eq!(decode_utf16(&[]), None);
        assert_eq!(decode_utf16(&[0xDC00, 0xD800]), None);
        assert_eq!(decode_utf16(&[0x41, 0x42]), None);
    }
}
