//! One line of output per codepoint.
//!
//! Line layout: `<glyph>\tU+<code><units>\t<name>`, where the code is
//! padded to five characters and the optional units field to a fixed width
//! so columns line up.

use super::codec::{encode_utf16, encode_utf8};
use super::names::control_name;
use super::types::models::{Codepoint, DisplayConfig};
use super::ucd::{Category, UnicodeData};

/// U+25CC DOTTED CIRCLE, the base shown under a lone combining mark.
const DOTTED_CIRCLE: char = '\u{25CC}';

/// Minimum width of the UTF-8 field, `len("XX XX XX XX")`.
const UTF8_FIELD_WIDTH: usize = 11;

/// Formats codepoints against a character database and display settings.
pub struct Renderer<'a, U: UnicodeData> {
    ucd: &'a U,
    config: &'a DisplayConfig,
}

impl<'a, U: UnicodeData> Renderer<'a, U> {
    pub fn new(ucd: &'a U, config: &'a DisplayConfig) -> Self {
        Self { ucd, config }
    }

    /// The line describing `cp`, without a trailing newline.
    pub fn line(&self, cp: Codepoint) -> String {
        if !cp.is_valid() {
            return format!("\tU+{:X} is not a valid Unicode character", cp.value());
        }

        let glyph = self.glyph(cp);
        let code = format!("{:04X}", cp.value());
        let units = self.units(cp);
        let name = self.display_name(cp);

        format!("{}\tU+{:<5}{}\t{}", glyph, code, units, name)
    }

    /// The line for a byte that did not decode.
    pub fn invalid_byte(&self, byte: u8) -> String {
        format!("\tU+????  ({:02X})", byte)
    }

    /// What to print in the glyph column.
    ///
    /// Nonspacing marks sit on a dotted circle so they do not combine with
    /// the tab or the previous line. Variation selectors and anything
    /// without a visible glyph print nothing.
    pub fn glyph(&self, cp: Codepoint) -> String {
        let Some(c) = cp.as_char() else {
            return String::new();
        };
        if is_variation_selector(cp) {
            return String::new();
        }
        let category = self.ucd.category(cp);
        if category == Category::Mn {
            return format!("{DOTTED_CIRCLE}{c}");
        }
        if category.is_graphic() || c == ' ' {
            return c.to_string();
        }
        String::new()
    }

    /// Control mnemonic, else the database name, else a code point label.
    pub fn display_name(&self, cp: Codepoint) -> String {
        if let Some(name) = control_name(cp) {
            return name.to_string();
        }
        if let Some(name) = self.ucd.name(cp) {
            return name;
        }
        let kind = match self.ucd.category(cp) {
            Category::Cc => "control",
            Category::Co => "private-use",
            Category::Cs => "surrogate",
            Category::Cn if is_noncharacter(cp) => "noncharacter",
            Category::Cn => "reserved",
            _ => return String::new(),
        };
        format!("<{}-{:04X}>", kind, cp.value())
    }

    fn units(&self, cp: Codepoint) -> String {
        if self.config.show_utf8 {
            let bytes: Vec<String> = encode_utf8(cp)
                .iter()
                .map(|b| format!("{:02X}", b))
                .collect();
            let field = format!(" ({})", bytes.join(" "));
            return format!("{:<width$}", field, width = UTF8_FIELD_WIDTH);
        }
        if self.config.show_utf16 {
            return match encode_utf16(cp).as_slice() {
                [unit] => format!(" ({:04X})     ", unit),
                [high, low] => format!(" ({:04X} {:04X})", high, low),
                _ => String::new(),
            };
        }
        String::new()
    }
}

fn is_variation_selector(cp: Codepoint) -> bool {
    matches!(
        cp.value(),
        0x180B..=0x180D | 0x180F | 0xFE00..=0xFE0F | 0xE0100..=0xE01EF
    )
}

fn is_noncharacter(cp: Codepoint) -> bool {
    let v = cp.value();
    (0xFDD0..=0xFDEF).contains(&v) || (v & 0xFFFE == 0xFFFE && v <= Codepoint::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uni::ucd::Ucd;

    fn line(v: u32, config: DisplayConfig) -> String {
        Renderer::new(&Ucd, &config).line(Codepoint(v))
    }

    #[test]
    fn plain_line() {
        assert_eq!(
            line(0xE9, DisplayConfig::default()),
            "\u{e9}\tU+00E9 \tLATIN SMALL LETTER E WITH ACUTE"
        );
        assert_eq!(
            line(0x1F600, DisplayConfig::default()),
            "\u{1f600}\tU+1F600\tGRINNING FACE"
        );
    }

    #[test]
    fn utf8_field_is_padded() {
        assert_eq!(
            line(0x41, DisplayConfig::new(true, false)),
            "A\tU+0041  (41)      \tLATIN CAPITAL LETTER A"
        );
        assert_eq!(
            line(0xE9, DisplayConfig::new(true, false)),
            "\u{e9}\tU+00E9  (C3 A9)   \tLATIN SMALL LETTER E WITH ACUTE"
        );
    }

    #[test]
    fn utf16_single_and_pair() {
        assert_eq!(
            line(0xE9, DisplayConfig::new(false, true)),
            "\u{e9}\tU+00E9  (00E9)     \tLATIN SMALL LETTER E WITH ACUTE"
        );
        assert_eq!(
            line(0x1F600, DisplayConfig::new(false, true)),
            "\u{1f600}\tU+1F600 (D83D DE00)\tGRINNING FACE"
        );
    }

    #[test]
    fn utf8_wins_when_both_requested() {
        let both = line(0xE9, DisplayConfig::new(true, true));
        assert!(both.contains("(C3 A9)"));
        assert!(!both.contains("00E9)"));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            line(0x110000, DisplayConfig::default()),
            "\tU+110000 is not a valid Unicode character"
        );
    }

    #[test]
    fn glyph_classes() {
        let config = DisplayConfig::default();
        let r = Renderer::new(&Ucd, &config);
        assert_eq!(r.glyph(Codepoint(0x301)), "\u{25cc}\u{301}");
        assert_eq!(r.glyph(Codepoint(0xFE0F)), "");
        assert_eq!(r.glyph(Codepoint(0x0A)), "");
        assert_eq!(r.glyph(Codepoint(0x20)), " ");
        assert_eq!(r.glyph(Codepoint(0xA0)), "");
        assert_eq!(r.glyph(Codepoint(0xD800)), "");
    }

    #[test]
    fn names_fall_back_to_labels() {
        let config = DisplayConfig::default();
        let r = Renderer::new(&Ucd, &config);
        assert_eq!(r.display_name(Codepoint(0x09)), "HT (horizontal tab)");
        assert_eq!(r.display_name(Codepoint(0x85)), "<control-0085>");
        assert_eq!(r.display_name(Codepoint(0xE000)), "<private-use-E000>");
        assert_eq!(r.display_name(Codepoint(0xD800)), "<surrogate-D800>");
        assert_eq!(r.display_name(Codepoint(0xFFFF)), "<noncharacter-FFFF>");
        assert_eq!(r.display_name(Codepoint(0x378)), "<reserved-0378>");
    }

    #[test]
    fn invalid_byte_line() {
        let config = DisplayConfig::default();
        assert_eq!(Renderer::new(&Ucd, &config).invalid_byte(0xFF), "\tU+????  (FF)");
    }
}
