//! Name lookup and name search.
//!
//! Search compiles the user's pattern once into a [`Matcher`] and then walks
//! every assigned codepoint in ascending order, testing its name. There is
//! no prebuilt index.

use log::{debug, trace};
use regex::{Regex, RegexBuilder};

use super::types::error::Result;
use super::types::models::Codepoint;
use super::ucd::{Assigned, UnicodeData};

/// Mnemonics for the C0 controls and DEL, which have no character name.
const CONTROL_NAMES: [(u32, &str); 33] = [
    (0x00, "NUL"),
    (0x01, "SOH (start of heading)"),
    (0x02, "STX (start of text)"),
    (0x03, "ETX (end of text)"),
    (0x04, "EOT (end of transmission)"),
    (0x05, "ENQ (enquiry)"),
    (0x06, "ACK (acknowledgement)"),
    (0x07, "BEL (bell)"),
    (0x08, "BS (backspace)"),
    (0x09, "HT (horizontal tab)"),
    (0x0A, "LF (line feed)"),
    (0x0B, "VT (vertical tab)"),
    (0x0C, "FF (form feed)"),
    (0x0D, "CR (carriage return)"),
    (0x0E, "SO (shift out)"),
    (0x0F, "SI (shift in)"),
    (0x10, "DLE (data link escape)"),
    (0x11, "DC1 (device control 1 / xon)"),
    (0x12, "DC2 (device control 2)"),
    (0x13, "DC3 (device control 3 / xoff)"),
    (0x14, "DC4 (device control 4)"),
    (0x15, "NAK (negative acknowledgement)"),
    (0x16, "SYN (synchronous idle)"),
    (0x17, "ETB (end of transmission block)"),
    (0x18, "CAN (cancel)"),
    (0x19, "EM (end of medium)"),
    (0x1A, "SUB (substitute)"),
    (0x1B, "ESC (escape)"),
    (0x1C, "FS (file separator)"),
    (0x1D, "GS (group separator)"),
    (0x1E, "RS (record separator)"),
    (0x1F, "US (unit separator)"),
    (0x7F, "DEL (delete)"),
];

/// Mnemonic for a C0 control or DEL.
pub fn control_name(cp: Codepoint) -> Option<&'static str> {
    CONTROL_NAMES
        .binary_search_by_key(&cp.value(), |(code, _)| *code)
        .ok()
        .map(|i| CONTROL_NAMES[i].1)
}

/// A compiled, case-insensitive name pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a search term.
    ///
    /// `/regex/` is compiled as a regular expression (all leading and
    /// trailing slashes are trimmed). Anything else is a literal phrase
    /// that must occur as whole words.
    ///
    /// # Errors
    /// [`UniError::InvalidPattern`](crate::UniError::InvalidPattern) if the
    /// regular expression is malformed.
    pub fn compile(pattern: &str) -> Result<Self> {
        let source = if pattern.starts_with('/') {
            pattern.trim_matches('/').to_string()
        } else {
            format!(r"\b{}\b", regex::escape(pattern))
        };
        debug!("Compiling name pattern {:?} as {:?}", pattern, source);

        let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Lazy search over assigned codepoints whose names match.
///
/// Created by [`search`].
pub struct Search<'a, U: UnicodeData> {
    ucd: &'a U,
    matcher: &'a Matcher,
    assigned: Assigned<'a, U>,
    scanned: usize,
    matched: usize,
}

/// Every assigned codepoint whose name matches, in ascending order.
pub fn search<'a, U: UnicodeData>(ucd: &'a U, matcher: &'a Matcher) -> Search<'a, U> {
    Search {
        ucd,
        matcher,
        assigned: ucd.assigned(),
        scanned: 0,
        matched: 0,
    }
}

impl<U: UnicodeData> Iterator for Search<'_, U> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Self::Item> {
        for cp in self.assigned.by_ref() {
            self.scanned += 1;
            let Some(name) = self.ucd.name(cp) else {
                continue;
            };
            if self.matcher.is_match(&name) {
                self.matched += 1;
                trace!("{} {} matches", cp, name);
                return Some(cp);
            }
        }
        debug!(
            "Name search {:?}: scanned {} assigned codepoints, {} matched",
            self.matcher.as_str(),
            self.scanned,
            self.matched
        );
        None
    }
}
