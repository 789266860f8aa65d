//! Data structures shared by the codec, renderer and resolver.

use std::fmt;

use super::error::{Result, UniError};

/// A Unicode scalar position.
///
/// Values above [`Codepoint::MAX`] can be constructed from explicit `U+`
/// input; they are carried through so the renderer can flag them instead
/// of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(pub u32);

impl Codepoint {
    /// Highest valid codepoint.
    pub const MAX: u32 = 0x10FFFF;

    pub fn value(self) -> u32 {
        self.0
    }

    /// Inside `0..=0x10FFFF`. Surrogates count as valid codepoints here.
    pub fn is_valid(self) -> bool {
        self.0 <= Self::MAX
    }

    pub fn is_surrogate(self) -> bool {
        (0xD800..=0xDFFF).contains(&self.0)
    }

    /// The Rust `char`, unless this is a surrogate or out of range.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Codepoint(c as u32)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// One step of decoding a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedUnit {
    /// A well-formed sequence and the codepoint it encodes.
    Codepoint(Codepoint),
    /// A byte that does not start a well-formed sequence.
    Invalid(u8),
}

/// Which encoded units to print next to each codepoint.
///
/// Built once from the command line and passed by reference. When both
/// flags are set, UTF-8 takes precedence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_utf8: bool,
    pub show_utf16: bool,
}

impl DisplayConfig {
    pub fn new(show_utf8: bool, show_utf16: bool) -> Self {
        Self { show_utf8, show_utf16 }
    }

    /// Copy of this configuration with UTF-8 display forced on (hex mode).
    pub fn with_utf8(self) -> Self {
        Self { show_utf8: true, ..self }
    }
}

/// Explicitly requested input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `-c`: display each codepoint of the argument.
    String,
    /// `-n`: search names.
    Name,
    /// `-p`: parse `U+xxxx` tokens.
    Codepoint,
    /// `-x`: decode UTF-8 from hex.
    Hex,
}

/// The raw mode flags as given on the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModeFlags {
    pub string: bool,
    pub name: bool,
    pub codepoint: bool,
    pub hex: bool,
}

impl ModeFlags {
    /// Picks the explicit mode, if any.
    ///
    /// # Errors
    /// [`UniError::ConflictingModes`] when more than one flag is set.
    pub fn select(&self) -> Result<Option<Mode>> {
        let set: Vec<Mode> = [
            (self.string, Mode::String),
            (self.name, Mode::Name),
            (self.codepoint, Mode::Codepoint),
            (self.hex, Mode::Hex),
        ]
        .into_iter()
        .filter_map(|(on, mode)| on.then_some(mode))
        .collect();

        match set.as_slice() {
            [] => Ok(None),
            [mode] => Ok(Some(*mode)),
            _ => Err(UniError::ConflictingModes),
        }
    }
}
