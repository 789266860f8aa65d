//! # uni-lookup
//!
//! Identify Unicode codepoints and print their glyph, code and name.
//!
//! Input can be a name search (literal words or `/regex/`), explicit
//! `U+xxxx` references, a literal string, or UTF-8 given as hex. Each
//! resulting codepoint is printed on its own line, optionally with its
//! UTF-8 bytes or UTF-16 code units.
pub mod uni;

// Re-export the main types for convenience
pub use uni::{
    codec,
    Category,
    Codepoint,
    DecodedUnit,
    DisplayConfig,
    Matcher,
    Mode,
    ModeFlags,
    Renderer,
    Resolver,
    Result,
    Ucd,
    UniError,
    UnicodeData,
};
