//! Codec layer: byte and code-unit conversions.
//!
//! # Submodules
//!
//! - [`utf8`][]: lazy UTF-8 decoding with per-byte error recovery, and encoding
//! - [`utf16`][]: code-unit encoding including surrogate pairs
//! - [`hex`][]: hex text to bytes

pub mod hex;
pub mod utf16;
pub mod utf8;

pub use self::hex::decode_hex;
pub use self::utf16::{decode_utf16, encode_utf16};
pub use self::utf8::{decode_all, encode_utf8, Decoder};
