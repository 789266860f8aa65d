//! Turns command-line input into codepoints and streams their lines.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::Write;

use log::{debug, info};

use super::codec::{decode_all, decode_hex};
use super::names::{search, Matcher};
use super::render::Renderer;
use super::types::error::{Result, UniError};
use super::types::models::{Codepoint, DecodedUnit, DisplayConfig, Mode};
use super::ucd::UnicodeData;

/// Drives the codec and name search for one invocation.
///
/// Codepoint lines go to `out`; per-token diagnostics that do not stop
/// the run go to `err`.
pub struct Resolver<'a, U: UnicodeData, W: Write, E: Write> {
    ucd: &'a U,
    config: DisplayConfig,
    out: W,
    err: E,
    lines: usize,
}

impl<'a, U: UnicodeData, W: Write, E: Write> Resolver<'a, U, W, E> {
    pub fn new(ucd: &'a U, config: DisplayConfig, out: W, err: E) -> Self {
        Self {
            ucd,
            config,
            out,
            err,
            lines: 0,
        }
    }

    /// Resolve `args` in the given mode, or infer the mode from their shape.
    ///
    /// Arguments are joined with single spaces except in codepoint mode,
    /// where each one is its own `U+` token. Returns the number of lines
    /// written.
    ///
    /// # Errors
    /// - [`UniError::MissingArgument`] if there is no mode and nothing to look up
    /// - [`UniError::InvalidCodepoint`] on the first bad `U+` token
    /// - [`UniError::InvalidHex`] / [`UniError::InvalidPattern`] for bad input
    /// - [`UniError::Io`] if writing fails
    pub fn run<S: AsRef<OsStr>>(&mut self, mode: Option<Mode>, args: &[S]) -> Result<usize> {
        let joined = join_args(args);
        let mode = match mode {
            Some(mode) => mode,
            None => infer_mode(&joined)?,
        };
        debug!("Resolving {} argument(s) in {:?} mode", args.len(), mode);

        match mode {
            Mode::String => self.string_bytes(&joined)?,
            Mode::Name => self.name(&String::from_utf8_lossy(&joined))?,
            Mode::Codepoint => self.codepoints(args)?,
            Mode::Hex => self.hex(&String::from_utf8_lossy(&joined))?,
        }
        self.out.flush()?;
        Ok(self.lines)
    }

    /// Render each `U+xxxx` token.
    ///
    /// Tokens without the `U+` prefix are reported on the error stream and
    /// skipped. A prefixed token that fails to parse stops processing.
    pub fn codepoints<S: AsRef<OsStr>>(&mut self, tokens: &[S]) -> Result<()> {
        let config = self.config;
        let renderer = Renderer::new(self.ucd, &config);

        for token in tokens {
            let token = token.as_ref().to_string_lossy();
            let Some(digits) = token.strip_prefix("U+") else {
                writeln!(self.err, "unable to parse codepoint {:?}", token)?;
                continue;
            };
            let value = u32::from_str_radix(digits, 16).map_err(|source| {
                UniError::InvalidCodepoint {
                    token: token.to_string(),
                    source,
                }
            })?;
            self.emit(&renderer.line(Codepoint(value)))?;
        }
        Ok(())
    }

    /// Render every character of `text`.
    pub fn string(&mut self, text: &str) -> Result<()> {
        let config = self.config;
        let renderer = Renderer::new(self.ucd, &config);
        for c in text.chars() {
            self.emit(&renderer.line(c.into()))?;
        }
        Ok(())
    }

    /// Decode `bytes` as UTF-8 and render the result, one marker line per
    /// byte that does not decode.
    pub fn bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.decode_with(bytes, self.config)
    }

    /// Decode hex text to bytes and render them with UTF-8 units shown.
    pub fn hex(&mut self, input: &str) -> Result<()> {
        let bytes = decode_hex(input)?;
        self.decode_with(&bytes, self.config.with_utf8())
    }

    /// Render every assigned codepoint whose name matches `pattern`.
    pub fn name(&mut self, pattern: &str) -> Result<()> {
        let matcher = Matcher::compile(pattern)?;
        let config = self.config;
        let ucd = self.ucd;
        let renderer = Renderer::new(ucd, &config);

        let before = self.lines;
        for cp in search(ucd, &matcher) {
            self.emit(&renderer.line(cp))?;
        }
        info!("{} codepoint(s) match {:?}", self.lines - before, pattern);
        Ok(())
    }

    fn string_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.string(text),
            Err(_) => {
                debug!("Input is not valid UTF-8, decoding {} raw bytes", bytes.len());
                self.bytes(bytes)
            }
        }
    }

    fn decode_with(&mut self, bytes: &[u8], config: DisplayConfig) -> Result<()> {
        let renderer = Renderer::new(self.ucd, &config);
        for unit in decode_all(bytes) {
            let line = match unit {
                DecodedUnit::Codepoint(cp) => renderer.line(cp),
                DecodedUnit::Invalid(byte) => renderer.invalid_byte(byte),
            };
            self.emit(&line)?;
        }
        Ok(())
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.lines += 1;
        Ok(())
    }
}

/// Mode for input given without a mode flag, checked in order: regex
/// search, codepoint tokens, literal string, empty, name search.
fn infer_mode(joined: &[u8]) -> Result<Mode> {
    if joined.starts_with(b"/") {
        Ok(Mode::Name)
    } else if joined.starts_with(b"U+") {
        Ok(Mode::Codepoint)
    } else if joined.len() == 1 || !is_printable_ascii(joined) {
        Ok(Mode::String)
    } else if joined.is_empty() {
        Err(UniError::MissingArgument)
    } else {
        Ok(Mode::Name)
    }
}

fn is_printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| (0x20..=0x7F).contains(b))
}

fn join_args<S: AsRef<OsStr>>(args: &[S]) -> Vec<u8> {
    let mut joined = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            joined.push(b' ');
        }
        joined.extend_from_slice(&os_bytes(arg.as_ref()));
    }
    joined
}

#[cfg(unix)]
fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_mode_from_shape() {
        assert_eq!(infer_mode(b"/smil/").unwrap(), Mode::Name);
        assert_eq!(infer_mode(b"U+1F600").unwrap(), Mode::Codepoint);
        assert_eq!(infer_mode(b"x").unwrap(), Mode::String);
        assert_eq!(infer_mode("caf\u{e9}".as_bytes()).unwrap(), Mode::String);
        assert_eq!(infer_mode(b"tab\there").unwrap(), Mode::String);
        assert_eq!(infer_mode(b"grinning face").unwrap(), Mode::Name);
        assert!(matches!(infer_mode(b""), Err(UniError::MissingArgument)));
    }

    #[test]
    fn joins_with_spaces() {
        assert_eq!(join_args(&["a", "b c"]), b"a b c".to_vec());
        assert!(join_args::<&str>(&[]).is_empty());
    }
}
