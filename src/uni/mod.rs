//! Core codepoint lookup module

pub mod codec;
pub mod names;
pub mod render;
pub mod resolver;
pub mod types;
pub mod ucd;

pub use names::{control_name, search, Matcher, Search};
pub use render::Renderer;
pub use resolver::Resolver;
pub use types::error::{Result, UniError};
pub use types::models::{Codepoint, DecodedUnit, DisplayConfig, Mode, ModeFlags};
pub use ucd::{Category, Ucd, UnicodeData};
