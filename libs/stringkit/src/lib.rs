//! `stringkit` basic library
//!
//! Small pure byte/string helpers shared by all services, including:
//! - hex encoding/decoding with strict validation
//! - delimiter-based splitting with an empty-token policy
//! - prefix/suffix tests and character removal
//! - fixed-width text padding
//! - `#RRGGBB` color string parsing
//! - UTF-16 <-> UTF-8 conversion
//!
//! Every function is a stateless transformation of its arguments; nothing
//! here touches global state, so any function may be called from multiple
//! threads without synchronization.

pub mod color;
pub mod encoding;
pub mod error;
pub mod hex;
pub mod split;
pub mod text;

// Re-export commonly used types at crate root for convenience
pub use color::{parse_color, parse_color_f, Rgba8, RgbaF};
pub use error::{Result, StringkitError};
pub use split::{split, split_char, SplitBehavior};
