//! tstrip_core: Shared infrastructure for the tstrip transpiler.
//!
//! Provides text spans, line maps, string interning, and the ordered map
//! used by the rest of the pipeline.

pub mod collections;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use intern::{InternedString, StringInterner};
pub use text::{TextRange, TextSpan};
