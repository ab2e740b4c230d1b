//! tstrip_parser: Recursive descent parser for TypeScript.
//!
//! Builds an arena-allocated syntax tree from the scanner's token stream.
//! Context-sensitive constructs go through the disambiguator: bounded
//! speculative parses over saved scanner state that either commit to an
//! interpretation or roll back without a trace.

mod context;
mod disambiguator;
mod parser;
mod precedence;

pub use context::ParseContext;
pub use parser::{Parser, ParserOptions};
