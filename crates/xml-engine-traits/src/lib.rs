//! Core trait abstractions for XML well-formedness checking.
//!
//! This crate defines the parser seam the validator is written against,
//! so the concrete XML backend can be swapped without touching it.

pub mod encoding;
pub mod error;
pub mod parser;

pub use encoding::decode_document;
pub use error::{Error, Result};
pub use parser::XmlParser;
