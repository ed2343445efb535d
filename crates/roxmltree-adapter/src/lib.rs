//! roxmltree adapter for the XML parser abstraction
//!
//! This adapter wraps the roxmltree parser to implement the
//! xml-engine-traits interfaces.

pub mod parser;

pub use parser::RoxmlParser;
