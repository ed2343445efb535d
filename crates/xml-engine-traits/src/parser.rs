//! XML parser abstraction trait

use std::path::Path;

use crate::encoding::decode_document;
use crate::error::Result;

/// Trait for XML parsers that can decide well-formedness.
///
/// Implementations parse into whatever tree they like and drop it; only
/// success or the parser's diagnostic is reported back.
pub trait XmlParser {
    /// Name of the backing engine
    fn engine_name(&self) -> &'static str;

    /// Parse XML from a string
    fn parse_str(&mut self, xml: &str) -> Result<()>;

    /// Parse XML from a file.
    ///
    /// The whole file is read and closed before parsing starts, then
    /// decoded per its BOM or encoding declaration.
    fn parse_file(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)?;
        let content = decode_document(&bytes)?;
        self.parse_str(&content)
    }
}
