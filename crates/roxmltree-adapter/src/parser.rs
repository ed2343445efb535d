//! XmlParser implementation for roxmltree

use roxmltree::{Document, ParsingOptions};
use xml_engine_traits::{
    error::{Error, Result},
    parser::XmlParser,
};

/// Wrapper around roxmltree that implements XmlParser trait.
///
/// DOCTYPE declarations are accepted and internal entities expanded;
/// external subsets are never fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoxmlParser;

impl RoxmlParser {
    /// Create a new RoxmlParser
    pub fn new() -> Self {
        Self
    }

    fn options() -> ParsingOptions {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        options
    }
}

impl XmlParser for RoxmlParser {
    fn engine_name(&self) -> &'static str {
        "roxmltree"
    }

    fn parse_str(&mut self, xml: &str) -> Result<()> {
        Document::parse_with_options(xml, Self::options())
            .map(|_| ())
            .map_err(|e| Error::XmlParse(e.to_string()))
    }
}
