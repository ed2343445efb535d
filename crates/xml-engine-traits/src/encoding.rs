//! Byte-level decoding of XML documents
//!
//! A byte order mark wins; otherwise the `encoding` pseudo-attribute of the
//! XML declaration is honoured; otherwise the document is UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Error, Result};

/// Decode a whole document to a string, dropping any BOM.
pub fn decode_document(bytes: &[u8]) -> Result<String> {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => match declared_encoding(bytes) {
            Some(label) => Encoding::for_label(label.as_bytes())
                .ok_or_else(|| Error::Encoding(format!("unsupported encoding '{label}'")))?,
            None => UTF_8,
        },
    };

    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(Error::Encoding(format!("invalid {} byte sequence", encoding.name())));
    }
    Ok(text.into_owned())
}

/// Label from `<?xml ... encoding="..."?>`, read as ASCII.
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let head = bytes.strip_prefix(b"<?xml")?;
    let end = head.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&head[..end]).ok()?;

    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[1..];
    rest.find(quote).map(|end| &rest[..end])
}
