//! Parse tests for roxmltree-adapter

use std::fs;

use roxmltree_adapter::RoxmlParser;
use xml_engine_traits::{Error, XmlParser};

fn utf16le_with_bom(xml: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in xml.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[test]
fn test_parser_accepts_well_formed() {
    let mut parser = RoxmlParser::new();
    assert!(parser.parse_str("<root><item>test</item></root>").is_ok());
    assert!(parser.parse_str("<root></root>").is_ok());
}

#[test]
fn test_parser_accepts_android_rules_file() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<data-extraction-rules>
    <cloud-backup>
        <!-- nothing excluded -->
    </cloud-backup>
</data-extraction-rules>"#;

    let mut parser = RoxmlParser::new();
    assert!(parser.parse_str(xml).is_ok());
}

#[test]
fn test_parser_accepts_doctype() {
    let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE full-backup-content>\n<full-backup-content/>";

    let mut parser = RoxmlParser::new();
    assert!(parser.parse_str(xml).is_ok());
}

#[test]
fn test_parser_expands_internal_entities() {
    let mut parser = RoxmlParser::new();
    assert!(parser
        .parse_str(r#"<!DOCTYPE r [<!ENTITY e "x">]><r>&e;</r>"#)
        .is_ok());
}

#[test]
fn test_parser_rejects_undeclared_entity() {
    let mut parser = RoxmlParser::new();
    assert!(parser.parse_str("<r>&nope;</r>").is_err());
}

#[test]
fn test_parser_rejects_unclosed_tag() {
    let mut parser = RoxmlParser::new();
    let err = parser.parse_str("<root>").unwrap_err();

    assert!(matches!(err, Error::XmlParse(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_parser_rejects_mismatched_tags() {
    let mut parser = RoxmlParser::new();
    assert!(parser.parse_str("<a><b></a></b>").is_err());
}

#[test]
fn test_parser_is_reusable_after_failure() {
    let mut parser = RoxmlParser::new();
    assert!(parser.parse_str("<root>").is_err());
    assert!(parser.parse_str("<root/>").is_ok());
}

#[test]
fn test_parser_parse_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.xml");
    let bad = dir.path().join("bad.xml");
    fs::write(&good, "<full-backup-content/>").unwrap();
    fs::write(&bad, "<full-backup-content>").unwrap();

    let mut parser = RoxmlParser::new();
    assert!(parser.parse_file(&good).is_ok());
    assert!(matches!(parser.parse_file(&bad), Err(Error::XmlParse(_))));
}

#[test]
fn test_parser_parse_file_utf16le_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utf16.xml");
    fs::write(
        &path,
        utf16le_with_bom("<?xml version=\"1.0\" encoding=\"UTF-16\"?><r>café</r>"),
    )
    .unwrap();

    let mut parser = RoxmlParser::new();
    assert!(parser.parse_file(&path).is_ok());
}

#[test]
fn test_parser_parse_file_latin1_declared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.xml");
    fs::write(
        &path,
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><r>caf\xE9</r>",
    )
    .unwrap();

    let mut parser = RoxmlParser::new();
    assert!(parser.parse_file(&path).is_ok());
}

#[test]
fn test_parser_parse_file_utf8_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.xml");
    fs::write(&path, b"\xEF\xBB\xBF<r/>").unwrap();

    let mut parser = RoxmlParser::new();
    assert!(parser.parse_file(&path).is_ok());
}

#[test]
fn test_engine_name() {
    assert_eq!(RoxmlParser::new().engine_name(), "roxmltree");
}
