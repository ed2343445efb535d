//! The validation pass over a fixed, ordered list of files

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use xml_engine_traits::{Error, XmlParser};
use roxmltree_adapter::RoxmlParser;

use crate::result::{FileCheckResult, OverallResult};

/// Resource files checked when no other list is given, relative to the
/// working directory.
pub const DEFAULT_FILES: [&str; 2] = [
    "app/src/main/res/xml/backup_rules.xml",
    "app/src/main/res/xml/data_extraction_rules.xml",
];

/// Parse one existing file and write its status line to `out`.
///
/// Parse and read failures end up in the returned result; only a failed
/// write to `out` is an error.
pub fn validate_file<P, W>(parser: &mut P, path: &Path, out: &mut W) -> io::Result<FileCheckResult>
where
    P: XmlParser + ?Sized,
    W: Write + ?Sized,
{
    debug!("parsing {} with {}", path.display(), parser.engine_name());

    let result = match parser.parse_file(path) {
        Ok(()) => FileCheckResult::valid(path),
        Err(e) => {
            warn!("{}: {} ({})", path.display(), e, e.kind());
            FileCheckResult::invalid(path, e.to_string())
        }
    };

    writeln!(out, "{}", result.status_line())?;
    Ok(result)
}

/// Checks every configured file in order, then reports the overall outcome.
pub struct Validator<P = RoxmlParser> {
    files: Vec<PathBuf>,
    parser: P,
}

impl Default for Validator<RoxmlParser> {
    fn default() -> Self {
        Self::new(DEFAULT_FILES, RoxmlParser::new())
    }
}

impl<P: XmlParser> Validator<P> {
    pub fn new<I>(files: I, parser: P) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            parser,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Run one pass, writing a line per file and then the summary line.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<OverallResult> {
        let mut results = Vec::with_capacity(self.files.len());

        for path in &self.files {
            let result = if path.exists() {
                validate_file(&mut self.parser, path, out)?
            } else {
                let err = Error::NotFound(path.clone());
                warn!("{} ({})", err, err.kind());
                let result = FileCheckResult::missing(path);
                writeln!(out, "{}", result.status_line())?;
                result
            };
            results.push(result);
        }

        let overall = OverallResult::new(results);
        writeln!(out, "{}", overall.summary_line())?;
        info!(
            "checked {} file(s), {} failed",
            overall.files.len(),
            overall.failed_count()
        );

        Ok(overall)
    }
}
