//! Result types for a validation pass

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Outcome of checking a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheckResult {
    pub path: PathBuf,
    pub existed: bool,
    pub parsed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FileCheckResult {
    pub fn valid(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            existed: true,
            parsed: true,
            error_message: None,
        }
    }

    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            existed: true,
            parsed: false,
            error_message: Some(message.into()),
        }
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            existed: false,
            parsed: false,
            error_message: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.existed && self.parsed
    }

    /// Final path segment, or the whole path when there is none
    pub fn basename(&self) -> Cow<'_, str> {
        basename(&self.path)
    }

    /// The one stdout line reported for this file.
    ///
    /// Missing files are reported by full path, the others by basename.
    pub fn status_line(&self) -> String {
        if !self.existed {
            format!("❌ File not found: {}", self.path.display())
        } else if self.parsed {
            format!("✅ {} is valid XML", self.basename())
        } else {
            format!(
                "❌ {} error: {}",
                self.basename(),
                self.error_message.as_deref().unwrap_or_default()
            )
        }
    }
}

pub(crate) fn basename(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

/// AND-reduction over every file checked in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverallResult {
    pub files: Vec<FileCheckResult>,
}

impl OverallResult {
    pub fn new(files: Vec<FileCheckResult>) -> Self {
        Self { files }
    }

    pub fn passed(&self) -> bool {
        self.files.iter().all(FileCheckResult::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| !f.passed()).count()
    }

    pub fn summary_line(&self) -> &'static str {
        if self.passed() {
            "✅ All XML files validation passed!"
        } else {
            "❌ XML validation failed!"
        }
    }

    /// Process exit status: 0 when every file passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Generate a JSON summary
    pub fn to_json(&self) -> String {
        #[derive(Serialize)]
        struct Summary<'a> {
            passed: bool,
            total: usize,
            failed: usize,
            files: &'a [FileCheckResult],
        }

        let summary = Summary {
            passed: self.passed(),
            total: self.files.len(),
            failed: self.failed_count(),
            files: &self.files,
        };
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
    }
}
