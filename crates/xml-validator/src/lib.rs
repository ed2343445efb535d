//! xml-validator: checks that XML resource files exist and are well-formed
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use xml_validator::Validator;
//!
//! let mut validator = Validator::default();
//! let overall = validator.run(&mut std::io::stdout().lock())?;
//! std::process::exit(overall.exit_code().into());
//! ```

pub mod result;
pub mod validator;

pub use result::{FileCheckResult, OverallResult};
pub use validator::{validate_file, Validator, DEFAULT_FILES};
