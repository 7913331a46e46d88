//! Error types for sizetree
//!
//! Only run-fatal conditions live here. Entries that vanish or cannot be read
//! during traversal are skipped where they are found and never surface as errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The scan root does not exist, is not a directory, or cannot be listed.
    #[error("'{}' is not a directory or does not exist", path.display())]
    InvalidRoot { path: PathBuf },

    /// A size filter string that does not match `<number>[K|M|G|T]`.
    #[error("invalid size format: '{input}'")]
    InvalidSizeFormat { input: String },

    #[error("cannot write report to '{}': {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_root_message_names_path() {
        let err = Error::InvalidRoot {
            path: PathBuf::from("/no/such/dir"),
        };
        assert_eq!(
            err.to_string(),
            "'/no/such/dir' is not a directory or does not exist"
        );
    }

    #[test]
    fn test_invalid_size_message_quotes_input() {
        let err = Error::InvalidSizeFormat {
            input: "12Q".to_string(),
        };
        assert_eq!(err.to_string(), "invalid size format: '12Q'");
    }

    #[test]
    fn test_report_write_keeps_source() {
        use std::error::Error as _;

        let err = Error::ReportWrite {
            path: PathBuf::from("report.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("report.txt"));
        assert!(err.source().is_some());
    }
}
