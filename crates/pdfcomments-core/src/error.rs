use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("please provide at least one pdf to scrape comments from")]
    Usage,

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Invalid page selection: {0}")]
    InvalidPageSelection(String),

    #[error("Failed to write output")]
    Output(#[source] std::io::Error),
}

impl ScrapeError {
    /// Prefix a parse failure with the file it came from
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            ScrapeError::Parse(message) => {
                ScrapeError::Parse(format!("{}: {}", path.display(), message))
            }
            other => other,
        }
    }
}
