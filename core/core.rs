pub mod file_finder;
pub mod processor;
pub mod stripper;

use std::path::PathBuf;

pub use file_finder::{
    DEFAULT_JAVA_ROOT, DEFAULT_JAVASCRIPT_ROOT, JAVA_EXTENSIONS, JAVASCRIPT_EXTENSIONS, ScanGroup,
    default_groups, find_files, matches_extension,
};
pub use processor::{GroupOutcome, StripOptions, strip_comments_under};
pub use stripper::{CommentMatch, StripError, StripStrategy, remove_matches, strip_text};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("Comment stripping failed in {}: {message}", .path.display())]
    Strip { path: PathBuf, message: StripError },

    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
}
