// crates/nani-cli/src/error.rs - Page Operation Errors
//
// One error type for everything a page operation can report. The CLI maps
// each variant to its own exit status so scripts can tell "already exists"
// from "editor crashed" without parsing messages.

use nani_core::{LayoutError, PageRef, ToolExit};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Cannot determine the directory of the running executable: {0}")]
    PathResolution(#[source] io::Error),

    #[error(transparent)]
    InvalidName(#[from] LayoutError),

    #[error("The {page} page already exists at {}. Edit it or delete it.", .path.display())]
    AlreadyExists { page: PageRef, path: PathBuf },

    #[error("{what} does not exist: {}", .path.display())]
    NotFound { what: String, path: PathBuf },

    #[error("Failed to launch '{tool}': {source}. Is it installed and on your PATH?")]
    ToolLaunch {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("'{tool}' failed with {exit}")]
    ToolFailed { tool: String, exit: ToolExit },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for page operations
pub type PageResult<T> = Result<T, PageError>;

impl PageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PageError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is one of the subprocess failures
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, PageError::ToolLaunch { .. } | PageError::ToolFailed { .. })
    }

    /// Process exit status reported for this error
    ///
    /// - 3: generate refused to overwrite an existing page
    /// - 4: an external tool could not start or failed
    /// - 5: the page (or category directory) does not exist
    /// - 1: anything else
    ///
    /// 2 is left to clap, which uses it for usage errors.
    pub fn exit_status(&self) -> u8 {
        match self {
            PageError::NotFound { .. } => 5,
            PageError::AlreadyExists { .. } => 3,
            PageError::ToolLaunch { .. } | PageError::ToolFailed { .. } => 4,
            PageError::PathResolution(_) | PageError::InvalidName(_) | PageError::Io { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nani_core::Category;

    #[test]
    fn test_exit_statuses_never_collide_with_usage_errors() {
        let errors = [
            PageError::NotFound {
                what: "The man page 'tar'".to_string(),
                path: PathBuf::from("man/tar.md"),
            },
            PageError::AlreadyExists {
                page: PageRef::new(Category::Man, "tar").unwrap(),
                path: PathBuf::from("man/tar.md"),
            },
            PageError::ToolFailed {
                tool: "hugo".to_string(),
                exit: ToolExit::from_code(1),
            },
            PageError::io("man", io::Error::other("boom")),
        ];

        let statuses: Vec<u8> = errors.iter().map(PageError::exit_status).collect();
        assert_eq!(statuses, vec![5, 3, 4, 1]);
        assert!(!statuses.contains(&2));
    }
}
