// crates/nani-core/src/layout.rs - Page Layout and Path Resolution
//
// This module owns the on-disk contract of the tool: given a base directory,
// where does a page of a given category live, where is its template, and
// which directory does the site generator read from.
//
// LAYOUT (relative to the base directory):
// ```
// base/
// ├── man/<name>.md
// ├── notes/
// │   └── notes_all/<name>.md
// ├── templates/
// │   ├── man_template.md
// │   └── notes_template.md
// └── content -> notes        (symlink read by the site generator)
// ```
//
// DESIGN PRINCIPLES:
// - Pure functions: No I/O, only path computation
// - Explicit base: The base directory is always passed in, never discovered
// - Closed set: Categories are an enum, not free-form strings

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::config::LayoutConfig;

/// Errors raised while turning user input into a page reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unknown category '{0}'. Must be one of: man, notes")]
    UnknownCategory(String),

    #[error("Invalid page name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
}

/// The fixed set of page categories
///
/// Each category gets its own directory and its own template. The string
/// tag doubles as the directory name and the template prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Man,
    Notes,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Man, Category::Notes];

    /// String tag used for directory and template names
    pub fn tag(self) -> &'static str {
        match self {
            Category::Man => "man",
            Category::Notes => "notes",
        }
    }

    /// Name of the subdirectory pages live in, if the category has one
    ///
    /// Notes are kept one level down (`notes/notes_all/`) so that `notes/`
    /// itself can hold the site generator's section files next to them.
    pub fn pages_subdir(self) -> Option<&'static str> {
        match self {
            Category::Man => None,
            Category::Notes => Some("notes_all"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "man" => Ok(Category::Man),
            "notes" => Ok(Category::Notes),
            other => Err(LayoutError::UnknownCategory(other.to_string())),
        }
    }
}

/// A page identified by its category and user-supplied name
///
/// Construction validates the name so that every `PageRef` maps to a path
/// strictly inside its category directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef {
    category: Category,
    name: String,
}

impl PageRef {
    /// Validate `name` and build a reference to a page in `category`
    ///
    /// Rejected names:
    /// - empty or whitespace only
    /// - `.` and `..`
    /// - anything containing `/` or `\`
    /// - anything containing a NUL byte
    pub fn new(category: Category, name: impl Into<String>) -> Result<Self, LayoutError> {
        let name = name.into();

        let reason = if name.trim().is_empty() {
            Some("name cannot be empty")
        } else if name == "." || name == ".." {
            Some("name cannot be a relative directory")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain a path separator")
        } else if name.contains('\0') {
            Some("name cannot contain a NUL byte")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(LayoutError::InvalidName { name, reason }),
            None => Ok(Self { category, name }),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.name)
    }
}

/// Resolves every path the tool touches from a single base directory
#[derive(Debug, Clone)]
pub struct Layout {
    base: PathBuf,
    extension: String,
    index_file: String,
}

impl Layout {
    /// Directory holding the category templates
    pub const TEMPLATES_DIR: &'static str = "templates";

    /// Name of the symlink the site generator reads notes through
    pub const SITE_CONTENT_LINK: &'static str = "content";

    pub fn new(base: impl Into<PathBuf>, config: &LayoutConfig) -> Self {
        Self {
            base: base.into(),
            extension: config.extension.trim_start_matches('.').to_string(),
            index_file: config.index_file.clone(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn index_file(&self) -> &str {
        &self.index_file
    }

    /// Directory that directly contains the pages of `category`
    pub fn category_dir(&self, category: Category) -> PathBuf {
        let dir = self.base.join(category.tag());
        match category.pages_subdir() {
            Some(sub) => dir.join(sub),
            None => dir,
        }
    }

    /// Path of the page file, e.g. `base/notes/notes_all/bar.md`
    pub fn page_path(&self, page: &PageRef) -> PathBuf {
        self.category_dir(page.category()).join(self.with_extension(page.name()))
    }

    /// Path of the seed template, e.g. `base/templates/notes_template.md`
    pub fn template_path(&self, category: Category) -> PathBuf {
        self.templates_dir()
            .join(self.with_extension(&format!("{}_template", category.tag())))
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.base.join(Self::TEMPLATES_DIR)
    }

    /// Directory the site symlink points at
    pub fn site_source_dir(&self) -> PathBuf {
        self.base.join(Category::Notes.tag())
    }

    /// Location of the site symlink itself
    pub fn site_content_link(&self) -> PathBuf {
        self.base.join(Self::SITE_CONTENT_LINK)
    }

    /// Target stored in the site symlink, relative so the tree can move
    pub fn site_link_target(&self) -> PathBuf {
        PathBuf::from(Category::Notes.tag())
    }

    /// Whether a directory entry is the site generator's section index
    pub fn is_index_file(&self, file_name: &str) -> bool {
        file_name == self.index_file
    }

    fn with_extension(&self, stem: &str) -> String {
        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{}.{}", stem, self.extension)
        }
    }
}
