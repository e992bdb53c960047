// crates/nani-cli/src/services/store.rs - File System Operations Service
//
// This service handles all file system operations on the page tree. It knows
// HOW to touch files but not WHY; the page lifecycle in pages.rs decides
// when to create, seed, remove or list.
//
// DESIGN PRINCIPLES:
// - Single Responsibility: Only handles file I/O operations
// - Injected Root: Every path comes from the Layout, which is built from an
//   explicit base directory
// - No Caching: Existence is checked against the disk on every call

use nani_core::{Category, Layout, PageRef};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PageError, PageResult};

/// Handles all file system operations on the page tree
pub struct PageStore {
    layout: Layout,
}

impl PageStore {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn page_path(&self, page: &PageRef) -> PathBuf {
        self.layout.page_path(page)
    }

    /// Whether any filesystem entry is present at `path`
    ///
    /// Uses `symlink_metadata` so a dangling symlink still counts as present;
    /// generate must never replace it.
    pub fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    /// Create an empty file, creating parent directories as needed
    ///
    /// Fails with `io::ErrorKind::AlreadyExists` rather than truncating an
    /// existing file. Returns the directories that had to be created, deepest
    /// first, so a caller can undo them.
    pub fn create_empty(&self, path: &Path) -> PageResult<Vec<PathBuf>> {
        let created_dirs: Vec<PathBuf> = path
            .ancestors()
            .skip(1)
            .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
            .map(Path::to_path_buf)
            .collect();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PageError::io(parent, e))?;
        }

        if let Err(e) = OpenOptions::new().write(true).create_new(true).open(path) {
            self.remove_empty_dirs(&created_dirs);
            return Err(PageError::io(path, e));
        }

        debug!(path = %path.display(), "created empty page");
        Ok(created_dirs)
    }

    /// Remove directories deepest first, stopping at the first non-empty one
    pub fn remove_empty_dirs(&self, dirs: &[PathBuf]) {
        for dir in dirs {
            if let Err(e) = fs::remove_dir(dir) {
                debug!(path = %dir.display(), error = %e, "left directory in place");
                break;
            }
            debug!(path = %dir.display(), "removed directory");
        }
    }

    /// Replace the contents of `target` with the full contents of `template`
    ///
    /// Only bytes are copied. The page keeps the permissions it was created
    /// with, even when the template is read-only.
    pub fn copy_template(&self, template: &Path, target: &Path) -> PageResult<()> {
        let content = fs::read(template).map_err(|e| PageError::io(template, e))?;
        fs::write(target, content).map_err(|e| PageError::io(target, e))?;
        debug!(
            template = %template.display(),
            target = %target.display(),
            "seeded page from template"
        );
        Ok(())
    }

    /// Remove a file, or a directory and everything below it
    pub fn remove(&self, path: &Path) -> PageResult<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| PageError::io(path, e))?;

        let result = if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| PageError::io(path, e))?;

        debug!(path = %path.display(), "removed");
        Ok(())
    }

    /// Names of the entries in a category directory, minus the section index
    /// and hidden entries
    ///
    /// Sorted by name for predictable output.
    pub fn list_category(&self, category: Category) -> PageResult<Vec<String>> {
        let dir = self.layout.category_dir(category);
        if !dir.is_dir() {
            return Err(PageError::NotFound {
                what: format!("The {} directory", category),
                path: dir,
            });
        }

        let entries = fs::read_dir(&dir).map_err(|e| PageError::io(&dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PageError::io(&dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Hidden entries are editor swap files and OS litter, never pages
            if !name.starts_with('.') && !self.layout.is_index_file(&name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Create a directory and its parents; returns whether it was created
    pub fn ensure_dir(&self, path: &Path) -> PageResult<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path).map_err(|e| PageError::io(path, e))?;
        debug!(path = %path.display(), "created directory");
        Ok(true)
    }

    /// Write `content` to a new file; returns false if the file exists
    pub fn write_new(&self, path: &Path, content: &str) -> PageResult<bool> {
        if self.exists(path) {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PageError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| PageError::io(path, e))?;
        Ok(true)
    }

    /// Create a directory symlink at `link` pointing to `target`
    pub fn symlink_dir(&self, target: &Path, link: &Path) -> PageResult<()> {
        symlink_dir(target, link).map_err(|e| PageError::io(link, e))?;
        debug!(
            target = %target.display(),
            link = %link.display(),
            "created symlink"
        );
        Ok(())
    }
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
