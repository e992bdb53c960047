use anyhow::{Context as AnyhowContext, Result};
use nani_core::{ConfigManager, Layout};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PageError;
use crate::services::{PageService, PageStore, SystemRunner, Toolset};

/// Application context that gets passed to command handlers
///
/// Built once per invocation from the parsed arguments. Holds the resolved
/// base directory and the page service wired to real processes.
pub struct Context {
    base_dir: PathBuf,
    pages: PageService<SystemRunner>,
}

impl Context {
    /// Create the context for `base_dir`, or for the executable's directory
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => executable_dir()?,
        };
        debug!(base_dir = %base_dir.display(), "resolved base directory");

        let config = ConfigManager::load_config(&base_dir)
            .with_context(|| format!("Failed to load configuration for {}", base_dir.display()))?;
        let tools = Toolset::from_config(&config)?;
        debug!(editor = %tools.editor, viewer = %tools.viewer, "resolved tools");

        let layout = Layout::new(base_dir.clone(), &config.layout);
        let pages = PageService::new(PageStore::new(layout), tools, SystemRunner);

        Ok(Self { base_dir, pages })
    }

    pub fn pages(&self) -> &PageService<SystemRunner> {
        &self.pages
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Absolute directory containing the running executable
///
/// Symlinks to the binary are resolved so a `~/bin/nani` link still finds
/// the page tree next to the real executable.
pub fn executable_dir() -> Result<PathBuf, PageError> {
    let exe = env::current_exe().map_err(PageError::PathResolution)?;
    let exe = exe.canonicalize().map_err(PageError::PathResolution)?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        PageError::PathResolution(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}
