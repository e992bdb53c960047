// crates/nani-cli/src/services/pages.rs - Page Lifecycle
//
// A page only ever has two states, Absent and Present, and existence on disk
// is the whole state machine:
//
//   Absent --generate--> Present --edit--> Present --delete--> Absent
//
// ROLLBACK POLICY:
// Only files an operation created itself are rolled back. A generate whose
// editor fails removes the new page, along with any category directories it
// had to create for it; an edit whose editor fails leaves the existing page
// exactly as the editor left it.

use nani_core::config::{ConfigError, NaniConfig};
use nani_core::{Category, ConfigManager, Invocation, PageRef, ToolCommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{PageError, PageResult};
use crate::services::{EditorService, PageStore, ToolRunner};

/// The external commands page operations may run
#[derive(Debug, Clone)]
pub struct Toolset {
    pub editor: ToolCommand,
    pub viewer: ToolCommand,
    pub build: ToolCommand,
    pub publish: ToolCommand,
}

impl Toolset {
    pub fn from_config(config: &NaniConfig) -> Result<Self, ConfigError> {
        let missing = |what: &str| ConfigError::ValidationError(format!("{} is not set", what));

        Ok(Self {
            editor: EditorService::from_config(&config.editor).command().clone(),
            viewer: config.viewer.tool().ok_or_else(|| missing("viewer.command"))?,
            build: config.deploy.build_tool().ok_or_else(|| missing("deploy.build"))?,
            publish: config
                .deploy
                .publish_tool()
                .ok_or_else(|| missing("deploy.publish"))?,
        })
    }
}

/// Result of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// Nothing was there; deleting is idempotent
    Absent,
}

/// Result of ensuring the site symlink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Created,
    AlreadyPresent,
}

/// Implements generate / delete / edit / list / view / deploy / link / init
pub struct PageService<R: ToolRunner> {
    store: PageStore,
    tools: Toolset,
    runner: R,
}

impl<R: ToolRunner> PageService<R> {
    pub fn new(store: PageStore, tools: Toolset, runner: R) -> Self {
        Self {
            store,
            tools,
            runner,
        }
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    /// Create a page, seed it from the category template, open the editor
    ///
    /// Never overwrites: an existing page is `AlreadyExists`. If seeding or
    /// the editor fails, the new file is removed again.
    pub fn generate(&self, page: &PageRef) -> PageResult<PathBuf> {
        let path = self.store.page_path(page);

        if self.store.exists(&path) {
            return Err(PageError::AlreadyExists {
                page: page.clone(),
                path,
            });
        }

        let created_dirs = self.store.create_empty(&path)?;
        info!(page = %page, path = %path.display(), "created page");

        // Follows symlinks: a dangling template link means no template
        let template = self.store.layout().template_path(page.category());
        if template.exists() {
            if let Err(e) = self.store.copy_template(&template, &path) {
                warn!(page = %page, "seeding from the template failed, removing the new page");
                self.roll_back(&path, &created_dirs);
                return Err(e);
            }
        }

        if let Err(e) = self.open_in_editor(&path) {
            warn!(page = %page, "editor failed, removing the new page");
            self.roll_back(&path, &created_dirs);
            return Err(e);
        }

        Ok(path)
    }

    /// Remove a page; a missing page is a successful no-op
    pub fn delete(&self, page: &PageRef) -> PageResult<Removal> {
        let path = self.store.page_path(page);

        if !self.store.exists(&path) {
            warn!(
                "The {} page you want to delete does not exist: {}",
                page.category(),
                path.display()
            );
            return Ok(Removal::Absent);
        }

        self.store.remove(&path)?;
        info!(page = %page, path = %path.display(), "deleted page");
        Ok(Removal::Removed)
    }

    /// Open an existing page in the editor
    ///
    /// A missing page is `NotFound` and nothing is created; use generate.
    pub fn edit(&self, page: &PageRef) -> PageResult<PathBuf> {
        let path = self.require_page(page)?;
        self.open_in_editor(&path)?;
        Ok(path)
    }

    /// Page file names in a category, without the section index
    pub fn list(&self, category: Category) -> PageResult<Vec<String>> {
        self.store.list_category(category)
    }

    /// Render a man page to the terminal
    pub fn view_man(&self, name: &str) -> PageResult<()> {
        let page = PageRef::new(Category::Man, name)?;
        let path = self.require_page(&page)?;
        self.run_tool(&self.tools.viewer.invocation().arg(&path))
    }

    /// Build the site, then publish it; publish is skipped if build fails
    pub fn deploy(&self) -> PageResult<()> {
        let base = self.store.layout().base();

        info!(command = %self.tools.build, "building site");
        self.run_tool(&self.tools.build.invocation().current_dir(base))?;

        info!(command = %self.tools.publish, "publishing site");
        self.run_tool(&self.tools.publish.invocation().current_dir(base))
    }

    /// Ensure `content` links to `notes` so the site generator sees notes
    pub fn link(&self) -> PageResult<LinkState> {
        let layout = self.store.layout();
        let link = layout.site_content_link();

        if self.store.exists(&link) {
            return Ok(LinkState::AlreadyPresent);
        }

        self.store.ensure_dir(&layout.site_source_dir())?;
        self.store.symlink_dir(&layout.site_link_target(), &link)?;
        info!(link = %link.display(), "linked site content to notes");
        Ok(LinkState::Created)
    }

    /// Create the page tree skeleton and a commented config file
    ///
    /// Returns the paths that did not exist before.
    pub fn init(&self) -> PageResult<Vec<PathBuf>> {
        let layout = self.store.layout();
        let mut created = Vec::new();

        let mut dirs: Vec<PathBuf> = Category::ALL
            .iter()
            .map(|c| layout.category_dir(*c))
            .collect();
        dirs.push(layout.templates_dir());

        for dir in dirs {
            if self.store.ensure_dir(&dir)? {
                created.push(dir);
            }
        }

        let config_path = ConfigManager::local_config_path(layout.base());
        if self
            .store
            .write_new(&config_path, &ConfigManager::generate_default_config())?
        {
            created.push(config_path);
        }

        Ok(created)
    }

    fn require_page(&self, page: &PageRef) -> PageResult<PathBuf> {
        let path = self.store.page_path(page);
        if !self.store.exists(&path) {
            return Err(PageError::NotFound {
                what: format!("The {} page '{}'", page.category(), page.name()),
                path,
            });
        }
        Ok(path)
    }

    fn open_in_editor(&self, path: &Path) -> PageResult<()> {
        self.run_tool(&self.tools.editor.invocation().arg(path))
    }

    fn run_tool(&self, invocation: &Invocation) -> PageResult<()> {
        let exit = self
            .runner
            .run(invocation)
            .map_err(|source| PageError::ToolLaunch {
                tool: invocation.program.clone(),
                source,
            })?;

        if !exit.success() {
            return Err(PageError::ToolFailed {
                tool: invocation.to_string(),
                exit,
            });
        }

        Ok(())
    }

    fn roll_back(&self, path: &Path, created_dirs: &[PathBuf]) {
        if let Err(e) = self.store.remove(path) {
            warn!(path = %path.display(), error = %e, "rollback failed");
            return;
        }
        self.store.remove_empty_dirs(created_dirs);
    }
}
