// crates/nani-core/src/config.rs - Configuration System
//
// This module provides the configuration schema and loading mechanism for
// the nani CLI tool. Configuration only chooses WHICH external tools run and
// a couple of layout details; it can never move the base directory.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Environment variables (NANI_EDITOR, NANI_VIEWER)
// 2. Base-directory config file (<base>/.nani/config.toml)
// 3. Global config file (~/.config/nani/config.toml)
// 4. Built-in defaults
//
// MERGING:
// A file replaces every section it mentions. A file containing only an
// `[editor]` table leaves the viewer, deploy and layout settings inherited
// from the layer below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::tool::ToolCommand;

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema for the nani tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaniConfig {
    /// Editor used by generate and edit
    #[serde(default)]
    pub editor: EditorConfig,

    /// Markdown renderer used by `man <name> --view`
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Site build and publish commands used by `deploy`
    #[serde(default)]
    pub deploy: DeployConfig,

    /// File naming details of the page tree
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Editor integration settings
///
/// When `command` is unset the CLI falls back to `VISUAL`, then `EDITOR`,
/// then `vim`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Editor command, may include arguments ("code --wait")
    pub command: Option<String>,

    /// Extra arguments placed before the file path
    #[serde(default)]
    pub args: Vec<String>,
}

/// Terminal markdown renderer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_viewer")]
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl ViewerConfig {
    pub fn tool(&self) -> Option<ToolCommand> {
        let mut tool = ToolCommand::parse(&self.command)?;
        tool.args.extend(self.args.iter().cloned());
        Some(tool)
    }
}

/// Static site build and publish commands, run from the base directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_build")]
    pub build: Vec<String>,

    #[serde(default = "default_publish")]
    pub publish: Vec<String>,
}

impl DeployConfig {
    pub fn build_tool(&self) -> Option<ToolCommand> {
        ToolCommand::from_argv(&self.build)
    }

    pub fn publish_tool(&self) -> Option<ToolCommand> {
        ToolCommand::from_argv(&self.publish)
    }
}

/// Page file naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Extension appended to page names and template names
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Section index written by the site generator, hidden from listings
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

/// On-disk shape of a single config file
///
/// Every section is optional so that a file only overrides what it names.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    editor: Option<EditorConfig>,
    viewer: Option<ViewerConfig>,
    deploy: Option<DeployConfig>,
    layout: Option<LayoutConfig>,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Directory, relative to the base directory, holding the local config
    pub const LOCAL_DIR: &'static str = ".nani";

    /// Load complete configuration for the tree rooted at `base_dir`
    ///
    /// Missing files are not errors. Invalid TOML and invalid values are.
    pub fn load_config(base_dir: &Path) -> ConfigResult<NaniConfig> {
        let mut layers = Vec::new();
        if let Some(global) = Self::global_config_path() {
            layers.push(global);
        }
        layers.push(Self::local_config_path(base_dir));

        let mut config = Self::load_layered(&layers)?;
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Path of the config file kept next to the pages
    pub fn local_config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(Self::LOCAL_DIR).join("config.toml")
    }

    /// Path of the per-user config file
    ///
    /// - Linux: ~/.config/nani/config.toml
    /// - macOS: ~/Library/Application Support/nani/config.toml
    /// - Windows: %APPDATA%\nani\config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nani").join("config.toml"))
    }

    /// Merge the given files over the defaults, later files winning
    pub fn load_layered(paths: &[PathBuf]) -> ConfigResult<NaniConfig> {
        let mut config = NaniConfig::default();

        for path in paths {
            if let Some(file) = Self::try_load_file(path)? {
                debug!(path = %path.display(), "applying config file");
                Self::merge_file(&mut config, file);
            }
        }

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// - NANI_EDITOR -> editor.command
    /// - NANI_VIEWER -> viewer.command
    ///
    /// `lookup` is injected so callers can test without touching the real
    /// process environment.
    pub fn apply_env_overrides<F>(config: &mut NaniConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(editor) = lookup("NANI_EDITOR").filter(|v| !v.trim().is_empty()) {
            config.editor.command = Some(editor);
        }

        if let Some(viewer) = lookup("NANI_VIEWER").filter(|v| !v.trim().is_empty()) {
            config.viewer.command = viewer;
        }
    }

    /// Catch configuration that would only fail once a page operation runs
    pub fn validate_config(config: &NaniConfig) -> ConfigResult<()> {
        if let Some(command) = &config.editor.command {
            if command.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "editor.command cannot be empty; remove it to use $EDITOR".to_string(),
                ));
            }
        }

        if config.viewer.tool().is_none() {
            return Err(ConfigError::ValidationError(
                "viewer.command cannot be empty".to_string(),
            ));
        }

        if config.deploy.build_tool().is_none() {
            return Err(ConfigError::ValidationError(
                "deploy.build must name a program".to_string(),
            ));
        }

        if config.deploy.publish_tool().is_none() {
            return Err(ConfigError::ValidationError(
                "deploy.publish must name a program".to_string(),
            ));
        }

        if config.layout.index_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "layout.index_file cannot be empty".to_string(),
            ));
        }

        if config.layout.extension.contains('/') || config.layout.extension.contains('\\') {
            return Err(ConfigError::ValidationError(format!(
                "layout.extension '{}' cannot contain a path separator",
                config.layout.extension
            )));
        }

        Ok(())
    }

    /// Generate the commented configuration file written by `nani init`
    pub fn generate_default_config() -> String {
        r#"# Nani Configuration File
#
# This file controls which external tools nani runs for this page tree.
# Lines starting with # are comments and are ignored.

[editor]
# Editor command (overrides VISUAL and EDITOR; NANI_EDITOR overrides this)
# command = "nvim"

# Arguments placed before the file path
# args = []

[viewer]
# Terminal markdown renderer used by `nani man <name> --view`
command = "glow"
# args = ["--pager"]

[deploy]
# Run from the base directory; publish only runs if build succeeds
build = ["hugo", "--gc", "--minify"]
publish = ["netlify", "deploy", "--prod"]

[layout]
# Extension appended to page and template names
extension = "md"

# Site generator section index, hidden from `nani ls`
index_file = "_index.md"
"#
        .to_string()
    }

    fn try_load_file(path: &Path) -> ConfigResult<Option<ConfigFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;

        Ok(Some(file))
    }

    fn merge_file(config: &mut NaniConfig, file: ConfigFile) {
        if let Some(editor) = file.editor {
            config.editor = editor;
        }
        if let Some(viewer) = file.viewer {
            config.viewer = viewer;
        }
        if let Some(deploy) = file.deploy {
            config.deploy = deploy;
        }
        if let Some(layout) = file.layout {
            config.layout = layout;
        }
    }
}

// Default value implementations for serde

fn default_viewer() -> String {
    "glow".to_string()
}

fn default_build() -> Vec<String> {
    vec!["hugo".to_string(), "--gc".to_string(), "--minify".to_string()]
}

fn default_publish() -> Vec<String> {
    vec![
        "netlify".to_string(),
        "deploy".to_string(),
        "--prod".to_string(),
    ]
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_index_file() -> String {
    "_index.md".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            command: default_viewer(),
            args: vec![],
        }
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            build: default_build(),
            publish: default_publish(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            index_file: default_index_file(),
        }
    }
}
