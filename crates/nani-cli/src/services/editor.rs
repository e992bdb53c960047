// crates/nani-cli/src/services/editor.rs - Editor Integration Service
//
// This service decides which editor opens a page. It does not launch
// anything itself; launching goes through the ToolRunner so that page
// operations can roll back when the editor fails.

use nani_core::ToolCommand;
use nani_core::config::EditorConfig;

/// Handles editor selection
///
/// EDITOR SELECTION HIERARCHY:
/// 1. NANI_EDITOR environment variable (folded into `editor.command` by
///    the config loader)
/// 2. `[editor] command` in a config file
/// 3. VISUAL environment variable
/// 4. EDITOR environment variable
/// 5. vim
///
/// EXAMPLES:
/// ```bash
/// export NANI_EDITOR="hx"             # Use Helix for nani only
/// export EDITOR="code --wait"         # Use VS Code for everything
/// ```
#[derive(Debug, Clone)]
pub struct EditorService {
    command: ToolCommand,
}

impl EditorService {
    pub const FALLBACK: &'static str = "vim";

    /// Resolve the editor from configuration and the process environment
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    /// Resolve the editor with an injected environment lookup
    pub fn resolve<F>(config: &EditorConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut command = config
            .command
            .as_deref()
            .and_then(ToolCommand::parse)
            .or_else(|| lookup("VISUAL").as_deref().and_then(ToolCommand::parse))
            .or_else(|| lookup("EDITOR").as_deref().and_then(ToolCommand::parse))
            .unwrap_or_else(|| ToolCommand::new(Self::FALLBACK, &[]));

        command.args.extend(config.args.iter().cloned());

        Self { command }
    }

    pub fn command(&self) -> &ToolCommand {
        &self.command
    }
}
