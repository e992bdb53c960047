// crates/nani-core/src/tool.rs - External Tool Descriptions
//
// The tool never links against an editor, renderer, site builder or deploy
// client. It only knows how to describe a process to run. Actually running
// it is the CLI crate's `ToolRunner`, which keeps this crate free of
// process spawning and lets tests substitute a fake.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// A configured command: program name plus leading arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build from an argv-style list, `["hugo", "--gc", "--minify"]`
    ///
    /// Returns `None` for an empty list or an empty program name.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Split a shell-style one-liner such as `"code --wait"` on whitespace
    ///
    /// No quoting rules are applied; editors configured through `EDITOR`
    /// rarely need them.
    pub fn parse(line: &str) -> Option<Self> {
        let argv: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        Self::from_argv(&argv)
    }

    /// Start an invocation of this command
    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: self.program.clone(),
            args: self.args.iter().map(OsString::from).collect(),
            dir: None,
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// A fully specified process to run: program, arguments, working directory
///
/// Built like `std::process::Command`, but plain data so it can be compared
/// and recorded in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub dir: Option<PathBuf>,
}

impl Invocation {
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How an external tool finished
///
/// `code` is `None` when the process was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    code: Option<i32>,
}

impl ToolExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signalled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ToolExit {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ToolExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_editor_line() {
        let cmd = ToolCommand::parse("code  --wait").unwrap();
        assert_eq!(cmd.program, "code");
        assert_eq!(cmd.args, vec!["--wait".to_string()]);
        assert!(ToolCommand::parse("   ").is_none());
    }

    #[test]
    fn test_from_argv_rejects_empty_program() {
        assert!(ToolCommand::from_argv(&[]).is_none());
        assert!(ToolCommand::from_argv(&["".to_string()]).is_none());
    }

    #[test]
    fn test_invocation_appends_after_configured_args() {
        let inv = ToolCommand::new("hx", &["--vsplit"])
            .invocation()
            .arg("/tmp/a.md")
            .current_dir("/tmp");
        assert_eq!(inv.program, "hx");
        assert_eq!(
            inv.args,
            vec![OsString::from("--vsplit"), OsString::from("/tmp/a.md")]
        );
        assert_eq!(inv.dir, Some(PathBuf::from("/tmp")));
        assert_eq!(inv.to_string(), "hx --vsplit /tmp/a.md");
    }

    #[test]
    fn test_exit_status() {
        assert!(ToolExit::from_code(0).success());
        assert!(!ToolExit::from_code(1).success());
        assert!(!ToolExit::signalled().success());
        assert_eq!(ToolExit::from_code(2).to_string(), "exit code 2");
    }
}
