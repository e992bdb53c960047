// crates/nani-cli/src/services/runner.rs - External Process Capability
//
// Every external program the tool starts (editor, renderer, site builder,
// deploy client) goes through the one narrow trait in this file. Page
// operations depend on the trait, never on std::process directly, so the
// lifecycle can be exercised in tests without spawning anything.

use nani_core::{Invocation, ToolExit};
use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

/// Run an external tool to completion
///
/// Contract:
/// - standard streams are inherited, nothing is captured
/// - the call blocks until the process exits
/// - `Err` means the process could not be started at all
/// - `Ok(exit)` reports how it finished, successful or not
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolExit>;
}

/// Runs tools as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolExit> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &invocation.dir {
            cmd.current_dir(dir);
        }

        debug!(command = %invocation, dir = ?invocation.dir, "spawning tool");
        let status = cmd.status()?;
        debug!(command = %invocation, %status, "tool finished");

        Ok(ToolExit::from(status))
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use nani_core::ToolCommand;

    #[test]
    fn test_system_runner_reports_exit_codes() {
        let ok = SystemRunner.run(&ToolCommand::new("true", &[]).invocation()).unwrap();
        assert!(ok.success());

        let failed = SystemRunner.run(&ToolCommand::new("false", &[]).invocation()).unwrap();
        assert!(!failed.success());
    }

    #[test]
    fn test_system_runner_launch_failure_is_error() {
        let result = SystemRunner.run(
            &ToolCommand::new("nani-definitely-not-installed", &[]).invocation(),
        );
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
