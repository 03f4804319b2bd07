//! Subprocess plumbing shared by the discovery and scan modules.
//!
//! Each call spawns one child process and blocks until it exits; there is no
//! shared state between calls.

use std::process::Command;

use skymap_common::error::DiscoveryError;

/// Runs `tool` with `args` and returns its stdout as text.
///
/// Non-zero exit becomes [`DiscoveryError::ToolFailed`] with trimmed stderr
/// attached; stdout is decoded lossily so odd bytes from drivers never abort
/// a scan.
pub(crate) fn run_tool(tool: &str, args: &[&str]) -> Result<String, DiscoveryError> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|err| DiscoveryError::from_spawn(tool, err))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DiscoveryError::ToolFailed {
            tool: tool.to_string(),
            detail: format!("{}: {}", output.status, stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs `tool` with `args`, inheriting stdio, and waits for it to exit.
///
/// Used by the monitor-mode wrappers, which care only about completion.
pub(crate) fn run_tool_status(tool: &str, args: &[&str]) -> Result<(), DiscoveryError> {
    let status = Command::new(tool)
        .args(args)
        .status()
        .map_err(|err| DiscoveryError::from_spawn(tool, err))?;

    if !status.success() {
        return Err(DiscoveryError::ToolFailed {
            tool: tool.to_string(),
            detail: status.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_classified() {
        let err = run_tool("skymap-no-such-tool", &[]).unwrap_err();
        assert!(matches!(err, DiscoveryError::ToolMissing { .. }));
    }
}
