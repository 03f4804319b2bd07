//! # Discovery Error Taxonomy
//!
//! Failures raised by hardware enumeration and network scanning.
//!
//! These errors never cross the public boundary: `discover_hardware` and
//! `scan_networks` log them and degrade to an empty result, so callers see
//! today's "empty means nothing found *or* tool failed" behavior while the
//! distinction stays visible in the logs.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The external tool is not installed or not on PATH.
    #[error("tool `{tool}` not found")]
    ToolMissing { tool: String },

    /// The external tool ran but exited non-zero.
    #[error("tool `{tool}` failed: {detail}")]
    ToolFailed { tool: String, detail: String },

    /// The tool or a filesystem path refused access.
    #[error("permission denied for `{what}`")]
    PermissionDenied { what: String },

    /// No discovery strategy exists for the current platform.
    #[error("platform not supported")]
    PlatformUnsupported,

    /// Output was produced but did not match the expected grammar.
    #[error("malformed output from `{tool}`")]
    MalformedOutput { tool: String },

    /// Filesystem enumeration failed for a reason other than permissions.
    #[error("io error reading `{what}`: {source}")]
    Io {
        what: String,
        #[source]
        source: io::Error,
    },
}

impl DiscoveryError {
    /// Classifies a spawn failure for `tool` by the io error kind.
    pub fn from_spawn(tool: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::ToolMissing {
                tool: tool.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                what: tool.to_string(),
            },
            _ => Self::Io {
                what: tool.to_string(),
                source: err,
            },
        }
    }

    /// Classifies a directory-read failure for `path`.
    pub fn from_read_dir(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                what: path.to_string(),
            },
            _ => Self::Io {
                what: path.to_string(),
                source: err,
            },
        }
    }
}
