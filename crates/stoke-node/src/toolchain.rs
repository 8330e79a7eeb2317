//! Node.js toolchain discovery.

use std::path::PathBuf;

/// Errors that can occur while resolving the toolchain.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    #[error("`{tool}` not found on PATH. Install Node.js (which bundles npm) and make sure it is on PATH.")]
    NotFound { tool: String },
}

/// Resolved locations of the Node.js tools the launcher needs.
#[derive(Debug, Clone)]
pub struct NodeToolchain {
    /// Absolute path to the `node` executable
    pub node: PathBuf,

    /// Absolute path to the `npm` executable
    pub npm: PathBuf,
}

impl NodeToolchain {
    /// Locate `node` and `npm` on the search path.
    pub fn discover() -> Result<Self, ToolchainError> {
        Ok(Self {
            node: resolve_tool("node")?,
            npm: resolve_tool("npm")?,
        })
    }
}

/// Resolve a logical tool name to the first matching executable on PATH.
pub fn resolve_tool(name: &str) -> Result<PathBuf, ToolchainError> {
    for candidate in candidates(name, cfg!(windows)) {
        if let Ok(path) = which::which(&candidate) {
            return Ok(path);
        }
    }

    Err(ToolchainError::NotFound {
        tool: name.to_string(),
    })
}

/// Candidate executable names in resolution order.
///
/// On Windows npm is usually installed as `npm.cmd`, so the `.cmd`
/// variant is tried before the bare name.
fn candidates(name: &str, windows: bool) -> Vec<String> {
    let mut names = vec![name.to_string()];
    if windows && !name.ends_with(".cmd") {
        names.insert(0, format!("{name}.cmd"));
    }
    names
}
