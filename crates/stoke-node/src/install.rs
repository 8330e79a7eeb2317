//! Front-end dependency installation.

use std::path::Path;
use std::process::ExitStatus;

use tokio::process::Command;

/// Errors from the `npm install` step.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("Failed to run `npm install`: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("`npm install` failed with {0}")]
    Failed(ExitStatus),
}

/// What `ensure_dependencies` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `npm install` ran to completion
    Installed,

    /// Skipped because node_modules is already present
    AlreadyPresent,

    /// Skipped on request
    Skipped,
}

/// Decide whether `npm install` should run.
///
/// Forced installs always run; otherwise installation runs only when it
/// was not skipped and node_modules is missing.
pub fn should_install(force: bool, skip: bool, node_modules_present: bool) -> bool {
    force || (!skip && !node_modules_present)
}

/// Install npm dependencies in `project_dir` when needed.
///
/// The install command inherits stdout/stderr so npm's progress output
/// goes straight to the console. A non-zero install is fatal to the run.
pub async fn ensure_dependencies(
    npm: &Path,
    project_dir: &Path,
    force: bool,
    skip: bool,
) -> Result<InstallOutcome, InstallError> {
    let node_modules = project_dir.join("node_modules");

    if !should_install(force, skip, node_modules.exists()) {
        if skip {
            tracing::info!("Skipping npm install (--skip-install)");
            return Ok(InstallOutcome::Skipped);
        }

        tracing::info!(
            "Dependencies already installed (node_modules exists), skipping npm install"
        );
        return Ok(InstallOutcome::AlreadyPresent);
    }

    tracing::info!("Running npm install...");

    let status = Command::new(npm)
        .arg("install")
        .current_dir(project_dir)
        .status()
        .await?;

    if !status.success() {
        return Err(InstallError::Failed(status));
    }

    Ok(InstallOutcome::Installed)
}
