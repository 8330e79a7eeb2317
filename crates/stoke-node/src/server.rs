//! Dev-server process management.

use std::path::PathBuf;

use tokio::process::Command;

/// Configuration for the dev server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Host the server binds to
    pub host: String,

    /// Port the server binds to
    pub port: u16,

    /// Directory containing the front-end project
    pub project_dir: PathBuf,

    /// Open the browser once the server is started
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5173,
            project_dir: PathBuf::from("."),
            open: false,
        }
    }
}

/// Errors that can occur while running the dev server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to start `npm run dev`: {0}. Check PATH or reinstall Node.js/npm.")]
    Spawn(std::io::Error),

    #[error("Failed to wait for the dev server: {0}")]
    Wait(std::io::Error),
}

/// Vite dev server running as an npm child process.
pub struct DevServer {
    npm: PathBuf,
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new dev server.
    pub fn new(npm: PathBuf, config: DevServerConfig) -> Self {
        Self { npm, config }
    }

    /// Start the dev server and block until it exits.
    ///
    /// Returns the child's exit code. stdout/stderr are inherited so the
    /// server's output streams straight to the console.
    pub async fn start(self) -> Result<i32, ServerError> {
        let args = run_args(&self.config.host, self.config.port);

        tracing::info!(
            "Starting dev server: {} {}",
            self.npm.display(),
            args.join(" ")
        );

        let mut child = Command::new(&self.npm)
            .args(&args)
            .current_dir(&self.config.project_dir)
            .spawn()
            .map_err(ServerError::Spawn)?;

        if self.config.open {
            let url = format!("http://{}:{}", self.config.host, self.config.port);
            let _ = open::that(&url);
        }

        let status = child.wait().await.map_err(ServerError::Wait)?;

        // No code means the child died to a signal.
        Ok(status.code().unwrap_or(1))
    }
}

/// Arguments passed to npm to launch Vite with the requested binding.
fn run_args(host: &str, port: u16) -> Vec<String> {
    vec![
        "run".to_string(),
        "dev".to_string(),
        "--".to_string(),
        "--host".to_string(),
        host.to_string(),
        "--port".to_string(),
        port.to_string(),
    ]
}
