//! Stoke CLI - launch the Vite dev server for a front-end project.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use stoke_node::{ensure_dependencies, DevServer, DevServerConfig, NodeToolchain, ServerError};

#[derive(Parser)]
#[command(name = "stoke")]
#[command(about = "Launch the Vite dev server for a front-end project")]
#[command(version)]
struct Cli {
    /// Host the dev server binds to
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port the dev server binds to
    #[arg(long, default_value = "5173")]
    port: u16,

    /// Skip npm install even if node_modules is missing
    #[arg(long)]
    skip_install: bool,

    /// Reinstall dependencies regardless of node_modules
    #[arg(long)]
    force_install: bool,

    /// Project directory containing package.json
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Open the browser once the server is started
    #[arg(long)]
    open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            1
        }
    };

    std::process::exit(code);
}

/// Resolve the toolchain, install dependencies, run the server.
///
/// Returns the process exit code; only `main` terminates the process.
async fn run(cli: Cli) -> Result<i32> {
    let toolchain = NodeToolchain::discover()?;
    tracing::info!("Using node at {}", toolchain.node.display());
    tracing::info!("Using npm at {}", toolchain.npm.display());

    ensure_dependencies(&toolchain.npm, &cli.dir, cli.force_install, cli.skip_install)
        .await
        .context("Dependency installation failed")?;

    let config = DevServerConfig {
        host: cli.host,
        port: cli.port,
        project_dir: cli.dir,
        open: cli.open,
    };

    let code = match DevServer::new(toolchain.npm, config).start().await {
        Ok(code) => code,
        // A server that never started is reported as a failure exit,
        // distinct from a server that ran and exited non-zero.
        Err(err @ ServerError::Spawn(_)) => {
            tracing::error!("{err}");
            1
        }
        Err(err) => return Err(err.into()),
    };

    if code != 0 {
        tracing::error!("Dev server exited with code {code}");
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_vite() {
        let cli = Cli::try_parse_from(["stoke"]).unwrap();

        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.port, 5173);
        assert!(!cli.skip_install);
        assert!(!cli.force_install);
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(!cli.open);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from(["stoke", "--skip-install", "--port", "8080"]).unwrap();

        assert!(cli.skip_install);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.host, "localhost");
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["stoke", "--port", "http"]).is_err());
    }
}
