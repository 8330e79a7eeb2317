//! Node.js toolchain discovery and dev-server process management for stoke.
//!
//! Locates `node`/`npm` on the search path, installs front-end
//! dependencies when they are missing, and runs the Vite dev server as a
//! child process with its output streamed to the console.

pub mod install;
pub mod server;
pub mod toolchain;

pub use install::{ensure_dependencies, InstallError, InstallOutcome};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use toolchain::{NodeToolchain, ToolchainError};
