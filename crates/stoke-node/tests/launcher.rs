//! End-to-end launcher tests against a fake npm executable.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use stoke_node::{ensure_dependencies, DevServer, DevServerConfig, InstallError, InstallOutcome};

/// Write an executable `npm` stand-in into `dir`.
fn fake_npm(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("npm");
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

#[tokio::test]
async fn propagates_child_exit_code() {
    let temp = TempDir::new().unwrap();
    let npm = fake_npm(temp.path(), "exit 3");

    let config = DevServerConfig {
        project_dir: temp.path().to_path_buf(),
        ..Default::default()
    };

    let code = DevServer::new(npm, config).start().await.unwrap();

    assert_eq!(code, 3);
}

#[tokio::test]
async fn clean_exit_is_zero() {
    let temp = TempDir::new().unwrap();
    let npm = fake_npm(temp.path(), "exit 0");

    let config = DevServerConfig {
        project_dir: temp.path().to_path_buf(),
        ..Default::default()
    };

    let code = DevServer::new(npm, config).start().await.unwrap();

    assert_eq!(code, 0);
}

#[tokio::test]
async fn forwards_host_and_port_to_vite() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("args.txt");
    let npm = fake_npm(temp.path(), &format!("echo \"$@\" > \"{}\"", log.display()));

    let config = DevServerConfig {
        port: 8080,
        project_dir: temp.path().to_path_buf(),
        ..Default::default()
    };

    let code = DevServer::new(npm, config).start().await.unwrap();
    assert_eq!(code, 0);

    let recorded = fs::read_to_string(&log).unwrap();
    assert_eq!(recorded.trim(), "run dev -- --host localhost --port 8080");
}

#[tokio::test]
async fn install_runs_when_marker_missing() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("install.txt");
    let npm = fake_npm(temp.path(), &format!("echo \"$@\" > \"{}\"", log.display()));

    let outcome = ensure_dependencies(&npm, temp.path(), false, false)
        .await
        .unwrap();

    assert_eq!(outcome, InstallOutcome::Installed);
    assert_eq!(fs::read_to_string(&log).unwrap().trim(), "install");
}

#[tokio::test]
async fn failing_install_is_fatal() {
    let temp = TempDir::new().unwrap();
    let npm = fake_npm(temp.path(), "exit 1");

    let err = ensure_dependencies(&npm, temp.path(), true, false)
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::Failed(_)));
}
