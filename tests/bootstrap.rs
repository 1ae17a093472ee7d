//! End-to-end checks of the shipped binary.

#![cfg(feature = "platform-entry")]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use gamehost::config::{CONFIG_ENV, CONFIG_FILE};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gamehost-e2e-{}-{}", std::process::id(), name))
}

fn scratch_config(name: &str, text: &str) -> PathBuf {
    let path = scratch_path(name);
    fs::write(&path, text).expect("could not write scratch config");
    path
}

fn gamehost() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_gamehost"));
    command.env("RUST_LOG", "error");
    command
}

#[test]
fn runs_to_completion_and_ignores_arguments() {
    let config = scratch_config("fast.toml", "[game]\nseed = 3\ntick_hz = 1000\nmax_steps = 16\n");

    let output = gamehost()
        .args(["--frobnicate", "xyzzy", ""])
        .env(CONFIG_ENV, &config)
        .output()
        .expect("could not spawn gamehost");
    fs::remove_file(&config).ok();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn without_the_env_var_the_working_directory_config_applies() {
    let dir = scratch_path("cwd");
    fs::create_dir_all(&dir).expect("could not create scratch directory");
    fs::write(
        dir.join(CONFIG_FILE),
        "[game]\nseed = 5\ntick_hz = 1000\nmax_steps = 8\n",
    )
    .expect("could not write scratch config");

    let output = gamehost()
        .env_remove(CONFIG_ENV)
        .env("RUST_LOG", "info")
        .current_dir(&dir)
        .output()
        .expect("could not spawn gamehost");
    fs::remove_dir_all(&dir).ok();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("budget of 8 steps"), "stderr: {}", stderr);
}

#[test]
fn a_config_fault_terminates_with_nonzero_status() {
    let config = scratch_config("broken.toml", "this is not toml");

    let output = gamehost()
        .env(CONFIG_ENV, &config)
        .output()
        .expect("could not spawn gamehost");
    fs::remove_file(&config).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("loading host configuration"),
        "stderr: {}",
        stderr
    );
}
