//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including an
//! isolated test environment with its own data directory and convenience
//! wrappers for the common booking flow.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the groundbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet; groundbook will create
    /// it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("groundbook-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("groundbook").expect("Failed to find groundbook binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Register a ground and return its id.
    ///
    /// # Panics
    /// Panics if the command fails or does not print a valid id.
    pub fn add_ground(&self, name: &str, unit_price: i64) -> i64 {
        let output = self
            .command()
            .args(["ground", "add", name, "--unit-price", &unit_price.to_string()])
            .output()
            .expect("Failed to run ground add command");

        assert!(
            output.status.success(),
            "ground add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Register a user and return its id.
    pub fn add_user(&self, name: &str) -> i64 {
        let output = self
            .command()
            .args(["user", "add", name])
            .output()
            .expect("Failed to run user add command");

        assert!(
            output.status.success(),
            "user add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Book a slot and return the reservation id.
    pub fn book(&self, ground: i64, user: i64, start: &str, hours: u32) -> i64 {
        let output = self
            .command()
            .args([
                "book",
                "--ground",
                &ground.to_string(),
                "--user",
                &user.to_string(),
                "--start",
                start,
                "--hours",
                &hours.to_string(),
            ])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// List reservations and return stdout.
    pub fn list(&self) -> String {
        let output = self
            .command()
            .arg("list")
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to parse an id from command output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output.trim().parse().expect("Output is not a valid id")
}
