//! Common test utilities for assetmap CLI tests.
//!
//! `TestEnv` is an isolated project directory (plus an empty user config
//! directory) with helpers to run the `assetmap` binary inside it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Realistic webpack stats dump
pub const WEBPACK_STATS: &str = include_str!("../fixtures/webpack-stats.json");

/// Result of running an assetmap CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }

    /// First event with the given `event` field
    pub fn event(&self, name: &str) -> serde_json::Value {
        self.events()
            .into_iter()
            .find(|e| e["event"] == name)
            .unwrap_or_else(|| panic!("no '{name}' event in:\n{}", self.stdout))
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
        }
    }

    /// Environment with `dist/stats.json` holding the webpack fixture
    pub fn with_webpack_stats() -> Self {
        let env = Self::new();
        env.write_file("dist/stats.json", WEBPACK_STATS);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_assetmap"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("RUST_LOG");
        for var in [
            "ASSETMAP_BASE_PATH",
            "ASSETMAP_FILE_NAME",
            "ASSETMAP_STRIP_PATTERN",
            "ASSETMAP_TRANSFORM_EXTENSIONS",
            "ASSETMAP_IMAGE_EXTENSIONS",
            "ASSETMAP_VERBOSITY",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute assetmap");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}
