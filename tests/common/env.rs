//! Test environment for isolated navtree runs.
//!
//! Every run happens inside a fresh temp directory so a stray
//! `navtree.toml` or `NAVTREE_*` variable cannot leak into the result.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a navtree CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line.
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {l:?}: {e}\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated working directory for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file relative to the working directory and return its path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, content).unwrap();
        path
    }

    /// Run navtree with ASCII output in the working directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run navtree with extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.dir.path(), args, env_vars)
    }
}

fn run_in(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_navtree"));
    cmd.current_dir(cwd).args(args).env("TERM", "dumb");
    for key in [
        "NAVTREE_DUPLICATE_IDS",
        "NAVTREE_DUPLICATE_LABELS",
        "NAVTREE_EMPTY_GROUPS",
        "NAVTREE_MAX_DEPTH",
        "NAVTREE_VERBOSITY",
        "NAVTREE_FORMAT",
    ] {
        cmd.env_remove(key);
    }
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
