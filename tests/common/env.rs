//! Isolated environment for running the errpage binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running an errpage CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

/// Temp directory plus helpers to run the CLI inside it
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_errpage")),
        }
    }

    /// Canonical path of the temp root (temp dirs are symlinked on macOS)
    pub fn canonical_root(&self) -> PathBuf {
        self.root.path().canonicalize().unwrap()
    }

    /// Path relative to the temp root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.canonical_root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env_remove("ERRPAGE_LOCATION")
            .env_remove("ERRPAGE_LANGUAGE")
            .env_remove("ERRPAGE_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        run_command(&mut cmd)
    }
}

fn run_command(cmd: &mut Command) -> TestResult {
    let output = cmd.output().expect("failed to run errpage");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Display form of a path, for comparing against CLI output
pub fn display(path: &Path) -> String {
    path.display().to_string()
}
