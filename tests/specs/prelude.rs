//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing lightning CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR points at a stale target directory.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // target/debug/deps/specs-<hash> -> target/debug/
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Returns a Command configured to run the lightning binary
pub fn lightning_cmd() -> Command {
    Command::new(binary_path("lightning"))
}

/// Create a CLI builder for lightning commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed content to the command's stdin
    pub fn stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.to_string());
        self
    }

    /// Build the command and the stdin it should be fed
    fn command(self) -> (Command, Option<String>) {
        let mut cmd = lightning_cmd();
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // Parent settings would change colors, verbosity or config lookup.
        for key in ["LIGHTNING_LOG", "LIGHTNING_CONFIG", "NO_COLOR", "COLOR"] {
            cmd.env_remove(key);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        (cmd, self.stdin)
    }

    fn output(self) -> Output {
        let (mut cmd, stdin) = self.command();
        cmd.stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("command should run");
        if let Some(content) = stdin {
            let mut pipe = child.stdin.take().unwrap();
            // A command that exits before reading closes the pipe early.
            let _ = pipe.write_all(content.as_bytes());
        }
        child.wait_with_output().expect("command should finish")
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.expect(true)
    }

    /// Run and expect a nonzero exit code
    pub fn fails(self) -> RunAssert {
        self.expect(false)
    }

    fn expect(self, success: bool) -> RunAssert {
        let run = RunAssert {
            output: self.output(),
        };
        assert_eq!(
            run.output.status.success(),
            success,
            "unexpected exit code {:?}\nstdout: {}\nstderr: {}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(expected), "exit code");
        self
    }

    /// Exact stdout match with a diff on failure. Prefer this for output
    /// formats so layout regressions show up.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        assert_contains("stdout", &self.stdout(), expected);
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert_contains("stderr", &self.stderr(), expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }
}

fn assert_contains(stream: &str, haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "{stream} does not contain {needle:?}\n{stream}: {haystack}"
    );
}

// =============================================================================
// Project
// =============================================================================

/// Temporary working directory holding run records and config.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// A lightning command running inside this project.
    pub fn lightning(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Extract and transform succeed, load fails with exit code 2.
pub const FAILED_ATTEMPT: &str = r#"{
  "id": "att-1",
  "runs": [
    { "job_id": "extract", "started_at_ms": 1000, "finished_at_ms": 2000, "exit_code": 0 },
    { "job_id": "transform", "started_at_ms": 2000, "finished_at_ms": 3500, "exit_code": 0 },
    { "job_id": "load", "started_at_ms": 3500, "finished_at_ms": 4000, "exit_code": 2 }
  ]
}
"#;

/// Same steps, load still running.
pub const RUNNING_ATTEMPT_TOML: &str = r#"id = "att-2"

[[runs]]
job_id = "extract"
started_at_ms = 1000
finished_at_ms = 2000
exit_code = 0

[[runs]]
job_id = "load"
started_at_ms = 2000
"#;

/// First attempt failed, retry succeeded.
pub const RETRIED_WORK_ORDER: &str = r#"{
  "id": "wo-7",
  "attempts": [
    {
      "id": "att-1",
      "runs": [
        { "job_id": "build", "started_at_ms": 0, "finished_at_ms": 5000, "exit_code": 1 }
      ]
    },
    {
      "id": "att-2",
      "runs": [
        { "job_id": "build", "started_at_ms": 10000, "finished_at_ms": 16000, "exit_code": 0 },
        { "job_id": "deploy", "started_at_ms": 16000, "finished_at_ms": 18000, "crashed": true }
      ]
    }
  ]
}
"#;
