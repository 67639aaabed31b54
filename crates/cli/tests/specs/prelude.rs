//! Shared builders for driving the binary.

use std::path::{Path, PathBuf};
use std::process::Output;

pub use gfs_core::test_support::long_scenario;

/// A `gfs` invocation with a clean environment.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::cargo_bin("gfs").unwrap();
    cmd.env_remove("GFS_CONFIG").env_remove("GFS_LOG").env("NO_COLOR", "1");
    Cli { cmd }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.cmd.write_stdin(input);
        self
    }

    /// Feed `lines` on stdin, newline terminated.
    pub fn lines<S: AsRef<str>>(self, lines: &[S]) -> Self {
        let mut input = String::new();
        for line in lines {
            input.push_str(line.as_ref());
            input.push('\n');
        }
        self.stdin(input)
    }

    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(run.output.status.success(), "expected success, got {}", run.describe());
        run
    }

    pub fn fails(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(!run.output.status.success(), "expected failure, got {}", run.describe());
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    fn describe(&self) -> String {
        format!(
            "{}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status,
            self.stdout(),
            String::from_utf8_lossy(&self.output.stderr)
        )
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout().lines().map(str::to_string).collect()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(self.stdout().contains(expected), "stdout lacks {expected:?}: {}", self.describe());
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(stderr.contains(expected), "stderr lacks {expected:?}: {}", self.describe());
        self
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(expected), "{}", self.describe());
        self
    }
}

/// A scratch directory for config files.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// `backups/YYYYMMDDhh0102.tar` for each hour of `years`, oldest first.
pub fn hourly_backups(years: std::ops::Range<i32>) -> Vec<String> {
    gfs_core::test_support::hourly_records(years)
        .iter()
        .map(|r| backup_name(&r.timestamp().format("%Y%m%d%H%M%S").to_string()))
        .collect()
}

pub fn backup_name(digits: &str) -> String {
    format!("backups/{digits}.tar")
}

/// Turn a `YYYY/MM/DD/HH` test record name into the matching backup name.
pub fn hour_backup(record_name: &str) -> String {
    backup_name(&format!("{}0102", record_name.replace('/', "")))
}

/// The flags that reproduce the 28/8/5/13/3 rotation with minutes disabled.
pub const ROTATION: &[&str] = &[
    "--minutes", "0", "--hours", "28", "--days", "8", "--weeks", "5", "--months", "13", "--years",
    "3",
];
