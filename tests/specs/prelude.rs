//! Shared helpers for running the `condo` binary in specs.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Builder for one `condo` invocation.
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    cwd: Option<PathBuf>,
}

pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), envs: Vec::new(), cwd: None }
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((key.to_string(), value.as_ref().display().to_string()));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    fn output(self) -> Output {
        let mut cmd = assert_cmd::Command::cargo_bin("condo").unwrap();
        cmd.args(&self.args);
        cmd.env_remove("CONDO_CLUSTERS_DIR");
        cmd.env_remove("CONDO_CONFIG");
        cmd.env_remove("CONDO_LOG");
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.output().unwrap()
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> RunAssert {
        let run = RunAssert::from(self.output());
        assert!(run.code == Some(0), "expected success, got {:?}\n{}", run.code, run.describe());
        run
    }

    /// Run and assert a nonzero exit code.
    pub fn fails(self) -> RunAssert {
        let run = RunAssert::from(self.output());
        assert!(run.code != Some(0), "expected failure\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl From<Output> for RunAssert {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    fn describe(&self) -> String {
        format!("--- stdout ---\n{}\n--- stderr ---\n{}", self.stdout, self.stderr)
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.code, Some(expected), "{}", self.describe());
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {:?}\n{}", needle, self.describe());
        self
    }
}

/// Scratch directory used as CONDO_CLUSTERS_DIR.
pub struct Clusters {
    dir: TempDir,
}

impl Clusters {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `condo` pointed at this directory, with an empty PATH so no
    /// external tool can be found.
    pub fn condo(&self) -> CliBuilder {
        cli()
            .env("CONDO_CLUSTERS_DIR", self.path())
            .env("PATH", "")
            .current_dir(self.path())
    }
}
