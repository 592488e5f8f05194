//! Throwaway git repositories for driving the `autopush` binary
//!
//! Each fixture owns a temp directory holding:
//! - `work/` - a checkout on `main` with one committed file and a copy of
//!   the binary (ignored via `.gitignore`)
//! - `remote.git/` - a bare repository registered as `origin`
//! - `home/` - an empty `HOME` so user and system git config stay out

#![allow(dead_code)]

use assert_cmd::Command as AssertCommand;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Name of the tracked file created by the fixture
pub const TRACKED_FILE: &str = "tracked.txt";

/// Whether a usable `git` is on `PATH`
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Path of the binary under test
pub fn autopush_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_autopush"))
}

/// Apply environment isolation shared by git and the binary.
fn isolate(cmd: &mut Command, root: &Path) {
    cmd.env("HOME", root.join("home"))
        .env("XDG_CONFIG_HOME", root.join("home"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_TERMINAL_PROMPT", "0")
        .env("GIT_CEILING_DIRECTORIES", root)
        .env("NO_COLOR", "1")
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .env_remove("GIT_INDEX_FILE");
}

/// Repository with a bare `origin` remote
pub struct RepoFixture {
    root: TempDir,
}

impl RepoFixture {
    /// Create the fixture, or `None` when git is not installed
    pub fn new() -> Option<Self> {
        if !git_available() {
            return None;
        }

        let root = TempDir::new().ok()?;
        fs::create_dir(root.path().join("home")).ok()?;
        fs::create_dir(root.path().join("work")).ok()?;

        let fixture = Self { root };
        fixture.git_in(fixture.root.path(), &["init", "--bare", "remote.git"]);

        fixture.git(&["init"]);
        fixture.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        fixture.git(&["config", "user.name", "Test Author"]);
        fixture.git(&["config", "user.email", "test@example.com"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);
        let remote = fixture.remote_path().display().to_string();
        fixture.git(&["remote", "add", "origin", &remote]);

        fixture.write(".gitignore", "autopush\nautopush.exe\n");
        fixture.write(TRACKED_FILE, "first\n");
        fixture.git(&["add", "."]);
        fixture.git(&["commit", "-m", "initial"]);

        fixture.install_binary_in(&fixture.work_path());
        Some(fixture)
    }

    /// Fixture root (not a repository)
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Checkout directory
    pub fn work_path(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Bare remote directory
    pub fn remote_path(&self) -> PathBuf {
        self.root.path().join("remote.git")
    }

    /// Copy the binary into `dir`, returning its new path
    pub fn install_binary_in(&self, dir: &Path) -> PathBuf {
        let target = dir.join(autopush_bin().file_name().unwrap());
        fs::copy(autopush_bin(), &target).expect("copy autopush binary");
        target
    }

    /// Write a file in the checkout
    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.work_path().join(name), contents).expect("write file");
    }

    /// Run git in the checkout, panicking on failure
    pub fn git(&self, args: &[&str]) -> String {
        self.git_in(&self.work_path(), args)
    }

    /// Run git in `dir`, panicking on failure
    pub fn git_in(&self, dir: &Path, args: &[&str]) -> String {
        let output = self.git_output_in(dir, args);
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Run git in `dir` and return the raw output
    pub fn git_output_in(&self, dir: &Path, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(dir);
        isolate(&mut cmd, self.root());
        cmd.output().expect("spawn git")
    }

    /// Commit `main` points to on the remote, if it exists
    pub fn remote_main(&self) -> Option<String> {
        let output = self.git_output_in(
            &self.remote_path(),
            &["rev-parse", "--verify", "--quiet", "refs/heads/main"],
        );
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Command for the binary at `bin`, started from the fixture root so
    /// the invoker's directory differs from the binary's
    pub fn autopush_at(&self, bin: &Path) -> AssertCommand {
        let mut std_cmd = Command::new(bin);
        std_cmd.current_dir(self.root());
        isolate(&mut std_cmd, self.root());
        AssertCommand::from_std(std_cmd)
    }

    /// Command for the binary installed in the checkout
    pub fn autopush(&self) -> AssertCommand {
        let bin = self.work_path().join(autopush_bin().file_name().unwrap());
        self.autopush_at(&bin)
    }
}
