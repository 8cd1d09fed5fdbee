//! Shared testing utilities for flask-svelte CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the CLI runs in by default; projects are created beneath it.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("flask-svelte").expect("Failed to locate binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path()).env("NO_COLOR", "1");
        cmd
    }

    /// Root of a project created in the work directory.
    pub fn project(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Run `create <name>` and assert success.
    pub fn create_project(&self, name: &str) -> PathBuf {
        self.cli().args(["create", name]).assert().success();
        self.project(name)
    }

    /// Read a file relative to a project root.
    pub fn read(&self, project: &Path, relative: &str) -> String {
        fs::read_to_string(project.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// The page-list declaration line of a project's build config.
    pub fn page_list_line(&self, project: &Path) -> String {
        let config = self.read(project, "rollup.config.js");
        let lines: Vec<&str> =
            config.lines().filter(|l| l.trim_start().starts_with("let svelte_apps")).collect();
        assert_eq!(lines.len(), 1, "expected exactly one declaration line, got {:?}", lines);
        lines[0].trim().to_string()
    }

    /// Assert that all paths belonging to a page exist.
    pub fn assert_page_exists(&self, project: &Path, page: &str) {
        let html = project.join("app/templates").join(format!("{}.html", page));
        assert!(html.is_file(), "{} should exist", html.display());
        let sources = project.join("app/svelte").join(page);
        assert!(sources.join("main.js").is_file(), "{} should hold main.js", sources.display());
        let static_dir = project.join("app/static/svelte").join(page);
        assert!(static_dir.is_dir(), "{} should exist", static_dir.display());
    }
}
