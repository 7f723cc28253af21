//! Shared testing harness for `wfseed` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_remote::seed_bare_repository;

/// Isolated environment: a work directory for the config, a clone root, and
/// a local git web root serving `acme/Wf1.git`.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        seed_bare_repository(&root.path().join("remote"), "acme", "Wf1");
        Self { root, work_dir }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory the provisioned repository is cloned under.
    pub(crate) fn clone_root(&self) -> PathBuf {
        self.root.path().join("clones")
    }

    /// Local working copy produced by a successful run.
    pub(crate) fn repository_dir(&self) -> PathBuf {
        self.clone_root().join("Wf1")
    }

    fn web_url(&self) -> String {
        format!("file://{}", self.root.path().join("remote").display())
    }

    /// Write `wfseed.toml` pointing both API hosts at the given base URLs.
    pub(crate) fn write_config(&self, source_api: &str, registry_api: &str) -> PathBuf {
        let content = format!(
            r#"[source]
username = "octocat"
token = "ghp_secret"
api_url = "{source_api}"
web_url = "{web_url}"

[registry]
username = "octocat"
password = "hunter2"
api_url = "{registry_api}"

[request]
owner = "acme"
namespace = "acmehub"
name = "Wf1"
description = "Example workflow"
template = "tmpl"

[[request.parameters]]
name = "Threshold"
description = "Cut-off value"
default = 0.5
type = "Number"

[general]
clone_dir = "{clone_dir}"
timeout_secs = 5
"#,
            web_url = self.web_url(),
            clone_dir = self.clone_root().display(),
        );
        let path = self.work_dir.join("wfseed.toml");
        fs::write(&path, content).expect("Failed to write wfseed.toml");
        path
    }

    /// Build a command for invoking the compiled `wfseed` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wfseed").expect("Failed to locate wfseed binary");
        cmd.current_dir(&self.work_dir).env("RUST_LOG", "wfseed=warn");
        cmd
    }
}
