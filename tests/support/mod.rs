use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn task_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    /// A tasker command wired to this store's task file
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tasker").expect("binary");
        cmd.arg("--file").arg(self.task_file());
        cmd
    }

    pub fn write_task_file(&self, contents: &str) {
        fs::write(self.task_file(), contents).expect("failed to write task file");
    }

    /// Parse the persisted task file as raw JSON
    pub fn read_tasks(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.task_file()).expect("task file missing");
        serde_json::from_str(&contents).expect("task file is not valid JSON")
    }
}
