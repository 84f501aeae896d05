//! `tasker add` command implementation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::store::TaskStore;

/// Options for `tasker add`
pub struct AddOptions {
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Output for `tasker add` command
#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub id: u64,
}

/// Run `tasker add`
pub fn run(opts: AddOptions) -> Result<()> {
    let path = config::resolve_task_file(opts.file)?;
    debug!(path = %path.display(), "opening task file");

    let mut store = TaskStore::open(&path)?;
    let id = store.add(&opts.description)?;
    let output = AddOutput { id };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &output,
        &format!("Task added successfully (ID: {id})"),
    )
}
