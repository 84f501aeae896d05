//! `tasker update` command implementation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::store::TaskStore;

/// Options for `tasker update`
pub struct UpdateOptions {
    pub id: u64,
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Output for `tasker update` command
#[derive(Debug, Serialize)]
pub struct UpdateOutput {
    pub id: u64,
}

/// Run `tasker update`
pub fn run(opts: UpdateOptions) -> Result<()> {
    let path = config::resolve_task_file(opts.file)?;
    debug!(path = %path.display(), id = opts.id, "updating task");

    let mut store = TaskStore::open(&path)?;
    store.update(opts.id, &opts.description)?;

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "update",
        &UpdateOutput { id: opts.id },
        &format!("Task {} updated", opts.id),
    )
}
