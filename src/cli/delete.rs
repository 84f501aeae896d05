//! `tasker delete` command implementation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::store::TaskStore;

/// Options for `tasker delete`
pub struct DeleteOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Output for `tasker delete` command
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub id: u64,
}

/// Run `tasker delete`
pub fn run(opts: DeleteOptions) -> Result<()> {
    let path = config::resolve_task_file(opts.file)?;
    debug!(path = %path.display(), id = opts.id, "deleting task");

    let mut store = TaskStore::open(&path)?;
    store.delete(opts.id)?;

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "delete",
        &DeleteOutput { id: opts.id },
        &format!("Task {} deleted", opts.id),
    )
}
