//! `tasker mark` command implementation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::store::TaskStore;
use crate::task::Status;

/// Options for `tasker mark`
pub struct MarkOptions {
    pub id: u64,
    pub status: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Output for `tasker mark` command
#[derive(Debug, Serialize)]
pub struct MarkOutput {
    pub id: u64,
    pub status: Status,
}

/// Run `tasker mark`
pub fn run(opts: MarkOptions) -> Result<()> {
    let status: Status = opts.status.parse()?;

    let path = config::resolve_task_file(opts.file)?;
    debug!(path = %path.display(), id = opts.id, status = %status, "marking task");

    let mut store = TaskStore::open(&path)?;
    store.mark_status(opts.id, status)?;

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "mark",
        &MarkOutput {
            id: opts.id,
            status,
        },
        &format!("Task {} marked {status}", opts.id),
    )
}
