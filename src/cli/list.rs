//! `tasker list` command implementation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::output::{emit_success, render_task_table, OutputOptions};
use crate::store::TaskStore;
use crate::task::{StatusFilter, Task};

/// Options for `tasker list`
pub struct ListOptions {
    pub status: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Output for `tasker list` command
#[derive(Debug, Serialize)]
pub struct ListOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub count: usize,
    pub tasks: Vec<Task>,
}

/// Run `tasker list`
pub fn run(opts: ListOptions) -> Result<()> {
    let filter = opts
        .status
        .as_deref()
        .map(str::parse::<StatusFilter>)
        .transpose()?;

    let path = config::resolve_task_file(opts.file)?;
    debug!(path = %path.display(), "listing tasks");

    let store = TaskStore::open(&path)?;
    let tasks = store.list_by_status(filter);

    let output = ListOutput {
        filter: filter.map(|f| f.to_string()),
        count: tasks.len(),
        tasks: tasks.clone(),
    };

    if opts.json {
        return emit_success(
            OutputOptions {
                json: true,
                quiet: opts.quiet,
            },
            "list",
            &output,
            "",
        );
    }

    if !opts.quiet {
        print_task_list(filter, &tasks);
    }
    Ok(())
}

fn print_task_list(filter: Option<StatusFilter>, tasks: &[Task]) {
    match filter {
        Some(filter) => println!("All tasks that are {}", filter.label()),
        None => println!("All tasks"),
    }
    println!();

    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{}", render_task_table(tasks));
}
