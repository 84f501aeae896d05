//! Shared output formatting for tasker CLI commands.

use serde::Serialize;

use crate::error::{JsonError, Result};
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "tasker.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Emit a command result in JSON envelope or human form
pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: &str,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if !options.quiet && !human.is_empty() {
        println!("{human}");
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = error_hint(err) {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

/// Render tasks as an aligned column table
///
/// Returns the header, a dashed underline, and one row per task. Column
/// labels and widths are presentation only; the description column grows to
/// fit the longest entry.
pub fn render_task_table(tasks: &[Task]) -> String {
    const HEADERS: [&str; 5] = ["id", "description", "status", "created_at", "updated_at"];
    const TIMESTAMP_WIDTH: usize = 19;

    let id_width = tasks
        .iter()
        .map(|task| task.id.to_string().len())
        .chain([HEADERS[0].len()])
        .max()
        .unwrap_or(HEADERS[0].len());
    let desc_width = tasks
        .iter()
        .map(|task| task.description.len())
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or(HEADERS[1].len());
    let status_width = "in-progress".len().max(HEADERS[2].len());

    let mut lines = Vec::with_capacity(tasks.len() + 2);
    lines.push(format!(
        "{:<id_width$}  {:<desc_width$}  {:<status_width$}  {:<TIMESTAMP_WIDTH$}  {}",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4],
    ));
    lines.push(format!(
        "{:<id_width$}  {:<desc_width$}  {:<status_width$}  {:<TIMESTAMP_WIDTH$}  {}",
        "-".repeat(HEADERS[0].len()),
        "-".repeat(HEADERS[1].len()),
        "-".repeat(HEADERS[2].len()),
        "-".repeat(HEADERS[3].len()),
        "-".repeat(HEADERS[4].len()),
    ));

    for task in tasks {
        lines.push(format!(
            "{:<id_width$}  {:<desc_width$}  {:<status_width$}  {:<TIMESTAMP_WIDTH$}  {}",
            task.id,
            task.description,
            task.status.as_str(),
            format_timestamp(&task.created_at),
            format_timestamp(&task.updated_at),
        ));
    }

    lines.join("\n")
}

pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Best-effort command name for output envelopes, read from argv
pub fn infer_command_name_from_args() -> String {
    infer_command_name(std::env::args().skip(1))
}

fn infer_command_name(mut args: impl Iterator<Item = String>) -> String {
    while let Some(arg) = args.next() {
        // `--file` carries a value; everything else dash-prefixed is a flag.
        if arg == "--file" {
            args.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return arg;
    }
    "tasker".to_string()
}

fn error_hint(err: &crate::error::Error) -> Option<String> {
    use crate::error::Error;

    match err {
        Error::TaskNotFound(_) => Some("tasker list".to_string()),
        Error::EmptyDescription => Some("tasker add \"<description>\"".to_string()),
        Error::InvalidStatus(_) => Some("tasker mark <id> todo|in-progress|done".to_string()),
        Error::InvalidFilter(_) => {
            Some("tasker list [todo|in-progress|done|not-done]".to_string())
        }
        Error::CorruptStore { path, .. } => Some(format!(
            "inspect or move {} and retry",
            path.display()
        )),
        _ => None,
    }
}
