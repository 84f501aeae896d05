//! Command-line interface for tasker
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod add;
mod delete;
mod list;
mod mark;
mod update;

/// tasker - a simple CLI application used to track and manage your tasks
#[derive(Parser, Debug)]
#[command(name = "tasker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file (defaults to the platform data directory)
    #[arg(long, global = true, env = "TASKER_FILE")]
    pub file: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// A short description of the new task
        description: String,
    },

    /// Update the description of a task by ID
    Update {
        /// The ID of the task to be updated
        id: u64,

        /// A new short description for the task
        description: String,
    },

    /// Delete a task by ID
    Delete {
        /// The ID of the task to be deleted
        id: u64,
    },

    /// Mark a task as todo, in-progress or done
    Mark {
        /// The ID of the task to be marked
        id: u64,

        /// The new status of the task: todo, in-progress or done
        status: String,
    },

    /// List all tasks or tasks with a given status
    List {
        /// Filter by status: todo, in-progress, done or not-done
        status: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { description } => add::run(add::AddOptions {
                description,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Update { id, description } => update::run(update::UpdateOptions {
                id,
                description,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Delete { id } => delete::run(delete::DeleteOptions {
                id,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Mark { id, status } => mark::run(mark::MarkOptions {
                id,
                status,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { status } => list::run(list::ListOptions {
                status,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
