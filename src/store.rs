//! Task store for tasker.
//!
//! The store is the single authority over task CRUD and persistence. It
//! loads the task file into memory on open, and every mutating operation
//! persists the full collection back before returning. Writes go to a
//! sibling temp file and are renamed into place, so a crash mid-write never
//! leaves a half-written file over a good one.
//!
//! Ids are assigned from a high-water mark that only advances: deleting a
//! task never makes its id eligible for reuse while the store is open.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Error, Result};
use crate::task::{Status, StatusFilter, Task};

/// Persistent collection of tasks backed by a single JSON file
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Open a store, loading the task file if it exists
    ///
    /// A missing file means an empty store. An existing file that cannot be
    /// parsed as a task list is an error; it is never silently treated as
    /// empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str::<Vec<Task>>(&content).map_err(|source| {
                    Error::CorruptStore {
                        path: path.clone(),
                        source,
                    }
                })?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;

        Ok(Self {
            path,
            tasks,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a new task and return its id
    ///
    /// The description is trimmed and must not be empty. The task starts as
    /// todo with matching creation and update timestamps, is appended at the
    /// end of the collection, and is persisted before this returns.
    pub fn add(&mut self, description: &str) -> Result<u64> {
        let description = validate_description(description)?;
        let id = self.next_id;

        self.tasks.push(Task::new(id, description));
        if let Err(err) = self.save() {
            self.tasks.pop();
            return Err(err);
        }

        self.next_id = id + 1;
        Ok(id)
    }

    /// Replace the description of an existing task
    pub fn update(&mut self, id: u64, description: &str) -> Result<()> {
        let description = validate_description(description)?;
        let index = self.index_of(id)?;

        let previous = self.tasks[index].clone();
        self.tasks[index].description = description;
        self.tasks[index].updated_at = Utc::now();

        if let Err(err) = self.save() {
            self.tasks[index] = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Remove a task; its id is never assigned again
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let index = self.index_of(id)?;

        let removed = self.tasks.remove(index);
        if let Err(err) = self.save() {
            self.tasks.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    /// Set the status of an existing task
    ///
    /// Always refreshes the update timestamp and persists, even when the new
    /// status equals the current one.
    pub fn mark_status(&mut self, id: u64, status: Status) -> Result<()> {
        let index = self.index_of(id)?;

        let previous = self.tasks[index].clone();
        self.tasks[index].status = status;
        self.tasks[index].updated_at = Utc::now();

        if let Err(err) = self.save() {
            self.tasks[index] = previous;
            return Err(err);
        }
        Ok(())
    }

    /// List tasks in collection order, optionally filtered by status
    ///
    /// Returns an empty vec when nothing matches.
    pub fn list_by_status(&self, filter: Option<StatusFilter>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.map_or(true, |f| f.matches(task.status)))
            .cloned()
            .collect()
    }

    fn index_of(&self, id: u64) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    /// Write the full collection atomically (temp file + rename)
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

fn validate_description(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(trimmed.to_string())
}
