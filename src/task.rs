//! Task data model.
//!
//! A task is a short textual item with a numeric id, a status, and creation
//! and update timestamps. Tasks serialize to the JSON records held in the
//! task file.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Filter for listing tasks by status
///
/// `NotDone` is the derived category covering todo and in-progress tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Todo,
    InProgress,
    Done,
    NotDone,
}

impl StatusFilter {
    /// Whether a task with the given status passes this filter
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::Todo => status == Status::Todo,
            StatusFilter::InProgress => status == Status::InProgress,
            StatusFilter::Done => status == Status::Done,
            StatusFilter::NotDone => status != Status::Done,
        }
    }

    /// Human label, e.g. "in progress" for list headers
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Todo => "todo",
            StatusFilter::InProgress => "in progress",
            StatusFilter::Done => "done",
            StatusFilter::NotDone => "not done",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::Todo => "todo",
            StatusFilter::InProgress => "in-progress",
            StatusFilter::Done => "done",
            StatusFilter::NotDone => "not-done",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(StatusFilter::Todo),
            "in-progress" => Ok(StatusFilter::InProgress),
            "done" => Ok(StatusFilter::Done),
            "not-done" => Ok(StatusFilter::NotDone),
            _ => Err(Error::InvalidFilter(s.to_string())),
        }
    }
}

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Fields written by newer versions survive a load/save round trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Task {
    pub fn new(id: u64, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
            extra: serde_json::Map::new(),
        }
    }
}
