//! Concurrency-safe store of task records.
//!
//! Every worker and every status query goes through this registry; the raw
//! map is never exposed. Reads return snapshots, writes go through
//! [`TaskRegistry::update`] under the same lock, so a record is always
//! observed fully pre-update or fully post-update.

use crate::error::{Result, SubcueError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use uuid::Uuid;

/// Opaque task identifier.
pub type TaskId = Uuid;

/// Lifecycle state of a task.
///
/// Transitions are strictly `Pending → Processing → {Completed | Failed}`;
/// terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Processing => "processing",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One asynchronous unit of work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub status: TaskStatus,
    /// Stored name of the uploaded source file
    pub source_name: String,
    /// Name of the generated subtitle file, set on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_name: Option<String>,
    /// Human-readable failure summary, set on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Concurrency-safe task store keyed by task identifier.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh task in `Pending` state and return its identifier.
    ///
    /// Safe under concurrent invocation: identifiers are UUIDv4 and the
    /// insert happens under the write lock.
    pub fn create(&self, source_name: &str) -> TaskId {
        let id = Uuid::new_v4();
        let task = Task {
            id,
            status: TaskStatus::Pending,
            source_name: source_name.to_string(),
            result_name: None,
            error: None,
        };
        self.tasks
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, task);
        id
    }

    /// Snapshot of the current record, or `None` for an unknown id.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }

    /// Atomically apply a mutation to exactly one record.
    ///
    /// # Errors
    /// `TaskNotFound` for an unknown id — never a silent no-op.
    pub fn update<F>(&self, id: TaskId, mutator: F) -> Result<()>
    where
        F: FnOnce(&mut Task),
    {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| SubcueError::TaskNotFound { id: id.to_string() })?;
        mutator(task);
        Ok(())
    }

    /// Transition a task to `Processing`.
    pub fn mark_processing(&self, id: TaskId) -> Result<()> {
        self.transition(id, TaskStatus::Processing, |task| {
            task.status = TaskStatus::Processing;
        })
    }

    /// Transition a task to `Completed`, recording its result file name.
    pub fn mark_completed(&self, id: TaskId, result_name: &str) -> Result<()> {
        self.transition(id, TaskStatus::Completed, |task| {
            task.status = TaskStatus::Completed;
            task.result_name = Some(result_name.to_string());
        })
    }

    /// Transition a task to `Failed`, recording a failure summary.
    pub fn mark_failed(&self, id: TaskId, error: &str) -> Result<()> {
        self.transition(id, TaskStatus::Failed, |task| {
            task.status = TaskStatus::Failed;
            task.error = Some(error.to_string());
        })
    }

    fn transition<F>(&self, id: TaskId, to: TaskStatus, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Task),
    {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| SubcueError::TaskNotFound { id: id.to_string() })?;

        let valid = match to {
            TaskStatus::Processing => task.status == TaskStatus::Pending,
            TaskStatus::Completed | TaskStatus::Failed => {
                task.status == TaskStatus::Processing
            }
            TaskStatus::Pending => false,
        };
        if !valid {
            return Err(SubcueError::InvalidTransition {
                id: id.to_string(),
                from: task.status.to_string(),
                to: to.to_string(),
            });
        }

        apply(task);
        Ok(())
    }
}
