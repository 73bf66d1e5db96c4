//! Background job execution with guaranteed source cleanup.
//!
//! Jobs go through an explicit submission queue drained by a fixed pool of
//! worker threads. A failing or panicking job is recorded on its task; the
//! uploaded source file is deleted exactly once on every exit path.

use crate::error::{Result, SubcueError};
use crate::subtitle::generator::SubtitleGenerator;
use crate::task::registry::{TaskId, TaskRegistry};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{error, info, warn};

/// One queued unit of work.
struct Job {
    task_id: TaskId,
    media_path: PathBuf,
    result_path: PathBuf,
}

/// Deletes the job's source media file when dropped.
///
/// The job owns its input for its whole lifetime; deletion runs on every
/// exit path — success, failure, and unwinding — and exactly once.
struct SourceFileGuard {
    path: PathBuf,
}

impl Drop for SourceFileGuard {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!(path = %self.path.display(), "source media deleted"),
            // Never mask the job outcome with a cleanup failure
            Err(e) => warn!(path = %self.path.display(), "failed to delete source media: {}", e),
        }
    }
}

/// Fixed pool of subtitle workers fed by a submission queue.
pub struct JobRunner {
    queue: Sender<Job>,
    workers: Vec<JoinHandle<()>>,
}

impl JobRunner {
    /// Spawn `workers` threads draining the submission queue.
    pub fn new(
        registry: Arc<TaskRegistry>,
        generator: Arc<SubtitleGenerator>,
        workers: usize,
    ) -> Self {
        let (queue, rx) = unbounded::<Job>();
        let workers = (0..workers)
            .map(|i| {
                let rx: Receiver<Job> = rx.clone();
                let registry = Arc::clone(&registry);
                let generator = Arc::clone(&generator);
                std::thread::Builder::new()
                    .name(format!("subcue-worker-{}", i))
                    .spawn(move || {
                        for job in rx.iter() {
                            run_job(&registry, &generator, job);
                        }
                    })
                    .unwrap_or_else(|e| panic!("failed to spawn worker thread: {}", e))
            })
            .collect();

        Self { queue, workers }
    }

    /// Schedule a job for asynchronous execution; returns immediately.
    ///
    /// # Errors
    /// `QueueClosed` after [`JobRunner::shutdown`] has begun.
    pub fn submit(&self, task_id: TaskId, media_path: PathBuf, result_path: PathBuf) -> Result<()> {
        self.queue
            .send(Job {
                task_id,
                media_path,
                result_path,
            })
            .map_err(|_| SubcueError::QueueClosed)
    }

    /// Close the queue and wait for in-flight jobs to finish.
    ///
    /// Worker panics are reported, not propagated — by the time shutdown
    /// runs there is nobody left to handle them.
    pub fn shutdown(self) {
        drop(self.queue);
        for handle in self.workers {
            if let Err(panic_info) = handle.join() {
                let msg = panic_info
                    .downcast_ref::<&str>()
                    .copied()
                    .or_else(|| panic_info.downcast_ref::<String>().map(|s| s.as_str()))
                    .unwrap_or("unknown panic");
                error!("subtitle worker panicked: {}", msg);
            }
        }
    }
}

/// Execute one job on the current worker thread.
fn run_job(registry: &TaskRegistry, generator: &SubtitleGenerator, job: Job) {
    if let Err(e) = registry.mark_processing(job.task_id) {
        error!(task = %job.task_id, "cannot start job: {}", e);
        return;
    }

    // From here on the job owns the source file; the guard releases it on
    // every exit path below, including an unwinding generator.
    let _guard = SourceFileGuard {
        path: job.media_path.clone(),
    };

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        generator.generate(&job.media_path, &job.result_path)
    }));

    let recorded = match outcome {
        Ok(Ok(cues)) => {
            let result_name = job
                .result_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            info!(task = %job.task_id, cues = cues.len(), "job completed");
            registry.mark_completed(job.task_id, &result_name)
        }
        Ok(Err(e)) => {
            warn!(task = %job.task_id, "job failed: {}", e);
            registry.mark_failed(job.task_id, &e.to_string())
        }
        Err(panic_info) => {
            let msg = panic_info
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic");
            error!(task = %job.task_id, "job panicked: {}", msg);
            registry.mark_failed(job.task_id, &format!("internal error: {}", msg))
        }
    };

    if let Err(e) = recorded {
        error!(task = %job.task_id, "failed to record job outcome: {}", e);
    }
}
