use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::error::Error;
use crate::core::platform::{Execution, ExecutionStatus, PlatformClient};

/// Submit a task execution and observe it to a terminal state.
///
/// Status is fetched at a fixed interval. The loop is bounded by a
/// deadline and a cancellation token; any transport error while
/// submitting or polling aborts the request immediately, leaving the
/// remote execution orphaned (no retry, no cleanup call).
pub struct ExecutionPoller {
    interval: Duration,
    deadline: Duration,
}

impl ExecutionPoller {
    pub fn new(interval_seconds: u64, deadline_seconds: u64) -> Self {
        Self {
            interval: Duration::from_secs(interval_seconds),
            deadline: Duration::from_secs(deadline_seconds),
        }
    }

    /// On success returns the raw output payload of the succeeded
    /// execution; a platform-reported failure carries its error message.
    pub async fn run(
        &self,
        client: &PlatformClient,
        task_id: &str,
        transcript: &str,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, Error> {
        let execution = client
            .create_execution(task_id, serde_json::json!({ "transcript": transcript }))
            .await?;

        let started = tokio::time::Instant::now();
        loop {
            if started.elapsed() > self.deadline {
                return Err(Error::PollTimeout {
                    deadline_seconds: self.deadline.as_secs(),
                });
            }

            let snapshot = client.get_execution(&execution.id).await?;
            let status = snapshot.status();
            if !status.is_terminal() {
                // Queued, starting, running, or a state this client does
                // not recognize: keep observing.
                tokio::select! {
                    _ = cancel.cancelled() => return Err(Error::Cancelled),
                    _ = tokio::time::sleep(self.interval) => {}
                }
                continue;
            }

            return match status {
                ExecutionStatus::Succeeded => Ok(finished_output(snapshot)),
                _ => Err(Error::ExecutionFailed(
                    snapshot.error.unwrap_or_else(|| "unknown error".to_string()),
                )),
            };
        }
    }
}

fn finished_output(execution: Execution) -> serde_json::Value {
    execution.output.unwrap_or(serde_json::Value::Null)
}
