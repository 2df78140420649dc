use axum::Json;
use axum::extract::State;
use tracing::info;

use super::super::AppState;
use crate::core::error::Error;
use crate::core::parser::{MeetingNotes, parse_output};
use crate::core::task::build_task_document;

#[derive(serde::Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    transcript: String,
}

/// One full summarization request, processed sequentially: build the task,
/// submit it, poll the execution to a terminal state, parse the output,
/// then publish the page and file the issues before responding. The two
/// side effects are best-effort and cannot change the response.
pub async fn summarize_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<MeetingNotes>, Error> {
    if payload.transcript.is_empty() {
        return Err(Error::EmptyTranscript);
    }

    let agent = state.session.agent()?;
    let task_document = build_task_document(&payload.transcript)?;

    let client = state.session.client();
    let task = client.create_task(&agent.id, &task_document).await?;
    info!(task_id = %task.id, "Task created, starting execution");

    let output = state
        .poller
        .run(client, &task.id, &payload.transcript, &state.shutdown)
        .await?;

    let notes = parse_output(&output)?;

    state.wiki.publish(&notes).await;
    state.issues.file_all(&notes.action_items).await;

    Ok(Json(notes))
}
