use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// A unit of follow-up work extracted from the transcript. The assignee
/// is expected to be an email address and the due date `YYYY-MM-DD`, but
/// neither is validated here; no uniqueness constraint applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    pub task: String,
    pub assignee: String,
    pub due_date: String,
}

/// Structured result of one summarization run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingNotes {
    pub summary: String,
    pub action_items: Vec<ActionItem>,
}

/// Extract the structured notes from a succeeded execution's output.
///
/// The platform's evaluate step leaves the parsed fenced block under the
/// `result` key. Parsing fails closed: a missing key, a wrong type, or a
/// fenced block that never became structured data is a malformed-output
/// error, never partial data.
pub fn parse_output(output: &serde_json::Value) -> Result<MeetingNotes, Error> {
    let result = output
        .get("result")
        .ok_or_else(|| Error::malformed("output has no `result` field"))?;
    serde_json::from_value(result.clone()).map_err(|e| Error::malformed(e.to_string()))
}
