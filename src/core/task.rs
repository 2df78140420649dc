use crate::core::error::Error;

/// Escape a raw transcript so it can sit inside the double-quoted string
/// embedded in the task document: quotes are backslash-escaped and
/// newlines collapse to literal `\n` so the transcript stays on one line.
pub fn escape_transcript(transcript: &str) -> String {
    transcript.replace('"', "\\\"").replace('\n', "\\n")
}

/// Render the per-request task specification for the summarization agent.
///
/// The document carries a system prompt naming the persona, a user prompt
/// embedding the escaped transcript together with the fenced output schema
/// the agent must follow, and a final evaluate step that has the platform
/// parse that fenced block into structured data.
///
/// The rendered YAML is validated locally before submission; a document
/// that fails to parse (e.g. a transcript smuggling raw control
/// characters past the escaping) is a template formatting error, distinct
/// from any downstream execution failure.
pub fn build_task_document(transcript: &str) -> Result<serde_json::Value, Error> {
    let escaped = escape_transcript(transcript);

    let rendered = format!(
        r#"name: Meeting Summarizer Task
description: Summarize a meeting transcript and generate action items.

tools: []

main:
- prompt:
  - role: system
    content: You are {{{{agent.name}}}}. {{{{agent.about}}}}
  - role: user
    content: >
      Here is the transcript of a meeting: "{escaped}"

      Please summarize the key points and generate action items.
      For each action item, include the assignee's name and a due date.
      Return your output in the following structure:

      ```yaml
      summary: "<string>"
      action_items:
      - task: "<string>"
        assignee: "<string>"
        due_date: "<YYYY-MM-DD>"
      ```
  unwrap: true

- evaluate:
    result: load_yaml(_.split('```yaml')[1].split('```')[0].strip())
"#
    );

    // The platform API takes spaces only.
    let rendered = rendered.replace('\t', "    ");

    serde_yaml::from_str::<serde_json::Value>(&rendered)
        .map_err(|e| Error::template(e.to_string()))
}
