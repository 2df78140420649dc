use reqwest::Client;
use tracing::{error, info};

use crate::core::parser::MeetingNotes;

/// Publishes one wiki page per successful summarization to the document
/// store's content API, via basic auth. Best-effort: failures are logged
/// with status and body, never propagated to the caller.
pub struct WikiPublisher {
    client: Client,
    base_url: String,
    username: String,
    token: String,
    space_key: String,
}

impl WikiPublisher {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
        space_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            username: username.into(),
            token: token.into(),
            space_key: space_key.into(),
        }
    }

    pub async fn publish(&self, notes: &MeetingNotes) {
        // Timestamped to the second; practically unique, not a strict
        // identity constraint.
        let title = format!(
            "Meeting Summary - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let body = serde_json::json!({
            "type": "page",
            "title": title,
            "space": { "key": self.space_key },
            "body": {
                "storage": {
                    "value": build_page_html(notes),
                    "representation": "storage"
                }
            }
        });

        let res = self
            .client
            .post(format!("{}/rest/api/content/", self.base_url))
            .basic_auth(&self.username, Some(&self.token))
            .json(&body)
            .send()
            .await;

        match res {
            Ok(resp) if resp.status().is_success() => {
                info!(%title, "Page created in Confluence");
            }
            Ok(resp) => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                error!(%status, body = %text, "Failed to create page in Confluence");
            }
            Err(e) => {
                error!("Failed to reach Confluence: {}", e);
            }
        }
    }
}

/// Storage-format document: fixed heading, summary paragraph, one bullet
/// per action item.
pub fn build_page_html(notes: &MeetingNotes) -> String {
    let items: String = notes
        .action_items
        .iter()
        .map(|item| {
            format!(
                "<li><strong>{}</strong> - Assigned to: {}, Due: {}</li>",
                item.task, item.assignee, item.due_date
            )
        })
        .collect();

    format!(
        "<h1>Meeting Summary</h1>\n<p>{}</p>\n<h2>Action Items</h2>\n<ul>{}</ul>",
        notes.summary, items
    )
}
