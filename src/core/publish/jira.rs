use reqwest::Client;
use tracing::{error, info};

use crate::core::parser::ActionItem;

/// Files one tracker issue per action item via basic auth. Per-item
/// failures are caught and logged individually; they abort neither the
/// remaining items nor the overall response.
pub struct IssueFiler {
    client: Client,
    base_url: String,
    username: String,
    token: String,
    project_key: String,
}

impl IssueFiler {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            username: username.into(),
            token: token.into(),
            project_key: project_key.into(),
        }
    }

    pub async fn file_all(&self, items: &[ActionItem]) {
        for item in items {
            self.file_issue(item).await;
        }
    }

    async fn file_issue(&self, item: &ActionItem) {
        let payload = build_issue_payload(&self.project_key, item);

        let res = self
            .client
            .post(format!("{}/rest/api/3/issue/", self.base_url))
            .basic_auth(&self.username, Some(&self.token))
            .json(&payload)
            .send()
            .await;

        match res {
            Ok(resp) if resp.status().is_success() => {
                info!(task = %item.task, "Jira issue created");
            }
            Ok(resp) => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                error!(%status, body = %text, "Failed to create Jira issue");
            }
            Err(e) => {
                error!("Failed to reach Jira: {}", e);
            }
        }
    }
}

/// Issue-creation payload. The description is an Atlassian Document
/// Format doc embedding task, assignee, and due date; the assignee is
/// keyed by raw email address with no check that it resolves to an
/// account.
pub fn build_issue_payload(project_key: &str, item: &ActionItem) -> serde_json::Value {
    let description = serde_json::json!({
        "type": "doc",
        "version": 1,
        "content": [
            {
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": format!("Task: {}", item.task) },
                    { "type": "text", "text": format!("\nAssigned to: {}", item.assignee) },
                    { "type": "text", "text": format!("\nDue Date: {}", item.due_date) }
                ]
            }
        ]
    });

    serde_json::json!({
        "fields": {
            "project": { "key": project_key },
            "summary": item.task,
            "description": description,
            "issuetype": { "name": "Task" },
            "assignee": { "emailAddress": item.assignee }
        }
    })
}
