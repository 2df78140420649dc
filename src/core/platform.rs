use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// Identity of the remote summarization persona. Created once at process
/// start and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AgentHandle {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TaskHandle {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct ExecutionHandle {
    pub id: String,
}

/// Execution state as reported by the platform. Transitions are owned
/// entirely by the remote side; this process only observes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    Queued,
    Starting,
    Running,
    Succeeded,
    Failed,
    Unknown(String),
}

impl ExecutionStatus {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "queued" => Self::Queued,
            "starting" => Self::Starting,
            "running" => Self::Running,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// One observed snapshot of an in-flight execution.
#[derive(Debug, Clone, Deserialize)]
pub struct Execution {
    status: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Execution {
    pub fn status(&self) -> ExecutionStatus {
        ExecutionStatus::from_wire(&self.status)
    }
}

#[derive(Serialize)]
struct CreateAgentRequest<'a> {
    name: &'a str,
    model: &'a str,
    about: &'a str,
}

#[derive(Deserialize)]
struct CreateAgentResponse {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct CreatedResource {
    id: String,
}

#[derive(Serialize)]
struct CreateExecutionRequest {
    input: serde_json::Value,
}

/// Thin client for the hosted agent platform: create-agent, create-task,
/// create-execution, get-execution. Bearer-key auth, no retries.
pub struct PlatformClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PlatformClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn create_agent(&self, name: &str, model: &str, about: &str) -> Result<AgentHandle, Error> {
        let res = self
            .client
            .post(format!("{}/agents", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&CreateAgentRequest { name, model, about })
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(Error::platform(res.text().await.unwrap_or_default()));
        }
        let parsed: CreateAgentResponse = res.json().await?;
        Ok(AgentHandle {
            id: parsed.id,
            name: parsed.name,
        })
    }

    pub async fn create_task(
        &self,
        agent_id: &str,
        task_body: &serde_json::Value,
    ) -> Result<TaskHandle, Error> {
        let res = self
            .client
            .post(format!("{}/agents/{}/tasks", self.base_url, agent_id))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(task_body)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(Error::platform(res.text().await.unwrap_or_default()));
        }
        let parsed: CreatedResource = res.json().await?;
        Ok(TaskHandle { id: parsed.id })
    }

    pub async fn create_execution(
        &self,
        task_id: &str,
        input: serde_json::Value,
    ) -> Result<ExecutionHandle, Error> {
        let res = self
            .client
            .post(format!("{}/tasks/{}/executions", self.base_url, task_id))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&CreateExecutionRequest { input })
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(Error::platform(res.text().await.unwrap_or_default()));
        }
        let parsed: CreatedResource = res.json().await?;
        Ok(ExecutionHandle { id: parsed.id })
    }

    pub async fn get_execution(&self, execution_id: &str) -> Result<Execution, Error> {
        let res = self
            .client
            .get(format!("{}/executions/{}", self.base_url, execution_id))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(Error::platform(res.text().await.unwrap_or_default()));
        }
        Ok(res.json().await?)
    }
}
