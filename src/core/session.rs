use tracing::{error, info};

use crate::core::error::Error;
use crate::core::platform::{AgentHandle, PlatformClient};

pub const AGENT_NAME: &str = "Meeting Summarizer";
pub const AGENT_MODEL: &str = "gpt-4o";
pub const AGENT_ABOUT: &str = "You summarize meetings and extract key action items.";

/// Process-lifetime handle to the remote summarization agent.
///
/// Registration is attempted exactly once, at boot. If it fails the
/// session stays permanently degraded and every request fails fast with a
/// service-unavailable error; there is no re-creation and no health-check
/// loop.
pub struct AgentSession {
    client: PlatformClient,
    agent: Option<AgentHandle>,
}

impl AgentSession {
    pub async fn establish(client: PlatformClient) -> Self {
        let agent = match client
            .create_agent(AGENT_NAME, AGENT_MODEL, AGENT_ABOUT)
            .await
        {
            Ok(handle) => {
                info!(agent_id = %handle.id, agent_name = %handle.name, "Agent created successfully");
                Some(handle)
            }
            Err(e) => {
                error!("Error creating agent: {}", e);
                None
            }
        };
        Self { client, agent }
    }

    /// A session that is degraded from the start, without touching the
    /// network.
    #[cfg(test)]
    pub fn degraded(client: PlatformClient) -> Self {
        Self {
            client,
            agent: None,
        }
    }

    #[cfg(test)]
    pub fn with_agent(client: PlatformClient, agent: AgentHandle) -> Self {
        Self {
            client,
            agent: Some(agent),
        }
    }

    pub fn client(&self) -> &PlatformClient {
        &self.client
    }

    pub fn agent(&self) -> Result<&AgentHandle, Error> {
        self.agent.as_ref().ok_or(Error::AgentUnavailable)
    }
}
