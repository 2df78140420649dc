mod handlers;
mod router;

use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::config::Settings;
use crate::core::platform::PlatformClient;
use crate::core::poller::ExecutionPoller;
use crate::core::publish::confluence::WikiPublisher;
use crate::core::publish::jira::IssueFiler;
use crate::core::session::AgentSession;

/// Everything a request handler needs, injected rather than global: the
/// settings, the process-lifetime agent session, the poller, the two
/// best-effort publishers, and the shutdown token that aborts in-flight
/// polls.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Arc<Settings>,
    pub(crate) session: Arc<AgentSession>,
    pub(crate) poller: Arc<ExecutionPoller>,
    pub(crate) wiki: Arc<WikiPublisher>,
    pub(crate) issues: Arc<IssueFiler>,
    pub(crate) shutdown: CancellationToken,
}

impl AppState {
    pub(crate) fn assemble(settings: Settings, session: AgentSession) -> Self {
        let poller = ExecutionPoller::new(
            settings.poll_interval_seconds,
            settings.poll_timeout_seconds,
        );
        let wiki = WikiPublisher::new(
            settings.confluence_base_url.clone(),
            settings.confluence_username.clone(),
            settings.confluence_token.clone(),
            settings.confluence_space_key.clone(),
        );
        let issues = IssueFiler::new(
            settings.jira_base_url.clone(),
            settings.jira_username.clone(),
            settings.jira_token.clone(),
            settings.jira_project_key.clone(),
        );
        Self {
            settings: Arc::new(settings),
            session: Arc::new(session),
            poller: Arc::new(poller),
            wiki: Arc::new(wiki),
            issues: Arc::new(issues),
            shutdown: CancellationToken::new(),
        }
    }
}

pub async fn serve(settings: Settings) -> Result<()> {
    let platform = PlatformClient::new(
        settings.agents_base_url.clone(),
        settings.agents_api_key.clone(),
    );
    let session = AgentSession::establish(platform).await;
    let state = AppState::assemble(settings, session);

    let addr = state.settings.bind_addr.clone();
    let shutdown = state.shutdown.clone();
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("scribe listening at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down, aborting in-flight executions...");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
