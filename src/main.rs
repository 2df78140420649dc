mod core;
mod interfaces;
mod logging;

use anyhow::Result;

use crate::core::config::Settings;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        tracing::error!("scribe failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    interfaces::web::serve(settings).await
}
