use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub(crate) fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
