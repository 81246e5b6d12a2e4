//! Minimal end-to-end usage: wire the default logger to `tracing`, create
//! an app, start and stop the underlying client.
//!
//! Run with: cargo run --example quickstart

use cairn_client::{App, AppConfig, AppId, LogLevel};
use cairn_log::{Logger, TracingSink, set_default_logger};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .compact()
        .init();
    set_default_logger(Logger::with_sink(TracingSink));

    let config = AppConfig::new(AppId::new("cairn-demo")?)
        .with_device_name("quickstart")
        .with_log_level(LogLevel::Debug);
    let app = App::new(config);

    app.start().await?;
    println!(
        "app {} running (device {})",
        app.config().app_id,
        app.client().device_id()
    );
    app.stop().await;

    Ok(())
}
