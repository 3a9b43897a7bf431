use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;
use tokio_util::sync::CancellationToken;

use gesturelog::{feed, settings::SettingsStore, GestureLog, GesturePipeline};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("gesturelog starting up...");

    let settings = SettingsStore::new(PathBuf::from("gesturelog-settings.json"))?;
    let capture = settings.capture();
    info!("settings loaded from {}", settings.path().display());

    let log = GestureLog::create(&capture.output_dir, Utc::now().timestamp_millis())?;
    info!("appending gesture records to {}", log.path().display());

    let pipeline = Arc::new(GesturePipeline::new(log));

    let cancel_token = CancellationToken::new();
    let motion_feed = tokio::spawn(feed::run_motion_feed(
        Arc::clone(&pipeline),
        capture.feed_sample_rate_hz,
        cancel_token.clone(),
    ));

    let mut summaries = pipeline.summary_watch();
    feed::run_demo_script(&pipeline).await;
    info!("latest gesture:\n{}", *summaries.borrow_and_update());

    cancel_token.cancel();
    motion_feed.await?;
    pipeline.shutdown().await?;

    info!("gesture log closed");
    Ok(())
}
