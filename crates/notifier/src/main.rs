//! `render-notify` — run the Telegram hook once for a job file.
//!
//! Usage: `render-notify <event> <job.json> [settings.json]`

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use render_common::config::NotifierConfig;
use render_common::types::{RenderEvent, RenderJob, RenderSettings};
use render_notifier::TelegramNotifier;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "render_notifier=info,render_common=info".into()),
        )
        .json()
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(event), Some(job_path)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: render-notify <event> <job.json> [settings.json]");
    };

    let event = RenderEvent::from(event);
    let job: RenderJob = read_json(Path::new(&job_path))?;
    let settings: RenderSettings = match args.next() {
        Some(path) => read_json(Path::new(&path))?,
        None => RenderSettings::default(),
    };

    // Load configuration
    let config = NotifierConfig::from_env()?;
    let notifier = TelegramNotifier::from_config(&config);

    let response = notifier.notify(&job, &settings, &event).await?;
    tracing::info!(status = response.status().as_u16(), "Notification sent");

    Ok(())
}
