use anyhow::Result;
use mccabescraper::fetch::urls::{BASE_URL, GROUPS};
use mccabescraper::run;
use reqwest::Client;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) fetch, combine, write ────────────────────────────────────
    let client = Client::new();
    run::run(
        &client,
        BASE_URL,
        GROUPS,
        Path::new("mccabe_public_data.csv"),
    )
    .await
}
