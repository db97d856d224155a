//! LoreBldr client composition root.
//!
//! Small CLI surface over the render-definition engine: `generate` runs the
//! pipeline over a local content record, `resolve` walks the fallback chain
//! against the configured backend.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lorebldr_client::application::RenderDefinitionService;
use lorebldr_client::config::ClientConfig;
use lorebldr_client::infrastructure::http::StaticAssetClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lorebldr=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("generate") => {
            let path = args
                .next()
                .context("Usage: lorebldr-client generate <record.json>")?;
            let record = read_record(&path)?;

            let definition = lorebldr_domain::generate(&record);
            println!("{}", serde_json::to_string_pretty(&definition)?);
            Ok(())
        }
        Some("resolve") => {
            let namespace = args
                .next()
                .context("Usage: lorebldr-client resolve <namespace> [type-path] [record.json]")?;
            let type_path = args.next();
            let sample = args.next().map(|p| read_record(&p)).transpose()?;

            let config = ClientConfig::from_env()?;
            let source = Arc::new(StaticAssetClient::new(&config)?);
            let service = RenderDefinitionService::new(source);

            let definition = service
                .resolve(&namespace, type_path.as_deref(), sample.as_ref())
                .await;
            println!("{}", serde_json::to_string_pretty(&definition)?);
            Ok(())
        }
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}"),
        None => anyhow::bail!(
            "Usage: lorebldr-client <command>\n\nCommands:\n  generate <record.json>\n  resolve <namespace> [type-path] [record.json]"
        ),
    }
}

fn read_record(path: &str) -> anyhow::Result<serde_json::Value> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}
