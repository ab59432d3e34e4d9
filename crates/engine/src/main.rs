//! Traitscribe - render trait description templates from game data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use traitscribe_domain::TraitDescription;
use traitscribe_engine::infrastructure::{load_dotenv_from_repo_root, EngineConfig, TraitLoader};
use traitscribe_engine::TierRenderer;

const USAGE: &str = "Usage: traitscribe <command>

Commands:
  render [PATH]   Render every trait in a JSON data file
                  (defaults to $TRAITSCRIBE_DATA_PATH)
  help            Show this message";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();
    let config = EngineConfig::from_env();

    // Logs go to stderr; stdout carries only rendered text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("render") => {
            let path = args
                .next()
                .map(PathBuf::from)
                .or_else(|| config.data_path.clone())
                .context("No input file given and TRAITSCRIBE_DATA_PATH is not set")?;
            render(&path, &config).await
        }
        Some("help") | Some("--help") | Some("-h") | None => {
            println!("{USAGE}");
            Ok(())
        }
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
    }
}

async fn render(path: &Path, config: &EngineConfig) -> anyhow::Result<()> {
    let records = TraitLoader::load(path)
        .await
        .with_context(|| format!("loading trait data from {}", path.display()))?;

    tracing::info!("Rendering {} traits from {}", records.len(), path.display());

    let renderer = TierRenderer::default();
    let blocks: Vec<String> = records
        .iter()
        .map(|record| render_record(&renderer, record, config))
        .collect();

    println!("{}", blocks.join("\n\n"));
    Ok(())
}

fn render_record(
    renderer: &TierRenderer,
    record: &TraitDescription,
    config: &EngineConfig,
) -> String {
    for tier in record.tiers().unwrap_or_default() {
        if let Err(e) = tier.validate() {
            tracing::warn!(trait_name = record.display_name(), error = %e, "Suspicious tier data");
        }
    }

    let rendered = renderer.render_trait(record);
    let text = if config.show_ranges {
        rendered.to_text_with_ranges()
    } else {
        rendered.to_string()
    };

    if text.is_empty() {
        tracing::debug!(trait_name = record.display_name(), "Trait rendered no text");
        return record.display_name().to_string();
    }
    format!("{}\n{}", record.display_name(), text)
}
