use anyhow::Context as _;
use config::Config;
use postmatch_data::constants::{HeroDirectory, HeroInfo, ItemCatalog, ItemInfo};
use postmatch_data::model::{BenchmarkTable, MatchRecord, MatchSummary};
use postmatch_engine::{select_desired, MatchAnalyzer};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs::read_to_string;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;

/// One already-fetched match: the subject's summary row plus, when the
/// provider has parsed the replay, the full roster record and the hero's
/// benchmark table.
#[derive(Debug, serde::Deserialize)]
struct MatchInput {
    summary: MatchSummary,
    detail: Option<MatchRecord>,
    benchmarks: Option<BenchmarkTable>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Loading constants directories");
    let heroes: Vec<HeroInfo> = read_json(&config.heroes_path)
        .await
        .context("Failed to load hero constants")?;
    let items: HashMap<String, ItemInfo> = read_json(&config.items_path)
        .await
        .context("Failed to load item constants")?;
    let analyzer = MatchAnalyzer::new(
        HeroDirectory::from_heroes(heroes),
        ItemCatalog::from_constants(items),
    );

    info!("Loading matches from {}", config.matches_path.display());
    let matches: Vec<MatchInput> = read_json(&config.matches_path)
        .await
        .context("Failed to load match data")?;

    let mut results = Vec::with_capacity(matches.len());
    for entry in &matches {
        let benchmarks = if config.disable_benchmarks {
            None
        } else {
            entry.benchmarks.as_ref()
        };
        let result = match &entry.detail {
            Some(detail) => {
                analyzer.analyze(&entry.summary, detail, config.account_id, benchmarks)
            }
            None => analyzer.analyze_unparsed(&entry.summary),
        };
        results.push(result);
    }

    let selected = select_desired(results, config.desired_count, config.primary_farmer_only);
    info!(
        "Selected {} of {} analyzed matches",
        selected.len(),
        matches.len()
    );

    for result in &selected {
        println!("{}", report::render(result));
    }

    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = read_to_string(path).await?;
    Ok(serde_json::from_str(&contents)?)
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_thread_ids(false)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}
