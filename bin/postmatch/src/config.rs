use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub heroes_path: PathBuf,
    pub items_path: PathBuf,
    pub matches_path: PathBuf,
    pub account_id: i64,
    pub desired_count: usize,
    pub primary_farmer_only: bool,
    pub disable_benchmarks: bool,
}

impl Config {
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };

        config.heroes_path = std::env::var("HEROES_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(config.heroes_path);
        config.items_path = std::env::var("ITEMS_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(config.items_path);
        config.matches_path = std::env::var("MATCHES_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(config.matches_path);
        config.account_id = std::env::var("ACCOUNT_ID")
            .map(|v| v.parse().expect("Should be numeric"))
            .ok()
            .unwrap_or(config.account_id);
        config.desired_count = std::env::var("DESIRED_COUNT")
            .map(|v| v.parse().expect("Should be numeric"))
            .ok()
            .unwrap_or(config.desired_count);
        config.primary_farmer_only = std::env::var("PRIMARY_FARMER_ONLY")
            .map(|v| v.parse().expect("Should be a boolean"))
            .ok()
            .unwrap_or(config.primary_farmer_only);
        config.disable_benchmarks = std::env::var("DISABLE_BENCHMARKS")
            .map(|v| v.parse().expect("Should be a boolean"))
            .ok()
            .unwrap_or(config.disable_benchmarks);

        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }
}
