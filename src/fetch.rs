//! Upstream dataset acquisition.
//!
//! Everything downstream of here is synchronous: the fetchers pull the raw
//! JSON tables once, and the resolution engine works over the in-memory
//! snapshots. Only the base pokedex is required; every other dataset
//! degrades to "no data" when unavailable.

use crate::dex::Dex;
use crate::errors::{DexResult, FetchError, FetchResult};
use schema::{AbilityInfo, ChaosTables, ItemInfo, LearnsetFileEntry, MoveInfo, SpeciesRecord, TeambuilderTables};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_DATA_BASE: &str = "https://play.pokeathlon.com/data";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Where and how the upstream datasets are fetched.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for DataSources {
    fn default() -> Self {
        DataSources {
            base_url: DEFAULT_DATA_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DataSources {
    pub fn url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file)
    }
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

async fn fetch_json<T: DeserializeOwned>(sources: &DataSources, file: &str) -> FetchResult<T> {
    let url = sources.url(file);
    debug!(%url, "fetching dataset");
    let response = http_client()
        .get(&url)
        .timeout(sources.timeout)
        .send()
        .await
        .map_err(|err| FetchError::Request {
            url: url.clone(),
            message: err.to_string(),
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url,
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(|err| FetchError::Decode {
        url,
        message: err.to_string(),
    })
}

pub async fn fetch_pokedex(
    sources: &DataSources,
) -> FetchResult<HashMap<String, SpeciesRecord>> {
    fetch_json(sources, "pokedex.json").await
}

/// The teambuilder tables, reduced to the chaos layer. A file without a
/// chaos layer is a successful fetch of no overlay.
pub async fn fetch_chaos_tables(sources: &DataSources) -> FetchResult<Option<ChaosTables>> {
    let tables: TeambuilderTables = fetch_json(sources, "teambuilder-tables.json").await?;
    Ok(tables.gen9chaos)
}

pub async fn fetch_learnsets(
    sources: &DataSources,
) -> FetchResult<HashMap<String, LearnsetFileEntry>> {
    fetch_json(sources, "learnsets.json").await
}

pub async fn fetch_moves(sources: &DataSources) -> FetchResult<HashMap<String, MoveInfo>> {
    fetch_json(sources, "moves.json").await
}

pub async fn fetch_abilities(sources: &DataSources) -> FetchResult<HashMap<String, AbilityInfo>> {
    fetch_json(sources, "abilities.json").await
}

pub async fn fetch_items(sources: &DataSources) -> FetchResult<HashMap<String, ItemInfo>> {
    fetch_json(sources, "items.json").await
}

fn ok_or_warn<T>(dataset: &'static str, result: FetchResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(dataset, %err, "optional dataset unavailable, continuing without it");
            None
        }
    }
}

/// Fetch every dataset and assemble a [`Dex`].
///
/// The base pokedex is required; the chaos tables, general learnsets, and
/// move/ability/item metadata are fetched concurrently and degrade to
/// `None` on failure.
pub async fn load_dex(sources: &DataSources) -> DexResult<Dex> {
    let (pokedex, chaos, learnsets, moves, abilities, items) = tokio::join!(
        fetch_pokedex(sources),
        fetch_chaos_tables(sources),
        fetch_learnsets(sources),
        fetch_moves(sources),
        fetch_abilities(sources),
        fetch_items(sources),
    );

    let pokedex = pokedex.map_err(crate::errors::DexError::Fetch)?;
    debug!(entries = pokedex.len(), "loaded base pokedex");

    let mut dex = Dex::new(pokedex);
    match ok_or_warn("teambuilder-tables", chaos) {
        Some(Some(tables)) => dex = dex.with_chaos(tables),
        Some(None) => warn!("teambuilder tables carry no chaos layer"),
        None => {}
    }
    if let Some(learnsets) = ok_or_warn("learnsets", learnsets) {
        dex = dex.with_learnsets(learnsets);
    }
    if let Some(moves) = ok_or_warn("moves", moves) {
        dex = dex.with_moves(moves);
    }
    if let Some(abilities) = ok_or_warn("abilities", abilities) {
        dex = dex.with_abilities(abilities);
    }
    if let Some(items) = ok_or_warn("items", items) {
        dex = dex.with_items(items);
    }
    Ok(dex)
}
