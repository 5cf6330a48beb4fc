//! PokeAPI client: single lookups and concurrent recommendation batches.

use crate::cache;
use crate::config::api_base_url;
use crate::error::LookupError;
use crate::models::{Pokemon, PokemonResource};
use crate::utils::normalize_query;
use futures::future::join_all;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode, Url};
use std::fmt::Display;
use std::future::Future;

#[derive(Clone)]
pub struct PokeApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a free-text name or numeric id to a Pokémon.
    pub async fn lookup(&self, query: &str) -> Result<Pokemon, LookupError> {
        let query = normalize_query(query).ok_or(LookupError::EmptyQuery)?;

        if let Some(hit) = cache::get(&query) {
            debug!("Cache hit for '{}'", query);
            return Ok(hit);
        }

        let url = build_lookup_url(&self.base_url, &query)?;
        let response = self.http_client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(query)),
            status if !status.is_success() => {
                return Err(LookupError::Status {
                    status: status.as_u16(),
                    query,
                })
            }
            _ => {}
        }

        let body = response.text().await?;
        let pokemon = parse_pokemon(&body)?;
        cache::insert(&pokemon);
        debug!(
            "Fetched #{} {} ({} cache keys)",
            pokemon.id,
            pokemon.name,
            cache::len()
        );
        Ok(pokemon)
    }

    pub async fn lookup_id(&self, id: u32) -> Result<Pokemon, LookupError> {
        self.lookup(&id.to_string()).await
    }
}

/// `{base}/pokemon/{query}` with the query percent-encoded as one path segment.
pub fn build_lookup_url(base_url: &str, query: &str) -> Result<Url, LookupError> {
    let mut url = Url::parse(base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .push("pokemon")
        .push(query);
    Ok(url)
}

pub fn parse_pokemon(body: &str) -> Result<Pokemon, LookupError> {
    let resource: PokemonResource = serde_json::from_str(body)?;
    Ok(resource.into())
}

/// Fetch every id concurrently and keep the ones that resolved.
pub async fn fetch_recommendations(client: &PokeApiClient, ids: &[u32]) -> Vec<Pokemon> {
    collect_successes(ids, |id| client.lookup_id(id)).await
}

/// Run `lookup` for all ids at once; failures are dropped, survivors keep the
/// order of `ids`.
pub async fn collect_successes<T, E, F, Fut>(ids: &[u32], lookup: F) -> Vec<T>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let results = join_all(ids.iter().map(|&id| lookup(id))).await;

    results
        .into_iter()
        .zip(ids)
        .filter_map(|(result, id)| match result {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Dropping recommendation #{}: {}", id, e);
                None
            }
        })
        .collect()
}
