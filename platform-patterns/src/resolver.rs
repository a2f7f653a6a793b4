//! Station resolution and autocomplete suggestions.
//!
//! Free text is searched by name; a 12-digit input is taken as a station id
//! and fetched directly, bypassing search entirely.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, info};

use crate::domain::{Station, StationId};
use crate::error::Error;
use crate::lookup::{Lookup, LookupError};

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// An autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text shown to the user: `"<name> – <id>"`.
    pub label: String,
    /// Value submitted when the suggestion is picked.
    pub id: StationId,
}

impl Suggestion {
    pub fn for_station(station: &Station) -> Self {
        Self {
            label: format!("{} – {}", station.name, station.id),
            id: station.id,
        }
    }
}

/// Configuration for the suggestion cache.
#[derive(Debug, Clone)]
pub struct SuggestionCacheConfig {
    /// TTL for cached suggestion lists.
    pub ttl: Duration,

    /// Maximum number of cached inputs.
    pub max_capacity: u64,
}

impl Default for SuggestionCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 256,
        }
    }
}

/// Resolves user input to stations.
pub struct StationResolver<'a, L: Lookup> {
    lookup: &'a L,
    identifier: String,
    suggestions: MokaCache<String, Arc<Vec<Suggestion>>>,
}

impl<'a, L: Lookup> StationResolver<'a, L> {
    /// Create a new resolver.
    pub fn new(lookup: &'a L, identifier: impl Into<String>) -> Self {
        Self::with_cache(lookup, identifier, &SuggestionCacheConfig::default())
    }

    /// Create a new resolver with a custom suggestion cache.
    pub fn with_cache(
        lookup: &'a L,
        identifier: impl Into<String>,
        cache: &SuggestionCacheConfig,
    ) -> Self {
        let suggestions = MokaCache::builder()
            .time_to_live(cache.ttl)
            .max_capacity(cache.max_capacity)
            .build();

        Self {
            lookup,
            identifier: identifier.into(),
            suggestions,
        }
    }

    /// Resolve a query to a station.
    ///
    /// Empty input means "no station" and returns `Ok(None)` without a
    /// lookup. A 12-digit id is fetched directly and lookup errors for it
    /// are returned as they are. Anything else is searched by name, taking
    /// the single best match.
    pub async fn resolve(&self, query: &str) -> Result<Option<Station>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        if let Ok(id) = StationId::parse(query) {
            debug!(%id, "resolving station by id");
            let station = self.lookup.get_station_by_id(&id).await?;
            return Ok(Some(station));
        }

        debug!(query, "searching station");
        let mut found = self
            .lookup
            .find_stations(query, 1, &self.identifier)
            .await?;
        if found.is_empty() {
            return Err(Error::NotFound(query.to_string()));
        }

        let station = found.swap_remove(0);
        info!(id = %station.id, name = %station.name, "resolved station");
        Ok(Some(station))
    }

    /// Up to five suggestions for partial input.
    ///
    /// Empty input yields no suggestions and no lookup.
    pub async fn suggest(&self, input: &str) -> Result<Vec<Suggestion>, LookupError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(cached) = self.suggestions.get(input).await {
            return Ok(cached.as_ref().clone());
        }

        let stations = self
            .lookup
            .find_stations(input, MAX_SUGGESTIONS, &self.identifier)
            .await?;
        let suggestions: Vec<Suggestion> = stations
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(Suggestion::for_station)
            .collect();

        self.suggestions
            .insert(input.to_string(), Arc::new(suggestions.clone()))
            .await;
        Ok(suggestions)
    }
}
