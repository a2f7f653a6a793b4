//! Mock lookup for working without network access.
//!
//! Loads stations and their lines from a JSON fixture and serves them as if
//! they came from the API. Also counts calls, so tests can check which
//! queries a component issued.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

use crate::domain::{LineRef, Station, StationId};

use super::Lookup;
use super::error::LookupError;

/// One station in the fixture file.
#[derive(Debug, Clone, Deserialize)]
struct FixtureStation {
    id: StationId,
    name: String,
    #[serde(default)]
    lines: Vec<LineRef>,
}

/// Fixture file layout: `{"stations": [{"id", "name", "lines": [...]}]}`.
#[derive(Debug, Deserialize)]
struct Fixture {
    stations: Vec<FixtureStation>,
}

/// Call counters, shared between clones of a mock.
#[derive(Debug, Default)]
struct Calls {
    find: AtomicUsize,
    by_id: AtomicUsize,
    lines: AtomicUsize,
}

/// Lookup backed by an in-memory station list.
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    stations: Vec<Station>,
    lines: HashMap<StationId, Vec<LineRef>>,
    calls: Arc<Calls>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LookupError::MockData {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json).map_err(|e| LookupError::MockData {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    /// Parse fixture JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let fixture: Fixture = serde_json::from_str(json)?;
        let mut mock = Self::new();
        for s in fixture.stations {
            mock = mock.with_station(Station::new(s.id, s.name), s.lines);
        }
        Ok(mock)
    }

    /// Add a station and the lines serving it.
    pub fn with_station(mut self, station: Station, lines: Vec<LineRef>) -> Self {
        self.lines.insert(station.id, lines);
        self.stations.push(station);
        self
    }

    /// Number of `find_stations` calls so far.
    pub fn find_calls(&self) -> usize {
        self.calls.find.load(Ordering::Relaxed)
    }

    /// Number of `get_station_by_id` calls so far.
    pub fn by_id_calls(&self) -> usize {
        self.calls.by_id.load(Ordering::Relaxed)
    }

    /// Number of `get_lines_at_station` calls so far.
    pub fn lines_calls(&self) -> usize {
        self.calls.lines.load(Ordering::Relaxed)
    }

    /// Total lookup calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.find_calls() + self.by_id_calls() + self.lines_calls()
    }
}

impl Lookup for MockLookup {
    async fn find_stations(
        &self,
        query: &str,
        max_results: usize,
        _identifier: &str,
    ) -> Result<Vec<Station>, LookupError> {
        self.calls.find.fetch_add(1, Ordering::Relaxed);
        let needle = query.to_lowercase();
        Ok(self
            .stations
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .take(max_results)
            .cloned()
            .collect())
    }

    async fn get_station_by_id(&self, id: &StationId) -> Result<Station, LookupError> {
        self.calls.by_id.fetch_add(1, Ordering::Relaxed);
        self.stations
            .iter()
            .find(|s| s.id == *id)
            .cloned()
            .ok_or(LookupError::StationNotFound(*id))
    }

    async fn get_lines_at_station(&self, id: &StationId) -> Result<Vec<LineRef>, LookupError> {
        self.calls.lines.fetch_add(1, Ordering::Relaxed);
        self.lines
            .get(id)
            .cloned()
            .ok_or(LookupError::StationNotFound(*id))
    }
}
