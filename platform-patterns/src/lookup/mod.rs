//! Transit data lookup.
//!
//! Station search, station-by-id and lines-at-station queries. The live
//! backend is the VBB REST API; a fixture-backed mock serves the same
//! queries offline.

mod client;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_IDENTIFIER, LookupClientConfig, VbbClient};
pub use error::LookupError;
pub use mock::MockLookup;

use crate::domain::{LineRef, Station, StationId};

/// Queries the pipeline needs from a transit data source.
///
/// This abstraction allows the resolver and catalog to be tested with
/// mock data.
// The tool runs on a current-thread runtime, so futures need not be Send.
#[allow(async_fn_in_trait)]
pub trait Lookup {
    /// Search stations by name, best match first.
    async fn find_stations(
        &self,
        query: &str,
        max_results: usize,
        identifier: &str,
    ) -> Result<Vec<Station>, LookupError>;

    /// Fetch a station by its id.
    async fn get_station_by_id(&self, id: &StationId) -> Result<Station, LookupError>;

    /// All lines calling at a station, any product.
    async fn get_lines_at_station(&self, id: &StationId) -> Result<Vec<LineRef>, LookupError>;
}

/// Lookup backend chosen at startup.
#[derive(Debug, Clone)]
pub enum Backend {
    Vbb(VbbClient),
    Mock(MockLookup),
}

impl Lookup for Backend {
    async fn find_stations(
        &self,
        query: &str,
        max_results: usize,
        identifier: &str,
    ) -> Result<Vec<Station>, LookupError> {
        match self {
            Backend::Vbb(c) => c.find_stations(query, max_results, identifier).await,
            Backend::Mock(m) => m.find_stations(query, max_results, identifier).await,
        }
    }

    async fn get_station_by_id(&self, id: &StationId) -> Result<Station, LookupError> {
        match self {
            Backend::Vbb(c) => c.get_station_by_id(id).await,
            Backend::Mock(m) => m.get_station_by_id(id).await,
        }
    }

    async fn get_lines_at_station(&self, id: &StationId) -> Result<Vec<LineRef>, LookupError> {
        match self {
            Backend::Vbb(c) => c.get_lines_at_station(id).await,
            Backend::Mock(m) => m.get_lines_at_station(id).await,
        }
    }
}
