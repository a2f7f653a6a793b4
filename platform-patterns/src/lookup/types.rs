//! Response types for the VBB REST API.
//!
//! Only the fields the tool needs are modelled; everything else in the
//! responses is ignored.

use serde::Deserialize;

use crate::domain::{LineRef, Station, StationId};

/// A location returned by `GET /locations`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDto {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl LocationDto {
    /// Convert to a station, if this location is a stop with a valid id.
    pub fn into_station(self) -> Option<Station> {
        if self.kind != "stop" && self.kind != "station" {
            return None;
        }
        let id = StationId::parse(self.id.as_deref()?).ok()?;
        Some(Station::new(id, self.name?))
    }
}

/// A stop returned by `GET /stops/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lines: Vec<LineRef>,
}
