//! The dataset record.

use serde::Serialize;

use super::color::Color;
use super::image::ImageRef;
use super::station::Station;

/// One platform decoration pattern, as persisted in the dataset.
///
/// Optional fields are left out of the JSON entirely when absent; the
/// dataset never contains `null` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub station: Station,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_station: Option<Station>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_station: Option<Station>,
    pub colors: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Entry {
    /// Assemble an entry from already-validated parts.
    pub fn build(
        station: Station,
        lines: Vec<String>,
        previous_station: Option<Station>,
        next_station: Option<Station>,
        colors: Vec<Color>,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            station,
            lines,
            previous_station,
            next_station,
            colors,
            image,
        }
    }

    /// Serialize as a single NDJSON line, including the trailing newline.
    pub fn to_ndjson(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
