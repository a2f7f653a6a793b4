//! Platform pattern data entry.
//!
//! An interactive tool that asks for a station, its lines, neighbouring
//! stations, pattern colours and an optional source image, then appends the
//! record to an NDJSON dataset.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod pipeline;
pub mod prompt;
pub mod resolver;

pub use error::Error;
