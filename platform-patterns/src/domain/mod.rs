//! Domain types for platform pattern entries.
//!
//! This module contains the validators and normalizers that turn raw prompt
//! answers into typed values. All types enforce their invariants at
//! construction time, so the entry builder can trust its inputs.

mod color;
mod entry;
mod error;
mod image;
mod line;
mod station;

pub use color::{
    Color, HexColor, PaletteColor, dedup_colors, parse_first_hex_color, parse_next_hex_color,
    parse_palette_selection, rgb_of,
};
pub use entry::Entry;
pub use error::ValidationError;
pub use image::{
    ImageRef, ImageSource, parse_commons_filename, parse_flickr_image_id, parse_flickr_user,
    parse_image_url,
};
pub use line::{Line, LineRef, LineSelection, Product};
pub use station::{InvalidStationId, Station, StationId};
