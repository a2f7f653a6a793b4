//! Selectable lines at a station.
//!
//! Only U-Bahn and S-Bahn lines are offered: those are the lines with
//! platforms whose decoration patterns get recorded.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Line, LineRef, Product, StationId};
use crate::lookup::{Lookup, LookupError};

/// Colour used for lines missing from the colour table.
pub const FALLBACK_LINE_COLOR: &str = "#ffffff";

/// Official VBB background colours, by product and line name.
const LINE_COLORS: &[(Product, &str, &str)] = &[
    (Product::Subway, "U1", "#7dad4c"),
    (Product::Subway, "U2", "#da421e"),
    (Product::Subway, "U3", "#16683d"),
    (Product::Subway, "U4", "#f0d722"),
    (Product::Subway, "U5", "#7e5330"),
    (Product::Subway, "U55", "#7e5330"),
    (Product::Subway, "U6", "#8c6dab"),
    (Product::Subway, "U7", "#528dba"),
    (Product::Subway, "U8", "#224f86"),
    (Product::Subway, "U9", "#f3791d"),
    (Product::Suburban, "S1", "#de4da4"),
    (Product::Suburban, "S2", "#005f27"),
    (Product::Suburban, "S25", "#005f27"),
    (Product::Suburban, "S26", "#005f27"),
    (Product::Suburban, "S3", "#0a4c99"),
    (Product::Suburban, "S41", "#ad5937"),
    (Product::Suburban, "S42", "#cb6418"),
    (Product::Suburban, "S45", "#cd9c53"),
    (Product::Suburban, "S46", "#cd9c53"),
    (Product::Suburban, "S47", "#cd9c53"),
    (Product::Suburban, "S5", "#eb7405"),
    (Product::Suburban, "S7", "#816da6"),
    (Product::Suburban, "S75", "#816da6"),
    (Product::Suburban, "S8", "#66aa22"),
    (Product::Suburban, "S85", "#66aa22"),
    (Product::Suburban, "S9", "#992746"),
];

/// Display colour for a line, falling back to white for unknown lines.
pub fn line_color(product: Product, name: &str) -> &'static str {
    LINE_COLORS
        .iter()
        .find(|(p, n, _)| *p == product && *n == name)
        .map(|&(_, _, color)| color)
        .unwrap_or(FALLBACK_LINE_COLOR)
}

/// Turn the raw lines at a station into the selectable set.
///
/// Keeps subway and suburban lines, drops repeated names (first wins),
/// attaches display colours and sorts by name.
pub fn selectable_lines(raw: Vec<LineRef>) -> Vec<Line> {
    let mut seen = HashSet::new();
    let mut lines: Vec<Line> = raw
        .into_iter()
        .filter(|l| l.product.is_rail_rapid_transit())
        .filter(|l| seen.insert(l.name.clone()))
        .map(|l| Line {
            color: line_color(l.product, &l.name),
            name: l.name,
            product: l.product,
        })
        .collect();

    lines.sort_by(|a, b| a.name.cmp(&b.name));
    lines
}

/// Fetch the selectable lines serving a station.
pub async fn lines_for_station<L: Lookup>(
    lookup: &L,
    station: &StationId,
) -> Result<Vec<Line>, LookupError> {
    let raw = lookup.get_lines_at_station(station).await?;
    let total = raw.len();
    let lines = selectable_lines(raw);
    debug!(%station, total, selectable = lines.len(), "built line catalog");
    Ok(lines)
}
