//! Pattern colour types.
//!
//! Colours are entered either by picking names from a fixed palette or by
//! typing hex values one at a time. Both end up as a [`Color`] in the entry.

use std::fmt;

use serde::{Serialize, Serializer};

use super::error::ValidationError;

/// A normalized hex colour.
///
/// Always lowercase with a leading `#`, and in the shortest form that
/// represents the same colour: `#FFFFFF` becomes `#fff`, while `#aabbcd`
/// stays six digits.
///
/// # Examples
///
/// ```
/// use platform_patterns::domain::HexColor;
///
/// assert_eq!(HexColor::parse("#FFFFFF").unwrap().as_str(), "#fff");
/// assert_eq!(HexColor::parse("c0c0c0").unwrap().as_str(), "#c0c0c0");
/// assert!(HexColor::parse("#ff00").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and normalize a hex colour. The leading `#` is optional.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ValidationError::invalid_color(input, "must not be empty"));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_color(
                input,
                "must contain only hex digits",
            ));
        }
        if digits.len() != 3 && digits.len() != 6 {
            return Err(ValidationError::invalid_color(
                input,
                "must be 3 or 6 hex digits",
            ));
        }

        let digits = digits.to_ascii_lowercase();
        let b = digits.as_bytes();
        let short = if b.len() == 6 && b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
            format!("#{}{}{}", b[0] as char, b[2] as char, b[4] as char)
        } else {
            format!("#{digits}")
        };

        Ok(HexColor(short))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        rgb_of(&self.0).unwrap_or((255, 255, 255))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse `#rgb` or `#rrggbb` into components.
pub fn rgb_of(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 => {
            let expand = |i: usize| channel(&digits[i..=i].repeat(2));
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// The CSS 2 named colours offered for palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Black,
    Silver,
    Gray,
    White,
    Maroon,
    Red,
    Purple,
    Fuchsia,
    Green,
    Lime,
    Olive,
    Yellow,
    Navy,
    Blue,
    Teal,
    Aqua,
    Orange,
}

impl PaletteColor {
    /// All palette colours in display order.
    pub const ALL: [PaletteColor; 17] = [
        PaletteColor::Black,
        PaletteColor::Silver,
        PaletteColor::Gray,
        PaletteColor::White,
        PaletteColor::Maroon,
        PaletteColor::Red,
        PaletteColor::Purple,
        PaletteColor::Fuchsia,
        PaletteColor::Green,
        PaletteColor::Lime,
        PaletteColor::Olive,
        PaletteColor::Yellow,
        PaletteColor::Navy,
        PaletteColor::Blue,
        PaletteColor::Teal,
        PaletteColor::Aqua,
        PaletteColor::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::Silver => "silver",
            PaletteColor::Gray => "gray",
            PaletteColor::White => "white",
            PaletteColor::Maroon => "maroon",
            PaletteColor::Red => "red",
            PaletteColor::Purple => "purple",
            PaletteColor::Fuchsia => "fuchsia",
            PaletteColor::Green => "green",
            PaletteColor::Lime => "lime",
            PaletteColor::Olive => "olive",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Navy => "navy",
            PaletteColor::Blue => "blue",
            PaletteColor::Teal => "teal",
            PaletteColor::Aqua => "aqua",
            PaletteColor::Orange => "orange",
        }
    }

    /// CSS hex value of the colour.
    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Black => "#000000",
            PaletteColor::Silver => "#c0c0c0",
            PaletteColor::Gray => "#808080",
            PaletteColor::White => "#ffffff",
            PaletteColor::Maroon => "#800000",
            PaletteColor::Red => "#ff0000",
            PaletteColor::Purple => "#800080",
            PaletteColor::Fuchsia => "#ff00ff",
            PaletteColor::Green => "#008000",
            PaletteColor::Lime => "#00ff00",
            PaletteColor::Olive => "#808000",
            PaletteColor::Yellow => "#ffff00",
            PaletteColor::Navy => "#000080",
            PaletteColor::Blue => "#0000ff",
            PaletteColor::Teal => "#008080",
            PaletteColor::Aqua => "#00ffff",
            PaletteColor::Orange => "#ffa500",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colour as recorded in an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Named(PaletteColor),
    Hex(HexColor),
}

impl Color {
    pub fn as_str(&self) -> &str {
        match self {
            Color::Named(c) => c.name(),
            Color::Hex(h) => h.as_str(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Validate the names picked from the palette multi-select.
pub fn parse_palette_selection<S: AsRef<str>>(names: &[S]) -> Result<Vec<Color>, ValidationError> {
    if names.is_empty() {
        return Err(ValidationError::NoColorsSelected);
    }

    let colors = names
        .iter()
        .map(|n| {
            PaletteColor::from_name(n.as_ref())
                .map(Color::Named)
                .ok_or_else(|| ValidationError::invalid_color(n.as_ref(), "not in the palette"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(dedup_colors(colors))
}

/// Validate the first (mandatory) colour of a sequential hex entry.
pub fn parse_first_hex_color(input: &str) -> Result<Color, ValidationError> {
    HexColor::parse(input).map(Color::Hex)
}

/// Validate a follow-up colour of a sequential hex entry.
///
/// Empty input ends the sequence and yields `None`.
pub fn parse_next_hex_color(input: &str) -> Result<Option<Color>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    HexColor::parse(input).map(|c| Some(Color::Hex(c)))
}

/// Remove duplicates, keeping the first occurrence of each colour.
pub fn dedup_colors(colors: Vec<Color>) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(colors.len());
    for color in colors {
        if !out.contains(&color) {
            out.push(color);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_reducible_hex() {
        assert_eq!(HexColor::parse("#ffffff").unwrap().as_str(), "#fff");
        assert_eq!(HexColor::parse("#FF0000").unwrap().as_str(), "#f00");
        assert_eq!(HexColor::parse("112233").unwrap().as_str(), "#123");
    }

    #[test]
    fn keeps_irreducible_hex() {
        assert_eq!(HexColor::parse("#ffa500").unwrap().as_str(), "#ffa500");
        assert_eq!(HexColor::parse("#AbCdEf").unwrap().as_str(), "#abcdef");
    }

    #[test]
    fn three_digit_is_lowercased() {
        assert_eq!(HexColor::parse("#ABC").unwrap().as_str(), "#abc");
    }

    #[test]
    fn rejects_wrong_length() {
        let err = HexColor::parse("#ff00").unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_color("#ff00", "must be 3 or 6 hex digits")
        );
        assert!(HexColor::parse("#fffffff").is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let err = HexColor::parse("#ggg").unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_color("#ggg", "must contain only hex digits")
        );
        assert!(HexColor::parse("red").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#").is_err());
        assert!(HexColor::parse("   ").is_err());
    }

    #[test]
    fn rgb_components() {
        assert_eq!(HexColor::parse("#fff").unwrap().rgb(), (255, 255, 255));
        assert_eq!(HexColor::parse("#ffa500").unwrap().rgb(), (255, 165, 0));
        assert_eq!(rgb_of("#7dad4c"), Some((0x7d, 0xad, 0x4c)));
        assert_eq!(rgb_of("nope"), None);
    }

    #[test]
    fn palette_has_seventeen_unique_names() {
        let mut names: Vec<_> = PaletteColor::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn palette_hex_values_are_valid() {
        for color in PaletteColor::ALL {
            assert!(HexColor::parse(color.hex()).is_ok(), "{color}");
            assert_eq!(PaletteColor::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn palette_selection() {
        let colors = parse_palette_selection(&["red", "navy"]).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::Named(PaletteColor::Red),
                Color::Named(PaletteColor::Navy)
            ]
        );
    }

    #[test]
    fn empty_palette_selection_fails() {
        let empty: [&str; 0] = [];
        assert_eq!(
            parse_palette_selection(&empty),
            Err(ValidationError::NoColorsSelected)
        );
    }

    #[test]
    fn unknown_palette_name_fails() {
        assert!(matches!(
            parse_palette_selection(&["chartreuse"]),
            Err(ValidationError::InvalidColor { .. })
        ));
    }

    #[test]
    fn first_hex_color_is_mandatory() {
        assert!(parse_first_hex_color("").is_err());
        assert_eq!(
            parse_first_hex_color("#ff0000").unwrap(),
            Color::Hex(HexColor::parse("#f00").unwrap())
        );
    }

    #[test]
    fn empty_next_color_ends_sequence() {
        assert_eq!(parse_next_hex_color("").unwrap(), None);
        assert_eq!(parse_next_hex_color("  ").unwrap(), None);
        assert!(parse_next_hex_color("#12").is_err());
        assert!(parse_next_hex_color("#123").unwrap().is_some());
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let c = |s: &str| Color::Hex(HexColor::parse(s).unwrap());
        let colors = vec![c("#ff0000"), c("#00f"), c("#f00"), c("#0000ff")];
        assert_eq!(dedup_colors(colors), vec![c("#f00"), c("#00f")]);
    }

    #[test]
    fn color_serializes_as_string() {
        let colors = vec![
            Color::Named(PaletteColor::Red),
            Color::Hex(HexColor::parse("#AABBCC").unwrap()),
        ];
        assert_eq!(serde_json::to_string(&colors).unwrap(), r##"["red","#abc"]"##);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing an already-normalized colour is a no-op
        #[test]
        fn normalization_idempotent(s in "#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})") {
            let once = HexColor::parse(&s).unwrap();
            let twice = HexColor::parse(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Normalization preserves the colour value
        #[test]
        fn normalization_preserves_rgb(s in "[0-9a-f]{6}") {
            let color = HexColor::parse(&s).unwrap();
            prop_assert_eq!(Some(color.rgb()), rgb_of(&s));
        }

        /// Six doubled digits always shorten to three
        #[test]
        fn doubled_digits_shorten(r in "[0-9a-f]", g in "[0-9a-f]", b in "[0-9a-f]") {
            let long = format!("#{r}{r}{g}{g}{b}{b}");
            let got = HexColor::parse(&long).unwrap();
            prop_assert_eq!(got.as_str(), format!("#{r}{g}{b}"));
        }

        /// Lengths other than 3 and 6 are rejected
        #[test]
        fn bad_length_rejected(s in "#([0-9a-f]{1,2}|[0-9a-f]{4,5}|[0-9a-f]{7,9})") {
            prop_assert!(HexColor::parse(&s).is_err());
        }
    }
}
