//! Rail lines and line selections.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Transport product of a line, as reported by the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Suburban,
    Subway,
    Tram,
    Bus,
    Ferry,
    Express,
    Regional,
    #[serde(other)]
    Other,
}

impl Product {
    /// Whether lines of this product have platforms worth recording.
    pub fn is_rail_rapid_transit(self) -> bool {
        matches!(self, Product::Subway | Product::Suburban)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Product::Suburban => "suburban",
            Product::Subway => "subway",
            Product::Tram => "tram",
            Product::Bus => "bus",
            Product::Ferry => "ferry",
            Product::Express => "express",
            Product::Regional => "regional",
            Product::Other => "other",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line serving a station, as returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineRef {
    pub name: String,
    pub product: Product,
}

impl LineRef {
    pub fn new(name: impl Into<String>, product: Product) -> Self {
        Self {
            name: name.into(),
            product,
        }
    }
}

/// A selectable line with its display colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub name: String,
    pub product: Product,
    /// Background colour used when rendering the line name.
    pub color: &'static str,
}

/// Result of a line multi-select: every offered line name with whether it
/// was picked, in the order the choices were offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSelection {
    choices: Vec<(String, bool)>,
}

impl LineSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice. Later records for the same name replace earlier ones.
    pub fn set(&mut self, name: impl Into<String>, selected: bool) {
        let name = name.into();
        match self.choices.iter_mut().find(|(n, _)| *n == name) {
            Some(choice) => choice.1 = selected,
            None => self.choices.push((name, selected)),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.choices.iter().any(|(n, s)| n == name && *s)
    }

    /// Validate the selection, returning the selected names in offer order.
    pub fn validate(&self) -> Result<Vec<String>, ValidationError> {
        let selected: Vec<String> = self
            .choices
            .iter()
            .filter(|(_, s)| *s)
            .map(|(n, _)| n.clone())
            .collect();

        if selected.is_empty() {
            return Err(ValidationError::NoLinesSelected);
        }
        Ok(selected)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for LineSelection {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut selection = LineSelection::new();
        for (name, selected) in iter {
            selection.set(name, selected);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_lowercase() {
        let line: LineRef = serde_json::from_str(r#"{"name":"U2","product":"subway"}"#).unwrap();
        assert_eq!(line, LineRef::new("U2", Product::Subway));
    }

    #[test]
    fn unknown_product_is_other() {
        let line: LineRef =
            serde_json::from_str(r#"{"name":"X","product":"hovercraft"}"#).unwrap();
        assert_eq!(line.product, Product::Other);
    }

    #[test]
    fn rapid_transit_products() {
        assert!(Product::Subway.is_rail_rapid_transit());
        assert!(Product::Suburban.is_rail_rapid_transit());
        assert!(!Product::Tram.is_rail_rapid_transit());
        assert!(!Product::Bus.is_rail_rapid_transit());
        assert!(!Product::Regional.is_rail_rapid_transit());
    }

    #[test]
    fn selection_keeps_offer_order() {
        let selection: LineSelection = [("U2", true), ("U5", false), ("U8", true)]
            .into_iter()
            .collect();
        assert_eq!(selection.validate().unwrap(), vec!["U2", "U8"]);
    }

    #[test]
    fn all_false_selection_fails() {
        let selection: LineSelection = [("U2", false), ("U5", false)].into_iter().collect();
        assert_eq!(selection.validate(), Err(ValidationError::NoLinesSelected));
    }

    #[test]
    fn empty_selection_fails() {
        assert_eq!(
            LineSelection::new().validate(),
            Err(ValidationError::NoLinesSelected)
        );
    }

    #[test]
    fn set_replaces_existing_choice() {
        let mut selection = LineSelection::new();
        selection.set("S5", false);
        selection.set("S5", true);
        assert!(selection.is_selected("S5"));
        assert_eq!(selection.validate().unwrap(), vec!["S5"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Validation returns exactly the selected names, in order
        #[test]
        fn validate_filters_in_order(flags in proptest::collection::vec(any::<bool>(), 0..12)) {
            let selection: LineSelection = flags
                .iter()
                .enumerate()
                .map(|(i, s)| (format!("L{i}"), *s))
                .collect();
            let expected: Vec<String> = flags
                .iter()
                .enumerate()
                .filter(|(_, s)| **s)
                .map(|(i, _)| format!("L{i}"))
                .collect();

            match selection.validate() {
                Ok(names) => prop_assert_eq!(names, expected),
                Err(e) => {
                    prop_assert!(expected.is_empty());
                    prop_assert_eq!(e, ValidationError::NoLinesSelected);
                }
            }
        }
    }
}
