//! Id-keyed style overrides shared down a layout tree.

use std::collections::HashMap;

use anyhow::{Context as _, Result};
use serde::Deserialize;

use crate::style::Style;

/// Styles keyed by node id, looked up once per resolution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GlobalStyles(HashMap<String, Style>);

impl GlobalStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `{ "<id>": { ...style } }` object.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("parsing global style table")
    }

    pub fn insert(&mut self, id: impl Into<String>, style: Style) -> Option<Style> {
        self.0.insert(id.into(), style)
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Table where entries of `nearer` overlay same-id entries of `self` field by field.
    #[must_use]
    pub fn merged_with(&self, nearer: &Self) -> Self {
        let mut merged = self.clone();
        for (id, style) in &nearer.0 {
            merged
                .0
                .entry(id.clone())
                .and_modify(|existing| existing.apply(style))
                .or_insert_with(|| style.clone());
        }
        merged
    }
}

impl<Id: Into<String>> FromIterator<(Id, Style)> for GlobalStyles {
    fn from_iter<Iter: IntoIterator<Item = (Id, Style)>>(iter: Iter) -> Self {
        Self(iter.into_iter().map(|(id, style)| (id.into(), style)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed_style::SizeSpecified;

    #[test]
    fn nearer_table_overlays_per_field() {
        let outer = GlobalStyles::from_json(r#"{"card": {"width": 100, "height": 40}, "title": {"width": 5}}"#)
            .unwrap();
        let inner = GlobalStyles::from_json(r#"{"card": {"width": 60}}"#).unwrap();
        let merged = outer.merged_with(&inner);
        let card = merged.get("card").unwrap();
        assert_eq!(card.width, Some(SizeSpecified::Px(60.0)));
        assert_eq!(card.height, Some(SizeSpecified::Px(40.0)));
        assert!(merged.get("title").is_some());
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn insert_replaces_and_returns_the_previous_entry() {
        let mut table = GlobalStyles::new();
        assert!(table.is_empty());
        assert!(table.insert("chip", Style::from_json(r#"{"width": 10}"#).unwrap()).is_none());
        let previous = table.insert("chip", Style::from_json(r#"{"width": 20}"#).unwrap());
        assert_eq!(previous.and_then(|style| style.width), Some(SizeSpecified::Px(10.0)));
        assert_eq!(table.get("chip").and_then(|style| style.width), Some(SizeSpecified::Px(20.0)));
        assert_eq!(table.len(), 1);
    }
}
