//! Input document shape.
//!
//! The document is produced upstream by the scrapers that collect daily
//! popularity figures. Only the outer structure is typed: per-person scores and
//! configured weights stay as raw JSON values so that a single bad entry never
//! rejects the whole file. Numeric filtering happens in the ranker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level input: `{ config?: { sourceWeights? }, days?: [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub config: Option<InputConfig>,

    #[serde(default)]
    pub days: Option<Vec<DayRecord>>,
}

impl InputDocument {
    /// Parse a document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Raw configured weights, empty when the document carries none.
    pub fn source_weights(&self) -> BTreeMap<String, Value> {
        self.config
            .as_ref()
            .and_then(|c| c.source_weights.clone())
            .unwrap_or_default()
    }

    /// Day records in document order (not yet sorted).
    pub fn days(&self) -> &[DayRecord] {
        self.days.as_deref().unwrap_or(&[])
    }
}

/// Per-run configuration embedded in the input document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    /// Source name → weight. Non-numeric and non-positive weights exclude the source.
    #[serde(default)]
    pub source_weights: Option<BTreeMap<String, Value>>,
}

/// One day of measurements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// Sortable date key, normally `YYYY-MM-DD`.
    pub date: String,

    #[serde(default)]
    pub sources: Vec<Source>,

    /// Free-form label describing the vote volume behind the day's figures.
    #[serde(default)]
    pub votes_label: Option<String>,

    /// Headlines attached to the day, passed through untouched.
    #[serde(default)]
    pub news: Option<Vec<Value>>,
}

/// A named contributor of per-person scores for one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub values: Option<BTreeMap<String, Value>>,
}

impl Source {
    /// Person → raw score pairs; empty when `values` is absent.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter().flat_map(|v| v.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_defaults() {
        let doc = InputDocument::from_slice(b"{}").unwrap();
        assert!(doc.days().is_empty());
        assert!(doc.source_weights().is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let doc: InputDocument = serde_json::from_value(json!({
            "config": { "sourceWeights": { "poll": 0.7, "web": "0.3" } },
            "days": [{
                "date": "2024-01-01",
                "votesLabel": "12k votes",
                "sources": [{ "name": "poll", "values": { "A": 60, "B": null } }],
                "news": [{ "title": "headline" }]
            }]
        }))
        .unwrap();

        let weights = doc.source_weights();
        assert_eq!(weights.get("poll"), Some(&json!(0.7)));
        assert_eq!(weights.get("web"), Some(&json!("0.3")));

        let day = &doc.days()[0];
        assert_eq!(day.votes_label.as_deref(), Some("12k votes"));
        assert_eq!(day.news.as_ref().map(Vec::len), Some(1));
        assert_eq!(day.sources[0].entries().count(), 2);
    }

    #[test]
    fn test_source_without_values_has_no_entries() {
        let src: Source = serde_json::from_value(json!({ "name": "empty" })).unwrap();
        assert_eq!(src.entries().count(), 0);
    }

    #[test]
    fn test_non_array_days_is_rejected() {
        let err = InputDocument::from_slice(br#"{"days": {"2024-01-01": []}}"#);
        assert!(err.is_err());
    }
}
