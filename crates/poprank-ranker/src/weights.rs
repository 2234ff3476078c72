//! Source weight table.
//!
//! Weights come from `config.sourceWeights` in the input document. Only a
//! positive finite weight lets a source into the weighted combination; a
//! missing, zero, negative or non-numeric entry excludes it.

use std::collections::BTreeMap;

use poprank_common::WeightTable;
use serde_json::Value;
use tracing::debug;

use crate::coerce::finite_value;

/// Weight per source name, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceWeights {
    table: WeightTable,
}

impl SourceWeights {
    pub fn new(table: WeightTable) -> Self {
        Self { table }
    }

    /// Build the table from raw document values, dropping non-numeric entries.
    pub fn from_raw(raw: &BTreeMap<String, Value>) -> Self {
        let mut table = WeightTable::new();
        for (name, value) in raw {
            match finite_value(value) {
                Some(w) => {
                    table.insert(name.clone(), w);
                }
                None => debug!(source = %name, "ignoring non-numeric source weight"),
            }
        }
        Self { table }
    }

    /// The weight a source contributes with, if it is eligible.
    pub fn positive(&self, source: &str) -> Option<f64> {
        self.table.get(source).copied().filter(|w| *w > 0.0)
    }

    pub fn as_table(&self) -> &WeightTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_drops_garbage() {
        let raw: BTreeMap<String, Value> = serde_json::from_value(json!({
            "poll": 0.75,
            "web": "0.25",
            "broken": "lots",
            "nothing": null
        }))
        .unwrap();
        let weights = SourceWeights::from_raw(&raw);
        assert_eq!(weights.as_table().len(), 2);
        assert_eq!(weights.positive("poll"), Some(0.75));
        assert_eq!(weights.positive("web"), Some(0.25));
        assert_eq!(weights.positive("broken"), None);
    }

    #[test]
    fn test_non_positive_weights_are_ineligible() {
        let weights = SourceWeights::new(WeightTable::from([
            ("zero".to_string(), 0.0),
            ("negative".to_string(), -1.0),
        ]));
        assert_eq!(weights.positive("zero"), None);
        assert_eq!(weights.positive("negative"), None);
        assert_eq!(weights.as_table().get("negative"), Some(&-1.0));
    }

    #[test]
    fn test_unknown_source_is_ineligible() {
        let weights = SourceWeights::new(WeightTable::from([("poll".to_string(), 1.0)]));
        assert_eq!(weights.positive("anything"), None);
    }
}
