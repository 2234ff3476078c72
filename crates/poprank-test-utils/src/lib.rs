//! Fixture builders shared by the poprank test suites.

use std::collections::BTreeMap;

use poprank_common::{DayRecord, InputConfig, InputDocument, PercentMap, PositionMap, Source};
use serde_json::Value;

/// A source with the given `{ person: score }` JSON object as values.
pub fn source(name: &str, values: Value) -> Source {
    let values: BTreeMap<String, Value> = match values {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("source values must be a JSON object, got {other}"),
    };
    Source { name: name.to_string(), values: Some(values) }
}

/// A day record without label or news.
pub fn day(date: &str, sources: Vec<Source>) -> DayRecord {
    DayRecord {
        date: date.to_string(),
        sources,
        votes_label: None,
        news: None,
    }
}

/// A document with the given weights (`{ source: weight }`) and days.
pub fn document(weights: Value, days: Vec<DayRecord>) -> InputDocument {
    let source_weights = match weights {
        Value::Object(map) => Some(map.into_iter().collect()),
        Value::Null => None,
        other => panic!("weights must be a JSON object or null, got {other}"),
    };
    InputDocument {
        config: Some(InputConfig { source_weights }),
        days: Some(days),
    }
}

/// Position map literal.
pub fn positions(pairs: &[(&str, u32)]) -> PositionMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// The two-day scenario used throughout the docs: A leads, then B overtakes.
pub fn two_day_swap() -> InputDocument {
    document(
        Value::Null,
        vec![
            day("2024-01-02", vec![source("poll", serde_json::json!({ "A": 40, "B": 60 }))]),
            day("2024-01-01", vec![source("poll", serde_json::json!({ "A": 70, "B": 30 }))]),
        ],
    )
}

/// Assert that a normalised map sums to 100 within `1e-9`.
pub fn assert_percent_closure(map: &PercentMap) {
    let total: f64 = map.values().sum();
    assert!(
        (total - 100.0).abs() < 1e-9,
        "expected percentages to sum to 100, got {total} for {map:?}"
    );
}
