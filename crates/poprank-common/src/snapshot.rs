//! Output snapshot consumed by the front-end charts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque, case-sensitive person identifier.
pub type Person = String;

/// Source name → positive weight.
pub type WeightTable = BTreeMap<String, f64>;

/// Person → percentage share for a day.
pub type PercentMap = BTreeMap<Person, f64>;

/// Person → 1-based rank (ties share a rank).
pub type PositionMap = BTreeMap<Person, u32>;

/// Person → `yesterday_rank - today_rank` (positive = moved up).
pub type DeltaMap = BTreeMap<Person, i64>;

/// Per-day metadata shown next to the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMeta {
    /// Number of source entries listed for the day (weighted or not).
    pub sources: usize,
    pub votes_label: String,
}

/// The full artifact written at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOutput {
    pub updated_at: String,
    /// Processed dates in chronological order.
    pub days: Vec<String>,
    /// Global roster, collated.
    pub people: Vec<Person>,
    pub positions_by_day: BTreeMap<String, PositionMap>,
    pub deltas_by_day: BTreeMap<String, DeltaMap>,
    pub meta_by_day: BTreeMap<String, DayMeta>,
    pub news_by_day: BTreeMap<String, Vec<Value>>,
}

impl AggregateOutput {
    /// Most recent processed date, if any.
    pub fn latest_day(&self) -> Option<&str> {
        self.days.last().map(String::as_str)
    }
}
