//! Day-by-day aggregation.
//!
//! The run is a fold over the chronologically sorted day records. The
//! accumulator carries the roster seen so far, the previous day's positions
//! and the per-day outputs; each step combines, ranks and diffs one day.

use std::collections::{BTreeMap, BTreeSet};

use poprank_common::{
    AggregateOutput, DayMeta, DayRecord, DeltaMap, InputDocument, Person, PositionMap,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::collate::{sort_roster, RosterCollator};
use crate::combiner::combine_sources;
use crate::deltas::compute_deltas;
use crate::positions::percent_to_positions;
use crate::weights::SourceWeights;

/// Fold accumulator for one run.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    roster: BTreeSet<Person>,
    previous: Option<PositionMap>,
    days: Vec<String>,
    positions_by_day: BTreeMap<String, PositionMap>,
    deltas_by_day: BTreeMap<String, DeltaMap>,
    meta_by_day: BTreeMap<String, DayMeta>,
    news_by_day: BTreeMap<String, Vec<Value>>,
}

impl PipelineState {
    /// Process one day. Records must arrive in chronological order.
    pub fn advance(mut self, record: &DayRecord, weights: &SourceWeights) -> Self {
        let combined = combine_sources(&record.sources, weights);

        self.roster.extend(combined.people.iter().cloned());
        self.roster.extend(combined.percent.keys().cloned());

        let positions = percent_to_positions(&combined.percent);
        let deltas = compute_deltas(&positions, self.previous.as_ref());

        debug!(
            date = %record.date,
            sources = record.sources.len(),
            ranked = positions.len(),
            moved = deltas.values().filter(|d| **d != 0).count(),
            mode = ?combined.mode,
            "day aggregated"
        );

        let date = record.date.clone();
        self.days.push(date.clone());
        self.positions_by_day.insert(date.clone(), positions.clone());
        self.deltas_by_day.insert(date.clone(), deltas);
        self.meta_by_day.insert(
            date.clone(),
            DayMeta {
                sources: record.sources.len(),
                votes_label: record.votes_label.clone().unwrap_or_default(),
            },
        );
        if let Some(news) = &record.news {
            self.news_by_day.insert(date, news.clone());
        }

        self.previous = Some(positions);
        self
    }

    /// Positions of the most recently processed day.
    pub fn previous_positions(&self) -> Option<&PositionMap> {
        self.previous.as_ref()
    }

    pub fn roster(&self) -> &BTreeSet<Person> {
        &self.roster
    }

    /// Assemble the output snapshot.
    pub fn finish(self, collator: &dyn RosterCollator, updated_at: String) -> AggregateOutput {
        let mut people: Vec<Person> = self.roster.into_iter().collect();
        sort_roster(&mut people, collator);

        AggregateOutput {
            updated_at,
            days: self.days,
            people,
            positions_by_day: self.positions_by_day,
            deltas_by_day: self.deltas_by_day,
            meta_by_day: self.meta_by_day,
            news_by_day: self.news_by_day,
        }
    }
}

/// Day records sorted ascending by date string; equal dates keep input order.
pub fn chronological(days: &[DayRecord]) -> Vec<&DayRecord> {
    let mut ordered: Vec<&DayRecord> = days.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    ordered
}

/// Run the full aggregation over an input document.
///
/// `updated_at` is stamped verbatim; everything else is a pure function of
/// `doc` and `collator`.
pub fn aggregate(
    doc: &InputDocument,
    collator: &dyn RosterCollator,
    updated_at: impl Into<String>,
) -> AggregateOutput {
    let weights = SourceWeights::from_raw(&doc.source_weights());
    let days = chronological(doc.days());

    let output = days
        .into_iter()
        .fold(PipelineState::default(), |state, record| state.advance(record, &weights))
        .finish(collator, updated_at.into());

    info!(
        days = output.days.len(),
        people = output.people.len(),
        weighted_sources = weights.as_table().len(),
        "aggregation complete"
    );
    output
}
