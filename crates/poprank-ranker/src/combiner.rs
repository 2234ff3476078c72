//! Combining a day's sources into one percentage per person.
//!
//! pct(p) = round₂( normalise( Σ_s w_s × v_s(p) ) )
//!
//! where `w_s` is the configured weight of source `s`, or `1 / n` for every
//! source when none of the day's sources has a positive weight.

use std::collections::BTreeSet;

use poprank_common::{PercentMap, Person, Source};
use tracing::debug;

use crate::coerce::finite_value;
use crate::normalise::{normalise_to_percent, round_cents};
use crate::weights::SourceWeights;

/// How the day's sources were weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightingMode {
    /// At least one source had a positive configured weight.
    Weighted,
    /// No source had a positive weight; every source got `1 / n`.
    EqualFallback,
    /// The day had no sources.
    Empty,
}

/// Result of combining one day's sources.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedDay {
    /// Normalised, cent-rounded share per person.
    pub percent: PercentMap,
    /// Every person named by any source, whatever its weight or value.
    pub people: Vec<Person>,
    pub mode: WeightingMode,
}

/// Merge the day's sources into a single percentage map.
pub fn combine_sources(sources: &[Source], weights: &SourceWeights) -> CombinedDay {
    let people: Vec<Person> = sources
        .iter()
        .flat_map(|s| s.entries().map(|(person, _)| person.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if sources.is_empty() {
        return CombinedDay { percent: PercentMap::new(), people, mode: WeightingMode::Empty };
    }

    let weighted: Vec<(&Source, f64)> = sources
        .iter()
        .filter_map(|s| weights.positive(&s.name).map(|w| (s, w)))
        .collect();

    let (contributions, mode) = if weighted.is_empty() {
        let share = 1.0 / sources.len() as f64;
        debug!(
            sources = sources.len(),
            share,
            "no positively weighted source, using equal weights"
        );
        (
            sources.iter().map(|s| (s, share)).collect::<Vec<_>>(),
            WeightingMode::EqualFallback,
        )
    } else {
        (weighted, WeightingMode::Weighted)
    };

    let mut accumulator = PercentMap::new();
    for (source, weight) in contributions {
        accumulate(&mut accumulator, source, weight);
    }

    let percent = normalise_to_percent(&accumulator)
        .into_iter()
        .map(|(person, pct)| (person, round_cents(pct)))
        .collect();

    CombinedDay { percent, people, mode }
}

/// Add `value × weight` for every finite entry of `source`.
fn accumulate(accumulator: &mut PercentMap, source: &Source, weight: f64) {
    for (person, raw) in source.entries() {
        if let Some(value) = finite_value(raw) {
            *accumulator.entry(person.clone()).or_insert(0.0) += value * weight;
        }
    }
}
