//! Percentages → competition ranks.

use poprank_common::{PercentMap, Person, PositionMap};

use crate::coerce::finite;

/// Rank people by descending percentage.
///
/// Equal values share a rank and the next distinct value takes its 1-based
/// position, so `[90, 90, 80]` ranks as `[1, 1, 3]`. Non-finite entries are
/// left out of the result.
pub fn percent_to_positions(percent: &PercentMap) -> PositionMap {
    let mut rows: Vec<(&Person, f64)> = percent
        .iter()
        .filter_map(|(person, &v)| finite(v).map(|v| (person, v)))
        .collect();

    // Stable: exact ties keep map order, which does not affect their rank.
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut positions = PositionMap::new();
    let mut previous: Option<(f64, u32)> = None;
    for (i, (person, value)) in rows.into_iter().enumerate() {
        let rank = match previous {
            Some((prev_value, prev_rank)) if prev_value == value => prev_rank,
            _ => i as u32 + 1,
        };
        positions.insert(person.clone(), rank);
        previous = Some((value, rank));
    }
    positions
}
