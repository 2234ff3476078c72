//! Day-over-day rank movement.

use poprank_common::{DeltaMap, PositionMap};

/// `yesterday - today` for everyone ranked on both days.
///
/// Positive means the person moved towards rank 1. New entrants, and every
/// person on the first day (`yesterday == None`), get no entry.
pub fn compute_deltas(today: &PositionMap, yesterday: Option<&PositionMap>) -> DeltaMap {
    let Some(yesterday) = yesterday else {
        return DeltaMap::new();
    };

    today
        .iter()
        .filter_map(|(person, &rank)| {
            yesterday
                .get(person)
                .map(|&prev| (person.clone(), i64::from(prev) - i64::from(rank)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(pairs: &[(&str, u32)]) -> PositionMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_improvement_is_positive() {
        let today = ranks(&[("X", 1), ("Y", 2)]);
        let yesterday = ranks(&[("X", 3), ("Y", 1)]);
        let deltas = compute_deltas(&today, Some(&yesterday));
        assert_eq!(deltas.get("X"), Some(&2));
        assert_eq!(deltas.get("Y"), Some(&-1));
    }

    #[test]
    fn test_new_entrant_has_no_delta() {
        let today = ranks(&[("X", 1), ("NEW", 2)]);
        let yesterday = ranks(&[("X", 1), ("GONE", 2)]);
        let deltas = compute_deltas(&today, Some(&yesterday));
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas.get("X"), Some(&0));
        assert!(!deltas.contains_key("NEW"));
        assert!(!deltas.contains_key("GONE"));
    }

    #[test]
    fn test_first_day_is_empty() {
        let today = ranks(&[("X", 1)]);
        assert!(compute_deltas(&today, None).is_empty());
    }
}
