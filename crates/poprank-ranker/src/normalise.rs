//! Score normalisation to a 0–100 percentage scale.

use poprank_common::PercentMap;

use crate::coerce::finite;

/// Rescale scores so that they sum to 100.
///
/// Non-finite entries keep their key with a value of `0`. When the finite
/// total is `<= 0` the input is returned unchanged, so an empty or degenerate
/// day never divides by zero.
pub fn normalise_to_percent(scores: &PercentMap) -> PercentMap {
    let sum: f64 = scores.values().filter_map(|&v| finite(v)).sum();
    if sum <= 0.0 {
        return scores.clone();
    }

    scores
        .iter()
        .map(|(person, &v)| {
            let pct = finite(v).map_or(0.0, |v| v / sum * 100.0);
            (person.clone(), pct)
        })
        .collect()
}

/// Round to two decimals, half-up on the cents digit.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> PercentMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_sums_to_hundred() {
        let normed = normalise_to_percent(&map(&[("A", 3.0), ("B", 1.0), ("C", 0.0)]));
        let total: f64 = normed.values().sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((normed["A"] - 75.0).abs() < 1e-9);
        assert!((normed["B"] - 25.0).abs() < 1e-9);
        // Zero-scored entries stay in the map.
        assert_eq!(normed["C"], 0.0);
    }

    #[test]
    fn test_awkward_totals_still_close() {
        let normed = normalise_to_percent(&map(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]));
        let total: f64 = normed.values().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_total_is_untouched() {
        let input = map(&[("A", 0.0), ("B", 0.0)]);
        assert_eq!(normalise_to_percent(&input), input);

        let negative = map(&[("A", -5.0), ("B", 2.0)]);
        assert_eq!(normalise_to_percent(&negative), negative);

        assert!(normalise_to_percent(&PercentMap::new()).is_empty());
    }

    #[test]
    fn test_non_finite_entries_become_zero() {
        let normed = normalise_to_percent(&map(&[("A", 50.0), ("B", f64::NAN), ("C", 50.0)]));
        assert_eq!(normed["B"], 0.0);
        assert!((normed["A"] - 50.0).abs() < 1e-9);
        assert!(normed.values().all(|v| v.is_finite()));
    }

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(round_cents(33.333333), 33.33);
        assert_eq!(round_cents(66.666666), 66.67);
        assert_eq!(round_cents(12.5), 12.5);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(50.0), 50.0);
    }
}
