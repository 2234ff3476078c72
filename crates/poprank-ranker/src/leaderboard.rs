//! Top-N summary of the latest day, for log output.

use poprank_common::{AggregateOutput, Person};

use crate::collate::RosterCollator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub person: Person,
    pub rank: u32,
    /// `None` for people not ranked the day before.
    pub delta: Option<i64>,
}

impl std::fmt::Display for LeaderboardRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.rank, self.person)?;
        match self.delta {
            Some(d) if d > 0 => write!(f, " (+{d})"),
            Some(d) if d < 0 => write!(f, " ({d})"),
            Some(_) => write!(f, " (=)"),
            None => write!(f, " (new)"),
        }
    }
}

/// The best `n` people of the most recent day, by rank then name.
pub fn latest_leaderboard(
    output: &AggregateOutput,
    collator: &dyn RosterCollator,
    n: usize,
) -> Vec<LeaderboardRow> {
    let Some(date) = output.latest_day() else {
        return vec![];
    };
    let Some(positions) = output.positions_by_day.get(date) else {
        return vec![];
    };
    let deltas = output.deltas_by_day.get(date);

    let mut rows: Vec<LeaderboardRow> = positions
        .iter()
        .map(|(person, &rank)| LeaderboardRow {
            person: person.clone(),
            rank,
            delta: deltas.and_then(|d| d.get(person).copied()),
        })
        .collect();
    rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| collator.compare(&a.person, &b.person)));
    rows.truncate(n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::CaseInsensitiveCollator;
    use std::collections::BTreeMap;

    fn output() -> AggregateOutput {
        let mut out = AggregateOutput {
            days: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            ..Default::default()
        };
        out.positions_by_day.insert(
            "2024-01-02".to_string(),
            BTreeMap::from([
                ("carol".to_string(), 1),
                ("Bob".to_string(), 1),
                ("alice".to_string(), 3),
                ("dave".to_string(), 4),
            ]),
        );
        out.deltas_by_day.insert(
            "2024-01-02".to_string(),
            BTreeMap::from([
                ("carol".to_string(), 2),
                ("alice".to_string(), -2),
                ("dave".to_string(), 0),
            ]),
        );
        out
    }

    #[test]
    fn test_orders_by_rank_then_name() {
        let rows = latest_leaderboard(&output(), &CaseInsensitiveCollator, 3);
        let names: Vec<&str> = rows.iter().map(|r| r.person.as_str()).collect();
        assert_eq!(names, vec!["Bob", "carol", "alice"]);
        assert_eq!(rows[0].delta, None);
        assert_eq!(rows[1].delta, Some(2));
    }

    #[test]
    fn test_display() {
        let rows = latest_leaderboard(&output(), &CaseInsensitiveCollator, 10);
        let lines: Vec<String> = rows.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["#1 Bob (new)", "#1 carol (+2)", "#3 alice (-2)", "#4 dave (=)"]);
    }

    #[test]
    fn test_empty_output() {
        let rows = latest_leaderboard(&AggregateOutput::default(), &CaseInsensitiveCollator, 5);
        assert!(rows.is_empty());
    }
}
