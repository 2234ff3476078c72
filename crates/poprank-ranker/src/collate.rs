//! Roster ordering.
//!
//! The roster is shown to readers, so it is sorted the way people expect names
//! to be sorted rather than by code point. The comparator is pluggable; the
//! ranker itself carries no locale data.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Comparator used to order the global roster.
pub trait RosterCollator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> RosterCollator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Case- and accent-folded comparison.
///
/// Names compare first with diacritics stripped and case folded
/// ("Ágatha" sorts with "agatha"), then by lowercase form so that an
/// unaccented name precedes its accented twin, then by the raw strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveCollator;

impl RosterCollator for CaseInsensitiveCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        fold(a)
            .cmp(&fold(b))
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            .then_with(|| a.cmp(b))
    }
}

/// NFD-decompose, drop combining marks, lowercase.
fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Plain byte-wise order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCollator;

impl RosterCollator for OrdinalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Configurable choice of collator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    #[default]
    CaseInsensitive,
    Ordinal,
}

impl Collation {
    pub fn collator(self) -> Box<dyn RosterCollator> {
        match self {
            Collation::CaseInsensitive => Box::new(CaseInsensitiveCollator),
            Collation::Ordinal => Box::new(OrdinalCollator),
        }
    }
}

/// Sort names in place with the given collator.
pub fn sort_roster(names: &mut [String], collator: &dyn RosterCollator) {
    names.sort_by(|a, b| collator.compare(a, b));
}
