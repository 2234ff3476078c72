//! poprank-ranker — Daily popularity aggregation and ranking engine.
//!
//! Sources are combined into percentages, percentages into competition ranks,
//! and consecutive days into rank deltas. Everything here is pure and
//! synchronous; reading and writing documents is left to the caller.

pub mod coerce;
pub mod normalise;
pub mod weights;
pub mod combiner;
pub mod positions;
pub mod deltas;
pub mod collate;
pub mod pipeline;
pub mod leaderboard;

pub use collate::{CaseInsensitiveCollator, Collation, OrdinalCollator, RosterCollator};
pub use combiner::{combine_sources, CombinedDay, WeightingMode};
pub use deltas::compute_deltas;
pub use leaderboard::{latest_leaderboard, LeaderboardRow};
pub use normalise::normalise_to_percent;
pub use pipeline::{aggregate, PipelineState};
pub use positions::percent_to_positions;
pub use weights::SourceWeights;
