//! Exhaustive collection from the capped search API.
//!
//! One query never returns more than `cap` rows. When a partition reports more
//! matches than it returned, it is split along the next dimension
//! (continent → race type → country) until every leaf fits, and the union of all
//! leaves is deduplicated by id.

pub mod collector;
pub mod partition;
pub mod state;

pub use collector::{CollectionReport, ExhaustiveCollector, PartitionOutcome, SearchSettings};
pub use partition::{Partition, PartitionPlan};
pub use state::{record_id, CollectionState};
