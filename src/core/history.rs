//! Journey tracking.
//!
//! A [`Journey`] is an immutable log of the moves a robot made, following
//! the same rule as the states it records: recording a move returns a new
//! journey and leaves the old one as it was.

use super::graph::RoadGraph;
use super::state::{Parcel, VillageState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied move.
///
/// # Example
///
/// ```rust
/// use village::core::{MoveRecord, Parcel};
/// use chrono::Utc;
///
/// let record = MoveRecord {
///     from: "Alice's House".to_string(),
///     to: "Bob's House".to_string(),
///     delivered: vec![Parcel::new("Bob's House", "Bob's House")],
///     timestamp: Utc::now(),
///     turn: 1,
/// };
/// assert_eq!(record.delivered.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Place the robot left
    pub from: String,
    /// Place the robot arrived at
    pub to: String,
    /// Parcels delivered on arrival
    pub delivered: Vec<Parcel>,
    /// When the move was recorded
    pub timestamp: DateTime<Utc>,
    /// 1-based turn number
    pub turn: usize,
}

/// Ordered log of applied moves.
///
/// # Example
///
/// ```rust
/// use village::core::{Journey, Parcel, RoadGraph, VillageState};
///
/// let start = VillageState::new(
///     "Alice's House",
///     vec![Parcel::new("Alice's House", "Town Hall")],
/// );
///
/// let (end, journey) = Journey::follow(
///     &start,
///     ["Bob's House", "Cabin", "Town Hall"],
///     RoadGraph::village(),
/// );
///
/// // "Cabin" is not reachable from Bob's House and is skipped
/// assert_eq!(journey.path(), ["Alice's House", "Bob's House", "Town Hall"]);
/// assert_eq!(journey.turns(), 2);
/// assert!(end.is_complete());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    records: Vec<MoveRecord>,
}

impl Journey {
    /// Create an empty journey.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a move, returning a new journey.
    ///
    /// ```rust
    /// use village::core::{Journey, MoveRecord};
    /// use chrono::Utc;
    ///
    /// let journey = Journey::new();
    /// let longer = journey.record(MoveRecord {
    ///     from: "Shop".to_string(),
    ///     to: "Farm".to_string(),
    ///     delivered: vec![],
    ///     timestamp: Utc::now(),
    ///     turn: 1,
    /// });
    ///
    /// assert_eq!(journey.turns(), 0);
    /// assert_eq!(longer.turns(), 1);
    /// ```
    pub fn record(&self, record: MoveRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Replay `destinations` from `start`, recording every applied move.
    ///
    /// Moves without a road are ignored, as [`VillageState::move_on`] does,
    /// and leave no record.
    pub fn follow<I, D>(
        start: &VillageState,
        destinations: I,
        graph: &RoadGraph,
    ) -> (VillageState, Journey)
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let mut state = start.clone();
        let mut journey = Journey::new();

        for destination in destinations {
            let outcome = state.step(destination.as_ref(), graph);
            if !outcome.applied {
                continue;
            }
            journey = journey.record(MoveRecord {
                from: state.place().to_owned(),
                to: outcome.state.place().to_owned(),
                delivered: outcome.delivered,
                timestamp: Utc::now(),
                turn: journey.turns() + 1,
            });
            state = outcome.state;
        }

        (state, journey)
    }

    /// All records, in order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of applied moves.
    pub fn turns(&self) -> usize {
        self.records.len()
    }

    /// Places visited: the starting place, then the arrival of each move.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.records.iter().map(|r| r.to.as_str()));
        path
    }

    /// Every parcel delivered along the journey, in delivery order.
    pub fn delivered(&self) -> impl Iterator<Item = &Parcel> {
        self.records.iter().flat_map(|r| r.delivered.iter())
    }

    /// Time between the first and last recorded move.
    ///
    /// `None` for an empty journey.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
