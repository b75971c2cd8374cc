//! Village state and the move transition.
//!
//! A [`VillageState`] is the whole world as the robot sees it: where the
//! robot stands and which parcels are still undelivered. States are values.
//! Moving never changes a state; it computes the next one.

use super::graph::RoadGraph;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An undelivered parcel sitting at `place`, addressed to `address`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Parcel {
    /// Where the parcel currently is
    pub place: String,
    /// Where the parcel must go
    pub address: String,
}

impl Parcel {
    pub fn new(place: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            address: address.into(),
        }
    }

    /// A parcel is delivered once it has reached its address.
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }

    fn carried_to(&self, destination: &str) -> Self {
        Self {
            place: destination.to_owned(),
            address: self.address.clone(),
        }
    }
}

/// Request to move the robot to an adjacent place.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub destination: String,
}

impl Move {
    pub fn to(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

/// Reasons a strict move is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Robot is at '{place}', which is not on the map")]
    UnknownPlace { place: String },

    #[error("No road from '{from}' to '{to}'")]
    NotAdjacent { from: String, to: String },
}

/// Successor state of a move plus what happened along the way.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub state: VillageState,
    /// Parcels dropped off at the destination by this move
    pub delivered: Vec<Parcel>,
    /// `false` when the move was ignored and `state` equals the input
    pub applied: bool,
}

/// Immutable snapshot of the robot's place and the undelivered parcels.
///
/// # Example
///
/// ```rust
/// use village::core::{Parcel, VillageState};
///
/// let state = VillageState::new(
///     "Alice's House",
///     vec![Parcel::new("Alice's House", "Bob's House")],
/// );
///
/// let next = state.move_to("Bob's House");
/// assert_eq!(next.place(), "Bob's House");
/// assert!(next.is_complete());
///
/// // The original state is untouched
/// assert_eq!(state.parcels().len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct VillageState {
    place: String,
    parcels: Vec<Parcel>,
}

impl VillageState {
    /// Create a state with the robot at `place`. Parcels are kept as given.
    pub fn new(place: impl Into<String>, parcels: Vec<Parcel>) -> Self {
        Self {
            place: place.into(),
            parcels,
        }
    }

    /// The robot's current place.
    pub fn place(&self) -> &str {
        &self.place
    }

    /// Undelivered parcels, in their original order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// True once every parcel has been delivered.
    pub fn is_complete(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels lying at `place`.
    pub fn parcels_at<'a>(&'a self, place: &'a str) -> impl Iterator<Item = &'a Parcel> + 'a {
        self.parcels.iter().filter(move |p| p.place == place)
    }

    /// Parcels at the robot's place, which travel with the robot on its next move.
    pub fn parcels_carried(&self) -> impl Iterator<Item = &Parcel> {
        self.parcels_at(&self.place)
    }

    /// Move to `destination` on the village map.
    ///
    /// Returns an identical state if there is no road from the current place
    /// to `destination`. Unknown places count as unreachable.
    pub fn move_to(&self, destination: &str) -> VillageState {
        self.move_on(destination, RoadGraph::village())
    }

    /// Move to `destination` on `graph`, ignoring invalid moves.
    pub fn move_on(&self, destination: &str, graph: &RoadGraph) -> VillageState {
        self.step(destination, graph).state
    }

    /// Move to `destination` on `graph`, reporting invalid moves as errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use village::core::{MoveError, RoadGraph, VillageState};
    ///
    /// let state = VillageState::new("Bob's House", vec![]);
    /// let err = state.try_move("Cabin", RoadGraph::village()).unwrap_err();
    /// assert!(matches!(err, MoveError::NotAdjacent { .. }));
    /// ```
    pub fn try_move(
        &self,
        destination: &str,
        graph: &RoadGraph,
    ) -> Result<VillageState, MoveError> {
        if !graph.contains(&self.place) {
            return Err(MoveError::UnknownPlace {
                place: self.place.clone(),
            });
        }
        if !graph.is_adjacent(&self.place, destination) {
            return Err(MoveError::NotAdjacent {
                from: self.place.clone(),
                to: destination.to_owned(),
            });
        }
        Ok(self.move_on(destination, graph))
    }

    /// Move to `destination` on `graph` and report which parcels were delivered.
    pub fn step(&self, destination: &str, graph: &RoadGraph) -> MoveOutcome {
        if !graph.is_adjacent(&self.place, destination) {
            tracing::debug!(
                from = %self.place,
                to = %destination,
                "Ignoring move: no road between places"
            );
            return MoveOutcome {
                state: self.clone(),
                delivered: Vec::new(),
                applied: false,
            };
        }

        let (delivered, parcels): (Vec<Parcel>, Vec<Parcel>) = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    p.carried_to(destination)
                } else {
                    p.clone()
                }
            })
            .partition(Parcel::is_delivered);

        tracing::trace!(
            from = %self.place,
            to = %destination,
            delivered = delivered.len(),
            remaining = parcels.len(),
            "Robot moved"
        );

        MoveOutcome {
            state: VillageState::new(destination, parcels),
            delivered,
            applied: true,
        }
    }
}

/// Pure reducer: compute the state that follows `action`.
///
/// Equivalent to [`VillageState::move_on`], in `(state, action) -> state` form.
pub fn transition(state: &VillageState, action: &Move, graph: &RoadGraph) -> VillageState {
    state.move_on(&action.destination, graph)
}
