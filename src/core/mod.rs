//! Core village types and logic.
//!
//! This module contains the pure model of the delivery robot's world:
//! - The road graph and its built-in village map
//! - Parcels and immutable village states
//! - The move transition and an immutable journey log
//!
//! Nothing in this module mutates a value it was handed. Every move
//! computes a fresh [`VillageState`].

mod graph;
mod history;
mod state;

pub use graph::{GraphError, RoadGraph, ROADS, ROAD_SEPARATOR};
pub use history::{Journey, MoveRecord};
pub use state::{transition, Move, MoveError, MoveOutcome, Parcel, VillageState};
