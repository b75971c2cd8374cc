//! Village: an immutable world model for a parcel delivery robot.
//!
//! A robot walks the roads of a small village, picking up parcels where it
//! finds them and dropping them off at their addresses. The whole world is
//! two values: the robot's place and the list of undelivered parcels. A move
//! never edits that world; it computes the next one.
//!
//! # Core Concepts
//!
//! - **RoadGraph**: Undirected map of places, built from `"From-To"` roads
//! - **VillageState**: Immutable snapshot of robot place and parcels
//! - **Move**: Pure transition to an adjacent place; invalid moves are no-ops
//! - **Journey**: Immutable log of applied moves
//!
//! Deciding where the robot goes next is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use village::core::{Parcel, VillageState};
//!
//! let state = VillageState::new(
//!     "Alice's House",
//!     vec![Parcel::new("Alice's House", "Bob's House")],
//! );
//!
//! let next = state.move_to("Bob's House");
//! assert_eq!(next, VillageState::new("Bob's House", vec![]));
//!
//! // No road from Bob's House to the Cabin: nothing happens
//! assert_eq!(next.move_to("Cabin"), next);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, VillageBuilder};
pub use crate::core::{Journey, Move, MoveError, Parcel, RoadGraph, VillageState};
