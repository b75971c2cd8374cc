//! Builder API for constructing village states.
//!
//! The core types accept any place names. The builder is the checked entry
//! point: it validates places against a road graph before handing out a
//! [`VillageState`](crate::core::VillageState).

pub mod error;
pub mod macros;
pub mod village;

pub use error::BuildError;
pub use village::VillageBuilder;

use crate::core::{Parcel, VillageState};

/// Build a validated state on the village map from `place => address` pairs.
///
/// # Example
///
/// ```
/// use village::builder::village_state;
/// use village::parcels;
///
/// let state = village_state("Shop", parcels!["Shop" => "Farm"]).unwrap();
/// assert_eq!(state.parcels().len(), 1);
///
/// assert!(village_state("Moon", vec![]).is_err());
/// ```
pub fn village_state(
    place: impl Into<String>,
    parcels: Vec<Parcel>,
) -> Result<VillageState, BuildError> {
    VillageBuilder::new().place(place).parcels(parcels).build()
}
