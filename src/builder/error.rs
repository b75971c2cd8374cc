//! Build errors for village states.

use thiserror::Error;

/// Errors that can occur when building a village state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Robot place not specified. Call .place(name) before .build()")]
    MissingPlace,

    #[error("Robot place '{0}' is not on the map")]
    UnknownPlace(String),

    #[error("Parcel lies at '{0}', which is not on the map")]
    UnknownParcelPlace(String),

    #[error("Parcel is addressed to '{0}', which is not on the map")]
    UnknownAddress(String),

    #[error("Parcel at '{place}' is already at its address")]
    AlreadyDelivered { place: String },
}
