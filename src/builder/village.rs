//! Builder for constructing validated village states.

use crate::builder::error::BuildError;
use crate::core::{Parcel, RoadGraph, VillageState};

/// Builder for village states with a fluent API.
///
/// Unlike [`VillageState::new`], the builder checks every place against the
/// road graph and refuses parcels that already sit at their address.
pub struct VillageBuilder<'g> {
    graph: &'g RoadGraph,
    place: Option<String>,
    parcels: Vec<Parcel>,
}

impl VillageBuilder<'static> {
    /// Create a builder against the village map.
    pub fn new() -> Self {
        Self::on(RoadGraph::village())
    }
}

impl<'g> VillageBuilder<'g> {
    /// Create a builder against a custom map.
    pub fn on(graph: &'g RoadGraph) -> Self {
        Self {
            graph,
            place: None,
            parcels: Vec::new(),
        }
    }

    /// Validate against `graph` instead.
    pub fn graph<'h>(self, graph: &'h RoadGraph) -> VillageBuilder<'h> {
        VillageBuilder {
            graph,
            place: self.place,
            parcels: self.parcels,
        }
    }

    /// Set the robot's starting place (required).
    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Add a parcel at `place` addressed to `address`.
    pub fn parcel(mut self, place: impl Into<String>, address: impl Into<String>) -> Self {
        self.parcels.push(Parcel::new(place, address));
        self
    }

    /// Add several parcels at once.
    pub fn parcels(mut self, parcels: impl IntoIterator<Item = Parcel>) -> Self {
        self.parcels.extend(parcels);
        self
    }

    /// Build the state.
    /// Returns the first validation error found, in insertion order.
    pub fn build(self) -> Result<VillageState, BuildError> {
        let place = self.place.ok_or(BuildError::MissingPlace)?;
        if !self.graph.contains(&place) {
            return Err(BuildError::UnknownPlace(place));
        }

        for parcel in &self.parcels {
            check_parcel(self.graph, parcel)?;
        }

        Ok(VillageState::new(place, self.parcels))
    }
}

impl Default for VillageBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_parcel(graph: &RoadGraph, parcel: &Parcel) -> Result<(), BuildError> {
    if !graph.contains(&parcel.place) {
        return Err(BuildError::UnknownParcelPlace(parcel.place.clone()));
    }
    if !graph.contains(&parcel.address) {
        return Err(BuildError::UnknownAddress(parcel.address.clone()));
    }
    if parcel.is_delivered() {
        return Err(BuildError::AlreadyDelivered {
            place: parcel.place.clone(),
        });
    }
    Ok(())
}
