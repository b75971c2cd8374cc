//! Road graph of the village.
//!
//! The graph is an undirected adjacency map built from `"From-To"` road
//! strings. Every road is indexed in both directions, so the map is
//! symmetric: if `b` is a neighbor of `a`, then `a` is a neighbor of `b`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Separator between the two endpoints of a road string.
pub const ROAD_SEPARATOR: char = '-';

/// The roads of the village, one entry per road.
pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// Errors raised while parsing a caller-supplied road list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Malformed road '{road}': expected 'From-To'")]
    MalformedRoad { road: String },
}

/// Undirected adjacency map from place name to directly reachable places.
///
/// Neighbor lists keep the order in which roads were encountered.
///
/// # Example
///
/// ```rust
/// use village::core::RoadGraph;
///
/// let graph = RoadGraph::build();
/// assert!(graph.is_adjacent("Alice's House", "Cabin"));
/// assert!(graph.is_adjacent("Cabin", "Alice's House"));
/// assert_eq!(graph.neighbors("Cabin"), ["Alice's House"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl RoadGraph {
    /// Build the graph of the village from [`ROADS`].
    pub fn build() -> Self {
        let mut graph = Self::default();
        for road in ROADS {
            if let Some((from, to)) = road.split_once(ROAD_SEPARATOR) {
                graph.add_road(from, to);
            }
        }
        graph
    }

    /// Shared, lazily built instance of the village graph.
    ///
    /// Built once per process and never mutated afterwards.
    pub fn village() -> &'static RoadGraph {
        static VILLAGE: OnceLock<RoadGraph> = OnceLock::new();
        VILLAGE.get_or_init(Self::build)
    }

    /// Build a graph from an arbitrary list of `"From-To"` roads.
    ///
    /// Endpoints are trimmed of surrounding whitespace. A road without a
    /// separator, or with an empty endpoint, is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use village::core::{GraphError, RoadGraph};
    ///
    /// let graph = RoadGraph::from_roads(["Mill-Bridge", "Bridge-Well"]).unwrap();
    /// assert_eq!(graph.neighbors("Bridge"), ["Mill", "Well"]);
    ///
    /// let err = RoadGraph::from_roads(["Mill"]).unwrap_err();
    /// assert!(matches!(err, GraphError::MalformedRoad { .. }));
    /// ```
    pub fn from_roads<I, R>(roads: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let mut graph = Self::default();
        for road in roads {
            let (from, to) = parse_road(road.as_ref())?;
            graph.add_road(from, to);
        }
        Ok(graph)
    }

    fn add_road(&mut self, from: &str, to: &str) {
        self.add_edge(from, to);
        self.add_edge(to, from);
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.adjacency
            .entry(from.to_owned())
            .or_default()
            .push(to.to_owned());
    }

    /// Places directly reachable from `place`. Empty for unknown places.
    pub fn neighbors(&self, place: &str) -> &[String] {
        self.adjacency.get(place).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a road connects `from` and `to`.
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|p| p == to)
    }

    /// Check whether `place` is a node of the graph.
    pub fn contains(&self, place: &str) -> bool {
        self.adjacency.contains_key(place)
    }

    /// All places, in sorted order.
    pub fn places(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn place_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

fn parse_road(road: &str) -> Result<(&str, &str), GraphError> {
    let malformed = || GraphError::MalformedRoad {
        road: road.to_owned(),
    };
    let (from, to) = road.split_once(ROAD_SEPARATOR).ok_or_else(malformed)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }
    Ok((from, to))
}
