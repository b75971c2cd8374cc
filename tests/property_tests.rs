//! Property-based tests for the village model.
//!
//! These tests use proptest to verify the move transition and road graph
//! across many randomly generated states and routes.

use proptest::prelude::*;
use village::core::{transition, Journey, Move, Parcel, RoadGraph, VillageState};

fn graph() -> &'static RoadGraph {
    RoadGraph::village()
}

fn arbitrary_place() -> impl Strategy<Value = String> {
    let places: Vec<String> = graph().places().map(str::to_owned).collect();
    prop::sample::select(places)
}

/// Any village place, or one that is not on the map.
fn arbitrary_destination() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => arbitrary_place(),
        1 => Just("Lighthouse".to_string()),
    ]
}

prop_compose! {
    fn arbitrary_parcel()(
        pair in (arbitrary_place(), arbitrary_place())
            .prop_filter("parcel must be undelivered", |(place, address)| place != address)
    ) -> Parcel {
        Parcel::new(pair.0, pair.1)
    }
}

prop_compose! {
    fn arbitrary_state()(
        place in arbitrary_place(),
        parcels in prop::collection::vec(arbitrary_parcel(), 0..8)
    ) -> VillageState {
        VillageState::new(place, parcels)
    }
}

proptest! {
    #[test]
    fn graph_is_symmetric(place in arbitrary_place()) {
        for neighbor in graph().neighbors(&place) {
            prop_assert!(graph().is_adjacent(neighbor, &place));
        }
    }

    #[test]
    fn invalid_move_is_identity(state in arbitrary_state(), destination in arbitrary_destination()) {
        prop_assume!(!graph().is_adjacent(state.place(), &destination));

        prop_assert_eq!(state.move_to(&destination), state);
    }

    #[test]
    fn valid_move_removes_exactly_delivered_parcels(
        state in arbitrary_state(),
        index in any::<prop::sample::Index>()
    ) {
        let neighbors = graph().neighbors(state.place());
        let destination = index.get(neighbors);

        let delivered = state
            .parcels_carried()
            .filter(|p| &p.address == destination)
            .count();

        let next = state.move_to(destination);

        prop_assert_eq!(next.place(), destination.as_str());
        prop_assert_eq!(next.parcels().len(), state.parcels().len() - delivered);
        prop_assert!(next.parcels().iter().all(|p| !p.is_delivered()));
    }

    #[test]
    fn move_preserves_parcel_order(
        state in arbitrary_state(),
        index in any::<prop::sample::Index>()
    ) {
        let destination = index.get(graph().neighbors(state.place()));
        let next = state.move_to(destination);

        let expected: Vec<&str> = state
            .parcels()
            .iter()
            .filter(|p| !(p.place == state.place() && &p.address == destination))
            .map(|p| p.address.as_str())
            .collect();
        let actual: Vec<&str> = next.parcels().iter().map(|p| p.address.as_str()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn move_does_not_mutate_input(state in arbitrary_state(), destination in arbitrary_destination()) {
        let snapshot = state.clone();
        let _ = state.move_to(&destination);
        prop_assert_eq!(state, snapshot);
    }

    #[test]
    fn transition_agrees_with_move(state in arbitrary_state(), destination in arbitrary_destination()) {
        let action = Move::to(destination.clone());
        prop_assert_eq!(transition(&state, &action, graph()), state.move_to(&destination));
    }

    #[test]
    fn delivered_parcels_never_return(
        start in arbitrary_state(),
        route in prop::collection::vec(arbitrary_destination(), 0..30)
    ) {
        let mut state = start.clone();
        for destination in &route {
            let next = state.move_to(destination);
            prop_assert!(next.parcels().len() <= state.parcels().len());
            state = next;
        }

        let (end, journey) = Journey::follow(&start, &route, graph());

        prop_assert_eq!(&end, &state);
        prop_assert_eq!(
            journey.delivered().count() + end.parcels().len(),
            start.parcels().len()
        );
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: VillageState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
