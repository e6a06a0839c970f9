//! Unit tests for tc-transit.
//!
//! All tests use hand-built catalogues with round distances so expected
//! times are exact decimals (600 m at 40 km/h is 0.9 min).

#[cfg(test)]
mod helpers {
    use tc_catalogue::Catalogue;
    use tc_core::GeoPoint;

    use crate::{RoutingSettings, TransitRouter};

    pub const SETTINGS: RoutingSettings =
        RoutingSettings { bus_wait_time: 6.0, bus_velocity: 40.0 };

    /// Stops A,B,C in a line, 600 m between neighbours both ways, one
    /// non-cyclic bus "1" over [A, B, C].
    pub fn linear() -> (Catalogue, TransitRouter) {
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::new(55.574371, 37.6517)).unwrap();
        cat.add_stop("B", GeoPoint::new(55.587655, 37.645687)).unwrap();
        cat.add_stop("C", GeoPoint::new(55.592028, 37.653656)).unwrap();
        for (from, to) in [("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")] {
            cat.add_distance(from, to, 600).unwrap();
        }
        cat.add_bus("1", false, &["A", "B", "C"]).unwrap();
        let router = TransitRouter::build(&cat, SETTINGS);
        (cat, router)
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use tc_core::{StopId, VertexId};

    use crate::EdgeLabel;
    use super::helpers;

    #[test]
    fn two_vertices_per_stop() {
        let (cat, router) = helpers::linear();
        assert_eq!(router.graph().vertex_count(), 2 * cat.stop_count());
        for i in 0..cat.stop_count() as u32 {
            let pair = router.vertex_ids_for(StopId(i)).unwrap();
            assert_eq!(pair.wait_begin, VertexId(2 * i));
            assert_eq!(pair.wait_end, VertexId(2 * i + 1));
        }
    }

    #[test]
    fn edge_counts_are_quadratic_per_direction() {
        // 3 wait edges + 2 directions × C(3,2) ride edges.
        let (_, router) = helpers::linear();
        assert_eq!(router.graph().edge_count(), 3 + 2 * 3);
        assert_eq!(router.labels().len(), router.graph().edge_count());
    }

    #[test]
    fn wait_edges_carry_wait_time() {
        let (_, router) = helpers::linear();
        let waits: Vec<_> = router
            .labels()
            .iter()
            .filter(|l| matches!(l, EdgeLabel::Wait { .. }))
            .collect();
        assert_eq!(waits.len(), 3);
        for label in waits {
            let EdgeLabel::Wait { time, .. } = label else { unreachable!() };
            assert_eq!(*time, helpers::SETTINGS.bus_wait_time);
        }
    }

    #[test]
    fn ride_edges_accumulate_distance() {
        // The A→C ride spans two hops of 600 m: 1200 m at 40 km/h = 1.8 min.
        let (_, router) = helpers::linear();
        let spans: Vec<(usize, f64)> = router
            .labels()
            .iter()
            .filter_map(|l| match l {
                EdgeLabel::Bus { span_count, time, .. } => Some((*span_count, *time)),
                _ => None,
            })
            .collect();
        assert!(spans.iter().any(|&(span, time)| span == 1 && (time - 0.9).abs() < 1e-9));
        assert!(spans.iter().any(|&(span, time)| span == 2 && (time - 1.8).abs() < 1e-9));
    }
}

// ── Itineraries ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod itineraries {
    use tc_catalogue::Catalogue;
    use tc_core::GeoPoint;

    use crate::{EdgeLabel, TransitRouter};
    use super::helpers;

    #[test]
    fn single_ride_beats_transfer() {
        let (cat, router) = helpers::linear();
        let (a, c) = (cat.find_stop("A").unwrap(), cat.find_stop("C").unwrap());

        let itinerary = router.route(a, c).unwrap();
        assert!((itinerary.total_time - 7.8).abs() < 1e-6);
        assert_eq!(itinerary.steps.len(), 2);
        assert_eq!(
            itinerary.steps[0],
            EdgeLabel::Wait { stop: a, time: 6.0 }
        );
        let EdgeLabel::Bus { span_count, time, .. } = itinerary.steps[1] else {
            panic!("expected a ride step");
        };
        assert_eq!(span_count, 2);
        assert!((time - 1.8).abs() < 1e-6);
    }

    #[test]
    fn step_times_sum_to_total() {
        let (cat, router) = helpers::linear();
        for from in ["A", "B", "C"] {
            for to in ["A", "B", "C"] {
                let itinerary = router
                    .route(cat.find_stop(from).unwrap(), cat.find_stop(to).unwrap())
                    .unwrap();
                let sum: f64 = itinerary
                    .steps
                    .iter()
                    .map(|s| match s {
                        EdgeLabel::Wait { time, .. } | EdgeLabel::Bus { time, .. } => *time,
                    })
                    .sum();
                assert!((sum - itinerary.total_time).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn same_stop_is_empty_journey() {
        let (cat, router) = helpers::linear();
        let a = cat.find_stop("A").unwrap();
        let itinerary = router.route(a, a).unwrap();
        assert_eq!(itinerary.total_time, 0.0);
        assert!(itinerary.steps.is_empty());
    }

    #[test]
    fn return_leg_uses_reverse_direction_distances() {
        // Asymmetric road: A→B is 1000 m but B→A is 2000 m.  Riding back
        // must price the B→A direction.
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::new(55.0, 37.0)).unwrap();
        cat.add_stop("B", GeoPoint::new(55.01, 37.0)).unwrap();
        cat.add_distance("A", "B", 1000).unwrap();
        cat.add_distance("B", "A", 2000).unwrap();
        cat.add_bus("7", false, &["A", "B"]).unwrap();
        let router = TransitRouter::build(&cat, helpers::SETTINGS);

        let (a, b) = (cat.find_stop("A").unwrap(), cat.find_stop("B").unwrap());
        let there = router.route(a, b).unwrap();
        let back = router.route(b, a).unwrap();
        assert!((there.total_time - 7.5).abs() < 1e-6); // 6 + 1000/666.67
        assert!((back.total_time - 9.0).abs() < 1e-6); // 6 + 2000/666.67
    }

    #[test]
    fn disjoint_networks_are_unreachable() {
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::new(55.0, 37.0)).unwrap();
        cat.add_stop("B", GeoPoint::new(55.01, 37.0)).unwrap();
        cat.add_stop("X", GeoPoint::new(56.0, 38.0)).unwrap();
        cat.add_stop("Y", GeoPoint::new(56.01, 38.0)).unwrap();
        cat.add_distance("A", "B", 1000).unwrap();
        cat.add_distance("X", "Y", 1000).unwrap();
        cat.add_bus("west", false, &["A", "B"]).unwrap();
        cat.add_bus("east", false, &["X", "Y"]).unwrap();
        let router = TransitRouter::build(&cat, helpers::SETTINGS);

        let (a, y) = (cat.find_stop("A").unwrap(), cat.find_stop("Y").unwrap());
        assert!(router.route(a, y).is_none());
    }

    #[test]
    fn transfer_costs_exactly_one_extra_wait() {
        // Two lines meeting at B: A --red-- B --blue-- C, 600 m hops.
        // A→C must be wait + ride + wait + ride = 6 + 0.9 + 6 + 0.9.
        let mut cat = Catalogue::new();
        cat.add_stop("A", GeoPoint::new(55.0, 37.0)).unwrap();
        cat.add_stop("B", GeoPoint::new(55.01, 37.0)).unwrap();
        cat.add_stop("C", GeoPoint::new(55.02, 37.0)).unwrap();
        for (from, to) in [("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")] {
            cat.add_distance(from, to, 600).unwrap();
        }
        cat.add_bus("red", false, &["A", "B"]).unwrap();
        cat.add_bus("blue", false, &["B", "C"]).unwrap();
        let router = TransitRouter::build(&cat, helpers::SETTINGS);

        let (a, c) = (cat.find_stop("A").unwrap(), cat.find_stop("C").unwrap());
        let itinerary = router.route(a, c).unwrap();
        assert!((itinerary.total_time - 13.8).abs() < 1e-6);
        assert_eq!(itinerary.steps.len(), 4);
    }
}

// ── Snapshot reassembly ───────────────────────────────────────────────────────

#[cfg(test)]
mod reassembly {
    use tc_graph::Graph;

    use crate::TransitRouter;
    use super::helpers;

    #[test]
    fn from_parts_answers_identically() {
        let (cat, built) = helpers::linear();

        let mut graph = Graph::new(built.graph().vertex_count());
        for edge in built.graph().edges() {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        let restored = TransitRouter::from_parts(
            *built.settings(),
            graph,
            built.table().clone(),
            built.stop_vertices().to_vec(),
            built.labels().to_vec(),
        );

        for from in ["A", "B", "C"] {
            for to in ["A", "B", "C"] {
                let (f, t) = (cat.find_stop(from).unwrap(), cat.find_stop(to).unwrap());
                assert_eq!(built.route(f, t), restored.route(f, t));
            }
        }
    }
}
