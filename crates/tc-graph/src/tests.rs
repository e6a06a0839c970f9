//! Unit tests for tc-graph.

#[cfg(test)]
mod helpers {
    use tc_core::VertexId;

    use crate::Graph;

    pub const V: [VertexId; 5] =
        [VertexId(0), VertexId(1), VertexId(2), VertexId(3), VertexId(4)];

    /// Diamond with a long detour:
    ///   0 →(1.0) 1 →(1.0) 2 →(1.0) 4
    ///   0 →(5.0) 3 →(1.0) 4
    /// Vertex 4 is best reached through 1 and 2 at weight 3.0.
    pub fn diamond() -> Graph {
        let mut g = Graph::new(5);
        g.add_edge(V[0], V[1], 1.0);
        g.add_edge(V[1], V[2], 1.0);
        g.add_edge(V[2], V[4], 1.0);
        g.add_edge(V[0], V[3], 5.0);
        g.add_edge(V[3], V[4], 1.0);
        g
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use tc_core::{EdgeId, VertexId};

    use crate::Graph;
    use super::helpers::V;

    #[test]
    fn edge_ids_follow_insertion_order() {
        let mut g = Graph::new(3);
        let e0 = g.add_edge(V[0], V[1], 1.5);
        let e1 = g.add_edge(V[1], V[2], 2.5);
        assert_eq!(e0, EdgeId(0));
        assert_eq!(e1, EdgeId(1));
        assert_eq!(g.edge(e1).to, V[2]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn parallel_edges_are_distinct() {
        let mut g = Graph::new(2);
        let e0 = g.add_edge(V[0], V[1], 1.0);
        let e1 = g.add_edge(V[0], V[1], 2.0);
        assert_ne!(e0, e1);
        let out: Vec<_> = g.incident_from(V[0]).collect();
        assert_eq!(out, vec![e0, e1]);
    }

    #[test]
    fn incidence_is_per_source_vertex() {
        let g = super::helpers::diamond();
        assert_eq!(g.incident_from(V[0]).count(), 2);
        assert_eq!(g.incident_from(V[4]).count(), 0);
        for id in g.incident_from(V[2]) {
            assert_eq!(g.edge(id).from, VertexId(2));
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use tc_core::VertexId;

    use crate::{Graph, Router};
    use super::helpers::V;

    #[test]
    fn shortest_path_avoids_detour() {
        let g = super::helpers::diamond();
        let router = Router::build(&g);

        let plan = router.route(&g, V[0], V[4]).unwrap();
        assert!((plan.weight - 3.0).abs() < 1e-6);
        assert_eq!(plan.edges.len(), 3);

        // The edge chain is connected and starts/ends at the endpoints.
        assert_eq!(g.edge(plan.edges[0]).from, V[0]);
        assert_eq!(g.edge(plan.edges[2]).to, V[4]);
        for pair in plan.edges.windows(2) {
            assert_eq!(g.edge(pair[0]).to, g.edge(pair[1]).from);
        }
    }

    #[test]
    fn reconstructed_weights_sum_to_total() {
        let g = super::helpers::diamond();
        let router = Router::build(&g);
        for target in [V[1], V[2], V[3], V[4]] {
            let plan = router.route(&g, V[0], target).unwrap();
            let sum: f64 = plan.edges.iter().map(|&e| g.edge(e).weight).sum();
            assert!((sum - plan.weight).abs() < 1e-6);
        }
    }

    #[test]
    fn same_vertex_is_empty_route() {
        let g = super::helpers::diamond();
        let router = Router::build(&g);
        let plan = router.route(&g, V[2], V[2]).unwrap();
        assert_eq!(plan.weight, 0.0);
        assert!(plan.edges.is_empty());
    }

    #[test]
    fn unreachable_is_none() {
        let mut g = Graph::new(3);
        g.add_edge(V[0], V[1], 1.0);
        let router = Router::build(&g);
        assert!(router.route(&g, V[0], VertexId(2)).is_none());
        // Directed: the reverse of an existing edge is unreachable too.
        assert!(router.route(&g, V[1], V[0]).is_none());
    }

    #[test]
    fn every_pair_has_entry_or_none() {
        let g = super::helpers::diamond();
        let router = Router::build(&g);
        let table = router.table();
        assert_eq!(table.len(), g.vertex_count());
        for row in table {
            assert_eq!(row.len(), g.vertex_count());
            for entry in row.iter().flatten() {
                assert!(entry.weight >= 0.0);
            }
        }
    }

    #[test]
    fn installed_table_answers_without_rebuild() {
        let g = super::helpers::diamond();
        let built = Router::build(&g);
        let restored = Router::from_table(built.table().clone());
        let a = built.route(&g, V[0], V[4]).unwrap();
        let b = restored.route(&g, V[0], V[4]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn picks_cheaper_of_parallel_edges() {
        let mut g = Graph::new(2);
        g.add_edge(V[0], V[1], 4.0);
        let cheap = g.add_edge(V[0], V[1], 2.0);
        let router = Router::build(&g);
        let plan = router.route(&g, V[0], V[1]).unwrap();
        assert_eq!(plan.edges, vec![cheap]);
        assert!((plan.weight - 2.0).abs() < 1e-6);
    }
}
