//! Unit tests for fa-graph.
//!
//! All tests use hand-crafted or seeded random networks; no data files.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{AdjacencyMatrix, EdgeRecord, GraphBuilder, NodeCatalog, NodeRecord};

    pub fn rec(code: &str) -> NodeRecord {
        NodeRecord::new(code, &[code])
    }

    /// Two stores, one residential area, one intersection:
    ///
    /// ```text
    /// S1 ──5── X ──3── R1 ──10── S2
    /// ```
    ///
    /// Indices: S1=0, S2=1, R1=2, X=3.
    pub fn scenario() -> (NodeCatalog, AdjacencyMatrix) {
        let catalog = NodeCatalog::load(
            vec![rec("S1"), rec("S2")],
            vec![rec("R1")],
            vec![rec("X")],
        )
        .unwrap();
        let edges = [
            EdgeRecord::new("S1", "X", 5.0),
            EdgeRecord::new("X", "R1", 3.0),
            EdgeRecord::new("S2", "R1", 10.0),
        ];
        let adj = GraphBuilder::from_edges(&catalog, &edges).unwrap();
        (catalog, adj)
    }

    /// `n` intersections joined by random integer-weight edges.  Integer
    /// weights keep every path sum exact, so properties compare with `==`.
    pub fn random_network(seed: u64, n: usize, edge_prob: f64) -> (NodeCatalog, AdjacencyMatrix) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let records = (0..n).map(|i| rec(&format!("I{i}"))).collect();
        let catalog = NodeCatalog::load(vec![], vec![], records).unwrap();

        let mut b = GraphBuilder::new(&catalog);
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(edge_prob) {
                    let w = rng.gen_range(1..100) as f64;
                    b.add_edge(&EdgeRecord::new(format!("I{i}"), format!("I{j}"), w))
                        .unwrap();
                }
            }
        }
        let adj = b.build();
        (catalog, adj)
    }
}

// ── NodeCatalog ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use fa_core::{FaError, NodeIdx, NodeKind};

    use super::helpers::rec;
    use crate::NodeCatalog;

    #[test]
    fn block_order_and_ranges() {
        let cat = NodeCatalog::load(
            vec![rec("G1"), rec("G2")],
            vec![rec("R1"), rec("R2"), rec("R3")],
            vec![rec("I1")],
        )
        .unwrap();

        assert_eq!(cat.len(), 6);
        assert_eq!(cat.store_range(), 0..2);
        assert_eq!(cat.residential_range(), 2..5);
        assert_eq!(cat.intersection_count(), 1);

        let codes: Vec<_> = cat.nodes().iter().map(|n| n.code.as_str()).collect();
        assert_eq!(codes, ["G1", "G2", "R1", "R2", "R3", "I1"]);

        assert_eq!(cat.index_of("R2"), Some(NodeIdx(3)));
        assert_eq!(cat.index_of("nope"), None);
        assert_eq!(cat.node(NodeIdx(5)).unwrap().kind, NodeKind::Intersection);
        assert!(cat.node(NodeIdx(6)).is_none());
    }

    #[test]
    fn block_order_independent_of_argument_contents() {
        // Residential records declared "first" in a file still land after stores.
        let cat = NodeCatalog::load(vec![rec("G9")], vec![rec("R0")], vec![]).unwrap();
        assert_eq!(cat.index_of("G9"), Some(NodeIdx(0)));
        assert_eq!(cat.index_of("R0"), Some(NodeIdx(1)));
    }

    #[test]
    fn duplicate_within_block() {
        let err = NodeCatalog::load(vec![rec("G1"), rec("G1")], vec![], vec![]).unwrap_err();
        assert_eq!(err, FaError::DuplicateIdentity("G1".into()));
    }

    #[test]
    fn duplicate_across_blocks() {
        let err = NodeCatalog::load(vec![rec("X")], vec![], vec![rec("X")]).unwrap_err();
        assert_eq!(err, FaError::DuplicateIdentity("X".into()));
    }

    #[test]
    fn empty_catalog() {
        let cat = NodeCatalog::load(vec![], vec![], vec![]).unwrap();
        assert!(cat.is_empty());
        assert_eq!(cat.store_range(), 0..0);
        assert_eq!(cat.residential_range(), 0..0);
    }

    #[test]
    fn label_text_joins_tokens() {
        let cat = NodeCatalog::load(
            vec![crate::NodeRecord::new("G1", &["Food", "Lion"])],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(cat.nodes()[0].label_text(), "Food Lion");
        let pairs: Vec<_> = cat.iter().map(|(i, n)| (i, n.code.clone())).collect();
        assert_eq!(pairs, [(NodeIdx(0), "G1".to_string())]);
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use fa_core::Distance::{Finite, Unreachable};
    use fa_core::FaError;

    use super::helpers::{rec, scenario};
    use crate::{EdgeRecord, GraphBuilder, NodeCatalog};

    fn pair() -> NodeCatalog {
        NodeCatalog::load(vec![rec("A")], vec![rec("B")], vec![rec("C")]).unwrap()
    }

    #[test]
    fn writes_both_directions() {
        let (_, adj) = scenario();
        assert_eq!(adj.get(0, 3), Finite(5.0));
        assert_eq!(adj.get(3, 0), Finite(5.0));
        assert_eq!(adj.get(1, 2), Finite(10.0));
        assert_eq!(adj.get(2, 1), Finite(10.0));
    }

    #[test]
    fn undeclared_pairs_and_diagonal_are_unreachable() {
        let (_, adj) = scenario();
        assert_eq!(adj.get(0, 1), Unreachable);
        assert_eq!(adj.get(0, 2), Unreachable);
        for i in 0..adj.size() {
            assert_eq!(adj.get(i, i), Unreachable);
        }
    }

    #[test]
    fn symmetric() {
        let (_, adj) = super::helpers::random_network(7, 25, 0.3);
        for i in 0..adj.size() {
            for j in 0..adj.size() {
                assert_eq!(adj.get(i, j), adj.get(j, i), "({i},{j})");
            }
        }
    }

    #[test]
    fn last_write_wins() {
        let cat = pair();
        let edges = [EdgeRecord::new("A", "B", 4.0), EdgeRecord::new("B", "A", 9.0)];
        let adj = GraphBuilder::from_edges(&cat, &edges).unwrap();
        assert_eq!(adj.get(0, 1), Finite(9.0));
        assert_eq!(adj.get(1, 0), Finite(9.0));
    }

    #[test]
    fn zero_weight_is_a_real_edge() {
        let cat = pair();
        let adj = GraphBuilder::from_edges(&cat, &[EdgeRecord::new("A", "C", 0.0)]).unwrap();
        assert_eq!(adj.get(0, 2), Finite(0.0));
    }

    #[test]
    fn unknown_endpoint() {
        let cat = pair();
        let err = GraphBuilder::from_edges(&cat, &[EdgeRecord::new("A", "Z", 1.0)]).unwrap_err();
        assert_eq!(err, FaError::UnknownNode("Z".into()));
        let err = GraphBuilder::from_edges(&cat, &[EdgeRecord::new("Q", "A", 1.0)]).unwrap_err();
        assert_eq!(err, FaError::UnknownNode("Q".into()));
    }

    #[test]
    fn negative_weight_rejected() {
        let cat = pair();
        let err = GraphBuilder::from_edges(&cat, &[EdgeRecord::new("A", "B", -1.0)]).unwrap_err();
        assert!(matches!(err, FaError::InvalidWeight { weight, .. } if weight == -1.0));
    }

    #[test]
    fn non_finite_weight_rejected() {
        let cat = pair();
        for w in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = GraphBuilder::from_edges(&cat, &[EdgeRecord::new("A", "B", w)]).unwrap_err();
            assert!(matches!(err, FaError::InvalidWeight { .. }), "{w}");
        }
    }

    #[test]
    fn self_loop_skipped() {
        let cat = pair();
        let mut b = GraphBuilder::new(&cat);
        b.add_edge(&EdgeRecord::new("A", "A", 3.0)).unwrap();
        assert_eq!(b.edge_count(), 0);
        let adj = b.build();
        assert_eq!(adj.get(0, 0), Unreachable);
    }

    #[test]
    fn empty_catalog_builds_empty_matrix() {
        let cat = NodeCatalog::load(vec![], vec![], vec![]).unwrap();
        let adj = GraphBuilder::from_edges(&cat, &[]).unwrap();
        assert!(adj.is_empty());
        assert_eq!(adj.rows().count(), 0);
    }
}

// ── Floyd–Warshall ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest {
    use fa_core::Distance::{Finite, Unreachable};

    use super::helpers::{random_network, rec, scenario};
    use crate::shortest::{relax_all, relax_sequential};
    use crate::{EdgeRecord, FloydWarshall, GraphBuilder, NodeCatalog, ShortestPathEngine};

    #[test]
    fn scenario_distances() {
        let (cat, adj) = scenario();
        let dist = FloydWarshall.compute(&adj);
        let r1 = cat.index_of("R1").unwrap().index();
        let s1 = cat.index_of("S1").unwrap().index();
        let s2 = cat.index_of("S2").unwrap().index();

        assert_eq!(dist.get(r1, s1), Finite(8.0));
        assert_eq!(dist.get(r1, s2), Finite(10.0));
        assert_eq!(dist.get(s1, s2), Finite(18.0));
        assert_eq!(dist.get(s2, s1), Finite(18.0));
    }

    #[test]
    fn diagonal_never_computed() {
        let (_, adj) = scenario();
        let dist = FloydWarshall.compute(&adj);
        for i in 0..dist.size() {
            assert_eq!(dist.get(i, i), Unreachable);
        }
    }

    #[test]
    fn missing_leg_does_not_create_a_path() {
        // A─2─B, C isolated.  A missing leg must not act as a zero-length hop.
        let cat = NodeCatalog::load(vec![rec("A")], vec![rec("B")], vec![rec("C")]).unwrap();
        let adj = GraphBuilder::from_edges(&cat, &[EdgeRecord::new("A", "B", 2.0)]).unwrap();
        let dist = FloydWarshall.compute(&adj);
        assert_eq!(dist.get(0, 1), Finite(2.0));
        assert_eq!(dist.get(0, 2), Unreachable);
        assert_eq!(dist.get(2, 0), Unreachable);
        assert_eq!(dist.get(1, 2), Unreachable);
    }

    #[test]
    fn shorter_detour_replaces_direct_edge() {
        let cat = NodeCatalog::load(vec![rec("A")], vec![rec("B")], vec![rec("C")]).unwrap();
        let edges = [
            EdgeRecord::new("A", "B", 10.0),
            EdgeRecord::new("A", "C", 2.0),
            EdgeRecord::new("C", "B", 3.0),
        ];
        let adj = GraphBuilder::from_edges(&cat, &edges).unwrap();
        let dist = FloydWarshall.compute(&adj);
        assert_eq!(dist.get(0, 1), Finite(5.0));
        // The input matrix is untouched.
        assert_eq!(adj.get(0, 1), Finite(10.0));
    }

    #[test]
    fn never_longer_than_direct_edge() {
        let (_, adj) = random_network(11, 30, 0.2);
        let dist = FloydWarshall.compute(&adj);
        for i in 0..adj.size() {
            for j in 0..adj.size() {
                if let Some(direct) = adj.get(i, j).value() {
                    let d = dist.get(i, j).value().expect("direct edge implies a path");
                    assert!(d <= direct, "({i},{j}): {d} > {direct}");
                }
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let (_, adj) = random_network(3, 25, 0.15);
        let dist = FloydWarshall.compute(&adj);
        let n = dist.size();
        for i in 0..n {
            for k in 0..n {
                for j in 0..n {
                    if i == j || i == k || k == j {
                        continue;
                    }
                    if let (Some(a), Some(b)) = (dist.get(i, k).value(), dist.get(k, j).value()) {
                        let d = dist.get(i, j).value().expect("two finite legs imply a path");
                        assert!(d <= a + b, "({i},{k},{j})");
                    }
                }
            }
        }
    }

    #[test]
    fn result_is_symmetric() {
        let (_, adj) = random_network(5, 20, 0.25);
        let dist = FloydWarshall.compute(&adj);
        for i in 0..dist.size() {
            for j in 0..dist.size() {
                assert_eq!(dist.get(i, j), dist.get(j, i));
            }
        }
    }

    #[test]
    fn idempotent() {
        let (_, adj) = random_network(42, 30, 0.1);
        let dist = FloydWarshall.compute(&adj);
        let mut again = dist.matrix().clone();
        relax_all(&mut again);
        assert_eq!(&again, dist.matrix());
    }

    #[test]
    fn disconnected_components_stay_apart() {
        // Two cliques with no bridge.
        let cat = NodeCatalog::load(
            vec![],
            vec![],
            ["A", "B", "C", "D"].iter().map(|c| rec(c)).collect(),
        )
        .unwrap();
        let edges = [EdgeRecord::new("A", "B", 1.0), EdgeRecord::new("C", "D", 1.0)];
        let adj = GraphBuilder::from_edges(&cat, &edges).unwrap();
        let mut m = adj.matrix().clone();
        relax_sequential(&mut m);
        assert_eq!(m.get(0, 1), Finite(1.0));
        assert_eq!(m.get(2, 3), Finite(1.0));
        for (i, j) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
            assert_eq!(m.get(i, j), Unreachable);
            assert_eq!(m.get(j, i), Unreachable);
        }
    }

    #[test]
    fn empty_and_single_node() {
        let cat = NodeCatalog::load(vec![], vec![], vec![]).unwrap();
        let adj = GraphBuilder::from_edges(&cat, &[]).unwrap();
        assert!(FloydWarshall.compute(&adj).is_empty());

        let cat = NodeCatalog::load(vec![rec("A")], vec![], vec![]).unwrap();
        let adj = GraphBuilder::from_edges(&cat, &[]).unwrap();
        let dist = FloydWarshall.compute(&adj);
        assert_eq!(dist.get(0, 0), Unreachable);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        use crate::shortest::relax_parallel;

        for seed in 0..5 {
            let (_, adj) = random_network(seed, 40, 0.1);
            let mut seq = adj.matrix().clone();
            let mut par = adj.matrix().clone();
            relax_sequential(&mut seq);
            relax_parallel(&mut par);
            assert_eq!(seq, par, "seed {seed}");
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod display {
    use super::helpers::scenario;

    #[test]
    fn matrix_renders_sentinels_as_dash() {
        let (_, adj) = scenario();
        let text = adj.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        let first: Vec<_> = lines[0].split_whitespace().collect();
        assert_eq!(first, ["-", "-", "-", "5"]);
    }
}
