//! Property tests over random DAGs.

use proptest::prelude::*;

use causeway_core::errors::GraphError;
use causeway_graph::graph::dag_enforcement;
use causeway_graph::{
    ancestors, ancestral_subgraph, backdoor_criterion, d_separated, descendants, identify_effect,
    intervene, local_markov_statements, topological_order, CandidateSource, CausalGraph,
};

fn name(i: usize) -> String {
    format!("v{i}")
}

/// Build a random DAG with `n` nodes, inserting `edges` in order and
/// skipping any that would close a cycle.
fn build_random_dag(n: usize, edges: &[(usize, usize)]) -> CausalGraph {
    let names: Vec<String> = (0..n).map(name).collect();
    let mut graph = CausalGraph::new(&names).unwrap();
    for &(src, tgt) in edges {
        match graph.add_edge(&name(src), &name(tgt)) {
            Ok(next) => graph = next,
            Err(GraphError::CycleViolation { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    graph
}

// Strategy to generate random edges for a graph of size n.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

const N: usize = 10;

proptest! {
    #[test]
    fn random_insertions_keep_the_graph_acyclic(edges in edge_strategy(N)) {
        let graph = build_random_dag(N, &edges);
        prop_assert!(dag_enforcement::find_cycles(&graph).is_empty());

        let order = topological_order(&graph);
        prop_assert_eq!(order.len(), N);
        let position = |v: &str| order.iter().position(|o| o.as_str() == v);
        for (from, to) in graph.edges() {
            prop_assert!(position(from.as_str()) < position(to.as_str()));
        }
    }

    #[test]
    fn rejected_edges_leave_the_graph_unchanged(edges in edge_strategy(N), a in 0..N, b in 0..N) {
        let graph = build_random_dag(N, &edges);
        let before = graph.edges();
        if let Err(err) = graph.add_edge(&name(a), &name(b)) {
            let is_cycle = matches!(err, GraphError::CycleViolation { .. });
            prop_assert!(is_cycle);
            prop_assert!(a == b || ancestors(&graph, &name(a)).unwrap().contains(name(b).as_str()));
        }
        prop_assert_eq!(graph.edges(), before);
    }

    #[test]
    fn no_variable_is_its_own_ancestor(edges in edge_strategy(N)) {
        let graph = build_random_dag(N, &edges);
        for v in graph.variables() {
            prop_assert!(!ancestors(&graph, v.as_str()).unwrap().contains(v));
            prop_assert!(!descendants(&graph, v.as_str()).unwrap().contains(v));
        }
    }

    #[test]
    fn every_edge_implies_ancestry(edges in edge_strategy(N)) {
        let graph = build_random_dag(N, &edges);
        for (from, to) in graph.edges() {
            prop_assert!(ancestors(&graph, to.as_str()).unwrap().contains(&from));
            prop_assert!(descendants(&graph, from.as_str()).unwrap().contains(&to));
        }
    }

    #[test]
    fn reversal_swaps_ancestors_and_descendants(edges in edge_strategy(N)) {
        let graph = build_random_dag(N, &edges);
        let reversed = graph.reversed();
        for v in graph.variables() {
            let v = v.as_str();
            prop_assert_eq!(ancestors(&reversed, v).unwrap(), descendants(&graph, v).unwrap());
        }
    }

    #[test]
    fn d_separation_is_symmetric(
        edges in edge_strategy(N),
        x in 0..N,
        y in 0..N,
        z in prop::collection::btree_set(0..N, 0..3),
    ) {
        prop_assume!(x != y && !z.contains(&x) && !z.contains(&y));
        let graph = build_random_dag(N, &edges);
        let (xn, yn) = (name(x), name(y));
        let zn: Vec<String> = z.iter().map(|&i| name(i)).collect();
        let zr: Vec<&str> = zn.iter().map(String::as_str).collect();

        prop_assert_eq!(
            d_separated(&graph, &[xn.as_str()], &[yn.as_str()], &zr).unwrap(),
            d_separated(&graph, &[yn.as_str()], &[xn.as_str()], &zr).unwrap()
        );
    }

    #[test]
    fn d_separation_only_depends_on_the_ancestral_subgraph(
        edges in edge_strategy(N),
        x in 0..N,
        y in 0..N,
        z in prop::collection::btree_set(0..N, 0..3),
    ) {
        prop_assume!(x != y && !z.contains(&x) && !z.contains(&y));
        let graph = build_random_dag(N, &edges);
        let (xn, yn) = (name(x), name(y));
        let zn: Vec<String> = z.iter().map(|&i| name(i)).collect();
        let zr: Vec<&str> = zn.iter().map(String::as_str).collect();

        let mut seeds = vec![xn.as_str(), yn.as_str()];
        seeds.extend(zr.iter().copied());
        let sub = ancestral_subgraph(&graph, &seeds).unwrap();

        prop_assert_eq!(
            d_separated(&graph, &[xn.as_str()], &[yn.as_str()], &zr).unwrap(),
            d_separated(&sub, &[xn.as_str()], &[yn.as_str()], &zr).unwrap()
        );
    }

    #[test]
    fn local_markov_statements_hold(edges in edge_strategy(N)) {
        let graph = build_random_dag(N, &edges);
        for s in local_markov_statements(&graph) {
            let x: Vec<&str> = s.x.iter().map(|v| v.as_str()).collect();
            let y: Vec<&str> = s.y.iter().map(|v| v.as_str()).collect();
            let z: Vec<&str> = s.given.iter().map(|v| v.as_str()).collect();
            prop_assert!(d_separated(&graph, &x, &y, &z).unwrap(), "{}", s);
        }
    }

    #[test]
    fn intervention_cuts_incoming_edges_and_is_idempotent(edges in edge_strategy(N), t in 0..N) {
        let graph = build_random_dag(N, &edges);
        let target = name(t);
        let once = intervene(&graph, &target, 1_u8).unwrap();
        let twice = once.clone().and_intervene(&target, 2_u8).unwrap();

        prop_assert!(once.graph().parents(&target).unwrap().is_empty());
        prop_assert_eq!(once.graph(), twice.graph());

        let kept: Vec<_> = graph
            .edges()
            .into_iter()
            .filter(|(_, to)| to.as_str() != target)
            .collect();
        prop_assert_eq!(once.graph().edges(), kept);
    }

    #[test]
    fn identified_adjustment_sets_satisfy_the_backdoor_criterion(
        edges in edge_strategy(N),
        x in 0..N,
        y in 0..N,
    ) {
        prop_assume!(x != y);
        let graph = build_random_dag(N, &edges);
        let (xn, yn) = (name(x), name(y));
        let result = identify_effect(&graph, &[xn.as_str()], &[yn.as_str()], &CandidateSource::bounded(2)).unwrap();
        if let Some(z) = result.adjustment_set() {
            let zr: Vec<&str> = z.iter().map(|v| v.as_str()).collect();
            prop_assert!(backdoor_criterion(&graph, &[xn.as_str()], &[yn.as_str()], &zr).unwrap());
        }
    }
}
