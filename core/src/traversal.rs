use std::collections::VecDeque;

use serde::Serialize;

use crate::graph::{Edge, NodeId, SparseGraph};

/// Out-degree information for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeResult {
    pub node_id: NodeId,
    pub out_degree: usize,
}

/// Result of a depth-limited BFS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    /// Every edge examined, in dequeue order. Edges into already-visited
    /// nodes are included, so this is not a spanning tree.
    pub edges: Vec<Edge>,
    /// Distinct nodes reached, including the start. 0 for an invalid start.
    pub nodes_visited: usize,
}

/// Node with the largest out-degree.
///
/// Scans ids in ascending order and only replaces the current best on a
/// strictly larger degree, so ties go to the lowest id. `None` on an empty
/// graph.
pub fn max_out_degree<G: SparseGraph>(graph: &G) -> Option<DegreeResult> {
    let mut best: Option<DegreeResult> = None;

    for node in node_ids(graph) {
        let out_degree = graph.out_degree(node);
        if best.map_or(true, |b| out_degree > b.out_degree) {
            best = Some(DegreeResult { node_id: node, out_degree });
        }
    }

    best
}

/// Return nodes ranked by out-degree.
///
/// If `top_n` is 0, returns all nodes. Otherwise returns the top N by
/// out-degree (descending). Ties are broken by node ID (ascending).
pub fn degree_ranking<G: SparseGraph>(graph: &G, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = node_ids(graph)
        .map(|node_id| DegreeResult {
            node_id,
            out_degree: graph.out_degree(node_id),
        })
        .collect();

    results.sort_by(|a, b| {
        b.out_degree
            .cmp(&a.out_degree)
            .then(a.node_id.cmp(&b.node_id))
    });

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}

/// Depth-limited BFS from `start`, returning every traversed edge.
///
/// A node dequeued at `depth >= max_depth` is not expanded, so
/// `max_depth == 0` records nothing. Each reachable node within range is
/// expanded exactly once; neighbors come out in ascending order.
pub fn bfs_traversal<G: SparseGraph>(graph: &G, start: NodeId, max_depth: u32) -> TraversalResult {
    if !graph.contains_node(start) {
        return TraversalResult::default();
    }

    let mut visited = vec![false; graph.node_count()];
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut edges = Vec::new();

    visited[start as usize] = true;
    let mut nodes_visited = 1;
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in graph.neighbors(current) {
            edges.push(Edge::new(current, next));

            let seen = &mut visited[next as usize];
            if !*seen {
                *seen = true;
                nodes_visited += 1;
                queue.push_back((next, depth + 1));
            }
        }
    }

    tracing::debug!(
        start,
        max_depth,
        edges = edges.len(),
        nodes_visited,
        "BFS finished"
    );

    TraversalResult {
        edges,
        nodes_visited,
    }
}

/// Edge list of [`bfs_traversal`].
pub fn bfs<G: SparseGraph>(graph: &G, start: NodeId, max_depth: u32) -> Vec<Edge> {
    bfs_traversal(graph, start, max_depth).edges
}

fn node_ids<G: SparseGraph>(graph: &G) -> impl Iterator<Item = NodeId> {
    // node_count is at most NodeId::MAX + 1, so every index fits.
    (0..graph.node_count()).map(|i| i as NodeId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CsrBuilder;
    use crate::graph::CsrGraph;

    fn graph(edges: &[(NodeId, NodeId)]) -> CsrGraph {
        CsrGraph::build(edges.iter().copied())
    }

    fn make_triangle() -> CsrGraph {
        graph(&[(0, 1), (0, 2), (1, 2)])
    }

    fn make_chain(n: NodeId) -> CsrGraph {
        CsrGraph::build((0..n - 1).map(|i| Edge::new(i, i + 1)))
    }

    fn make_star(center: NodeId, leaves: NodeId) -> CsrGraph {
        CsrGraph::build((1..=leaves).map(|i| Edge::new(center, center + i)))
    }

    fn make_cycle(n: NodeId) -> CsrGraph {
        CsrGraph::build((0..n).map(|i| Edge::new(i, (i + 1) % n)))
    }

    fn pairs(edges: &[Edge]) -> Vec<(NodeId, NodeId)> {
        edges.iter().map(|&e| e.into()).collect()
    }

    // --- Degree tests ---

    #[test]
    fn test_max_degree_triangle() {
        let best = max_out_degree(&make_triangle()).unwrap();
        assert_eq!(best, DegreeResult { node_id: 0, out_degree: 2 });
    }

    #[test]
    fn test_max_degree_empty() {
        assert_eq!(max_out_degree(&CsrGraph::empty()), None);
    }

    #[test]
    fn test_max_degree_tie_lowest_id() {
        let g = graph(&[(3, 0), (3, 1), (1, 0), (1, 2)]);
        let best = max_out_degree(&g).unwrap();
        assert_eq!(best.node_id, 1);
        assert_eq!(best.out_degree, 2);
    }

    #[test]
    fn test_max_degree_all_zero() {
        let mut b = CsrBuilder::new();
        b.reserve_nodes(3);
        let g = b.build();
        assert_eq!(
            max_out_degree(&g).unwrap(),
            DegreeResult { node_id: 0, out_degree: 0 }
        );
    }

    #[test]
    fn test_max_degree_highest_id() {
        let g = graph(&[(2, 0)]);
        assert_eq!(
            max_out_degree(&g).unwrap(),
            DegreeResult { node_id: 2, out_degree: 1 }
        );
    }

    #[test]
    fn test_max_degree_counts_duplicates() {
        let g = graph(&[(0, 1), (0, 2), (1, 2), (1, 2), (1, 2)]);
        assert_eq!(
            max_out_degree(&g).unwrap(),
            DegreeResult { node_id: 1, out_degree: 3 }
        );
    }

    #[test]
    fn test_degree_star() {
        let g = make_star(0, 50);
        let results = degree_ranking(&g, 0);
        assert_eq!(results.len(), 51);
        assert_eq!(results[0], DegreeResult { node_id: 0, out_degree: 50 });
        assert!(results[1..].iter().all(|r| r.out_degree == 0));
    }

    #[test]
    fn test_degree_top_n() {
        let g = make_star(0, 50);
        let results = degree_ranking(&g, 5);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].node_id, 0);
        // Leaves tie at 0 and come back in id order.
        assert_eq!(
            results[1..].iter().map(|r| r.node_id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_degree_sorted() {
        let g = graph(&[(4, 0), (4, 1), (4, 2), (2, 0), (2, 1), (0, 1)]);
        let results = degree_ranking(&g, 0);
        for w in results.windows(2) {
            assert!(
                w[0].out_degree >= w[1].out_degree,
                "not sorted: {} >= {} failed",
                w[0].out_degree,
                w[1].out_degree
            );
        }
    }

    #[test]
    fn test_degree_ranking_head_matches_max() {
        let g = graph(&[(5, 1), (5, 2), (3, 1), (3, 2), (0, 0)]);
        assert_eq!(degree_ranking(&g, 1).first().copied(), max_out_degree(&g));
    }

    #[test]
    fn test_degree_empty() {
        assert!(degree_ranking(&CsrGraph::empty(), 10).is_empty());
    }

    // --- BFS tests ---

    #[test]
    fn test_bfs_triangle_depth_one() {
        assert_eq!(pairs(&bfs(&make_triangle(), 0, 1)), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_bfs_triangle_depth_two() {
        assert_eq!(
            pairs(&bfs(&make_triangle(), 0, 2)),
            vec![(0, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_bfs_depth_zero() {
        assert!(bfs(&make_triangle(), 0, 0).is_empty());
        let result = bfs_traversal(&make_triangle(), 0, 0);
        assert_eq!(result.nodes_visited, 1);
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_triangle();
        assert!(bfs(&g, 5, 2).is_empty());
        assert_eq!(bfs_traversal(&g, 5, 2).nodes_visited, 0);
    }

    #[test]
    fn test_bfs_empty_graph() {
        assert!(bfs(&CsrGraph::empty(), 0, 3).is_empty());
    }

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(6);
        let result = bfs_traversal(&g, 0, 10);
        assert_eq!(result.edges.len(), 5);
        assert_eq!(result.nodes_visited, 6);
    }

    #[test]
    fn test_bfs_chain_depth_limited() {
        let g = make_chain(10);
        let result = bfs_traversal(&g, 0, 3);
        assert_eq!(pairs(&result.edges), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(result.nodes_visited, 4);
    }

    #[test]
    fn test_bfs_directed_only() {
        // Chain 0→1→2→3→4 from the middle reaches only forward.
        let g = make_chain(5);
        assert_eq!(pairs(&bfs(&g, 2, 10)), vec![(2, 3), (3, 4)]);
        assert!(bfs(&g, 4, 10).is_empty());
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(100);
        let result = bfs_traversal(&g, 0, 1000);
        // Every node expanded once; the closing edge 99→0 is still recorded.
        assert_eq!(result.edges.len(), 100);
        assert_eq!(result.edges.last(), Some(&Edge::new(99, 0)));
        assert_eq!(result.nodes_visited, 100);
    }

    #[test]
    fn test_bfs_records_edges_into_visited() {
        // Diamond: 0→1, 0→2, 1→3, 2→3. Node 3 is reached twice.
        let g = graph(&[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let result = bfs_traversal(&g, 0, 5);
        assert_eq!(pairs(&result.edges), vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(result.nodes_visited, 4);
    }

    #[test]
    fn test_bfs_self_loop() {
        let g = graph(&[(0, 0), (0, 1)]);
        assert_eq!(pairs(&bfs(&g, 0, 3)), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_bfs_parallel_edges() {
        let g = graph(&[(0, 1), (0, 1), (0, 1)]);
        let result = bfs_traversal(&g, 0, 1);
        assert_eq!(result.edges.len(), 3);
        assert_eq!(result.nodes_visited, 2);
    }

    #[test]
    fn test_bfs_level_order() {
        // 0 → {3, 1}; 1 → 5; 3 → 4. Level 1 edges precede level 2 edges,
        // and within a source targets ascend.
        let g = graph(&[(0, 3), (3, 4), (0, 1), (1, 5)]);
        assert_eq!(
            pairs(&bfs(&g, 0, 2)),
            vec![(0, 1), (0, 3), (1, 5), (3, 4)]
        );
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(0, 20);
        let result = bfs_traversal(&g, 0, 1);
        assert_eq!(result.edges.len(), 20);
        assert_eq!(result.nodes_visited, 21);
    }
}
