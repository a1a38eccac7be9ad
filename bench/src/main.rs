use csr_graph_core::{bfs_traversal, max_out_degree, parse_lines, CsrBuilder, CsrGraph, Edge, NodeId};
use std::collections::VecDeque;
use std::time::Instant;

/// Edges re-rendered as text for the parse timing; keeps the string buffer bounded.
const PARSE_SAMPLE_EDGES: usize = 1_000_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: NodeId = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: csr-graph-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Fractal branching tree (deep paths)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense cliques connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!();
        println!("Default node_count: 5000000");
        return;
    }

    if node_count < 32 {
        eprintln!("node_count must be at least 32");
        return;
    }

    println!("csr-graph-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, fn(NodeId) -> Vec<Edge>)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(NodeId) -> Vec<Edge>),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(NodeId) -> Vec<Edge>, node_count: NodeId) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let edges = generator(node_count);
    println!("Generated {} edges in {:.2}s", edges.len(), t.elapsed().as_secs_f64());

    let sample: Vec<String> = edges
        .iter()
        .take(PARSE_SAMPLE_EDGES)
        .map(|e| format!("{}\t{}", e.source, e.target))
        .collect();
    let t = Instant::now();
    let parsed = parse_lines(&sample);
    println!(
        "Parsed {} lines in {:.1}ms",
        parsed.edges.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );
    drop(sample);

    let t = Instant::now();
    let mut builder = CsrBuilder::with_capacity(node_count as usize, edges.len());
    builder.reserve_nodes(node_count as usize);
    builder.extend(edges);
    let graph = builder.build();
    println!(
        "Built CSR in {:.2}s: {} nodes, {} edges, ~{:.0}MB",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    if let Some(best) = max_out_degree(&graph) {
        println!(
            "Max out-degree: node {} ({}) in {:.1}ms",
            best.node_id,
            best.out_degree,
            t.elapsed().as_secs_f64() * 1000.0
        );
    }

    // BFS from node 0 (typically a hub or root)
    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "depth", "edges", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = bfs_traversal(&graph, 0, depth);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            depth,
            result.edges.len(),
            result.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        );
        // Stop if we already found everything
        if result.nodes_visited >= graph.node_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    report_determinism(&graph);
    println!();
}

/// Rebuild from the graph's own edges in reverse order; must match exactly.
fn report_determinism(graph: &CsrGraph) {
    let mut edges: Vec<Edge> = (0..graph.node_count() as NodeId)
        .flat_map(|u| graph.neighbors(u).iter().map(move |&v| Edge::new(u, v)))
        .collect();
    edges.reverse();
    let mut builder = CsrBuilder::with_capacity(graph.node_count(), edges.len());
    builder.reserve_nodes(graph.node_count());
    builder.extend(edges);
    let same = builder.build() == *graph;
    println!();
    println!("Reversed-input rebuild identical: {}", same);
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_node(&mut self, max: NodeId) -> NodeId {
        self.next(u64::from(max)) as NodeId
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// L-system fractal tree: deep branching with self-similar structure.
///
/// Each node spawns `branching` children. Produces deep paths (log depth)
/// with exponential width.
fn gen_lsystem(node_count: NodeId) -> Vec<Edge> {
    let branching = 3;
    let mut edges = Vec::with_capacity(node_count as usize);

    let mut next_id: NodeId = 1;
    let mut frontier: Vec<NodeId> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                edges.push(Edge::new(parent, child));
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    edges
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge and connecting
/// to one of its endpoints. Nodes with more edges are more likely to be picked.
fn gen_scale_free(node_count: NodeId) -> Vec<Edge> {
    let edges_per_node: NodeId = 10;
    let mut edges = Vec::with_capacity(node_count as usize * edges_per_node as usize);
    let mut rng = FastRng::new(12345);

    // Endpoint list for O(1) preferential attachment sampling
    let mut edge_endpoints: Vec<NodeId> = Vec::with_capacity(edges.capacity() * 2);

    // Seed: small clique
    let seed: NodeId = 5;
    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push(Edge::new(i, j));
            edge_endpoints.push(i);
            edge_endpoints.push(j);
        }
    }

    // Grow: each new node attaches to `edges_per_node` existing nodes
    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let idx = rng.next(edge_endpoints.len() as u64) as usize;
            let target = edge_endpoints[idx];
            if target != new_node {
                edges.push(Edge::new(new_node, target));
                edge_endpoints.push(new_node);
                edge_endpoints.push(target);
            }
        }
    }

    edges
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each node connects to its K forward neighbors on a ring; each edge is
/// rewired to a random target with probability p.
fn gen_small_world(node_count: NodeId) -> Vec<Edge> {
    let k: NodeId = 10;
    let p = 0.05f64;
    let mut edges = Vec::with_capacity(node_count as usize * k as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = ((u64::from(i) + u64::from(j)) % u64::from(node_count)) as NodeId;
            if rng.next_f64() < p {
                let rewired = rng.next_node(node_count);
                edges.push(Edge::new(i, if rewired != i { rewired } else { neighbor }));
            } else {
                edges.push(Edge::new(i, neighbor));
            }
        }
    }

    edges
}

/// Erdos-Renyi: uniform random edges, ~10 per node on average.
fn gen_random(node_count: NodeId) -> Vec<Edge> {
    let target_edges = node_count as usize * 10;
    let mut edges = Vec::with_capacity(target_edges);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next_node(node_count);
        let to = rng.next_node(node_count);
        if from != to {
            edges.push(Edge::new(from, to));
        }
    }

    edges
}

/// Barbell: two dense cliques connected by a single thin bridge.
///
/// Each clique has ~n/2 nodes with ~20 random intra-clique edges per node;
/// they are joined by a directed chain of 10 bridge nodes.
fn gen_barbell(node_count: NodeId) -> Vec<Edge> {
    let bridge_len: NodeId = 10;
    let clique_size = (node_count - bridge_len) / 2;
    let fan_out = 20.min(clique_size - 1);
    let mut edges = Vec::with_capacity(clique_size as usize * 40 + bridge_len as usize);
    let mut rng = FastRng::new(99999);

    // Clique A: nodes 0..clique_size
    for i in 0..clique_size {
        for _ in 0..fan_out {
            let target = rng.next_node(clique_size);
            if target != i {
                edges.push(Edge::new(i, target));
            }
        }
    }

    // Bridge: chain from last node of A to first node of B
    let bridge_start = clique_size;
    edges.push(Edge::new(clique_size - 1, bridge_start));
    for id in (bridge_start + 1)..(bridge_start + bridge_len) {
        edges.push(Edge::new(id - 1, id));
    }

    // Clique B: nodes after bridge
    let b_start = bridge_start + bridge_len;
    edges.push(Edge::new(b_start - 1, b_start));
    for i in 0..clique_size {
        for _ in 0..fan_out {
            let target = rng.next_node(clique_size);
            if target != i {
                edges.push(Edge::new(b_start + i, b_start + target));
            }
        }
    }

    edges
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new node attaches to a random node on the recent "surface", with
/// occasional long-range second edges. Edges point outward from the seed.
fn gen_dla(node_count: NodeId) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(node_count as usize * 2);
    let mut rng = FastRng::new(77777);

    // VecDeque for O(1) pop_front when evicting oldest surface nodes.
    let surface_max = 10_000usize;
    let mut surface: VecDeque<NodeId> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        edges.push(Edge::new(attach_to, new_node));

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next_node(new_node);
            if other != attach_to {
                edges.push(Edge::new(other, new_node));
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_stay_in_range() {
        let n = 200;
        let generators: [fn(NodeId) -> Vec<Edge>; 6] = [
            gen_lsystem,
            gen_scale_free,
            gen_small_world,
            gen_random,
            gen_barbell,
            gen_dla,
        ];
        for generator in generators {
            let edges = generator(n);
            assert!(!edges.is_empty());
            assert!(edges.iter().all(|e| e.source < n && e.target < n));
        }
    }

    #[test]
    fn test_generators_deterministic() {
        assert_eq!(gen_random(100), gen_random(100));
        assert_eq!(gen_dla(100), gen_dla(100));
    }

    #[test]
    fn test_lsystem_is_tree() {
        let edges = gen_lsystem(40);
        assert_eq!(edges.len(), 39);
        let g = CsrGraph::build(edges);
        assert_eq!(bfs_traversal(&g, 0, 100).nodes_visited, 40);
    }
}
