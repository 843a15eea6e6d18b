//! Shortest paths over a weighted directed graph, driven by the indexed heap.

use crate::error::GraphError;
use crate::priority_queue::IndexedMinHeap;
use crate::trace::HeapObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u32,
}

/// A directed, weighted graph stored as an adjacency list.
///
/// Nodes are identified by `usize` indices, which double as element ids in
/// the heap used by [`dijkstra`].
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    labels: Vec<String>,
}

impl Graph {
    pub fn new(labels: &[&str]) -> Self {
        Graph {
            adj: vec![Vec::new(); labels.len()],
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Add a directed edge. Both endpoints must already be nodes.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adj[from].push(Edge { to, weight });
        Ok(())
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.num_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                nodes: self.num_nodes(),
            })
        }
    }

    pub fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adj[u]
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Render a node path with labels, e.g. `A -> B -> D`.
    pub fn format_path(&self, path: &[usize]) -> String {
        path.iter()
            .map(|&n| self.label(n))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Build the benchmark graph:
///
/// ```text
///   A --2--> B --1--> D --4--> E
///   |                          ^
///   +--10--> C ------0---------+
/// ```
///
/// Shortest path A to E: cost 7 via A, B, D, E.
pub fn build_benchmark_graph() -> Graph {
    // A=0, B=1, C=2, D=3, E=4
    let mut g = Graph::new(&["A", "B", "C", "D", "E"]);

    connect(&mut g, (0, 1), 2);
    connect(&mut g, (0, 2), 10);
    connect(&mut g, (1, 3), 1);
    connect(&mut g, (3, 4), 4);
    connect(&mut g, (2, 4), 0);

    g
}

/// Add an edge between two nodes known to exist.
fn connect(g: &mut Graph, endpoints: (usize, usize), weight: u32) {
    g.adj[endpoints.0].push(Edge {
        to: endpoints.1,
        weight,
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub cost: u64,
    /// Node indices from source to target, inclusive.
    pub nodes: Vec<usize>,
}

/// Run Dijkstra's algorithm from `source` until `target` is settled.
///
/// Every node is in the frontier heap at most once; a shorter tentative
/// distance re-keys the existing entry instead of pushing a duplicate.
/// Returns `Ok(None)` when `target` is unreachable.
pub fn dijkstra(
    graph: &Graph,
    source: usize,
    target: usize,
) -> Result<Option<ShortestPath>, GraphError> {
    let mut frontier = IndexedMinHeap::new(graph.num_nodes());
    dijkstra_with(&mut frontier, graph, source, target)
}

/// [`dijkstra`] on a caller-supplied frontier, e.g. one built with tracing.
///
/// The frontier is cleared first and must hold at least one id per node.
pub fn dijkstra_with<O: HeapObserver>(
    frontier: &mut IndexedMinHeap<O>,
    graph: &Graph,
    source: usize,
    target: usize,
) -> Result<Option<ShortestPath>, GraphError> {
    graph.check_node(source)?;
    graph.check_node(target)?;

    let n = graph.num_nodes();
    let mut dist = vec![u64::MAX; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];

    frontier.clear();
    dist[source] = 0;
    frontier.insert(0, source)?;

    while !frontier.is_empty() {
        let u = frontier.remove_min()?;
        settled[u] = true;
        if u == target {
            return Ok(Some(ShortestPath {
                cost: dist[u],
                nodes: reconstruct_path(&prev, source, target),
            }));
        }

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if settled[v] {
                continue;
            }
            let candidate = dist[u] + u64::from(edge.weight);
            if candidate < dist[v] {
                log::debug!("relax {} -> {}: {} (was {})", u, v, candidate, dist[v]);
                dist[v] = candidate;
                prev[v] = Some(u);
                let key = i64::try_from(candidate).unwrap_or(i64::MAX);
                if frontier.contains(v) {
                    frontier.update(key, v)?;
                } else {
                    frontier.insert(key, v)?;
                }
            }
        }
    }

    Ok(None)
}

/// Walk the predecessor chain from target back to source.
fn reconstruct_path(prev: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match prev[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
