use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::town::Town;

/// Best distances and predecessors from a single Dijkstra run.
///
/// Towns missing from `distances` are unreachable from the source (infinite
/// distance). The source is its own root and has no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: Town,
    distances: HashMap<Town, u64>,
    predecessors: HashMap<Town, Town>,
}

impl ShortestPathTree {
    pub fn source(&self) -> &Town {
        &self.source
    }

    /// Shortest distance from the source, or None if unreachable.
    pub fn distance(&self, town: &Town) -> Option<u64> {
        self.distances.get(town).copied()
    }

    pub fn predecessor(&self, town: &Town) -> Option<&Town> {
        self.predecessors.get(town)
    }

    /// Number of towns reached, including the source.
    pub fn reached(&self) -> usize {
        self.distances.len()
    }
}

/// One road traversal along a route, oriented in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: Town,
    pub to: Town,
    pub road: String,
    pub weight: u32,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} via {} to {} {} mi", self.from, self.road, self.to, self.weight)
    }
}

/// A reconstructed shortest route. No hops means the towns are the same or
/// no path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub hops: Vec<Hop>,
    pub total_distance: u64,
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Hop descriptions in travel order.
    pub fn descriptions(&self) -> Vec<String> {
        self.hops.iter().map(|h| h.to_string()).collect()
    }
}

/// Single-source Dijkstra over road weights.
///
/// The frontier is a min-heap of `(distance, town)` entries. A town is pushed
/// again every time its distance improves; older entries are skipped on pop
/// when their distance is worse than the recorded best. Ties pop in town-name
/// order, which keeps results deterministic.
pub fn dijkstra(graph: &Graph, source: &Town) -> Result<ShortestPathTree, GraphError> {
    graph.incident_edges(source)?;

    let mut distances: HashMap<Town, u64> = HashMap::new();
    let mut predecessors: HashMap<Town, Town> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(u64, Town)>> = BinaryHeap::new();

    distances.insert(source.clone(), 0);
    frontier.push(Reverse((0, source.clone())));

    while let Some(Reverse((dist, current))) = frontier.pop() {
        if distances.get(&current).is_some_and(|&best| dist > best) {
            continue;
        }

        for road in graph.incident_edges(&current)? {
            let Some(neighbour) = road.other_endpoint(&current) else {
                continue;
            };
            let candidate = dist + u64::from(road.weight());
            let improves = distances
                .get(neighbour)
                .map_or(true, |&best| candidate < best);
            if improves {
                distances.insert(neighbour.clone(), candidate);
                predecessors.insert(neighbour.clone(), current.clone());
                frontier.push(Reverse((candidate, neighbour.clone())));
            }
        }
    }

    debug!(source = %source, reached = distances.len(), "dijkstra complete");

    Ok(ShortestPathTree {
        source: source.clone(),
        distances,
        predecessors,
    })
}

/// Shortest route from `source` to `destination`.
///
/// Returns an empty route when the towns are the same or the destination is
/// unreachable. Errors if either town is not in the graph.
pub fn shortest_route(graph: &Graph, source: &Town, destination: &Town) -> Result<Route, GraphError> {
    graph.incident_edges(destination)?;
    let tree = dijkstra(graph, source)?;

    if source == destination {
        return Ok(Route::default());
    }
    let Some(total_distance) = tree.distance(destination) else {
        return Ok(Route::default());
    };

    Ok(Route {
        hops: reconstruct_hops(graph, &tree, destination),
        total_distance,
    })
}

/// Walk predecessors from `destination` back to the tree's source, then
/// reverse into travel order. A missing predecessor truncates the walk.
fn reconstruct_hops(graph: &Graph, tree: &ShortestPathTree, destination: &Town) -> Vec<Hop> {
    let mut hops = Vec::new();
    let mut current = destination;

    while current != tree.source() {
        let Some(previous) = tree.predecessor(current) else {
            break;
        };
        let Some(road) = graph.get_edge(previous, current) else {
            break;
        };
        hops.push(Hop {
            from: previous.clone(),
            to: current.clone(),
            road: road.name().to_string(),
            weight: road.weight(),
        });
        current = previous;
    }

    hops.reverse();
    hops
}
