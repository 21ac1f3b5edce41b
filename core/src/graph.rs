use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::GraphError;
use crate::road::Road;
use crate::town::Town;
use crate::traversal;

/// In-memory undirected graph: each town maps to the set of roads touching it.
///
/// A road joining A and B is stored in both A's and B's sets. Because road
/// equality ignores direction, name and weight, each set holds at most one road
/// per neighbour and re-adding a connected pair leaves the stored road intact.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: HashMap<Town, HashSet<Road>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known number of towns.
    pub fn with_capacity(town_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(town_count),
        }
    }

    /// Insert a town. Returns false if a town with that name is already present.
    pub fn add_vertex(&mut self, town: Town) -> bool {
        if self.adjacency.contains_key(&town) {
            return false;
        }
        self.adjacency.insert(town, HashSet::new());
        true
    }

    pub fn has_vertex(&self, town: &Town) -> bool {
        self.adjacency.contains_key(town)
    }

    /// The stored town equal to `town`, if present.
    pub fn get_vertex(&self, town: &Town) -> Option<&Town> {
        self.adjacency.get_key_value(town).map(|(stored, _)| stored)
    }

    /// True if some road joins `a` and `b`, in either direction.
    pub fn has_edge(&self, a: &Town, b: &Town) -> bool {
        self.get_edge(a, b).is_some()
    }

    /// The road joining `a` and `b`, if any.
    pub fn get_edge(&self, a: &Town, b: &Town) -> Option<&Road> {
        let probe = Road::new(a.clone(), b.clone(), 0, "");
        self.adjacency.get(a)?.get(&probe)
    }

    /// Build a road between two existing towns and store it on both ends.
    ///
    /// Returns None if either town is missing. If the pair is already joined,
    /// the stored road is kept unchanged and the new value is still returned.
    pub fn add_edge(
        &mut self,
        a: Town,
        b: Town,
        weight: u32,
        name: impl Into<String>,
    ) -> Option<Road> {
        if !self.has_vertex(&a) || !self.has_vertex(&b) {
            return None;
        }
        let road = Road::new(a, b, weight, name);
        let (source, destination) = road.endpoints();
        if let Some(roads) = self.adjacency.get_mut(source) {
            roads.insert(road.clone());
        }
        if let Some(roads) = self.adjacency.get_mut(destination) {
            roads.insert(road.clone());
        }
        Some(road)
    }

    /// Remove the road joining `a` and `b` from both towns' sets.
    ///
    /// Only the endpoints are matched; `weight` and `name` are accepted for
    /// callers that track them but do not narrow the lookup.
    pub fn remove_edge(&mut self, a: &Town, b: &Town, weight: u32, name: &str) -> Option<Road> {
        let probe = Road::new(a.clone(), b.clone(), weight, name);
        let removed = self.adjacency.get_mut(a)?.take(&probe)?;
        if let Some(roads) = self.adjacency.get_mut(b) {
            roads.remove(&probe);
        }
        debug!(road = %removed, "removed road");
        Some(removed)
    }

    /// Remove a town and every road touching it. Returns false if absent.
    pub fn remove_vertex(&mut self, town: &Town) -> bool {
        let Some(roads) = self.adjacency.remove(town) else {
            return false;
        };
        for road in &roads {
            if let Some(other) = road.other_endpoint(town) {
                if let Some(neighbour_roads) = self.adjacency.get_mut(other) {
                    neighbour_roads.remove(road);
                }
            }
        }
        debug!(town = %town, roads = roads.len(), "removed town");
        true
    }

    pub fn all_vertices(&self) -> HashSet<&Town> {
        self.adjacency.keys().collect()
    }

    /// Every road in the graph, each once.
    pub fn all_edges(&self) -> HashSet<&Road> {
        self.adjacency.values().flatten().collect()
    }

    /// Roads touching `town`. Errors if the town was never added.
    pub fn incident_edges(&self, town: &Town) -> Result<&HashSet<Road>, GraphError> {
        self.adjacency
            .get(town)
            .ok_or_else(|| GraphError::town_not_found(town.name()))
    }

    /// Shortest path from `source` to `destination` as hop descriptions,
    /// e.g. `"City_1 via Street_1 to City_2 3 mi"`.
    ///
    /// Empty when the towns are the same or no path exists. Errors if either
    /// town is not in the graph.
    pub fn shortest_path(&self, source: &Town, destination: &Town) -> Result<Vec<String>, GraphError> {
        let route = traversal::shortest_route(self, source, destination)?;
        Ok(route.descriptions())
    }

    pub fn town_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct roads. Each road is stored twice, once per endpoint,
    /// except self-loops.
    pub fn road_count(&self) -> usize {
        self.all_edges().len()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
