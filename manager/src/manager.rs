use std::path::PathBuf;

use town_graph_core::{Graph, Town};

use crate::error::Result;
use crate::settings::{Settings, DEFAULT_MAX_TOWNS};

/// Name-keyed façade over [`Graph`].
///
/// Callers pass plain town and road names; the manager builds `Town` values
/// and forwards to the core. It also remembers where the graph was loaded from.
#[derive(Debug, Clone)]
pub struct TownGraphManager {
    pub(crate) graph: Graph,
    pub(crate) max_towns: usize,
    pub(crate) source: Option<PathBuf>,
    pub(crate) load_time_ms: Option<f64>,
}

impl TownGraphManager {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            max_towns: DEFAULT_MAX_TOWNS,
            source: None,
            load_time_ms: None,
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            max_towns: settings.max_towns,
            ..Self::new()
        }
    }

    /// Read access to the underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn add_town(&mut self, name: &str) -> bool {
        self.graph.add_vertex(Town::new(name))
    }

    pub fn get_town(&self, name: &str) -> Option<&Town> {
        self.graph.get_vertex(&Town::new(name))
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.has_vertex(&Town::new(name))
    }

    /// Join two existing towns. False if either town is missing.
    pub fn add_road(&mut self, town1: &str, town2: &str, weight: u32, road_name: &str) -> bool {
        self.graph
            .add_edge(Town::new(town1), Town::new(town2), weight, road_name)
            .is_some()
    }

    /// Name of the road joining two towns.
    pub fn get_road(&self, town1: &str, town2: &str) -> Option<&str> {
        self.graph
            .get_edge(&Town::new(town1), &Town::new(town2))
            .map(|road| road.name())
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        self.graph.has_edge(&Town::new(town1), &Town::new(town2))
    }

    /// All road names, sorted.
    pub fn all_roads(&self) -> Vec<String> {
        let mut roads: Vec<String> = self
            .graph
            .all_edges()
            .into_iter()
            .map(|road| road.name().to_string())
            .collect();
        roads.sort();
        roads
    }

    /// Remove the road joining two towns, but only if it carries `road_name`.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road_name: &str) -> bool {
        let (source, destination) = (Town::new(town1), Town::new(town2));
        let weight = match self.graph.get_edge(&source, &destination) {
            Some(road) if road.name() == road_name => road.weight(),
            _ => return false,
        };
        self.graph
            .remove_edge(&source, &destination, weight, road_name)
            .is_some()
    }

    pub fn delete_town(&mut self, name: &str) -> bool {
        self.graph.remove_vertex(&Town::new(name))
    }

    /// All town names, sorted.
    pub fn all_towns(&self) -> Vec<String> {
        let mut towns: Vec<String> = self
            .graph
            .all_vertices()
            .into_iter()
            .map(|town| town.name().to_string())
            .collect();
        towns.sort();
        towns
    }

    /// Shortest path as hop descriptions. Empty if the towns are the same or
    /// unconnected; errors if either town is unknown.
    pub fn get_path(&self, town1: &str, town2: &str) -> Result<Vec<String>> {
        Ok(self.graph.shortest_path(&Town::new(town1), &Town::new(town2))?)
    }
}

impl Default for TownGraphManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManagerError;
    use pretty_assertions::assert_eq;

    fn make_manager() -> TownGraphManager {
        let mut m = TownGraphManager::new();
        for i in 1..12 {
            m.add_town(&format!("City_{}", i));
        }
        let roads = [
            (1, 2, 3, "Street_1"),
            (1, 3, 7, "Street_2"),
            (1, 5, 9, "Street_3"),
            (3, 7, 2, "Street_4"),
            (3, 8, 4, "Street_5"),
            (4, 8, 6, "Street_6"),
            (6, 9, 7, "Street_7"),
            (9, 10, 4, "Street_8"),
            (8, 10, 2, "Street_9"),
            (5, 10, 5, "Street_10"),
            (10, 11, 3, "Street_11"),
            (2, 11, 8, "Street_12"),
        ];
        for (a, b, w, name) in roads {
            assert!(m.add_road(&format!("City_{}", a), &format!("City_{}", b), w, name));
        }
        m
    }

    #[test]
    fn test_add_road() {
        let mut m = make_manager();
        let roads = m.all_roads();
        assert_eq!(roads[..4].to_vec(), vec!["Street_1", "Street_10", "Street_11", "Street_12"]);
        assert!(m.add_road("City_4", "City_11", 1, "Street_13"));
        let roads = m.all_roads();
        assert_eq!(
            roads[..5].to_vec(),
            vec!["Street_1", "Street_10", "Street_11", "Street_12", "Street_13"]
        );
    }

    #[test]
    fn test_add_road_unknown_town() {
        let mut m = make_manager();
        assert!(!m.add_road("City_1", "City_99", 1, "Nowhere Rd"));
        assert_eq!(m.all_roads().len(), 12);
    }

    #[test]
    fn test_get_road() {
        let m = make_manager();
        assert_eq!(m.get_road("City_2", "City_11"), Some("Street_12"));
        assert_eq!(m.get_road("City_11", "City_2"), Some("Street_12"));
        assert_eq!(m.get_road("City_3", "City_7"), Some("Street_4"));
        assert_eq!(m.get_road("City_3", "City_5"), None);
    }

    #[test]
    fn test_add_town() {
        let mut m = make_manager();
        assert!(!m.contains_town("City_12"));
        assert!(m.add_town("City_12"));
        assert!(!m.add_town("City_12"));
        assert!(m.contains_town("City_12"));
    }

    #[test]
    fn test_get_town() {
        let m = make_manager();
        assert_eq!(m.get_town("City_7"), Some(&Town::new("City_7")));
        assert_eq!(m.get_town("city_7"), None);
    }

    #[test]
    fn test_contains_road_connection() {
        let m = make_manager();
        assert!(m.contains_road_connection("City_2", "City_11"));
        assert!(!m.contains_road_connection("City_3", "City_5"));
    }

    #[test]
    fn test_all_roads_sorted() {
        let m = make_manager();
        let roads = m.all_roads();
        assert_eq!(roads.len(), 12);
        assert_eq!(roads[0], "Street_1");
        assert_eq!(roads[4], "Street_2");
        assert_eq!(roads[11], "Street_9");
    }

    #[test]
    fn test_delete_road_connection() {
        let mut m = make_manager();
        assert!(m.contains_road_connection("City_2", "City_11"));
        assert!(m.delete_road_connection("City_2", "City_11", "Street_12"));
        assert!(!m.contains_road_connection("City_2", "City_11"));
    }

    #[test]
    fn test_delete_road_connection_wrong_name() {
        let mut m = make_manager();
        assert!(!m.delete_road_connection("City_2", "City_11", "Street_1"));
        assert!(m.contains_road_connection("City_2", "City_11"));
        assert!(!m.delete_road_connection("City_3", "City_5", "Street_12"));
    }

    #[test]
    fn test_delete_town() {
        let mut m = make_manager();
        assert!(m.contains_town("City_2"));
        assert!(m.delete_town("City_2"));
        assert!(!m.contains_town("City_2"));
        assert!(!m.delete_town("City_2"));
        assert!(!m.all_roads().contains(&"Street_12".to_string()));
    }

    #[test]
    fn test_all_towns_sorted() {
        let m = make_manager();
        let towns = m.all_towns();
        assert_eq!(towns[0], "City_1");
        assert_eq!(towns[1], "City_10");
        assert_eq!(towns[2], "City_11");
        assert_eq!(towns[3], "City_2");
        assert_eq!(towns[10], "City_9");
    }

    #[test]
    fn test_get_path() {
        let m = make_manager();
        let path = m.get_path("City_1", "City_11").unwrap();
        assert_eq!(
            path,
            vec![
                "City_1 via Street_1 to City_2 3 mi",
                "City_2 via Street_12 to City_11 8 mi",
            ]
        );
    }

    #[test]
    fn test_get_path_same_town() {
        let m = make_manager();
        assert!(m.get_path("City_4", "City_4").unwrap().is_empty());
    }

    #[test]
    fn test_get_path_unknown_town() {
        let m = make_manager();
        assert!(matches!(m.get_path("City_1", "Gotham"), Err(ManagerError::Graph(_))));
    }

    #[test]
    fn test_with_settings() {
        let settings = Settings {
            max_towns: 5,
            ..Settings::default()
        };
        let m = TownGraphManager::with_settings(&settings);
        assert_eq!(m.max_towns, 5);
        assert!(m.all_towns().is_empty());
    }
}
