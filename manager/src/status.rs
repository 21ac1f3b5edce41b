use serde::Serialize;

use crate::manager::TownGraphManager;

/// Snapshot of what the manager currently holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatus {
    pub source: Option<String>,
    pub status: &'static str,
    pub town_count: usize,
    pub road_count: usize,
    pub max_towns: usize,
    pub load_time_ms: Option<f64>,
}

impl TownGraphManager {
    pub fn status(&self) -> GraphStatus {
        let status = match (&self.source, self.graph.town_count()) {
            (Some(_), _) => "loaded",
            (None, 0) => "empty",
            (None, _) => "in_memory",
        };
        GraphStatus {
            source: self.source.as_ref().map(|p| p.display().to_string()),
            status,
            town_count: self.graph.town_count(),
            road_count: self.graph.road_count(),
            max_towns: self.max_towns,
            load_time_ms: self.load_time_ms,
        }
    }
}
