//! town-graph-manager: name-keyed access to a town-graph-core graph.
//!
//! Resolves plain town and road names into core values, imports road files
//! (`roadName,weight;townName1;townName2` per line) and carries the runtime
//! settings used by the `town-graph` CLI.

mod error;
mod load;
mod manager;
mod settings;
mod status;

pub use error::{ImportError, ManagerError, Result};
pub use load::{parse_line, ImportSummary, RoadLine};
pub use manager::TownGraphManager;
pub use settings::{Settings, DEFAULT_LOG_FILTER, DEFAULT_MAX_TOWNS, MAX_TOWNS_LIMIT, SETTINGS_FILE};
pub use status::GraphStatus;
