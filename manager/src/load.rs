use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ImportError, ManagerError, Result};
use crate::manager::TownGraphManager;

/// Outcome of a road file import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    pub lines_read: usize,
    pub roads_imported: usize,
    pub lines_skipped: usize,
    pub load_time_ms: f64,
}

/// One well-formed road file line: `roadName,weight;townName1;townName2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadLine {
    pub road: String,
    pub weight: u32,
    pub town1: String,
    pub town2: String,
}

/// Split on `sep`, dropping trailing empty fields: `"a;b;"` gives `["a", "b"]`.
fn split_fields(s: &str, sep: char) -> Vec<&str> {
    let mut fields: Vec<&str> = s.split(sep).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse a road file line.
///
/// Returns `Ok(None)` for lines of the wrong shape (not three `;` fields, or
/// a first field that isn't `name,weight`) and for lines with an empty town
/// name; those are skipped. Trailing empty fields don't count toward the
/// shape, so `"Main,3;A;B;"` imports and `"Main,;A;B"` is skipped. A weight
/// that isn't an integer is an error.
pub fn parse_line(line: &str, line_no: usize) -> std::result::Result<Option<RoadLine>, ImportError> {
    let fields = split_fields(line, ';');
    let [road_field, town1, town2] = fields[..] else {
        return Ok(None);
    };

    let road_parts = split_fields(road_field, ',');
    let [road, weight] = road_parts[..] else {
        return Ok(None);
    };

    let (town1, town2) = (town1.trim(), town2.trim());
    if town1.is_empty() || town2.is_empty() {
        return Ok(None);
    }

    let weight = weight.trim();
    let weight: u32 = weight.parse().map_err(|_| ImportError::InvalidWeight {
        line: line_no,
        value: weight.to_string(),
    })?;

    Ok(Some(RoadLine {
        road: road.trim().to_string(),
        weight,
        town1: town1.to_string(),
        town2: town2.to_string(),
    }))
}

impl TownGraphManager {
    /// Import roads from a file, adding any towns they name.
    pub fn populate_town_graph(&mut self, path: &Path) -> Result<ImportSummary> {
        let file = File::open(path)?;
        let summary = self.populate_from_reader(BufReader::new(file))?;
        self.source = Some(path.to_path_buf());
        info!(
            source = %path.display(),
            towns = self.graph.town_count(),
            roads = self.graph.road_count(),
            load_time_ms = summary.load_time_ms,
            "imported road file"
        );
        Ok(summary)
    }

    /// Import roads line by line from any reader.
    ///
    /// The import is all-or-nothing: lines are applied to a staged copy of the
    /// graph, which replaces the live one only if every line parsed and the
    /// result stays within `max_towns`.
    pub fn populate_from_reader<R: BufRead>(&mut self, reader: R) -> Result<ImportSummary> {
        let start = Instant::now();
        let mut staged = self.clone();
        let mut summary = ImportSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            summary.lines_read += 1;

            let Some(parsed) = parse_line(&line, line_no)? else {
                debug!(line = line_no, content = %line, "skipping malformed road line");
                summary.lines_skipped += 1;
                continue;
            };

            staged.add_town(&parsed.town1);
            staged.add_town(&parsed.town2);
            let already_joined = staged.contains_road_connection(&parsed.town1, &parsed.town2);
            if staged.add_road(&parsed.town1, &parsed.town2, parsed.weight, &parsed.road) && !already_joined {
                summary.roads_imported += 1;
            }
        }

        let count = staged.graph.town_count();
        if count > self.max_towns {
            return Err(ManagerError::TooManyTowns {
                count,
                max: self.max_towns,
            });
        }

        summary.load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.graph = staged.graph;
        self.load_time_ms = Some(summary.load_time_ms);
        Ok(summary)
    }
}
