//! In-memory solutions graph: sector → solution id → [`SolutionRecord`].
//!
//! The built-in graph is parsed once from the embedded `solutions.json` and is
//! read-only for the lifetime of the process.

use super::ordered::OrderedMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Authored knowledge graph shipped with the crate.
const BUILTIN_SOLUTIONS_JSON: &str = include_str!("solutions.json");

/// Metric name → effect description (e.g. `"wait_times" => "30% reduction"`).
pub type Impact = OrderedMap<String>;

/// Solutions owned by one sector, keyed by lower-case solution id.
pub type SectorSolutions = OrderedMap<SolutionRecord>;

/// Pointer from a solution to an analogous solution in another sector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossSector {
    /// Target reference, usually `<sector>_<solution_id>`. Not validated at load.
    pub similar_to: String,
    /// Why the two solutions are analogous.
    pub connection: String,
}

/// One AI solution offering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub problem: String,
    pub solution: String,
    pub impact: Impact,
    #[serde(default)]
    pub data_sources: Vec<String>,
    pub quick_pitch: String,
    pub cross_sector: CrossSector,
}

impl SolutionRecord {
    /// True for the empty record returned by lookups that found nothing.
    pub fn is_empty(&self) -> bool {
        self.problem.is_empty() && self.quick_pitch.is_empty() && self.impact.is_empty()
    }
}

static EMPTY_SECTOR: SectorSolutions = OrderedMap::new();

static EMPTY_RECORD: SolutionRecord = SolutionRecord {
    problem: String::new(),
    solution: String::new(),
    impact: OrderedMap::new(),
    data_sources: Vec::new(),
    quick_pitch: String::new(),
    cross_sector: CrossSector {
        similar_to: String::new(),
        connection: String::new(),
    },
};

/// A solution located in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolutionMatch<'a> {
    pub sector: &'a str,
    pub solution_id: &'a str,
    pub record: &'a SolutionRecord,
}

/// A `cross_sector.similar_to` value that does not name any solution in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub sector: String,
    pub solution_id: String,
    pub similar_to: String,
}

/// Sector → solutions graph. Built once; exposes no mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionGraph {
    sectors: OrderedMap<SectorSolutions>,
}

static BUILTIN: Lazy<SolutionGraph> = Lazy::new(|| {
    let graph = match SolutionGraph::from_json(BUILTIN_SOLUTIONS_JSON) {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!(
                target: "sales::knowledge",
                error = %e,
                "embedded solutions graph failed to parse"
            );
            SolutionGraph::default()
        }
    };
    tracing::info!(
        target: "sales::knowledge",
        sectors = graph.sector_count(),
        solutions = graph.solution_count(),
        "Solutions graph loaded"
    );
    for dangling in graph.dangling_cross_references() {
        tracing::warn!(
            target: "sales::knowledge",
            sector = %dangling.sector,
            solution = %dangling.solution_id,
            similar_to = %dangling.similar_to,
            "cross-sector reference does not resolve"
        );
    }
    graph
});

impl SolutionGraph {
    /// The process-wide graph built from the embedded data.
    pub fn builtin() -> &'static SolutionGraph {
        &BUILTIN
    }

    /// Parses a graph from JSON shaped `{ sector: { solution_id: record } }`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sectors and their solutions in authored order.
    pub fn sectors(&self) -> impl Iterator<Item = (&str, &SectorSolutions)> {
        self.sectors.iter()
    }

    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.keys().collect()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn solution_count(&self) -> usize {
        self.sectors.values().map(|s| s.len()).sum()
    }

    /// Every solution in the graph, sector by sector.
    pub fn solutions(&self) -> impl Iterator<Item = SolutionMatch<'_>> {
        self.sectors.iter().flat_map(|(sector, solutions)| {
            solutions.iter().map(move |(solution_id, record)| SolutionMatch {
                sector,
                solution_id,
                record,
            })
        })
    }

    /// Solutions for `sector` (case-insensitive). Unknown sectors yield an empty map.
    pub fn solutions_for_sector(&self, sector: &str) -> &SectorSolutions {
        self.sectors
            .get(&sector.to_lowercase())
            .unwrap_or(&EMPTY_SECTOR)
    }

    /// Record for `(sector, solution_id)`, both case-insensitive; empty record when absent.
    pub fn solution_details(&self, sector: &str, solution_id: &str) -> &SolutionRecord {
        self.solutions_for_sector(sector)
            .get(&solution_id.to_lowercase())
            .unwrap_or(&EMPTY_RECORD)
    }

    /// Solutions whose `problem` contains any keyword (case-insensitive substring).
    pub fn find_cross_sector_solutions<S: AsRef<str>>(
        &self,
        keywords: &[S],
    ) -> Vec<SolutionMatch<'_>> {
        let needles: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
        if needles.is_empty() {
            return Vec::new();
        }
        self.solutions()
            .filter(|m| {
                let problem = m.record.problem.to_lowercase();
                needles.iter().any(|n| problem.contains(n.as_str()))
            })
            .collect()
    }

    /// Quick pitch for `(sector, solution_id)`; `""` when absent.
    pub fn quick_pitch(&self, sector: &str, solution_id: &str) -> &str {
        &self.solution_details(sector, solution_id).quick_pitch
    }

    /// Follows `record.cross_sector.similar_to`.
    ///
    /// Tries `<sector>_<solution_id>` against every sector first, then a bare solution id
    /// in any sector. `None` means no cross-sector suggestion is available.
    pub fn resolve_cross_sector(&self, record: &SolutionRecord) -> Option<SolutionMatch<'_>> {
        let target = record.cross_sector.similar_to.to_lowercase();
        if target.is_empty() {
            return None;
        }
        let prefixed = self.sectors.iter().find_map(|(sector, solutions)| {
            let rest = target.strip_prefix(sector)?.strip_prefix('_')?;
            let (solution_id, record) = solutions.iter().find(|(id, _)| *id == rest)?;
            Some(SolutionMatch {
                sector,
                solution_id,
                record,
            })
        });
        prefixed.or_else(|| {
            self.solutions()
                .find(|m| m.solution_id == target && !std::ptr::eq(m.record, record))
        })
    }

    /// All `similar_to` values that [`Self::resolve_cross_sector`] cannot follow.
    pub fn dangling_cross_references(&self) -> Vec<DanglingReference> {
        self.solutions()
            .filter(|m| self.resolve_cross_sector(m.record).is_none())
            .map(|m| DanglingReference {
                sector: m.sector.to_string(),
                solution_id: m.solution_id.to_string(),
                similar_to: m.record.cross_sector.similar_to.clone(),
            })
            .collect()
    }
}
