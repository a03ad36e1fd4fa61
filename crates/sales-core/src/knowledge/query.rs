//! Read-only queries over the built-in solutions graph.
//!
//! Every function is total: a miss is an empty map, record, list, or string.

use super::store::{
    DanglingReference, SectorSolutions, SolutionGraph, SolutionMatch, SolutionRecord,
};

/// All solutions for `sector` (case-insensitive). Unknown sector → empty map.
pub fn solutions_for_sector(sector: &str) -> &'static SectorSolutions {
    SolutionGraph::builtin().solutions_for_sector(sector)
}

/// Details for one solution. Missing sector or id → empty record.
pub fn solution_details(sector: &str, solution_id: &str) -> &'static SolutionRecord {
    SolutionGraph::builtin().solution_details(sector, solution_id)
}

/// Solutions in any sector whose problem text contains one of `keywords`.
pub fn find_cross_sector_solutions<S: AsRef<str>>(
    keywords: &[S],
) -> Vec<SolutionMatch<'static>> {
    SolutionGraph::builtin().find_cross_sector_solutions(keywords)
}

/// The quick pitch line, or `""`.
pub fn quick_pitch(sector: &str, solution_id: &str) -> &'static str {
    SolutionGraph::builtin().quick_pitch(sector, solution_id)
}

pub fn resolve_cross_sector(record: &SolutionRecord) -> Option<SolutionMatch<'static>> {
    SolutionGraph::builtin().resolve_cross_sector(record)
}

pub fn dangling_cross_references() -> Vec<DanglingReference> {
    SolutionGraph::builtin().dangling_cross_references()
}
