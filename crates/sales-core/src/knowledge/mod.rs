//! AI solutions knowledge graph.
//!
//! ## Layout
//!
//! | Level    | Key                         | Value                         |
//! |----------|-----------------------------|-------------------------------|
//! | Sector   | `healthcare`, `finance`, …  | [`SectorSolutions`]           |
//! | Solution | `fraud_detection`, …        | [`SolutionRecord`]            |
//! | Impact   | `loss_reduction`, …         | effect text (`35% reduction`) |
//!
//! Keys are lower-case, underscore-delimited tokens. Lookups lower-case caller input.
//! The graph is built once on first access and never mutated.

mod ordered;
mod query;
mod store;

pub use ordered::OrderedMap;
pub use query::{
    dangling_cross_references, find_cross_sector_solutions, quick_pitch, resolve_cross_sector,
    solution_details, solutions_for_sector,
};
pub use store::{
    CrossSector, DanglingReference, Impact, SectorSolutions, SolutionGraph, SolutionMatch,
    SolutionRecord,
};

/// Common trait for anything that answers solution lookups (the built-in graph, test fixtures).
pub trait KnowledgeSource: Send + Sync {
    /// Human-readable name for this knowledge source.
    fn name(&self) -> &str;

    /// The graph backing this source.
    fn graph(&self) -> &SolutionGraph;
}

/// Knowledge source over [`SolutionGraph::builtin`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSolutions;

impl KnowledgeSource for BuiltinSolutions {
    fn name(&self) -> &str {
        "builtin"
    }

    fn graph(&self) -> &SolutionGraph {
        SolutionGraph::builtin()
    }
}

impl KnowledgeSource for SolutionGraph {
    fn name(&self) -> &str {
        "custom"
    }

    fn graph(&self) -> &SolutionGraph {
        self
    }
}
