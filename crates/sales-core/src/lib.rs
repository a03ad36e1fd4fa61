//! sales-core: shared types, goal orchestrator, and the AI solutions knowledge graph.

mod knowledge;
mod orchestrator;
mod shared;

pub use shared::{CoreConfig, Goal, TenantContext};

pub use knowledge::{
    dangling_cross_references, find_cross_sector_solutions, quick_pitch, resolve_cross_sector,
    solution_details, solutions_for_sector, BuiltinSolutions, CrossSector, DanglingReference,
    Impact, KnowledgeSource, OrderedMap, SectorSolutions, SolutionGraph, SolutionMatch,
    SolutionRecord,
};

pub use orchestrator::{
    AgentSkill, Orchestrator, SkillRegistry, CROSS_SECTOR_MATCH, PITCH_COMPOSER, SALES_CALLER,
    SOLUTION_LOOKUP,
};
