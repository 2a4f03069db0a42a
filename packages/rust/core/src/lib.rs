//! Layout recommendation engine for LayoutPilot.
//!
//! This crate turns a [`BusinessContext`](layoutpilot_shared::BusinessContext)
//! and an ordered list of section ids into a layout per section: per-section
//! rule tables and pickers, flow context generation, layout classification,
//! asset-aware substitution, and the page-level [`LayoutEngine`]. When the
//! caller has no section list, [`build_sections`] derives one.

pub mod classify;
pub mod engine;
pub mod flow;
pub mod orchestrator;
pub mod pickers;
pub mod sections;
pub mod substitution;

pub use classify::{LayoutTags, classify, classify_complexity, classify_density, classify_tone};
pub use engine::{
    Decision, DecisionSource, HardRule, ScoreFactor, ScoreTable, SectionRules, TieBreaker,
    TiePolicy, evaluate,
};
pub use flow::{determine_flow_complexity, determine_flow_tone, generate_flow_context};
pub use orchestrator::{LayoutEngine, LayoutPlan, Resolution, SectionDecision};
pub use pickers::{PickOutcome, PickerRegistry, RulePicker, SectionPicker};
pub use sections::{SECTION_CAP, SectionSequence, build_sections};
pub use substitution::{Substitution, SubstitutionOutcome, substitute_sections};
