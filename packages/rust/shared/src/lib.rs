//! Shared types, error model, and configuration for LayoutPilot.
//!
//! This crate is the foundation depended on by all other LayoutPilot crates.
//! It provides:
//! - [`LayoutPilotError`], the unified error type
//! - The taxonomy vocabularies and [`BusinessContext`]
//! - Section types and layout catalogs ([`SectionType`], [`Layout`])
//! - Flow metadata ([`FlowContext`] and its tags)
//! - Configuration ([`AppConfig`], [`PlanSettings`], config loading)

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod flow;
pub mod taxonomy;

// Re-export public API at crate root for ergonomic imports.
pub use catalog::{Layout, SectionType};
pub use config::{
    AppConfig, DefaultsConfig, EngineConfig, PlanSettings, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use context::{
    Asset, AssetAvailability, BusinessContext, load_context_from, load_sections_from, parse_context,
    parse_sections,
};
pub use error::{LayoutPilotError, Result};
pub use flow::{
    FlowComplexity, FlowContext, FlowTone, LayoutComplexity, LayoutDensity, LayoutTone,
    NextSection, PreviousSection, SectionPurpose,
};
pub use taxonomy::{
    AwarenessLevel, CopyIntent, CtaStrength, Friction, LandingGoal, MarketCategory,
    MarketSophisticationLevel, PricingCommitment, PricingModel, PricingModifier, ProblemType,
    StartupStage, TargetAudience, ToneProfile,
};
