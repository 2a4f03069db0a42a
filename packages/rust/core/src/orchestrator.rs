//! Whole-page layout planning.
//!
//! Walks a page's sections in document order, attaches flow metadata to each
//! one, and resolves a layout through the picker registry. The realized
//! layout of each section is threaded into the next section's flow context.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rand::RngCore;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use layoutpilot_shared::{BusinessContext, FlowContext, PlanSettings, SectionType};

use crate::engine::{DecisionSource, TieBreaker, TiePolicy};
use crate::flow::generate_flow_context;
use crate::pickers::PickerRegistry;
use crate::substitution::{Substitution, substitute_sections};

// ---------------------------------------------------------------------------
// Plan types
// ---------------------------------------------------------------------------

/// How a section's layout was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Resolution {
    /// A registered picker decided.
    Picker { source: DecisionSource },
    /// No picker registered; the section type's default layout.
    StaticFallback,
    /// Unknown section type with a configured layout.
    ConfiguredFallback,
    /// Unknown section type and nothing configured.
    Unresolved,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Picker { source } => write!(f, "picker ({source})"),
            Self::StaticFallback => f.write_str("static fallback"),
            Self::ConfiguredFallback => f.write_str("configured fallback"),
            Self::Unresolved => f.write_str("unresolved"),
        }
    }
}

/// The outcome for one section of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDecision {
    pub section_id: String,
    /// `None` when the id names no known section type.
    pub section_type: Option<SectionType>,
    pub layout: Option<String>,
    pub resolution: Resolution,
    pub flow: FlowContext,
    /// `(layout, score)` in catalog order, when the scoring pass ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<(&'static str, i32)>>,
}

/// Layouts for a whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    /// Section id → layout id. Unresolved sections are absent. Section ids
    /// should be unique per page; a repeated id keeps its first layout, and
    /// every occurrence still has its own entry in `decisions`.
    pub layouts: BTreeMap<String, String>,
    /// One entry per planned section, in document order.
    pub decisions: Vec<SectionDecision>,
    /// Section changes made before planning.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<Substitution>,
}

impl LayoutPlan {
    pub fn layout_for(&self, section_id: &str) -> Option<&str> {
        self.layouts.get(section_id).map(String::as_str)
    }

    /// Ids of sections that received no layout.
    pub fn unresolved(&self) -> Vec<&str> {
        self.decisions
            .iter()
            .filter(|d| d.layout.is_none())
            .map(|d| d.section_id.as_str())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Plans layouts for pages. Holds no per-page state.
pub struct LayoutEngine {
    registry: PickerRegistry,
    settings: PlanSettings,
}

impl LayoutEngine {
    pub fn new(registry: PickerRegistry, settings: PlanSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &PlanSettings {
        &self.settings
    }

    pub fn registry(&self) -> &PickerRegistry {
        &self.registry
    }

    fn tie_policy(&self) -> TiePolicy {
        TiePolicy {
            margin: self.settings.tie_margin,
            threshold: self.settings.tie_viability_threshold,
        }
    }

    /// Choose a layout for every section of a page.
    ///
    /// Without `rng` the plan is fully deterministic.
    #[instrument(skip_all, fields(sections = section_ids.len()))]
    pub fn plan<S: AsRef<str>>(
        &self,
        section_ids: &[S],
        ctx: &BusinessContext,
        mut rng: Option<&mut dyn RngCore>,
    ) -> LayoutPlan {
        let (sections, substitutions) = if self.settings.substitute_missing_assets {
            let outcome = substitute_sections(section_ids, ctx);
            (outcome.sections, outcome.log)
        } else {
            let sections = section_ids.iter().map(|s| s.as_ref().to_string()).collect();
            (sections, Vec::new())
        };

        let mut plan = LayoutPlan {
            substitutions,
            ..Default::default()
        };
        let mut previous_layout: Option<String> = None;

        for (index, section_id) in sections.iter().enumerate() {
            let threaded = if self.settings.thread_previous_layout {
                previous_layout.as_deref()
            } else {
                None
            };
            let flow = generate_flow_context(&sections, index, ctx, threaded);
            let section_ctx = ctx.with_flow(flow);

            let decision = self.decide(section_id, &section_ctx, rng.as_deref_mut());
            debug!(
                section = %decision.section_id,
                layout = decision.layout.as_deref().unwrap_or("-"),
                resolution = %decision.resolution,
                "section planned"
            );

            if let Some(layout) = &decision.layout {
                match plan.layouts.entry(section_id.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(layout.clone());
                    }
                    Entry::Occupied(kept) => warn!(
                        section = %section_id,
                        kept = %kept.get(),
                        ignored = %layout,
                        "duplicate section id, keeping first layout"
                    ),
                }
            }
            previous_layout = decision.layout.clone();
            plan.decisions.push(decision);
        }

        info!(
            planned = plan.layouts.len(),
            unresolved = plan.unresolved().len(),
            "layout plan assembled"
        );
        plan
    }

    /// Resolve one section whose flow context is already attached.
    fn decide<'r>(
        &self,
        section_id: &str,
        ctx: &BusinessContext,
        rng: Option<&mut (dyn RngCore + 'r)>,
    ) -> SectionDecision {
        let section_type = SectionType::from_id(section_id);
        let mut decision = SectionDecision {
            section_id: section_id.to_string(),
            section_type,
            layout: None,
            resolution: Resolution::Unresolved,
            flow: ctx.flow.clone(),
            scores: None,
        };

        match section_type {
            Some(section) => match self.registry.get(section) {
                Some(picker) => {
                    let outcome = match rng {
                        Some(rng) if self.settings.randomize_hero_ties => {
                            let mut breaker = TieBreaker::new(self.tie_policy(), rng);
                            picker.pick(ctx, Some(&mut breaker))
                        }
                        _ => picker.pick(ctx, None),
                    };
                    decision.layout = Some(outcome.layout.to_string());
                    decision.resolution = Resolution::Picker {
                        source: outcome.source,
                    };
                    decision.scores = outcome.scores;
                }
                None => {
                    decision.layout = Some(section.default_layout().to_string());
                    decision.resolution = Resolution::StaticFallback;
                }
            },
            None => {
                let configured = SectionType::type_name_of(section_id)
                    .and_then(|name| self.settings.fallbacks.get(name))
                    .or_else(|| self.settings.fallbacks.get(section_id));
                match configured {
                    Some(layout) => {
                        decision.layout = Some(layout.clone());
                        decision.resolution = Resolution::ConfiguredFallback;
                    }
                    None => warn!(section = section_id, "unknown section type, no layout"),
                }
            }
        }
        decision
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(PickerRegistry::builtin(), PlanSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use layoutpilot_shared::catalog::HeroLayout;
    use layoutpilot_shared::{
        AssetAvailability, AwarenessLevel, FlowComplexity, LandingGoal, Layout,
        MarketSophisticationLevel, StartupStage, TargetAudience, load_context_from,
    };

    use super::*;
    use crate::sections::build_sections;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/json")
            .join(name)
    }

    fn fixture_sections() -> Vec<String> {
        let raw = std::fs::read_to_string(fixture("sections.fixture.json")).expect("read sections");
        serde_json::from_str(&raw).expect("parse sections")
    }

    #[test]
    fn plans_every_fixture_section() {
        let ctx = load_context_from(&fixture("context.fixture.json")).expect("load context");
        let sections = fixture_sections();

        let plan = LayoutEngine::default().plan(&sections, &ctx, None);

        assert_eq!(plan.layouts.len(), sections.len());
        assert!(plan.unresolved().is_empty());
        assert!(plan.substitutions.is_empty());
        for (decision, id) in plan.decisions.iter().zip(&sections) {
            assert_eq!(&decision.section_id, id);
            let section = decision.section_type.expect("known section");
            let layout = decision.layout.as_deref().expect("layout");
            assert!(section.has_layout(layout), "{layout} not in {section} catalog");
            assert!(matches!(decision.resolution, Resolution::Picker { .. }));
        }
    }

    #[test]
    fn threads_previous_layout_forward() {
        let ctx = load_context_from(&fixture("context.fixture.json")).expect("load context");
        let sections = fixture_sections();

        let plan = LayoutEngine::default().plan(&sections, &ctx, None);
        for pair in plan.decisions.windows(2) {
            let previous = pair[1].flow.previous_section.as_ref().expect("previous");
            assert_eq!(previous.layout, pair[0].layout);
            assert!(previous.density.is_some());
        }

        let settings = PlanSettings {
            thread_previous_layout: false,
            ..Default::default()
        };
        let plan = LayoutEngine::new(PickerRegistry::builtin(), settings).plan(&sections, &ctx, None);
        let previous = plan.decisions[1].flow.previous_section.as_ref().expect("previous");
        assert_eq!(previous.section_type, SectionType::Header);
        assert_eq!(previous.layout, None);
    }

    #[test]
    fn empty_registry_uses_static_defaults() {
        let engine = LayoutEngine::new(PickerRegistry::empty(), PlanSettings::default());
        let plan = engine.plan(&["hero-1", "pricing-2"], &BusinessContext::default(), None);

        assert_eq!(plan.layout_for("hero-1"), Some(SectionType::Hero.default_layout()));
        assert_eq!(plan.layout_for("pricing-2"), Some(SectionType::Pricing.default_layout()));
        assert!(
            plan.decisions
                .iter()
                .all(|d| d.resolution == Resolution::StaticFallback)
        );
    }

    #[test]
    fn unknown_section_types() {
        let ids = ["hero", "announcement-7", "cta"];
        let plan = LayoutEngine::default().plan(&ids, &BusinessContext::default(), None);
        assert_eq!(plan.unresolved(), vec!["announcement-7"]);
        assert_eq!(plan.layout_for("announcement-7"), None);
        assert_eq!(plan.decisions[1].section_type, None);
        assert_eq!(plan.decisions[1].resolution, Resolution::Unresolved);
        assert_eq!(plan.layouts.len(), 2);

        let mut settings = PlanSettings::default();
        settings
            .fallbacks
            .insert("announcement".into(), "TopBanner".into());
        let engine = LayoutEngine::new(PickerRegistry::builtin(), settings);
        let plan = engine.plan(&ids, &BusinessContext::default(), None);
        assert_eq!(plan.layout_for("announcement-7"), Some("TopBanner"));
        assert_eq!(plan.decisions[1].resolution, Resolution::ConfiguredFallback);
        // The next section sees the configured layout as its predecessor.
        let previous = plan.decisions[2].flow.previous_section.as_ref().expect("previous");
        assert_eq!(previous.layout.as_deref(), Some("TopBanner"));
    }

    #[test]
    fn deterministic_without_rng_and_with_same_seed() {
        let ctx = load_context_from(&fixture("enterprise.fixture.json")).expect("load context");
        let sections = fixture_sections();
        let engine = LayoutEngine::default();

        let first = engine.plan(&sections, &ctx, None);
        let second = engine.plan(&sections, &ctx, None);
        assert_eq!(first, second);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = engine.plan(&sections, &ctx, Some(&mut rng_a));
        let b = engine.plan(&sections, &ctx, Some(&mut rng_b));
        assert_eq!(a.layouts, b.layouts);
    }

    #[test]
    fn short_page_is_simple() {
        let ids = ["hero", "features", "testimonials", "pricing", "cta"];
        let ctx = BusinessContext {
            market_sophistication_level: MarketSophisticationLevel::Level5,
            target_audience: TargetAudience::Enterprise,
            ..Default::default()
        };
        let plan = LayoutEngine::default().plan(&ids, &ctx, None);
        assert!(
            plan.decisions
                .iter()
                .all(|d| d.flow.flow_complexity == Some(FlowComplexity::Simple))
        );
        assert_eq!(plan.decisions[4].flow.total_sections_in_flow, Some(5));
    }

    #[test]
    fn pre_launch_unaware_hero_is_center_stacked() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Mvp,
            awareness_level: AwarenessLevel::Unaware,
            ..Default::default()
        };
        let plan = LayoutEngine::default().plan(&["hero", "cta"], &ctx, None);
        assert_eq!(plan.layout_for("hero"), Some(HeroLayout::CenterStacked.as_str()));
    }

    #[test]
    fn substitution_runs_before_planning_when_enabled() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Mvp,
            landing_page_goals: LandingGoal::Waitlist,
            ..Default::default()
        }
        .with_assets(AssetAvailability {
            testimonials: false,
            ..AssetAvailability::all()
        });
        let ids = ["hero", "testimonials-3", "cta"];

        let plan = LayoutEngine::default().plan(&ids, &ctx, None);
        assert!(plan.layout_for("testimonials-3").is_some());

        let settings = PlanSettings {
            substitute_missing_assets: true,
            ..Default::default()
        };
        let plan = LayoutEngine::new(PickerRegistry::builtin(), settings).plan(&ids, &ctx, None);
        assert_eq!(plan.layout_for("testimonials-3"), None);
        assert!(plan.layout_for("founderNote").is_some());
        assert_eq!(plan.substitutions.len(), 1);
        assert_eq!(plan.decisions[1].section_type, Some(SectionType::FounderNote));
    }

    #[test]
    fn repeated_section_id_keeps_first_layout() {
        let ids = ["hero", "cta", "features", "cta"];
        let ctx = load_context_from(&fixture("context.fixture.json")).expect("load context");
        let plan = LayoutEngine::default().plan(&ids, &ctx, None);

        assert_eq!(plan.decisions.len(), 4);
        assert_eq!(plan.layouts.len(), 3);
        assert_eq!(plan.layout_for("cta"), plan.decisions[1].layout.as_deref());
        assert!(plan.decisions[3].layout.is_some());
        let first = plan.layout_for("cta").expect("cta layout");
        assert!(SectionType::Cta.has_layout(first));
    }

    #[test]
    fn derived_section_list_plans_cleanly() {
        let ctx = load_context_from(&fixture("context.fixture.json")).expect("load context");
        let sequence = build_sections(&ctx);
        let ids = sequence.ids();

        let plan = LayoutEngine::default().plan(&ids, &ctx, None);
        assert!(plan.unresolved().is_empty());
        assert_eq!(plan.layouts.len(), ids.len());
        assert_eq!(plan.decisions.first().map(|d| d.section_id.as_str()), Some("header"));
        assert_eq!(plan.decisions.last().map(|d| d.section_id.as_str()), Some("footer"));
    }
}
