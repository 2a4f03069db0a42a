//! Section pickers: one rule table per section type.
//!
//! Each module exports a `RULES` table and a typed `pick` function. The
//! [`SectionPicker`] trait erases the layout type so the orchestrator can
//! hold every picker in one [`PickerRegistry`].

pub mod before_after;
pub mod close_section;
pub mod comparison_table;
pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod founder_note;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod integrations;
pub mod objection_handling;
pub mod pricing;
pub mod problem;
pub mod results;
pub mod security;
pub mod social_proof;
pub mod testimonials;
pub mod unique_mechanism;
pub mod use_cases;

use serde::Serialize;

use layoutpilot_shared::{BusinessContext, Layout, SectionType};

use crate::engine::{DecisionSource, SectionRules, TieBreaker, evaluate};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A type-erased picker decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickOutcome {
    pub section: SectionType,
    pub layout: &'static str,
    pub source: DecisionSource,
    /// `(layout, score)` in catalog order, when the scoring pass ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<(&'static str, i32)>>,
}

impl PickOutcome {
    /// Scores sorted by descending score, declaration order on ties.
    pub fn ranked_scores(&self) -> Vec<(&'static str, i32)> {
        let mut ranked = self.scores.clone().unwrap_or_default();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Chooses a layout for one section type.
pub trait SectionPicker: Send + Sync {
    /// The section type this picker handles.
    fn section_type(&self) -> SectionType;

    /// Choose a layout. Deterministic when `tie_breaker` is `None`.
    fn pick(&self, ctx: &BusinessContext, tie_breaker: Option<&mut TieBreaker<'_>>)
    -> PickOutcome;
}

/// Adapts a static rule table to [`SectionPicker`].
pub struct RulePicker<L: Layout> {
    rules: &'static SectionRules<L>,
}

impl<L: Layout> RulePicker<L> {
    pub fn new(rules: &'static SectionRules<L>) -> Self {
        Self { rules }
    }
}

impl<L: Layout> SectionPicker for RulePicker<L> {
    fn section_type(&self) -> SectionType {
        L::SECTION
    }

    fn pick(
        &self,
        ctx: &BusinessContext,
        tie_breaker: Option<&mut TieBreaker<'_>>,
    ) -> PickOutcome {
        let decision = evaluate(self.rules, ctx, tie_breaker);
        PickOutcome {
            section: L::SECTION,
            layout: decision.layout.as_str(),
            source: decision.source,
            scores: decision.scores.map(|scores| scores.to_ids()),
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Holds at most one picker per section type.
pub struct PickerRegistry {
    pickers: Vec<Box<dyn SectionPicker>>,
}

impl PickerRegistry {
    /// A registry with no pickers; every section falls back to its default.
    pub fn empty() -> Self {
        Self {
            pickers: Vec::new(),
        }
    }

    /// A registry with the built-in picker for every section type.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(RulePicker::new(&header::RULES));
        registry.register(RulePicker::new(&hero::RULES));
        registry.register(RulePicker::new(&problem::RULES));
        registry.register(RulePicker::new(&before_after::RULES));
        registry.register(RulePicker::new(&use_cases::RULES));
        registry.register(RulePicker::new(&features::RULES));
        registry.register(RulePicker::new(&unique_mechanism::RULES));
        registry.register(RulePicker::new(&how_it_works::RULES));
        registry.register(RulePicker::new(&results::RULES));
        registry.register(RulePicker::new(&testimonials::RULES));
        registry.register(RulePicker::new(&social_proof::RULES));
        registry.register(RulePicker::new(&comparison_table::RULES));
        registry.register(RulePicker::new(&objection_handling::RULES));
        registry.register(RulePicker::new(&integrations::RULES));
        registry.register(RulePicker::new(&security::RULES));
        registry.register(RulePicker::new(&pricing::RULES));
        registry.register(RulePicker::new(&founder_note::RULES));
        registry.register(RulePicker::new(&faq::RULES));
        registry.register(RulePicker::new(&cta::RULES));
        registry.register(RulePicker::new(&close_section::RULES));
        registry.register(RulePicker::new(&footer::RULES));
        registry
    }

    /// Add a picker, replacing any picker already registered for its type.
    pub fn register(&mut self, picker: impl SectionPicker + 'static) {
        let section = picker.section_type();
        self.pickers.retain(|existing| existing.section_type() != section);
        self.pickers.push(Box::new(picker));
    }

    pub fn get(&self, section: SectionType) -> Option<&dyn SectionPicker> {
        self.pickers
            .iter()
            .find(|picker| picker.section_type() == section)
            .map(|picker| picker.as_ref())
    }

    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }
}

impl Default for PickerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use layoutpilot_shared::catalog::BeforeAfterLayout;
    use layoutpilot_shared::{
        AssetAvailability, AwarenessLevel, CopyIntent, FlowContext, FlowTone, LandingGoal,
        MarketCategory, MarketSophisticationLevel, PreviousSection, PricingModel, ProblemType,
        StartupStage, TargetAudience, ToneProfile,
    };

    use super::*;

    /// A broad sample of the taxonomy product, with secondary fields cycled.
    fn sweep() -> Vec<BusinessContext> {
        let mut contexts = Vec::new();
        let mut i = 0usize;
        for awareness in AwarenessLevel::VALUES {
            for audience in TargetAudience::VALUES {
                for stage in StartupStage::VALUES {
                    for level in MarketSophisticationLevel::VALUES {
                        let pick = |values: &[&str]| values[i % values.len()].to_string();
                        contexts.push(BusinessContext {
                            awareness_level: AwarenessLevel::from(*awareness),
                            target_audience: TargetAudience::from(*audience),
                            startup_stage: StartupStage::from(*stage),
                            market_sophistication_level: MarketSophisticationLevel::from(*level),
                            tone_profile: ToneProfile::from(pick(ToneProfile::VALUES)),
                            copy_intent: CopyIntent::from(pick(CopyIntent::VALUES)),
                            problem_type: ProblemType::from(pick(ProblemType::VALUES)),
                            market_category: MarketCategory::from(pick(MarketCategory::VALUES)),
                            landing_page_goals: LandingGoal::from(pick(LandingGoal::VALUES)),
                            pricing_model: PricingModel::from(pick(PricingModel::VALUES)),
                            asset_availability: (i % 3 == 0).then(AssetAvailability::default),
                            flow: if i % 2 == 0 {
                                FlowContext {
                                    position_in_flow: Some(i % 9 + 1),
                                    previous_section: Some(PreviousSection::of(
                                        SectionType::ALL[i % SectionType::ALL.len()],
                                    )),
                                    flow_tone: Some(FlowTone::Emotional),
                                    ..Default::default()
                                }
                            } else {
                                FlowContext::default()
                            },
                            ..Default::default()
                        });
                        i += 1;
                    }
                }
            }
        }
        contexts
    }

    #[test]
    fn builtin_registry_covers_every_section() {
        let registry = PickerRegistry::builtin();
        assert_eq!(registry.len(), SectionType::ALL.len());
        for section in SectionType::ALL {
            let picker = registry.get(*section).expect("picker registered");
            assert_eq!(picker.section_type(), *section);
        }
    }

    #[test]
    fn register_replaces_existing_picker() {
        let mut registry = PickerRegistry::empty();
        assert!(registry.is_empty());
        registry.register(RulePicker::new(&hero::RULES));
        registry.register(RulePicker::new(&hero::RULES));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(SectionType::Faq).is_none());
    }

    #[test]
    fn pickers_are_total_and_deterministic() {
        let registry = PickerRegistry::builtin();
        for ctx in sweep() {
            for section in SectionType::ALL {
                let picker = registry.get(*section).expect("picker registered");
                let first = picker.pick(&ctx, None);
                assert!(
                    section.has_layout(first.layout),
                    "{section} picked {} outside its catalog",
                    first.layout
                );
                assert_eq!(first, picker.pick(&ctx, None), "{section} is not deterministic");
            }
        }
    }

    #[test]
    fn out_of_taxonomy_context_falls_back_everywhere() {
        let registry = PickerRegistry::builtin();
        let ctx = BusinessContext {
            awareness_level: AwarenessLevel::from("curious"),
            target_audience: TargetAudience::from("aliens"),
            ..Default::default()
        };
        for section in SectionType::ALL {
            let outcome = registry.get(*section).expect("picker").pick(&ctx, None);
            assert_eq!(outcome.source, DecisionSource::Fallback, "{section}");
            assert_eq!(outcome.layout, section.default_layout(), "{section}");
        }

        // Missing media only reweighs hero, testimonials and beforeAfter.
        // Hero and testimonials are pushed onto their default; beforeAfter
        // without product images prefers the text-only transformation.
        let bare = ctx.with_assets(AssetAvailability::default());
        for section in SectionType::ALL {
            let outcome = registry.get(*section).expect("picker").pick(&bare, None);
            let expected = match section {
                SectionType::BeforeAfter => BeforeAfterLayout::TextListTransformation.as_str(),
                other => other.default_layout(),
            };
            assert_eq!(outcome.layout, expected, "{section} with no assets");
        }
    }

    #[test]
    fn scores_are_sums_of_matched_awards() {
        // Without hard rules firing, each score is exactly the sum of the
        // awards of the factors whose predicate holds.
        fn check<L: Layout>(rules: &SectionRules<L>, ctx: &BusinessContext) {
            if rules.hard_rules.iter().any(|rule| (rule.apply)(ctx).is_some()) {
                return;
            }
            let decision = evaluate(rules, ctx, None);
            let scores = decision.scores.expect("scoring pass ran");
            for layout in L::ALL {
                let expected: i32 = rules
                    .factors
                    .iter()
                    .chain(rules.asset_adjustments)
                    .filter(|factor| (factor.when)(ctx))
                    .flat_map(|factor| factor.awards.iter())
                    .filter(|(awarded, _)| awarded == layout)
                    .map(|(_, weight)| weight)
                    .sum();
                assert_eq!(scores.get(*layout), expected, "{}", layout.as_str());
            }
        }

        for ctx in sweep().iter().step_by(7) {
            check(&hero::RULES, ctx);
            check(&before_after::RULES, ctx);
            check(&testimonials::RULES, ctx);
            check(&pricing::RULES, ctx);
            check(&close_section::RULES, ctx);
        }
    }

    #[test]
    fn ranked_scores_order() {
        let outcome = PickOutcome {
            section: SectionType::Hero,
            layout: "centerStacked",
            source: DecisionSource::Scored,
            scores: Some(vec![("a", 1), ("b", 3), ("c", 3)]),
        };
        assert_eq!(outcome.ranked_scores(), vec![("b", 3), ("c", 3), ("a", 1)]);
    }
}
