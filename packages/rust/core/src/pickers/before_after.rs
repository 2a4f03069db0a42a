//! Before/after (transformation) section.
//!
//! Pre-launch products have nothing to screenshot, so they always get a
//! text transformation. Right after a problem section the layout follows the
//! problem's tone: relief after emotional agitation, structure after an
//! analytical one.

use layoutpilot_shared::catalog::BeforeAfterLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, CopyIntent, FlowTone, LandingGoal, LayoutTone,
    MarketCategory, MarketSophisticationLevel as Level, ProblemType, SectionType, StartupStage,
    TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: ASSET_ADJUSTMENTS,
    fallback: L::SideBySideBlocks,
    tie_break: false,
};

/// Choose the before/after layout.
pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

fn after_problem_with_tone(c: &BusinessContext, tone: LayoutTone) -> bool {
    c.previous_is(SectionType::Problem) && c.previous_tone() == Some(tone)
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "pre-launch-vision",
        apply: |c| c.startup_stage.is_pre_launch().then_some(L::TextListTransformation),
    },
    HardRule {
        name: "after-emotional-problem",
        apply: |c| {
            after_problem_with_tone(c, LayoutTone::Emotional).then(|| {
                if c.asset_present(Asset::ProductImages) {
                    L::VisualStoryline
                } else {
                    L::TextListTransformation
                }
            })
        },
    },
    HardRule {
        name: "after-analytical-problem",
        apply: |c| {
            after_problem_with_tone(c, LayoutTone::Analytical).then(|| {
                if c.asset_present(Asset::ProductImages) {
                    L::StatComparison
                } else {
                    L::SideBySideBlocks
                }
            })
        },
    },
    HardRule {
        name: "technical-product-aware",
        apply: |c| {
            (c.awareness_level == AwarenessLevel::ProductAware
                && matches!(
                    c.target_audience,
                    TargetAudience::Builders | TargetAudience::Enterprise
                )
                && matches!(
                    c.market_category,
                    MarketCategory::EngineeringDevelopment | MarketCategory::AiTools
                ))
            .then_some(L::BeforeAfterSlider)
        },
    },
    HardRule {
        name: "quantifiable-business-pain",
        apply: |c| {
            (matches!(
                c.problem_type,
                ProblemType::LostRevenueOrInefficiency | ProblemType::ComplianceOrRisk
            ) && matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            ) && c.sophistication_at_least(3))
            .then_some(L::StatComparison)
        },
    },
    HardRule {
        name: "enterprise-sales-journey",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && matches!(
                    c.landing_page_goals,
                    LandingGoal::Demo | LandingGoal::ContactSales
                )
                && c.sophistication_at_least(4))
            .then_some(L::PersonaJourney)
        },
    },
    HardRule {
        name: "early-awareness-pain",
        apply: |c| {
            (matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            ) && c.copy_intent == CopyIntent::PainLed
                && c.sophistication_at_most(2))
            .then_some(L::TextListTransformation)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Flow
    ScoreFactor {
        name: "after-emotional-problem",
        when: |c| after_problem_with_tone(c, LayoutTone::Emotional),
        awards: &[
            (L::TextListTransformation, 5),
            (L::VisualStoryline, 5),
            (L::StackedTextVisual, 4),
            (L::StatComparison, -3),
        ],
    },
    ScoreFactor {
        name: "after-analytical-problem",
        when: |c| after_problem_with_tone(c, LayoutTone::Analytical),
        awards: &[(L::StatComparison, 5), (L::SideBySideBlocks, 4), (L::SplitCard, 4)],
    },
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[
            (L::TextListTransformation, 4),
            (L::StackedTextVisual, 3),
            (L::VisualStoryline, 3),
            (L::StatComparison, -2),
        ],
    },
    ScoreFactor {
        name: "analytical-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Analytical),
        awards: &[(L::StatComparison, 4), (L::PersonaJourney, 3), (L::SplitCard, 3)],
    },
    ScoreFactor {
        name: "early-in-page",
        when: |c| c.position_at_most(4),
        awards: &[(L::TextListTransformation, 3), (L::SideBySideBlocks, 2)],
    },
    // Awareness
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[
            (L::TextListTransformation, 4),
            (L::StackedTextVisual, 3),
            (L::SplitCard, 3),
            (L::SideBySideBlocks, 2),
        ],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[
            (L::VisualStoryline, 4),
            (L::BeforeAfterSlider, 3),
            (L::PersonaJourney, 3),
            (L::StatComparison, 2),
        ],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[
            (L::BeforeAfterSlider, 4),
            (L::StatComparison, 4),
            (L::PersonaJourney, 3),
            (L::VisualStoryline, 2),
        ],
    },
    // Copy intent
    ScoreFactor {
        name: "pain-led",
        when: |c| c.copy_intent == CopyIntent::PainLed,
        awards: &[
            (L::TextListTransformation, 4),
            (L::SplitCard, 3),
            (L::StackedTextVisual, 3),
            (L::SideBySideBlocks, 2),
        ],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[
            (L::VisualStoryline, 4),
            (L::StatComparison, 3),
            (L::BeforeAfterSlider, 3),
            (L::PersonaJourney, 2),
        ],
    },
    // Audience
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::PersonaJourney, 3), (L::StatComparison, 3), (L::SplitCard, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::BeforeAfterSlider, 3), (L::VisualStoryline, 2), (L::StatComparison, 2)],
    },
    ScoreFactor {
        name: "founders-or-creators",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Founders | TargetAudience::Creators
            )
        },
        awards: &[
            (L::StackedTextVisual, 3),
            (L::TextListTransformation, 2),
            (L::SideBySideBlocks, 2),
        ],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::StatComparison, 3), (L::SplitCard, 2), (L::PersonaJourney, 2)],
    },
    // Sophistication
    ScoreFactor {
        name: "naive-market",
        when: |c| c.sophistication_at_most(2),
        awards: &[
            (L::SideBySideBlocks, 3),
            (L::TextListTransformation, 3),
            (L::StackedTextVisual, 2),
        ],
    },
    ScoreFactor {
        name: "level-3",
        when: |c| c.market_sophistication_level == Level::Level3,
        awards: &[(L::SplitCard, 3), (L::VisualStoryline, 2), (L::BeforeAfterSlider, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::StatComparison, 3), (L::PersonaJourney, 3), (L::BeforeAfterSlider, 2)],
    },
    // Tone
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[
            (L::BeforeAfterSlider, 3),
            (L::VisualStoryline, 2),
            (L::StackedTextVisual, 2),
        ],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::StatComparison, 3), (L::SplitCard, 2), (L::SideBySideBlocks, 2)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[
            (L::TextListTransformation, 3),
            (L::StatComparison, 2),
            (L::PersonaJourney, 2),
        ],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[
            (L::StackedTextVisual, 3),
            (L::SideBySideBlocks, 2),
            (L::TextListTransformation, 2),
        ],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::SplitCard, 3), (L::PersonaJourney, 2), (L::StatComparison, 2)],
    },
    // Problem
    ScoreFactor {
        name: "lost-revenue",
        when: |c| c.problem_type == ProblemType::LostRevenueOrInefficiency,
        awards: &[(L::StatComparison, 2), (L::PersonaJourney, 2)],
    },
    ScoreFactor {
        name: "manual-repetition",
        when: |c| c.problem_type == ProblemType::ManualRepetition,
        awards: &[(L::TextListTransformation, 2), (L::VisualStoryline, 2)],
    },
    ScoreFactor {
        name: "burnout",
        when: |c| c.problem_type == ProblemType::BurnoutOrOverload,
        awards: &[(L::StackedTextVisual, 2), (L::SplitCard, 2)],
    },
    ScoreFactor {
        name: "creative-empowerment",
        when: |c| c.problem_type == ProblemType::CreativeEmpowerment,
        awards: &[(L::BeforeAfterSlider, 2), (L::VisualStoryline, 2)],
    },
    // Category
    ScoreFactor {
        name: "technical-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::AiTools | MarketCategory::EngineeringDevelopment
            )
        },
        awards: &[(L::BeforeAfterSlider, 2), (L::VisualStoryline, 1)],
    },
    ScoreFactor {
        name: "design-category",
        when: |c| c.market_category == MarketCategory::DesignCreative,
        awards: &[(L::BeforeAfterSlider, 2), (L::VisualStoryline, 2)],
    },
    ScoreFactor {
        name: "marketing-category",
        when: |c| c.market_category == MarketCategory::MarketingSales,
        awards: &[(L::StatComparison, 2), (L::PersonaJourney, 1)],
    },
    ScoreFactor {
        name: "productivity-category",
        when: |c| c.market_category == MarketCategory::WorkProductivity,
        awards: &[(L::TextListTransformation, 1), (L::StackedTextVisual, 1)],
    },
    // Stage
    ScoreFactor {
        name: "traction-or-growth",
        when: |c| {
            matches!(
                c.startup_stage,
                StartupStage::Traction | StartupStage::Growth
            )
        },
        awards: &[(L::StatComparison, 2), (L::PersonaJourney, 1)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::PersonaJourney, 2), (L::StatComparison, 1)],
    },
    // Goal
    ScoreFactor {
        name: "try-before-buy",
        when: |c| matches!(c.landing_page_goals, LandingGoal::Demo | LandingGoal::FreeTrial),
        awards: &[(L::BeforeAfterSlider, 1), (L::VisualStoryline, 1)],
    },
    ScoreFactor {
        name: "direct-purchase",
        when: |c| matches!(c.landing_page_goals, LandingGoal::BuyNow | LandingGoal::Subscribe),
        awards: &[(L::StatComparison, 1), (L::PersonaJourney, 1)],
    },
];

const ASSET_ADJUSTMENTS: &[ScoreFactor<L>] = &[ScoreFactor {
    name: "no-product-images",
    when: |c| c.asset_missing(Asset::ProductImages),
    awards: &[
        (L::BeforeAfterSlider, -100),
        (L::VisualStoryline, -100),
        (L::TextListTransformation, 50),
        (L::StatComparison, 30),
    ],
}];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{AssetAvailability, FlowContext, PreviousSection};

    use super::*;

    fn after_problem(tone: LayoutTone) -> FlowContext {
        FlowContext {
            previous_section: Some(PreviousSection {
                tone: Some(tone),
                ..PreviousSection::of(SectionType::Problem)
            }),
            ..Default::default()
        }
    }

    #[test]
    fn pre_launch_is_text_only() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Mvp,
            awareness_level: AwarenessLevel::ProductAware,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::TextListTransformation);
    }

    #[test]
    fn follows_problem_tone() {
        let base = BusinessContext {
            startup_stage: StartupStage::Growth,
            ..Default::default()
        };

        let emotional = base.with_flow(after_problem(LayoutTone::Emotional));
        assert_eq!(pick(&emotional), L::TextListTransformation);
        let with_images = emotional.with_assets(AssetAvailability::all());
        assert_eq!(pick(&with_images), L::VisualStoryline);

        let analytical = base
            .with_flow(after_problem(LayoutTone::Analytical))
            .with_assets(AssetAvailability::all());
        assert_eq!(pick(&analytical), L::StatComparison);
    }

    #[test]
    fn enterprise_journey() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Enterprise,
            landing_page_goals: LandingGoal::ContactSales,
            market_sophistication_level: Level::Level4,
            startup_stage: StartupStage::Scale,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::PersonaJourney);
    }

    #[test]
    fn missing_images_sink_visual_layouts() {
        let ctx = BusinessContext {
            awareness_level: AwarenessLevel::SolutionAware,
            copy_intent: CopyIntent::DesireLed,
            market_category: MarketCategory::DesignCreative,
            startup_stage: StartupStage::Growth,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::VisualStoryline);

        let no_images = ctx.with_assets(AssetAvailability::default());
        let decision = evaluate(&RULES, &no_images, None);
        let scores = decision.scores.expect("scored");
        assert!(scores.get(L::VisualStoryline) < 0);
        assert!(scores.get(L::BeforeAfterSlider) < 0);
        assert_eq!(decision.layout, L::TextListTransformation);
    }
}
