use layoutpilot_shared::catalog::UniqueMechanismLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, CopyIntent, FlowTone, MarketCategory,
    MarketSophisticationLevel as Level, SectionType, StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::StackedHighlights,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

fn technical_category(c: &BusinessContext) -> bool {
    matches!(
        c.market_category,
        MarketCategory::EngineeringDevelopment | MarketCategory::AiTools
    )
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "technical-builders",
        apply: |c| {
            (c.target_audience == TargetAudience::Builders && technical_category(c))
                .then_some(L::TechnicalCards)
        },
    },
    HardRule {
        name: "saturated-b2b",
        apply: |c| {
            (c.sophistication_at_least(5)
                && matches!(
                    c.target_audience,
                    TargetAudience::Enterprise | TargetAudience::Businesses
                ))
            .then_some(L::ComparisonTable)
        },
    },
    HardRule {
        name: "proprietary-ai",
        apply: |c| {
            (c.startup_stage == StartupStage::Scale
                && c.market_category == MarketCategory::AiTools
                && c.sophistication_at_least(4))
            .then_some(L::PatentStrip)
        },
    },
    HardRule {
        name: "simple-story",
        apply: |c| {
            (c.startup_stage.is_pre_launch() && c.sophistication_at_most(2))
                .then_some(L::PillarIcons)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "naive-market",
        when: |c| c.sophistication_at_most(2),
        awards: &[(L::PillarIcons, 4), (L::StackedHighlights, 3)],
    },
    ScoreFactor {
        name: "level-3",
        when: |c| c.market_sophistication_level == Level::Level3,
        awards: &[(L::ExplainerWithTags, 4), (L::VisualFlywheel, 3)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::ComparisonTable, 4), (L::IllustratedModel, 3), (L::PatentStrip, 2)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::StackedHighlights, 4), (L::PillarIcons, 2)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::ExplainerWithTags, 3), (L::ComparisonTable, 3)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::TechnicalCards, 3), (L::IllustratedModel, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::TechnicalCards, 4)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::VisualFlywheel, 3), (L::StackedHighlights, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::IllustratedModel, 3)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::VisualFlywheel, 3), (L::ExplainerWithTags, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::ComparisonTable, 3), (L::PatentStrip, 2)],
    },
    ScoreFactor {
        name: "technical-category",
        when: technical_category,
        awards: &[(L::TechnicalCards, 3), (L::ExplainerWithTags, 1)],
    },
    ScoreFactor {
        name: "design-category",
        when: |c| c.market_category == MarketCategory::DesignCreative,
        awards: &[(L::IllustratedModel, 3)],
    },
    ScoreFactor {
        name: "growth-category",
        when: |c| c.market_category == MarketCategory::MarketingSales,
        awards: &[(L::VisualFlywheel, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::TechnicalCards, 2), (L::ExplainerWithTags, 2)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::ComparisonTable, 2), (L::PatentStrip, 1)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::IllustratedModel, 2), (L::PillarIcons, 1)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::PatentStrip, 2)],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[(L::VisualFlywheel, 2)],
    },
    ScoreFactor {
        name: "analytical-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Analytical),
        awards: &[(L::ExplainerWithTags, 2), (L::TechnicalCards, 1)],
    },
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[(L::IllustratedModel, 2)],
    },
    ScoreFactor {
        name: "comparison-follows",
        when: |c| c.next_is(SectionType::ComparisonTable),
        awards: &[(L::ComparisonTable, -5)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{MarketSophisticationLevel, NextSection, SectionPurpose};

    use super::*;

    #[test]
    fn technical_builders_get_cards() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Builders,
            market_category: MarketCategory::AiTools,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::TechnicalCards);
    }

    #[test]
    fn skips_table_when_comparison_follows() {
        // table 4 + 3 = 7. With the penalty it drops to 2, leaving explainer
        // and illustrated model tied at 3; the explainer is declared first.
        let ctx = BusinessContext {
            market_sophistication_level: MarketSophisticationLevel::Level4,
            awareness_level: AwarenessLevel::SolutionAware,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::ComparisonTable);

        let mut flow = ctx.flow.clone();
        flow.next_section = Some(NextSection {
            section_type: SectionType::ComparisonTable,
            purpose: Some(SectionPurpose::of(SectionType::ComparisonTable)),
        });
        let followed = ctx.with_flow(flow);
        assert_eq!(pick(&followed), L::ExplainerWithTags);
    }
}
