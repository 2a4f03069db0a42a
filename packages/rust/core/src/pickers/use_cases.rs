//! Use cases section.

use layoutpilot_shared::catalog::UseCasesLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, FlowComplexity, MarketCategory, PricingModel, TargetAudience,
    ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::PersonaGrid,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "enterprise-roles",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise && c.sophistication_at_least(4))
                .then_some(L::RoleBenefitMatrix)
        },
    },
    HardRule {
        name: "vertical-saas",
        apply: |c| (c.market_category == MarketCategory::IndustrySpecific).then_some(L::IndustryTiles),
    },
    HardRule {
        name: "early-community",
        apply: |c| {
            (matches!(
                c.target_audience,
                TargetAudience::Creators | TargetAudience::Community
            ) && c.startup_stage.is_pre_launch())
            .then_some(L::CarouselAvatars)
        },
    },
    HardRule {
        name: "segmented-businesses",
        apply: |c| {
            (c.target_audience == TargetAudience::Businesses
                && matches!(c.pricing_model, PricingModel::PerSeat | PricingModel::Tiered)
                && c.sophistication_at_least(3))
            .then_some(L::SegmentSplitBlocks)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Audience: primary.
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::RoleBenefitMatrix, 5), (L::TabbedUseCases, 3)],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::SegmentSplitBlocks, 4), (L::IndustryTiles, 3)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::ScenarioCards, 4), (L::TabbedUseCases, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::TabbedUseCases, 4), (L::ScenarioCards, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::PersonaGrid, 4), (L::ScenarioCards, 3)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::CarouselAvatars, 4), (L::PersonaGrid, 3)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::CarouselAvatars, 4)],
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
        awards: &[(L::ScenarioCards, 4), (L::PersonaGrid, 3)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::PersonaGrid, 3), (L::TabbedUseCases, 3)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::RoleBenefitMatrix, 3), (L::TabbedUseCases, 3)],
    },
    // Sophistication
    ScoreFactor {
        name: "naive-market",
        when: |c| c.sophistication_at_most(2),
        awards: &[(L::PersonaGrid, 3)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::RoleBenefitMatrix, 3), (L::SegmentSplitBlocks, 2)],
    },
    // Category
    ScoreFactor {
        name: "marketing-category",
        when: |c| c.market_category == MarketCategory::MarketingSales,
        awards: &[(L::ScenarioCards, 2)],
    },
    ScoreFactor {
        name: "hr-category",
        when: |c| c.market_category == MarketCategory::HrPeopleOps,
        awards: &[(L::RoleBenefitMatrix, 2)],
    },
    ScoreFactor {
        name: "analytics-category",
        when: |c| c.market_category == MarketCategory::DataAnalytics,
        awards: &[(L::TabbedUseCases, 2)],
    },
    ScoreFactor {
        name: "no-code-category",
        when: |c| c.market_category == MarketCategory::NoCodeLowCode,
        awards: &[(L::ScenarioCards, 2), (L::TabbedUseCases, 1)],
    },
    // Tone
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::PersonaGrid, 2), (L::CarouselAvatars, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::TabbedUseCases, 2)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::CarouselAvatars, 2)],
    },
    // Pricing
    ScoreFactor {
        name: "per-seat",
        when: |c| c.pricing_model == PricingModel::PerSeat,
        awards: &[(L::RoleBenefitMatrix, 2)],
    },
    ScoreFactor {
        name: "tiered",
        when: |c| c.pricing_model == PricingModel::Tiered,
        awards: &[(L::SegmentSplitBlocks, 2)],
    },
    // Flow
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::PersonaGrid, 2), (L::ScenarioCards, 1)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::TabbedUseCases, 2), (L::RoleBenefitMatrix, 2)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{MarketSophisticationLevel, StartupStage};

    use super::*;

    #[test]
    fn industry_specific_gets_tiles() {
        let ctx = BusinessContext {
            market_category: MarketCategory::IndustrySpecific,
            target_audience: TargetAudience::Founders,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::IndustryTiles);
    }

    #[test]
    fn early_creators_get_avatars() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Creators,
            startup_stage: StartupStage::Mvp,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::CarouselAvatars);
    }

    #[test]
    fn unaware_marketers_get_scenarios() {
        // scenarios 4 + 4 + 2 = 10, persona grid 3.
        let ctx = BusinessContext {
            target_audience: TargetAudience::Marketers,
            awareness_level: AwarenessLevel::Unaware,
            market_category: MarketCategory::MarketingSales,
            market_sophistication_level: MarketSophisticationLevel::Level3,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::ScenarioCards);
    }
}
