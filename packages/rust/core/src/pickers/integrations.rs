//! Integrations section.

use layoutpilot_shared::catalog::IntegrationsLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, FlowComplexity, MarketCategory, ProblemType, StartupStage,
    TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::LogoGrid,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "no-code-automation",
        apply: |c| {
            (c.market_category == MarketCategory::NoCodeLowCode
                && matches!(
                    c.problem_type,
                    ProblemType::TimeFreedomOrAutomation | ProblemType::ManualRepetition
                ))
            .then_some(L::ZapierLikeBuilderPreview)
        },
    },
    HardRule {
        name: "enterprise-stack",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise && c.sophistication_at_least(4))
                .then_some(L::InteractiveStackDiagram)
        },
    },
    HardRule {
        name: "add-on-product",
        apply: |c| {
            (c.market_category == MarketCategory::AddOnsIntegrations)
                .then_some(L::TabbyIntegrationCards)
        },
    },
    HardRule {
        name: "pre-launch",
        apply: |c| c.startup_stage.is_pre_launch().then_some(L::LogoGrid),
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::CategoryAccordion, 4), (L::InteractiveStackDiagram, 3)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::InteractiveStackDiagram, 3), (L::CategoryAccordion, 3)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::UseCaseTiles, 4), (L::LogoWithQuoteUse, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::BadgeCarousel, 3), (L::LogoGrid, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::LogoGrid, 3), (L::UseCaseTiles, 2)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::BadgeCarousel, 3)],
    },
    ScoreFactor {
        name: "automation",
        when: |c| {
            matches!(
                c.problem_type,
                ProblemType::TimeFreedomOrAutomation | ProblemType::ManualRepetition
            )
        },
        awards: &[(L::ZapierLikeBuilderPreview, 3), (L::UseCaseTiles, 2)],
    },
    ScoreFactor {
        name: "technical-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::EngineeringDevelopment | MarketCategory::DataAnalytics
            )
        },
        awards: &[(L::CategoryAccordion, 3), (L::InteractiveStackDiagram, 2)],
    },
    ScoreFactor {
        name: "no-code-category",
        when: |c| c.market_category == MarketCategory::NoCodeLowCode,
        awards: &[(L::ZapierLikeBuilderPreview, 4)],
    },
    ScoreFactor {
        name: "add-on-category",
        when: |c| c.market_category == MarketCategory::AddOnsIntegrations,
        awards: &[(L::TabbyIntegrationCards, 4)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::LogoGrid, 3), (L::UseCaseTiles, 2)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::CategoryAccordion, 2), (L::TabbyIntegrationCards, 2)],
    },
    ScoreFactor {
        name: "established",
        when: |c| matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale),
        awards: &[(L::LogoWithQuoteUse, 3), (L::CategoryAccordion, 1)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::BadgeCarousel, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::LogoGrid, 2), (L::CategoryAccordion, 1)],
    },
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::LogoGrid, 2)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::CategoryAccordion, 2)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::AssetAvailability;

    use super::*;

    #[test]
    fn no_code_automation_gets_builder_preview() {
        let ctx = BusinessContext {
            market_category: MarketCategory::NoCodeLowCode,
            problem_type: ProblemType::ManualRepetition,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::ZapierLikeBuilderPreview);
    }

    #[test]
    fn founders_get_logo_grid() {
        // founders with low awareness: logo grid 3 + 3 = 6, tiles 2 + 2 = 4.
        let ctx = BusinessContext {
            target_audience: TargetAudience::Founders,
            awareness_level: AwarenessLevel::ProblemAware,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::LogoGrid);

        let bare = ctx.with_assets(AssetAvailability::default());
        assert_eq!(pick(&bare), L::LogoGrid);
    }
}
