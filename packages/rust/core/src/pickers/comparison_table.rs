//! Comparison table section.

use layoutpilot_shared::catalog::ComparisonTableLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, FlowTone, MarketSophisticationLevel as Level, PricingModel,
    StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::BasicFeatureGrid,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "tiered-b2b",
        apply: |c| {
            (c.pricing_model == PricingModel::Tiered
                && matches!(
                    c.target_audience,
                    TargetAudience::Businesses | TargetAudience::Enterprise
                ))
            .then_some(L::LiteVsProVsEnterprise)
        },
    },
    HardRule {
        name: "crowded-and-bold",
        apply: |c| {
            (c.market_sophistication_level == Level::Level5
                && c.tone_profile == ToneProfile::BoldPersuasive)
                .then_some(L::YouVsThemHighlight)
        },
    },
    HardRule {
        name: "builder-evaluation",
        apply: |c| {
            (c.target_audience == TargetAudience::Builders && c.sophistication_at_least(4))
                .then_some(L::ToggleableComparison)
        },
    },
    HardRule {
        name: "freemium-upgrade",
        apply: |c| {
            (c.pricing_model == PricingModel::Freemium
                && matches!(
                    c.startup_stage,
                    StartupStage::Traction | StartupStage::Growth
                ))
            .then_some(L::AnimatedUpgradePath)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Sophistication: primary.
    ScoreFactor {
        name: "naive-market",
        when: |c| c.sophistication_at_most(2),
        awards: &[(L::BasicFeatureGrid, 4), (L::CheckmarkComparison, 3)],
    },
    ScoreFactor {
        name: "level-3",
        when: |c| c.market_sophistication_level == Level::Level3,
        awards: &[(L::CheckmarkComparison, 4), (L::CompetitorCallouts, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::YouVsThemHighlight, 4), (L::CompetitorCallouts, 3)],
    },
    // Awareness
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::CompetitorCallouts, 3), (L::YouVsThemHighlight, 2)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::ToggleableComparison, 3), (L::LiteVsProVsEnterprise, 2)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::BasicFeatureGrid, 3)],
    },
    // Audience
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::ToggleableComparison, 3), (L::CheckmarkComparison, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::LiteVsProVsEnterprise, 3), (L::PersonaUseCaseCompare, 2)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::PersonaUseCaseCompare, 3), (L::CompetitorCallouts, 2)],
    },
    ScoreFactor {
        name: "creators-or-founders",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Creators | TargetAudience::Founders
            )
        },
        awards: &[(L::CheckmarkComparison, 3)],
    },
    // Pricing
    ScoreFactor {
        name: "tiered",
        when: |c| matches!(c.pricing_model, PricingModel::Tiered | PricingModel::PerSeat),
        awards: &[(L::LiteVsProVsEnterprise, 3)],
    },
    ScoreFactor {
        name: "freemium",
        when: |c| c.pricing_model == PricingModel::Freemium,
        awards: &[(L::AnimatedUpgradePath, 4)],
    },
    // Tone
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::YouVsThemHighlight, 3)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::CheckmarkComparison, 2), (L::ToggleableComparison, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::BasicFeatureGrid, 2)],
    },
    ScoreFactor {
        name: "analytical-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Analytical),
        awards: &[(L::CheckmarkComparison, 2)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiered_b2b_gets_plan_columns() {
        let ctx = BusinessContext {
            pricing_model: PricingModel::Tiered,
            target_audience: TargetAudience::Businesses,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::LiteVsProVsEnterprise);
    }

    #[test]
    fn level_3_solution_aware_gets_checkmarks() {
        // checkmarks 4 + 3 = 7, callouts 2 + 3 = 5.
        let ctx = BusinessContext {
            market_sophistication_level: Level::Level3,
            awareness_level: AwarenessLevel::SolutionAware,
            target_audience: TargetAudience::Founders,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::CheckmarkComparison);
    }
}
