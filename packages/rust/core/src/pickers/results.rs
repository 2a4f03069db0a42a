//! Results section.

use layoutpilot_shared::catalog::ResultsLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, CopyIntent, FlowTone, MarketCategory, ProblemType,
    StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::StatBlocks,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "pre-launch-promise",
        apply: |c| c.startup_stage.is_pre_launch().then_some(L::OutcomeIcons),
    },
    HardRule {
        name: "measured-business-impact",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && matches!(
                    c.problem_type,
                    ProblemType::LostRevenueOrInefficiency | ProblemType::ComplianceOrRisk
                )
                && c.sophistication_at_least(3))
            .then_some(L::BeforeAfterStats)
        },
    },
    HardRule {
        name: "playful-creators",
        apply: |c| {
            (c.target_audience == TargetAudience::Creators
                && c.tone_profile == ToneProfile::ConfidentPlayful)
                .then_some(L::EmojiOutcomeGrid)
        },
    },
    HardRule {
        name: "segmented-scale",
        apply: |c| {
            (matches!(
                c.target_audience,
                TargetAudience::Businesses | TargetAudience::Enterprise
            ) && c.startup_stage == StartupStage::Scale
                && c.sophistication_at_least(4))
            .then_some(L::PersonaResultPanels)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "traction",
        when: |c| c.startup_stage == StartupStage::Traction,
        awards: &[(L::QuoteWithMetric, 4), (L::StackedWinsList, 3)],
    },
    ScoreFactor {
        name: "growth",
        when: |c| c.startup_stage == StartupStage::Growth,
        awards: &[(L::StatBlocks, 4), (L::TimelineResults, 3)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::StatBlocks, 4), (L::PersonaResultPanels, 3)],
    },
    ScoreFactor {
        name: "lost-revenue",
        when: |c| c.problem_type == ProblemType::LostRevenueOrInefficiency,
        awards: &[(L::BeforeAfterStats, 4), (L::StatBlocks, 2)],
    },
    ScoreFactor {
        name: "time-back",
        when: |c| {
            matches!(
                c.problem_type,
                ProblemType::ManualRepetition | ProblemType::TimeFreedomOrAutomation
            )
        },
        awards: &[(L::BeforeAfterStats, 3), (L::StackedWinsList, 2)],
    },
    ScoreFactor {
        name: "personal-outcomes",
        when: |c| {
            matches!(
                c.problem_type,
                ProblemType::PersonalGrowthOrProductivity | ProblemType::CreativeEmpowerment
            )
        },
        awards: &[(L::QuoteWithMetric, 3), (L::EmojiOutcomeGrid, 2)],
    },
    ScoreFactor {
        name: "burnout",
        when: |c| c.problem_type == ProblemType::BurnoutOrOverload,
        awards: &[(L::QuoteWithMetric, 3), (L::TimelineResults, 2)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::StatBlocks, 3), (L::BeforeAfterStats, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::StackedWinsList, 3), (L::QuoteWithMetric, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::EmojiOutcomeGrid, 3), (L::QuoteWithMetric, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::PersonaResultPanels, 3), (L::BeforeAfterStats, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::StatBlocks, 2), (L::TimelineResults, 2)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::StatBlocks, 2), (L::QuoteWithMetric, 2)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::OutcomeIcons, 3), (L::StackedWinsList, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::BeforeAfterStats, 2), (L::PersonaResultPanels, 2)],
    },
    ScoreFactor {
        name: "data-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::DataAnalytics | MarketCategory::FinanceAccounting
            )
        },
        awards: &[(L::StatBlocks, 2)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::BeforeAfterStats, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::QuoteWithMetric, 2)],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[(L::TimelineResults, 2)],
    },
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[(L::QuoteWithMetric, 2)],
    },
    ScoreFactor {
        name: "analytical-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Analytical),
        awards: &[(L::StatBlocks, 2)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::AssetAvailability;

    use super::*;

    #[test]
    fn pre_launch_promises_outcomes() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Mvp,
            target_audience: TargetAudience::Enterprise,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::OutcomeIcons);
    }

    #[test]
    fn traction_founders_quote_a_metric() {
        // quote 4 + 2 = 6, wins list 3 + 3 = 6; quote is declared first.
        let ctx = BusinessContext {
            startup_stage: StartupStage::Traction,
            target_audience: TargetAudience::Founders,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::QuoteWithMetric);

        let bare = ctx.with_assets(AssetAvailability::default());
        assert_eq!(pick(&bare), L::QuoteWithMetric);
    }
}
