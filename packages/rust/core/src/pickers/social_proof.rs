use layoutpilot_shared::catalog::SocialProofLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, FlowComplexity, MarketCategory, ProblemType,
    SectionType, StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::LogoWall,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "enterprise-logos",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.asset_present(Asset::CustomerLogos))
            .then_some(L::LogoWall)
        },
    },
    HardRule {
        name: "community-size",
        apply: |c| {
            (c.target_audience == TargetAudience::Community
                && matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale))
            .then_some(L::UserCountBar)
        },
    },
    HardRule {
        name: "regulated-buyers",
        apply: |c| {
            (c.problem_type == ProblemType::ComplianceOrRisk
                && matches!(
                    c.target_audience,
                    TargetAudience::Enterprise | TargetAudience::Businesses
                ))
            .then_some(L::IndustryBadgeLine)
        },
    },
    HardRule {
        name: "pre-launch",
        apply: |c| c.startup_stage.is_pre_launch().then_some(L::SocialProofStrip),
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "traction",
        when: |c| c.startup_stage == StartupStage::Traction,
        awards: &[(L::StripWithReviews, 4), (L::SocialProofStrip, 3)],
    },
    ScoreFactor {
        name: "growth",
        when: |c| c.startup_stage == StartupStage::Growth,
        awards: &[(L::LogoWall, 4), (L::StackedStats, 3)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::LogoWall, 4), (L::MediaMentions, 3), (L::MapHeatSpots, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::LogoWall, 3), (L::IndustryBadgeLine, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::UserCountBar, 3), (L::StripWithReviews, 2)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::UserCountBar, 4), (L::MapHeatSpots, 3)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::MediaMentions, 3), (L::StackedStats, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::StripWithReviews, 3), (L::StackedStats, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::SocialProofStrip, 3), (L::StripWithReviews, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::MediaMentions, 2), (L::StackedStats, 2)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::UserCountBar, 2), (L::SocialProofStrip, 2)],
    },
    ScoreFactor {
        name: "regulated-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::FinanceAccounting | MarketCategory::IndustrySpecific
            )
        },
        awards: &[(L::IndustryBadgeLine, 3)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::MediaMentions, 3)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::StackedStats, 2), (L::UserCountBar, 1)],
    },
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::SocialProofStrip, 2)],
    },
    ScoreFactor {
        name: "after-testimonials",
        when: |c| c.previous_is(SectionType::Testimonials),
        awards: &[(L::StripWithReviews, -3), (L::LogoWall, 1)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::AssetAvailability;

    use super::*;

    #[test]
    fn pre_launch_uses_strip() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Idea,
            target_audience: TargetAudience::Builders,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::SocialProofStrip);
    }

    #[test]
    fn growth_businesses_get_logo_wall() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Growth,
            target_audience: TargetAudience::Businesses,
            ..Default::default()
        };
        // logo wall 4 + 3 = 7.
        assert_eq!(pick(&ctx), L::LogoWall);

        let bare = ctx.with_assets(AssetAvailability::default());
        assert_eq!(pick(&bare), L::LogoWall);
    }
}
