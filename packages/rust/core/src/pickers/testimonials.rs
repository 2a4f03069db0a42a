//! Testimonials section.
//!
//! Most layouts here depend on real customer material, so the asset
//! adjustments are stronger than in other sections: without testimonials the
//! picker leans on quote grids that can be filled with early-user snippets.

use layoutpilot_shared::catalog::TestimonialsLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, CopyIntent, FlowTone, LayoutDensity, MarketCategory,
    ProblemType, SectionType, StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: ASSET_ADJUSTMENTS,
    fallback: L::QuoteGrid,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "enterprise-segments",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise && c.sophistication_at_least(4))
                .then_some(L::SegmentedTestimonials)
        },
    },
    HardRule {
        name: "creator-video",
        apply: |c| {
            (c.target_audience == TargetAudience::Creators
                && c.asset_present(Asset::DemoVideo)
                && c.asset_present(Asset::Testimonials))
            .then_some(L::VideoTestimonials)
        },
    },
    HardRule {
        name: "personal-transformation",
        apply: |c| {
            (c.copy_intent == CopyIntent::PainLed
                && c.awareness_level == AwarenessLevel::ProblemAware
                && matches!(
                    c.problem_type,
                    ProblemType::BurnoutOrOverload | ProblemType::PersonalGrowthOrProductivity
                ))
            .then_some(L::BeforeAfterQuote)
        },
    },
    HardRule {
        name: "global-community",
        apply: |c| {
            (c.target_audience == TargetAudience::Community
                && c.startup_stage == StartupStage::Scale)
                .then_some(L::InteractiveTestimonialMap)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Stage: primary.
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::QuoteGrid, 4), (L::PullQuoteStack, 3)],
    },
    ScoreFactor {
        name: "traction",
        when: |c| c.startup_stage == StartupStage::Traction,
        awards: &[(L::QuoteGrid, 3), (L::AvatarCarousel, 3)],
    },
    ScoreFactor {
        name: "growth-or-scale",
        when: |c| matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale),
        awards: &[(L::RatingCards, 4), (L::VideoTestimonials, 3), (L::AvatarCarousel, 2)],
    },
    // Audience
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::AvatarCarousel, 4), (L::VideoTestimonials, 3)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::AvatarCarousel, 3), (L::InteractiveTestimonialMap, 3)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::PullQuoteStack, 3), (L::QuoteGrid, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::SegmentedTestimonials, 4), (L::RatingCards, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::QuoteGrid, 3), (L::PullQuoteStack, 1)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::RatingCards, 3), (L::BeforeAfterQuote, 2)],
    },
    // Copy and problem
    ScoreFactor {
        name: "pain-led",
        when: |c| c.copy_intent == CopyIntent::PainLed,
        awards: &[(L::BeforeAfterQuote, 3)],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[(L::PullQuoteStack, 2), (L::AvatarCarousel, 1)],
    },
    ScoreFactor {
        name: "emotional-problem",
        when: |c| {
            matches!(
                c.problem_type,
                ProblemType::BurnoutOrOverload | ProblemType::PersonalGrowthOrProductivity
            )
        },
        awards: &[(L::BeforeAfterQuote, 2)],
    },
    ScoreFactor {
        name: "compliance",
        when: |c| c.problem_type == ProblemType::ComplianceOrRisk,
        awards: &[(L::SegmentedTestimonials, 2)],
    },
    // Tone
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::AvatarCarousel, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::QuoteGrid, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::PullQuoteStack, 3)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::RatingCards, 2), (L::BeforeAfterQuote, 1)],
    },
    ScoreFactor {
        name: "design-category",
        when: |c| c.market_category == MarketCategory::DesignCreative,
        awards: &[(L::VideoTestimonials, 2)],
    },
    // Flow
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[(L::BeforeAfterQuote, 2), (L::VideoTestimonials, 1)],
    },
    ScoreFactor {
        name: "after-heavy-layout",
        when: |c| c.previous_density() == Some(LayoutDensity::Heavy),
        awards: &[(L::PullQuoteStack, 2)],
    },
    ScoreFactor {
        name: "after-results",
        when: |c| c.previous_is(SectionType::Results),
        awards: &[(L::RatingCards, -2)],
    },
];

const ASSET_ADJUSTMENTS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "no-demo-video",
        when: |c| c.asset_missing(Asset::DemoVideo),
        awards: &[(L::VideoTestimonials, -100)],
    },
    ScoreFactor {
        name: "no-testimonials",
        when: |c| c.asset_missing(Asset::Testimonials),
        awards: &[
            (L::VideoTestimonials, -100),
            (L::AvatarCarousel, -50),
            (L::InteractiveTestimonialMap, -50),
            (L::QuoteGrid, 20),
            (L::PullQuoteStack, 10),
        ],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{AssetAvailability, MarketSophisticationLevel};

    use super::*;

    #[test]
    fn sophisticated_enterprise_is_segmented() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Enterprise,
            market_sophistication_level: MarketSophisticationLevel::Level5,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::SegmentedTestimonials);
    }

    #[test]
    fn creators_fall_back_to_quotes_without_testimonials() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Creators,
            startup_stage: StartupStage::Traction,
            ..Default::default()
        };
        // avatar carousel 3 + 4 = 7.
        assert_eq!(pick(&ctx), L::AvatarCarousel);

        let bare = ctx.with_assets(AssetAvailability::default());
        // quote grid 3 + 20 = 23.
        assert_eq!(pick(&bare), L::QuoteGrid);
    }

    #[test]
    fn creator_video_needs_both_assets() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Creators,
            ..Default::default()
        };
        assert_eq!(
            pick(&ctx.with_assets(AssetAvailability::all())),
            L::VideoTestimonials
        );

        let no_video = AssetAvailability {
            demo_video: false,
            ..AssetAvailability::all()
        };
        assert_eq!(pick(&ctx.with_assets(no_video)), L::AvatarCarousel);
    }
}
