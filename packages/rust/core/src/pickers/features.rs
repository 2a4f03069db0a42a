//! Features section.

use layoutpilot_shared::catalog::FeaturesLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, FlowComplexity, LandingGoal, MarketCategory,
    MarketSophisticationLevel as Level, ProblemType, SectionType, StartupStage, TargetAudience,
    ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::IconGrid,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "pre-launch-teaser",
        apply: |c| {
            (c.startup_stage.is_pre_launch()
                && matches!(
                    c.landing_page_goals,
                    LandingGoal::Waitlist | LandingGoal::EarlyAccess
                ))
            .then_some(L::MiniCards)
        },
    },
    HardRule {
        name: "quantified-business-value",
        apply: |c| {
            (matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            ) && c.problem_type == ProblemType::LostRevenueOrInefficiency
                && c.sophistication_at_least(3))
            .then_some(L::MetricTiles)
        },
    },
    HardRule {
        name: "visual-product",
        apply: |c| {
            (c.market_category == MarketCategory::DesignCreative
                && c.asset_present(Asset::ProductImages))
            .then_some(L::SplitAlternating)
        },
    },
    HardRule {
        name: "proof-led-growth",
        apply: |c| {
            (matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale)
                && c.tone_profile == ToneProfile::BoldPersuasive
                && c.asset_present(Asset::Testimonials))
            .then_some(L::FeatureTestimonial)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Awareness: primary.
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::IconGrid, 4), (L::MiniCards, 3)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::SplitAlternating, 5), (L::IconGrid, 2)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::MetricTiles, 4), (L::FeatureTestimonial, 3)],
    },
    // Sophistication
    ScoreFactor {
        name: "naive-market",
        when: |c| c.sophistication_at_most(2),
        awards: &[(L::IconGrid, 3)],
    },
    ScoreFactor {
        name: "level-3",
        when: |c| c.market_sophistication_level == Level::Level3,
        awards: &[(L::SplitAlternating, 3)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::MetricTiles, 3), (L::FeatureTestimonial, 3)],
    },
    // Audience
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::IconGrid, 3), (L::SplitAlternating, 2)],
    },
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::MetricTiles, 4)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::Carousel, 3), (L::SplitAlternating, 2)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::MetricTiles, 3), (L::Carousel, 1)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::MiniCards, 3)],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::FeatureTestimonial, 3)],
    },
    // Tone
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::IconGrid, 2), (L::MiniCards, 2)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::Carousel, 3)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::FeatureTestimonial, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::SplitAlternating, 2)],
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
        awards: &[(L::IconGrid, 2)],
    },
    ScoreFactor {
        name: "design-category",
        when: |c| c.market_category == MarketCategory::DesignCreative,
        awards: &[(L::SplitAlternating, 2), (L::Carousel, 2)],
    },
    ScoreFactor {
        name: "numbers-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::DataAnalytics | MarketCategory::MarketingSales
            )
        },
        awards: &[(L::MetricTiles, 2)],
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
        awards: &[(L::FeatureTestimonial, 2)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::MetricTiles, 2)],
    },
    // Flow
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::MiniCards, 2), (L::IconGrid, 1)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::SplitAlternating, 2)],
    },
    ScoreFactor {
        name: "after-testimonials",
        when: |c| c.previous_is(SectionType::Testimonials),
        awards: &[(L::FeatureTestimonial, -3)],
    },
];
