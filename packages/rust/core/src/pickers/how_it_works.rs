//! How-it-works section.

use layoutpilot_shared::catalog::HowItWorksLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, FlowComplexity, LandingGoal, LayoutDensity,
    MarketCategory, ProblemType, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::ThreeStepHorizontal,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "video-demo",
        apply: |c| {
            (c.asset_present(Asset::DemoVideo)
                && matches!(
                    c.landing_page_goals,
                    LandingGoal::WatchVideo | LandingGoal::Demo
                ))
            .then_some(L::VideoWalkthrough)
        },
    },
    HardRule {
        name: "enterprise-rollout",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise && c.sophistication_at_least(4))
                .then_some(L::AccordionSteps)
        },
    },
    HardRule {
        name: "simple-page-low-awareness",
        apply: |c| {
            (c.flow_complexity() == Some(FlowComplexity::Simple)
                && matches!(
                    c.awareness_level,
                    AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
                ))
            .then_some(L::ThreeStepHorizontal)
        },
    },
    HardRule {
        name: "no-code-builders",
        apply: |c| {
            (c.market_category == MarketCategory::NoCodeLowCode
                && c.target_audience == TargetAudience::Builders)
                .then_some(L::AnimatedProcessLine)
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
        awards: &[(L::ThreeStepHorizontal, 5), (L::IconCircleSteps, 3)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::VerticalTimeline, 4), (L::ZigzagImageSteps, 3)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::AccordionSteps, 3), (L::VideoWalkthrough, 3)],
    },
    // Audience
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::VerticalTimeline, 3), (L::AnimatedProcessLine, 3)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::ZigzagImageSteps, 4), (L::VideoWalkthrough, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::ThreeStepHorizontal, 3), (L::IconCircleSteps, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::AccordionSteps, 4), (L::VerticalTimeline, 2)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::IconCircleSteps, 3)],
    },
    // Category and problem
    ScoreFactor {
        name: "automation",
        when: |c| {
            matches!(
                c.problem_type,
                ProblemType::ManualRepetition | ProblemType::TimeFreedomOrAutomation
            )
        },
        awards: &[(L::AnimatedProcessLine, 3)],
    },
    ScoreFactor {
        name: "design-category",
        when: |c| c.market_category == MarketCategory::DesignCreative,
        awards: &[(L::ZigzagImageSteps, 3)],
    },
    ScoreFactor {
        name: "technical-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::EngineeringDevelopment | MarketCategory::AiTools
            )
        },
        awards: &[(L::VerticalTimeline, 2), (L::AccordionSteps, 1)],
    },
    // Tone
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::IconCircleSteps, 2), (L::AnimatedProcessLine, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::VerticalTimeline, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::ThreeStepHorizontal, 2)],
    },
    // Goal
    ScoreFactor {
        name: "watch-video",
        when: |c| c.landing_page_goals == LandingGoal::WatchVideo,
        awards: &[(L::VideoWalkthrough, 4)],
    },
    // Flow
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::AccordionSteps, 2), (L::VerticalTimeline, 1)],
    },
    ScoreFactor {
        name: "after-heavy-layout",
        when: |c| c.previous_density() == Some(LayoutDensity::Heavy),
        awards: &[(L::ThreeStepHorizontal, 2), (L::AccordionSteps, -2)],
    },
];
