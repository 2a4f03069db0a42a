//! Footer section.

use layoutpilot_shared::catalog::FooterLayout as L;
use layoutpilot_shared::{
    BusinessContext, FlowComplexity, LandingGoal, StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::SimpleFooter,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "enterprise-suite",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.startup_stage == StartupStage::Scale)
                .then_some(L::MultiColumnFooter)
        },
    },
    HardRule {
        name: "sales-led",
        apply: |c| {
            (matches!(
                c.landing_page_goals,
                LandingGoal::ContactSales | LandingGoal::BookCall
            ) && matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            ))
            .then_some(L::ContactFooter)
        },
    },
    HardRule {
        name: "pre-launch",
        apply: |c| c.startup_stage.is_pre_launch().then_some(L::SimpleFooter),
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "traction",
        when: |c| c.startup_stage == StartupStage::Traction,
        awards: &[(L::LinksAndSocialFooter, 3), (L::SimpleFooter, 2)],
    },
    ScoreFactor {
        name: "growth",
        when: |c| c.startup_stage == StartupStage::Growth,
        awards: &[(L::LinksAndSocialFooter, 4), (L::MultiColumnFooter, 2)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::MultiColumnFooter, 4)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::MultiColumnFooter, 3), (L::ContactFooter, 3)],
    },
    ScoreFactor {
        name: "social-audience",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Creators | TargetAudience::Community | TargetAudience::Marketers
            )
        },
        awards: &[(L::LinksAndSocialFooter, 3)],
    },
    ScoreFactor {
        name: "builders-or-founders",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Builders | TargetAudience::Founders
            )
        },
        awards: &[(L::SimpleFooter, 3)],
    },
    ScoreFactor {
        name: "trust-goal",
        when: |c| {
            matches!(
                c.landing_page_goals,
                LandingGoal::Demo | LandingGoal::BookCall | LandingGoal::ContactSales
            )
        },
        awards: &[(L::ContactFooter, 3)],
    },
    ScoreFactor {
        name: "join-community",
        when: |c| c.landing_page_goals == LandingGoal::JoinCommunity,
        awards: &[(L::LinksAndSocialFooter, 3)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::SimpleFooter, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::SimpleFooter, 2), (L::ContactFooter, 1)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::LinksAndSocialFooter, 2)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::MultiColumnFooter, 2)],
    },
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::SimpleFooter, 2)],
    },
];
