//! Header section.

use layoutpilot_shared::catalog::HeaderLayout as L;
use layoutpilot_shared::{
    BusinessContext, CtaStrength, FlowComplexity, LandingGoal, StartupStage, TargetAudience,
    ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::MinimalNavHeader,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "pre-launch-capture",
        apply: |c| {
            (c.startup_stage.is_pre_launch()
                && matches!(
                    c.landing_page_goals,
                    LandingGoal::Waitlist | LandingGoal::EarlyAccess
                ))
            .then_some(L::MinimalNavHeader)
        },
    },
    HardRule {
        name: "enterprise-suite",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.startup_stage == StartupStage::Scale)
                .then_some(L::FullNavHeader)
        },
    },
    HardRule {
        name: "luxury-brand",
        apply: |c| {
            (c.tone_profile == ToneProfile::LuxuryExpert && c.sophistication_at_least(4))
                .then_some(L::CenteredLogoHeader)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::MinimalNavHeader, 4)],
    },
    ScoreFactor {
        name: "traction-or-growth",
        when: |c| {
            matches!(
                c.startup_stage,
                StartupStage::Traction | StartupStage::Growth
            )
        },
        awards: &[(L::NavWithCtaHeader, 4)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::FullNavHeader, 4), (L::NavWithCtaHeader, 2)],
    },
    ScoreFactor {
        name: "direct-or-hard-goal",
        when: |c| {
            matches!(
                c.landing_page_goals.cta_strength(),
                Some(CtaStrength::Direct | CtaStrength::Hard)
            )
        },
        awards: &[(L::NavWithCtaHeader, 4)],
    },
    ScoreFactor {
        name: "trust-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Trust),
        awards: &[(L::NavWithCtaHeader, 3), (L::FullNavHeader, 2)],
    },
    ScoreFactor {
        name: "soft-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Soft),
        awards: &[(L::MinimalNavHeader, 3), (L::CenteredLogoHeader, 2)],
    },
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::FullNavHeader, 4)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::NavWithCtaHeader, 3), (L::FullNavHeader, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::CenteredLogoHeader, 3)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::MinimalNavHeader, 3)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::CenteredLogoHeader, 2), (L::MinimalNavHeader, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::CenteredLogoHeader, 3)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::MinimalNavHeader, 2)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::NavWithCtaHeader, 2)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::CenteredLogoHeader, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::FullNavHeader, 2), (L::NavWithCtaHeader, 1)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::FullNavHeader, 3)],
    },
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::MinimalNavHeader, 2)],
    },
];
