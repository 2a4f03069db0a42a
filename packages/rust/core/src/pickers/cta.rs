//! Call-to-action section.

use layoutpilot_shared::catalog::CtaLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, CtaStrength, LandingGoal, LayoutDensity,
    MarketCategory, PricingModifier, SectionType, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::CenteredHeadlineCta,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "capture-email",
        apply: |c| {
            matches!(
                c.landing_page_goals,
                LandingGoal::Waitlist | LandingGoal::EarlyAccess
            )
            .then_some(L::CtaWithFormField)
        },
    },
    HardRule {
        name: "limited-offer",
        apply: |c| {
            (c.pricing_modifier == Some(PricingModifier::Discount)
                && matches!(
                    c.landing_page_goals,
                    LandingGoal::BuyNow | LandingGoal::Subscribe
                ))
            .then_some(L::CountdownLimitedCta)
        },
    },
    HardRule {
        name: "enterprise-trust",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.landing_page_goals.cta_strength() == Some(CtaStrength::Trust))
                .then_some(L::CtaWithBadgeRow)
        },
    },
    HardRule {
        name: "design-mockup",
        apply: |c| {
            (c.market_category == MarketCategory::DesignCreative
                && c.asset_present(Asset::ProductImages)
                && matches!(
                    c.awareness_level,
                    AwarenessLevel::ProductAware | AwarenessLevel::MostAware
                ))
            .then_some(L::VisualCtaWithMockup)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Goal strength: primary.
    ScoreFactor {
        name: "soft-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Soft),
        awards: &[(L::CtaWithFormField, 4), (L::CenteredHeadlineCta, 3)],
    },
    ScoreFactor {
        name: "direct-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Direct),
        awards: &[(L::CenteredHeadlineCta, 4), (L::SideBySideCta, 3)],
    },
    ScoreFactor {
        name: "trust-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Trust),
        awards: &[(L::CtaWithBadgeRow, 4), (L::TestimonialCtaCombo, 3)],
    },
    ScoreFactor {
        name: "hard-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Hard),
        awards: &[(L::ValueStackCta, 5), (L::CountdownLimitedCta, 2)],
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
        awards: &[(L::ValueStackCta, 3), (L::CenteredHeadlineCta, 2)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::CenteredHeadlineCta, 3), (L::VisualCtaWithMockup, 2)],
    },
    // Audience
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::CtaWithBadgeRow, 3), (L::TestimonialCtaCombo, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::VisualCtaWithMockup, 3), (L::TestimonialCtaCombo, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::SideBySideCta, 3), (L::CenteredHeadlineCta, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::CenteredHeadlineCta, 2), (L::ValueStackCta, 2)],
    },
    // Tone and offer
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::CountdownLimitedCta, 3), (L::ValueStackCta, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::CenteredHeadlineCta, 3)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::VisualCtaWithMockup, 2), (L::CtaWithBadgeRow, 2)],
    },
    ScoreFactor {
        name: "discount",
        when: |c| c.pricing_modifier == Some(PricingModifier::Discount),
        awards: &[(L::CountdownLimitedCta, 3)],
    },
    ScoreFactor {
        name: "money-back",
        when: |c| c.pricing_modifier == Some(PricingModifier::MoneyBack),
        awards: &[(L::ValueStackCta, 2), (L::CtaWithBadgeRow, 1)],
    },
    // Flow
    ScoreFactor {
        name: "after-testimonials",
        when: |c| c.previous_is(SectionType::Testimonials),
        awards: &[(L::TestimonialCtaCombo, -4)],
    },
    ScoreFactor {
        name: "after-heavy-layout",
        when: |c| c.previous_density() == Some(LayoutDensity::Heavy),
        awards: &[(L::CenteredHeadlineCta, 2), (L::ValueStackCta, -1)],
    },
];
