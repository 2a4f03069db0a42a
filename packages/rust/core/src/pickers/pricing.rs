//! Pricing section.
//!
//! The pricing model dominates here; modifiers and the commitment option
//! only nudge between layouts that already fit the model.

use layoutpilot_shared::catalog::PricingLayout as L;
use layoutpilot_shared::{
    BusinessContext, LandingGoal, PricingCommitment, PricingModel, PricingModifier, StartupStage,
    TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::TierCards,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "custom-quote",
        apply: |c| (c.pricing_model == PricingModel::CustomQuote).then_some(L::CallToQuotePlan),
    },
    HardRule {
        name: "usage-based",
        apply: |c| (c.pricing_model == PricingModel::UsageBased).then_some(L::SliderPricing),
    },
    HardRule {
        name: "annual-discount",
        apply: |c| {
            (matches!(c.pricing_model, PricingModel::FlatMonthly | PricingModel::Tiered)
                && c.pricing_modifier == Some(PricingModifier::Discount))
            .then_some(L::ToggleableMonthlyYearly)
        },
    },
    HardRule {
        name: "free-pre-launch",
        apply: |c| {
            (c.pricing_model == PricingModel::Free && c.startup_stage.is_pre_launch())
                .then_some(L::MiniStackedCards)
        },
    },
    HardRule {
        name: "enterprise-sales",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.landing_page_goals == LandingGoal::ContactSales)
                .then_some(L::CallToQuotePlan)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Pricing model: primary.
    ScoreFactor {
        name: "free",
        when: |c| c.pricing_model == PricingModel::Free,
        awards: &[(L::MiniStackedCards, 5)],
    },
    ScoreFactor {
        name: "freemium",
        when: |c| c.pricing_model == PricingModel::Freemium,
        awards: &[(L::TierCards, 4), (L::FeatureMatrix, 3)],
    },
    ScoreFactor {
        name: "trial",
        when: |c| matches!(c.pricing_model, PricingModel::TrialFree | PricingModel::TrialPaid),
        awards: &[(L::TierCards, 4), (L::CardWithTestimonial, 3)],
    },
    ScoreFactor {
        name: "flat-monthly",
        when: |c| c.pricing_model == PricingModel::FlatMonthly,
        awards: &[(L::CardWithTestimonial, 5), (L::MiniStackedCards, 3)],
    },
    ScoreFactor {
        name: "tiered",
        when: |c| c.pricing_model == PricingModel::Tiered,
        awards: &[(L::TierCards, 5), (L::FeatureMatrix, 4)],
    },
    ScoreFactor {
        name: "per-seat",
        when: |c| c.pricing_model == PricingModel::PerSeat,
        awards: &[(L::SegmentBasedPricing, 5), (L::SliderPricing, 3)],
    },
    // Audience
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::CallToQuotePlan, 4), (L::FeatureMatrix, 3)],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::SegmentBasedPricing, 3), (L::FeatureMatrix, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::FeatureMatrix, 3), (L::SliderPricing, 1)],
    },
    ScoreFactor {
        name: "individuals",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Founders | TargetAudience::Creators | TargetAudience::Community
            )
        },
        awards: &[(L::MiniStackedCards, 2), (L::CardWithTestimonial, 2)],
    },
    // Modifiers and commitment
    ScoreFactor {
        name: "discount",
        when: |c| c.pricing_modifier == Some(PricingModifier::Discount),
        awards: &[(L::ToggleableMonthlyYearly, 4)],
    },
    ScoreFactor {
        name: "money-back",
        when: |c| c.pricing_modifier == Some(PricingModifier::MoneyBack),
        awards: &[(L::CardWithTestimonial, 3)],
    },
    ScoreFactor {
        name: "pay-after-use",
        when: |c| c.pricing_modifier == Some(PricingModifier::PayAfterUse),
        awards: &[(L::SliderPricing, 3)],
    },
    ScoreFactor {
        name: "annual-only",
        when: |c| c.pricing_commitment_option == Some(PricingCommitment::AnnualOnly),
        awards: &[(L::ToggleableMonthlyYearly, -3), (L::FeatureMatrix, 2)],
    },
    ScoreFactor {
        name: "talk-to-sales",
        when: |c| c.pricing_commitment_option == Some(PricingCommitment::TalkToSales),
        awards: &[(L::CallToQuotePlan, 5)],
    },
    ScoreFactor {
        name: "no-card",
        when: |c| c.pricing_commitment_option == Some(PricingCommitment::NoCard),
        awards: &[(L::TierCards, 2), (L::MiniStackedCards, 1)],
    },
    // Stage and tone
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::MiniStackedCards, 3)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::FeatureMatrix, 2), (L::SegmentBasedPricing, 2)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::CardWithTestimonial, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::FeatureMatrix, 2)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::AssetAvailability;

    use super::*;

    #[test]
    fn pricing_model_drives_hard_rules() {
        let quote = BusinessContext {
            pricing_model: PricingModel::CustomQuote,
            ..Default::default()
        };
        assert_eq!(pick(&quote), L::CallToQuotePlan);

        let usage = BusinessContext {
            pricing_model: PricingModel::UsageBased,
            ..Default::default()
        };
        assert_eq!(pick(&usage), L::SliderPricing);

        let discounted = BusinessContext {
            pricing_model: PricingModel::Tiered,
            pricing_modifier: Some(PricingModifier::Discount),
            ..Default::default()
        };
        assert_eq!(pick(&discounted), L::ToggleableMonthlyYearly);
    }

    #[test]
    fn flat_monthly_individuals_get_testimonial_card() {
        let ctx = BusinessContext {
            pricing_model: PricingModel::FlatMonthly,
            target_audience: TargetAudience::Creators,
            ..Default::default()
        };
        // card with testimonial 5 + 2 = 7, mini cards 3 + 2 = 5.
        assert_eq!(pick(&ctx), L::CardWithTestimonial);

        // Asset availability only adjusts hero, testimonials and beforeAfter.
        let bare = ctx.with_assets(AssetAvailability::default());
        assert_eq!(pick(&bare), L::CardWithTestimonial);
    }
}
