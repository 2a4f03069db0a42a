//! Closing offer section.
//!
//! Sits at the end of the page after the main CTA, so it leans on the goal's
//! commitment level more than on awareness.

use layoutpilot_shared::catalog::CloseSectionLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, CtaStrength, FlowComplexity, LandingGoal, MarketCategory,
    PricingModel, PricingModifier, SectionType, StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::MockupWithCta,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "enterprise-contact",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.landing_page_goals.cta_strength() == Some(CtaStrength::Trust)
                && c.sophistication_at_least(4))
            .then_some(L::EnterpriseContactBox)
        },
    },
    HardRule {
        name: "lead-magnet",
        apply: |c| (c.landing_page_goals == LandingGoal::Download).then_some(L::LeadMagnetCard),
    },
    HardRule {
        name: "bonus-offer",
        apply: |c| {
            (c.tone_profile == ToneProfile::BoldPersuasive
                && c.landing_page_goals.cta_strength() == Some(CtaStrength::Hard)
                && matches!(
                    c.pricing_modifier,
                    Some(PricingModifier::Discount | PricingModifier::MoneyBack)
                ))
            .then_some(L::BonusStackCta)
        },
    },
    HardRule {
        name: "try-it-live",
        apply: |c| {
            (c.target_audience == TargetAudience::Builders
                && c.landing_page_goals == LandingGoal::FreeTrial
                && matches!(
                    c.market_category,
                    MarketCategory::EngineeringDevelopment | MarketCategory::NoCodeLowCode
                ))
            .then_some(L::LivePreviewEmbed)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    // Goal: primary.
    ScoreFactor {
        name: "soft-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Soft),
        awards: &[(L::MockupWithCta, 3), (L::ValueReinforcementBlock, 3)],
    },
    ScoreFactor {
        name: "direct-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Direct),
        awards: &[(L::MockupWithCta, 4), (L::LivePreviewEmbed, 2)],
    },
    ScoreFactor {
        name: "trust-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Trust),
        awards: &[(L::EnterpriseContactBox, 4), (L::MultistepCtaStack, 3)],
    },
    ScoreFactor {
        name: "hard-goal",
        when: |c| c.landing_page_goals.cta_strength() == Some(CtaStrength::Hard),
        awards: &[(L::BonusStackCta, 4), (L::SideBySideOfferCards, 3)],
    },
    ScoreFactor {
        name: "download",
        when: |c| c.landing_page_goals == LandingGoal::Download,
        awards: &[(L::LeadMagnetCard, 5)],
    },
    // Audience
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::EnterpriseContactBox, 4)],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::SideBySideOfferCards, 3), (L::MultistepCtaStack, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::LivePreviewEmbed, 4)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::MockupWithCta, 3), (L::LeadMagnetCard, 2)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::LeadMagnetCard, 3), (L::BonusStackCta, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::ValueReinforcementBlock, 3)],
    },
    // Pricing
    ScoreFactor {
        name: "tiered",
        when: |c| matches!(c.pricing_model, PricingModel::Tiered | PricingModel::PerSeat),
        awards: &[(L::SideBySideOfferCards, 3)],
    },
    ScoreFactor {
        name: "sweetener",
        when: |c| {
            matches!(
                c.pricing_modifier,
                Some(PricingModifier::Discount | PricingModifier::MoneyBack)
            )
        },
        awards: &[(L::BonusStackCta, 3)],
    },
    ScoreFactor {
        name: "custom-quote",
        when: |c| c.pricing_model == PricingModel::CustomQuote,
        awards: &[(L::EnterpriseContactBox, 3), (L::MultistepCtaStack, 2)],
    },
    // Awareness and stage
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::ValueReinforcementBlock, 3), (L::LeadMagnetCard, 1)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::MockupWithCta, 2), (L::BonusStackCta, 2)],
    },
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::ValueReinforcementBlock, 2), (L::MockupWithCta, 1)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::MultistepCtaStack, 2)],
    },
    // Tone
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::BonusStackCta, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::LivePreviewEmbed, 2), (L::MockupWithCta, 1)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::ValueReinforcementBlock, 2)],
    },
    // Flow
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::ValueReinforcementBlock, 2)],
    },
    ScoreFactor {
        name: "after-pricing",
        when: |c| c.previous_is(SectionType::Pricing),
        awards: &[(L::SideBySideOfferCards, -3)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{
        AssetAvailability, CopyIntent, MarketSophisticationLevel, ProblemType,
    };

    use super::*;

    #[test]
    fn enterprise_contact_sales_gets_contact_box() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Enterprise,
            landing_page_goals: LandingGoal::ContactSales,
            market_sophistication_level: MarketSophisticationLevel::Level4,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::EnterpriseContactBox);
    }

    #[test]
    fn out_of_taxonomy_context_closes_with_mockup() {
        let ctx = BusinessContext {
            awareness_level: "curious".into(),
            tone_profile: "whimsical".into(),
            market_sophistication_level: "level-9".into(),
            copy_intent: "neutral".into(),
            problem_type: "boredom".into(),
            market_category: "Space Tourism".into(),
            startup_stage: "stealth".into(),
            landing_page_goals: "applaud".into(),
            target_audience: "aliens".into(),
            pricing_model: "barter".into(),
            ..Default::default()
        };
        assert!(!ctx.copy_intent.is_known());
        assert_eq!(ctx.copy_intent, CopyIntent::Other("neutral".into()));
        assert_eq!(ctx.problem_type, ProblemType::Other("boredom".into()));

        let decision = evaluate(&RULES, &ctx, None);
        assert_eq!(decision.layout, L::MockupWithCta);
        assert_eq!(decision.source, crate::engine::DecisionSource::Fallback);

        let bare = evaluate(&RULES, &ctx.with_assets(AssetAvailability::default()), None);
        assert_eq!(bare.layout, L::MockupWithCta);
        assert_eq!(bare.source, crate::engine::DecisionSource::Fallback);
    }

    #[test]
    fn download_goal_offers_lead_magnet() {
        let ctx = BusinessContext {
            landing_page_goals: LandingGoal::Download,
            target_audience: TargetAudience::Enterprise,
            ..Default::default()
        }
        .with_assets(AssetAvailability::default());
        assert_eq!(pick(&ctx), L::LeadMagnetCard);
    }
}
