//! Hero section. The only section whose near-ties may be broken at random.

use rand::RngCore;

use layoutpilot_shared::catalog::HeroLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, CopyIntent, LandingGoal, MarketCategory,
    PricingModel, StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, TieBreaker, TiePolicy, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: ASSET_ADJUSTMENTS,
    fallback: L::CenterStacked,
    tie_break: true,
};

/// Choose the hero layout deterministically.
pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

/// Choose the hero layout, settling near-ties with `rng`.
pub fn pick_with_rng(ctx: &BusinessContext, rng: &mut dyn RngCore) -> L {
    let mut breaker = TieBreaker::new(TiePolicy::default(), rng);
    evaluate(&RULES, ctx, Some(&mut breaker)).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "pre-launch-low-awareness",
        apply: |c| {
            (c.startup_stage.is_pre_launch()
                && matches!(
                    c.awareness_level,
                    AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
                ))
            .then_some(L::CenterStacked)
        },
    },
    HardRule {
        name: "enterprise-sales",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && matches!(
                    c.landing_page_goals,
                    LandingGoal::Demo | LandingGoal::ContactSales | LandingGoal::BookCall
                )
                && c.sophistication_at_least(4))
            .then_some(L::SplitScreen)
        },
    },
    HardRule {
        name: "visual-product-showcase",
        apply: |c| {
            (c.market_category == MarketCategory::DesignCreative
                && matches!(
                    c.awareness_level,
                    AwarenessLevel::ProductAware | AwarenessLevel::MostAware
                )
                && c.asset_present(Asset::ProductImages))
            .then_some(L::ImageFirst)
        },
    },
    HardRule {
        name: "technical-builders",
        apply: |c| {
            (c.target_audience == TargetAudience::Builders
                && c.tone_profile == ToneProfile::MinimalTechnical)
                .then_some(L::LeftCopyRightImage)
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
        awards: &[(L::CenterStacked, 5), (L::LeftCopyRightImage, 2)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::LeftCopyRightImage, 5), (L::SplitScreen, 3)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::ImageFirst, 5), (L::SplitScreen, 4)],
    },
    // Stage
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::CenterStacked, 4)],
    },
    ScoreFactor {
        name: "traction-or-growth",
        when: |c| {
            matches!(
                c.startup_stage,
                StartupStage::Traction | StartupStage::Growth
            )
        },
        awards: &[(L::LeftCopyRightImage, 3), (L::SplitScreen, 3)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::SplitScreen, 4), (L::ImageFirst, 3)],
    },
    // Audience
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::SplitScreen, 4), (L::LeftCopyRightImage, 3)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::LeftCopyRightImage, 4)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::ImageFirst, 4), (L::CenterStacked, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::CenterStacked, 3), (L::LeftCopyRightImage, 2)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::SplitScreen, 3), (L::ImageFirst, 2)],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::LeftCopyRightImage, 3)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::CenterStacked, 3)],
    },
    // Copy intent and tone
    ScoreFactor {
        name: "pain-led",
        when: |c| c.copy_intent == CopyIntent::PainLed,
        awards: &[(L::CenterStacked, 2)],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[(L::ImageFirst, 2)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::ImageFirst, 3), (L::CenterStacked, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::LeftCopyRightImage, 3)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::ImageFirst, 3), (L::SplitScreen, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::CenterStacked, 2), (L::LeftCopyRightImage, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::ImageFirst, 3), (L::SplitScreen, 2)],
    },
    // Category
    ScoreFactor {
        name: "design-category",
        when: |c| c.market_category == MarketCategory::DesignCreative,
        awards: &[(L::ImageFirst, 3)],
    },
    ScoreFactor {
        name: "technical-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::EngineeringDevelopment | MarketCategory::AiTools
            )
        },
        awards: &[(L::LeftCopyRightImage, 2), (L::SplitScreen, 1)],
    },
    ScoreFactor {
        name: "marketing-category",
        when: |c| c.market_category == MarketCategory::MarketingSales,
        awards: &[(L::SplitScreen, 2)],
    },
    ScoreFactor {
        name: "productivity-category",
        when: |c| c.market_category == MarketCategory::WorkProductivity,
        awards: &[(L::LeftCopyRightImage, 2)],
    },
    // Goal and pricing
    ScoreFactor {
        name: "direct-purchase",
        when: |c| matches!(c.landing_page_goals, LandingGoal::BuyNow | LandingGoal::Subscribe),
        awards: &[(L::ImageFirst, 2)],
    },
    ScoreFactor {
        name: "pre-launch-goal",
        when: |c| {
            matches!(
                c.landing_page_goals,
                LandingGoal::Waitlist | LandingGoal::EarlyAccess
            )
        },
        awards: &[(L::CenterStacked, 3)],
    },
    ScoreFactor {
        name: "trial-goal",
        when: |c| {
            matches!(
                c.landing_page_goals,
                LandingGoal::Demo | LandingGoal::FreeTrial | LandingGoal::Signup
            )
        },
        awards: &[(L::LeftCopyRightImage, 2), (L::SplitScreen, 1)],
    },
    ScoreFactor {
        name: "free-pricing",
        when: |c| matches!(c.pricing_model, PricingModel::Free | PricingModel::Freemium),
        awards: &[(L::CenterStacked, 1)],
    },
    ScoreFactor {
        name: "custom-quote",
        when: |c| c.pricing_model == PricingModel::CustomQuote,
        awards: &[(L::SplitScreen, 2)],
    },
];

const ASSET_ADJUSTMENTS: &[ScoreFactor<L>] = &[ScoreFactor {
    name: "no-product-images",
    when: |c| c.asset_missing(Asset::ProductImages),
    awards: &[
        (L::ImageFirst, -100),
        (L::LeftCopyRightImage, -50),
        (L::SplitScreen, -50),
        (L::CenterStacked, 20),
    ],
}];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use layoutpilot_shared::AssetAvailability;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::engine::DecisionSource;

    #[test]
    fn mvp_unaware_gets_center_stacked() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Mvp,
            awareness_level: AwarenessLevel::Unaware,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::CenterStacked);
    }

    fn image_first_context() -> BusinessContext {
        BusinessContext {
            awareness_level: AwarenessLevel::ProductAware,
            tone_profile: ToneProfile::BoldPersuasive,
            landing_page_goals: LandingGoal::BuyNow,
            target_audience: TargetAudience::Creators,
            ..Default::default()
        }
    }

    #[test]
    fn missing_images_push_image_first_below_center_stacked() {
        let ctx = image_first_context();
        assert_eq!(pick(&ctx), L::ImageFirst);

        let no_images = ctx.with_assets(AssetAvailability {
            product_images: false,
            ..AssetAvailability::all()
        });
        let scores = evaluate(&RULES, &no_images, None).scores.expect("scored");
        assert!(scores.get(L::ImageFirst) < scores.get(L::CenterStacked));
        assert_eq!(pick(&no_images), L::CenterStacked);
    }

    fn tied_context() -> BusinessContext {
        // imageFirst 10, splitScreen 11.
        BusinessContext {
            awareness_level: AwarenessLevel::ProductAware,
            startup_stage: StartupStage::Scale,
            target_audience: TargetAudience::Marketers,
            ..Default::default()
        }
    }

    #[test]
    fn deterministic_without_rng() {
        let ctx = tied_context();
        let decision = evaluate(&RULES, &ctx, None);
        assert_eq!(decision.layout, L::SplitScreen);
        assert_eq!(decision.source, DecisionSource::Scored);
    }

    #[test]
    fn near_ties_are_randomized_with_rng() {
        let ctx = tied_context();
        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(pick_with_rng(&ctx, &mut rng));
        }
        assert_eq!(seen, HashSet::from([L::SplitScreen, L::ImageFirst]));

        // Same seed, same answer.
        let a = pick_with_rng(&ctx, &mut StdRng::seed_from_u64(42));
        let b = pick_with_rng(&ctx, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn clear_winner_ignores_rng() {
        let ctx = image_first_context();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(pick_with_rng(&ctx, &mut rng), L::ImageFirst);
        }
    }
}
