//! Objection handling section.

use layoutpilot_shared::catalog::ObjectionHandlingLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, CopyIntent, FlowTone, Friction,
    MarketSophisticationLevel as Level, PricingModifier, SectionType, StartupStage, TargetAudience,
    ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::ObjectionAccordion,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "bold-guarantee",
        apply: |c| {
            (c.pricing_modifier == Some(PricingModifier::MoneyBack)
                && c.tone_profile == ToneProfile::BoldPersuasive)
                .then_some(L::BoldGuaranteePanel)
        },
    },
    HardRule {
        name: "jaded-market",
        apply: |c| {
            (c.market_sophistication_level == Level::Level5
                && matches!(
                    c.awareness_level,
                    AwarenessLevel::SolutionAware
                        | AwarenessLevel::ProductAware
                        | AwarenessLevel::MostAware
                ))
            .then_some(L::SkepticToBelieverSteps)
        },
    },
    HardRule {
        name: "enterprise-diligence",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise && c.sophistication_at_least(4))
                .then_some(L::ObjectionAccordion)
        },
    },
    HardRule {
        name: "new-category",
        apply: |c| {
            (c.awareness_level == AwarenessLevel::Unaware && c.sophistication_at_most(2))
                .then_some(L::MythVsRealityGrid)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "high-friction",
        when: |c| c.pricing_model.friction() == Some(Friction::High),
        awards: &[(L::ObjectionAccordion, 4), (L::QuoteBackedAnswers, 3)],
    },
    ScoreFactor {
        name: "low-friction",
        when: |c| {
            matches!(
                c.pricing_model.friction(),
                Some(Friction::Frictionless | Friction::Low)
            )
        },
        awards: &[(L::VisualObjectionTiles, 3), (L::MythVsRealityGrid, 2)],
    },
    ScoreFactor {
        name: "money-back",
        when: |c| c.pricing_modifier == Some(PricingModifier::MoneyBack),
        awards: &[(L::BoldGuaranteePanel, 5)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::ProblemToReframeBlocks, 4), (L::MythVsRealityGrid, 3)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::ObjectionAccordion, 3), (L::QuoteBackedAnswers, 3)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::QuoteBackedAnswers, 3), (L::SkepticToBelieverSteps, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::SkepticToBelieverSteps, 3), (L::QuoteBackedAnswers, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::ObjectionAccordion, 3)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::VisualObjectionTiles, 3)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::ProblemToReframeBlocks, 2), (L::QuoteBackedAnswers, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::MythVsRealityGrid, 3)],
    },
    ScoreFactor {
        name: "pain-led",
        when: |c| c.copy_intent == CopyIntent::PainLed,
        awards: &[(L::ProblemToReframeBlocks, 2)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::BoldGuaranteePanel, 2), (L::MythVsRealityGrid, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::ObjectionAccordion, 2), (L::VisualObjectionTiles, 1)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::ObjectionAccordion, 2)],
    },
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::MythVsRealityGrid, 2)],
    },
    ScoreFactor {
        name: "established",
        when: |c| matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale),
        awards: &[(L::QuoteBackedAnswers, 2)],
    },
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[(L::ProblemToReframeBlocks, 2)],
    },
    ScoreFactor {
        name: "after-faq",
        when: |c| c.previous_is(SectionType::Faq),
        awards: &[(L::ObjectionAccordion, -4)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{FlowContext, PreviousSection, PricingModel};

    use super::*;

    #[test]
    fn money_back_with_bold_tone_leads_with_guarantee() {
        let ctx = BusinessContext {
            pricing_modifier: Some(PricingModifier::MoneyBack),
            tone_profile: ToneProfile::BoldPersuasive,
            target_audience: TargetAudience::Enterprise,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::BoldGuaranteePanel);
    }

    #[test]
    fn avoids_second_accordion_after_faq() {
        // accordion 4 + 3 = 7 against quotes 3 + 3 = 6.
        let ctx = BusinessContext {
            pricing_model: PricingModel::CustomQuote,
            target_audience: TargetAudience::Businesses,
            awareness_level: AwarenessLevel::ProductAware,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::ObjectionAccordion);

        let after_faq = ctx.with_flow(FlowContext {
            previous_section: Some(PreviousSection::of(SectionType::Faq)),
            ..Default::default()
        });
        assert_eq!(pick(&after_faq), L::QuoteBackedAnswers);
    }
}
