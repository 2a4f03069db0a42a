//! FAQ section.

use layoutpilot_shared::catalog::FaqLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, FlowComplexity, Friction, MarketCategory, SectionType,
    TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::AccordionFaq,
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
                .then_some(L::SegmentedFaqTabs)
        },
    },
    HardRule {
        name: "short-pre-launch-page",
        apply: |c| {
            (c.flow_complexity() == Some(FlowComplexity::Simple)
                && c.startup_stage.is_pre_launch())
            .then_some(L::InlineQnAList)
        },
    },
    HardRule {
        name: "support-product",
        apply: |c| {
            (c.market_category == MarketCategory::CustomerSupport).then_some(L::ChatBubbleFaq)
        },
    },
    HardRule {
        name: "social-audience",
        apply: |c| {
            (matches!(
                c.target_audience,
                TargetAudience::Creators | TargetAudience::Community
            ) && c.asset_present(Asset::Testimonials))
            .then_some(L::TestimonialFaqs)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "high-friction",
        when: |c| c.pricing_model.friction() == Some(Friction::High),
        awards: &[(L::AccordionFaq, 4), (L::SegmentedFaqTabs, 3)],
    },
    ScoreFactor {
        name: "low-friction",
        when: |c| {
            matches!(
                c.pricing_model.friction(),
                Some(Friction::Frictionless | Friction::Low)
            )
        },
        awards: &[(L::InlineQnAList, 3), (L::TwoColumnFaq, 2)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::IconWithAnswers, 3), (L::InlineQnAList, 2)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::AccordionFaq, 3), (L::TwoColumnFaq, 2)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::TwoColumnFaq, 3), (L::QuoteStyleAnswers, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::SegmentedFaqTabs, 4), (L::AccordionFaq, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::TwoColumnFaq, 3), (L::AccordionFaq, 2)],
    },
    ScoreFactor {
        name: "creators-or-community",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Creators | TargetAudience::Community
            )
        },
        awards: &[(L::ChatBubbleFaq, 3), (L::TestimonialFaqs, 3)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::QuoteStyleAnswers, 3), (L::AccordionFaq, 2)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::ChatBubbleFaq, 3), (L::IconWithAnswers, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::ChatBubbleFaq, 2), (L::IconWithAnswers, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::AccordionFaq, 2), (L::TwoColumnFaq, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::QuoteStyleAnswers, 3)],
    },
    ScoreFactor {
        name: "simple-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Simple),
        awards: &[(L::InlineQnAList, 3)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::SegmentedFaqTabs, 2), (L::AccordionFaq, 1)],
    },
    ScoreFactor {
        name: "after-objections",
        when: |c| c.previous_is(SectionType::ObjectionHandling),
        awards: &[(L::AccordionFaq, -4)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{FlowContext, MarketSophisticationLevel, PreviousSection};

    use super::*;

    #[test]
    fn support_tools_answer_in_chat_bubbles() {
        let ctx = BusinessContext {
            market_category: MarketCategory::CustomerSupport,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::ChatBubbleFaq);
    }

    #[test]
    fn enterprise_gets_segmented_tabs() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Enterprise,
            market_sophistication_level: MarketSophisticationLevel::Level4,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::SegmentedFaqTabs);
    }

    #[test]
    fn follows_objections_with_a_different_layout() {
        // accordion 3 + 2 = 5, two-column 2 + 3 = 5; accordion is declared first.
        let ctx = BusinessContext {
            awareness_level: AwarenessLevel::SolutionAware,
            target_audience: TargetAudience::Builders,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::AccordionFaq);

        let after = ctx.with_flow(FlowContext {
            previous_section: Some(PreviousSection::of(SectionType::ObjectionHandling)),
            ..Default::default()
        });
        assert_eq!(pick(&after), L::TwoColumnFaq);
    }
}
