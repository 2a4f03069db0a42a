//! Problem (agitation) section.

use layoutpilot_shared::catalog::ProblemLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, CopyIntent, FlowTone, MarketCategory, ProblemType,
    TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::StackedPainBullets,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "emotional-burnout",
        apply: |c| {
            (c.problem_type == ProblemType::BurnoutOrOverload
                && c.copy_intent == CopyIntent::PainLed
                && matches!(
                    c.awareness_level,
                    AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
                ))
            .then_some(L::EmotionalQuotes)
        },
    },
    HardRule {
        name: "multi-stakeholder",
        apply: |c| {
            (matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            ) && c.sophistication_at_least(4))
            .then_some(L::PersonaPanels)
        },
    },
    HardRule {
        name: "technical-skeptics",
        apply: |c| {
            (c.target_audience == TargetAudience::Builders
                && c.tone_profile == ToneProfile::MinimalTechnical)
                .then_some(L::CollapsedCards)
        },
    },
    HardRule {
        name: "visual-creatives",
        apply: |c| {
            (c.market_category == MarketCategory::DesignCreative
                && c.target_audience == TargetAudience::Creators
                && c.asset_present(Asset::ProductImages))
            .then_some(L::BeforeImageAfterText)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "pain-led",
        when: |c| c.copy_intent == CopyIntent::PainLed,
        awards: &[(L::StackedPainBullets, 5), (L::EmotionalQuotes, 4)],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[(L::BeforeImageAfterText, 4), (L::PersonaPanels, 3)],
    },
    ScoreFactor {
        name: "unaware",
        when: |c| c.awareness_level == AwarenessLevel::Unaware,
        awards: &[(L::EmotionalQuotes, 4), (L::StackedPainBullets, 3)],
    },
    ScoreFactor {
        name: "problem-aware",
        when: |c| c.awareness_level == AwarenessLevel::ProblemAware,
        awards: &[(L::StackedPainBullets, 4), (L::CollapsedCards, 2)],
    },
    ScoreFactor {
        name: "solution-aware",
        when: |c| c.awareness_level == AwarenessLevel::SolutionAware,
        awards: &[(L::CollapsedCards, 3), (L::PersonaPanels, 3)],
    },
    ScoreFactor {
        name: "high-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::ProductAware | AwarenessLevel::MostAware
            )
        },
        awards: &[(L::CollapsedCards, 4)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::EmotionalQuotes, 3)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::StackedPainBullets, 3)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::PersonaPanels, 4)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::CollapsedCards, 3)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::PersonaPanels, 2), (L::BeforeImageAfterText, 2)],
    },
    ScoreFactor {
        name: "burnout",
        when: |c| c.problem_type == ProblemType::BurnoutOrOverload,
        awards: &[(L::EmotionalQuotes, 3)],
    },
    ScoreFactor {
        name: "manual-repetition",
        when: |c| c.problem_type == ProblemType::ManualRepetition,
        awards: &[(L::StackedPainBullets, 3)],
    },
    ScoreFactor {
        name: "compliance",
        when: |c| c.problem_type == ProblemType::ComplianceOrRisk,
        awards: &[(L::CollapsedCards, 3)],
    },
    ScoreFactor {
        name: "lost-revenue",
        when: |c| c.problem_type == ProblemType::LostRevenueOrInefficiency,
        awards: &[(L::PersonaPanels, 2), (L::StackedPainBullets, 2)],
    },
    ScoreFactor {
        name: "professional-image",
        when: |c| c.problem_type == ProblemType::ProfessionalImageOrBranding,
        awards: &[(L::BeforeImageAfterText, 3)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::StackedPainBullets, 2), (L::EmotionalQuotes, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::EmotionalQuotes, 2)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::CollapsedCards, 2)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::PersonaPanels, 2)],
    },
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[(L::EmotionalQuotes, 3)],
    },
    ScoreFactor {
        name: "analytical-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Analytical),
        awards: &[(L::CollapsedCards, 3), (L::PersonaPanels, 2)],
    },
    ScoreFactor {
        name: "early-in-page",
        when: |c| c.position_at_most(3),
        awards: &[(L::StackedPainBullets, 2)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::MarketSophisticationLevel;

    use super::*;

    #[test]
    fn pain_led_burnout_gets_emotional_quotes() {
        let ctx = BusinessContext {
            problem_type: ProblemType::BurnoutOrOverload,
            copy_intent: CopyIntent::PainLed,
            awareness_level: AwarenessLevel::Unaware,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::EmotionalQuotes);
    }

    #[test]
    fn sophisticated_organizations_get_persona_panels() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Businesses,
            market_sophistication_level: MarketSophisticationLevel::Level4,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::PersonaPanels);
    }

    #[test]
    fn pain_led_founders_get_bullets() {
        // bullets 5 + 4 + 3 = 12, quotes 4.
        let ctx = BusinessContext {
            copy_intent: CopyIntent::PainLed,
            awareness_level: AwarenessLevel::ProblemAware,
            target_audience: TargetAudience::Founders,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::StackedPainBullets);
    }
}
