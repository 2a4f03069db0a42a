use layoutpilot_shared::catalog::FounderNoteLayout as L;
use layoutpilot_shared::{
    Asset, AwarenessLevel, BusinessContext, CopyIntent, FlowTone, ProblemType, StartupStage,
    TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::LetterStyleBlock,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "creator-video",
        apply: |c| {
            (c.target_audience == TargetAudience::Creators && c.asset_present(Asset::DemoVideo))
                .then_some(L::VideoNoteWithTranscript)
        },
    },
    HardRule {
        name: "community-mission",
        apply: |c| {
            (c.target_audience == TargetAudience::Community
                && c.copy_intent == CopyIntent::DesireLed)
                .then_some(L::MissionQuoteOverlay)
        },
    },
    HardRule {
        name: "founder-journey",
        apply: |c| {
            (c.target_audience == TargetAudience::Founders
                && matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale)
                && c.sophistication_at_least(3))
            .then_some(L::TimelineToToday)
        },
    },
    HardRule {
        name: "personal-origin",
        apply: |c| {
            (c.asset_present(Asset::FounderPhoto)
                && c.startup_stage.is_pre_launch()
                && c.copy_intent == CopyIntent::PainLed)
                .then_some(L::SideBySidePhotoStory)
        },
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "pre-launch",
        when: |c| c.startup_stage.is_pre_launch(),
        awards: &[(L::LetterStyleBlock, 4), (L::FoundersBeliefStack, 3)],
    },
    ScoreFactor {
        name: "traction",
        when: |c| c.startup_stage == StartupStage::Traction,
        awards: &[(L::FounderCardWithQuote, 4), (L::StoryBlockWithPullquote, 2)],
    },
    ScoreFactor {
        name: "established",
        when: |c| matches!(c.startup_stage, StartupStage::Growth | StartupStage::Scale),
        awards: &[(L::TimelineToToday, 4), (L::MissionQuoteOverlay, 2)],
    },
    ScoreFactor {
        name: "founders",
        when: |c| c.target_audience == TargetAudience::Founders,
        awards: &[(L::LetterStyleBlock, 3), (L::SideBySidePhotoStory, 2)],
    },
    ScoreFactor {
        name: "creators",
        when: |c| c.target_audience == TargetAudience::Creators,
        awards: &[(L::VideoNoteWithTranscript, 3), (L::StoryBlockWithPullquote, 2)],
    },
    ScoreFactor {
        name: "community",
        when: |c| c.target_audience == TargetAudience::Community,
        awards: &[(L::MissionQuoteOverlay, 4), (L::FoundersBeliefStack, 2)],
    },
    ScoreFactor {
        name: "organizations",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Enterprise | TargetAudience::Businesses
            )
        },
        awards: &[(L::FounderCardWithQuote, 4)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::FoundersBeliefStack, 3), (L::LetterStyleBlock, 1)],
    },
    ScoreFactor {
        name: "pain-led",
        when: |c| c.copy_intent == CopyIntent::PainLed,
        awards: &[(L::SideBySidePhotoStory, 3), (L::StoryBlockWithPullquote, 2)],
    },
    ScoreFactor {
        name: "desire-led",
        when: |c| c.copy_intent == CopyIntent::DesireLed,
        awards: &[(L::MissionQuoteOverlay, 3), (L::FoundersBeliefStack, 2)],
    },
    ScoreFactor {
        name: "burnout",
        when: |c| c.problem_type == ProblemType::BurnoutOrOverload,
        awards: &[(L::LetterStyleBlock, 2)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::StoryBlockWithPullquote, 2)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::LetterStyleBlock, 3)],
    },
    ScoreFactor {
        name: "luxury-expert",
        when: |c| c.tone_profile == ToneProfile::LuxuryExpert,
        awards: &[(L::FounderCardWithQuote, 3)],
    },
    ScoreFactor {
        name: "bold-persuasive",
        when: |c| c.tone_profile == ToneProfile::BoldPersuasive,
        awards: &[(L::FoundersBeliefStack, 3)],
    },
    ScoreFactor {
        name: "confident-playful",
        when: |c| c.tone_profile == ToneProfile::ConfidentPlayful,
        awards: &[(L::VideoNoteWithTranscript, 2), (L::StoryBlockWithPullquote, 1)],
    },
    ScoreFactor {
        name: "emotional-flow",
        when: |c| c.flow_tone() == Some(FlowTone::Emotional),
        awards: &[(L::SideBySidePhotoStory, 2), (L::LetterStyleBlock, 1)],
    },
];

#[cfg(test)]
mod tests {
    use layoutpilot_shared::AssetAvailability;

    use super::*;

    #[test]
    fn pre_launch_founder_with_photo_tells_origin_story() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Idea,
            copy_intent: CopyIntent::PainLed,
            ..Default::default()
        }
        .with_assets(AssetAvailability::all());
        assert_eq!(pick(&ctx), L::SideBySidePhotoStory);
    }

    #[test]
    fn businesses_get_founder_card() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Businesses,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::FounderCardWithQuote);

        let bare = ctx.with_assets(AssetAvailability::default());
        assert_eq!(pick(&bare), L::FounderCardWithQuote);
    }
}
