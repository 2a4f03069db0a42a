//! Flow context generation: position-dependent metadata for each section.

use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, CopyIntent, FlowComplexity, FlowContext, FlowTone,
    NextSection, PreviousSection, SectionPurpose, SectionType, TargetAudience, ToneProfile,
};

use crate::classify::{classify_density, classify_tone};

/// Type an adjacent section is treated as when its id does not resolve.
const UNKNOWN_ADJACENT_TYPE: SectionType = SectionType::Features;

/// Pages this short or shorter read as simple regardless of the audience.
const SHORT_PAGE_MAX: usize = 6;

/// Pages this long or longer read as detailed regardless of the audience.
const LONG_PAGE_MIN: usize = 10;

fn resolve_or_default(section_id: &str) -> SectionType {
    SectionType::from_id(section_id).unwrap_or(UNKNOWN_ADJACENT_TYPE)
}

/// Page-level tone: analytical cues win over emotional ones.
pub fn determine_flow_tone(ctx: &BusinessContext) -> FlowTone {
    let analytical = matches!(
        ctx.target_audience,
        TargetAudience::Enterprise | TargetAudience::Builders
    ) || ctx.market_sophistication_level.rank() == Some(5)
        || matches!(
            ctx.tone_profile,
            ToneProfile::MinimalTechnical | ToneProfile::LuxuryExpert
        );
    if analytical {
        return FlowTone::Analytical;
    }

    let emotional = ctx.copy_intent == CopyIntent::PainLed
        || matches!(
            ctx.tone_profile,
            ToneProfile::ConfidentPlayful | ToneProfile::BoldPersuasive
        )
        || matches!(
            ctx.awareness_level,
            AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
        )
        || ctx.target_audience == TargetAudience::Creators;
    if emotional {
        return FlowTone::Emotional;
    }

    FlowTone::Balanced
}

/// Page-level complexity. Page length decides first, then the audience.
pub fn determine_flow_complexity(ctx: &BusinessContext, total_sections: usize) -> FlowComplexity {
    if total_sections <= SHORT_PAGE_MAX {
        return FlowComplexity::Simple;
    }
    if total_sections >= LONG_PAGE_MIN {
        return FlowComplexity::Detailed;
    }
    if ctx.awareness_level == AwarenessLevel::MostAware || ctx.sophistication_at_most(2) {
        return FlowComplexity::Simple;
    }
    if ctx.sophistication_at_least(4) || ctx.target_audience == TargetAudience::Enterprise {
        return FlowComplexity::Detailed;
    }
    FlowComplexity::Balanced
}

/// Flow metadata for the section at `index` (zero-based) of `sections`.
///
/// `previous_layout` is the layout already chosen for the preceding section,
/// if the caller threads it; its tone and density are derived here.
pub fn generate_flow_context<S: AsRef<str>>(
    sections: &[S],
    index: usize,
    ctx: &BusinessContext,
    previous_layout: Option<&str>,
) -> FlowContext {
    let total = sections.len();
    let current = sections
        .get(index)
        .map_or(UNKNOWN_ADJACENT_TYPE, |id| resolve_or_default(id.as_ref()));

    let previous_section = index
        .checked_sub(1)
        .and_then(|prev| sections.get(prev))
        .map(|id| {
            let mut previous = PreviousSection::of(resolve_or_default(id.as_ref()));
            if let Some(layout) = previous_layout {
                previous.layout = Some(layout.to_string());
                previous.tone = Some(classify_tone(layout));
                previous.density = Some(classify_density(layout));
            }
            previous
        });

    let next_section = sections.get(index + 1).map(|id| {
        let section_type = resolve_or_default(id.as_ref());
        NextSection {
            section_type,
            purpose: Some(SectionPurpose::of(section_type)),
        }
    });

    FlowContext {
        section_purpose: Some(SectionPurpose::of(current)),
        position_in_flow: Some(index + 1),
        total_sections_in_flow: Some(total),
        previous_section,
        next_section,
        flow_tone: Some(determine_flow_tone(ctx)),
        flow_complexity: Some(determine_flow_complexity(ctx, total)),
    }
}

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{LayoutDensity, LayoutTone, MarketSophisticationLevel};

    use super::*;

    fn ctx() -> BusinessContext {
        BusinessContext {
            awareness_level: AwarenessLevel::SolutionAware,
            tone_profile: ToneProfile::FriendlyHelpful,
            market_sophistication_level: MarketSophisticationLevel::Level3,
            copy_intent: CopyIntent::DesireLed,
            target_audience: TargetAudience::Marketers,
            ..Default::default()
        }
    }

    #[test]
    fn tone_cascade() {
        assert_eq!(determine_flow_tone(&ctx()), FlowTone::Balanced);

        let pain = BusinessContext {
            copy_intent: CopyIntent::PainLed,
            ..ctx()
        };
        assert_eq!(determine_flow_tone(&pain), FlowTone::Emotional);

        // Analytical cues win even when emotional cues are present.
        let builders = BusinessContext {
            target_audience: TargetAudience::Builders,
            ..pain.clone()
        };
        assert_eq!(determine_flow_tone(&builders), FlowTone::Analytical);

        let saturated = BusinessContext {
            market_sophistication_level: MarketSophisticationLevel::Level5,
            ..ctx()
        };
        assert_eq!(determine_flow_tone(&saturated), FlowTone::Analytical);

        assert_eq!(
            determine_flow_tone(&BusinessContext::default()),
            FlowTone::Balanced
        );
    }

    #[test]
    fn complexity_counts_come_first() {
        let enterprise = BusinessContext {
            target_audience: TargetAudience::Enterprise,
            ..ctx()
        };
        assert_eq!(determine_flow_complexity(&enterprise, 5), FlowComplexity::Simple);

        let most_aware = BusinessContext {
            awareness_level: AwarenessLevel::MostAware,
            ..ctx()
        };
        assert_eq!(determine_flow_complexity(&most_aware, 12), FlowComplexity::Detailed);
    }

    #[test]
    fn complexity_from_audience_for_mid_length_pages() {
        assert_eq!(determine_flow_complexity(&ctx(), 8), FlowComplexity::Balanced);

        let naive = BusinessContext {
            market_sophistication_level: MarketSophisticationLevel::Level2,
            ..ctx()
        };
        assert_eq!(determine_flow_complexity(&naive, 8), FlowComplexity::Simple);

        let crowded = BusinessContext {
            market_sophistication_level: MarketSophisticationLevel::Level4,
            ..ctx()
        };
        assert_eq!(determine_flow_complexity(&crowded, 8), FlowComplexity::Detailed);
    }

    #[test]
    fn flow_context_for_middle_section() {
        let sections = ["hero-1", "problem-2", "features-3", "cta-4", "footer-5"];
        let flow = generate_flow_context(&sections, 2, &ctx(), None);

        assert_eq!(flow.section_purpose, Some(SectionPurpose::Demonstrate));
        assert_eq!(flow.position_in_flow, Some(3));
        assert_eq!(flow.total_sections_in_flow, Some(5));
        assert_eq!(flow.flow_complexity, Some(FlowComplexity::Simple));

        let prev = flow.previous_section.expect("previous section");
        assert_eq!(prev.section_type, SectionType::Problem);
        assert_eq!(prev.layout, None);

        let next = flow.next_section.expect("next section");
        assert_eq!(next.section_type, SectionType::Cta);
        assert_eq!(next.purpose, Some(SectionPurpose::Convert));
    }

    #[test]
    fn threaded_previous_layout_is_classified() {
        let sections = ["problem", "beforeAfter"];
        let flow = generate_flow_context(&sections, 1, &ctx(), Some("EmotionalQuotes"));
        let prev = flow.previous_section.expect("previous section");
        assert_eq!(prev.layout.as_deref(), Some("EmotionalQuotes"));
        assert_eq!(prev.tone, Some(LayoutTone::Emotional));
        assert_eq!(prev.density, Some(LayoutDensity::Medium));
    }

    #[test]
    fn edges_and_unknown_adjacent_types() {
        let sections = ["hero", "announcement-9"];
        let first = generate_flow_context(&sections, 0, &ctx(), Some("ignored"));
        assert!(first.previous_section.is_none());
        assert_eq!(
            first.next_section.map(|next| next.section_type),
            Some(SectionType::Features)
        );

        let last = generate_flow_context(&sections, 1, &ctx(), None);
        assert!(last.next_section.is_none());
        assert_eq!(last.position_in_flow, Some(2));
    }
}
