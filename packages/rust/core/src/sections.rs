//! Section sequence builder.
//!
//! Derives which sections a page should carry, and in what order, from the
//! objections its visitors bring. Awareness and market sophistication select
//! a base flow; stage, goal and audience then swap, add and drop sections
//! before the list is capped and put in page order. Header and footer frame
//! the result.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use layoutpilot_shared::{BusinessContext, LandingGoal, SectionType};

use SectionType::{
    BeforeAfter, ComparisonTable, Cta, Faq, Features, FounderNote, Hero, HowItWorks, Integrations,
    ObjectionHandling, Pricing, Problem, Results, Security, SocialProof, Testimonials,
    UniqueMechanism, UseCases,
};

/// Most content sections a generated page carries, header and footer aside.
pub const SECTION_CAP: usize = 8;

// ---------------------------------------------------------------------------
// Base flows
// ---------------------------------------------------------------------------

/// A base section order for one awareness + sophistication combination.
struct ObjectionFlow {
    awareness: &'static str,
    level: u8,
    sections: &'static [SectionType],
    profile: &'static str,
    reasoning: &'static str,
}

static FLOWS: &[ObjectionFlow] = &[
    ObjectionFlow {
        awareness: "unaware",
        level: 2,
        sections: &[Hero, Problem, BeforeAfter, HowItWorks, Results, Cta],
        profile: "unaware visitors in an emerging market",
        reasoning: "new problem with few solutions: educate, then show basic proof",
    },
    ObjectionFlow {
        awareness: "problem-aware",
        level: 2,
        sections: &[Hero, Problem, Features, HowItWorks, Results, Testimonials, Cta],
        profile: "problem-aware visitors in an early market",
        reasoning: "known problem with few solutions: explain the solution with social proof",
    },
    ObjectionFlow {
        awareness: "problem-aware",
        level: 3,
        sections: &[Hero, UniqueMechanism, Features, ComparisonTable, Results, Testimonials, Cta],
        profile: "problem-aware visitors in a competitive market",
        reasoning: "known problem in a crowded market: lead with differentiation",
    },
    ObjectionFlow {
        awareness: "problem-aware",
        level: 4,
        sections: &[
            Hero,
            Problem,
            Results,
            Testimonials,
            UniqueMechanism,
            ObjectionHandling,
            Cta,
        ],
        profile: "problem-aware visitors in a skeptical market",
        reasoning: "known problem, skeptical market: heavy proof and objection handling",
    },
    ObjectionFlow {
        awareness: "solution-aware",
        level: 2,
        sections: &[Hero, UniqueMechanism, Features, HowItWorks, Results, Cta],
        profile: "solution-aware early adopters",
        reasoning: "solutions are emerging: show the approach and its capabilities",
    },
    ObjectionFlow {
        awareness: "solution-aware",
        level: 3,
        sections: &[Hero, UniqueMechanism, ComparisonTable, Features, Results, Testimonials, Cta],
        profile: "solution-aware comparison shoppers",
        reasoning: "visitors compare alternatives: emphasize differentiation",
    },
    ObjectionFlow {
        awareness: "solution-aware",
        level: 4,
        sections: &[
            Hero,
            SocialProof,
            Results,
            ComparisonTable,
            Testimonials,
            ObjectionHandling,
            UniqueMechanism,
            Cta,
        ],
        profile: "solution-aware sophisticated buyers",
        reasoning: "sophisticated comparison: credibility first, extensive proof",
    },
    ObjectionFlow {
        awareness: "product-aware",
        level: 4,
        sections: &[
            Hero,
            SocialProof,
            Security,
            Integrations,
            Results,
            Pricing,
            ObjectionHandling,
            Cta,
        ],
        profile: "product-aware enterprise buyers",
        reasoning: "enterprise evaluation: trust, implementation and investment concerns",
    },
    ObjectionFlow {
        awareness: "most-aware",
        level: 3,
        sections: &[Hero, Pricing, Testimonials, ObjectionHandling, Cta],
        profile: "most-aware warm prospects",
        reasoning: "warm leads need the offer, proof and risk reversal",
    },
];

/// Combinations without their own flow borrow a neighbour's.
static FLOW_REDIRECTS: &[((&str, u8), (&str, u8))] = &[
    (("unaware", 1), ("unaware", 2)),
    (("unaware", 3), ("problem-aware", 3)),
    (("unaware", 4), ("problem-aware", 4)),
    (("unaware", 5), ("problem-aware", 4)),
    (("problem-aware", 1), ("problem-aware", 2)),
    (("problem-aware", 5), ("problem-aware", 4)),
    (("solution-aware", 1), ("solution-aware", 2)),
    (("solution-aware", 5), ("solution-aware", 4)),
    (("product-aware", 1), ("solution-aware", 2)),
    (("product-aware", 2), ("solution-aware", 3)),
    (("product-aware", 3), ("solution-aware", 4)),
    (("product-aware", 5), ("product-aware", 4)),
    (("most-aware", 1), ("most-aware", 3)),
    (("most-aware", 2), ("most-aware", 3)),
    (("most-aware", 4), ("most-aware", 3)),
    (("most-aware", 5), ("most-aware", 3)),
];

fn flow_for(awareness: &str, level: u8) -> Option<&'static ObjectionFlow> {
    FLOWS
        .iter()
        .find(|flow| flow.awareness == awareness && flow.level == level)
}

fn base_flow(ctx: &BusinessContext) -> &'static ObjectionFlow {
    let awareness = ctx.awareness_level.as_str();
    let level = ctx.market_sophistication_level.rank();

    let found = level.and_then(|level| {
        flow_for(awareness, level).or_else(|| {
            FLOW_REDIRECTS
                .iter()
                .find(|(from, _)| *from == (awareness, level))
                .and_then(|(_, (to_awareness, to_level))| flow_for(to_awareness, *to_level))
        })
    });

    found.unwrap_or_else(|| {
        warn!(
            awareness,
            sophistication = ctx.market_sophistication_level.as_str(),
            "no objection flow for context, using problem-aware level-3"
        );
        // problem-aware, level 3
        &FLOWS[2]
    })
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Sections a stage cannot support yet, with what to show instead.
fn stage_swaps(stage_id: &str) -> &'static [(SectionType, SectionType)] {
    match stage_id {
        "pre-mvp" | "problem-exploration" | "idea" => &[
            (Testimonials, FounderNote),
            (Pricing, Problem),
            (Results, BeforeAfter),
        ],
        "mvp-development" | "mvp" => &[(Testimonials, FounderNote), (Pricing, Features)],
        "mvp-launched" => &[(Pricing, Features)],
        _ => &[],
    }
}

/// A section a modifier adds, optionally placed right after an anchor.
struct Addition {
    section: SectionType,
    after: Option<SectionType>,
}

const fn add(section: SectionType) -> Addition {
    Addition {
        section,
        after: None,
    }
}

const fn add_after(section: SectionType, anchor: SectionType) -> Addition {
    Addition {
        section,
        after: Some(anchor),
    }
}

fn goal_additions(goal: &LandingGoal) -> &'static [Addition] {
    const PURCHASE: &[Addition] = &[add_after(Pricing, Features)];
    const SALES: &[Addition] = &[
        add_after(Security, Features),
        add_after(Integrations, Security),
    ];
    const CALL: &[Addition] = &[add(Results), add_after(ObjectionHandling, Results)];
    const WAITLIST: &[Addition] = &[add(SocialProof), add_after(FounderNote, Problem)];
    const EARLY_ACCESS: &[Addition] = &[add(SocialProof), add_after(FounderNote, UniqueMechanism)];

    match goal {
        LandingGoal::BuyNow | LandingGoal::Subscribe => PURCHASE,
        LandingGoal::ContactSales => SALES,
        LandingGoal::BookCall => CALL,
        LandingGoal::Waitlist => WAITLIST,
        LandingGoal::EarlyAccess => EARLY_ACCESS,
        _ => &[],
    }
}

/// Audience additions, keyed on a fragment of the audience id.
static AUDIENCE_ADDITIONS: &[(&str, &[SectionType])] = &[
    ("founder", &[FounderNote]),
    ("enterprise", &[Security, Integrations]),
    ("developer", &[Integrations, HowItWorks]),
    ("marketer", &[Results, UseCases]),
];

fn audience_additions(audience_id: &str) -> &'static [SectionType] {
    AUDIENCE_ADDITIONS
        .iter()
        .find(|(fragment, _)| audience_id.contains(fragment))
        .map(|(_, sections)| *sections)
        .unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Section cap
// ---------------------------------------------------------------------------

/// Priority tier (1 is most important) and the visitor profiles a section
/// serves. `"all"` matches every profile.
fn priority(section: SectionType) -> Option<(i32, &'static [&'static str])> {
    let entry: (i32, &'static [&'static str]) = match section {
        Hero | Cta => (1, &["all"]),
        ObjectionHandling => (1, &["skeptical", "enterprise"]),
        Problem => (1, &["unaware", "problem-aware"]),
        UniqueMechanism | ComparisonTable => (2, &["competitive"]),
        Results => (2, &["skeptical", "enterprise"]),
        Testimonials => (2, &["skeptical"]),
        SocialProof => (2, &["enterprise", "skeptical"]),
        Features => (2, &["feature-focused"]),
        Pricing => (2, &["ready-to-buy"]),
        Security => (3, &["enterprise"]),
        Integrations => (3, &["enterprise", "technical"]),
        HowItWorks => (3, &["unaware", "technical"]),
        UseCases => (3, &["business-focused"]),
        FounderNote => (4, &["early-stage", "founders"]),
        Faq => (4, &["all"]),
        BeforeAfter => (4, &["visual-focused"]),
        _ => return None,
    };
    Some(entry)
}

/// Visitor profiles the context implies.
fn visitor_profiles(ctx: &BusinessContext) -> Vec<&'static str> {
    let mut profiles = Vec::new();
    match ctx.awareness_level.as_str() {
        "unaware" => profiles.push("unaware"),
        "problem-aware" => profiles.push("problem-aware"),
        _ => {}
    }
    if ctx.sophistication_at_least(4) {
        profiles.push("skeptical");
    }
    if matches!(ctx.market_sophistication_level.rank(), Some(3 | 4)) {
        profiles.push("competitive");
    }
    match ctx.landing_page_goals {
        LandingGoal::ContactSales | LandingGoal::BookCall => profiles.push("enterprise"),
        LandingGoal::BuyNow | LandingGoal::Subscribe => profiles.push("ready-to-buy"),
        _ => {}
    }

    let audience = ctx.audience_id();
    if audience.contains("enterprise") {
        profiles.push("enterprise");
    }
    if audience.contains("founder") {
        profiles.push("founders");
    }
    if audience.contains("developer") {
        profiles.push("technical");
    }
    if matches!(ctx.stage_id(), "pre-mvp" | "mvp-development" | "idea" | "mvp") {
        profiles.push("early-stage");
    }
    profiles
}

fn section_score(section: SectionType, profiles: &[&str]) -> i32 {
    let Some((tier, serves)) = priority(section) else {
        return 0;
    };
    let matches = serves
        .iter()
        .filter(|profile| **profile == "all" || profiles.contains(*profile))
        .count() as i32;
    (5 - tier) * 10 + matches * 5
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The generated section list and the base flow it grew from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSequence {
    /// Base flow key, `awareness+level-N`.
    pub flow: String,
    pub profile: &'static str,
    pub reasoning: &'static str,
    /// Sections in page order, header first and footer last.
    pub sections: Vec<SectionType>,
    /// Sections dropped by the cap, highest priority first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<SectionType>,
}

impl SectionSequence {
    /// Section ids ready for [`LayoutEngine::plan`](crate::LayoutEngine::plan).
    pub fn ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.as_str().to_string()).collect()
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn push_unique(sections: &mut Vec<SectionType>, section: SectionType) {
    if !sections.contains(&section) {
        sections.push(section);
    }
}

/// Build the page's section list from its business context.
#[instrument(skip_all, fields(
    awareness = ctx.awareness_level.as_str(),
    sophistication = ctx.market_sophistication_level.as_str(),
))]
pub fn build_sections(ctx: &BusinessContext) -> SectionSequence {
    let flow = base_flow(ctx);
    debug!(awareness = flow.awareness, level = flow.level, "selected base flow");

    // Stage swaps, dropping any duplicate a swap creates.
    let swaps = stage_swaps(ctx.stage_id());
    let mut sections = Vec::with_capacity(SECTION_CAP + 4);
    for section in flow.sections {
        let section = swaps
            .iter()
            .find(|(from, _)| from == section)
            .map_or(*section, |(_, to)| *to);
        push_unique(&mut sections, section);
    }

    for addition in goal_additions(&ctx.landing_page_goals) {
        if sections.contains(&addition.section) {
            continue;
        }
        let anchor = addition
            .after
            .and_then(|anchor| sections.iter().position(|s| *s == anchor));
        match anchor {
            Some(index) => sections.insert(index + 1, addition.section),
            None => sections.push(addition.section),
        }
    }

    for section in audience_additions(ctx.audience_id()) {
        push_unique(&mut sections, *section);
    }

    // Pages without dedicated objection handling answer questions in a FAQ.
    if !sections.contains(&Faq) && !sections.contains(&ObjectionHandling) {
        match sections.iter().position(|s| *s == Cta) {
            Some(index) => sections.insert(index, Faq),
            None => sections.push(Faq),
        }
    }

    let mut dropped = Vec::new();
    if sections.len() > SECTION_CAP {
        let profiles = visitor_profiles(ctx);
        debug!(?profiles, count = sections.len(), "capping section list");
        sections.sort_by_key(|section| std::cmp::Reverse(section_score(*section, &profiles)));
        dropped = sections.split_off(SECTION_CAP);
    }

    sections.sort();
    sections.insert(0, SectionType::Header);
    sections.push(SectionType::Footer);

    SectionSequence {
        flow: format!("{}+level-{}", flow.awareness, flow.level),
        profile: flow.profile,
        reasoning: flow.reasoning,
        sections,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use layoutpilot_shared::{AwarenessLevel, MarketSophisticationLevel, TargetAudience};

    use super::*;

    fn ctx(awareness: AwarenessLevel, level: MarketSophisticationLevel) -> BusinessContext {
        BusinessContext {
            awareness_level: awareness,
            market_sophistication_level: level,
            ..Default::default()
        }
    }

    #[test]
    fn base_flow_gets_faq_and_frame() {
        let seq = build_sections(&ctx(AwarenessLevel::Unaware, MarketSophisticationLevel::Level2));
        assert_eq!(seq.flow, "unaware+level-2");
        assert_eq!(
            seq.sections,
            vec![
                SectionType::Header,
                Hero,
                Problem,
                BeforeAfter,
                HowItWorks,
                Results,
                Faq,
                Cta,
                SectionType::Footer,
            ]
        );
        assert!(seq.dropped.is_empty());
        assert_eq!(seq.ids()[0], "header");
    }

    #[test]
    fn objection_handling_replaces_faq() {
        let warm = ctx(AwarenessLevel::MostAware, MarketSophisticationLevel::Level3);
        let seq = build_sections(&warm);
        assert!(seq.sections.contains(&ObjectionHandling));
        assert!(!seq.sections.contains(&Faq));
    }

    #[test]
    fn rare_combinations_borrow_a_neighbour() {
        let product_aware = ctx(AwarenessLevel::ProductAware, MarketSophisticationLevel::Level2);
        assert_eq!(build_sections(&product_aware).flow, "solution-aware+level-3");

        let most_aware = ctx(AwarenessLevel::MostAware, MarketSophisticationLevel::Level5);
        assert_eq!(build_sections(&most_aware).flow, "most-aware+level-3");
    }

    #[test]
    fn unknown_values_use_the_default_flow() {
        let seq = build_sections(&ctx(
            AwarenessLevel::from("curious"),
            MarketSophisticationLevel::from("level-9"),
        ));
        assert_eq!(seq.flow, "problem-aware+level-3");
        assert_eq!(seq.sections.first(), Some(&SectionType::Header));
        assert_eq!(seq.sections.last(), Some(&SectionType::Footer));
    }

    #[test]
    fn early_stages_swap_unsupported_sections() {
        // problem-aware level-2 carries results and testimonials.
        let base = ctx(AwarenessLevel::ProblemAware, MarketSophisticationLevel::Level2);

        let seq = build_sections(&base.with_stage_id("pre-mvp"));
        assert!(seq.sections.contains(&FounderNote));
        assert!(seq.sections.contains(&BeforeAfter));
        assert!(!seq.sections.contains(&Testimonials));
        assert!(!seq.sections.contains(&Results));

        let seq = build_sections(&base.with_stage_id("mvp-launched"));
        assert!(seq.sections.contains(&Testimonials));

        let seq = build_sections(&base.with_stage_id("users-1k-5k"));
        assert!(seq.sections.contains(&Results));
    }

    #[test]
    fn stage_swap_does_not_duplicate() {
        // unaware level-2 already has beforeAfter; results swaps onto it.
        let seq = build_sections(
            &ctx(AwarenessLevel::Unaware, MarketSophisticationLevel::Level2).with_stage_id("idea"),
        );
        let count = seq.sections.iter().filter(|s| **s == BeforeAfter).count();
        assert_eq!(count, 1);
        assert!(!seq.sections.contains(&Results));
    }

    #[test]
    fn buy_now_adds_pricing() {
        let seq = build_sections(&BusinessContext {
            landing_page_goals: LandingGoal::BuyNow,
            ..ctx(AwarenessLevel::SolutionAware, MarketSophisticationLevel::Level2)
        });
        assert!(seq.sections.contains(&Pricing));
    }

    #[test]
    fn audience_additions_follow_the_audience_id() {
        let base = ctx(AwarenessLevel::Unaware, MarketSophisticationLevel::Level2);

        let founders = base.with_audience_id("tech-founders");
        assert_eq!(founders.target_audience, TargetAudience::Founders);
        assert!(build_sections(&founders).sections.contains(&FounderNote));

        // A founder audience id without the fragment adds nothing.
        let seq = build_sections(&base.with_audience_id("solopreneurs"));
        assert!(!seq.sections.contains(&FounderNote));

        let seq = build_sections(&base.with_audience_id("developers"));
        assert!(seq.sections.contains(&Integrations));
    }

    #[test]
    fn long_flows_are_capped_by_priority() {
        // 8 base sections plus security and integrations from the goal; the
        // objection handling section keeps the FAQ out.
        let seq = build_sections(&BusinessContext {
            landing_page_goals: LandingGoal::ContactSales,
            target_audience: TargetAudience::Enterprise,
            ..ctx(AwarenessLevel::SolutionAware, MarketSophisticationLevel::Level4)
        });
        assert_eq!(seq.sections.len(), SECTION_CAP + 2);
        assert!(!seq.dropped.is_empty());
        assert!(seq.sections.contains(&Hero));
        assert!(seq.sections.contains(&Cta));
        assert!(seq.sections.contains(&ObjectionHandling));

        // Page order: every section sits after the one before it.
        assert!(seq.sections.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
