//! Declarative rule engine shared by every section picker.
//!
//! A section's decision logic is a [`SectionRules`] table:
//!
//! 1. **Hard rules**, tried in order; the first that fires decides.
//! 2. **Score factors**: every catalog entry starts at 0 and each factor whose
//!    predicate holds adds its awards.
//! 3. **Asset adjustments**: penalties/bonuses applied when media is missing.
//! 4. **Selection**: highest score wins, ties go to the first declared entry.
//!    A winning score of 0 or less means nothing in the context matched and
//!    the section's fallback is returned.
//! 5. **Tie break** (opt-in per section): a near-tie between two strong
//!    candidates is settled by an injected random source.

use rand::{Rng, RngCore};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use layoutpilot_shared::{BusinessContext, Layout};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// A compound predicate bound to a single layout.
pub struct HardRule<L: 'static> {
    pub name: &'static str,
    pub apply: fn(&BusinessContext) -> Option<L>,
}

/// A weighted scoring factor: when `when` holds, each `(layout, weight)`
/// award is added to the table. Weights may be negative.
pub struct ScoreFactor<L: 'static> {
    pub name: &'static str,
    pub when: fn(&BusinessContext) -> bool,
    pub awards: &'static [(L, i32)],
}

/// Complete decision table for one section type.
pub struct SectionRules<L: 'static> {
    pub hard_rules: &'static [HardRule<L>],
    pub factors: &'static [ScoreFactor<L>],
    pub asset_adjustments: &'static [ScoreFactor<L>],
    pub fallback: L,
    /// Whether near-ties may be broken at random.
    pub tie_break: bool,
}

// ---------------------------------------------------------------------------
// Score table
// ---------------------------------------------------------------------------

/// Per-call `layout → score` table in catalog declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable<L: Layout> {
    entries: Vec<(L, i32)>,
}

impl<L: Layout> ScoreTable<L> {
    /// Every catalog entry at 0.
    pub fn new() -> Self {
        Self {
            entries: L::ALL.iter().map(|layout| (*layout, 0)).collect(),
        }
    }

    pub fn add(&mut self, layout: L, points: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == layout) {
            entry.1 += points;
        }
    }

    pub fn get(&self, layout: L) -> i32 {
        self.entries
            .iter()
            .find(|(l, _)| *l == layout)
            .map_or(0, |(_, score)| *score)
    }

    /// Entries by descending score; equal scores keep declaration order.
    pub fn ranked(&self) -> Vec<(L, i32)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Highest-scoring entry, first declared on ties.
    pub fn leader(&self) -> (L, i32) {
        self.ranked()[0]
    }

    /// Scores keyed by layout id, in declaration order.
    pub fn to_ids(&self) -> Vec<(&'static str, i32)> {
        self.entries
            .iter()
            .map(|(layout, score)| (layout.as_str(), *score))
            .collect()
    }

    fn apply(&mut self, factors: &[ScoreFactor<L>], ctx: &BusinessContext) {
        for factor in factors {
            if (factor.when)(ctx) {
                trace!(factor = factor.name, "score factor matched");
                for (layout, weight) in factor.awards {
                    self.add(*layout, *weight);
                }
            }
        }
    }
}

impl<L: Layout> Default for ScoreTable<L> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// Which stage of the engine produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rule", rename_all = "camelCase")]
pub enum DecisionSource {
    /// A named hard rule fired.
    HardRule(&'static str),
    /// Highest score won.
    Scored,
    /// A near-tie was settled at random.
    TieBreak,
    /// Nothing matched; the section fallback was used.
    Fallback,
}

impl std::fmt::Display for DecisionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HardRule(name) => write!(f, "hard rule '{name}'"),
            Self::Scored => f.write_str("scored"),
            Self::TieBreak => f.write_str("tie break"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// The engine's verdict for one section.
#[derive(Debug, Clone)]
pub struct Decision<L: Layout> {
    pub layout: L,
    pub source: DecisionSource,
    /// The score table, when the scoring pass ran.
    pub scores: Option<ScoreTable<L>>,
}

// ---------------------------------------------------------------------------
// Tie breaking
// ---------------------------------------------------------------------------

/// When two leading candidates count as tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiePolicy {
    /// Maximum gap between leader and runner-up.
    pub margin: i32,
    /// Both candidates must score strictly above this.
    pub threshold: i32,
}

impl Default for TiePolicy {
    fn default() -> Self {
        Self {
            margin: 2,
            threshold: 8,
        }
    }
}

/// A tie policy paired with the random source that settles ties.
pub struct TieBreaker<'a> {
    pub policy: TiePolicy,
    rng: &'a mut dyn RngCore,
}

impl<'a> TieBreaker<'a> {
    pub fn new(policy: TiePolicy, rng: &'a mut dyn RngCore) -> Self {
        Self { policy, rng }
    }

    /// Pick between leader and runner-up if they are tied under the policy.
    fn settle<L: Copy>(&mut self, leader: (L, i32), runner_up: (L, i32)) -> Option<L> {
        let TiePolicy { margin, threshold } = self.policy;
        let tied = leader.1 - runner_up.1 <= margin
            && leader.1 > threshold
            && runner_up.1 > threshold;
        if !tied {
            return None;
        }
        Some(if self.rng.random_bool(0.5) {
            runner_up.0
        } else {
            leader.0
        })
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Run a section's rule table against a context.
///
/// Deterministic unless the table opts into tie breaking and a tie breaker
/// is supplied.
#[instrument(skip_all, fields(section = %L::SECTION))]
pub fn evaluate<L: Layout>(
    rules: &SectionRules<L>,
    ctx: &BusinessContext,
    tie_breaker: Option<&mut TieBreaker<'_>>,
) -> Decision<L> {
    for rule in rules.hard_rules {
        if let Some(layout) = (rule.apply)(ctx) {
            debug!(rule = rule.name, layout = layout.as_str(), "hard rule fired");
            return Decision {
                layout,
                source: DecisionSource::HardRule(rule.name),
                scores: None,
            };
        }
    }

    let mut scores = ScoreTable::new();
    scores.apply(rules.factors, ctx);
    scores.apply(rules.asset_adjustments, ctx);

    let ranked = scores.ranked();
    let leader = ranked[0];

    if leader.1 <= 0 {
        debug!(
            fallback = rules.fallback.as_str(),
            "no scoring factor matched the context, using section fallback"
        );
        return Decision {
            layout: rules.fallback,
            source: DecisionSource::Fallback,
            scores: Some(scores),
        };
    }

    if rules.tie_break {
        if let (Some(breaker), Some(runner_up)) = (tie_breaker, ranked.get(1)) {
            if let Some(layout) = breaker.settle(leader, *runner_up) {
                debug!(
                    layout = layout.as_str(),
                    leader = leader.0.as_str(),
                    runner_up = runner_up.0.as_str(),
                    "near-tie settled at random"
                );
                return Decision {
                    layout,
                    source: DecisionSource::TieBreak,
                    scores: Some(scores),
                };
            }
        }
    }

    debug!(layout = leader.0.as_str(), score = leader.1, "highest score wins");
    Decision {
        layout: leader.0,
        source: DecisionSource::Scored,
        scores: Some(scores),
    }
}

#[cfg(test)]
mod tests {
    use layoutpilot_shared::catalog::HeroLayout;
    use layoutpilot_shared::{AwarenessLevel, CopyIntent, StartupStage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    static NO_HARD_RULES: &[HardRule<HeroLayout>] = &[];
    static NO_ADJUSTMENTS: &[ScoreFactor<HeroLayout>] = &[];

    static IDEA_RULE: &[HardRule<HeroLayout>] = &[HardRule {
        name: "idea-stage",
        apply: |c| (c.startup_stage == StartupStage::Idea).then_some(HeroLayout::CenterStacked),
    }];

    static TIED_FACTORS: &[ScoreFactor<HeroLayout>] = &[ScoreFactor {
        name: "unaware",
        when: |c| c.awareness_level == AwarenessLevel::Unaware,
        awards: &[(HeroLayout::SplitScreen, 10), (HeroLayout::ImageFirst, 10)],
    }];

    static SPLIT_FACTORS: &[ScoreFactor<HeroLayout>] = &[
        ScoreFactor {
            name: "unaware",
            when: |c| c.awareness_level == AwarenessLevel::Unaware,
            awards: &[(HeroLayout::SplitScreen, 4), (HeroLayout::ImageFirst, 4)],
        },
        ScoreFactor {
            name: "pain-led",
            when: |c| c.copy_intent == CopyIntent::PainLed,
            awards: &[(HeroLayout::ImageFirst, 3), (HeroLayout::LeftCopyRightImage, -2)],
        },
    ];

    static BOOSTED_FACTORS: &[ScoreFactor<HeroLayout>] = &[
        ScoreFactor {
            name: "unaware",
            when: |c| c.awareness_level == AwarenessLevel::Unaware,
            awards: &[(HeroLayout::SplitScreen, 4), (HeroLayout::ImageFirst, 4)],
        },
        ScoreFactor {
            name: "pain-led",
            when: |c| c.copy_intent == CopyIntent::PainLed,
            awards: &[(HeroLayout::ImageFirst, 3), (HeroLayout::LeftCopyRightImage, -2)],
        },
        ScoreFactor {
            name: "boost",
            when: |c| c.awareness_level == AwarenessLevel::Unaware,
            awards: &[(HeroLayout::ImageFirst, 1)],
        },
    ];

    fn rules(
        hard_rules: &'static [HardRule<HeroLayout>],
        factors: &'static [ScoreFactor<HeroLayout>],
        tie_break: bool,
    ) -> SectionRules<HeroLayout> {
        SectionRules {
            hard_rules,
            factors,
            asset_adjustments: NO_ADJUSTMENTS,
            fallback: HeroLayout::CenterStacked,
            tie_break,
        }
    }

    fn unaware() -> BusinessContext {
        BusinessContext {
            awareness_level: AwarenessLevel::Unaware,
            ..Default::default()
        }
    }

    #[test]
    fn hard_rule_short_circuits_scoring() {
        let ctx = BusinessContext {
            startup_stage: StartupStage::Idea,
            ..unaware()
        };
        let decision = evaluate(&rules(IDEA_RULE, SPLIT_FACTORS, false), &ctx, None);
        assert_eq!(decision.layout, HeroLayout::CenterStacked);
        assert_eq!(decision.source, DecisionSource::HardRule("idea-stage"));
        assert!(decision.scores.is_none());
    }

    #[test]
    fn highest_score_wins_with_declaration_order_ties() {
        // SplitScreen and ImageFirst both get 4; SplitScreen is declared first.
        let decision = evaluate(&rules(NO_HARD_RULES, SPLIT_FACTORS, false), &unaware(), None);
        assert_eq!(decision.layout, HeroLayout::SplitScreen);
        assert_eq!(decision.source, DecisionSource::Scored);

        let ctx = BusinessContext {
            copy_intent: CopyIntent::PainLed,
            ..unaware()
        };
        let decision = evaluate(&rules(NO_HARD_RULES, SPLIT_FACTORS, false), &ctx, None);
        assert_eq!(decision.layout, HeroLayout::ImageFirst);
        let scores = decision.scores.expect("scores");
        assert_eq!(scores.get(HeroLayout::ImageFirst), 7);
        assert_eq!(scores.get(HeroLayout::LeftCopyRightImage), -2);
    }

    #[test]
    fn nothing_matched_returns_fallback() {
        let decision = evaluate(
            &rules(NO_HARD_RULES, SPLIT_FACTORS, false),
            &BusinessContext::default(),
            None,
        );
        assert_eq!(decision.layout, HeroLayout::CenterStacked);
        assert_eq!(decision.source, DecisionSource::Fallback);
    }

    #[test]
    fn tie_break_only_with_rng_and_opt_in() {
        let ctx = unaware();

        let decision = evaluate(&rules(NO_HARD_RULES, TIED_FACTORS, true), &ctx, None);
        assert_eq!(decision.layout, HeroLayout::SplitScreen);
        assert_eq!(decision.source, DecisionSource::Scored);

        let mut rng = StdRng::seed_from_u64(7);
        let mut breaker = TieBreaker::new(TiePolicy::default(), &mut rng);
        let decision = evaluate(&rules(NO_HARD_RULES, TIED_FACTORS, false), &ctx, Some(&mut breaker));
        assert_eq!(decision.source, DecisionSource::Scored);
    }

    #[test]
    fn tie_break_picks_between_the_two_leaders() {
        let ctx = unaware();
        let table = rules(NO_HARD_RULES, TIED_FACTORS, true);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut breaker = TieBreaker::new(TiePolicy::default(), &mut rng);
            let decision = evaluate(&table, &ctx, Some(&mut breaker));
            assert_eq!(decision.source, DecisionSource::TieBreak);
            assert!(matches!(
                decision.layout,
                HeroLayout::SplitScreen | HeroLayout::ImageFirst
            ));
            seen.insert(decision.layout);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn weak_candidates_are_not_tied() {
        // Scores of 4 and 4 sit below the viability threshold of 8.
        let mut rng = StdRng::seed_from_u64(1);
        let mut breaker = TieBreaker::new(TiePolicy::default(), &mut rng);
        let decision = evaluate(
            &rules(NO_HARD_RULES, SPLIT_FACTORS, true),
            &unaware(),
            Some(&mut breaker),
        );
        assert_eq!(decision.source, DecisionSource::Scored);
        assert_eq!(decision.layout, HeroLayout::SplitScreen);
    }

    #[test]
    fn score_table_ranking_is_stable() {
        let mut table = ScoreTable::<HeroLayout>::new();
        table.add(HeroLayout::ImageFirst, 3);
        table.add(HeroLayout::SplitScreen, 3);
        let ranked = table.ranked();
        assert_eq!(ranked[0], (HeroLayout::SplitScreen, 3));
        assert_eq!(ranked[1], (HeroLayout::ImageFirst, 3));
        assert_eq!(table.leader(), (HeroLayout::SplitScreen, 3));
        assert_eq!(table.to_ids()[0], ("leftCopyRightImage", 0));
    }

    #[test]
    fn extra_matching_factor_never_hurts_its_layout() {
        let pain = BusinessContext {
            copy_intent: CopyIntent::PainLed,
            ..unaware()
        };
        for ctx in [unaware(), pain] {
            let base = evaluate(&rules(NO_HARD_RULES, SPLIT_FACTORS, false), &ctx, None);
            let boosted = evaluate(&rules(NO_HARD_RULES, BOOSTED_FACTORS, false), &ctx, None);
            let base_scores = base.scores.expect("scores");
            let boosted_scores = boosted.scores.expect("scores");
            assert!(
                boosted_scores.get(HeroLayout::ImageFirst) >= base_scores.get(HeroLayout::ImageFirst)
            );
            if base_scores.get(HeroLayout::ImageFirst) >= base_scores.leader().1 {
                assert_eq!(boosted.layout, HeroLayout::ImageFirst);
            }
        }
    }
}
