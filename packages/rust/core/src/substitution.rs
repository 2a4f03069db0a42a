//! Asset-aware section substitution.
//!
//! Some sections only work with assets the page owner may not have
//! (testimonials without quotes, a founder note without a photo). Before
//! planning, such sections are swapped for one that answers the same visitor
//! objection, chosen by startup stage, or dropped when nothing fits.

use serde::Serialize;
use tracing::{debug, info, instrument};

use layoutpilot_shared::{Asset, AssetAvailability, BusinessContext, SectionType};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A stage-conditioned replacement.
struct Candidate {
    /// Stage ids this candidate applies to; `None` matches every stage.
    stages: Option<&'static [&'static str]>,
    section: SectionType,
    reason: &'static str,
}

impl Candidate {
    fn applies_to(&self, stage_id: &str) -> bool {
        self.stages.is_none_or(|ids| ids.contains(&stage_id))
    }
}

/// How to replace one asset-dependent section type.
struct Strategy {
    section: SectionType,
    requires: &'static [Asset],
    objection: &'static str,
    candidates: &'static [Candidate],
    fallback: Option<SectionType>,
}

// Stage id sets. Group ids sit beside the fine-grained ids folded into them
// so contexts written at group granularity land on the same candidate.
const BUILDING_STAGES: &[&str] = &[
    "pre-mvp",
    "problem-exploration",
    "mvp-development",
    "mvp-launched",
    "idea",
    "mvp",
];
const EARLY_TRACTION_STAGES: &[&str] = &[
    "early-feedback",
    "problem-solution-fit",
    "validated-early",
    "early-monetization",
    "traction",
];
const GROWTH_STAGES: &[&str] = &[
    "building-v2",
    "targeting-pmf",
    "users-250-500",
    "users-500-1k",
    "growth",
];

static STRATEGIES: &[Strategy] = &[
    Strategy {
        section: SectionType::Testimonials,
        requires: &[Asset::Testimonials],
        objection: "trust",
        candidates: &[
            Candidate {
                stages: Some(BUILDING_STAGES),
                section: SectionType::FounderNote,
                reason: "founder credibility anchors trust before customers exist",
            },
            Candidate {
                stages: Some(EARLY_TRACTION_STAGES),
                section: SectionType::Results,
                reason: "early metrics stand in for customer quotes",
            },
            Candidate {
                stages: Some(GROWTH_STAGES),
                section: SectionType::SocialProof,
                reason: "user counts and logos carry social validation",
            },
            Candidate {
                stages: None,
                section: SectionType::BeforeAfter,
                reason: "the transformation itself makes the case",
            },
        ],
        fallback: Some(SectionType::FounderNote),
    },
    Strategy {
        section: SectionType::SocialProof,
        requires: &[Asset::CustomerLogos, Asset::Testimonials],
        objection: "credibility",
        candidates: &[
            Candidate {
                stages: Some(&["waitlist", "early-access"]),
                section: SectionType::Problem,
                reason: "a shared problem builds community before launch",
            },
            Candidate {
                stages: Some(BUILDING_STAGES),
                section: SectionType::FounderNote,
                reason: "founder credibility substitutes for social proof",
            },
            Candidate {
                stages: Some(&[
                    "early-feedback",
                    "problem-solution-fit",
                    "validated-early",
                    "traction",
                ]),
                section: SectionType::UseCases,
                reason: "concrete use cases show market validation",
            },
        ],
        fallback: Some(SectionType::UniqueMechanism),
    },
    Strategy {
        section: SectionType::Integrations,
        requires: &[Asset::IntegrationLogos],
        objection: "technical fit",
        candidates: &[
            Candidate {
                stages: Some(&["pre-mvp", "problem-exploration", "mvp-development", "idea"]),
                section: SectionType::HowItWorks,
                reason: "explaining the approach shows a compatibility mindset",
            },
            Candidate {
                stages: None,
                section: SectionType::Features,
                reason: "integration capabilities move into the features list",
            },
        ],
        fallback: None,
    },
    Strategy {
        section: SectionType::FounderNote,
        requires: &[Asset::FounderPhoto],
        objection: "founder trust",
        candidates: &[Candidate {
            stages: None,
            section: SectionType::Problem,
            reason: "the founder's perspective folds into the problem story",
        }],
        fallback: None,
    },
];

fn strategy_for(section: SectionType) -> Option<&'static Strategy> {
    STRATEGIES.iter().find(|s| s.section == section)
}

impl Strategy {
    fn missing_assets(&self, assets: &AssetAvailability) -> Vec<Asset> {
        self.requires
            .iter()
            .copied()
            .filter(|asset| !assets.has(*asset))
            .collect()
    }

    /// First applicable replacement not already on the page.
    fn replacement(
        &self,
        stage_id: &str,
        on_page: &[String],
    ) -> Option<(SectionType, &'static str)> {
        let present = |section: SectionType| {
            on_page
                .iter()
                .any(|id| SectionType::from_id(id) == Some(section))
        };

        self.candidates
            .iter()
            .filter(|c| c.applies_to(stage_id))
            .find(|c| !present(c.section))
            .map(|c| (c.section, c.reason))
            .or_else(|| {
                self.fallback
                    .filter(|f| !present(*f))
                    .map(|f| (f, "fallback keeps basic objection coverage"))
            })
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One replaced or removed section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub original: String,
    /// `None` when the section was removed.
    pub replacement: Option<String>,
    pub missing_assets: Vec<String>,
    pub objection: &'static str,
    pub reason: &'static str,
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.replacement {
            Some(replacement) => write!(f, "{} -> {replacement} ({})", self.original, self.reason),
            None => write!(f, "{} removed ({})", self.original, self.reason),
        }
    }
}

/// The rewritten section list plus what changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstitutionOutcome {
    pub sections: Vec<String>,
    pub log: Vec<Substitution>,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Replace sections whose required assets are missing.
///
/// Candidates are matched on the context's most specific stage id, so a
/// fine-grained stage can pick a different substitute than its group.
/// Without asset availability on the context the list is returned as is.
/// Substitutes are emitted as canonical type names; duplicates are dropped
/// keeping the first occurrence.
#[instrument(skip_all, fields(sections = section_ids.len()))]
pub fn substitute_sections<S: AsRef<str>>(
    section_ids: &[S],
    ctx: &BusinessContext,
) -> SubstitutionOutcome {
    let mut sections: Vec<String> = section_ids.iter().map(|s| s.as_ref().to_string()).collect();

    let Some(assets) = ctx.asset_availability else {
        debug!("no asset availability, skipping substitution");
        return SubstitutionOutcome {
            sections,
            log: Vec::new(),
        };
    };

    let mut log = Vec::new();
    let mut index = 0;
    while index < sections.len() {
        let strategy = SectionType::from_id(&sections[index]).and_then(strategy_for);
        let Some(strategy) = strategy else {
            index += 1;
            continue;
        };
        let missing = strategy.missing_assets(&assets);
        if missing.is_empty() {
            index += 1;
            continue;
        }

        let original = sections[index].clone();
        let missing_assets = missing.iter().map(|a| a.as_str().to_string()).collect();
        match strategy.replacement(ctx.stage_id(), &sections) {
            Some((section, reason)) => {
                debug!(%original, replacement = %section, "substituted section");
                sections[index] = section.as_str().to_string();
                log.push(Substitution {
                    original,
                    replacement: Some(section.as_str().to_string()),
                    missing_assets,
                    objection: strategy.objection,
                    reason,
                });
                index += 1;
            }
            None => {
                debug!(%original, "removed section");
                sections.remove(index);
                log.push(Substitution {
                    original,
                    replacement: None,
                    missing_assets,
                    objection: strategy.objection,
                    reason: "every substitute is already on the page",
                });
            }
        }
    }

    let mut seen = Vec::with_capacity(sections.len());
    sections.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(id.clone());
            true
        }
    });

    if !log.is_empty() {
        info!(changes = log.len(), "applied asset substitutions");
    }
    SubstitutionOutcome { sections, log }
}
