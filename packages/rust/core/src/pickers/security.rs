use layoutpilot_shared::catalog::SecurityLayout as L;
use layoutpilot_shared::{
    AwarenessLevel, BusinessContext, FlowComplexity, MarketCategory, ProblemType, SectionType,
    StartupStage, TargetAudience, ToneProfile,
};

use crate::engine::{HardRule, ScoreFactor, SectionRules, evaluate};

pub static RULES: SectionRules<L> = SectionRules {
    hard_rules: HARD_RULES,
    factors: FACTORS,
    asset_adjustments: &[],
    fallback: L::SecurityChecklist,
    tie_break: false,
};

pub fn pick(ctx: &BusinessContext) -> L {
    evaluate(&RULES, ctx, None).layout
}

const HARD_RULES: &[HardRule<L>] = &[
    HardRule {
        name: "enterprise-compliance",
        apply: |c| {
            (c.target_audience == TargetAudience::Enterprise
                && c.problem_type == ProblemType::ComplianceOrRisk)
                .then_some(L::AuditTrustPanel)
        },
    },
    HardRule {
        name: "regulated-finance",
        apply: |c| {
            (c.market_category == MarketCategory::FinanceAccounting && c.sophistication_at_least(3))
                .then_some(L::ComplianceBadgeRow)
        },
    },
    HardRule {
        name: "technical-infra",
        apply: |c| {
            (c.target_audience == TargetAudience::Builders
                && matches!(
                    c.market_category,
                    MarketCategory::EngineeringDevelopment | MarketCategory::AiTools
                ))
            .then_some(L::DiagramInfraSecurity)
        },
    },
    HardRule {
        name: "pre-launch",
        apply: |c| c.startup_stage.is_pre_launch().then_some(L::SecurityChecklist),
    },
];

const FACTORS: &[ScoreFactor<L>] = &[
    ScoreFactor {
        name: "enterprise",
        when: |c| c.target_audience == TargetAudience::Enterprise,
        awards: &[(L::AuditTrustPanel, 4), (L::ComplianceBadgeRow, 3), (L::ExpandablePolicyCards, 2)],
    },
    ScoreFactor {
        name: "businesses",
        when: |c| c.target_audience == TargetAudience::Businesses,
        awards: &[(L::ComplianceBadgeRow, 3), (L::StatWithShieldIcons, 2)],
    },
    ScoreFactor {
        name: "builders",
        when: |c| c.target_audience == TargetAudience::Builders,
        awards: &[(L::DiagramInfraSecurity, 4), (L::ExpandablePolicyCards, 2)],
    },
    ScoreFactor {
        name: "small-teams",
        when: |c| {
            matches!(
                c.target_audience,
                TargetAudience::Founders | TargetAudience::Creators | TargetAudience::Community
            )
        },
        awards: &[(L::SecurityChecklist, 3), (L::FaqStyleSecurity, 2)],
    },
    ScoreFactor {
        name: "marketers",
        when: |c| c.target_audience == TargetAudience::Marketers,
        awards: &[(L::StatWithShieldIcons, 3), (L::PartnerValidationRow, 2)],
    },
    ScoreFactor {
        name: "compliance",
        when: |c| c.problem_type == ProblemType::ComplianceOrRisk,
        awards: &[(L::ComplianceBadgeRow, 4), (L::AuditTrustPanel, 3)],
    },
    ScoreFactor {
        name: "regulated-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::FinanceAccounting
                    | MarketCategory::HrPeopleOps
                    | MarketCategory::IndustrySpecific
            )
        },
        awards: &[(L::ComplianceBadgeRow, 3)],
    },
    ScoreFactor {
        name: "data-category",
        when: |c| {
            matches!(
                c.market_category,
                MarketCategory::DataAnalytics | MarketCategory::AiTools
            )
        },
        awards: &[(L::ExpandablePolicyCards, 3), (L::DiagramInfraSecurity, 1)],
    },
    ScoreFactor {
        name: "integrations-category",
        when: |c| c.market_category == MarketCategory::AddOnsIntegrations,
        awards: &[(L::PartnerValidationRow, 3)],
    },
    ScoreFactor {
        name: "low-awareness",
        when: |c| {
            matches!(
                c.awareness_level,
                AwarenessLevel::Unaware | AwarenessLevel::ProblemAware
            )
        },
        awards: &[(L::SecurityChecklist, 2), (L::FaqStyleSecurity, 2)],
    },
    ScoreFactor {
        name: "saturated-market",
        when: |c| c.sophistication_at_least(4),
        awards: &[(L::AuditTrustPanel, 2), (L::PartnerValidationRow, 2)],
    },
    ScoreFactor {
        name: "scale",
        when: |c| c.startup_stage == StartupStage::Scale,
        awards: &[(L::StatWithShieldIcons, 2), (L::AuditTrustPanel, 1)],
    },
    ScoreFactor {
        name: "minimal-technical",
        when: |c| c.tone_profile == ToneProfile::MinimalTechnical,
        awards: &[(L::DiagramInfraSecurity, 2), (L::SecurityChecklist, 1)],
    },
    ScoreFactor {
        name: "friendly-helpful",
        when: |c| c.tone_profile == ToneProfile::FriendlyHelpful,
        awards: &[(L::FaqStyleSecurity, 2)],
    },
    ScoreFactor {
        name: "detailed-flow",
        when: |c| c.flow_complexity() == Some(FlowComplexity::Detailed),
        awards: &[(L::ExpandablePolicyCards, 2)],
    },
    ScoreFactor {
        name: "faq-follows",
        when: |c| c.next_is(SectionType::Faq),
        awards: &[(L::FaqStyleSecurity, -4)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterprise_compliance_gets_audit_panel() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Enterprise,
            problem_type: ProblemType::ComplianceOrRisk,
            ..Default::default()
        };
        assert_eq!(pick(&ctx), L::AuditTrustPanel);
    }

    #[test]
    fn marketers_get_shield_stats() {
        let ctx = BusinessContext {
            target_audience: TargetAudience::Marketers,
            startup_stage: StartupStage::Scale,
            ..Default::default()
        };
        // shield stats 3 + 2 = 5.
        assert_eq!(pick(&ctx), L::StatWithShieldIcons);
    }
}
