//! The business context every picker reads.
//!
//! A [`BusinessContext`] is built once per page and never mutated; per-section
//! flow metadata is attached to a copy with [`BusinessContext::with_flow`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::SectionType;
use crate::error::{LayoutPilotError, Result};
use crate::flow::{FlowComplexity, FlowContext, FlowTone, LayoutDensity, LayoutTone};
use crate::taxonomy::{
    AwarenessLevel, CopyIntent, LandingGoal, MarketCategory, MarketSophisticationLevel,
    PricingCommitment, PricingModel, PricingModifier, ProblemType, StartupStage, TargetAudience,
    ToneProfile,
};

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// A media asset a layout may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    ProductImages,
    DemoVideo,
    Testimonials,
    CustomerLogos,
    IntegrationLogos,
    FounderPhoto,
}

impl Asset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductImages => "productImages",
            Self::DemoVideo => "demoVideo",
            Self::Testimonials => "testimonials",
            Self::CustomerLogos => "customerLogos",
            Self::IntegrationLogos => "integrationLogos",
            Self::FounderPhoto => "founderPhoto",
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which assets the page owner actually has. Absent flags mean "not available".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAvailability {
    #[serde(default)]
    pub product_images: bool,
    #[serde(default)]
    pub demo_video: bool,
    #[serde(default)]
    pub testimonials: bool,
    #[serde(default)]
    pub customer_logos: bool,
    #[serde(default)]
    pub integration_logos: bool,
    #[serde(default)]
    pub founder_photo: bool,
}

impl AssetAvailability {
    /// Every asset available.
    pub fn all() -> Self {
        Self {
            product_images: true,
            demo_video: true,
            testimonials: true,
            customer_logos: true,
            integration_logos: true,
            founder_photo: true,
        }
    }

    pub fn has(&self, asset: Asset) -> bool {
        match asset {
            Asset::ProductImages => self.product_images,
            Asset::DemoVideo => self.demo_video,
            Asset::Testimonials => self.testimonials,
            Asset::CustomerLogos => self.customer_logos,
            Asset::IntegrationLogos => self.integration_logos,
            Asset::FounderPhoto => self.founder_photo,
        }
    }
}

// ---------------------------------------------------------------------------
// BusinessContext
// ---------------------------------------------------------------------------

/// Taxonomy-valued description of a page's market, audience, tone and
/// pricing, optionally carrying flow metadata for one section.
///
/// Out-of-taxonomy values deserialize into the `Other` variants and match no
/// rule. `Default` yields a context where every field matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    pub awareness_level: AwarenessLevel,
    pub tone_profile: ToneProfile,
    pub market_sophistication_level: MarketSophisticationLevel,
    pub copy_intent: CopyIntent,
    pub problem_type: ProblemType,
    pub market_category: MarketCategory,
    #[serde(alias = "startupStageGroup")]
    pub startup_stage: StartupStage,
    /// The fine-grained stage id the context was written with, when parsing
    /// folded it into its group (`mvp-launched` for [`StartupStage::Mvp`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_stage_detail: Option<String>,
    #[serde(alias = "landingPageGoal")]
    pub landing_page_goals: LandingGoal,
    #[serde(alias = "targetAudienceGroup")]
    pub target_audience: TargetAudience,
    /// The individual audience id, when parsing folded it into its group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience_detail: Option<String>,
    pub pricing_model: PricingModel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_modifier: Option<PricingModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_commitment_option: Option<PricingCommitment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_availability: Option<AssetAvailability>,

    #[serde(flatten)]
    pub flow: FlowContext,
}

impl BusinessContext {
    /// A per-section copy carrying `flow`.
    pub fn with_flow(&self, flow: FlowContext) -> Self {
        Self {
            flow,
            ..self.clone()
        }
    }

    /// A copy staged at `id`, which may be a group or a fine-grained stage id.
    pub fn with_stage_id(&self, id: &str) -> Self {
        let startup_stage = StartupStage::from(id);
        let startup_stage_detail = (startup_stage.as_str() != id).then(|| id.to_string());
        Self {
            startup_stage,
            startup_stage_detail,
            ..self.clone()
        }
    }

    /// The most specific stage id known: the fine-grained id when one was
    /// given, the group id otherwise.
    pub fn stage_id(&self) -> &str {
        self.startup_stage_detail
            .as_deref()
            .unwrap_or_else(|| self.startup_stage.as_str())
    }

    /// A copy aimed at `id`, which may be a group or an individual audience id.
    pub fn with_audience_id(&self, id: &str) -> Self {
        let target_audience = TargetAudience::from(id);
        let target_audience_detail = (target_audience.as_str() != id).then(|| id.to_string());
        Self {
            target_audience,
            target_audience_detail,
            ..self.clone()
        }
    }

    /// The most specific audience id known.
    pub fn audience_id(&self) -> &str {
        self.target_audience_detail
            .as_deref()
            .unwrap_or_else(|| self.target_audience.as_str())
    }

    /// A copy with asset availability set.
    pub fn with_assets(&self, assets: AssetAvailability) -> Self {
        Self {
            asset_availability: Some(assets),
            ..self.clone()
        }
    }

    // -- taxonomy predicates ------------------------------------------------

    /// Sophistication is a known level at or above `level`.
    pub fn sophistication_at_least(&self, level: u8) -> bool {
        self.market_sophistication_level
            .rank()
            .is_some_and(|rank| rank >= level)
    }

    /// Sophistication is a known level at or below `level`.
    pub fn sophistication_at_most(&self, level: u8) -> bool {
        self.market_sophistication_level
            .rank()
            .is_some_and(|rank| rank <= level)
    }

    /// The asset is known to be unavailable. Without asset information
    /// nothing counts as missing.
    pub fn asset_missing(&self, asset: Asset) -> bool {
        self.asset_availability
            .is_some_and(|assets| !assets.has(asset))
    }

    /// The asset is known to be available.
    pub fn asset_present(&self, asset: Asset) -> bool {
        self.asset_availability
            .is_some_and(|assets| assets.has(asset))
    }

    // -- flow predicates ----------------------------------------------------

    pub fn previous_is(&self, section: SectionType) -> bool {
        self.flow
            .previous_section
            .as_ref()
            .is_some_and(|prev| prev.section_type == section)
    }

    pub fn previous_layout(&self) -> Option<&str> {
        self.flow
            .previous_section
            .as_ref()
            .and_then(|prev| prev.layout.as_deref())
    }

    pub fn previous_tone(&self) -> Option<LayoutTone> {
        self.flow.previous_section.as_ref().and_then(|prev| prev.tone)
    }

    pub fn previous_density(&self) -> Option<LayoutDensity> {
        self.flow
            .previous_section
            .as_ref()
            .and_then(|prev| prev.density)
    }

    pub fn next_is(&self, section: SectionType) -> bool {
        self.flow
            .next_section
            .as_ref()
            .is_some_and(|next| next.section_type == section)
    }

    pub fn flow_tone(&self) -> Option<FlowTone> {
        self.flow.flow_tone
    }

    pub fn flow_complexity(&self) -> Option<FlowComplexity> {
        self.flow.flow_complexity
    }

    /// 1-based position on the page.
    pub fn position(&self) -> Option<usize> {
        self.flow.position_in_flow
    }

    /// Section sits within the first `n` positions.
    pub fn position_at_most(&self, n: usize) -> bool {
        self.position().is_some_and(|pos| pos <= n)
    }

    // -- diagnostics --------------------------------------------------------

    /// Fields holding a value outside their vocabulary, as
    /// `(field name, raw value)` pairs.
    pub fn unknown_fields(&self) -> Vec<(&'static str, String)> {
        let mut unknown = Vec::new();
        let mut check = |field: &'static str, known: bool, raw: &str| {
            if !known {
                unknown.push((field, raw.to_string()));
            }
        };

        check("awarenessLevel", self.awareness_level.is_known(), self.awareness_level.as_str());
        check("toneProfile", self.tone_profile.is_known(), self.tone_profile.as_str());
        check(
            "marketSophisticationLevel",
            self.market_sophistication_level.is_known(),
            self.market_sophistication_level.as_str(),
        );
        check("copyIntent", self.copy_intent.is_known(), self.copy_intent.as_str());
        check("problemType", self.problem_type.is_known(), self.problem_type.as_str());
        check("marketCategory", self.market_category.is_known(), self.market_category.as_str());
        check("startupStage", self.startup_stage.is_known(), self.startup_stage.as_str());
        check(
            "landingPageGoals",
            self.landing_page_goals.is_known(),
            self.landing_page_goals.as_str(),
        );
        check("targetAudience", self.target_audience.is_known(), self.target_audience.as_str());
        check("pricingModel", self.pricing_model.is_known(), self.pricing_model.as_str());
        if let Some(modifier) = &self.pricing_modifier {
            check("pricingModifier", modifier.is_known(), modifier.as_str());
        }
        if let Some(commitment) = &self.pricing_commitment_option {
            check("pricingCommitmentOption", commitment.is_known(), commitment.as_str());
        }

        unknown
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Decode a context, remembering the raw stage and audience ids when they
/// name a fine-grained value that parsing folds into a group.
fn decode_context(json: &str) -> serde_json::Result<BusinessContext> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let raw = |keys: [&str; 2]| {
        keys.iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(String::from))
    };
    let raw_stage = raw(["startupStage", "startupStageGroup"]);
    let raw_audience = raw(["targetAudience", "targetAudienceGroup"]);

    let mut ctx: BusinessContext = serde_json::from_value(value)?;
    if ctx.startup_stage_detail.is_none() {
        ctx.startup_stage_detail = raw_stage.filter(|raw| raw != ctx.startup_stage.as_str());
    }
    if ctx.target_audience_detail.is_none() {
        ctx.target_audience_detail =
            raw_audience.filter(|raw| raw != ctx.target_audience.as_str());
    }
    Ok(ctx)
}

/// Parse a context from a JSON document.
pub fn parse_context(json: &str) -> Result<BusinessContext> {
    decode_context(json)
        .map_err(|e| LayoutPilotError::parse(format!("invalid business context: {e}")))
}

/// Read a context from a JSON file.
pub fn load_context_from(path: &Path) -> Result<BusinessContext> {
    let content = std::fs::read_to_string(path).map_err(|e| LayoutPilotError::io(path, e))?;
    let ctx = decode_context(&content).map_err(|e| {
        LayoutPilotError::parse(format!("invalid business context in {}: {e}", path.display()))
    })?;

    for (field, raw) in ctx.unknown_fields() {
        tracing::warn!(field, value = %raw, "context value outside the known vocabulary");
    }
    Ok(ctx)
}

/// Parse an ordered section id list: a JSON array of strings, or one id per
/// line. Blank lines are skipped.
pub fn parse_sections(content: &str) -> Result<Vec<String>> {
    let trimmed = content.trim();
    let sections: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
            .map_err(|e| LayoutPilotError::parse(format!("invalid section list: {e}")))?
    } else {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    };

    if sections.is_empty() {
        return Err(LayoutPilotError::validation("section list is empty"));
    }
    Ok(sections)
}

/// Read a section id list from a file. See [`parse_sections`].
pub fn load_sections_from(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| LayoutPilotError::io(path, e))?;
    parse_sections(&content)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::flow::PreviousSection;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/json")
            .join(name)
    }

    #[test]
    fn context_fixture_loads_with_legacy_field_names() {
        let ctx = load_context_from(&fixture("context.fixture.json")).expect("load fixture");
        assert_eq!(ctx.awareness_level, AwarenessLevel::ProblemAware);
        assert_eq!(ctx.startup_stage, StartupStage::Mvp);
        assert_eq!(ctx.stage_id(), "early-feedback");
        assert_eq!(ctx.target_audience, TargetAudience::Founders);
        assert_eq!(ctx.audience_id(), "solopreneurs");
        assert_eq!(ctx.landing_page_goals, LandingGoal::FreeTrial);
        assert_eq!(ctx.pricing_modifier, None);
        assert!(ctx.asset_present(Asset::ProductImages));
        assert!(ctx.asset_missing(Asset::Testimonials));
        // Absent flags inside assetAvailability default to false.
        assert!(ctx.asset_missing(Asset::DemoVideo));
        assert!(ctx.unknown_fields().is_empty());
        assert!(ctx.flow.is_empty());
    }

    #[test]
    fn enterprise_fixture_loads() {
        let ctx = load_context_from(&fixture("enterprise.fixture.json")).expect("load fixture");
        assert_eq!(ctx.target_audience, TargetAudience::Enterprise);
        assert!(ctx.sophistication_at_least(4));
        assert!(!ctx.sophistication_at_most(3));
    }

    #[test]
    fn fine_grained_stage_is_kept_beside_its_group() {
        let base = r#"{
            "awarenessLevel": "unaware", "toneProfile": "friendly-helpful",
            "marketSophisticationLevel": "level-2", "copyIntent": "pain-led",
            "problemType": "manual-repetition", "marketCategory": "AI Tools",
            "landingPageGoals": "waitlist", "targetAudience": "founders",
            "pricingModel": "free", "startupStage": "STAGE"
        }"#;

        let ctx = parse_context(&base.replace("STAGE", "building-v2")).expect("parse");
        assert_eq!(ctx.startup_stage, StartupStage::Traction);
        assert_eq!(ctx.stage_id(), "building-v2");

        let ctx = parse_context(&base.replace("STAGE", "growth")).expect("parse");
        assert_eq!(ctx.startup_stage_detail, None);
        assert_eq!(ctx.stage_id(), "growth");

        // Unknown stages stay in the catch-all and need no detail.
        let ctx = parse_context(&base.replace("STAGE", "stealth")).expect("parse");
        assert_eq!(ctx.startup_stage_detail, None);
        assert_eq!(ctx.stage_id(), "stealth");

        // The detail survives a serialize/parse cycle.
        let staged = BusinessContext::default().with_stage_id("seed-funded");
        assert_eq!(staged.startup_stage, StartupStage::Growth);
        let json = serde_json::to_string(&staged).expect("serialize");
        assert!(json.contains(r#""startupStageDetail":"seed-funded""#));
        let reparsed: BusinessContext = serde_json::from_str(&json).expect("reparse");
        assert_eq!(reparsed.stage_id(), "seed-funded");
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        let err = parse_context(r#"{"awarenessLevel": "unaware"}"#).unwrap_err();
        assert!(matches!(err, LayoutPilotError::Parse { .. }));
    }

    #[test]
    fn unknown_values_are_reported() {
        let ctx = BusinessContext {
            awareness_level: AwarenessLevel::Unaware,
            pricing_modifier: Some(PricingModifier::from("lifetime-deal")),
            ..Default::default()
        };
        let unknown = ctx.unknown_fields();
        assert!(unknown.iter().any(|(field, _)| *field == "toneProfile"));
        assert!(
            unknown
                .iter()
                .any(|(field, raw)| *field == "pricingModifier" && raw == "lifetime-deal")
        );
        assert!(!unknown.iter().any(|(field, _)| *field == "awarenessLevel"));
    }

    #[test]
    fn assets_unknown_means_nothing_missing() {
        let ctx = BusinessContext::default();
        assert!(!ctx.asset_missing(Asset::ProductImages));
        assert!(!ctx.asset_present(Asset::ProductImages));
    }

    #[test]
    fn flow_fields_are_flattened() {
        let ctx = BusinessContext::default().with_flow(FlowContext {
            position_in_flow: Some(3),
            previous_section: Some(PreviousSection {
                tone: Some(LayoutTone::Emotional),
                ..PreviousSection::of(SectionType::Problem)
            }),
            ..Default::default()
        });
        assert!(ctx.previous_is(SectionType::Problem));
        assert_eq!(ctx.previous_tone(), Some(LayoutTone::Emotional));
        assert!(ctx.position_at_most(3));
        assert!(!ctx.next_is(SectionType::Cta));

        let json = serde_json::to_value(&ctx).expect("serialize");
        assert_eq!(json["positionInFlow"], 3);
        assert_eq!(json["previousSection"]["type"], "problem");
    }

    #[test]
    fn section_lists_parse_from_json_or_lines() {
        let sections = load_sections_from(&fixture("sections.fixture.json")).expect("load");
        assert_eq!(sections.len(), 10);
        assert_eq!(sections[1], "hero-1753195467366");

        let lines = parse_sections("hero\n\n  features  \ncta\n").expect("parse lines");
        assert_eq!(lines, vec!["hero", "features", "cta"]);

        assert!(matches!(
            parse_sections("[]").unwrap_err(),
            LayoutPilotError::Validation { .. }
        ));
        assert!(matches!(
            parse_sections("[1, 2]").unwrap_err(),
            LayoutPilotError::Parse { .. }
        ));
    }
}
