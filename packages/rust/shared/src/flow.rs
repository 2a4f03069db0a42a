//! Flow metadata: per-section tags that keep adjacent layouts coherent.

use serde::{Deserialize, Serialize};

use crate::catalog::SectionType;

/// Visual weight of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDensity {
    Light,
    Medium,
    Heavy,
}

/// Emotional register of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutTone {
    Emotional,
    Analytical,
    Balanced,
}

/// Cognitive load of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutComplexity {
    Simple,
    Moderate,
    Detailed,
}

/// Page-level tone derived from the business context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowTone {
    Emotional,
    Analytical,
    Balanced,
}

/// Page-level complexity derived from the business context and page length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowComplexity {
    Simple,
    Balanced,
    Detailed,
}

/// Rhetorical job a section does on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPurpose {
    Navigate,
    Hook,
    Agitate,
    Transform,
    Demonstrate,
    Differentiate,
    Explain,
    Prove,
    Reassure,
    Humanize,
    Convert,
}

impl SectionPurpose {
    /// Static purpose of each section type.
    pub fn of(section: SectionType) -> Self {
        match section {
            SectionType::Header | SectionType::Footer => Self::Navigate,
            SectionType::Hero => Self::Hook,
            SectionType::Problem => Self::Agitate,
            SectionType::BeforeAfter => Self::Transform,
            SectionType::UseCases | SectionType::Features => Self::Demonstrate,
            SectionType::UniqueMechanism | SectionType::ComparisonTable => Self::Differentiate,
            SectionType::HowItWorks => Self::Explain,
            SectionType::Results | SectionType::Testimonials | SectionType::SocialProof => {
                Self::Prove
            }
            SectionType::ObjectionHandling
            | SectionType::Security
            | SectionType::Faq
            | SectionType::Integrations => Self::Reassure,
            SectionType::FounderNote => Self::Humanize,
            SectionType::Pricing | SectionType::Cta | SectionType::CloseSection => Self::Convert,
        }
    }
}

/// The section rendered immediately before the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// Realized layout, when the planner threads it forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<LayoutTone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<LayoutDensity>,
}

impl PreviousSection {
    pub fn of(section_type: SectionType) -> Self {
        Self {
            section_type,
            layout: None,
            tone: None,
            density: None,
        }
    }
}

/// The section rendered immediately after the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<SectionPurpose>,
}

/// Position-dependent metadata for one section. Every field is optional so
/// a context without flow information still drives every picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_purpose: Option<SectionPurpose>,
    /// 1-based position on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_in_flow: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sections_in_flow: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_section: Option<PreviousSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_section: Option<NextSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_tone: Option<FlowTone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_complexity: Option<FlowComplexity>,
}

impl FlowContext {
    /// Whether any flow field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_purpose() {
        assert_eq!(SectionPurpose::of(SectionType::Hero), SectionPurpose::Hook);
        assert_eq!(SectionPurpose::of(SectionType::Faq), SectionPurpose::Reassure);
        assert_eq!(
            SectionPurpose::of(SectionType::CloseSection),
            SectionPurpose::Convert
        );
        // Total over the section list.
        for section in SectionType::ALL {
            let _ = SectionPurpose::of(*section);
        }
    }

    #[test]
    fn flow_context_uses_camel_case_wire_names() {
        let flow = FlowContext {
            position_in_flow: Some(2),
            total_sections_in_flow: Some(7),
            previous_section: Some(PreviousSection::of(SectionType::Problem)),
            flow_tone: Some(FlowTone::Emotional),
            ..Default::default()
        };
        let json = serde_json::to_value(&flow).expect("serialize");
        assert_eq!(json["positionInFlow"], 2);
        assert_eq!(json["previousSection"]["type"], "problem");
        assert_eq!(json["flowTone"], "emotional");
        assert!(json.get("nextSection").is_none());
    }

    #[test]
    fn empty_flow_context() {
        assert!(FlowContext::default().is_empty());
        let flow = FlowContext {
            flow_complexity: Some(FlowComplexity::Simple),
            ..Default::default()
        };
        assert!(!flow.is_empty());
    }
}
