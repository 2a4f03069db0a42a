//! Layout classifiers: tag a layout name with density, tone and complexity.
//!
//! Each axis has two curated fragment lists, one per extreme, checked by
//! substring containment in a fixed order. The middle tag is what a name
//! matching neither extreme gets, so it needs no list of its own.

use serde::Serialize;

use layoutpilot_shared::{LayoutComplexity, LayoutDensity, LayoutTone};

// ---------------------------------------------------------------------------
// Fragment tables
// ---------------------------------------------------------------------------

const LIGHT_FRAGMENTS: &[&str] = &[
    "Minimal", "Simple", "Centered", "centerStacked", "Strip", "Bar", "BadgeLine", "BadgeRow",
    "LogoWall", "LogoGrid", "MiniCards", "MiniStacked", "EmojiOutcome", "InlineQnA",
    "PillarIcons", "OutcomeIcons",
];

const HEAVY_FRAGMENTS: &[&str] = &[
    "Matrix", "Journey", "Timeline", "Accordion", "Segment", "Interactive", "Methodology",
    "Explainer", "Diagram", "Comparison", "Tabbed", "Tabby", "Multistep", "Walkthrough",
    "FullNav", "MultiColumn", "Policy", "Audit",
];

const ANALYTICAL_FRAGMENTS: &[&str] = &[
    "Stat", "Metric", "Matrix", "Comparison", "Checkmark", "Technical", "Diagram", "Audit",
    "Compliance", "Security", "Slider", "Feature", "Tier", "Timeline", "Methodology", "Patent",
    "Explainer", "Model",
];

const EMOTIONAL_FRAGMENTS: &[&str] = &[
    "Emotional", "Story", "Persona", "Journey", "Letter", "Mission", "Founder", "Video",
    "Avatar", "Pain", "Quote", "Belief", "Testimonial", "BeforeImage", "Bonus", "Countdown",
    "Guarantee", "Emoji",
];

const SIMPLE_FRAGMENTS: &[&str] = &[
    "Minimal", "Simple", "Centered", "centerStacked", "Strip", "Bar", "Badge", "Mini", "Emoji",
    "Icon", "ThreeStep", "Inline", "LogoWall", "LogoGrid", "Bullets",
];

const DETAILED_FRAGMENTS: &[&str] = &[
    "Matrix", "Journey", "Timeline", "Methodology", "Explainer", "Diagram", "Interactive",
    "Segment", "Tabbed", "Comparison", "Audit", "Policy", "Multistep", "Zapier", "Model",
    "Walkthrough", "FullNav", "MultiColumn",
];

const DENSITY_ORDER: &[(&[&str], LayoutDensity)] = &[
    (LIGHT_FRAGMENTS, LayoutDensity::Light),
    (HEAVY_FRAGMENTS, LayoutDensity::Heavy),
];

const TONE_ORDER: &[(&[&str], LayoutTone)] = &[
    (ANALYTICAL_FRAGMENTS, LayoutTone::Analytical),
    (EMOTIONAL_FRAGMENTS, LayoutTone::Emotional),
];

const COMPLEXITY_ORDER: &[(&[&str], LayoutComplexity)] = &[
    (SIMPLE_FRAGMENTS, LayoutComplexity::Simple),
    (DETAILED_FRAGMENTS, LayoutComplexity::Detailed),
];

/// First tag whose fragment list matches `layout`, else `default`.
fn first_match<T: Copy>(layout: &str, order: &[(&[&str], T)], default: T) -> T {
    order
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|fragment| layout.contains(fragment)))
        .map_or(default, |(_, tag)| *tag)
}

// ---------------------------------------------------------------------------
// Classifiers
// ---------------------------------------------------------------------------

/// Visual density of a layout. Light wins over heavy.
pub fn classify_density(layout: &str) -> LayoutDensity {
    first_match(layout, DENSITY_ORDER, LayoutDensity::Medium)
}

/// Emotional register of a layout. Analytical wins over emotional.
pub fn classify_tone(layout: &str) -> LayoutTone {
    first_match(layout, TONE_ORDER, LayoutTone::Balanced)
}

/// Cognitive load of a layout. Simple wins over detailed.
pub fn classify_complexity(layout: &str) -> LayoutComplexity {
    first_match(layout, COMPLEXITY_ORDER, LayoutComplexity::Moderate)
}

/// All three tags of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutTags {
    pub density: LayoutDensity,
    pub tone: LayoutTone,
    pub complexity: LayoutComplexity,
}

pub fn classify(layout: &str) -> LayoutTags {
    LayoutTags {
        density: classify_density(layout),
        tone: classify_tone(layout),
        complexity: classify_complexity(layout),
    }
}

#[cfg(test)]
mod tests {
    use layoutpilot_shared::SectionType;

    use super::*;

    #[test]
    fn density_precedence() {
        assert_eq!(classify_density("MinimalNavHeader"), LayoutDensity::Light);
        assert_eq!(classify_density("centerStacked"), LayoutDensity::Light);
        assert_eq!(classify_density("RoleBenefitMatrix"), LayoutDensity::Heavy);
        // Light beats heavy when both match.
        assert_eq!(classify_density("MiniStackedCards"), LayoutDensity::Light);
        assert_eq!(classify_density("AccordionSteps"), LayoutDensity::Heavy);
        assert_eq!(classify_density("QuoteGrid"), LayoutDensity::Medium);
    }

    #[test]
    fn tone_precedence() {
        assert_eq!(classify_tone("StatBlocks"), LayoutTone::Analytical);
        assert_eq!(classify_tone("EmotionalQuotes"), LayoutTone::Emotional);
        // Analytical beats emotional: "Quote" + "Metric".
        assert_eq!(classify_tone("QuoteWithMetric"), LayoutTone::Analytical);
        assert_eq!(classify_tone("PersonaUseCaseCompare"), LayoutTone::Emotional);
        assert_eq!(classify_tone("BeforeAfterStats"), LayoutTone::Analytical);
        assert_eq!(classify_tone("IconGrid"), LayoutTone::Balanced);
    }

    #[test]
    fn complexity_precedence() {
        assert_eq!(classify_complexity("ThreeStepHorizontal"), LayoutComplexity::Simple);
        assert_eq!(classify_complexity("ZapierLikeBuilderPreview"), LayoutComplexity::Detailed);
        assert_eq!(classify_complexity("ScenarioCards"), LayoutComplexity::Moderate);
        assert_eq!(classify_complexity("IconCircleSteps"), LayoutComplexity::Simple);
    }

    #[test]
    fn unmatched_names_get_middle_tags() {
        let tags = classify("Announcement");
        assert_eq!(tags.density, LayoutDensity::Medium);
        assert_eq!(tags.tone, LayoutTone::Balanced);
        assert_eq!(tags.complexity, LayoutComplexity::Moderate);
        assert_eq!(classify(""), tags);

        // Everyday catalog names land in the middle on every axis.
        for layout in ["CardGrid", "SplitPanel", "TilesCarousel"] {
            assert_eq!(classify(layout), tags, "{layout}");
        }
    }

    #[test]
    fn classifiers_are_total_over_catalogs() {
        for section in SectionType::ALL {
            for layout in section.catalog() {
                // Must not panic; result is one of the enum values.
                let _ = classify(layout);
            }
        }
    }
}
