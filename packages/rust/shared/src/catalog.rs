//! Section types and their closed layout catalogs.
//!
//! Every section type owns a fixed, non-empty set of layout variants. Each
//! catalog is its own enum implementing [`Layout`], so a picker can only ever
//! return a member of its own section's catalog.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SectionType
// ---------------------------------------------------------------------------

/// A content block type on a landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionType {
    Header,
    Hero,
    Problem,
    BeforeAfter,
    UseCases,
    Features,
    UniqueMechanism,
    HowItWorks,
    Results,
    Testimonials,
    SocialProof,
    ComparisonTable,
    ObjectionHandling,
    Integrations,
    Security,
    Pricing,
    FounderNote,
    #[serde(rename = "faq")]
    Faq,
    #[serde(rename = "cta")]
    Cta,
    CloseSection,
    Footer,
}

/// Leading alphabetic run of a section id (`hero-1753195467366` → `hero`).
static SECTION_TYPE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+").expect("valid section prefix regex"));

impl SectionType {
    /// All section types in conventional page order.
    pub const ALL: &'static [SectionType] = &[
        Self::Header,
        Self::Hero,
        Self::Problem,
        Self::BeforeAfter,
        Self::UseCases,
        Self::Features,
        Self::UniqueMechanism,
        Self::HowItWorks,
        Self::Results,
        Self::Testimonials,
        Self::SocialProof,
        Self::ComparisonTable,
        Self::ObjectionHandling,
        Self::Integrations,
        Self::Security,
        Self::Pricing,
        Self::FounderNote,
        Self::Faq,
        Self::Cta,
        Self::CloseSection,
        Self::Footer,
    ];

    /// Canonical camelCase id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Problem => "problem",
            Self::BeforeAfter => "beforeAfter",
            Self::UseCases => "useCases",
            Self::Features => "features",
            Self::UniqueMechanism => "uniqueMechanism",
            Self::HowItWorks => "howItWorks",
            Self::Results => "results",
            Self::Testimonials => "testimonials",
            Self::SocialProof => "socialProof",
            Self::ComparisonTable => "comparisonTable",
            Self::ObjectionHandling => "objectionHandling",
            Self::Integrations => "integrations",
            Self::Security => "security",
            Self::Pricing => "pricing",
            Self::FounderNote => "founderNote",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::CloseSection => "closeSection",
            Self::Footer => "footer",
        }
    }

    /// Resolve a section type name through the canonical table, accepting
    /// the aliases older page documents use.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let section = match name {
            "header" => Self::Header,
            "hero" => Self::Hero,
            "problem" => Self::Problem,
            "beforeAfter" => Self::BeforeAfter,
            "useCases" | "useCase" => Self::UseCases,
            "features" | "feature" => Self::Features,
            "uniqueMechanism" => Self::UniqueMechanism,
            "howItWorks" => Self::HowItWorks,
            "results" | "result" => Self::Results,
            "testimonials" | "testimonial" => Self::Testimonials,
            "socialProof" => Self::SocialProof,
            "comparisonTable" | "comparison" => Self::ComparisonTable,
            "objectionHandling" | "objectionHandle" | "objections" => Self::ObjectionHandling,
            "integrations" | "integration" => Self::Integrations,
            "security" => Self::Security,
            "pricing" => Self::Pricing,
            "founderNote" => Self::FounderNote,
            "faq" | "FAQ" => Self::Faq,
            "cta" | "CTA" | "primaryCTA" => Self::Cta,
            "closeSection" | "close" => Self::CloseSection,
            "footer" => Self::Footer,
            _ => return None,
        };
        Some(section)
    }

    /// Extract the type name from a section id (`hero-1753195467366`,
    /// `features`, ...). Returns `None` if the id has no alphabetic prefix.
    pub fn type_name_of(section_id: &str) -> Option<&str> {
        SECTION_TYPE_PREFIX.find(section_id).map(|m| m.as_str())
    }

    /// Resolve a section id to its section type.
    pub fn from_id(section_id: &str) -> Option<Self> {
        Self::type_name_of(section_id).and_then(Self::from_type_name)
    }

    /// Layout ids of this section's catalog, in declaration order.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            Self::Header => HeaderLayout::IDS,
            Self::Hero => HeroLayout::IDS,
            Self::Problem => ProblemLayout::IDS,
            Self::BeforeAfter => BeforeAfterLayout::IDS,
            Self::UseCases => UseCasesLayout::IDS,
            Self::Features => FeaturesLayout::IDS,
            Self::UniqueMechanism => UniqueMechanismLayout::IDS,
            Self::HowItWorks => HowItWorksLayout::IDS,
            Self::Results => ResultsLayout::IDS,
            Self::Testimonials => TestimonialsLayout::IDS,
            Self::SocialProof => SocialProofLayout::IDS,
            Self::ComparisonTable => ComparisonTableLayout::IDS,
            Self::ObjectionHandling => ObjectionHandlingLayout::IDS,
            Self::Integrations => IntegrationsLayout::IDS,
            Self::Security => SecurityLayout::IDS,
            Self::Pricing => PricingLayout::IDS,
            Self::FounderNote => FounderNoteLayout::IDS,
            Self::Faq => FaqLayout::IDS,
            Self::Cta => CtaLayout::IDS,
            Self::CloseSection => CloseSectionLayout::IDS,
            Self::Footer => FooterLayout::IDS,
        }
    }

    /// Static fallback table: the universal default layout of each section.
    pub fn default_layout(&self) -> &'static str {
        match self {
            Self::Header => HeaderLayout::MinimalNavHeader.as_str(),
            Self::Hero => HeroLayout::CenterStacked.as_str(),
            Self::Problem => ProblemLayout::StackedPainBullets.as_str(),
            Self::BeforeAfter => BeforeAfterLayout::SideBySideBlocks.as_str(),
            Self::UseCases => UseCasesLayout::PersonaGrid.as_str(),
            Self::Features => FeaturesLayout::IconGrid.as_str(),
            Self::UniqueMechanism => UniqueMechanismLayout::StackedHighlights.as_str(),
            Self::HowItWorks => HowItWorksLayout::ThreeStepHorizontal.as_str(),
            Self::Results => ResultsLayout::StatBlocks.as_str(),
            Self::Testimonials => TestimonialsLayout::QuoteGrid.as_str(),
            Self::SocialProof => SocialProofLayout::LogoWall.as_str(),
            Self::ComparisonTable => ComparisonTableLayout::BasicFeatureGrid.as_str(),
            Self::ObjectionHandling => ObjectionHandlingLayout::ObjectionAccordion.as_str(),
            Self::Integrations => IntegrationsLayout::LogoGrid.as_str(),
            Self::Security => SecurityLayout::SecurityChecklist.as_str(),
            Self::Pricing => PricingLayout::TierCards.as_str(),
            Self::FounderNote => FounderNoteLayout::LetterStyleBlock.as_str(),
            Self::Faq => FaqLayout::AccordionFaq.as_str(),
            Self::Cta => CtaLayout::CenteredHeadlineCta.as_str(),
            Self::CloseSection => CloseSectionLayout::MockupWithCta.as_str(),
            Self::Footer => FooterLayout::SimpleFooter.as_str(),
        }
    }

    /// Whether `layout` belongs to this section's catalog.
    pub fn has_layout(&self, layout: &str) -> bool {
        self.catalog().contains(&layout)
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_type_name(s).ok_or_else(|| format!("unknown section type '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Layout trait
// ---------------------------------------------------------------------------

/// A layout variant belonging to exactly one section's catalog.
pub trait Layout: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    /// The section type whose catalog this is.
    const SECTION: SectionType;
    /// Every variant, in declaration order (the tie-break order).
    const ALL: &'static [Self];
    /// Wire ids, parallel to `ALL`.
    const IDS: &'static [&'static str];

    /// Wire id of the variant.
    fn as_str(&self) -> &'static str;

    /// Look a variant up by wire id.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|layout| layout.as_str() == id)
    }
}

/// Declares a layout catalog enum for one section type.
macro_rules! layout_catalog {
    (
        $(#[$meta:meta])*
        $name:ident for $section:ident {
            $( $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $id)] $variant, )+
        }

        impl Layout for $name {
            const SECTION: SectionType = SectionType::$section;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const IDS: &'static [&'static str] = &[$($id),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $id, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

layout_catalog! {
    HeaderLayout for Header {
        MinimalNavHeader => "MinimalNavHeader",
        NavWithCtaHeader => "NavWithCTAHeader",
        CenteredLogoHeader => "CenteredLogoHeader",
        FullNavHeader => "FullNavHeader",
    }
}

layout_catalog! {
    /// Hero layouts. `centerStacked` is the text-only option.
    HeroLayout for Hero {
        LeftCopyRightImage => "leftCopyRightImage",
        CenterStacked => "centerStacked",
        SplitScreen => "splitScreen",
        ImageFirst => "imageFirst",
    }
}

layout_catalog! {
    ProblemLayout for Problem {
        StackedPainBullets => "StackedPainBullets",
        BeforeImageAfterText => "BeforeImageAfterText",
        EmotionalQuotes => "EmotionalQuotes",
        CollapsedCards => "CollapsedCards",
        PersonaPanels => "PersonaPanels",
    }
}

layout_catalog! {
    BeforeAfterLayout for BeforeAfter {
        SideBySideBlocks => "SideBySideBlocks",
        StackedTextVisual => "StackedTextVisual",
        BeforeAfterSlider => "BeforeAfterSlider",
        SplitCard => "SplitCard",
        TextListTransformation => "TextListTransformation",
        VisualStoryline => "VisualStoryline",
        StatComparison => "StatComparison",
        PersonaJourney => "PersonaJourney",
    }
}

layout_catalog! {
    UseCasesLayout for UseCases {
        PersonaGrid => "PersonaGrid",
        TabbedUseCases => "TabbedUseCases",
        IndustryTiles => "IndustryTiles",
        ScenarioCards => "ScenarioCards",
        SegmentSplitBlocks => "SegmentSplitBlocks",
        CarouselAvatars => "CarouselAvatars",
        RoleBenefitMatrix => "RoleBenefitMatrix",
    }
}

layout_catalog! {
    FeaturesLayout for Features {
        IconGrid => "IconGrid",
        SplitAlternating => "SplitAlternating",
        FeatureTestimonial => "FeatureTestimonial",
        MetricTiles => "MetricTiles",
        MiniCards => "MiniCards",
        Carousel => "Carousel",
    }
}

layout_catalog! {
    UniqueMechanismLayout for UniqueMechanism {
        StackedHighlights => "StackedHighlights",
        ExplainerWithTags => "ExplainerWithTags",
        VisualFlywheel => "VisualFlywheel",
        PillarIcons => "PillarIcons",
        IllustratedModel => "IllustratedModel",
        PatentStrip => "PatentStrip",
        TechnicalCards => "TechnicalCards",
        ComparisonTable => "ComparisonTable",
    }
}

layout_catalog! {
    HowItWorksLayout for HowItWorks {
        ThreeStepHorizontal => "ThreeStepHorizontal",
        VerticalTimeline => "VerticalTimeline",
        IconCircleSteps => "IconCircleSteps",
        AccordionSteps => "AccordionSteps",
        VideoWalkthrough => "VideoWalkthrough",
        ZigzagImageSteps => "ZigzagImageSteps",
        AnimatedProcessLine => "AnimatedProcessLine",
    }
}

layout_catalog! {
    ResultsLayout for Results {
        StatBlocks => "StatBlocks",
        BeforeAfterStats => "BeforeAfterStats",
        QuoteWithMetric => "QuoteWithMetric",
        EmojiOutcomeGrid => "EmojiOutcomeGrid",
        TimelineResults => "TimelineResults",
        OutcomeIcons => "OutcomeIcons",
        StackedWinsList => "StackedWinsList",
        PersonaResultPanels => "PersonaResultPanels",
    }
}

layout_catalog! {
    TestimonialsLayout for Testimonials {
        QuoteGrid => "QuoteGrid",
        VideoTestimonials => "VideoTestimonials",
        AvatarCarousel => "AvatarCarousel",
        BeforeAfterQuote => "BeforeAfterQuote",
        SegmentedTestimonials => "SegmentedTestimonials",
        RatingCards => "RatingCards",
        PullQuoteStack => "PullQuoteStack",
        InteractiveTestimonialMap => "InteractiveTestimonialMap",
    }
}

layout_catalog! {
    SocialProofLayout for SocialProof {
        LogoWall => "LogoWall",
        MediaMentions => "MediaMentions",
        UserCountBar => "UserCountBar",
        IndustryBadgeLine => "IndustryBadgeLine",
        MapHeatSpots => "MapHeatSpots",
        StackedStats => "StackedStats",
        StripWithReviews => "StripWithReviews",
        SocialProofStrip => "SocialProofStrip",
    }
}

layout_catalog! {
    ComparisonTableLayout for ComparisonTable {
        BasicFeatureGrid => "BasicFeatureGrid",
        CheckmarkComparison => "CheckmarkComparison",
        YouVsThemHighlight => "YouVsThemHighlight",
        ToggleableComparison => "ToggleableComparison",
        CompetitorCallouts => "CompetitorCallouts",
        AnimatedUpgradePath => "AnimatedUpgradePath",
        PersonaUseCaseCompare => "PersonaUseCaseCompare",
        LiteVsProVsEnterprise => "LiteVsProVsEnterprise",
    }
}

layout_catalog! {
    ObjectionHandlingLayout for ObjectionHandling {
        ObjectionAccordion => "ObjectionAccordion",
        MythVsRealityGrid => "MythVsRealityGrid",
        QuoteBackedAnswers => "QuoteBackedAnswers",
        VisualObjectionTiles => "VisualObjectionTiles",
        ProblemToReframeBlocks => "ProblemToReframeBlocks",
        SkepticToBelieverSteps => "SkepticToBelieverSteps",
        BoldGuaranteePanel => "BoldGuaranteePanel",
    }
}

layout_catalog! {
    IntegrationsLayout for Integrations {
        LogoGrid => "LogoGrid",
        CategoryAccordion => "CategoryAccordion",
        InteractiveStackDiagram => "InteractiveStackDiagram",
        UseCaseTiles => "UseCaseTiles",
        BadgeCarousel => "BadgeCarousel",
        TabbyIntegrationCards => "TabbyIntegrationCards",
        ZapierLikeBuilderPreview => "ZapierLikeBuilderPreview",
        LogoWithQuoteUse => "LogoWithQuoteUse",
    }
}

layout_catalog! {
    SecurityLayout for Security {
        SecurityChecklist => "SecurityChecklist",
        ComplianceBadgeRow => "ComplianceBadgeRow",
        AuditTrustPanel => "AuditTrustPanel",
        FaqStyleSecurity => "FAQStyleSecurity",
        StatWithShieldIcons => "StatWithShieldIcons",
        PartnerValidationRow => "PartnerValidationRow",
        DiagramInfraSecurity => "DiagramInfraSecurity",
        ExpandablePolicyCards => "ExpandablePolicyCards",
    }
}

layout_catalog! {
    PricingLayout for Pricing {
        TierCards => "TierCards",
        ToggleableMonthlyYearly => "ToggleableMonthlyYearly",
        FeatureMatrix => "FeatureMatrix",
        SegmentBasedPricing => "SegmentBasedPricing",
        SliderPricing => "SliderPricing",
        CallToQuotePlan => "CallToQuotePlan",
        CardWithTestimonial => "CardWithTestimonial",
        MiniStackedCards => "MiniStackedCards",
    }
}

layout_catalog! {
    FounderNoteLayout for FounderNote {
        LetterStyleBlock => "LetterStyleBlock",
        FounderCardWithQuote => "FounderCardWithQuote",
        VideoNoteWithTranscript => "VideoNoteWithTranscript",
        MissionQuoteOverlay => "MissionQuoteOverlay",
        TimelineToToday => "TimelineToToday",
        SideBySidePhotoStory => "SideBySidePhotoStory",
        StoryBlockWithPullquote => "StoryBlockWithPullquote",
        FoundersBeliefStack => "FoundersBeliefStack",
    }
}

layout_catalog! {
    FaqLayout for Faq {
        AccordionFaq => "AccordionFAQ",
        TwoColumnFaq => "TwoColumnFAQ",
        InlineQnAList => "InlineQnAList",
        SegmentedFaqTabs => "SegmentedFAQTabs",
        QuoteStyleAnswers => "QuoteStyleAnswers",
        IconWithAnswers => "IconWithAnswers",
        TestimonialFaqs => "TestimonialFAQs",
        ChatBubbleFaq => "ChatBubbleFAQ",
    }
}

layout_catalog! {
    CtaLayout for Cta {
        CenteredHeadlineCta => "CenteredHeadlineCTA",
        CtaWithBadgeRow => "CTAWithBadgeRow",
        VisualCtaWithMockup => "VisualCTAWithMockup",
        SideBySideCta => "SideBySideCTA",
        CountdownLimitedCta => "CountdownLimitedCTA",
        CtaWithFormField => "CTAWithFormField",
        ValueStackCta => "ValueStackCTA",
        TestimonialCtaCombo => "TestimonialCTACombo",
    }
}

layout_catalog! {
    CloseSectionLayout for CloseSection {
        MockupWithCta => "MockupWithCTA",
        BonusStackCta => "BonusStackCTA",
        LeadMagnetCard => "LeadMagnetCard",
        EnterpriseContactBox => "EnterpriseContactBox",
        ValueReinforcementBlock => "ValueReinforcementBlock",
        LivePreviewEmbed => "LivePreviewEmbed",
        SideBySideOfferCards => "SideBySideOfferCards",
        MultistepCtaStack => "MultistepCTAStack",
    }
}

layout_catalog! {
    FooterLayout for Footer {
        SimpleFooter => "SimpleFooter",
        LinksAndSocialFooter => "LinksAndSocialFooter",
        MultiColumnFooter => "MultiColumnFooter",
        ContactFooter => "ContactFooter",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn section_ids_resolve_to_types() {
        assert_eq!(SectionType::from_id("hero-1753195467366"), Some(SectionType::Hero));
        assert_eq!(SectionType::from_id("beforeAfter"), Some(SectionType::BeforeAfter));
        assert_eq!(SectionType::from_id("useCase-42"), Some(SectionType::UseCases));
        assert_eq!(SectionType::from_id("primaryCTA-1"), Some(SectionType::Cta));
        assert_eq!(SectionType::from_id("announcement-7"), None);
        assert_eq!(SectionType::from_id("1234"), None);
    }

    #[test]
    fn type_name_is_leading_alpha_run() {
        assert_eq!(SectionType::type_name_of("closeSection-99"), Some("closeSection"));
        assert_eq!(SectionType::type_name_of("-99"), None);
    }

    #[test]
    fn every_catalog_is_non_empty_and_contains_its_default() {
        for section in SectionType::ALL {
            let catalog = section.catalog();
            assert!(!catalog.is_empty(), "{section} has an empty catalog");
            assert!(
                section.has_layout(section.default_layout()),
                "{section} default is outside its catalog"
            );
        }
    }

    #[test]
    fn catalogs_are_disjoint() {
        let mut seen = HashSet::new();
        for section in SectionType::ALL {
            for layout in section.catalog() {
                assert!(seen.insert(*layout), "layout {layout} appears twice");
            }
        }
    }

    #[test]
    fn canonical_names_round_trip() {
        for section in SectionType::ALL {
            assert_eq!(SectionType::from_type_name(section.as_str()), Some(*section));
            let json = serde_json::to_string(section).expect("serialize");
            assert_eq!(json, format!("\"{}\"", section.as_str()));
        }
    }

    #[test]
    fn layout_lookup_by_id() {
        assert_eq!(HeroLayout::from_id("imageFirst"), Some(HeroLayout::ImageFirst));
        assert_eq!(FaqLayout::from_id("AccordionFAQ"), Some(FaqLayout::AccordionFaq));
        assert_eq!(HeroLayout::from_id("IconGrid"), None);
        assert_eq!(HeroLayout::SECTION, SectionType::Hero);
        assert_eq!(HeroLayout::ALL.len(), HeroLayout::IDS.len());
    }
}
