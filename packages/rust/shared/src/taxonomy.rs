//! Closed vocabularies describing a product's market, audience and strategy.
//!
//! Every taxonomy is a string-backed enum. Values outside the vocabulary are
//! kept verbatim in an `Other` variant instead of being rejected, so a context
//! carrying a stale or misspelled value still deserializes and simply matches
//! no rule downstream.

use serde::{Deserialize, Serialize};

/// Declares a string-backed taxonomy enum.
///
/// The optional `aliases` block maps extra wire values (fine-grained ids from
/// older schemas) onto a canonical variant.
macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $id:literal ),+ $(,)?
        }
        $( aliases { $( $alias:literal => $target:ident ),+ $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $variant, )+
            /// A value outside the known vocabulary, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every canonical value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($id),+];

            /// The wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $id, )+
                    Self::Other(raw) => raw,
                }
            }

            /// Whether this value belongs to the vocabulary.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            fn lookup(raw: &str) -> Option<Self> {
                match raw {
                    $( $id => Some(Self::$variant), )+
                    $( $( $alias => Some(Self::$target), )+ )?
                    _ => None,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::lookup(&raw).unwrap_or(Self::Other(raw))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::lookup(raw).unwrap_or_else(|| Self::Other(raw.to_string()))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Buyer psychology
// ---------------------------------------------------------------------------

taxonomy! {
    /// How aware the visitor is of their problem and of the product.
    AwarenessLevel {
        Unaware => "unaware",
        ProblemAware => "problem-aware",
        SolutionAware => "solution-aware",
        ProductAware => "product-aware",
        MostAware => "most-aware",
    }
}

taxonomy! {
    /// Voice of the page copy.
    ToneProfile {
        ConfidentPlayful => "confident-playful",
        MinimalTechnical => "minimal-technical",
        BoldPersuasive => "bold-persuasive",
        FriendlyHelpful => "friendly-helpful",
        LuxuryExpert => "luxury-expert",
    }
}

taxonomy! {
    /// How saturated the market's promises are (Schwartz levels 1–5).
    MarketSophisticationLevel {
        Level1 => "level-1",
        Level2 => "level-2",
        Level3 => "level-3",
        Level4 => "level-4",
        Level5 => "level-5",
    }
}

impl MarketSophisticationLevel {
    /// Numeric level, `None` for unknown values.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Level1 => Some(1),
            Self::Level2 => Some(2),
            Self::Level3 => Some(3),
            Self::Level4 => Some(4),
            Self::Level5 => Some(5),
            Self::Other(_) => None,
        }
    }
}

taxonomy! {
    /// Whether copy leads with pain or with desire.
    CopyIntent {
        PainLed => "pain-led",
        DesireLed => "desire-led",
    }
}

taxonomy! {
    /// The core problem the product solves.
    ProblemType {
        ManualRepetition => "manual-repetition",
        BurnoutOrOverload => "burnout-or-overload",
        ComplianceOrRisk => "compliance-or-risk",
        LostRevenueOrInefficiency => "lost-revenue-or-inefficiency",
        CreativeEmpowerment => "creative-empowerment",
        PersonalGrowthOrProductivity => "personal-growth-or-productivity",
        ProfessionalImageOrBranding => "professional-image-or-branding",
        TimeFreedomOrAutomation => "time-freedom-or-automation",
    }
}

impl ProblemType {
    /// The copy intent a problem type naturally pairs with.
    pub fn natural_copy_intent(&self) -> Option<CopyIntent> {
        match self {
            Self::ManualRepetition
            | Self::BurnoutOrOverload
            | Self::ComplianceOrRisk
            | Self::LostRevenueOrInefficiency => Some(CopyIntent::PainLed),
            Self::CreativeEmpowerment
            | Self::PersonalGrowthOrProductivity
            | Self::ProfessionalImageOrBranding
            | Self::TimeFreedomOrAutomation => Some(CopyIntent::DesireLed),
            Self::Other(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Market & company
// ---------------------------------------------------------------------------

taxonomy! {
    /// Top-level product category.
    MarketCategory {
        WorkProductivity => "Work & Productivity Tools",
        MarketingSales => "Marketing & Sales Tools",
        EngineeringDevelopment => "Engineering & Development Tools",
        AiTools => "AI Tools",
        DesignCreative => "Design & Creative Tools",
        NoCodeLowCode => "No-Code & Low-Code Platforms",
        CustomerSupport => "Customer Support & Service Tools",
        DataAnalytics => "Data & Analytics Tools",
        HrPeopleOps => "HR & People Operations Tools",
        FinanceAccounting => "Finance & Accounting Tools",
        Web3Blockchain => "Web3 & Blockchain Tools",
        AddOnsIntegrations => "Product Add-ons & Integrations",
        IndustrySpecific => "Industry-Specific SaaS",
    }
    aliases {
        "Business Productivity Tools" => WorkProductivity,
    }
}

taxonomy! {
    /// Company stage group. Fine-grained stage ids are accepted and folded
    /// into their group.
    StartupStage {
        Idea => "idea",
        Mvp => "mvp",
        Traction => "traction",
        Growth => "growth",
        Scale => "scale",
    }
    aliases {
        "problem-exploration" => Idea,
        "pre-mvp" => Idea,
        "mvp-development" => Mvp,
        "mvp-launched" => Mvp,
        "early-feedback" => Mvp,
        "problem-solution-fit" => Traction,
        "validated-early" => Traction,
        "early-monetization" => Traction,
        "building-v2" => Traction,
        "targeting-pmf" => Growth,
        "users-250-500" => Growth,
        "users-500-1k" => Growth,
        "users-1k-5k" => Growth,
        "mrr-growth" => Growth,
        "seed-funded" => Growth,
        "series-b" => Scale,
        "scaling-infra" => Scale,
        "global-suite" => Scale,
    }
}

impl StartupStage {
    /// Idea or MVP: no real product screenshots or customers yet.
    pub fn is_pre_launch(&self) -> bool {
        matches!(self, Self::Idea | Self::Mvp)
    }
}

taxonomy! {
    /// The primary conversion goal of the page.
    LandingGoal {
        Waitlist => "waitlist",
        EarlyAccess => "early-access",
        Signup => "signup",
        FreeTrial => "free-trial",
        Demo => "demo",
        BookCall => "book-call",
        BuyNow => "buy-now",
        Subscribe => "subscribe",
        Download => "download",
        JoinCommunity => "join-community",
        WatchVideo => "watch-video",
        ContactSales => "contact-sales",
    }
}

/// How hard a goal's call to action pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaStrength {
    Soft,
    Direct,
    Trust,
    Hard,
}

impl LandingGoal {
    /// CTA strength associated with the goal.
    pub fn cta_strength(&self) -> Option<CtaStrength> {
        match self {
            Self::Waitlist | Self::EarlyAccess | Self::JoinCommunity | Self::WatchVideo => {
                Some(CtaStrength::Soft)
            }
            Self::Signup | Self::FreeTrial | Self::Download => Some(CtaStrength::Direct),
            Self::Demo | Self::BookCall | Self::ContactSales => Some(CtaStrength::Trust),
            Self::BuyNow | Self::Subscribe => Some(CtaStrength::Hard),
            Self::Other(_) => None,
        }
    }
}

taxonomy! {
    /// Audience group. Individual audience ids are accepted and folded into
    /// their group.
    TargetAudience {
        Founders => "founders",
        Creators => "creators",
        Marketers => "marketers",
        Businesses => "businesses",
        Builders => "builders",
        Enterprise => "enterprise",
        Community => "community",
    }
    aliases {
        "early-stage-founders" => Founders,
        "solopreneurs" => Founders,
        "startup-teams" => Founders,
        "indie-hackers" => Founders,
        "tech-founders" => Founders,
        "non-tech-founders" => Founders,
        "content-creators" => Creators,
        "youtubers" => Creators,
        "newsletter-writers" => Creators,
        "podcasters" => Creators,
        "online-educators" => Creators,
        "course-creators" => Creators,
        "coaches-consultants" => Creators,
        "cohort-instructors" => Creators,
        "growth-hackers" => Marketers,
        "performance-marketers" => Marketers,
        "product-marketers" => Marketers,
        "fractional-cmos" => Marketers,
        "freelance-marketers" => Marketers,
        "marketing-agencies" => Marketers,
        "design-agencies" => Marketers,
        "no-code-agencies" => Marketers,
        "early-stage-startups" => Businesses,
        "smbs" => Businesses,
        "d2c-brands" => Businesses,
        "ecommerce-sellers" => Businesses,
        "local-service-providers" => Businesses,
        "mid-market-companies" => Businesses,
        "non-profits" => Businesses,
        "developers" => Builders,
        "no-code-builders" => Builders,
        "product-managers" => Builders,
        "startup-ctos" => Builders,
        "enterprise-tech-teams" => Enterprise,
        "enterprise-marketing-teams" => Enterprise,
        "it-decision-makers" => Enterprise,
        "community-managers" => Community,
    }
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

taxonomy! {
    /// How the product charges.
    PricingModel {
        Free => "free",
        Freemium => "freemium",
        TrialFree => "trial-free",
        TrialPaid => "trial-paid",
        FlatMonthly => "flat-monthly",
        Tiered => "tiered",
        PerSeat => "per-seat",
        UsageBased => "usage-based",
        CustomQuote => "custom-quote",
    }
}

/// Purchase friction implied by a pricing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Friction {
    Frictionless,
    Low,
    Medium,
    High,
}

impl PricingModel {
    /// Purchase friction of the model, `None` for unknown models.
    pub fn friction(&self) -> Option<Friction> {
        match self {
            Self::Free => Some(Friction::Frictionless),
            Self::Freemium | Self::TrialFree => Some(Friction::Low),
            Self::TrialPaid | Self::FlatMonthly | Self::Tiered => Some(Friction::Medium),
            Self::PerSeat | Self::UsageBased | Self::CustomQuote => Some(Friction::High),
            Self::Other(_) => None,
        }
    }
}

taxonomy! {
    /// Optional sweetener attached to the price.
    PricingModifier {
        MoneyBack => "money-back",
        Discount => "discount",
        PayAfterUse => "pay-after-use",
    }
}

taxonomy! {
    /// What the visitor must commit to start.
    PricingCommitment {
        NoCard => "no-card",
        CardRequired => "card-required",
        PaidTrial => "paid-trial",
        UpfrontPayment => "upfront-payment",
        AnnualOnly => "annual-only",
        TalkToSales => "talk-to-sales",
    }
}

// ---------------------------------------------------------------------------
// Vocabulary listing
// ---------------------------------------------------------------------------

/// Context field names paired with their canonical vocabularies.
pub fn vocabulary() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("awarenessLevel", AwarenessLevel::VALUES),
        ("toneProfile", ToneProfile::VALUES),
        ("marketSophisticationLevel", MarketSophisticationLevel::VALUES),
        ("copyIntent", CopyIntent::VALUES),
        ("problemType", ProblemType::VALUES),
        ("marketCategory", MarketCategory::VALUES),
        ("startupStage", StartupStage::VALUES),
        ("landingPageGoals", LandingGoal::VALUES),
        ("targetAudience", TargetAudience::VALUES),
        ("pricingModel", PricingModel::VALUES),
        ("pricingModifier", PricingModifier::VALUES),
        ("pricingCommitmentOption", PricingCommitment::VALUES),
    ]
}
