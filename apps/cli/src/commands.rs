//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use layoutpilot_core::{
    LayoutEngine, LayoutPlan, PickerRegistry, TieBreaker, TiePolicy, build_sections, classify,
    generate_flow_context,
};
use layoutpilot_shared::taxonomy::vocabulary;
use layoutpilot_shared::{
    AppConfig, BusinessContext, PlanSettings, SectionType, init_config, load_config,
    load_context_from, load_sections_from,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// LayoutPilot: pick a layout for every section of a landing page.
#[derive(Parser)]
#[command(
    name = "layoutpilot",
    version,
    about = "Recommend layouts for landing page sections from a business context.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// A business context plus the page's ordered sections.
#[derive(Args)]
pub(crate) struct PageInput {
    /// Business context JSON file.
    #[arg(long)]
    pub context: PathBuf,

    /// Section ids in page order (comma-separated).
    #[arg(
        long,
        value_delimiter = ',',
        required_unless_present_any = ["sections_file", "auto_sections"],
        conflicts_with = "sections_file"
    )]
    pub sections: Vec<String>,

    /// File with section ids: a JSON array or one id per line.
    #[arg(long)]
    pub sections_file: Option<PathBuf>,

    /// Derive the section list from the context instead.
    #[arg(long, conflicts_with_all = ["sections", "sections_file"])]
    pub auto_sections: bool,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Plan layouts for every section of a page.
    Plan {
        #[command(flatten)]
        input: PageInput,

        /// Seed for hero tie breaking (reproducible plans).
        #[arg(long)]
        seed: Option<u64>,

        /// Never break ties at random.
        #[arg(long)]
        no_random: bool,

        /// Do not feed each realized layout into the next section's flow context.
        #[arg(long)]
        no_thread: bool,

        /// Replace sections whose required assets are missing.
        #[arg(long)]
        substitute_assets: bool,

        /// Print the full plan as JSON.
        #[arg(long)]
        json: bool,

        /// Show how each layout was chosen.
        #[arg(long)]
        explain: bool,
    },

    /// Run one section's picker and show its score table.
    Pick {
        /// Section type (hero, features, faq, ...).
        section: String,

        /// Business context JSON file.
        #[arg(long)]
        context: PathBuf,

        /// Seed for tie breaking. Without it the pick is deterministic.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the flow context generated for each section.
    Flow {
        #[command(flatten)]
        input: PageInput,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Derive a page's section list from its business context.
    Sections {
        /// Business context JSON file.
        #[arg(long)]
        context: PathBuf,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show density, tone, and complexity tags of layouts.
    Classify {
        /// Layout ids.
        #[arg(required = true)]
        layouts: Vec<String>,
    },

    /// List layout catalogs and their defaults.
    Catalog {
        /// Only this section type.
        section: Option<String>,
    },

    /// List the known values of each context field.
    Taxonomy {
        /// Only this field (e.g. awarenessLevel).
        field: Option<String>,
    },

    /// Report context fields holding values outside the known vocabulary.
    Check {
        /// Business context JSON file.
        #[arg(long)]
        context: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "layoutpilot=info",
        1 => "layoutpilot=debug",
        _ => "layoutpilot=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plan {
            input,
            seed,
            no_random,
            no_thread,
            substitute_assets,
            json,
            explain,
        } => cmd_plan(
            &input,
            PlanFlags {
                seed,
                no_random,
                no_thread,
                substitute_assets,
                json,
                explain,
            },
        ),
        Command::Pick {
            section,
            context,
            seed,
            json,
        } => cmd_pick(&section, &context, seed, json),
        Command::Flow { input, json } => cmd_flow(&input, json),
        Command::Sections { context, json } => cmd_sections(&context, json),
        Command::Classify { layouts } => cmd_classify(&layouts),
        Command::Catalog { section } => cmd_catalog(section.as_deref()),
        Command::Taxonomy { field } => cmd_taxonomy(field.as_deref()),
        Command::Check { context } => cmd_check(&context),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn load_page(input: &PageInput) -> Result<(BusinessContext, Vec<String>)> {
    let ctx = load_context_from(&input.context)?;
    let sections = if input.auto_sections {
        let sequence = build_sections(&ctx);
        info!(flow = %sequence.flow, sections = sequence.sections.len(), "derived section list");
        sequence.ids()
    } else {
        match &input.sections_file {
            Some(path) => load_sections_from(path)?,
            None => input.sections.clone(),
        }
    };
    if sections.is_empty() {
        return Err(eyre!("no sections given"));
    }
    Ok((ctx, sections))
}

fn tie_policy(settings: &PlanSettings) -> TiePolicy {
    TiePolicy {
        margin: settings.tie_margin,
        threshold: settings.tie_viability_threshold,
    }
}

/// Serialized form of a unit-like enum value (`"heavy"`, `"emotional"`, ...).
fn tag<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// plan
// ---------------------------------------------------------------------------

struct PlanFlags {
    seed: Option<u64>,
    no_random: bool,
    no_thread: bool,
    substitute_assets: bool,
    json: bool,
    explain: bool,
}

fn cmd_plan(input: &PageInput, flags: PlanFlags) -> Result<()> {
    let config = load_config()?;
    let (ctx, sections) = load_page(input)?;

    let mut settings = PlanSettings::from(&config);
    if flags.no_random {
        settings.randomize_hero_ties = false;
    }
    if flags.no_thread {
        settings.thread_previous_layout = false;
    }
    if flags.substitute_assets {
        settings.substitute_missing_assets = true;
    }
    debug!(?settings, "resolved plan settings");

    let randomize = settings.randomize_hero_ties;
    let engine = LayoutEngine::new(PickerRegistry::builtin(), settings);

    let plan = if randomize {
        let mut rng: Box<dyn RngCore> = match flags.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        engine.plan(&sections, &ctx, Some(&mut *rng))
    } else {
        engine.plan(&sections, &ctx, None)
    };

    if flags.json || config.defaults.output == "json" {
        return print_json(&plan);
    }
    print_plan(&plan, flags.explain);
    Ok(())
}

fn print_plan(plan: &LayoutPlan, explain: bool) {
    if !plan.substitutions.is_empty() {
        println!("Substitutions:");
        for substitution in &plan.substitutions {
            println!("  {substitution}");
        }
        println!();
    }

    let width = plan
        .decisions
        .iter()
        .map(|d| d.section_id.len())
        .max()
        .unwrap_or(0);

    for decision in &plan.decisions {
        let layout = decision.layout.as_deref().unwrap_or("(unresolved)");
        if !explain {
            println!("{:<width$}  {layout}", decision.section_id);
            continue;
        }

        println!(
            "{:<width$}  {layout:<28}  {}",
            decision.section_id, decision.resolution
        );
        if let Some(scores) = &decision.scores {
            let mut ranked = scores.clone();
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            let top: Vec<String> = ranked
                .iter()
                .take(3)
                .map(|(layout, score)| format!("{layout} {score}"))
                .collect();
            println!("{:<width$}  top: {}", "", top.join(", "));
        }
    }
}

// ---------------------------------------------------------------------------
// pick / flow / classify
// ---------------------------------------------------------------------------

fn cmd_pick(section: &str, context: &Path, seed: Option<u64>, json: bool) -> Result<()> {
    let section: SectionType = section.parse().map_err(|e: String| eyre!(e))?;
    let ctx = load_context_from(context)?;
    let settings = PlanSettings::from(&load_config()?);

    let registry = PickerRegistry::builtin();
    let picker = registry
        .get(section)
        .ok_or_else(|| eyre!("no picker registered for '{section}'"))?;

    let outcome = match seed {
        Some(seed) if settings.randomize_hero_ties => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut breaker = TieBreaker::new(tie_policy(&settings), &mut rng);
            picker.pick(&ctx, Some(&mut breaker))
        }
        _ => picker.pick(&ctx, None),
    };

    if json {
        return print_json(&outcome);
    }

    println!("{section}: {} ({})", outcome.layout, outcome.source);
    let ranked = outcome.ranked_scores();
    if ranked.is_empty() {
        return Ok(());
    }
    println!();
    for (layout, score) in ranked {
        println!("  {score:>5}  {layout}");
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlowEntry<'a> {
    section_id: &'a str,
    #[serde(flatten)]
    flow: layoutpilot_shared::FlowContext,
}

fn cmd_flow(input: &PageInput, json: bool) -> Result<()> {
    let (ctx, sections) = load_page(input)?;
    let entries: Vec<FlowEntry<'_>> = sections
        .iter()
        .enumerate()
        .map(|(index, id)| FlowEntry {
            section_id: id,
            flow: generate_flow_context(&sections, index, &ctx, None),
        })
        .collect();

    if json {
        return print_json(&entries);
    }

    for entry in &entries {
        let flow = &entry.flow;
        let previous = flow
            .previous_section
            .as_ref()
            .map_or("-", |p| p.section_type.as_str());
        let next = flow
            .next_section
            .as_ref()
            .map_or("-", |n| n.section_type.as_str());
        println!(
            "{}/{}  {:<28} purpose={} tone={} complexity={} prev={previous} next={next}",
            flow.position_in_flow.unwrap_or(0),
            flow.total_sections_in_flow.unwrap_or(0),
            entry.section_id,
            flow.section_purpose.map(|p| tag(&p)).unwrap_or_default(),
            flow.flow_tone.map(|t| tag(&t)).unwrap_or_default(),
            flow.flow_complexity.map(|c| tag(&c)).unwrap_or_default(),
        );
    }
    Ok(())
}

fn cmd_sections(context: &Path, json: bool) -> Result<()> {
    let ctx = load_context_from(context)?;
    let sequence = build_sections(&ctx);
    if json {
        return print_json(&sequence);
    }

    println!("{} ({})", sequence.flow, sequence.profile);
    println!("  {}", sequence.reasoning);
    println!();
    for (index, section) in sequence.sections.iter().enumerate() {
        println!("{:>3}  {section}", index + 1);
    }
    if !sequence.dropped.is_empty() {
        let dropped: Vec<&str> = sequence.dropped.iter().map(|s| s.as_str()).collect();
        println!();
        println!("Dropped by the section cap: {}", dropped.join(", "));
    }
    Ok(())
}

fn cmd_classify(layouts: &[String]) -> Result<()> {
    for layout in layouts {
        let tags = classify(layout);
        println!(
            "{layout:<32} density={} tone={} complexity={}",
            tag(&tags.density),
            tag(&tags.tone),
            tag(&tags.complexity)
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// catalog / taxonomy / check
// ---------------------------------------------------------------------------

fn cmd_catalog(section: Option<&str>) -> Result<()> {
    let sections: Vec<SectionType> = match section {
        Some(name) => vec![name.parse().map_err(|e: String| eyre!(e))?],
        None => SectionType::ALL.to_vec(),
    };

    for section in sections {
        println!("{section} (default: {})", section.default_layout());
        for layout in section.catalog() {
            println!("  {layout}");
        }
    }
    Ok(())
}

fn cmd_taxonomy(field: Option<&str>) -> Result<()> {
    let vocabulary = vocabulary();
    let selected: Vec<_> = match field {
        Some(name) => {
            let entry = vocabulary
                .into_iter()
                .find(|(field, _)| *field == name)
                .ok_or_else(|| eyre!("unknown context field '{name}'"))?;
            vec![entry]
        }
        None => vocabulary,
    };

    for (field, values) in selected {
        println!("{field}:");
        for value in values {
            println!("  {value}");
        }
    }
    Ok(())
}

fn cmd_check(context: &Path) -> Result<()> {
    let ctx = load_context_from(context)?;
    let unknown = ctx.unknown_fields();
    if unknown.is_empty() {
        println!("All context fields are within the known vocabulary.");
        return Ok(());
    }

    for (field, raw) in &unknown {
        println!("  {field}: \"{raw}\" is not a known value");
    }
    Err(eyre!(
        "{} field(s) outside the vocabulary; affected sections fall back to defaults",
        unknown.len()
    ))
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    info!(path = %path.display(), "config initialized");
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_accepts_comma_separated_sections() {
        let cli = Cli::try_parse_from([
            "layoutpilot",
            "plan",
            "--context",
            "ctx.json",
            "--sections",
            "hero,features,cta",
            "--seed",
            "42",
            "--explain",
        ])
        .expect("parse");
        match cli.command {
            Command::Plan {
                input, seed, explain, ..
            } => {
                assert_eq!(input.sections, vec!["hero", "features", "cta"]);
                assert_eq!(seed, Some(42));
                assert!(explain);
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn plan_requires_a_section_source() {
        let result = Cli::try_parse_from(["layoutpilot", "plan", "--context", "ctx.json"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "layoutpilot",
            "plan",
            "--context",
            "ctx.json",
            "--sections",
            "hero",
            "--sections-file",
            "page.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn auto_sections_replace_the_section_list() {
        let cli = Cli::try_parse_from([
            "layoutpilot",
            "plan",
            "--context",
            "ctx.json",
            "--auto-sections",
        ])
        .expect("parse");
        match cli.command {
            Command::Plan { input, .. } => {
                assert!(input.auto_sections);
                assert!(input.sections.is_empty());
            }
            _ => panic!("expected plan"),
        }

        let result = Cli::try_parse_from([
            "layoutpilot",
            "flow",
            "--context",
            "ctx.json",
            "--auto-sections",
            "--sections",
            "hero",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::try_parse_from(["layoutpilot", "catalog", "hero", "-vv"]).expect("parse");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn tags_render_as_wire_names() {
        let tags = classify("VideoWalkthrough");
        assert!(!tag(&tags.density).is_empty());
        assert_eq!(tag(&layoutpilot_shared::FlowTone::Analytical), "analytical");
    }
}
