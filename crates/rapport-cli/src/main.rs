//! Rapport CLI
//!
//! Loads knowledge-base documents, assigns statements to a random
//! population, and prints the overlap matrix, graph views, search results,
//! and friendship ranking.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rapport_core::config::FriendshipFormat;
use rapport_core::RapportConfig;
use rapport_knowledge::{samples, KnowledgeBase, PopulationGenerator};
use rapport_observability::tracing_setup::events;
use rapport_observability::{
    cycle_search_span, knowledge_span, longest_path_span, matrix_span, population_span,
};
use rapport_relations::search::{find_cycles, find_longest_path};
use rapport_relations::Relations;
use rapport_render::{canvas, graph, matrix, population};
use tracing::info;

#[derive(Parser)]
#[command(name = "rapport")]
#[command(about = "Rapport - knowledge-overlap social graph analysis", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Knowledge-base JSON documents, merged in order (default: bundled samples)
    #[arg(long = "kb")]
    knowledge: Vec<PathBuf>,

    /// Number of nodes
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Minimum statements per node
    #[arg(long)]
    min: Option<usize>,

    /// Maximum statements per node (exclusive)
    #[arg(long)]
    max: Option<usize>,

    /// RNG seed for a reproducible population
    #[arg(long)]
    seed: Option<u64>,

    /// Friendship ranking format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Print every friendship format (plain, JSON, YAML-like)
    #[arg(long)]
    all_formats: bool,

    /// Show zero cells in the matrix table
    #[arg(long)]
    show_zero: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Plain,
    Json,
    Yaml,
}

impl From<FormatArg> for FriendshipFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => FriendshipFormat::Plain,
            FormatArg::Json => FriendshipFormat::Json,
            FormatArg::Yaml => FriendshipFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    rapport_observability::init_tracing(&config.observability);

    let base = load_knowledge(&cli.knowledge)?;
    let pool = base.statements();

    let generator = PopulationGenerator::new(config.population.clone())?;
    let society = {
        let _span = population_span!(config.population.node_count, pool.len()).entered();
        generator.generate(&pool)
    };
    let fingerprint = society.fingerprint();
    events::population_generated(&fingerprint, society.len(), config.population.seed);

    let prefix = config.render.label_prefix.as_str();
    print!("{}", population::render_population(&society, prefix));

    let relations = {
        let _span = matrix_span!(&fingerprint).entered();
        Relations::new(society)
    };
    events::matrix_built(
        &fingerprint,
        relations.matrix().size(),
        relations.matrix().max_grade(),
    );
    events::friendships_extracted(
        relations.friendships().len(),
        relations.friendships().first().map(|f| f.grade),
    );

    println!("{}", matrix::render_matrix(relations.matrix(), config.render.show_zero));
    println!("{}", canvas::render_canvas(relations.matrix()));

    let plain = relations.graph(prefix);
    let weighted = relations.weighted_graph(prefix);
    print!("{}", graph::standard(&plain));
    println!();
    print!("{}", graph::with_grades(&weighted));
    println!();
    println!("{}", graph::as_sets(&plain));

    let path = {
        let _span = longest_path_span!(plain.node_count(), plain.edge_count()).entered();
        find_longest_path(&plain)
    };
    events::longest_path_found(path.len(), plain.node_count());
    println!("{}", graph::longest_path(&plain, &path));

    let cycles = {
        let _span = cycle_search_span!(plain.node_count(), plain.edge_count()).entered();
        find_cycles(&plain)
    };
    let mut components = plain.components();
    components.sort_unstable();
    components.dedup();
    events::cycles_found(cycles.count(), components.len());
    println!("{}", graph::cycles(&plain, &cycles));

    println!("Friendship grades and shared statements (sorted):");
    let formats = if cli.all_formats {
        vec![
            FriendshipFormat::Plain,
            FriendshipFormat::Json,
            FriendshipFormat::Yaml,
        ]
    } else {
        vec![config.render.friendship_format]
    };
    for format in formats {
        let text = rapport_render::render_friendships(relations.friendships(), format, prefix)
            .context("failed to render friendships")?;
        println!("{text}");
    }

    info!(nodes = plain.node_count(), edges = plain.edge_count(), "run complete");
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn build_config(cli: &Cli) -> Result<RapportConfig> {
    let mut config = match &cli.config {
        Some(path) => RapportConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RapportConfig::default(),
    };

    let population = &mut config.population;
    if let Some(nodes) = cli.nodes {
        population.node_count = nodes;
    }
    if let Some(min) = cli.min {
        population.min_statements = min;
    }
    if let Some(max) = cli.max {
        population.max_statements = max;
    }
    if cli.seed.is_some() {
        population.seed = cli.seed;
    }
    if let Some(format) = cli.format {
        config.render.friendship_format = format.into();
    }
    config.render.show_zero |= cli.show_zero;
    config.observability.json_logs |= cli.json_logs;

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Merge the given documents, or the bundled samples when none are given.
fn load_knowledge(paths: &[PathBuf]) -> Result<KnowledgeBase> {
    let documents = if paths.is_empty() {
        samples::documents().len()
    } else {
        paths.len()
    };
    let _span = knowledge_span!(documents).entered();

    let base = if paths.is_empty() {
        samples::merged().context("bundled knowledge bases failed to parse")?
    } else {
        let mut parsed = Vec::with_capacity(paths.len());
        for path in paths {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parsed.push(KnowledgeBase::from_json(&path.display().to_string(), &json)?);
        }
        KnowledgeBase::merge(parsed)
    };

    events::knowledge_merged(
        documents,
        base.statements.len(),
        base.statements().len(),
    );
    Ok(base)
}
