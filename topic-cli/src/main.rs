//! Topic CLI - command-line interface for topic diagrams
//!
//! Loads topic graphs saved as JSON, derives views from them, walks their
//! relations, and shows aggregated scores.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use topic_core::{AggregationMode, RelationName};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::Walk;
use config::TopicConfig;

#[derive(Parser)]
#[command(name = "topic")]
#[command(author = "Topic Graph Contributors")]
#[command(version)]
#[command(about = "Derive views of problem/solution topic diagrams", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to .topic/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum WalkArg {
    Ancestors,
    Descendants,
    Neighbors,
}

impl From<WalkArg> for Walk {
    fn from(arg: WalkArg) -> Self {
        match arg {
            WalkArg::Ancestors => Walk::Ancestors,
            WalkArg::Descendants => Walk::Descendants,
            WalkArg::Neighbors => Walk::Neighbors,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Average,
    Disagreement,
}

impl From<ModeArg> for AggregationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Average => AggregationMode::Average,
            ModeArg::Disagreement => AggregationMode::Disagreement,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config in the given directory
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate a topic graph
    Check {
        /// Graph JSON file
        graph: PathBuf,
    },

    /// Derive the graph a view displays
    View {
        /// Graph JSON file
        graph: PathBuf,

        /// View JSON file (defaults to the configured view)
        #[arg(long)]
        view: Option<PathBuf>,

        /// User scores JSON file
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Write the derived graph here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Check the graph against the relation table first
        #[arg(long)]
        validate: bool,
    },

    /// List nodes reachable from a node
    Traverse {
        /// Graph JSON file
        graph: PathBuf,

        /// Start node id
        node: String,

        #[arg(short, long, value_enum, default_value = "ancestors")]
        direction: WalkArg,

        /// Only follow these relations (repeatable)
        #[arg(short, long = "relation")]
        relations: Vec<RelationName>,

        /// Hops for neighbors
        #[arg(long, default_value = "1")]
        depth: usize,
    },

    /// Show the displayed score of a node or edge
    Score {
        /// User scores JSON file
        scores: PathBuf,

        /// Graph part id
        part: String,

        /// Graph JSON file; the part must exist and its claims are counted
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Usernames to combine (repeatable; defaults to config)
        #[arg(short, long = "perspective")]
        perspectives: Vec<String>,

        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Also report whether this user may edit scores here
        #[arg(long)]
        user: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = TopicConfig::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Check { graph } => commands::check(&graph),
        Commands::View {
            graph,
            view,
            scores,
            output,
            validate,
        } => commands::view(
            &config,
            &graph,
            view.as_deref(),
            scores.as_deref(),
            output.as_deref(),
            validate,
        ),
        Commands::Traverse {
            graph,
            node,
            direction,
            relations,
            depth,
        } => commands::traverse(&graph, &node, direction.into(), &relations, depth),
        Commands::Score {
            scores,
            part,
            graph,
            perspectives,
            mode,
            user,
        } => commands::score(
            &config,
            &scores,
            &part,
            graph.as_deref(),
            &perspectives,
            mode.map(Into::into),
            user.as_deref(),
        ),
    }
}
