//! CLI command implementations.

use crate::config::TopicConfig;
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use topic_core::{
    displayed_score, user_can_edit_scores, AggregationMode, Graph, InfoCategory, RelationName,
    UserScores,
};
use topic_graph::{apply_view, TopicGraph, ViewFilter};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Which way `traverse` walks from the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Ancestors,
    Descendants,
    Neighbors,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let value = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    Ok(value)
}

fn print_summary(label: &str, graph: &Graph) {
    let summary = graph.summary();
    println!("{}", label.cyan().bold());
    println!("  {} {}", "Nodes:".dimmed(), summary.node_count);
    println!("  {} {}", "Edges:".dimmed(), summary.edge_count);
    for category in InfoCategory::ALL {
        println!(
            "  {} {}",
            format!("{}:", category).dimmed(),
            summary.category_count(category)
        );
    }
}

/// Write a default config.
pub fn init(path: &Path) -> Result<()> {
    let config_path = TopicConfig::path_in(path);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    TopicConfig::default().save(&config_path)?;

    println!(
        "{} Initialized topic config in {}",
        "✓".green(),
        config_path.display()
    );
    println!("  Edit {} to set the default view", "view".cyan());

    Ok(())
}

/// Validate a graph file against the relation table.
pub fn check(graph_path: &Path) -> Result<()> {
    let graph: Graph = read_json(graph_path)?;
    graph.validate()?;

    println!("{} {} is valid", "✓".green(), graph_path.display());
    print_summary("Topic", &graph);
    Ok(())
}

/// Derive a view's graph.
pub fn view(
    config: &TopicConfig,
    graph_path: &Path,
    view_path: Option<&Path>,
    scores_path: Option<&Path>,
    output: Option<&Path>,
    validate: bool,
) -> Result<()> {
    let graph: Graph = read_json(graph_path)?;
    if validate {
        graph.validate()?;
    }

    let view: ViewFilter = match view_path {
        Some(path) => read_json(path)?,
        None => config.view.clone(),
    };
    let scores: UserScores = match scores_path {
        Some(path) => read_json(path)?,
        None => UserScores::new(),
    };

    let derived = apply_view(&graph, &view, &scores);
    let json = serde_json::to_string_pretty(&derived)?;

    match output {
        Some(out_path) => {
            fs::write(out_path, json)?;
            print_summary("View", &derived);
            println!("{} Exported to {}", "✓".green(), out_path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// List nodes reached from a start node.
pub fn traverse(
    graph_path: &Path,
    node_id: &str,
    walk: Walk,
    relations: &[RelationName],
    depth: usize,
) -> Result<()> {
    let graph: Graph = read_json(graph_path)?;
    let topic = TopicGraph::new(&graph);
    let relations = if relations.is_empty() {
        None
    } else {
        Some(relations)
    };

    let reached = match walk {
        Walk::Ancestors => topic.ancestors(node_id, relations)?,
        Walk::Descendants => topic.descendants(node_id, relations)?,
        Walk::Neighbors => topic.neighbors(node_id, depth)?,
    };

    if reached.is_empty() {
        println!("Nothing reachable from \"{}\"", node_id);
        return Ok(());
    }

    println!("Reached {} nodes:\n", reached.len());
    for node in reached {
        println!(
            "  {} {}",
            node.node_type.to_string().yellow(),
            node.id.cyan()
        );
        if !node.data.notes.is_empty() {
            println!("    {}", node.data.notes.dimmed());
        }
    }

    Ok(())
}

/// Show the displayed score of one graph part.
pub fn score(
    config: &TopicConfig,
    scores_path: &Path,
    part_id: &str,
    graph_path: Option<&Path>,
    perspectives: &[String],
    mode: Option<AggregationMode>,
    user: Option<&str>,
) -> Result<()> {
    let scores: UserScores = read_json(scores_path)?;
    let graph: Option<Graph> = match graph_path {
        Some(path) => Some(read_json(path)?),
        None => None,
    };
    let part = match &graph {
        Some(graph) => Some(graph.find_graph_part_or_throw(part_id)?),
        None => None,
    };
    let perspectives: &[String] = if perspectives.is_empty() {
        &config.perspectives
    } else {
        perspectives
    };
    let mode = mode.unwrap_or(config.aggregation);

    let shown = displayed_score(part_id, perspectives, &scores, mode);
    println!(
        "{} {} ({} of {} perspectives)",
        part_id.cyan(),
        shown.to_string().bold(),
        mode,
        perspectives.len()
    );

    if let (Some(graph), Some(part)) = (&graph, part) {
        if let Some(argued) = part.argued_diagram_part_id() {
            println!("  {} {}", "argues".dimmed(), argued.cyan());
        }
        let claims = graph.claim_tree(part.id());
        println!("  {} {}", "claims:".dimmed(), claims.nodes.len());
    }

    if let Some(user) = user {
        let editable = user_can_edit_scores(Some(user), perspectives, config.read_only);
        let verdict = if editable { "yes".green() } else { "no".red() };
        println!("  {} {}", format!("{} can edit:", user).dimmed(), verdict);
    }

    Ok(())
}
