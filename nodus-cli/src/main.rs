//! Nodus command-line interface.
//!
//! Drives the extraction pipeline end to end: read text, call Gemini,
//! validate the graph, write the HTML visualization and optional JSON
//! export.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nodus_core::{Config, GeminiModel, GraphStats};
use nodus_extract::{ExtractError, ExtractionOutcome, Extractor};
use nodus_viz::{Theme, Visualizer};

#[derive(Parser)]
#[command(name = "nodus")]
#[command(about = "Extract a knowledge graph from text with Gemini", long_about = None)]
struct Cli {
    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a knowledge graph from a text file (or stdin)
    Extract {
        /// Input text file; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Model: flash-lite, flash or pro (full ids accepted)
        #[arg(long)]
        model: Option<String>,

        /// Theme: dark or light (defaults to the configured theme)
        #[arg(long)]
        theme: Option<String>,

        /// Static layout instead of force-directed physics
        #[arg(long)]
        no_physics: bool,

        /// Render nodes that have no relationships
        #[arg(long)]
        show_isolated: bool,

        /// Extract from the raw text instead of summarizing first
        #[arg(long)]
        no_summary: bool,

        /// Output path for the HTML visualization
        #[arg(long, default_value = "output/knowledge_graph.html")]
        out: PathBuf,

        /// Optional output path for the raw graph JSON
        #[arg(long)]
        json_out: Option<PathBuf>,

        /// Open the visualization in a browser when done
        #[arg(long)]
        open: bool,

        /// Print graph statistics
        #[arg(long)]
        stats: bool,
    },

    /// List supported Gemini models
    Models,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        if let Some(extract_err) = err.downcast_ref::<ExtractError>() {
            eprintln!("error: {}", extract_err.user_message());
            eprintln!("detail: {extract_err}");
        } else {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    nodus_core::load_dotenv();
    let config = Config::load().context("failed to load configuration")?;

    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Models => {
            for model in GeminiModel::all() {
                let marker = if model == config.default_model() {
                    " (default)"
                } else {
                    ""
                };
                println!("{:<12} {}{}", model.alias(), model.as_str(), marker);
            }
            Ok(())
        }
        Commands::Extract {
            input,
            model,
            theme,
            no_physics,
            show_isolated,
            no_summary,
            out,
            json_out,
            open,
            stats,
        } => {
            run_extract(ExtractArgs {
                config,
                input,
                model,
                theme,
                no_physics,
                show_isolated,
                no_summary,
                out,
                json_out,
                open,
                stats,
            })
            .await
        }
    }
}

struct ExtractArgs {
    config: Config,
    input: Option<PathBuf>,
    model: Option<String>,
    theme: Option<String>,
    no_physics: bool,
    show_isolated: bool,
    no_summary: bool,
    out: PathBuf,
    json_out: Option<PathBuf>,
    open: bool,
    stats: bool,
}

async fn run_extract(args: ExtractArgs) -> Result<()> {
    let model = match &args.model {
        Some(raw) => Some(raw.parse::<GeminiModel>()?),
        None => None,
    };

    let text = read_input(args.input.as_deref())?;
    let extractor = Extractor::from_config(&args.config, model)?;
    info!(model = extractor.model(), "starting extraction");

    let outcome: ExtractionOutcome = if args.no_summary {
        ExtractionOutcome {
            summary: None,
            knowledge_graph: extractor.extract(&text).await?,
        }
    } else {
        extractor.extract_with_summary(&text, true).await?
    };

    let graph = &outcome.knowledge_graph;
    if graph.nodes.is_empty() || graph.relationships.is_empty() {
        warn!("extraction returned an empty or degenerate knowledge graph");
        eprintln!(
            "The extraction completed but the knowledge graph is empty or has no \
             relationships. Try more detailed text or a different passage."
        );
    }

    if let Some(summary) = &outcome.summary {
        println!("Executive Summary\n-----------------\n{}\n", summary.as_text());
    }

    let theme = args
        .theme
        .as_deref()
        .unwrap_or(&args.config.settings.viz.theme)
        .parse::<Theme>()
        .unwrap_or_default();

    let visualizer = Visualizer::new(theme)
        .with_physics(!args.no_physics && args.config.settings.viz.physics)
        .with_isolated_nodes(args.show_isolated || args.config.settings.viz.show_isolated);

    write_artifact(&args.out, &visualizer.render(graph))?;
    println!("Visualization written to {}", args.out.display());

    if let Some(json_path) = &args.json_out {
        let json = nodus_viz::export_json(graph).context("failed to serialize graph")?;
        write_artifact(json_path, &json)?;
        println!("Graph JSON written to {}", json_path.display());
    }

    if args.stats {
        println!("\n{}", GraphStats::for_graph(graph));
    }

    if args.open {
        if let Err(err) = open::that(&args.out) {
            warn!(error = %err, "could not open browser automatically");
        }
    }

    Ok(())
}

fn init_tracing(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "debug".to_string()
    } else {
        config.settings.logging.level.clone()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Read UTF-8 text from a file, or stdin when the path is absent or "-".
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write an artifact, creating parent directories as needed.
fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_artifact_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/graph.html");

        write_artifact(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "Alice works at TechCorp.").unwrap();

        let text = read_input(Some(&path)).unwrap();
        assert_eq!(text, "Alice works at TechCorp.");
    }

    #[test]
    fn test_missing_input_file_errors() {
        assert!(read_input(Some(Path::new("/nonexistent/input.txt"))).is_err());
    }
}
