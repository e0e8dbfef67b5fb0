use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use orgchart::chart::OrgChart;
use orgchart::config::{default_config_path, load_config, save_config, ChartConfig};
use orgchart::errors::{OrgChartError, Result};
use orgchart::export::{format_chart_as_json, format_graph_as_markdown};

/// Org charts from flat CSV rosters.
#[derive(Parser)]
#[command(name = "orgchart", about = "Build org charts from flat CSV rosters")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Config file path (default: ./orgchart.json)
        path: Option<String>,
    },
    /// Build the chart model for a roster
    Build {
        /// Roster CSV file
        roster: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
        /// Output format (json or markdown)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Also list hierarchy links in the model
        #[arg(long)]
        hierarchy_links: bool,
    },
    /// Show roster statistics
    Stats {
        /// Roster CSV file
        roster: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show which roster entry a reference resolves to
    Resolve {
        /// Roster CSV file
        roster: String,
        /// Free-text reference, as it would appear in a manager column
        reference: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Print the chain of command above a person
    Chain {
        /// Roster CSV file
        roster: String,
        /// Node id
        id: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "orgchart=debug" } else { "orgchart=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let config_path = path
                .map(PathBuf::from)
                .unwrap_or_else(|| default_config_path(&current_dir()));
            if config_path.exists() {
                return Err(OrgChartError::Config {
                    message: format!("'{}' already exists", config_path.display()),
                });
            }
            save_config(&config_path, &ChartConfig::default())?;
            println!("Wrote default config to {}", config_path.display());
        }
        Commands::Build {
            roster,
            config,
            format,
            hierarchy_links,
        } => {
            let chart = open_chart(&roster, config)?;
            let output = if format == "markdown" {
                format_graph_as_markdown(chart.graph())
            } else {
                format_chart_as_json(&chart.model(hierarchy_links))?
            };
            println!("{}", output);
        }
        Commands::Stats {
            roster,
            config,
            json,
        } => {
            let chart = open_chart(&roster, config)?;
            let stats = chart.stats();
            if json {
                let mut value = serde_json::to_value(&stats)?;
                value["roster_fingerprint"] = serde_json::Value::from(chart.fingerprint());
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Org Chart Status");
                println!("  People:          {}", stats.node_count);
                println!("  Board:           {}", stats.board_count);
                println!("  Employees:       {}", stats.employee_count);
                println!("  Roots:           {}", stats.root_count);
                println!("  Hierarchy links: {}", stats.hierarchy_edge_count);
                println!("  Dotted lines:    {}", stats.secondary_edge_count);
                println!("  Max depth:       {}", stats.max_depth);
                println!("  Unresolved refs: {}", stats.unresolved_count);
                println!("  Built in:        {}ms", chart.duration_ms());

                if !chart.unresolved().is_empty() {
                    println!("\n  Unresolved references:");
                    for u in chart.unresolved() {
                        println!(
                            "    row {} ({}): {} '{}'",
                            u.row + 1,
                            u.node_id,
                            u.kind.as_str(),
                            u.reference
                        );
                    }
                }
                let queries = chart.queries();
                let duplicates = queries.duplicate_ids();
                if !duplicates.is_empty() {
                    println!("\n  Duplicate ids: {}", duplicates.join(", "));
                }
                let self_managed = queries.self_managed();
                if !self_managed.is_empty() {
                    let ids: Vec<&str> = self_managed.iter().map(|n| n.id.as_str()).collect();
                    println!("  Self-managed:  {}", ids.join(", "));
                }
            }
        }
        Commands::Resolve {
            roster,
            reference,
            config,
        } => {
            let chart = open_chart(&roster, config)?;
            match chart.resolve(&reference) {
                Some(resolved) => {
                    let name = chart
                        .queries()
                        .node(&resolved.target_id)
                        .map(|n| n.name.clone())
                        .unwrap_or_default();
                    println!(
                        "{} ({}) via {}",
                        resolved.target_id,
                        name,
                        resolved.strategy.as_str()
                    );
                }
                None => println!("No roster entry matches '{}'", reference),
            }
        }
        Commands::Chain {
            roster,
            id,
            config,
        } => {
            let chart = open_chart(&roster, config)?;
            let queries = chart.queries();
            let chain = queries.chain_of_command(&id)?;
            for (depth, node) in chain.iter().enumerate() {
                println!("{}{} - {} ({})", "  ".repeat(depth), node.title, node.name, node.id);
            }
        }
    }
    Ok(())
}

/// Loads the config (explicit path, or `./orgchart.json` when present) and the roster.
fn open_chart(roster: &str, config: Option<String>) -> Result<OrgChart> {
    let config_path = match config {
        Some(p) => {
            let p = PathBuf::from(p);
            if !p.exists() {
                return Err(OrgChartError::Config {
                    message: format!("config file '{}' not found", p.display()),
                });
            }
            p
        }
        None => default_config_path(&current_dir()),
    };
    let config = load_config(&config_path)?;
    OrgChart::load(Path::new(roster), config)
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
