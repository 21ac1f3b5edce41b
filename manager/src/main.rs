//! town-graph: query a road network loaded from a road file.
//!
//! Each line of the road file reads `roadName,weight;townName1;townName2`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use town_graph_core::{shortest_route, Town};
use town_graph_manager::{Settings, TownGraphManager, SETTINGS_FILE};

/// Shortest routes over a network of towns and roads.
#[derive(Parser)]
#[command(name = "town-graph")]
#[command(author, version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to ./town-graph.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Road file to import; overrides `source_file` from settings
    #[arg(short, long, global = true, env = "TOWN_GRAPH_FILE")]
    file: Option<PathBuf>,

    /// Maximum towns allowed after import; overrides settings
    #[arg(long, global = true, env = "TOWN_GRAPH_MAX_TOWNS")]
    max_towns: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two towns
    Path {
        from: String,
        to: String,
    },

    /// List all towns, sorted by name
    Towns,

    /// List all roads, sorted by name
    Roads,

    /// Name of the road directly joining two towns
    Road {
        town1: String,
        town2: String,
    },

    /// Loaded graph summary
    Status,
}

#[derive(Serialize)]
struct PathOutput {
    from: String,
    to: String,
    hops: Vec<String>,
    total_distance: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    init_tracing(&settings.log_filter);

    let mut manager = TownGraphManager::with_settings(&settings);
    if let Some(path) = &settings.source_file {
        manager
            .populate_town_graph(path)
            .with_context(|| format!("failed to import road file {}", path.display()))?;
    }

    match cli.command {
        Commands::Path { from, to } => print_path(&manager, &from, &to, cli.json),
        Commands::Towns => print_list(&manager.all_towns(), cli.json),
        Commands::Roads => print_list(&manager.all_roads(), cli.json),
        Commands::Road { town1, town2 } => {
            let Some(road) = manager.get_road(&town1, &town2) else {
                bail!("no road joins '{}' and '{}'", town1, town2);
            };
            if cli.json {
                println!("{}", serde_json::to_string(&road)?);
            } else {
                println!("{}", road);
            }
            Ok(())
        }
        Commands::Status => {
            let status = manager.status();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("status:     {}", status.status);
                println!("source:     {}", status.source.as_deref().unwrap_or("-"));
                println!("towns:      {}", status.town_count);
                println!("roads:      {}", status.road_count);
                println!("max_towns:  {}", status.max_towns);
                if let Some(ms) = status.load_time_ms {
                    println!("load time:  {:.1}ms", ms);
                }
            }
            Ok(())
        }
    }
}

/// Settings file, then CLI flags / env on top.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let path = cli.config.as_deref().unwrap_or(Path::new(SETTINGS_FILE));
    let mut settings = Settings::load(path)?;

    if let Some(file) = &cli.file {
        settings.source_file = Some(file.clone());
    }
    if let Some(max) = cli.max_towns {
        settings.max_towns = max;
    }
    if let Err(message) = settings.validate() {
        bail!("{}", message);
    }
    Ok(settings)
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn print_path(manager: &TownGraphManager, from: &str, to: &str, json: bool) -> Result<()> {
    let route = shortest_route(manager.graph(), &Town::new(from), &Town::new(to))?;
    let reachable = from == to || !route.is_empty();

    if json {
        let output = PathOutput {
            from: from.to_string(),
            to: to.to_string(),
            hops: route.descriptions(),
            total_distance: reachable.then_some(route.total_distance),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !reachable {
        println!("No route from {} to {}", from, to);
        return Ok(());
    }
    for hop in &route.hops {
        println!("{}", hop);
    }
    println!("Total: {} mi", route.total_distance);
    Ok(())
}

fn print_list(items: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", item);
        }
    }
    Ok(())
}
