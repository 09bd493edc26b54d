//! CLI entry point for the `routes` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use route_graph::cli::{commands, menu};
use route_graph::{default_network, CityId, RouteError, RouteGraph, RouteResult};

#[derive(Parser)]
#[command(
    name = "routes",
    about = "Airline route network: reachability and shortest routes between cities"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Start from an empty network instead of the built-in one
    #[arg(long)]
    empty: bool,

    /// Without a command, the interactive menu starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List all cities
    Cities,
    /// Display the route map
    Map,
    /// Show city and route counts
    Stats,
    /// Check whether a city can be reached from another
    Reach {
        /// Source city ID
        #[arg(allow_negative_numbers = true)]
        from: CityId,
        /// Destination city ID
        #[arg(allow_negative_numbers = true)]
        to: CityId,
    },
    /// Find the fewest-hop route between two cities
    Path {
        /// Source city ID
        #[arg(allow_negative_numbers = true)]
        from: CityId,
        /// Destination city ID
        #[arg(allow_negative_numbers = true)]
        to: CityId,
    },
    /// Add a route, then print the resulting map
    AddRoute {
        /// Source city ID
        #[arg(allow_negative_numbers = true)]
        from: CityId,
        /// Destination city ID
        #[arg(allow_negative_numbers = true)]
        to: CityId,
    },
    /// Remove a route, then print the resulting map
    RemoveRoute {
        /// Source city ID
        #[arg(allow_negative_numbers = true)]
        from: CityId,
        /// Destination city ID
        #[arg(allow_negative_numbers = true)]
        to: CityId,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> RouteResult<()> {
    let json = cli.format == OutputFormat::Json;
    let mut graph = if cli.empty {
        RouteGraph::new()
    } else {
        default_network()?
    };
    let mut out = io::stdout().lock();

    match cli.command {
        None => {
            drop(out);
            menu::run(&mut graph)
        }
        Some(Commands::Cities) => commands::cmd_cities(&graph, json, &mut out),
        Some(Commands::Map) => commands::cmd_map(&graph, json, &mut out),
        Some(Commands::Stats) => commands::cmd_stats(&graph, json, &mut out),
        Some(Commands::Reach { from, to }) => commands::cmd_reach(&graph, from, to, json, &mut out),
        Some(Commands::Path { from, to }) => commands::cmd_path(&graph, from, to, json, &mut out),
        // In JSON mode the map is part of the command's single document.
        Some(Commands::AddRoute { from, to }) => {
            commands::cmd_add_route(&mut graph, from, to, json, &mut out)?;
            if json {
                return Ok(());
            }
            commands::cmd_map(&graph, json, &mut out)
        }
        Some(Commands::RemoveRoute { from, to }) => {
            commands::cmd_remove_route(&mut graph, from, to, json, &mut out)?;
            if json {
                return Ok(());
            }
            commands::cmd_map(&graph, json, &mut out)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            RouteError::Io(_) => 1,
            RouteError::MissingSource(_)
            | RouteError::MissingDestination(_)
            | RouteError::RouteNotFound { .. }
            | RouteError::InvalidEndpoints { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
