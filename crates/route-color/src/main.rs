use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use graph_rs::algorithms::a_star::{AStarParams, Relaxation};
use log::info;
use route_color::input::{path_request, read_input};

#[derive(Parser)]
#[command(version, about = "Shortest routes and colorings over city graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Search a route with A*.
    Path {
        /// Graph input in '.json' format
        in_file: PathBuf,

        /// Start city. Defaults to the input's `path.from`.
        #[arg(short, long)]
        from: Option<String>,

        /// Goal city. Defaults to the input's `path.to`.
        #[arg(short, long)]
        to: Option<String>,

        /// Keep the cheapest known predecessor instead of the last discovered one
        #[arg(short, long)]
        canonical: bool,
    },
    /// Color the adjacency with Welsh-Powell.
    Color {
        /// Graph input in '.json' format
        in_file: PathBuf,
    },
    /// Search the input's route and color its graph.
    Run {
        /// Graph input in '.json' format
        in_file: PathBuf,

        #[arg(short, long)]
        canonical: bool,
    },
}

fn params(canonical: bool) -> AStarParams {
    if canonical {
        AStarParams::canonical()
    } else {
        AStarParams {
            relaxation: Relaxation::LastDiscovered,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli.command {
        Commands::Path {
            in_file,
            from,
            to,
            canonical,
        } => {
            let input = read_input(&in_file)?;
            let request = path_request(&input, from, to)?;
            let route = route_color::find_route(&input, &request, params(canonical))?;

            println!("{}", serde_json::to_string_pretty(&route.vertices)?);
            info!("Route length: {}", route.length);
        }
        Commands::Color { in_file } => {
            let input = read_input(&in_file)?;
            let assignment = route_color::color(&input);

            println!("Amount of colors used -> {}", assignment.chromatic_number);
            println!("{}", serde_json::to_string_pretty(&assignment.colors)?);
        }
        Commands::Run { in_file, canonical } => {
            let input = read_input(&in_file)?;
            let request = path_request(&input, None, None)?;
            let route = route_color::find_route(&input, &request, params(canonical))?;

            println!(
                "A* -> {}",
                serde_json::to_string_pretty(&route.vertices)?
            );

            let assignment = route_color::color(&input);
            println!("Amount of colors used -> {}", assignment.chromatic_number);
            println!(
                "Welsh Powell Colors -> {}",
                serde_json::to_string_pretty(&assignment.colors)?
            );
        }
    }

    Ok(())
}
