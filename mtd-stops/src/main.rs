use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mtd_stops::lookup::{self, DEFAULT_NEARBY_COUNT};
use mtd_stops::mtd::{DEFAULT_BASE_URL, MtdClient, MtdConfig};

const AFTER_HELP: &str = "\
Examples:
  mtd-stops search Green
  mtd-stops nearby 40.1106 -88.2284
  mtd-stops departures IT:1

Set the CUMTD_API_KEY environment variable or pass --api-key.
Get your API key at: https://developer.mtd.org/";

#[derive(Parser, Debug)]
#[command(
    name = "mtd-stops",
    version,
    about = "Find CUMTD stop IDs and upcoming departures",
    after_help = AFTER_HELP
)]
struct Cli {
    /// CUMTD developer API key.
    #[arg(long, env = "CUMTD_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API base URL.
    #[arg(long, env = "CUMTD_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search stops by name (case-insensitive substring match).
    #[command(alias = "SEARCH", alias = "Search")]
    Search {
        /// Words of the stop name; joined with single spaces.
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Find stops near a latitude/longitude.
    #[command(alias = "NEARBY", alias = "Nearby")]
    Nearby {
        /// Latitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Number of stops to return.
        #[arg(long, default_value_t = DEFAULT_NEARBY_COUNT)]
        count: u32,
    },
    /// Show departures in the next hour for a stop ID.
    #[command(alias = "DEPARTURES", alias = "Departures")]
    Departures {
        /// Stop ID, e.g. IT:1.
        stop_id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = MtdConfig::from_optional_key(cli.api_key).with_base_url(cli.base_url);
    if config.has_placeholder_key() {
        eprintln!("Warning: No API key set!");
        eprintln!("Set the CUMTD_API_KEY environment variable or pass --api-key.");
        eprintln!();
    }

    let client = match MtdClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create CUMTD client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = std::io::stdout().lock();
    let result = match cli.command {
        Command::Search { name } => lookup::search_stops(&client, &name.join(" "), &mut out)
            .await
            .map(drop),
        Command::Nearby { lat, lon, count } => {
            lookup::nearby_stops(&client, lat, lon, count, &mut out)
                .await
                .map(drop)
        }
        Command::Departures { stop_id } => lookup::departures(&client, &stop_id, &mut out)
            .await
            .map(drop),
    };

    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
