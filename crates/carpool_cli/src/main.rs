use std::process::exit;

use clap::Parser;

use carpool_core::error::StatsError;
use carpool_core::pipeline::RankingPipeline;
use carpool_core::transport::HttpTransport;

#[derive(Parser)]
#[command(
    name = "carpool-stats",
    about = "Rank carpool driver groups by average trip distance",
    long_about = "Fetches ride-request data from an endpoint, ranks driver groups\n\
                  by the Manhattan distance between their average pickup and\n\
                  dropoff points, and posts the ranking back to the endpoint."
)]
struct Cli {
    /// Endpoint serving the carpool dataset (also receives the ranking)
    url: String,
}

fn main() {
    let cli = Cli::parse();
    let pipeline = RankingPipeline::new(HttpTransport::new(), &cli.url);

    match pipeline.run() {
        Ok(ranking) => match serde_json::to_string_pretty(&ranking) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("carpool-stats: failed to render ranking: {err}");
                exit(1);
            }
        },
        Err(err @ StatsError::FetchFailed) => {
            // The contract failure value goes to stdout, like a result.
            println!("{err}");
            exit(1);
        }
        Err(err) => {
            eprintln!("carpool-stats: {err}");
            exit(1);
        }
    }
}
