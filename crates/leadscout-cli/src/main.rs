use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use leadscout_places::PlacesClient;
use leadscout_web::SignalExtractor;

mod pipeline;
mod report;

/// Number of top-scored leads echoed to the console after a run.
const PREVIEW_ROWS: usize = 25;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Find and score small-business leads with weak online presence")]
struct Cli {
    /// Business category to search for, e.g. "gym"
    #[arg(long)]
    category: String,

    /// Location to search in, e.g. "San Diego, CA"
    #[arg(long)]
    location: String,

    /// Target number of leads to collect
    #[arg(long, default_value_t = 50)]
    num: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Credential validation happens before any network call: a missing
    // GOOGLE_PLACES_API_KEY is fatal here.
    let config = leadscout_core::load_app_config_from_env()
        .context("configuration error — set GOOGLE_PLACES_API_KEY before running")?;

    let places = PlacesClient::new(
        &config.places_api_key,
        config.api_timeout_secs,
        &config.user_agent,
    )?;
    let extractor = SignalExtractor::new(config.site_timeout_secs, &config.user_agent)?;

    let leads = pipeline::scout_leads(
        &config,
        &places,
        &extractor,
        &cli.category,
        &cli.location,
        cli.num,
    )
    .await?;

    report::print_preview(&leads, PREVIEW_ROWS);

    let out_path = report::output_filename(&cli.category, &cli.location);
    report::write_csv(&out_path, &leads)
        .with_context(|| format!("failed to write {out_path}"))?;
    println!("Saved {} leads to {out_path}", leads.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_required_arguments() {
        let cli = Cli::try_parse_from([
            "leadscout",
            "--category",
            "gym",
            "--location",
            "San Diego, CA",
        ])
        .unwrap();
        assert_eq!(cli.category, "gym");
        assert_eq!(cli.location, "San Diego, CA");
        assert_eq!(cli.num, 50);
    }

    #[test]
    fn parses_num_override() {
        let cli = Cli::try_parse_from([
            "leadscout",
            "--category",
            "bakery",
            "--location",
            "Austin, TX",
            "--num",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.num, 10);
    }

    #[test]
    fn missing_category_is_a_parse_error() {
        let result = Cli::try_parse_from(["leadscout", "--location", "Austin, TX"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_location_is_a_parse_error() {
        let result = Cli::try_parse_from(["leadscout", "--category", "gym"]);
        assert!(result.is_err());
    }
}
