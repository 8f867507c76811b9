//! birdapp-ui - terminal client for the BirdApp server
//!
//! Exercises the page view-models against a running server: catalog
//! listing, species search, checklist submission, and the "my
//! checklists" listing.

use anyhow::Result;
use birdapp_ui::api::ApiClient;
use birdapp_ui::config::resolve_server_url;
use birdapp_ui::models::{HeatPoint, SeriesPoint};
use birdapp_ui::pages::{ChecklistPage, HomePage, MyChecklistsPage};
use birdapp_ui::render::{ChartSink, HeatmapSink};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "birdapp-ui", about = "BirdApp terminal client")]
struct Cli {
    /// Server base URL; falls back to BIRDAPP_SERVER_URL, the config
    /// file, then the compiled default
    #[arg(long)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the species catalog
    Species,
    /// Search the catalog and show the heatmap points for a selection
    Search {
        query: String,
    },
    /// Submit a checklist
    Submit {
        #[arg(long)]
        lat: String,
        #[arg(long)]
        lng: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        duration: String,
        /// Sightings as NAME=COUNT pairs, e.g. "Blue Jay=2"
        #[arg(long = "sighting")]
        sightings: Vec<String>,
    },
    /// List my checklists with their bird counts
    MyChecklists,
}

/// Prints derived state instead of driving a map or chart widget
struct TextRenderer;

impl HeatmapSink for TextRenderer {
    fn render(&mut self, points: &[HeatPoint]) {
        for p in points {
            println!("  ({:.4}, {:.4}) weight {}", p.lat, p.lng, p.weight);
        }
    }
}

impl ChartSink for TextRenderer {
    fn render(&mut self, series: &[SeriesPoint]) {
        for p in series {
            println!("  {} {}", p.date, p.count);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let server_url = resolve_server_url(cli.server_url.as_deref());
    info!(server_url = %server_url, "Using BirdApp server");

    let client = ApiClient::new(server_url)?;

    match cli.command {
        Command::Species => {
            let species = client.get_species().await?;
            for name in species {
                println!("{}", name);
            }
        }
        Command::Search { query } => {
            let mut page = HomePage::load(client).await?;
            page.set_query(&query);
            let matches = page.matches().to_vec();
            if matches.is_empty() {
                println!("No species match '{}'", query);
                return Ok(());
            }
            for name in &matches {
                println!("{}", name);
            }
            page.select_bird(&matches[0]).await?;
            println!("Heatmap for {}:", &matches[0]);
            page.publish(&mut TextRenderer);
        }
        Command::Submit {
            lat,
            lng,
            date,
            duration,
            sightings,
        } => {
            let mut page = ChecklistPage::load(client, Some((lat, lng))).await?;
            page.set_date(&date);
            page.set_duration(&duration);
            for pair in &sightings {
                let (name, count) = parse_sighting(pair)?;
                for _ in 0..count {
                    page.pick_species(&name);
                }
            }
            page.submit().await?;
            println!("Checklist submitted");
        }
        Command::MyChecklists => {
            let mut page = MyChecklistsPage::new(client);
            page.load().await?;
            for summary in page.checklists() {
                let date = summary
                    .checklist
                    .observation_date
                    .as_deref()
                    .unwrap_or("(no date)");
                println!("{}:", date);
                for bird in &summary.bird_counts {
                    println!("  {} x{}", bird.name, bird.count);
                }
            }
        }
    }

    Ok(())
}

/// Parse a "NAME=COUNT" sighting argument; a bare name counts as 1
fn parse_sighting(pair: &str) -> Result<(String, u32)> {
    match pair.rsplit_once('=') {
        Some((name, count)) => {
            let count: u32 = count
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid sighting count in '{}'", pair))?;
            Ok((name.to_string(), count))
        }
        None => Ok((pair.to_string(), 1)),
    }
}
