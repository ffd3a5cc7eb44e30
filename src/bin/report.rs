//! Terminal report for the news dataset.
//!
//! Loads the dataset the same way the server does and prints the dashboard
//! views without starting HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Summary table
//! cargo run --bin report -- summary
//!
//! # Daily counts and stat panes for a date window
//! cargo run --bin report -- daily --from 2021-01-01 --to 2021-01-31
//!
//! # Topic breakdown
//! cargo run --bin report -- topics
//!
//! # Per-state or per-country counts
//! cargo run --bin report -- locations
//! cargo run --bin report -- locations --countries
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATASET_PATH`, `DATASET_URL`, `DATASET_FETCH_TIMEOUT_SECS`,
//! `DATASET_FETCH_RETRIES`.

use news_dashboard::application::services::DashboardService;
use news_dashboard::config;
use news_dashboard::domain::entities::DateWindow;
use news_dashboard::domain::window_view::apply_window;
use news_dashboard::server::load_dashboard;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI report over the news dataset.
#[derive(Parser)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary table
    Summary,

    /// Show daily counts for a date window
    Daily {
        /// First day (YYYY-MM-DD), defaults to the first day in the dataset
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD), defaults to the last day in the dataset
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show per-topic counts and mean sentiment
    Topics,

    /// Show article counts per location
    Locations {
        /// Group by country instead of US state
        #[arg(long)]
        countries: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let dashboard = load_dashboard(&config).await?;

    match cli.command {
        Commands::Summary => print_summary(&dashboard),
        Commands::Daily { from, to } => print_daily(&dashboard, from, to),
        Commands::Topics => print_topics(&dashboard),
        Commands::Locations { countries } => print_locations(&dashboard, countries),
    }

    Ok(())
}

fn print_summary(dashboard: &DashboardService) {
    println!("{}", "📊 Summary".bright_blue().bold());
    println!("  Source: {}", dashboard.dataset().origin.to_string().bright_black());
    println!();

    println!(
        "  {:<40} {:>8} {:>10}",
        "Descriptor".bright_white().bold(),
        "Value".bright_white().bold(),
        "Percentage".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for row in dashboard.summary().rows() {
        println!(
            "  {:<40} {:>8} {:>10}",
            row.descriptor.cyan(),
            row.value,
            row.percentage.bright_black()
        );
    }
    println!();
}

/// Prints one line per day followed by the stat panes.
///
/// # Output Format
///
/// ```text
/// 📅 Daily counts 2021-01-01..=2021-01-03
///
///   2021-01-01      2 ██
///   2021-01-02      0
///   2021-01-03      5 █████
///
///   Total Published Articles: 7
/// ```
fn print_daily(dashboard: &DashboardService, from: Option<NaiveDate>, to: Option<NaiveDate>) {
    let series = dashboard.series();
    let (Some(first), Some(last)) = (series.first_date(), series.last_date()) else {
        println!("{}", "  Daily series is empty".yellow());
        return;
    };

    let window = DateWindow::new(from.unwrap_or(first), to.unwrap_or(last));

    match apply_window(series, window) {
        Ok(view) => {
            println!(
                "{} {}",
                "📅 Daily counts".bright_blue().bold(),
                view.window.to_string().bright_black()
            );
            println!();

            let peak = view.stats.max.count.max(1);
            for day in &view.days {
                let width = (day.count * 40).div_ceil(peak) as usize;
                println!(
                    "  {} {:>6} {}",
                    day.date.to_string().cyan(),
                    day.count,
                    "█".repeat(width).green()
                );
            }

            println!();
            for pane in view.stats.panes() {
                println!("  {}: {}", pane.label.bright_white(), pane.value.bold());
            }
            println!();
        }
        Err(e) => {
            println!("{}", format!("⚠️  {e}").yellow());
        }
    }
}

fn print_topics(dashboard: &DashboardService) {
    println!("{}", "🗂  Topics".bright_blue().bold());
    println!();

    println!(
        "  {:<30} {:>8} {:>9} {:>10}",
        "Topic".bright_white().bold(),
        "Articles".bright_white().bold(),
        "Share".bright_white().bold(),
        "Sentiment".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for share in dashboard.topics() {
        let sentiment = share
            .average_sentiment
            .map(|s| format!("{s:.3}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {:<30} {:>8} {:>8.2}% {:>10}",
            share.topic.cyan(),
            share.count,
            share.percentage,
            sentiment.bright_black()
        );
    }
    println!();
}

fn print_locations(dashboard: &DashboardService, countries: bool) {
    let (title, places) = if countries {
        ("🌍 Articles per country", dashboard.countries())
    } else {
        ("🗺  Articles per US state", dashboard.states())
    };

    println!("{}", title.bright_blue().bold());
    println!();

    if places.is_empty() {
        println!("{}", "  No matching records".yellow());
        return;
    }

    for place in places {
        println!("  {:<36} {:>8}", place.name.cyan(), place.count);
    }

    println!();
    println!(
        "  Total: {}",
        places
            .iter()
            .map(|p| p.count)
            .sum::<usize>()
            .to_string()
            .bright_white()
            .bold()
    );
    println!();
}
