//! CLI administration tool for harvest-hub.
//!
//! Checks the datasets, queries pantries with the same filters the web UI
//! uses, and sends contact messages without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Validate both CSV files and print a summary
//! cargo run --bin admin -- data check
//!
//! # List pantries open on Saturday in Queens or the Bronx
//! cargo run --bin admin -- pantries --borough Queens --borough Bronx --day sat
//!
//! # Send a contact message interactively
//! cargo run --bin admin -- contact
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `PANTRY_CSV`, `INSTITUTION_CSV`, `DEFAULT_BOROUGH`
//! and the `SMTP_*` settings.

use harvest_hub::application::services::{ContactService, LocatorService};
use harvest_hub::config::{self, Config};
use harvest_hub::telemetry;
use harvest_hub::domain::catalog::Catalog;
use harvest_hub::domain::delivery::MessageDelivery;
use harvest_hub::domain::entities::{Borough, ContactOutcome, ContactRequest, Weekday};
use harvest_hub::domain::filter::FilterCriteria;
use harvest_hub::infrastructure::dataset::CsvDataSource;
use harvest_hub::infrastructure::delivery::{LogDelivery, SmtpDelivery};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for harvest-hub.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dataset operations
    Data {
        #[command(subcommand)]
        action: DataAction,
    },

    /// List pantries matching borough and day filters
    Pantries {
        /// Borough to include (repeatable); defaults to DEFAULT_BOROUGH
        #[arg(short, long = "borough")]
        boroughs: Vec<Borough>,

        /// Day the pantry must be open (repeatable, e.g. mon, thur); defaults to every day
        #[arg(short, long = "day")]
        days: Vec<Weekday>,
    },

    /// Send a message to an institution
    Contact {
        /// Institution name as listed in the dataset
        #[arg(short, long)]
        institution: Option<String>,

        /// Sender email address
        #[arg(short, long)]
        email: Option<String>,

        /// Message body
        #[arg(short, long)]
        message: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DataAction {
    /// Load both datasets and report what was found
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    // LogDelivery reports through tracing; without a subscriber a contact
    // sent with SMTP disabled would leave no record at all.
    telemetry::init_tracing(&config.log_level, &config.log_format)?;

    let catalog = CsvDataSource::new(&config.pantry_csv, &config.institution_csv)
        .load()
        .context("Failed to load datasets")?;

    match cli.command {
        Commands::Data { action } => match action {
            DataAction::Check => check_data(&config, &catalog),
        },
        Commands::Pantries { boroughs, days } => list_pantries(&config, catalog, boroughs, days),
        Commands::Contact {
            institution,
            email,
            message,
            yes,
        } => send_contact(&config, catalog, institution, email, message, yes).await?,
    }

    Ok(())
}

/// Prints dataset counts per borough and the records the map cannot plot.
fn check_data(config: &Config, catalog: &Catalog) {
    println!("{}", "🗂️  Dataset Check".bright_blue().bold());
    println!();
    println!("  Pantries:     {}", config.pantry_csv.cyan());
    println!("  Institutions: {}", config.institution_csv.cyan());
    println!();

    for borough in Borough::ALL {
        let count = catalog
            .pantries()
            .iter()
            .filter(|p| p.borough == borough)
            .count();
        println!("  {:<15} {}", borough.as_str(), count.to_string().bright_white());
    }
    println!("  {}", "─".repeat(30).bright_black());
    println!(
        "  {:<15} {}",
        "Total",
        catalog.pantries().len().to_string().bright_white().bold()
    );
    println!();

    let unplottable: Vec<_> = catalog
        .pantries()
        .iter()
        .filter(|p| !p.is_plottable())
        .collect();

    if unplottable.is_empty() {
        println!("{}", "✅ Every pantry has coordinates".green());
    } else {
        println!(
            "{}",
            format!("⚠️  {} pantries have no coordinates:", unplottable.len()).yellow()
        );
        for pantry in unplottable {
            println!("    - {}", pantry.program);
        }
    }

    println!(
        "{}",
        format!(
            "✅ {} institutions with contact addresses",
            catalog.institutions().len()
        )
        .green()
    );
    println!();
}

/// Prints the filtered pantries as a table.
fn list_pantries(config: &Config, catalog: Catalog, boroughs: Vec<Borough>, days: Vec<Weekday>) {
    let locator = LocatorService::new(Arc::new(catalog), config.map, config.default_borough);

    let defaults = locator.default_criteria();
    let criteria = FilterCriteria {
        boroughs: if boroughs.is_empty() {
            defaults.boroughs
        } else {
            boroughs.into_iter().collect()
        },
        days: if days.is_empty() {
            defaults.days
        } else {
            days.into_iter().collect()
        },
    };

    println!("{}", "📋 Pantries".bright_blue().bold());
    println!();

    let table = locator.table(&criteria);

    if table.is_empty() {
        println!("{}", "  No pantries match these filters".yellow());
        return;
    }

    println!(
        "  {:<40} {:<14} {:<28} {:<14}",
        "Program".bright_white().bold(),
        "Borough".bright_white().bold(),
        "Open".bright_white().bold(),
        "Phone".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for row in &table.rows {
        println!(
            "  {:<40} {:<14} {:<28} {:<14}",
            row.program.cyan(),
            row.borough.as_str(),
            row.open_days_label().bright_black(),
            row.phone
        );
    }

    println!();
    println!("  Total: {}", table.len().to_string().bright_white().bold());
    println!();
}

/// Sends one contact message, prompting for anything not given as a flag.
async fn send_contact(
    config: &Config,
    catalog: Catalog,
    institution: Option<String>,
    email: Option<String>,
    message: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✉️  Contact an Institution".bright_blue().bold());
    println!();

    let delivery: Arc<dyn MessageDelivery> = match &config.smtp {
        Some(smtp) => Arc::new(SmtpDelivery::new(smtp).context("Invalid SMTP settings")?),
        None => {
            println!(
                "{}",
                "⚠️  SMTP is not configured, the message will only be written to the log".yellow()
            );
            Arc::new(LogDelivery::new())
        }
    };

    let service = ContactService::new(
        Arc::new(catalog),
        delivery,
        Duration::from_secs(config.delivery_timeout_seconds),
    );

    let institution = match institution {
        Some(name) => name,
        None => {
            let names = service.institution_names();
            anyhow::ensure!(!names.is_empty(), "No institutions in the dataset");
            let index = Select::new()
                .with_prompt("Institution")
                .items(&names)
                .default(0)
                .interact()?;
            names[index].clone()
        }
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Your email").interact_text()?,
    };

    let message = match message {
        Some(m) => m,
        None => Input::new().with_prompt("Message").interact_text()?,
    };

    println!();
    println!("  To:   {}", institution.cyan());
    println!("  From: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Send this message?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = service
        .submit_for_outcome(ContactRequest::new(institution, email, message))
        .await;

    println!();
    match &outcome {
        ContactOutcome::Success { .. } => println!("{}", format!("✅ {}", outcome.message()).green().bold()),
        ContactOutcome::Logged { .. } => println!("{}", format!("⚠️  {}", outcome.message()).yellow().bold()),
        ContactOutcome::Failed { .. } => println!("{}", format!("❌ {}", outcome.message()).red().bold()),
    }
    println!();

    Ok(())
}
