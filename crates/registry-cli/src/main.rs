//! registry-cli - operate the government caller registry over its REST API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use registry_client::RegistryClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;

/// Government caller registry CLI
#[derive(Parser, Debug)]
#[command(name = "registry-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the registry API
    #[arg(long, default_value = "http://localhost:3001")]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a phone number for an agency
    Register {
        /// Agency address
        agency: String,

        /// Phone number to register
        phone_number: String,

        /// Agency display name
        agency_name: String,
    },

    /// Revoke an agency's phone number
    Revoke {
        /// Agency address
        agency: String,
    },

    /// Verify that a phone number belongs to an agency
    Verify {
        /// Agency address
        agency: String,

        /// Phone number to check
        phone_number: String,
    },

    /// Look up the agency name for a phone number
    LookupPhone {
        /// Phone number
        phone_number: String,
    },

    /// Look up the phone number for an agency
    LookupAgency {
        /// Agency address
        agency: String,
    },

    /// Transfer registry ownership to a new identity
    TransferOwnership {
        /// Address of the new owner
        new_owner: String,
    },

    /// List all live registrations
    #[command(alias = "ls")]
    List,

    /// Check API health
    Health,

    /// Register the demo agency set
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = RegistryClient::new(&cli.api_url).context("Failed to create API client")?;

    match cli.command {
        Commands::Register {
            agency,
            phone_number,
            agency_name,
        } => commands::register(&client, &agency, &phone_number, &agency_name).await,
        Commands::Revoke { agency } => commands::revoke(&client, &agency).await,
        Commands::Verify {
            agency,
            phone_number,
        } => commands::verify(&client, &agency, &phone_number).await,
        Commands::LookupPhone { phone_number } => {
            commands::lookup_phone(&client, &phone_number).await
        }
        Commands::LookupAgency { agency } => commands::lookup_agency(&client, &agency).await,
        Commands::TransferOwnership { new_owner } => {
            commands::transfer_ownership(&client, &new_owner).await
        }
        Commands::List => commands::list(&client).await,
        Commands::Health => commands::health(&client).await,
        Commands::Seed => commands::seed(&client).await,
    }
}
