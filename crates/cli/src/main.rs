//! Shopsmith CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! shopsmith migrate
//!
//! # Mint a development access token for a user id
//! shopsmith token -u user_2abCdEf
//!
//! # Bootstrap a store for a user
//! shopsmith store create -u user_2abCdEf -n "Acme Outfitters"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `token` - Mint a signed development access token
//! - `store create` - Create a store owned by a user

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopsmith")]
#[command(author, version, about = "Shopsmith CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Mint a signed development access token
    Token {
        /// Opaque user id to embed as the token subject
        #[arg(short, long)]
        user: String,

        /// Token lifetime in hours
        #[arg(short, long, default_value_t = 24)]
        ttl_hours: i64,
    },
    /// Manage stores
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Create a store owned by a user
    Create {
        /// Opaque user id of the owner
        #[arg(short, long)]
        user: String,

        /// Store display name
        #[arg(short, long)]
        name: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Token { user, ttl_hours } => {
            commands::token::mint(&user, ttl_hours)?;
        }
        Commands::Store { action } => match action {
            StoreAction::Create { user, name } => {
                commands::store::create(&user, &name).await?;
            }
        },
    }
    Ok(())
}
