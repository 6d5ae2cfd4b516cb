//! bioauth CLI - Database migrations and account management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! bioauth migrate
//!
//! # Create a user (biometric key optional)
//! bioauth user create -e user@example.com -p hunter22 -b fingerprint-key
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bioauth")]
#[command(version, about = "bioauth credential service tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 5 characters)
        #[arg(short, long)]
        password: String,

        /// Biometric key to enroll
        #[arg(short, long)]
        biometric_key: Option<String>,
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
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                password,
                biometric_key,
            } => {
                commands::user::create(&email, &password, biometric_key.as_deref()).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_user_create() {
        let cli = Cli::try_parse_from([
            "bioauth", "user", "create", "-e", "a@x.com", "-p", "pw12345", "-b", "bio123",
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        match cli.command {
            Commands::User {
                action:
                    UserAction::Create {
                        email,
                        password,
                        biometric_key,
                    },
            } => {
                assert_eq!(email, "a@x.com");
                assert_eq!(password, "pw12345");
                assert_eq!(biometric_key.as_deref(), Some("bio123"));
            }
            Commands::Migrate => panic!("expected user create"),
        }
    }
}
