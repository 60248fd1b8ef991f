//! Sandbox CLI
//!
//! Renders messages and runs the user use cases against an in-memory store
//! seeded from configuration.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, sync::Arc};

use application::{MessageRenderer, Renderer, UserController};
use clap::{Parser, Subcommand};
use domain::{Message, UserId};
use infrastructure::{AppConfig, InMemoryDatabase, InMemoryMessageBus, init_logging};

/// Sandbox CLI
#[derive(Parser)]
#[command(name = "sandbox-cli")]
#[command(author, version, about = "User/company sandbox CLI", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "SANDBOX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a message to HTML
    ///
    /// Example: sandbox-cli render --header Hello --body "Welcome aboard" --footer Bye
    Render {
        /// Title text
        #[arg(long, default_value = "")]
        header: String,

        /// Main content
        #[arg(long, default_value = "")]
        body: String,

        /// Closing text
        #[arg(long, default_value = "")]
        footer: String,
    },

    /// Show the company and all seeded users
    Show,

    /// Change a user's email, reclassifying them as employee or customer
    ///
    /// Example: sandbox-cli change-email 6f1c2d4e-0000-4000-8000-0000000000a2 ann@acme.com
    ChangeEmail {
        /// User ID
        user_id: String,

        /// New email address
        new_email: String,
    },

    /// Give a user a new display name
    RenameUser {
        /// User ID
        user_id: String,

        /// New name (trimmed, at most 50 characters kept)
        name: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(level) = log_filter_from_verbosity(cli.verbose) {
        config.logging.level = level.to_string();
    }
    init_logging(&config.logging)?;

    let db = InMemoryDatabase::from_config(&config)?;
    let bus = InMemoryMessageBus::new();
    let controller = UserController::new(
        Arc::new(db.clone()),
        Arc::new(bus.clone()),
        config.company.id,
    );

    match cli.command {
        Commands::Render {
            header,
            body,
            footer,
        } => {
            let html = MessageRenderer::new().render(&Message::new(header, body, footer));
            println!("{html}");
        },

        Commands::Show => {
            let company = controller.get_company().await?;
            println!("🏢 Company:");
            println!("{}", serde_json::to_string_pretty(&company)?);
            println!("👥 Users:");
            println!("{}", serde_json::to_string_pretty(&db.users())?);
        },

        Commands::ChangeEmail { user_id, new_email } => {
            let user_id = UserId::parse(&user_id)?;
            let outcome = controller.change_email(&user_id, &new_email).await?;

            if outcome.changed {
                println!("✉️  Email changed:");
            } else {
                println!("✉️  Email unchanged:");
            }
            println!("{}", serde_json::to_string_pretty(&outcome)?);

            for notification in bus.notifications() {
                println!("📨 Notification:");
                println!("{}", notification.html);
            }
        },

        Commands::RenameUser { user_id, name } => {
            let user_id = UserId::parse(&user_id)?;
            let user = controller.rename_user(&user_id, &name).await?;

            println!("🏷️  User renamed:");
            println!("{}", serde_json::to_string_pretty(&user)?);
        },
    }

    Ok(())
}
