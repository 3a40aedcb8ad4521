//! AutoSupport console CLI
//!
//! Terminal front end for the AutoSupport ticketing API.
//!
//! # Usage
//!
//! ```bash
//! autosupport dashboard
//! autosupport tickets list --status in-progress
//! autosupport tickets show 42
//! autosupport tickets create --name "Jane Doe" --email jane@example.com \
//!     --subject "Charged twice" --description "..." --analyze
//! autosupport agents list --format json
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autosupport_console::output::OutputFormat;
use autosupport_console::views::StatusFilter;
use autosupport_console::{Client, ClientConfig, FileConfig, TicketCategory, TicketPriority, TicketStatus};

mod commands;

#[derive(Parser)]
#[command(name = "autosupport")]
#[command(version)]
#[command(about = "AutoSupport admin console", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "AUTOSUPPORT_API_URL", global = true)]
    api_url: Option<String>,

    /// Output format (defaults to the config file's default_format, then table)
    #[arg(long, short, global = true)]
    format: Option<OutputFormat>,

    /// Profile name from config file
    #[arg(long, short, global = true)]
    profile: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the analytics dashboard
    Dashboard,
    /// Manage tickets
    Tickets {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Manage agents
    Agents {
        #[command(subcommand)]
        action: AgentCommands,
    },
    /// View analytics reports
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
    /// Run the ML endpoints directly
    Ml {
        #[command(subcommand)]
        action: MlCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum TicketCommands {
    /// List tickets, optionally filtered by status
    List {
        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
    },
    /// Query tickets with every server-side filter
    Search {
        #[arg(long)]
        status: Option<TicketStatus>,
        #[arg(long)]
        category: Option<TicketCategory>,
        #[arg(long)]
        priority: Option<TicketPriority>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a ticket with its responses and AI suggestion
    Show { id: u64 },
    /// Create a new ticket
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        description: String,
        /// Preview the predicted category and sentiment before submitting
        #[arg(long)]
        analyze: bool,
    },
    /// Update ticket fields
    Update {
        id: u64,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<TicketCategory>,
        #[arg(long)]
        priority: Option<TicketPriority>,
        #[arg(long)]
        status: Option<TicketStatus>,
    },
    /// Assign a ticket to an agent
    Assign {
        id: u64,
        #[arg(long)]
        agent: u64,
    },
    /// Delete a ticket
    Delete { id: u64 },
    /// List responses on a ticket
    Responses { id: u64 },
    /// Add a response to a ticket
    Respond {
        id: u64,
        #[arg(long)]
        message: String,
        /// Respond as this agent; omitted means a customer message
        #[arg(long)]
        agent: Option<String>,
    },
    /// Generate a suggested response for a ticket
    Suggest { id: u64 },
}

#[derive(Subcommand)]
enum AgentCommands {
    /// List agents
    List {
        #[arg(long)]
        available: Option<bool>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get agent details
    Show { id: u64 },
    /// Create a new agent
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Comma-separated categories
        #[arg(long)]
        expertise: String,
        #[arg(long, default_value_t = 10)]
        max_tickets: u32,
    },
    /// Update agent fields
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        expertise: Option<String>,
        #[arg(long)]
        max_tickets: Option<u32>,
        #[arg(long)]
        available: Option<bool>,
    },
    /// Delete an agent
    Delete { id: u64 },
    /// List tickets assigned to an agent
    Tickets { id: u64 },
    /// Show workload and performance for an agent
    Stats { id: u64 },
}

#[derive(Subcommand)]
enum AnalyticsCommands {
    /// Daily ticket counts
    Trends {
        #[arg(long, default_value_t = autosupport_console::api::analytics::DEFAULT_TREND_DAYS)]
        days: u32,
    },
    /// Most frequent ticket categories
    TopIssues {
        #[arg(long, default_value_t = autosupport_console::api::analytics::DEFAULT_TOP_ISSUES)]
        limit: u32,
    },
    /// Resolution rate and agent utilization
    Performance,
}

#[derive(Subcommand)]
enum MlCommands {
    /// Classify text into a ticket category
    Classify { text: String },
    /// Analyze sentiment and urgency of text
    Sentiment { text: String },
    /// Suggest a response for text
    Suggest {
        text: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show which models are loaded
    Status,
    /// Reload all models
    Reload,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "autosupport_console=debug,autosupport=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> commands::CommandResult {
    let profile = cli.profile.as_deref();
    let file = FileConfig::load(profile).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config file");
        FileConfig::default()
    });
    let format = cli
        .format
        .or_else(|| OutputFormat::from_config(file.default_format.as_deref()))
        .unwrap_or_default();

    let command = match cli.command {
        Commands::Config { action } => return commands::config::handle(action, profile),
        command => command,
    };

    let client = Client::new(ClientConfig::resolve(cli.api_url, &file))?;
    tracing::debug!(base_url = client.base_url(), "client ready");

    match command {
        Commands::Dashboard => commands::dashboard::handle(&client, format).await,
        Commands::Tickets { action } => commands::tickets::handle(action, &client, format).await,
        Commands::Agents { action } => commands::agents::handle(action, &client, format).await,
        Commands::Analytics { action } => commands::analytics::handle(action, &client, format).await,
        Commands::Ml { action } => commands::ml::handle(action, &client, format).await,
        Commands::Config { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_top_level_flags_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "autosupport",
            "tickets",
            "list",
            "--api-url",
            "http://support.internal/api/v1",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://support.internal/api/v1"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Tickets { action: TicketCommands::List { status: StatusFilter::All } }));
    }
}
