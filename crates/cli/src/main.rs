//! MedCompanion CLI: the main entry point.
//!
//! Commands:
//! - `onboard`: Create config, data directory, and secrets template
//! - `dashboard`: At-a-glance overview of the stored records
//! - `profile`: Show or edit the patient profile
//! - `log`: Record a consultation
//! - `history`: List recorded consultations
//! - `ask`: Ask the assistant a single question
//! - `chat`: Interactive assistant session
//! - `status`: Show configuration and credential status

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "medcompanion",
    about = "MedCompanion — personal health records with an AI assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and data directory
    Onboard,

    /// Show a summary of the profile and consultations
    Dashboard,

    /// Show or edit the patient profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Record a consultation
    Log {
        /// Visit date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Doctor or clinic seen
        #[arg(short, long)]
        provider: String,

        /// Notes, diagnosis, or prescriptions
        #[arg(short, long)]
        notes: String,
    },

    /// List all recorded consultations
    History,

    /// Ask the assistant a single question
    Ask {
        /// The question to ask
        question: String,
    },

    /// Start an interactive assistant session
    Chat,

    /// Show configuration and credential status
    Status {
        /// Also check that the model API is reachable with the resolved key
        #[arg(long)]
        check: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile
    Show,

    /// Update profile fields; fields not given keep their current values
    Set {
        #[arg(long)]
        name: Option<String>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,

        /// Comma-separated allergies, e.g. "penicillin, peanuts"
        #[arg(long)]
        allergies: Option<String>,

        /// Comma-separated current medications
        #[arg(long)]
        medications: Option<String>,

        /// Free-text medical history
        #[arg(long)]
        history: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A local .env may carry GEMINI_API_KEY; absence is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Dashboard => commands::dashboard::run().await?,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show().await?,
            ProfileAction::Set {
                name,
                dob,
                allergies,
                medications,
                history,
            } => {
                let update = commands::profile::ProfileUpdate {
                    name,
                    dob,
                    allergies,
                    medications,
                    history,
                };
                commands::profile::set(update).await?
            }
        },
        Commands::Log {
            date,
            provider,
            notes,
        } => commands::consult::log(date, provider, notes).await?,
        Commands::History => commands::consult::history().await?,
        Commands::Ask { question } => commands::chat::ask(question).await?,
        Commands::Chat => commands::chat::run().await?,
        Commands::Status { check } => commands::status::run(check).await?,
    }

    Ok(())
}
