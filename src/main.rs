mod client;
mod commands;
mod config;
mod render;
mod session;
mod spinner;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gather_core::auth::{AuthFlow, GateDecision};

use crate::session::{Session, SessionStore};

#[derive(Parser)]
#[command(name = "gather")]
#[command(about = "Browse, organize and join community events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with an existing account
    Login,
    /// Create an account and log in
    Register,
    /// Log out and forget the stored session
    Logout,
    /// List all events
    Events,
    /// Show one event and the actions available to you
    Show { id: i64 },
    /// Create a new event
    New {
        /// Event title (prompted for when omitted)
        title: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Event time (HH:MM, 24-hour)
        #[arg(short, long)]
        time: Option<String>,

        /// Where the event takes place
        #[arg(short, long)]
        location: Option<String>,

        /// What the event is about
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit an event you organize
    Edit { id: i64 },
    /// Delete an event you organize
    Delete { id: i64 },
    /// Join an upcoming event
    Join { id: i64 },
    /// Cancel your participation in an upcoming event
    Cancel { id: i64 },
    /// Mark that you attended a passed event
    Attend { id: i64 },
    /// Rate and comment on an event you attended
    Comment {
        id: i64,

        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: Option<u8>,

        /// Comment text (prompted for when omitted)
        #[arg(short, long)]
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login => commands::login::run().await,
        Commands::Register => commands::register::run().await,
        Commands::Logout => commands::logout::run(),
        Commands::Events => {
            let session = require_session()?;
            commands::events::run(&session).await
        }
        Commands::Show { id } => {
            let session = require_session()?;
            commands::show::run(&session, id).await
        }
        Commands::New {
            title,
            date,
            time,
            location,
            description,
        } => {
            let session = require_session()?;
            commands::new::run(&session, title, date, time, location, description).await
        }
        Commands::Edit { id } => {
            let session = require_session()?;
            commands::edit::run(&session, id).await
        }
        Commands::Delete { id } => {
            let session = require_session()?;
            commands::delete::run(&session, id).await
        }
        Commands::Join { id } => {
            let session = require_session()?;
            commands::join::run(&session, id).await
        }
        Commands::Cancel { id } => {
            let session = require_session()?;
            commands::cancel::run(&session, id).await
        }
        Commands::Attend { id } => {
            let session = require_session()?;
            commands::attend::run(&session, id).await
        }
        Commands::Comment {
            id,
            rating,
            message,
        } => {
            let session = require_session()?;
            commands::comment::run(&session, id, rating, message).await
        }
    }
}

/// Exit guard for every command behind the main area: resolve the stored
/// session once at startup and send anonymous users to the login screen.
fn require_session() -> Result<Session> {
    let store = SessionStore::open()?;
    let session = store.load();

    let mut flow = AuthFlow::new();
    flow.resolve_startup(session.is_some())?;

    if flow.exit_gate() == GateDecision::Redirect {
        anyhow::bail!(
            "Not logged in.\n\n\
            Log in with:\n  \
            gather login\n\n\
            Or create an account with:\n  \
            gather register"
        );
    }

    session.ok_or_else(|| anyhow::anyhow!("Session store emptied behind the startup check"))
}
