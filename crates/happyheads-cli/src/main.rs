use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod bootstrap;
mod commands;
mod logging;

use bootstrap::App;

#[derive(Parser)]
#[command(name = "happyheads")]
#[command(about = "HappyHeads - mental wellness companion", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    SignIn { email: String, password: String },
    /// Create an account and sign it in
    Register {
        email: String,
        password: String,
        name: String,
    },
    /// Forget the stored session
    SignOut,
    /// Show the signed-in identity
    Whoami,
    /// Check whether the current session may open a page
    Access {
        /// Page path such as /journal or /admin
        path: String,
    },
    /// Browse or post to the community forum
    Community {
        #[command(subcommand)]
        action: CommunityAction,
    },
    /// Browse the content library
    Library {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        /// article, video, audio or exercise
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Read journal entries
    Journal {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Log moods and view the summary
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },
    /// Browse and play mindfulness sessions
    Mindfulness {
        #[command(subcommand)]
        action: MindfulnessAction,
    },
    /// Browse therapists
    Therapists {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        specialty: Option<String>,
    },
    /// Book an appointment
    Book {
        therapist: String,
        /// Date as YYYY-MM-DD
        date: String,
        /// Slot such as "9:00 AM"
        time: String,
        /// video, phone or in-person
        #[arg(long, default_value = "video")]
        session_type: String,
    },
    /// Admin dashboard (administrators only)
    Admin {
        #[arg(long, default_value = "")]
        search: String,
        /// active or inactive
        #[arg(long)]
        status: Option<String>,
    },
}

#[derive(Subcommand)]
enum CommunityAction {
    /// List posts
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        /// recent, popular or source
        #[arg(long, default_value = "recent")]
        sort: String,
    },
    /// Publish a post as the signed-in user
    Post {
        title: String,
        content: String,
        #[arg(long, default_value = "general")]
        category: String,
    },
}

#[derive(Subcommand)]
enum MoodAction {
    /// Record a mood from 1 (difficult) to 5 (excellent)
    Log {
        level: u8,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Average and trend over the last week or month
    Summary {
        #[arg(long, default_value = "week")]
        period: String,
    },
    /// Every recorded mood
    History,
}

#[derive(Subcommand)]
enum MindfulnessAction {
    /// List sessions
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Run the session timer
    Play {
        id: String,
        /// Stop after this many seconds
        #[arg(long)]
        seconds: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config)?;
    let level = cli.log_level.unwrap_or_else(|| config.log_level.clone());
    logging::init_tracing(&level);

    let app = App::start(config).await?;
    app.watch_interrupts();

    match cli.command {
        Commands::SignIn { email, password } => {
            commands::session::sign_in(&app, &email, &password).await?
        }
        Commands::Register {
            email,
            password,
            name,
        } => commands::session::register(&app, &email, &password, &name).await?,
        Commands::SignOut => commands::session::sign_out(&app).await?,
        Commands::Whoami => commands::session::whoami(&app)?,
        Commands::Access { path } => commands::session::access(&app, &path)?,
        Commands::Community { action } => match action {
            CommunityAction::List {
                search,
                category,
                sort,
            } => commands::community::list(&app, search, category, &sort).await?,
            CommunityAction::Post {
                title,
                content,
                category,
            } => commands::community::post(&app, title, content, category).await?,
        },
        Commands::Library {
            search,
            category,
            kind,
        } => commands::library::list(&app, search, category, kind).await?,
        Commands::Journal { search, tag } => commands::journal::list(&app, search, tag).await?,
        Commands::Mood { action } => match action {
            MoodAction::Log { level, note } => commands::mood::log(&app, level, &note).await?,
            MoodAction::Summary { period } => commands::mood::summary(&app, &period).await?,
            MoodAction::History => commands::mood::history(&app).await?,
        },
        Commands::Mindfulness { action } => match action {
            MindfulnessAction::List { category } => {
                commands::mindfulness::list(&app, category).await?
            }
            MindfulnessAction::Play { id, seconds } => {
                commands::mindfulness::play(&app, &id, seconds).await?
            }
        },
        Commands::Therapists { search, specialty } => {
            commands::therapists::list(&app, search, specialty).await?
        }
        Commands::Book {
            therapist,
            date,
            time,
            session_type,
        } => commands::therapists::book(&app, therapist, &date, time, &session_type).await?,
        Commands::Admin { search, status } => commands::admin::show(&app, search, status).await?,
    }

    Ok(())
}
