use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(about = "Manage the portfolio backend: projects, profile, CV and messages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API root, e.g. http://localhost:9000/api
    #[arg(long, env = "PORTFOLIO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Sign in with these credentials before running the command
    #[arg(long, env = "PORTFOLIO_ADMIN_EMAIL", global = true)]
    pub email: Option<String>,

    #[arg(long, env = "PORTFOLIO_ADMIN_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and edit projects
    Projects {
        #[command(subcommand)]
        action: ProjectCommand,
    },

    /// Show or edit the portfolio profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Manage the CV document
    Cv {
        #[command(subcommand)]
        action: CvCommand,
    },

    /// Read, send and delete contact messages
    Messages {
        #[command(subcommand)]
        action: MessageCommand,
    },

    /// Sign in and print the issued tokens
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Exchange the refresh token for a new access token
    Refresh,

    /// Show the signed-in account
    Whoami,

    /// Forget the tokens held by this process
    Logout,

    /// Summary of projects, messages, profile and CV
    Dashboard,

    /// Ask the portfolio assistant; without questions, list suggestions
    Chat { questions: Vec<String> },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Gallery view of all projects
    List,

    Show { id: i64 },

    /// Step through a project's images with popup keys
    View {
        id: i64,

        /// Key names applied in order: ArrowLeft, ArrowRight, Escape
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },

    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Comma list, e.g. "Rust, Actix"
        #[arg(long, default_value = "")]
        technologies: String,

        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },

    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        technologies: Option<String>,

        /// New image to attach
        #[arg(long = "image")]
        images: Vec<PathBuf>,

        /// Position of a stored image to drop (0-based)
        #[arg(long = "remove-image")]
        remove_images: Vec<usize>,
    },

    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// The current profile
    Show,

    List,

    Create {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        bio: String,

        #[arg(long)]
        photo: PathBuf,
    },

    /// Edit the current profile
    Update {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        photo: Option<PathBuf>,
    },

    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum CvCommand {
    /// The current CV
    Current,

    List,

    Show { id: i64 },

    /// Upload a file that replaces the current CV
    Upload { path: PathBuf },

    /// Save a CV to disk (current one unless --id or --filename is given)
    Download {
        #[arg(long, conflicts_with = "filename")]
        id: Option<i64>,

        #[arg(long)]
        filename: Option<String>,

        #[arg(long, short)]
        output: PathBuf,
    },

    /// Delete the current CV, or the one with --id
    Delete {
        #[arg(long)]
        id: Option<i64>,
    },

    Exists,
}

#[derive(Subcommand)]
pub enum MessageCommand {
    List,

    Show { id: i64 },

    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    Delete { id: i64 },
}
