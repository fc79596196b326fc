use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelia_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "atelia")]
#[command(author, version, about = "Headless driver for the Atelia site interactions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a config file (defaults to ~/.config/atelia/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    /// In-page anchor links
    Anchor,
    /// Plan cards
    Card,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a smooth scroll and print every frame
    Scroll {
        /// Target offset in pixels
        target: f64,
        /// Starting offset
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Document height
        #[arg(long, default_value_t = 10_000.0)]
        document: f64,
        /// Viewport height
        #[arg(long, default_value_t = 900.0)]
        viewport: f64,
        /// Call site whose duration policy applies
        #[arg(long, value_enum, default_value_t = ProfileArg::Anchor)]
        profile: ProfileArg,
        /// Requested duration; the call site default applies when omitted
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Feed scroll samples to the navbar controller
    Navbar {
        /// Comma separated offsets, one frame each (e.g. 0,50,65,10)
        samples: String,
        /// Treat the mobile menu as open
        #[arg(long)]
        menu_open: bool,
    },
    /// Advance the furniture carousel
    Carousel {
        /// Number of advance steps
        #[arg(short = 'n', long, default_value_t = 3)]
        steps: usize,
        /// Rendered card width
        #[arg(long, default_value_t = 280.0)]
        card_width: f64,
        /// Grid column gap
        #[arg(long, default_value_t = 24.0)]
        gap: f64,
    },
    /// Compose the contact form mailto link
    Mailto {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        message: String,
    },
    /// Resolve a share link click
    Share {
        /// facebook, twitter or instagram
        platform: String,
        /// Page being shared
        url: String,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    debug!(path = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Scroll {
            target,
            from,
            document,
            viewport,
            profile,
            duration_ms,
        } => {
            let scenario = commands::scroll::Scenario {
                target,
                from,
                document,
                viewport,
                card: matches!(profile, ProfileArg::Card),
                duration_ms,
            };
            commands::scroll::run(&config, &scenario, cli.json).await
        }
        Commands::Navbar { samples, menu_open } => {
            commands::navbar::run(&config, &samples, menu_open, cli.json)
        }
        Commands::Carousel {
            steps,
            card_width,
            gap,
        } => commands::carousel::run(&config, steps, card_width, gap, cli.json).await,
        Commands::Mailto {
            subject,
            first_name,
            last_name,
            email,
            phone,
            message,
        } => {
            let enquiry = atelia_core::compose::Enquiry {
                subject,
                first_name,
                last_name,
                email,
                phone,
                message,
            };
            commands::mailto::run(&config, &enquiry, cli.json)
        }
        Commands::Share { platform, url } => {
            commands::share::run(&config, &platform, &url, cli.json)
        }
        Commands::Config => commands::config::run(&config),
    }
}
