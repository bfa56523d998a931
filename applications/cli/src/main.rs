/// Ammora - browse the album catalog from a terminal
use ammora_cli::{
    config::AppConfig,
    render::{render_detail, render_list},
};
use ammora_client::MusicApiClient;
use ammora_state::{AlbumDetailController, AlbumListController, StateSubscription, ViewState};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ammora")]
#[command(about = "Browse the Ammora album catalog", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every album
    Albums,
    /// Show a single album
    Album {
        /// Album ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    // Initialize tracing; stdout is reserved for the rendered screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // One client for the whole process, shared by every controller
    let client = Arc::new(MusicApiClient::new(config.api.clone())?);
    tracing::debug!(base_url = client.base_url(), "Using catalog");

    let loaded = match cli.command {
        Commands::Albums => {
            let controller = AlbumListController::new(Arc::clone(&client));
            let updates = controller.subscribe();
            controller.activate();
            present(updates, |out, state| render_list(out, state)).await?
        }
        Commands::Album { id } => {
            let controller = AlbumDetailController::new(Arc::clone(&client));
            let updates = controller.subscribe();
            controller.load(id);
            present(updates, |out, state| render_detail(out, state)).await?
        }
    };

    Ok(if loaded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Render every published state until the fetch settles.
///
/// Returns whether it ended in `Loaded`.
async fn present<T, F>(mut updates: StateSubscription<ViewState<T>>, render: F) -> io::Result<bool>
where
    T: Clone,
    F: Fn(&mut io::Stdout, &ViewState<T>) -> io::Result<()>,
{
    let mut stdout = io::stdout();

    while let Some(state) = updates.next().await {
        render(&mut stdout, &state)?;
        stdout.flush()?;

        if state.is_settled() {
            return Ok(state.loaded().is_some());
        }
    }

    Ok(false)
}
