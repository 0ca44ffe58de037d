//! Taskdeck - local host for the to-do UI
//!
//! Serves the built web UI and proxies GraphQL traffic to the managed
//! backend. Persistence, authentication, and the schema all live in the
//! managed service; this binary only hosts and forwards.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use taskdeck::server;
use taskdeck_shared::{ApiConfig, AppConfig, HostedAuthConfig};

#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(author = "Taskdeck Team")]
#[command(version)]
#[command(about = "Local host for the Taskdeck to-do UI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port for the web UI
    #[arg(short, long, default_value = "8080", env = "TASKDECK_PORT", global = true)]
    port: u16,

    /// Managed GraphQL endpoint to proxy /graphql to
    #[arg(long, env = "TASKDECK_API_URL", global = true)]
    api_url: Option<String>,

    /// API key for the managed API; injected server-side, never shipped to the browser
    #[arg(long, env = "TASKDECK_API_KEY", global = true)]
    api_key: Option<String>,

    /// Hosted sign-in domain (enables the sign-in gate together with --auth-client-id)
    #[arg(long, env = "TASKDECK_AUTH_DOMAIN", global = true)]
    auth_domain: Option<String>,

    /// OAuth2 client id registered with the hosted sign-in provider
    #[arg(long, env = "TASKDECK_AUTH_CLIENT_ID", global = true)]
    auth_client_id: Option<String>,

    /// Redirect URI the hosted page returns to (defaults to this server's root)
    #[arg(long, env = "TASKDECK_AUTH_REDIRECT_URI", global = true)]
    auth_redirect_uri: Option<String>,

    /// Directory holding the built UI assets
    #[arg(long, default_value = "ui/dist", env = "TASKDECK_ASSETS", global = true)]
    assets: PathBuf,

    /// Don't open the browser automatically
    #[arg(long, global = true)]
    no_browser: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the UI server
    Serve {
        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Serve { no_open }) => {
            serve(&cli, !no_open && !cli.no_browser).await?;
        }
        Some(Commands::Version) => {
            println!("Taskdeck {}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            serve(&cli, !cli.no_browser).await?;
        }
    }

    Ok(())
}

async fn serve(cli: &Cli, open_browser: bool) -> anyhow::Result<()> {
    info!("Starting Taskdeck...");

    let ui_url = format!("http://127.0.0.1:{}", cli.port);

    let state = Arc::new(server::AppState {
        config: ui_config(cli),
        backend_url: cli.api_url.clone(),
        api_key: cli.api_key.clone(),
        http_client: reqwest::Client::new(),
    });

    match &cli.api_url {
        Some(url) => info!("Proxying /graphql to {}", url),
        None => tracing::warn!("No --api-url configured; /graphql will return 502"),
    }

    let server_handle = server::start_server(cli.port, state, cli.assets.clone()).await?;

    if open_browser {
        info!("Opening browser...");
        if let Err(e) = open::that(&ui_url) {
            tracing::warn!("Failed to open browser: {}", e);
            info!("Please open {} in your browser", ui_url);
        }
    }

    info!("Taskdeck is running at {}", ui_url);
    info!("Press Ctrl+C to stop");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
        result = server_handle => {
            if let Err(e) = result? {
                tracing::error!("Server error: {}", e);
            }
        }
    }

    info!("Taskdeck stopped.");
    Ok(())
}

/// Assemble the configuration document served to the UI. The browser is
/// always pointed at the same-origin proxy path; the real endpoint and
/// API key stay server-side.
fn ui_config(cli: &Cli) -> AppConfig {
    let auth = match (&cli.auth_domain, &cli.auth_client_id) {
        (Some(domain), Some(client_id)) => {
            let origin = cli
                .auth_redirect_uri
                .clone()
                .unwrap_or_else(|| format!("http://127.0.0.1:{}/", cli.port));
            Some(HostedAuthConfig {
                domain: domain.clone(),
                client_id: client_id.clone(),
                redirect_uri: origin.clone(),
                sign_out_uri: origin,
            })
        }
        _ => None,
    };

    AppConfig {
        api: ApiConfig {
            url: "/graphql".to_string(),
            api_key: None,
        },
        auth,
    }
}
