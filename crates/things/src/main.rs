use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use things::{app::create_app, config::Config, state::AppState};

/// Backends the local server can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// In-memory item store and fake translator
    Memory,
    /// DynamoDB and Amazon Translate
    Aws,
}

/// Things - local development server for the things API
#[derive(Parser, Debug)]
#[command(name = "things")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage and translation backend
    #[arg(long, short, value_enum, default_value = "memory", env = "THINGS_BACKEND")]
    backend: Backend,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "things=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let state = match cli.backend {
        Backend::Memory => {
            tracing::info!("Using in-memory item store and translator");
            AppState::in_memory()
        }
        Backend::Aws => AppState::from_aws(&config).await,
    };

    // Build the application router
    let app = create_app(state, config.request_timeout());

    let listener = bind_listener(&cli.host, cli.port).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Take over a socket passed in by `systemfd`/`cargo watch`, or bind
/// `host:port` when none was handed over.
async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    if let Some(inherited) = ListenFd::from_env().take_tcp_listener(0)? {
        inherited.set_nonblocking(true)?;
        tracing::debug!("Using inherited listener");
        return Ok(TcpListener::from_std(inherited)?);
    }

    Ok(TcpListener::bind((host, port)).await?)
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
///
/// A signal whose handler cannot be installed never fires; the other one
/// still stops the server.
async fn shutdown_signal() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "Ctrl+C",
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for Ctrl+C");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "Shutting down");
}
