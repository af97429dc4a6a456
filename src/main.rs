// Main entry point for Credential Gate

use anyhow::Context;
use credential_gate::api::{create_router, AppState};
use credential_gate::auth::{CredentialVerifier, InMemoryUserStore, ProviderSet, UserStore, YamlUserStore};
use credential_gate::config::Config;
use credential_gate::session::TokenEnricher;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load and validate configuration first (before any logging)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Initialize tracing subscriber with config values
    init_tracing(&config)?;

    info!(
        bind_address = %config.bind_address,
        port = config.port,
        login_path = %config.routes.login_path,
        signup_path = %config.routes.signup_path,
        "Starting credential gate"
    );

    // 3. User store
    let store: Arc<dyn UserStore> = match config.users_yaml_path {
        Some(ref path) => Arc::new(
            YamlUserStore::from_file(path).context("Failed to load users file")?,
        ),
        None => {
            warn!("USERS_YAML_PATH not set, starting with an empty user store");
            Arc::new(InMemoryUserStore::new())
        }
    };

    // 4. Providers, token enricher, router
    let providers = ProviderSet::credentials(CredentialVerifier::new(store));
    let enricher = TokenEnricher::new(&config.session).context("Failed to initialize token signer")?;
    let addr = format!("{}:{}", config.bind_address, config.port);
    let app = create_router(AppState::new(providers, enricher, config));

    // 5. Serve
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(address = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
