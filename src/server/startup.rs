//! Startup helpers: storage, sessions, mail transport, logging and shutdown.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{Config, Environment, MailConfig},
    error::AppError,
    service::mail::{LogMailSender, MailSender, RelayMailSender},
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the environment.
pub fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_level()));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema and the seeded
/// courts are in place before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity. The cookie is marked secure only in
/// production so local development works over plain HTTP.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    environment: Environment,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(environment == Environment::Production)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used by the mail relay.
///
/// Redirects are disabled so a misconfigured relay URL cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?)
}

/// Selects the mail transport for reminders.
///
/// Without `MAIL_RELAY_URL` reminders are written to the log.
pub fn setup_mail_sender(config: &MailConfig, http_client: reqwest::Client) -> Arc<dyn MailSender> {
    match &config.relay_url {
        Some(endpoint) => {
            tracing::info!("Sending reminders through mail relay at {}", endpoint);
            Arc::new(RelayMailSender::new(
                http_client,
                endpoint.clone(),
                config.relay_token.clone(),
                config.from.clone(),
            ))
        }
        None => {
            tracing::warn!("MAIL_RELAY_URL is not set, reminders will only be logged");
            Arc::new(LogMailSender::new(config.from.clone()))
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
