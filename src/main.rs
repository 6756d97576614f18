mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, scheduler::booking_sweep, startup, state::AppState,
    util::slot_lock::SlotLocks,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.environment);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, config.environment).await?;
    let http_client = startup::setup_reqwest_client()?;
    let mail_sender = startup::setup_mail_sender(&config.mail, http_client);

    let slot_locks = SlotLocks::new();
    let sweeper = booking_sweep::BookingSweeper::new(
        db.clone(),
        mail_sender,
        slot_locks.clone(),
        config.venue,
        config.reminder_lead,
    );

    let mut scheduler =
        booking_sweep::start_scheduler(sweeper.clone(), &config.sweep_schedule).await?;

    let app = server::router::router()
        .with_state(AppState::new(
            db,
            slot_locks,
            sweeper.clone(),
            config.venue,
            config.environment,
        ))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Starting server on {} ({})",
        config.bind_addr,
        config.environment.as_str()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    // Stop scheduling new sweeps, then let a running one finish
    sweeper.close().await;
    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop booking sweep scheduler: {}", e);
    }

    tracing::info!("Server stopped");

    Ok(())
}
