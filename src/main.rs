use hook_relay::logging::{FileLogger, setup_logging};
use hook_relay::notify::TelegramNotifier;
use hook_relay::{AppState, RelayConfig, router};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match RelayConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let file_logger = config.log_dir.clone().map(FileLogger::new);
    // Held for the lifetime of main so buffered file logs are flushed
    let _log_guard = match setup_logging(file_logger.as_ref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging setup failed: {}", e);
            std::process::exit(1);
        }
    };

    let notifier = match TelegramNotifier::new(config.telegram.clone()) {
        Ok(n) => Arc::new(n),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config, notifier));
    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_address, e);
            std::process::exit(1);
        }
    };
    info!("Listening on {}", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
