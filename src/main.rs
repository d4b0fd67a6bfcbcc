use std::sync::Arc;

use notes_api::{app, config::AppConfig, database, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DB_*, JWT_SECRET, PORT.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Missing secrets or database parameters are a startup failure, not a
    // silent fallback.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match database::pool::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = database::pool::migrate(&pool).await {
        eprintln!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    let port = config.port;
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Notes API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
