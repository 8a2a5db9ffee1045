//! Shelf API server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "shelf_api_server", about = "Shelf book-review API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/shelf"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shelf_api=debug,shelf_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, bind_addr = %args.bind_addr, "starting shelf_api_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    shelf_api::migrate(&pool).await?;

    let config = shelf_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        database_url: args.database_url,
        jwt_secret: shelf_core::auth::jwt::resolve_jwt_secret(),
    };

    let state = shelf_api::AppState {
        pool,
        config: config.clone(),
    };
    let app = shelf_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
