use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::car::repo::seaorm::SeaOrmCarRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::{page_limits, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: connect, migrate/seed as configured, and serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrated", "database schema up to date");
    }
    if cfg.database.seed_on_startup {
        let inserted = models::seed::seed_cars(&db).await?;
        info!(event = "seeded", inserted, "sample data check complete");
    }

    let repo = Arc::new(SeaOrmCarRepository::new(db));
    let state = AppState::new(repo, page_limits(&cfg.api));

    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting car api; swagger ui at /api-docs");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let cfg = configs::ServerConfig { host: "0.0.0.0".into(), port: 3000, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap().port(), 3000);
        let bad = configs::ServerConfig { host: "not a host".into(), port: 3000, worker_threads: None };
        assert!(bind_addr(&bad).is_err());
    }
}
