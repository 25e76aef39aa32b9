use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

/// Apply migrations and insert the sample cars into an empty table.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    let inserted = models::seed::seed_cars(&db).await?;
    info!(service = "seed", event = "done", inserted, "seeding finished");
    Ok(())
}
