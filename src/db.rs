use crate::config::DatabaseConfig;
use rocket::fairing::AdHoc;
use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Builds the pool without connecting. Connections are opened on first
/// acquire, so an unreachable database delays requests instead of aborting
/// launch, and recovery happens per call once the database is back.
fn init_pool(db_config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .min_connections(db_config.min_connections)
        .acquire_timeout(Duration::from_secs(db_config.acquire_timeout))
        .idle_timeout(Duration::from_secs(30))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(&db_config.connection_url())
}

fn is_connectivity_error(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::Configuration(_) => true,
        // 28xxx: invalid authorization, 3D: invalid catalog, 57: server shutting down
        sqlx::Error::Database(db) => db
            .code()
            .is_none_or(|c| c.starts_with("28") || c.starts_with("3D") || c.starts_with("57")),
        _ => false,
    }
}

/// A migration error is fatal unless it only means the database could not be
/// reached; the lazy pool recovers from those per call, while a mismatched or
/// failed migration must never serve a stale schema.
fn is_fatal_migration_error(e: &MigrateError) -> bool {
    match e {
        MigrateError::Execute(source) => !is_connectivity_error(source),
        _ => true,
    }
}

pub fn stage_db(db_config: DatabaseConfig) -> AdHoc {
    AdHoc::try_on_ignite("Postgres (sqlx)", |rocket| async move {
        let pool = match init_pool(&db_config) {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!("Failed to initialize database pool: {}", e);
                return Err(rocket);
            }
        };

        match sqlx::migrate!().run(&pool).await {
            Ok(()) => tracing::info!("Database migrations applied"),
            Err(e) if is_fatal_migration_error(&e) => {
                tracing::error!("Migration failed: {}", e);
                return Err(rocket);
            }
            Err(e) => tracing::warn!("Migrations skipped, database unreachable: {}", e),
        }

        Ok(rocket.manage(pool))
    })
}
