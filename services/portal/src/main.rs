use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

use upskill_core::tracing::init_tracing;
use upskill_portal::config::PortalConfig;
use upskill_portal::router::build_router;
use upskill_portal::state::AppState;
use upskill_portal_migration::Migrator;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = PortalConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("failed to prepare schema");

    let state = AppState {
        db,
        session_secret: config.session_secret,
    };
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.portal_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("portal listening on {addr}");

    axum::serve(listener, router)
        .await
        .expect("server exited with error");
}
