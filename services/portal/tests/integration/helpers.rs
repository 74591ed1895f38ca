use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use upskill_portal::router::build_router;
use upskill_portal::state::AppState;
use upskill_portal_migration::Migrator;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh server over an in-memory sqlite store. The pool is pinned to
/// one connection: each sqlite `:memory:` connection is its own
/// database, so a larger pool would scatter the tables.
pub async fn test_server() -> (TestServer, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let state = AppState {
        db: db.clone(),
        session_secret: TEST_SECRET.to_owned(),
    };
    let server = TestServer::builder()
        .save_cookies()
        .build(build_router(state))
        .unwrap();
    (server, db)
}

pub async fn register_student(server: &TestServer, name: &str, email: &str, password: &str) {
    server
        .post("/student/register")
        .form(&[("name", name), ("email", email), ("password", password)])
        .await;
}

pub async fn login_student(server: &TestServer, email: &str, password: &str) {
    server
        .post("/student/login")
        .form(&[("email", email), ("password", password)])
        .await;
}

pub async fn register_admin(server: &TestServer, company: &str, email: &str, password: &str) {
    server
        .post("/admin/register")
        .form(&[
            ("company_name", company),
            ("email", email),
            ("password", password),
        ])
        .await;
}

pub async fn login_admin(server: &TestServer, email: &str, password: &str) {
    server
        .post("/admin/login")
        .form(&[("email", email), ("password", password)])
        .await;
}

pub async fn add_course(server: &TestServer, name: &str, duration: &str) {
    server
        .post("/admin/add_course")
        .form(&[("name", name), ("duration", duration)])
        .await;
}

pub async fn logout(server: &TestServer) {
    server.get("/logout").await;
}

/// First course id visible on the student home listing.
pub async fn first_course_id(server: &TestServer) -> i64 {
    let body = server.get("/student/home").await.json::<serde_json::Value>();
    body["courses"][0]["id"].as_i64().unwrap()
}
