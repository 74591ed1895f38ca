use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};

use upskill_portal_schema::students;
use upskill_session::cookie::UPSKILL_SESSION;

use crate::helpers::{login_student, register_student, test_server};

#[tokio::test]
async fn duplicate_email_keeps_a_single_row() {
    let (server, db) = test_server().await;

    register_student(&server, "Ada", "ada@example.com", "password1").await;
    let res = server
        .post("/student/register")
        .form(&[
            ("name", "Other Ada"),
            ("email", "ada@example.com"),
            ("password", "password2"),
        ])
        .await;

    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/student/register");

    let count = students::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn short_password_is_never_stored() {
    let (server, db) = test_server().await;

    let res = server
        .post("/student/register")
        .form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "short"),
        ])
        .await;

    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/student/register");

    let count = students::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn stored_password_is_hashed() {
    let (server, db) = test_server().await;

    register_student(&server, "Ada", "ada@example.com", "password1").await;

    let student = students::Entity::find().one(&db).await.unwrap().unwrap();
    assert_ne!(student.password, "password1");
    assert!(student.password.starts_with("$argon2"));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (server, _db) = test_server().await;
    register_student(&server, "Ada", "ada@example.com", "password1").await;

    let wrong_password = server
        .post("/student/login")
        .form(&[("email", "ada@example.com"), ("password", "password2")])
        .await;
    let unknown_email = server
        .post("/student/login")
        .form(&[("email", "nobody@example.com"), ("password", "password1")])
        .await;

    for res in [&wrong_password, &unknown_email] {
        assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(res.header("location"), "/student/login");
        assert!(res.maybe_cookie(UPSKILL_SESSION).is_none());
    }
}

#[tokio::test]
async fn protected_route_requires_login() {
    let (server, _db) = test_server().await;

    let res = server.get("/student/home").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/student/login");

    register_student(&server, "Ada", "ada@example.com", "password1").await;
    login_student(&server, "ada@example.com", "password1").await;

    let res = server.get("/student/home").await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let (server, _db) = test_server().await;
    register_student(&server, "Ada", "ada@example.com", "password1").await;
    login_student(&server, "ada@example.com", "password1").await;

    let res = server.get("/logout").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/");

    let res = server.get("/student/home").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/student/login");
}

#[tokio::test]
async fn student_session_cannot_reach_admin_pages() {
    let (server, _db) = test_server().await;
    register_student(&server, "Ada", "ada@example.com", "password1").await;
    login_student(&server, "ada@example.com", "password1").await;

    let res = server.get("/admin/add_course").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/admin/login");
}

#[tokio::test]
async fn flash_notice_appears_once_then_clears() {
    let (server, _db) = test_server().await;
    register_student(&server, "Ada", "ada@example.com", "password1").await;

    let body = server.get("/student/login").await.json::<serde_json::Value>();
    assert_eq!(body["notice"], "Registration successful. Please login.");

    let body = server.get("/student/login").await.json::<serde_json::Value>();
    assert_eq!(body["notice"], serde_json::Value::Null);
}
