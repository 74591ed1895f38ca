use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};

use upskill_portal_schema::courses;

use crate::helpers::{add_course, login_admin, logout, register_admin, test_server};

#[tokio::test]
async fn register_login_and_add_a_course() {
    let (server, _db) = test_server().await;

    let res = server
        .post("/admin/register")
        .form(&[
            ("company_name", "Acme"),
            ("email", "hr@acme.com"),
            ("password", "hunter22"),
        ])
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/admin/login");

    let body = server.get("/admin/login").await.json::<serde_json::Value>();
    assert_eq!(body["notice"], "Admin registration successful. Please login.");

    let res = server
        .post("/admin/login")
        .form(&[("email", "hr@acme.com"), ("password", "hunter22")])
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/admin/add_course");

    let res = server
        .post("/admin/add_course")
        .form(&[("name", "Intro"), ("duration", "4 weeks")])
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/admin/add_course");

    let body = server
        .get("/admin/add_course")
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["notice"], "Course added successfully.");

    let body = server
        .get("/admin/manage_courses")
        .await
        .json::<serde_json::Value>();
    let listed = body["courses"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Intro");
    assert_eq!(listed[0]["duration"], "4 weeks");
    assert_eq!(listed[0]["company_name"], "Acme");
}

#[tokio::test]
async fn manage_listing_shows_only_own_company() {
    let (server, _db) = test_server().await;

    register_admin(&server, "Acme", "hr@acme.com", "hunter22").await;
    login_admin(&server, "hr@acme.com", "hunter22").await;
    add_course(&server, "Intro", "4 weeks").await;
    logout(&server).await;

    register_admin(&server, "Globex", "hr@globex.com", "hunter23").await;
    login_admin(&server, "hr@globex.com", "hunter23").await;
    add_course(&server, "Advanced", "8 weeks").await;

    let body = server
        .get("/admin/manage_courses")
        .await
        .json::<serde_json::Value>();
    let listed = body["courses"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Advanced");
}

#[tokio::test]
async fn deleting_own_course_refreshes_the_listing() {
    let (server, db) = test_server().await;

    register_admin(&server, "Acme", "hr@acme.com", "hunter22").await;
    login_admin(&server, "hr@acme.com", "hunter22").await;
    add_course(&server, "Intro", "4 weeks").await;

    let body = server
        .get("/admin/manage_courses")
        .await
        .json::<serde_json::Value>();
    let course_id = body["courses"][0]["id"].as_i64().unwrap();

    let res = server
        .post("/admin/manage_courses")
        .form(&[("course_id", course_id.to_string())])
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let body = res.json::<serde_json::Value>();
    assert_eq!(body["notice"], "Course deleted successfully.");
    assert!(body["courses"].as_array().unwrap().is_empty());

    let count = courses::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn cross_tenant_delete_is_a_noop() {
    let (server, db) = test_server().await;

    register_admin(&server, "Acme", "hr@acme.com", "hunter22").await;
    login_admin(&server, "hr@acme.com", "hunter22").await;
    add_course(&server, "Intro", "4 weeks").await;

    let body = server
        .get("/admin/manage_courses")
        .await
        .json::<serde_json::Value>();
    let acme_course_id = body["courses"][0]["id"].as_i64().unwrap();
    logout(&server).await;

    register_admin(&server, "Globex", "hr@globex.com", "hunter23").await;
    login_admin(&server, "hr@globex.com", "hunter23").await;

    let res = server
        .post("/admin/manage_courses")
        .form(&[("course_id", acme_course_id.to_string())])
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);

    // The foreign course survives untouched.
    let count = courses::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 1);
}
