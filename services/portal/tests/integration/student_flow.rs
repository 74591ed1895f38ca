use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};

use upskill_portal_schema::enrollments;

use crate::helpers::{
    add_course, first_course_id, login_admin, login_student, logout, register_admin,
    register_student, test_server,
};

#[tokio::test]
async fn enroll_end_to_end() {
    let (server, _db) = test_server().await;

    register_admin(&server, "Acme", "hr@acme.com", "hunter22").await;
    login_admin(&server, "hr@acme.com", "hunter22").await;
    add_course(&server, "Intro", "4 weeks").await;
    logout(&server).await;

    register_student(&server, "S", "s@example.com", "password1").await;
    login_student(&server, "s@example.com", "password1").await;

    let body = server.get("/student/home").await.json::<serde_json::Value>();
    let listed = body["courses"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Intro");
    let course_id = listed[0]["id"].as_i64().unwrap();

    let body = server
        .get(&format!("/student/enroll/{course_id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["course"]["name"], "Intro");

    let res = server
        .post(&format!("/student/enroll/{course_id}"))
        .form(&[("name", "S"), ("roll_number", "R1"), ("year", "2024")])
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/student/home");

    let body = server.get("/student/home").await.json::<serde_json::Value>();
    assert_eq!(body["notice"], "Enrolled successfully.");

    let body = server
        .get("/student/profile")
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["student"]["name"], "S");
    assert_eq!(body["student"]["email"], "s@example.com");
    let rows = body["enrollments"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["course_name"], "Intro");
    assert_eq!(rows[0]["duration"], "4 weeks");
    assert_eq!(rows[0]["company_name"], "Acme");
    assert_eq!(rows[0]["student_name"], "S");
    assert_eq!(rows[0]["roll_number"], "R1");
    assert_eq!(rows[0]["year"], "2024");
}

#[tokio::test]
async fn repeat_enrollment_shows_two_profile_rows() {
    let (server, db) = test_server().await;

    register_admin(&server, "Acme", "hr@acme.com", "hunter22").await;
    login_admin(&server, "hr@acme.com", "hunter22").await;
    add_course(&server, "Intro", "4 weeks").await;
    logout(&server).await;

    register_student(&server, "S", "s@example.com", "password1").await;
    login_student(&server, "s@example.com", "password1").await;
    let course_id = first_course_id(&server).await;

    for _ in 0..2 {
        server
            .post(&format!("/student/enroll/{course_id}"))
            .form(&[("name", "S"), ("roll_number", "R1"), ("year", "2024")])
            .await;
    }

    let count = enrollments::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 2);

    let body = server
        .get("/student/profile")
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["enrollments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_course_renders_empty_enroll_form() {
    let (server, _db) = test_server().await;

    register_student(&server, "S", "s@example.com", "password1").await;
    login_student(&server, "s@example.com", "password1").await;

    let res = server.get("/student/enroll/999").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let body = res.json::<serde_json::Value>();
    assert_eq!(body["course"], serde_json::Value::Null);
}

#[tokio::test]
async fn home_lists_courses_across_companies() {
    let (server, _db) = test_server().await;

    register_admin(&server, "Acme", "hr@acme.com", "hunter22").await;
    login_admin(&server, "hr@acme.com", "hunter22").await;
    add_course(&server, "Intro", "4 weeks").await;
    logout(&server).await;

    register_admin(&server, "Globex", "hr@globex.com", "hunter23").await;
    login_admin(&server, "hr@globex.com", "hunter23").await;
    add_course(&server, "Advanced", "8 weeks").await;
    logout(&server).await;

    register_student(&server, "S", "s@example.com", "password1").await;
    login_student(&server, "s@example.com", "password1").await;

    let body = server.get("/student/home").await.json::<serde_json::Value>();
    let names: Vec<&str> = body["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Intro", "Advanced"]);
}
