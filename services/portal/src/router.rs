use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use upskill_core::health::{healthz, readyz};
use upskill_core::middleware::request_id_layer;

use crate::handlers::{admin, session, student};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/", get(session::landing))
        .route("/logout", get(session::logout))
        .route(
            "/student/register",
            get(student::register_form).post(student::register),
        )
        .route(
            "/student/login",
            get(student::login_form).post(student::login),
        )
        .route("/student/home", get(student::home))
        .route(
            "/student/enroll/{course_id}",
            get(student::enroll_form).post(student::enroll),
        )
        .route("/student/profile", get(student::profile))
        .route(
            "/admin/register",
            get(admin::register_form).post(admin::register),
        )
        .route("/admin/login", get(admin::login_form).post(admin::login))
        .route(
            "/admin/add_course",
            get(admin::add_course_form).post(admin::add_course),
        )
        .route(
            "/admin/course_stats",
            get(admin::course_stats).post(admin::course_stats_filtered),
        )
        .route(
            "/admin/manage_courses",
            get(admin::manage_courses).post(admin::manage_courses_delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
