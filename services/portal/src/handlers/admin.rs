use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use upskill_session::cookie::{set_flash_cookie, set_session_cookie, take_flash};

use crate::domain::types::StatsFilter;
use crate::error::PortalError;
use crate::guard::require_admin;
use crate::handlers::CourseView;
use crate::state::AppState;
use crate::usecase::course::{
    CreateCourseUseCase, DeleteCourseUseCase, ListCompanyCoursesUseCase,
};
use crate::usecase::login::AdminLoginUseCase;
use crate::usecase::register::RegisterAdminUseCase;
use crate::usecase::stats::CourseStatsUseCase;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub company_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddCourseForm {
    pub name: String,
    pub duration: String,
}

#[derive(Debug, Deserialize)]
pub struct StatsForm {
    pub course: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ManageForm {
    pub course_id: Option<i32>,
}

/// `GET /admin/register`
pub async fn register_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = take_flash(jar);
    (
        jar,
        Json(json!({
            "view": "admin_register",
            "notice": notice,
        })),
    )
}

/// `POST /admin/register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, PortalError> {
    let usecase = RegisterAdminUseCase {
        repo: state.admin_repo(),
    };
    usecase
        .execute(&form.company_name, &form.email, &form.password)
        .await?;

    let jar = set_flash_cookie(
        CookieJar::new(),
        "Admin registration successful. Please login.",
    );
    Ok((jar, Redirect::to("/admin/login")))
}

/// `GET /admin/login`
pub async fn login_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = take_flash(jar);
    (
        jar,
        Json(json!({
            "view": "admin_login",
            "notice": notice,
        })),
    )
}

/// `POST /admin/login`
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, PortalError> {
    let usecase = AdminLoginUseCase {
        repo: state.admin_repo(),
        session_secret: state.session_secret.clone(),
    };
    let token = usecase.execute(&form.email, &form.password).await?;

    Ok((
        set_session_cookie(jar, token),
        Redirect::to("/admin/add_course"),
    ))
}

/// `GET /admin/add_course`
pub async fn add_course_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortalError> {
    require_admin(&jar, &state.session_secret)?;

    let (jar, notice) = take_flash(jar);
    Ok((
        jar,
        Json(json!({
            "view": "admin_add_course",
            "notice": notice,
        })),
    ))
}

/// `POST /admin/add_course` — the owning company is taken from the
/// session, never from the form.
pub async fn add_course(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddCourseForm>,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_admin(&jar, &state.session_secret)?;

    let usecase = CreateCourseUseCase {
        repo: state.course_repo(),
    };
    usecase
        .execute(&form.name, &form.duration, &session.company_name)
        .await?;

    let jar = set_flash_cookie(CookieJar::new(), "Course added successfully.");
    Ok((jar, Redirect::to("/admin/add_course")))
}

async fn render_stats(
    state: &AppState,
    jar: CookieJar,
    company_name: &str,
    filter: StatsFilter,
) -> Result<(CookieJar, Json<serde_json::Value>), PortalError> {
    let usecase = CourseStatsUseCase {
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    };
    let output = usecase.execute(company_name, &filter).await?;
    let filter = filter.normalized();

    let (jar, notice) = take_flash(jar);
    Ok((
        jar,
        Json(json!({
            "view": "admin_course_stats",
            "notice": notice,
            "labels": output.labels,
            "counts": output.counts,
            "courses": output.all_courses,
            "years": output.all_years,
            "selected_course": filter.course,
            "selected_year": filter.year,
        })),
    ))
}

/// `GET /admin/course_stats` — unfiltered counts for the whole company.
pub async fn course_stats(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_admin(&jar, &state.session_secret)?;
    render_stats(&state, jar, &session.company_name, StatsFilter::default()).await
}

/// `POST /admin/course_stats` — re-renders with the submitted filters;
/// no redirect, the form round-trips in place.
pub async fn course_stats_filtered(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<StatsForm>,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_admin(&jar, &state.session_secret)?;
    let filter = StatsFilter {
        course: form.course,
        year: form.year,
    };
    render_stats(&state, jar, &session.company_name, filter).await
}

async fn render_manage(
    state: &AppState,
    jar: CookieJar,
    company_name: &str,
    notice: Option<String>,
) -> Result<(CookieJar, Json<serde_json::Value>), PortalError> {
    let usecase = ListCompanyCoursesUseCase {
        repo: state.course_repo(),
    };
    let courses: Vec<CourseView> = usecase
        .execute(company_name)
        .await?
        .into_iter()
        .map(CourseView::from)
        .collect();

    Ok((
        jar,
        Json(json!({
            "view": "admin_manage_courses",
            "notice": notice,
            "courses": courses,
        })),
    ))
}

/// `GET /admin/manage_courses` — the company's own courses only.
pub async fn manage_courses(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_admin(&jar, &state.session_secret)?;
    let (jar, notice) = take_flash(jar);
    render_manage(&state, jar, &session.company_name, notice).await
}

/// `POST /admin/manage_courses` — deletes the selected course (scoped
/// to the session's company) and re-renders the refreshed list with a
/// deletion notice; no redirect.
pub async fn manage_courses_delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ManageForm>,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_admin(&jar, &state.session_secret)?;

    if let Some(course_id) = form.course_id {
        let usecase = DeleteCourseUseCase {
            repo: state.course_repo(),
        };
        usecase.execute(course_id, &session.company_name).await?;
    }

    let (jar, _stale) = take_flash(jar);
    render_manage(
        &state,
        jar,
        &session.company_name,
        Some("Course deleted successfully.".to_owned()),
    )
    .await
}
