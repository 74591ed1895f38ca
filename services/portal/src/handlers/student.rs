use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use upskill_session::cookie::{set_flash_cookie, set_session_cookie, take_flash};

use crate::error::PortalError;
use crate::guard::require_student;
use crate::handlers::CourseView;
use crate::state::AppState;
use crate::usecase::course::{GetCourseUseCase, ListCoursesUseCase};
use crate::usecase::enroll::{EnrollInput, EnrollUseCase};
use crate::usecase::login::StudentLoginUseCase;
use crate::usecase::profile::StudentProfileUseCase;
use crate::usecase::register::RegisterStudentUseCase;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct EnrollForm {
    pub name: String,
    pub roll_number: String,
    pub year: String,
}

/// `GET /student/register`
pub async fn register_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = take_flash(jar);
    (
        jar,
        Json(json!({
            "view": "student_register",
            "notice": notice,
        })),
    )
}

/// `POST /student/register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, PortalError> {
    let usecase = RegisterStudentUseCase {
        repo: state.student_repo(),
    };
    usecase
        .execute(&form.name, &form.email, &form.password)
        .await?;

    let jar = set_flash_cookie(CookieJar::new(), "Registration successful. Please login.");
    Ok((jar, Redirect::to("/student/login")))
}

/// `GET /student/login`
pub async fn login_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = take_flash(jar);
    (
        jar,
        Json(json!({
            "view": "student_login",
            "notice": notice,
        })),
    )
}

/// `POST /student/login`
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, PortalError> {
    let usecase = StudentLoginUseCase {
        repo: state.student_repo(),
        session_secret: state.session_secret.clone(),
    };
    let token = usecase.execute(&form.email, &form.password).await?;

    Ok((set_session_cookie(jar, token), Redirect::to("/student/home")))
}

/// `GET /student/home` — the full course catalog, across companies.
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortalError> {
    require_student(&jar, &state.session_secret)?;

    let usecase = ListCoursesUseCase {
        repo: state.course_repo(),
    };
    let courses: Vec<CourseView> = usecase
        .execute()
        .await?
        .into_iter()
        .map(CourseView::from)
        .collect();

    let (jar, notice) = take_flash(jar);
    Ok((
        jar,
        Json(json!({
            "view": "student_home",
            "notice": notice,
            "courses": courses,
        })),
    ))
}

/// `GET /student/enroll/{course_id}` — the enrollment form. An unknown
/// id renders the empty state, it does not error.
pub async fn enroll_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, PortalError> {
    require_student(&jar, &state.session_secret)?;

    let usecase = GetCourseUseCase {
        repo: state.course_repo(),
    };
    let course = usecase.execute(course_id).await?.map(CourseView::from);

    let (jar, notice) = take_flash(jar);
    Ok((
        jar,
        Json(json!({
            "view": "student_enroll",
            "notice": notice,
            "course": course,
        })),
    ))
}

/// `POST /student/enroll/{course_id}`
pub async fn enroll(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(course_id): Path<i32>,
    Form(form): Form<EnrollForm>,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_student(&jar, &state.session_secret)?;

    let usecase = EnrollUseCase {
        repo: state.enrollment_repo(),
    };
    usecase
        .execute(
            session.student_id,
            EnrollInput {
                course_id,
                name: form.name,
                roll_number: form.roll_number,
                year: form.year,
            },
        )
        .await?;

    let jar = set_flash_cookie(CookieJar::new(), "Enrolled successfully.");
    Ok((jar, Redirect::to("/student/home")))
}

/// `GET /student/profile` — the student's account plus every
/// enrollment, repeats included.
pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortalError> {
    let session = require_student(&jar, &state.session_secret)?;

    let usecase = StudentProfileUseCase {
        students: state.student_repo(),
        enrollments: state.enrollment_repo(),
    };
    let output = usecase.execute(session.student_id).await?;

    let enrollments: Vec<serde_json::Value> = output
        .enrollments
        .into_iter()
        .map(|record| {
            json!({
                "course_name": record.course_name,
                "duration": record.duration,
                "company_name": record.company_name,
                "student_name": record.student_name,
                "roll_number": record.roll_number,
                "year": record.year,
            })
        })
        .collect();

    let (jar, notice) = take_flash(jar);
    Ok((
        jar,
        Json(json!({
            "view": "student_profile",
            "notice": notice,
            "student": {
                "name": output.student.name,
                "email": output.student.email,
            },
            "enrollments": enrollments,
        })),
    ))
}
