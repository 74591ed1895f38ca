mod helpers;

mod admin_flow;
mod auth;
mod student_flow;
