//! Plain domain records, independent of the store entities and the
//! HTTP view models.

/// Minimum accepted student password length, counted in characters.
/// The admin registration flow imposes no length rule.
pub const MIN_STUDENT_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Kept out of every view model and log line.
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: i32,
    pub company_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub duration: String,
    pub company_name: String,
}

/// Enrollment to insert. `student_id` always comes from the session,
/// never from the form.
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub name: String,
    pub roll_number: String,
    pub year: String,
}

/// One row of the profile view: an enrollment joined to its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    pub course_name: String,
    pub duration: String,
    pub company_name: String,
    /// Self-reported at enrollment time; may differ from the students row.
    pub student_name: String,
    pub roll_number: String,
    pub year: String,
}

/// Optional statistics filters. `None` means "no filter"; blank form
/// submissions normalize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsFilter {
    pub course: Option<String>,
    pub year: Option<String>,
}

impl StatsFilter {
    pub fn normalized(self) -> Self {
        Self {
            course: self.course.filter(|s| !s.is_empty()),
            year: self.year.filter(|s| !s.is_empty()),
        }
    }
}

/// One statistics group: enrollment count per (course name, year).
/// `year` is absent for a course with no enrollments at all — the left
/// join preserves the course as a single group with count 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatGroup {
    pub course_name: String,
    pub year: Option<String>,
    pub enroll_count: i64,
}

impl StatGroup {
    /// Chart label, `"<course> (<year>)"`. An absent year renders as an
    /// empty token rather than a placeholder word.
    pub fn label(&self) -> String {
        format!("{} ({})", self.course_name, self.year.as_deref().unwrap_or(""))
    }
}

/// Authorized student context produced by the session guard.
#[derive(Debug, Clone, Copy)]
pub struct StudentSession {
    pub student_id: i32,
}

/// Authorized admin context. `company_name` was captured from the
/// admins row at login and scopes every admin query.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: i32,
    pub company_name: String,
}
