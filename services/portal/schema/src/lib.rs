//! sea-orm entities for the portal store: students, admins, courses,
//! and enrollments. `courses.company_name` is deliberately a string
//! copy of the owning admin's company, not a relation — tenant scoping
//! is string equality throughout.

pub mod admins;
pub mod courses;
pub mod enrollments;
pub mod students;
