use crate::domain::repository::{CourseRepository, EnrollmentRepository};
use crate::domain::types::StatsFilter;
use crate::error::PortalError;

pub struct CourseStatsUseCase<C: CourseRepository, E: EnrollmentRepository> {
    pub courses: C,
    pub enrollments: E,
}

/// Chart-shaped output: `labels[i]` and `counts[i]` describe one
/// (course, year) group. The dropdown lists are unfiltered so the form
/// always offers every choice.
pub struct CourseStatsOutput {
    pub labels: Vec<String>,
    pub counts: Vec<i64>,
    pub all_courses: Vec<String>,
    pub all_years: Vec<String>,
}

impl<C: CourseRepository, E: EnrollmentRepository> CourseStatsUseCase<C, E> {
    pub async fn execute(
        &self,
        company_name: &str,
        filter: &StatsFilter,
    ) -> Result<CourseStatsOutput, PortalError> {
        let filter = filter.clone().normalized();
        let groups = self.enrollments.stats(company_name, &filter).await?;
        let all_courses = self.courses.distinct_names(company_name).await?;
        let all_years = self.enrollments.distinct_years(company_name).await?;

        let (labels, counts) = groups
            .into_iter()
            .map(|g| (g.label(), g.enroll_count))
            .unzip();

        Ok(CourseStatsOutput {
            labels,
            counts,
            all_courses,
            all_years,
        })
    }
}
