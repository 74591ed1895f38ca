//! sea-orm repository implementations. Entity queries where the shape
//! is simple; hand-written SQL for the join/aggregate reads so the
//! statements stay recognizable next to the schema.

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, Statement, Value,
};

use upskill_portal_schema::{admins, courses, enrollments, students};

use crate::domain::repository::{
    AdminRepository, CourseRepository, EnrollmentRepository, StudentRepository,
};
use crate::domain::types::{
    Admin, Course, EnrollmentRecord, NewEnrollment, StatGroup, StatsFilter, Student,
};
use crate::error::PortalError;

fn student_from_model(model: students::Model) -> Student {
    Student {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password,
    }
}

fn admin_from_model(model: admins::Model) -> Admin {
    Admin {
        id: model.id,
        company_name: model.company_name,
        email: model.email,
        password_hash: model.password,
    }
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        name: model.name,
        duration: model.duration,
        company_name: model.company_name,
    }
}

#[derive(Clone)]
pub struct DbStudentRepository {
    pub db: DatabaseConnection,
}

impl StudentRepository for DbStudentRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, PortalError> {
        let model = students::Entity::find()
            .filter(students::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find student by email")?;
        Ok(model.map(student_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, PortalError> {
        let model = students::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find student by id")?;
        Ok(model.map(student_from_model))
    }

    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), PortalError> {
        let active = students::ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            password: Set(password_hash.to_owned()),
            ..Default::default()
        };
        match active.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(PortalError::StudentEmailTaken),
                _ => Err(anyhow::Error::new(e).context("create student").into()),
            },
        }
    }
}

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, PortalError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find admin by email")?;
        Ok(model.map(admin_from_model))
    }

    async fn create(
        &self,
        company_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), PortalError> {
        let active = admins::ActiveModel {
            company_name: Set(company_name.to_owned()),
            email: Set(email.to_owned()),
            password: Set(password_hash.to_owned()),
            ..Default::default()
        };
        match active.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(PortalError::AdminEmailTaken),
                _ => Err(anyhow::Error::new(e).context("create admin").into()),
            },
        }
    }
}

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn list_all(&self) -> Result<Vec<Course>, PortalError> {
        let models = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .context("list courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn list_by_company(&self, company_name: &str) -> Result<Vec<Course>, PortalError> {
        let models = courses::Entity::find()
            .filter(courses::Column::CompanyName.eq(company_name))
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .context("list company courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, PortalError> {
        let model = courses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find course by id")?;
        Ok(model.map(course_from_model))
    }

    async fn create(
        &self,
        name: &str,
        duration: &str,
        company_name: &str,
    ) -> Result<(), PortalError> {
        let active = courses::ActiveModel {
            name: Set(name.to_owned()),
            duration: Set(duration.to_owned()),
            company_name: Set(company_name.to_owned()),
            ..Default::default()
        };
        active.insert(&self.db).await.context("create course")?;
        Ok(())
    }

    async fn delete_scoped(&self, id: i32, company_name: &str) -> Result<u64, PortalError> {
        let result = courses::Entity::delete_many()
            .filter(courses::Column::Id.eq(id))
            .filter(courses::Column::CompanyName.eq(company_name))
            .exec(&self.db)
            .await
            .context("delete course")?;
        Ok(result.rows_affected)
    }

    async fn distinct_names(&self, company_name: &str) -> Result<Vec<String>, PortalError> {
        let names = courses::Entity::find()
            .select_only()
            .column(courses::Column::Name)
            .distinct()
            .filter(courses::Column::CompanyName.eq(company_name))
            .order_by_asc(courses::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list distinct course names")?;
        Ok(names)
    }
}

#[derive(FromQueryResult)]
struct EnrollmentRecordRow {
    course_name: String,
    duration: String,
    company_name: String,
    student_name: String,
    roll_number: String,
    year: String,
}

#[derive(FromQueryResult)]
struct StatRow {
    course_name: String,
    /// NULL when a LEFT JOIN finds no enrollments for the course.
    year: Option<String>,
    enroll_count: i64,
}

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl EnrollmentRepository for DbEnrollmentRepository {
    async fn create(&self, enrollment: &NewEnrollment) -> Result<(), PortalError> {
        let active = enrollments::ActiveModel {
            student_id: Set(enrollment.student_id),
            course_id: Set(enrollment.course_id),
            name: Set(enrollment.name.clone()),
            roll_number: Set(enrollment.roll_number.clone()),
            year: Set(enrollment.year.clone()),
            ..Default::default()
        };
        active.insert(&self.db).await.context("create enrollment")?;
        Ok(())
    }

    async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<EnrollmentRecord>, PortalError> {
        let sql = "SELECT courses.name AS course_name, courses.duration, \
                   courses.company_name, enrollments.name AS student_name, \
                   enrollments.roll_number, enrollments.year \
                   FROM enrollments \
                   JOIN courses ON enrollments.course_id = courses.id \
                   WHERE enrollments.student_id = ? \
                   ORDER BY enrollments.id";
        let rows = EnrollmentRecordRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [student_id.into()],
        ))
        .all(&self.db)
        .await
        .context("list student enrollments")?;
        Ok(rows
            .into_iter()
            .map(|r| EnrollmentRecord {
                course_name: r.course_name,
                duration: r.duration,
                company_name: r.company_name,
                student_name: r.student_name,
                roll_number: r.roll_number,
                year: r.year,
            })
            .collect())
    }

    async fn stats(
        &self,
        company_name: &str,
        filter: &StatsFilter,
    ) -> Result<Vec<StatGroup>, PortalError> {
        // LEFT JOIN keeps courses with zero enrollments in the result
        // as a single (name, NULL, 0) group.
        let mut sql = String::from(
            "SELECT courses.name AS course_name, enrollments.year AS year, \
             COUNT(enrollments.id) AS enroll_count \
             FROM courses \
             LEFT JOIN enrollments ON courses.id = enrollments.course_id \
             WHERE courses.company_name = ?",
        );
        let mut values: Vec<Value> = vec![company_name.into()];
        if let Some(course) = &filter.course {
            sql.push_str(" AND courses.name = ?");
            values.push(course.as_str().into());
        }
        if let Some(year) = &filter.year {
            sql.push_str(" AND enrollments.year = ?");
            values.push(year.as_str().into());
        }
        sql.push_str(" GROUP BY courses.name, enrollments.year ORDER BY courses.name, enrollments.year");

        let rows = StatRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            values,
        ))
        .all(&self.db)
        .await
        .context("aggregate enrollment stats")?;
        Ok(rows
            .into_iter()
            .map(|r| StatGroup {
                course_name: r.course_name,
                year: r.year,
                enroll_count: r.enroll_count,
            })
            .collect())
    }

    async fn distinct_years(&self, company_name: &str) -> Result<Vec<String>, PortalError> {
        let sql = "SELECT DISTINCT enrollments.year AS year \
                   FROM enrollments \
                   JOIN courses ON enrollments.course_id = courses.id \
                   WHERE courses.company_name = ? \
                   ORDER BY enrollments.year";
        #[derive(FromQueryResult)]
        struct YearRow {
            year: String,
        }
        let rows = YearRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [company_name.into()],
        ))
        .all(&self.db)
        .await
        .context("list distinct enrollment years")?;
        Ok(rows.into_iter().map(|r| r.year).collect())
    }
}
