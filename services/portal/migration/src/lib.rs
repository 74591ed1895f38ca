use sea_orm_migration::prelude::*;

mod m20260801_000001_create_students;
mod m20260801_000002_create_admins;
mod m20260801_000003_create_courses;
mod m20260801_000004_create_enrollments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_students::Migration),
            Box::new(m20260801_000002_create_admins::Migration),
            Box::new(m20260801_000003_create_courses::Migration),
            Box::new(m20260801_000004_create_enrollments::Migration),
        ]
    }
}
