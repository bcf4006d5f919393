pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_student_profile_table;
mod m20260810_000003_create_mentor_profile_table;
mod m20260811_000004_create_mentorship_request_table;
mod m20260811_000005_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_student_profile_table::Migration),
            Box::new(m20260810_000003_create_mentor_profile_table::Migration),
            Box::new(m20260811_000004_create_mentorship_request_table::Migration),
            Box::new(m20260811_000005_create_message_table::Migration),
        ]
    }
}
