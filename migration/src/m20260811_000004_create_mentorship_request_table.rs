use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create table
        manager
            .create_table(
                Table::create()
                    .table(MentorshipRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MentorshipRequest::Id))
                    .col(integer(MentorshipRequest::StudentId))
                    .col(integer(MentorshipRequest::MentorId))
                    .col(string_len(MentorshipRequest::Status, 16))
                    .col(text(MentorshipRequest::Message))
                    .col(text(MentorshipRequest::RejectionReason))
                    .col(
                        timestamp(MentorshipRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MentorshipRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentorship_request_student_id")
                            .from(MentorshipRequest::Table, MentorshipRequest::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentorship_request_mentor_id")
                            .from(MentorshipRequest::Table, MentorshipRequest::MentorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for mentor inbox lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_request_mentor_id")
                    .table(MentorshipRequest::Table)
                    .col(MentorshipRequest::MentorId)
                    .to_owned(),
            )
            .await?;

        // Create index for pair lookups on the messaging authorization path
        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_request_pair")
                    .table(MentorshipRequest::Table)
                    .col(MentorshipRequest::StudentId)
                    .col(MentorshipRequest::MentorId)
                    .to_owned(),
            )
            .await?;

        // Partial unique index: at most one pending/accepted request per
        // student, across all mentors. sea-query's index builder has no
        // partial index support, so this goes through raw SQL. Declined
        // requests stay out of the index, permitting re-requests.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_mentorship_request_one_active_per_student \
                 ON mentorship_request (student_id) \
                 WHERE status IN ('pending', 'accepted')",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes first
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX idx_mentorship_request_one_active_per_student")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_mentorship_request_pair")
                    .table(MentorshipRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_mentorship_request_mentor_id")
                    .table(MentorshipRequest::Table)
                    .to_owned(),
            )
            .await?;

        // Drop table
        manager
            .drop_table(Table::drop().table(MentorshipRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MentorshipRequest {
    Table,
    Id,
    StudentId,
    MentorId,
    Status,
    Message,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
