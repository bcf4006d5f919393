use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(MentorProfile::Id))
                    .col(integer_uniq(MentorProfile::UserId))
                    .col(string(MentorProfile::Name))
                    .col(text(MentorProfile::Bio))
                    .col(integer(MentorProfile::ExperienceYears))
                    .col(json(MentorProfile::ExpertiseTags))
                    .col(
                        timestamp(MentorProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MentorProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_profile_user_id")
                            .from(MentorProfile::Table, MentorProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentorProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MentorProfile {
    Table,
    Id,
    UserId,
    Name,
    Bio,
    ExperienceYears,
    ExpertiseTags,
    CreatedAt,
    UpdatedAt,
}
