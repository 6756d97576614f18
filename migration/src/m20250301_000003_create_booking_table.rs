use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_court_table::Court,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::UserId))
                    .col(string(Booking::StudentId))
                    .col(integer(Booking::CourtId))
                    .col(integer(Booking::CourtNumber))
                    .col(date(Booking::BookingDate))
                    .col(timestamp(Booking::StartTime))
                    .col(timestamp(Booking::EndTime))
                    .col(string(Booking::Status).default("active"))
                    .col(boolean(Booking::NotificationSent).default(false))
                    .col(string_null(Booking::UserEmail))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_court_id")
                            .from(Booking::Table, Booking::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict lookups filter on court, day and status.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_court_date_status")
                    .table(Booking::Table)
                    .col(Booking::CourtNumber)
                    .col(Booking::BookingDate)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_student_id")
                    .table(Booking::Table)
                    .col(Booking::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_notification_sent_start_time")
                    .table(Booking::Table)
                    .col(Booking::NotificationSent)
                    .col(Booking::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    StudentId,
    CourtId,
    CourtNumber,
    BookingDate,
    StartTime,
    EndTime,
    Status,
    NotificationSent,
    UserEmail,
    CreatedAt,
    UpdatedAt,
}
