use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_court_table::Court;

/// Number of courts provisioned on a fresh install.
const SEEDED_COURTS: i32 = 4;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Court::Table)
            .columns([Court::CourtNumber, Court::Name, Court::IsActive]);

        for number in 1..=SEEDED_COURTS {
            insert.values_panic([number.into(), format!("Court {number}").into(), true.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Court::Table)
            .and_where(Expr::col(Court::CourtNumber).lte(SEEDED_COURTS))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
