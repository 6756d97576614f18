//! Court data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing read access and the active toggle for courts.
pub struct CourtRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourtRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all courts in ascending court number order.
    pub async fn find_all(&self) -> Result<Vec<entity::court::Model>, DbErr> {
        entity::prelude::Court::find()
            .order_by_asc(entity::court::Column::CourtNumber)
            .all(self.db)
            .await
    }

    /// Gets active courts in ascending court number order.
    pub async fn find_active(&self) -> Result<Vec<entity::court::Model>, DbErr> {
        entity::prelude::Court::find()
            .filter(entity::court::Column::IsActive.eq(true))
            .order_by_asc(entity::court::Column::CourtNumber)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::court::Model>, DbErr> {
        entity::prelude::Court::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_court_number(
        &self,
        court_number: i32,
    ) -> Result<Option<entity::court::Model>, DbErr> {
        entity::prelude::Court::find()
            .filter(entity::court::Column::CourtNumber.eq(court_number))
            .one(self.db)
            .await
    }

    /// Sets the active flag of a court.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated court
    /// - `Ok(None)` - No court with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<Option<entity::court::Model>, DbErr> {
        let Some(court) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut court: entity::court::ActiveModel = court.into();
        court.is_active = ActiveValue::Set(is_active);

        Ok(Some(court.update(self.db).await?))
    }
}
