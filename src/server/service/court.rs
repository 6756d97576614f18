//! Court directory reads and the admin active toggle.

use sea_orm::DatabaseConnection;

use crate::server::{data::court::CourtRepository, error::AppError, model::court::Court};

pub struct CourtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courts, active or not, ascending by court number.
    pub async fn list(&self) -> Result<Vec<Court>, AppError> {
        let courts = CourtRepository::new(self.db).find_all().await?;
        Ok(courts.into_iter().map(Court::from_entity).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Court, AppError> {
        CourtRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Court::from_entity)
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))
    }

    /// Sets whether a court can be booked. Existing bookings are left untouched.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Court, AppError> {
        let court = CourtRepository::new(self.db)
            .update_status(id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        tracing::info!(
            "Court {} marked {}",
            court.court_number,
            if is_active { "active" } else { "inactive" }
        );

        Ok(Court::from_entity(court))
    }
}
