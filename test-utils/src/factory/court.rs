//! Court factory for creating test court entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courts with customizable fields.
pub struct CourtFactory<'a> {
    db: &'a DatabaseConnection,
    court_number: i32,
    name: String,
    is_active: bool,
    location: Option<String>,
}

impl<'a> CourtFactory<'a> {
    /// Creates a new CourtFactory with default values.
    ///
    /// Defaults:
    /// - court_number: a unique number derived from the shared counter
    /// - name: `"Court {number}"`
    /// - is_active: `true`
    /// - location: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let court_number = (next_id() % 1_000_000) as i32 + 1_000;
        Self {
            db,
            court_number,
            name: format!("Court {}", court_number),
            is_active: true,
            location: None,
        }
    }

    pub fn court_number(mut self, court_number: i32) -> Self {
        self.court_number = court_number;
        self.name = format!("Court {}", court_number);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builds and inserts the court entity into the database.
    pub async fn build(self) -> Result<entity::court::Model, DbErr> {
        entity::court::ActiveModel {
            court_number: ActiveValue::Set(self.court_number),
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
            location: ActiveValue::Set(self.location),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active court with a unique court number.
pub async fn create_court(db: &DatabaseConnection) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db).build().await
}

/// Creates an active court with a specific court number.
pub async fn create_court_with_number(
    db: &DatabaseConnection,
    court_number: i32,
) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db).court_number(court_number).build().await
}
