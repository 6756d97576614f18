//! Court domain model.

use crate::model::court::CourtDto;

/// A bookable court identified externally by its court number.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: i32,
    /// Stable, unique number shown to players and used in booking requests.
    pub court_number: i32,
    pub name: String,
    /// Inactive courts are listed but cannot be booked.
    pub is_active: bool,
    pub location: Option<String>,
}

impl Court {
    pub fn from_entity(entity: entity::court::Model) -> Self {
        Self {
            id: entity.id,
            court_number: entity.court_number,
            name: entity.name,
            is_active: entity.is_active,
            location: entity.location,
        }
    }

    pub fn into_dto(self) -> CourtDto {
        CourtDto {
            id: self.id,
            court_number: self.court_number,
            name: self.name,
            is_active: self.is_active,
            location: self.location,
        }
    }
}
