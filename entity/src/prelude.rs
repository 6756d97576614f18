pub use super::booking::Entity as Booking;
pub use super::court::Entity as Court;
pub use super::user::Entity as User;
