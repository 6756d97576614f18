use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored booking status is not one of the known lifecycle states
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown booking status '{value}' stored for booking {booking_id}")]
    UnknownBookingStatus {
        /// ID of the booking row carrying the bad value
        booking_id: i32,
        /// The status string that failed to parse
        value: String,
    },

    /// Stored user role is neither `user` nor `admin`
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown role '{value}' stored for user {user_id}")]
    UnknownRole {
        /// ID of the user row carrying the bad value
        user_id: i32,
        /// The role string that failed to parse
        value: String,
    },
}
