//! Request authentication guard.
//!
//! Resolves the session's user into a typed [`Caller`] and checks the permissions a
//! handler requires. Handlers pass the returned caller into services explicitly.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Caller, User},
    service::user::UserService,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every listed permission.
    ///
    /// An empty permission list only requires a valid login.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Authenticated caller holding all permissions
    /// - `Err(AuthErr(UserNotInSession))` - No user in the session
    /// - `Err(AuthErr(UserNotInDatabase))` - Session refers to a deleted user
    /// - `Err(AuthErr(AccessDenied))` - A required permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Caller, AppError> {
        Ok(self.require_user(permissions).await?.caller())
    }

    /// Same as [`require`](Self::require) but returns the full user record.
    pub async fn require_user(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserService::new(self.db).get_user(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.caller().is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
