//! Update user active flag activity

use tracing::{info, warn};

use crate::common::{ReviewError, UserId};
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

/// Activate or deactivate a user.
///
/// Existing review assignments are left untouched; the flag only affects
/// future candidate selection.
pub async fn set_user_active(
    user_id: &UserId,
    is_active: bool,
    deps: &ServerDeps,
) -> Result<User, ReviewError> {
    info!(user_id = %user_id, is_active, "Updating user active flag");

    match User::set_active(user_id, is_active, &deps.db_pool).await? {
        Some(user) => Ok(user),
        None => {
            warn!(user_id = %user_id, "User not found");
            Err(ReviewError::not_found("user", user_id.as_str()))
        }
    }
}
