use serde::{Deserialize, Serialize};

use crate::model::user::UserStatus;

#[derive(Serialize, Deserialize)]
/// Request payload for the user status endpoint.
/// Carries the new review state for the account.
pub struct UpdateStatusRequest {
    pub status: UserStatus,
}
