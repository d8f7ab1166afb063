use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::db::{self, AppState};
use crate::error::ApiError;
use crate::models::UserSummary;

// GET /api/users/{email} - Public profile for a registered email
pub async fn get_user(
    State(store): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserSummary>, ApiError> {
    let user = db::get_user(&store, &email)?;

    Ok(Json(user))
}
