use axum::{extract::State, response::Json};

use crate::db::{self, AppState};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

// POST /api/login - Check email and password
pub async fn login(
    State(store): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = db::login(&store, &body.email, &body.password).inspect_err(|_| {
        tracing::warn!("Rejected login for {}", body.email);
    })?;

    tracing::info!("User {} logged in", user.email);

    Ok(Json(LoginResponse {
        message: "Login bem-sucedido!".to_string(),
        user,
    }))
}

// POST /api/register - Create a new credential record
pub async fn register(
    State(store): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::register(&store, &body.email, &body.password, &body.name).inspect_err(|_| {
        tracing::warn!("Email {} is already registered", body.email);
    })?;

    tracing::info!("Registered user {}", body.email);

    Ok(Json(MessageResponse {
        message: "Cadastro realizado com sucesso!".to_string(),
    }))
}
