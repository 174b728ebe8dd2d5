//! Registration and login endpoints

use axum::{extract::State, Form, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginForm, LoginResponse, RegisterResponse, RegisterUser},
};

/// Register a new user or admin
#[utoipa::path(
    post,
    path = "/register/",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 200, description = "User created", body = RegisterResponse),
        (status = 400, description = "Username taken or password policy violated")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(user): Json<RegisterUser>,
) -> AppResult<Json<RegisterResponse>> {
    user.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let is_admin = user.is_admin;
    let created = state.services.users.register(user).await?;

    let message = if is_admin {
        "Admin created successfully"
    } else {
        "User created successfully"
    };

    Ok(Json(RegisterResponse {
        message: message.to_string(),
        data: created,
    }))
}

/// Log in with username and password (form-encoded body)
#[utoipa::path(
    post,
    path = "/login/",
    tag = "auth",
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Json<LoginResponse>> {
    let response = state
        .services
        .users
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(response))
}
