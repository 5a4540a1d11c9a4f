/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::State;
use axum::Json;
use labtrack_core::types::*;
use labtrack_core::users;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub username: String,
    pub password: String,
}

/// Verifies credentials. Session issuance is the embedder's concern.
pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if body.username.is_empty() || body.password.is_empty() {
        return Err(WebError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    if !users::authenticate(&state.db, &body.username, &body.password).await? {
        return Err(WebError::invalid_credentials());
    }

    Ok(Json(BaseResponse {
        error: false,
        message: "Login successful".to_string(),
    }))
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeUserRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if body.username.trim().is_empty() {
        return Err(WebError::BadRequest("Username is required".to_string()));
    }

    if body.password.is_empty() {
        return Err(WebError::BadRequest("Password is required".to_string()));
    }

    let user = users::create_user(&state.db, body.username.trim(), &body.password).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: user.id.to_string(),
    }))
}
