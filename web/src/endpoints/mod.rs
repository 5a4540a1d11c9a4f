/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod experiments;

use crate::error::WebResult;
use axum::extract::State;
use axum::Json;
use labtrack_core::types::*;
use std::sync::Arc;

pub async fn get_health(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<String>>> {
    state.db.ping().await?;

    Ok(Json(BaseResponse {
        error: false,
        message: "ok".to_string(),
    }))
}
