/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Path, Query, State};
use axum::Json;
use labtrack_core::experiments::{self, ExperimentFilters, ExperimentPage};
use labtrack_core::input::{validate_experiment, RawExperiment};
use labtrack_core::types::*;
use entity::experiment::{ExperimentStatus, ModelType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{WebError, WebResult};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub model_type: Option<String>,
    pub is_public: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OptionsResponse {
    pub model_types: Vec<ModelType>,
    pub statuses: Vec<ExperimentStatus>,
}

/// Maps raw query parameters onto typed filters. Unknown status or model
/// type values are rejected instead of silently matching nothing;
/// `is_public` keeps the "1"/"0" convention of the original dashboard and
/// ignores anything else.
pub fn parse_filters(query: &ListQuery) -> Result<ExperimentFilters, WebError> {
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(
            ExperimentStatus::from_str(s).map_err(|_| WebError::invalid_filter("status", s))?,
        ),
        None => None,
    };

    let model_type = match query.model_type.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => {
            Some(ModelType::from_str(s).map_err(|_| WebError::invalid_filter("model_type", s))?)
        }
        None => None,
    };

    let is_public = match query.is_public.as_deref() {
        Some("1") | Some("true") => Some(true),
        Some("0") | Some("false") => Some(false),
        _ => None,
    };

    Ok(ExperimentFilters {
        status,
        model_type,
        is_public,
    })
}

pub async fn get_experiments(
    state: State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> WebResult<Json<BaseResponse<ExperimentPage>>> {
    let filters = parse_filters(&query)?;
    let page = query.page.unwrap_or(1);
    let per_page = query
        .per_page
        .unwrap_or(state.cli.default_per_page as i64);

    let result = experiments::list_experiments(
        &state.db,
        page,
        per_page,
        &filters,
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(BaseResponse {
        error: false,
        message: result,
    }))
}

pub async fn get_experiment(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
) -> WebResult<Json<BaseResponse<MExperiment>>> {
    let experiment = experiments::get_experiment(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Experiment"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: experiment,
    }))
}

pub async fn post_experiment(
    state: State<Arc<ServerState>>,
    Json(body): Json<RawExperiment>,
) -> WebResult<Json<BaseResponse<MExperiment>>> {
    let validation = validate_experiment(&body);
    let data = match validation.data {
        Some(d) => d,
        None => return Err(WebError::Validation(validation.errors)),
    };

    let id = experiments::create_experiment(&state.db, &data).await?;
    let experiment = experiments::get_experiment(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Experiment"))?;

    tracing::info!("Created experiment {} ({})", id, experiment.title);

    Ok(Json(BaseResponse {
        error: false,
        message: experiment,
    }))
}

pub async fn put_experiment(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
    Json(body): Json<RawExperiment>,
) -> WebResult<Json<BaseResponse<MExperiment>>> {
    let validation = validate_experiment(&body);
    let data = match validation.data {
        Some(d) => d,
        None => return Err(WebError::Validation(validation.errors)),
    };

    if !experiments::update_experiment(&state.db, id, &data).await? {
        return Err(WebError::not_found("Experiment"));
    }

    let experiment = experiments::get_experiment(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Experiment"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: experiment,
    }))
}

pub async fn delete_experiment(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
) -> WebResult<Json<BaseResponse<String>>> {
    let experiment = experiments::get_experiment(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Experiment"))?;

    if !experiments::delete_experiment(&state.db, id).await? {
        return Err(WebError::not_found("Experiment"));
    }

    Ok(Json(BaseResponse {
        error: false,
        message: format!("Experiment \"{}\" deleted successfully", experiment.title),
    }))
}

/// The fixed enumerations, for rendering form choices.
pub async fn get_options() -> Json<BaseResponse<OptionsResponse>> {
    Json(BaseResponse {
        error: false,
        message: OptionsResponse {
            model_types: ModelType::variants(),
            statuses: ExperimentStatus::variants(),
        },
    })
}
