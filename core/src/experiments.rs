/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use entity::experiment::{ExperimentStatus, ModelType};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};

use super::input::CleanExperiment;
use super::types::*;

/// Optional equality filters for listing. Omitted filters are simply not
/// applied; they never mean "match false/empty".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExperimentFilters {
    pub status: Option<ExperimentStatus>,
    pub model_type: Option<ModelType>,
    pub is_public: Option<bool>,
}

/// Pagination envelope returned by [`list_experiments`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExperimentPage {
    pub items: Vec<MExperiment>,
    pub total_count: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Persists a new experiment from validated fields and returns its id.
/// Both timestamps are set to the current time.
pub async fn create_experiment(
    db: &DatabaseConnection,
    data: &CleanExperiment,
) -> Result<i32, DbErr> {
    let now = Utc::now().naive_utc();

    let experiment = AExperiment {
        id: NotSet,
        title: Set(data.title.clone()),
        description: Set(data.description.clone()),
        model_type: Set(data.model_type.clone()),
        status: Set(data.status.clone()),
        accuracy: Set(data.accuracy),
        is_public: Set(data.is_public),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let experiment = experiment.insert(db).await?;
    Ok(experiment.id)
}

pub async fn get_experiment(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<MExperiment>, DbErr> {
    EExperiment::find_by_id(id).one(db).await
}

/// Overwrites every field of an existing experiment and advances
/// `updated_at`. Returns `false` without error when the id is unknown.
/// Concurrent writers are last-writer-wins; there is no version check.
pub async fn update_experiment(
    db: &DatabaseConnection,
    id: i32,
    data: &CleanExperiment,
) -> Result<bool, DbErr> {
    let existing = match EExperiment::find_by_id(id).one(db).await? {
        Some(e) => e,
        None => return Ok(false),
    };

    let mut experiment: AExperiment = existing.into();
    experiment.title = Set(data.title.clone());
    experiment.description = Set(data.description.clone());
    experiment.model_type = Set(data.model_type.clone());
    experiment.status = Set(data.status.clone());
    experiment.accuracy = Set(data.accuracy);
    experiment.is_public = Set(data.is_public);
    experiment.updated_at = Set(Utc::now().naive_utc());

    experiment.update(db).await?;
    Ok(true)
}

pub async fn delete_experiment(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = EExperiment::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Paginated listing with optional equality filters and a substring search
/// over title and description. `total_count` and `total_pages` describe the
/// filtered set independent of the requested page; `page` and `per_page`
/// are clamped to at least 1, so a page past the end yields an empty item
/// list with correct metadata.
pub async fn list_experiments(
    db: &DatabaseConnection,
    page: i64,
    per_page: i64,
    filters: &ExperimentFilters,
    search: Option<&str>,
) -> Result<ExperimentPage, DbErr> {
    let page = page.max(1) as u64;
    let per_page = per_page.max(1) as u64;

    let mut condition = Condition::all();

    if let Some(status) = filters.status.clone() {
        condition = condition.add(CExperiment::Status.eq(status));
    }

    if let Some(model_type) = filters.model_type.clone() {
        condition = condition.add(CExperiment::ModelType.eq(model_type));
    }

    if let Some(is_public) = filters.is_public {
        condition = condition.add(CExperiment::IsPublic.eq(is_public));
    }

    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(CExperiment::Title.contains(term))
                .add(CExperiment::Description.contains(term)),
        );
    }

    // Newest first; id breaks created_at ties so the order stays stable.
    let paginator = EExperiment::find()
        .filter(condition)
        .order_by_desc(CExperiment::CreatedAt)
        .order_by_desc(CExperiment::Id)
        .paginate(db, per_page);

    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;

    let items = paginator.fetch_page(page - 1).await?;

    Ok(ExperimentPage {
        items,
        total_count: number_of_items,
        page,
        per_page,
        total_pages: number_of_pages,
    })
}
