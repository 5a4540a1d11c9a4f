/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

/// Architecture family of the tracked model. Stored as its display string
/// so the database rows stay readable.
#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ModelType {
    #[sea_orm(string_value = "CNN")]
    #[serde(rename = "CNN")]
    Cnn,
    #[sea_orm(string_value = "RNN")]
    #[serde(rename = "RNN")]
    Rnn,
    #[sea_orm(string_value = "Transformer")]
    Transformer,
    #[sea_orm(string_value = "LSTM")]
    #[serde(rename = "LSTM")]
    Lstm,
    #[sea_orm(string_value = "BERT")]
    #[serde(rename = "BERT")]
    Bert,
    #[sea_orm(string_value = "Custom")]
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ExperimentStatus {
    #[sea_orm(string_value = "Planning")]
    Planning,
    #[sea_orm(string_value = "Running")]
    Running,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

impl ModelType {
    /// All valid model types, in declaration order, for rendering choices.
    pub fn variants() -> Vec<ModelType> {
        ModelType::iter().collect()
    }
}

impl ExperimentStatus {
    pub fn variants() -> Vec<ExperimentStatus> {
        ExperimentStatus::iter().collect()
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ModelType::Cnn => "CNN",
            ModelType::Rnn => "RNN",
            ModelType::Transformer => "Transformer",
            ModelType::Lstm => "LSTM",
            ModelType::Bert => "BERT",
            ModelType::Custom => "Custom",
        })
    }
}

impl std::str::FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CNN" => Ok(ModelType::Cnn),
            "RNN" => Ok(ModelType::Rnn),
            "Transformer" => Ok(ModelType::Transformer),
            "LSTM" => Ok(ModelType::Lstm),
            "BERT" => Ok(ModelType::Bert),
            "Custom" => Ok(ModelType::Custom),
            _ => Err(format!("Unknown model type: {}", s)),
        }
    }
}

impl std::fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ExperimentStatus::Planning => "Planning",
            ExperimentStatus::Running => "Running",
            ExperimentStatus::Completed => "Completed",
            ExperimentStatus::Failed => "Failed",
        })
    }
}

impl std::str::FromStr for ExperimentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(ExperimentStatus::Planning),
            "Running" => Ok(ExperimentStatus::Running),
            "Completed" => Ok(ExperimentStatus::Completed),
            "Failed" => Ok(ExperimentStatus::Failed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "experiments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub model_type: ModelType,
    pub status: ExperimentStatus,
    pub accuracy: Option<f64>,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
