/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::str::FromStr;

use entity::experiment::{ExperimentStatus, ModelType};
use serde::{Deserialize, Serialize};

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Experiment fields exactly as submitted by the caller, before any
/// validation. Everything is an optional string; missing and empty are
/// handled the same way a blank form field would be.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawExperiment {
    pub title: Option<String>,
    pub description: Option<String>,
    pub model_type: Option<String>,
    pub status: Option<String>,
    pub accuracy: Option<String>,
    pub is_public: Option<String>,
}

/// Validated experiment fields, safe to hand to the repository.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CleanExperiment {
    pub title: String,
    pub description: String,
    pub model_type: ModelType,
    pub status: ExperimentStatus,
    pub accuracy: Option<f64>,
    pub is_public: bool,
}

/// Outcome of validating a [`RawExperiment`]. `data` is `Some` exactly
/// when `errors` is empty.
#[derive(Debug)]
pub struct Validated {
    pub data: Option<CleanExperiment>,
    pub errors: Vec<String>,
}

/// Loose boolean coercion for checkbox-style fields: absent, empty and
/// false-like tokens are false, anything else is true.
pub fn parse_bool_flag(s: Option<&str>) -> bool {
    match s.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(
            v.to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
    }
}

/// Validates user-submitted experiment fields against the fixed schema.
/// Collects every applicable error instead of failing fast so the caller
/// can surface the complete list at once. Never panics on malformed input.
pub fn validate_experiment(raw: &RawExperiment) -> Validated {
    let mut errors = Vec::new();

    let title = raw.title.as_deref().unwrap_or_default().trim().to_string();
    if title.is_empty() {
        errors.push("Title is required".to_string());
    }

    let description = raw
        .description
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();
    if description.is_empty() {
        errors.push("Description is required".to_string());
    }

    let model_type = match raw.model_type.as_deref() {
        None | Some("") => {
            errors.push("Model type is required".to_string());
            None
        }
        Some(s) => match ModelType::from_str(s) {
            Ok(m) => Some(m),
            Err(_) => {
                errors.push("Invalid model type".to_string());
                None
            }
        },
    };

    let status = match raw.status.as_deref() {
        None | Some("") => {
            errors.push("Status is required".to_string());
            None
        }
        Some(s) => match ExperimentStatus::from_str(s) {
            Ok(s) => Some(s),
            Err(_) => {
                errors.push("Invalid status".to_string());
                None
            }
        },
    };

    // Blank accuracy counts as absent; the parse and range errors are
    // mutually exclusive for a single call.
    let accuracy = match raw.accuracy.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => match s.parse::<f64>() {
            Ok(a) if ACCURACY_RANGE.contains(&a) => Some(a),
            Ok(_) => {
                errors.push("Accuracy must be between 0 and 100".to_string());
                None
            }
            Err(_) => {
                errors.push("Accuracy must be a valid number".to_string());
                None
            }
        },
    };

    let is_public = parse_bool_flag(raw.is_public.as_deref());

    let data = match (model_type, status) {
        (Some(model_type), Some(status)) if errors.is_empty() => Some(CleanExperiment {
            title,
            description,
            model_type,
            status,
            accuracy,
            is_public,
        }),
        _ => None,
    };

    Validated { data, errors }
}
