/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use std::fmt;

use super::types::*;

#[derive(Debug)]
pub enum CredentialError {
    DuplicateUsername,
    Database(DbErr),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::DuplicateUsername => write!(f, "Username already exists"),
            CredentialError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for CredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredentialError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for CredentialError {
    fn from(err: DbErr) -> Self {
        CredentialError::Database(err)
    }
}

/// Stores a new user with an argon2 hash of the password. The plaintext
/// never touches the database.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<MUser, CredentialError> {
    let existing = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(db)
        .await?;

    if existing.is_some() {
        return Err(CredentialError::DuplicateUsername);
    }

    let user = AUser {
        id: NotSet,
        username: Set(username.to_string()),
        password_hash: Set(generate_hash(password)),
        created_at: Set(Utc::now().naive_utc()),
    };

    Ok(user.insert(db).await?)
}

/// Verifies a username/password pair. Absent users and mismatched
/// passwords both come back as plain `false`.
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<bool, CredentialError> {
    let user = match get_user_by_username(db, username).await? {
        Some(u) => u,
        None => return Ok(false),
    };

    Ok(verify_password(password, &user.password_hash).is_ok())
}

pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<MUser>, CredentialError> {
    Ok(EUser::find()
        .filter(CUser::Username.eq(username))
        .one(db)
        .await?)
}
