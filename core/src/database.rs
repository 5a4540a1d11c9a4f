/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::input::load_secret;
use super::types::Cli;
use super::users;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_admin_user(cli, &db)
        .await
        .context("Failed to seed admin user")?;
    Ok(db)
}

/// Creates the configured admin account on first startup. Does nothing
/// when no admin user is configured or the account already exists.
async fn seed_admin_user(cli: &Cli, db: &DatabaseConnection) -> Result<()> {
    let username = match &cli.admin_user {
        Some(u) => u,
        None => return Ok(()),
    };

    let password_file = cli
        .admin_password_file
        .as_ref()
        .context("--admin-password-file is required when --admin-user is set")?;

    let password = load_secret(password_file);
    if password.is_empty() {
        anyhow::bail!("admin password file is empty");
    }

    if users::get_user_by_username(db, username).await?.is_none() {
        users::create_user(db, username, &password).await?;
        tracing::info!("Created admin user {}", username);
    }

    Ok(())
}
