/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod experiments;
pub mod input;
pub mod types;
pub mod users;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting LabTrack server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
