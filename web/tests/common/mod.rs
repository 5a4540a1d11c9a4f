/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum_test::TestServer;
use labtrack_core::types::{Cli, ServerState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use web::build_router;

pub fn create_test_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        default_per_page: 5,
        disable_registration: false,
        admin_user: None,
        admin_password_file: None,
    }
}

pub async fn create_test_server() -> TestServer {
    create_test_server_with_cli(create_test_cli()).await
}

pub async fn create_test_server_with_cli(cli: Cli) -> TestServer {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let state = Arc::new(ServerState { db, cli });
    TestServer::new(build_router(state)).unwrap()
}
