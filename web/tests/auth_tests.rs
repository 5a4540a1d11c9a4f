/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::{create_test_cli, create_test_server, create_test_server_with_cli};
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_then_login() {
    let server = create_test_server().await;

    let response = server
        .post("/api/user/register")
        .json(&json!({ "username": "admin", "password": "password123" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["error"], false);

    let response = server
        .post("/api/user/login")
        .json(&json!({ "username": "admin", "password": "password123" }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/user/login")
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .await;
    response.assert_status_unauthorized();

    let response = server
        .post("/api/user/login")
        .json(&json!({ "username": "nobody", "password": "password123" }))
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = create_test_server().await;

    server
        .post("/api/user/register")
        .json(&json!({ "username": "admin", "password": "password123" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/user/register")
        .json(&json!({ "username": "admin", "password": "other" }))
        .await;
    assert_eq!(response.status_code().as_u16(), 409);
}

#[tokio::test]
async fn test_register_disabled() {
    let mut cli = create_test_cli();
    cli.disable_registration = true;
    let server = create_test_server_with_cli(cli).await;

    let response = server
        .post("/api/user/register")
        .json(&json!({ "username": "admin", "password": "password123" }))
        .await;
    response.assert_status_bad_request();
}
