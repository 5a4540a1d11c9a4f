/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::create_test_server;
use serde_json::{json, Value};

fn experiment_body(title: &str, status: &str) -> Value {
    json!({
        "title": title,
        "description": format!("description of {}", title),
        "model_type": "CNN",
        "status": status,
        "accuracy": "95.5",
        "is_public": "0",
    })
}

#[tokio::test]
async fn test_health() {
    let server = create_test_server().await;

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["message"], "ok");
}

#[tokio::test]
async fn test_create_and_get_experiment() {
    let server = create_test_server().await;

    let response = server
        .post("/api/experiments")
        .json(&experiment_body("Fraud detection", "Running"))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["error"], false);
    let id = body["message"]["id"].as_i64().unwrap();
    assert_eq!(body["message"]["title"], "Fraud detection");
    assert_eq!(body["message"]["model_type"], "CNN");
    assert_eq!(body["message"]["accuracy"], 95.5);
    assert_eq!(body["message"]["is_public"], false);

    let response = server.get(&format!("/api/experiments/{}", id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"]["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_create_experiment_validation_errors() {
    let server = create_test_server().await;

    let response = server
        .post("/api/experiments")
        .json(&json!({
            "title": "  ",
            "description": "",
            "model_type": "GAN",
            "status": "Running",
            "accuracy": "150",
        }))
        .await;

    assert_eq!(response.status_code().as_u16(), 422);
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    let errors: Vec<String> = body["message"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        errors,
        vec![
            "Title is required",
            "Description is required",
            "Invalid model type",
            "Accuracy must be between 0 and 100",
        ]
    );
}

#[tokio::test]
async fn test_get_missing_experiment() {
    let server = create_test_server().await;

    let response = server.get("/api/experiments/999").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_experiment() {
    let server = create_test_server().await;

    let response = server
        .post("/api/experiments")
        .json(&experiment_body("before", "Planning"))
        .await;
    let id = response.json::<Value>()["message"]["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/experiments/{}", id))
        .json(&json!({
            "title": "after",
            "description": "rewritten",
            "model_type": "BERT",
            "status": "Completed",
            "accuracy": "88",
            "is_public": "1",
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"]["title"], "after");
    assert_eq!(body["message"]["status"], "Completed");
    assert_eq!(body["message"]["is_public"], true);

    let response = server
        .put("/api/experiments/999")
        .json(&experiment_body("ghost", "Running"))
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_experiment() {
    let server = create_test_server().await;

    let response = server
        .post("/api/experiments")
        .json(&experiment_body("doomed", "Failed"))
        .await;
    let id = response.json::<Value>()["message"]["id"].as_i64().unwrap();

    let response = server.delete(&format!("/api/experiments/{}", id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Experiment \"doomed\" deleted successfully"
    );

    let response = server.get(&format!("/api/experiments/{}", id)).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_experiments_with_filters() {
    let server = create_test_server().await;

    for (title, status) in [
        ("exp a", "Completed"),
        ("exp b", "Running"),
        ("exp c", "Completed"),
    ] {
        server
            .post("/api/experiments")
            .json(&experiment_body(title, status))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/api/experiments")
        .add_query_param("status", "Completed")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"]["total_count"], 2);
    assert_eq!(body["message"]["page"], 1);
    assert_eq!(body["message"]["total_pages"], 1);
    let items = body["message"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|e| e["status"] == "Completed"));

    // Unknown filter values are rejected
    let response = server
        .get("/api/experiments")
        .add_query_param("status", "Paused")
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_experiments_search_and_pagination() {
    let server = create_test_server().await;

    for i in 0..7 {
        server
            .post("/api/experiments")
            .json(&experiment_body(&format!("fraud run {}", i), "Running"))
            .await
            .assert_status_ok();
    }
    server
        .post("/api/experiments")
        .json(&experiment_body("unrelated", "Running"))
        .await
        .assert_status_ok();

    let response = server
        .get("/api/experiments")
        .add_query_param("search", "FRAUD")
        .add_query_param("page", "2")
        .add_query_param("per_page", "3")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"]["total_count"], 7);
    assert_eq!(body["message"]["total_pages"], 3);
    assert_eq!(body["message"]["page"], 2);
    assert_eq!(body["message"]["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_options() {
    let server = create_test_server().await;

    let response = server.get("/api/experiments/options").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let model_types = body["message"]["model_types"].as_array().unwrap();
    assert_eq!(model_types.len(), 6);
    assert_eq!(model_types[0], "CNN");

    let statuses = body["message"]["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 4);
    assert_eq!(statuses[0], "Planning");
}
