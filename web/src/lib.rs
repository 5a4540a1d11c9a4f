/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::routing::get;
use axum::routing::post;
use axum::Router;
use labtrack_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Route guarding is the embedder's concern; the handlers assume an
// authenticated caller.
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(
            "/api/experiments",
            get(endpoints::experiments::get_experiments)
                .post(endpoints::experiments::post_experiment),
        )
        .route(
            "/api/experiments/{id}",
            get(endpoints::experiments::get_experiment)
                .put(endpoints::experiments::put_experiment)
                .delete(endpoints::experiments::delete_experiment),
        )
        .route(
            "/api/experiments/options",
            get(endpoints::experiments::get_options),
        )
        .route("/api/user/login", post(endpoints::auth::post_login))
        .route("/api/user/register", post(endpoints::auth::post_register))
        .route("/api/health", get(endpoints::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
