/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

#![allow(dead_code)]

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// In-process stand-in for the target service. Posting a duplicate id answers
/// 400 like the real API; orders referencing an unknown user answer 422, so
/// fixtures must seed users before orders.
pub struct TestApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

#[derive(Default)]
struct ApiState {
    users: Mutex<HashSet<String>>,
    orders: Mutex<HashSet<String>>,
    requests: AtomicUsize,
}

impl TestApi {
    pub async fn start() -> Self {
        let state = Arc::new(ApiState::default());
        let app = Router::new()
            .route("/api/users", post(create_user))
            .route("/api/orders", post(create_order))
            .route("/api/teapot", post(teapot))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test api");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Total requests the service has seen, across all routes.
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    pub fn user_count(&self) -> usize {
        self.state.users.lock().unwrap().len()
    }

    pub fn order_count(&self) -> usize {
        self.state.orders.lock().unwrap().len()
    }
}

async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
    if id.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "id is required" })),
        );
    }
    let mut users = state.users.lock().unwrap();
    if !users.insert(id.to_string()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("user '{id}' already exists") })),
        );
    }
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn create_order(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
    let user_id = body
        .get("userId")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if id.is_empty() || user_id.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "id and userId are required" })),
        );
    }
    if !state.users.lock().unwrap().contains(user_id) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": format!("unknown user '{user_id}'") })),
        );
    }
    let mut orders = state.orders.lock().unwrap();
    if !orders.insert(id.to_string()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("order '{id}' already exists") })),
        );
    }
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn teapot(State(state): State<Arc<ApiState>>, Json(_body): Json<Value>) -> StatusCode {
    state.requests.fetch_add(1, Ordering::SeqCst);
    StatusCode::IM_A_TEAPOT
}

/// Route test logs through the test writer; safe to call repeatedly.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Record shape of the user fixtures.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Record shape of the order fixtures; orders reference users by id.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
}
