// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An in-process stand-in for the study server.

use axum::Router;
use portpicker::pick_unused_port;
use quizdeck_core::ErrorReport;
use quizdeck_core::Fallible;
use serde_json::Value;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::spawn;

use crate::client::ApiClient;
use crate::utils::wait_for_server;

pub const TEST_HOST: &str = "127.0.0.1";

pub const CREATED_AT: &str = "2024-03-01T09:30:00.000000";

/// Serve `app` on a free port and return a client pointed at it.
pub async fn serve(app: Router) -> Fallible<ApiClient> {
    let port = pick_unused_port().ok_or_else(|| ErrorReport::new("no free port"))?;
    let listener = TcpListener::bind(format!("{TEST_HOST}:{port}")).await?;
    spawn(async move { axum::serve(listener, app).await });
    wait_for_server(TEST_HOST, port).await?;
    Ok(ApiClient::new(format!("http://{TEST_HOST}:{port}")))
}

pub fn profile_json(points: i64, level: i64) -> Value {
    json!({
        "id": 1,
        "email": "learner@example.com",
        "created_at": CREATED_AT,
        "is_admin": false,
        "points": points,
        "level": level,
        "points_to_next_level": 100 - points % 100,
        "is_max_level": false,
        "selected_helper_id": null,
        "selected_helper": null
    })
}

pub fn helper_json(id: i64, name: &str, level_requirement: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "level_requirement": level_requirement,
        "description": null,
        "variants": {"idle": format!("helper_{id}_idle.avif"), "correct": null, "incorrect": null},
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT,
        "unlocked": level_requirement <= 1
    })
}

pub fn content_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": "The Joseon dynasty ruled Korea for five centuries.",
        "highlights": ["Joseon"],
        "keywords": ["Joseon", "Hangul"],
        "timeline": [{"title": "1392", "description": "Founding"}],
        "categories": ["History"],
        "eras": [],
        "created_at": CREATED_AT,
        "visibility": "PRIVATE",
        "owner_id": 1
    })
}

pub fn quiz_json(id: i64, content_id: i64) -> Value {
    json!({
        "id": id,
        "content_id": content_id,
        "type": "OX",
        "payload": {"statement": "Hangul was created in 1443.", "answer": true},
        "created_at": CREATED_AT,
        "visibility": "PRIVATE",
        "owner_id": 1
    })
}
