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

//! WASM bindings for quizdeck - the browser client's form logic and API
//! settings, exchanged with JavaScript as JSON strings.

use serde_json::Map;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::console;

use quizdeck_core::PageLocation;
use quizdeck_core::QuizPayload;
use quizdeck_core::QuizType;
use quizdeck_core::forms::tags::parse_tag_input;
use quizdeck_core::forms::timeline::parse_timeline_text;
use quizdeck_core::resolve_base_url;
use quizdeck_core::user_message;

mod preview;
mod selection;

pub use preview::PreviewUrls;
pub use selection::KeywordSelection;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"quizdeck WASM initialized".into());
}

/// The API base URL for the current page. `VITE_API_BASE_URL` and
/// `VITE_API_PORT` are read at build time.
#[wasm_bindgen]
pub fn api_base_url() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let location = window.location();
    let page = PageLocation::new(location.protocol()?, location.hostname()?, location.host()?);
    Ok(resolve_base_url(
        option_env!("VITE_API_BASE_URL"),
        option_env!("VITE_API_PORT"),
        &page,
    ))
}

/// Split comma or newline separated input into unique tags, as a JSON array.
#[wasm_bindgen]
pub fn parse_tags(input: &str) -> String {
    serde_json::to_string(&parse_tag_input(input)).unwrap_or_else(|_| "[]".to_string())
}

/// Parse pasted timeline lines into `{title, description}` entries.
#[wasm_bindgen]
pub fn parse_timeline(text: &str) -> String {
    serde_json::to_string(&parse_timeline_text(text)).unwrap_or_else(|_| "[]".to_string())
}

fn parse_payload(quiz_type: &str, payload_json: &str) -> Result<QuizPayload, JsValue> {
    let quiz_type = quiz_type
        .parse::<QuizType>()
        .map_err(|e| JsValue::from_str(e.message()))?;
    let source: Map<String, Value> = serde_json::from_str(payload_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse payload: {}", e)))?;
    Ok(QuizPayload::from_source(quiz_type, &source))
}

/// Fill in every field the editor needs for `quiz_type`, keeping those
/// present in `payload_json`.
#[wasm_bindgen]
pub fn build_quiz_payload(quiz_type: &str, payload_json: &str) -> Result<String, JsValue> {
    let payload = parse_payload(quiz_type, payload_json)?;
    serde_json::to_string(&payload.to_map())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize payload: {}", e)))
}

/// Validate an edited payload and build the request body for saving it.
#[wasm_bindgen]
pub fn quiz_draft(quiz_type: &str, payload_json: &str) -> Result<String, JsValue> {
    let payload = parse_payload(quiz_type, payload_json)?;
    payload
        .validate()
        .map_err(|e| JsValue::from_str(e.message()))?;
    serde_json::to_string(&payload.into_draft())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize quiz: {}", e)))
}

/// Flatten a `/contents/{id}/cards` response into cards.
#[wasm_bindgen]
pub fn normalize_cards(response_json: &str) -> Result<String, JsValue> {
    let response: Value = serde_json::from_str(response_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse cards: {}", e)))?;
    let cards = quizdeck_core::normalize_cards(response)
        .map_err(|e| JsValue::from_str(e.message()))?;
    serde_json::to_string(&cards)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize cards: {}", e)))
}

/// The message to show for an error response body. Bodies that are not
/// JSON are shown as they are.
#[wasm_bindgen]
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(payload) => user_message(&payload),
        Err(_) => body.to_string(),
    }
}
