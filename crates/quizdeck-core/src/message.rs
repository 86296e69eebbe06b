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

//! Turning server error payloads into something a person can read.

use serde_json::Value;

/// Map an error payload to the string shown inline or in an alert.
///
/// Prefers the server's `detail` field, then a `message` field, then the
/// serialized payload itself. FastAPI validation errors put a list of
/// `{loc, msg, type}` objects under `detail`; their messages are joined.
pub fn user_message(payload: &Value) -> String {
    if let Value::Object(object) = payload {
        if let Some(detail) = object.get("detail").filter(|d| !d.is_null()) {
            return detail_message(detail);
        }
        if let Some(Value::String(message)) = object.get("message") {
            return message.clone();
        }
    }
    match payload {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn detail_message(detail: &Value) -> String {
    match detail {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg") {
                    Some(Value::String(msg)) => msg.clone(),
                    _ => item.to_string(),
                })
                .collect();
            messages.join("; ")
        }
        other => other.to_string(),
    }
}
