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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use quizdeck_core::ErrorReport;
use quizdeck_core::user_message;
use serde_json::Value;

/// A failed API call.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    Transport(reqwest::Error),
    /// The server answered with a non-2xx status. `payload` is the parsed
    /// JSON error body, or the raw text as a JSON string when it was not JSON.
    Status { status: u16, payload: Value },
    /// A 2xx response whose body did not have the expected shape.
    Decode(String),
}

impl ApiError {
    /// The string to show the user: the server's `detail`, else the error's
    /// own message, else the serialized payload.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(e) => e.to_string(),
            ApiError::Status { payload, .. } => user_message(payload),
            ApiError::Decode(message) => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "request failed: {e}"),
            ApiError::Status { status, payload } => {
                write!(f, "server returned {status}: {}", user_message(payload))
            }
            ApiError::Decode(message) => write!(f, "unexpected response: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ApiError::Decode(value.to_string())
        } else {
            ApiError::Transport(value)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::Decode(value.to_string())
    }
}

impl From<ApiError> for ErrorReport {
    fn from(value: ApiError) -> Self {
        if value.is_not_found() {
            ErrorReport::new(format!("not found: {}", value.user_message()))
        } else {
            ErrorReport::new(value.user_message())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
