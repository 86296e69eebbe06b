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

//! Local state of the editor screens.
//!
//! Each form mirrors one entity into editable fields, applies the user's
//! edits, and builds the request body on submit. Validation here is a
//! convenience for the user; the server validates again.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

pub mod content;
pub mod deck;
pub mod generate;
pub mod helper;
pub mod highlights;
pub mod quiz;
pub mod reward;
pub mod session;
pub mod tags;
pub mod timeline;

/// A front-end validation failure, shown inline and blocking submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormError {
    message: String,
}

impl FormError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FormError {}

/// Fail with `message` when `value` is blank.
pub(crate) fn required(value: &str, message: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::new(message))
    } else {
        Ok(())
    }
}

/// Trimmed value, or `None` when blank.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
