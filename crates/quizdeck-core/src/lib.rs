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

//! quizdeck-core: Core library for the quizdeck study client.
//!
//! This library provides WASM-compatible types and logic for:
//! - The entities exchanged with the study server
//! - Editor form state, derived state and front-end validation
//! - Normalizing card responses and server error payloads
//! - Resolving the API base URL

pub mod cards;
pub mod config;
pub mod error;
pub mod forms;
pub mod levels;
pub mod message;
pub mod types;

// Re-exports for convenience
pub use cards::{Card, normalize_cards};
pub use config::{PageLocation, resolve_base_url};
pub use error::{ErrorReport, Fallible, fail};
pub use forms::FormError;
pub use message::user_message;
pub use types::content::{Content, ContentUpdate, EraEntry, TimelineEntry, Visibility};
pub use types::payload::QuizPayload;
pub use types::quiz::{Quiz, QuizDraft, QuizType};
pub use types::timestamp::Timestamp;
