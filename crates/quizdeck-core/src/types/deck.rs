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

use serde::Deserialize;
use serde::Serialize;

use crate::types::timestamp::Timestamp;

/// A front/back image theme applied to quiz cards.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CardDeck {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Server-side filename of the front image.
    pub front_image: String,
    /// Server-side filename of the back image.
    pub back_image: String,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /card-decks`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CardDeckDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub front_image: String,
    pub back_image: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of `PUT /card-decks/{id}`; absent fields are kept.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CardDeckUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// Response of `POST /upload-card-deck-image`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UploadedImage {
    pub filename: String,
}
