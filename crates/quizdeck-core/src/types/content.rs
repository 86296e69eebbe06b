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

/// Who can see a content item, quiz, or session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

/// A titled entry on a content item's timeline.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A historical period attached to a content item.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EraEntry {
    pub period: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChronologyEvent {
    pub year: i32,
    pub label: String,
}

/// Optional dated span of a content item.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Chronology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub events: Vec<ChronologyEvent>,
}

/// A study article as returned by the server.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub title: String,
    /// The body text.
    pub content: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub eras: Vec<EraEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronology: Option<Chronology>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Partial update of a content item. Absent fields are left untouched by the
/// server.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ContentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEntry>>,
    /// Single-category shorthand; the server folds it into `categories` when
    /// that list is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eras: Option<Vec<EraEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronology: Option<Chronology>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// Query parameters for `GET /contents`.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct ContentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Sort key, e.g. `created_desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}
