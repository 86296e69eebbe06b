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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::ErrorReport;
use crate::types::content::Visibility;
use crate::types::timestamp::Timestamp;

/// The kinds of gradable question a quiz can be.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuizType {
    Mcq,
    Short,
    Ox,
    Cloze,
    Order,
    Match,
}

impl QuizType {
    pub const ALL: [QuizType; 6] = [
        QuizType::Mcq,
        QuizType::Short,
        QuizType::Ox,
        QuizType::Cloze,
        QuizType::Order,
        QuizType::Match,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuizType::Mcq => "MCQ",
            QuizType::Short => "SHORT",
            QuizType::Ox => "OX",
            QuizType::Cloze => "CLOZE",
            QuizType::Order => "ORDER",
            QuizType::Match => "MATCH",
        }
    }
}

impl Display for QuizType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuizType {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        QuizType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| ErrorReport::new(format!("Invalid quiz type: '{s}'.")))
    }
}

/// A quiz as returned by the server. The payload shape depends on `quiz_type`;
/// see [`crate::types::payload::QuizPayload`] for the typed view.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub content_id: i64,
    #[serde(rename = "type")]
    pub quiz_type: QuizType,
    #[serde(default)]
    pub payload: Map<String, Value>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Body for creating or replacing a quiz. On the wire the payload fields sit
/// next to `type`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct QuizDraft {
    #[serde(rename = "type")]
    pub quiz_type: QuizType,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Query parameters for `GET /quizzes` and `GET /contents/{id}/quizzes`.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct QuizQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<QuizType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Body of `POST /quizzes/submit`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub quiz_id: i64,
    pub is_correct: bool,
}

/// The server's answer to a submission: the user's updated standing.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct QuizSubmitResult {
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub leveled_up: bool,
    #[serde(default)]
    pub points_to_next_level: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
