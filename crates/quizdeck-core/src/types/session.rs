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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::cards::Card;
use crate::types::deck::CardDeck;
use crate::types::helper::LearningHelper;
use crate::types::reward::Reward;
use crate::types::timestamp::Timestamp;

/// A user-assembled ordered set of quizzes with progress tracking.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StudySession {
    pub id: i64,
    pub title: String,
    /// Quiz ids in study order.
    #[serde(default)]
    pub quiz_ids: Vec<i64>,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    /// Per-quiz correctness, keyed by the quiz id as a string.
    #[serde(default)]
    pub answers: BTreeMap<String, bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    pub owner_id: i64,
    #[serde(default)]
    pub helper_id: Option<i64>,
    #[serde(default)]
    pub helper: Option<LearningHelper>,
    #[serde(default)]
    pub card_deck_id: Option<i64>,
    #[serde(default)]
    pub card_deck: Option<CardDeck>,
    #[serde(default)]
    pub is_public: bool,
}

impl StudySession {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StudySessionCreate {
    pub title: String,
    pub quiz_ids: Vec<i64>,
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_deck_id: Option<i64>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct StudySessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// `Some(None)` detaches the helper.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "super::nullable")]
    pub helper_id: Option<Option<i64>>,
    /// `Some(None)` detaches the card deck.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "super::nullable")]
    pub card_deck_id: Option<Option<i64>>,
}

/// Body of `POST /study-sessions/{id}/rewards`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RewardAssignment {
    pub reward_id: i64,
}
