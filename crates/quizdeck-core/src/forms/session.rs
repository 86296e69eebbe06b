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

use crate::cards::Card;
use crate::forms::FormError;
use crate::forms::required;
use crate::forms::tags::TagList;
use crate::types::quiz::Quiz;
use crate::types::session::StudySession;
use crate::types::session::StudySessionCreate;
use crate::types::session::StudySessionUpdate;
use crate::types::timestamp::Timestamp;

/// Editable state of the study session builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudySessionForm {
    pub title: String,
    cards: Vec<Card>,
    pub tags: TagList,
    pub helper_id: Option<i64>,
    pub card_deck_id: Option<i64>,
    pub is_public: bool,
}

impl StudySessionForm {
    pub fn from_session(session: &StudySession) -> Self {
        let mut cards = session.cards.clone();
        // Older sessions stored only the ids.
        if cards.is_empty() {
            cards = session
                .quiz_ids
                .iter()
                .map(|id| Card {
                    id: Some(*id),
                    quiz_type: None,
                    content_id: None,
                    fields: Default::default(),
                })
                .collect();
        }
        Self {
            title: session.title.clone(),
            cards,
            tags: TagList::from_values(&session.tags),
            helper_id: session.helper_id,
            card_deck_id: session.card_deck_id,
            is_public: session.is_public,
        }
    }

    /// Append a quiz. Returns false if it is already in the session.
    pub fn add_quiz(&mut self, quiz: &Quiz) -> bool {
        if self.quiz_ids().contains(&quiz.id) {
            return false;
        }
        self.cards.push(Card::from(quiz));
        true
    }

    pub fn remove_quiz(&mut self, quiz_id: i64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != Some(quiz_id));
        self.cards.len() != before
    }

    /// Move the card at `from` to position `to`.
    pub fn move_quiz(&mut self, from: usize, to: usize) {
        if from >= self.cards.len() || to >= self.cards.len() {
            return;
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
    }

    pub fn quiz_ids(&self) -> Vec<i64> {
        self.cards.iter().filter_map(|card| card.id).collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.title, "Enter a session title.")?;
        if self.cards.is_empty() {
            return Err(FormError::new("Add at least one quiz."));
        }
        Ok(())
    }

    pub fn to_create(&self) -> Result<StudySessionCreate, FormError> {
        self.validate()?;
        Ok(StudySessionCreate {
            title: self.title.trim().to_string(),
            quiz_ids: self.quiz_ids(),
            cards: self.cards.clone(),
            tags: self.tags.as_slice().to_vec(),
            helper_id: self.helper_id,
            card_deck_id: self.card_deck_id,
            is_public: self.is_public,
        })
    }

    pub fn to_update(&self) -> Result<StudySessionUpdate, FormError> {
        self.validate()?;
        Ok(StudySessionUpdate {
            title: Some(self.title.trim().to_string()),
            quiz_ids: Some(self.quiz_ids()),
            cards: Some(self.cards.clone()),
            tags: Some(self.tags.as_slice().to_vec()),
            helper_id: Some(self.helper_id),
            card_deck_id: Some(self.card_deck_id),
            ..StudySessionUpdate::default()
        })
    }
}

/// Answer bookkeeping while a session is being played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionProgress {
    total: usize,
    answers: BTreeMap<String, bool>,
}

impl SessionProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            answers: BTreeMap::new(),
        }
    }

    pub fn for_session(session: &StudySession) -> Self {
        Self::new(session.quiz_ids.len().max(session.cards.len()))
    }

    /// Record an answer. Answering the same quiz again replaces the result.
    pub fn record(&mut self, quiz_id: i64, is_correct: bool) {
        self.answers.insert(quiz_id.to_string(), is_correct);
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn score(&self) -> usize {
        self.answers.values().filter(|c| **c).count()
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.answered() >= self.total
    }

    /// The update that stores the result of a finished run.
    pub fn to_update(&self, completed_at: Timestamp) -> StudySessionUpdate {
        StudySessionUpdate {
            score: Some(self.score() as i64),
            total: Some(self.total as i64),
            completed_at: Some(completed_at),
            answers: Some(self.answers.clone()),
            ..StudySessionUpdate::default()
        }
    }
}
