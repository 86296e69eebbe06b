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

use crate::forms::FormError;
use crate::types::payload::PayloadBody;
use crate::types::payload::QuizPayload;
use crate::types::quiz::Quiz;
use crate::types::quiz::QuizDraft;
use crate::types::quiz::QuizType;

/// Editable state of the quiz editor.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizForm {
    pub content_id: i64,
    pub payload: QuizPayload,
}

impl QuizForm {
    pub fn new(content_id: i64, quiz_type: QuizType) -> Self {
        Self {
            content_id,
            payload: QuizPayload::blank(quiz_type),
        }
    }

    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            content_id: quiz.content_id,
            payload: QuizPayload::from_source(quiz.quiz_type, &quiz.payload),
        }
    }

    pub fn quiz_type(&self) -> QuizType {
        self.payload.quiz_type()
    }

    /// Switch to another type. The type-specific fields start blank; the
    /// explanation and tags carry over.
    pub fn change_type(&mut self, quiz_type: QuizType) {
        if quiz_type == self.quiz_type() {
            return;
        }
        let mut payload = QuizPayload::blank(quiz_type);
        payload.explain = self.payload.explain.take();
        payload.tags = std::mem::take(&mut self.payload.tags);
        self.payload = payload;
    }

    /// Add a blank option (MCQ), item (ORDER) or row (MATCH).
    pub fn add_entry(&mut self) {
        match &mut self.payload.body {
            PayloadBody::Mcq { options, .. } => options.push(String::new()),
            PayloadBody::Order {
                items,
                answer_order,
            } => {
                answer_order.push(items.len());
                items.push(String::new());
            }
            PayloadBody::Match { left, right, pairs } => {
                let row = left.len().max(right.len());
                left.resize(row + 1, String::new());
                right.resize(row + 1, String::new());
                pairs.push((row, row));
            }
            _ => {}
        }
    }

    /// Remove the option, item or row at `index`, keeping the answer
    /// indices pointing at the same entries.
    pub fn remove_entry(&mut self, index: usize) {
        match &mut self.payload.body {
            PayloadBody::Mcq {
                options,
                answer_index,
                ..
            } => {
                if index >= options.len() {
                    return;
                }
                options.remove(index);
                if *answer_index > index || (*answer_index == index && index >= options.len()) {
                    *answer_index = answer_index.saturating_sub(1);
                }
            }
            PayloadBody::Order {
                items,
                answer_order,
            } => {
                if index >= items.len() {
                    return;
                }
                items.remove(index);
                answer_order.retain(|i| *i != index);
                for i in answer_order.iter_mut() {
                    if *i > index {
                        *i -= 1;
                    }
                }
            }
            PayloadBody::Match { left, right, pairs } => {
                if index >= left.len() && index >= right.len() {
                    return;
                }
                if index < left.len() {
                    left.remove(index);
                }
                if index < right.len() {
                    right.remove(index);
                }
                pairs.retain(|(l, r)| *l != index && *r != index);
                for (l, r) in pairs.iter_mut() {
                    if *l > index {
                        *l -= 1;
                    }
                    if *r > index {
                        *r -= 1;
                    }
                }
            }
            _ => {}
        }
    }

    /// Validate and build the body for `POST /contents/{id}/quizzes` or
    /// `PATCH /quizzes/{id}`.
    pub fn to_draft(&self) -> Result<QuizDraft, FormError> {
        self.payload.validate()?;
        Ok(self.payload.clone().into_draft())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_change_type_keeps_explanation() {
        let mut form = QuizForm::new(1, QuizType::Short);
        form.payload.explain = Some("because".into());
        form.payload.tags = vec!["t".into()];
        form.change_type(QuizType::Mcq);
        assert_eq!(form.quiz_type(), QuizType::Mcq);
        assert_eq!(form.payload.explain.as_deref(), Some("because"));
        assert_eq!(form.payload.tags, vec!["t"]);
    }

    #[test]
    fn test_mcq_remove_before_answer_shifts_index() {
        let mut form = QuizForm::new(1, QuizType::Mcq);
        if let PayloadBody::Mcq { answer_index, .. } = &mut form.payload.body {
            *answer_index = 2;
        }
        form.remove_entry(0);
        match &form.payload.body {
            PayloadBody::Mcq {
                options,
                answer_index,
                ..
            } => {
                assert_eq!(options.len(), 3);
                assert_eq!(*answer_index, 1);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_order_add_and_remove_keep_permutation() {
        let mut form = QuizForm::new(1, QuizType::Order);
        form.add_entry();
        form.remove_entry(1);
        match &form.payload.body {
            PayloadBody::Order {
                items,
                answer_order,
            } => {
                assert_eq!(items.len(), 4);
                let mut sorted = answer_order.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, vec![0, 1, 2, 3]);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_match_remove_row_drops_its_pair() {
        let mut form = QuizForm::new(1, QuizType::Match);
        form.remove_entry(0);
        match &form.payload.body {
            PayloadBody::Match { left, pairs, .. } => {
                assert_eq!(left.len(), 2);
                assert_eq!(pairs, &vec![(0, 0), (1, 1)]);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_to_draft_validates() {
        let mut form = QuizForm::new(1, QuizType::Ox);
        assert!(form.to_draft().is_err());
        if let PayloadBody::Ox { statement, .. } = &mut form.payload.body {
            *statement = "Water boils at 100C".into();
        }
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.payload.get("answer"), Some(&json!(true)));
    }

    #[test]
    fn test_from_quiz_fills_missing_fields() {
        let quiz: Quiz = serde_json::from_value(json!({
            "id": 4,
            "content_id": 2,
            "type": "MCQ",
            "payload": {"question": "q"},
            "created_at": "2024-01-01T00:00:00",
            "visibility": "PRIVATE",
            "owner_id": 1
        }))
        .unwrap();
        let form = QuizForm::from_quiz(&quiz);
        assert_eq!(form.content_id, 2);
        match &form.payload.body {
            PayloadBody::Mcq { options, .. } => assert_eq!(options.len(), 4),
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
