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

//! The flattened card shape the study screens render.
//!
//! `GET /contents/{id}/cards` has answered in two shapes over time: flat
//! cards (`{"cards": [{"id", "type", ...payload}]}` or a bare list), and
//! quiz records with a nested `payload` object (a bare list or an
//! `{"items": [...]}` page). [`normalize_cards`] accepts all of them.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::payload::QuizPayload;
use crate::types::quiz::Quiz;
use crate::types::quiz::QuizType;

/// A quiz payload with its identifying fields merged in.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<QuizType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<i64>,
    /// The payload fields (question, options, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Card {
    /// Typed payload, when the card's type is known.
    pub fn payload(&self) -> Option<QuizPayload> {
        self.quiz_type
            .map(|quiz_type| QuizPayload::from_source(quiz_type, &self.fields))
    }
}

impl From<&Quiz> for Card {
    fn from(quiz: &Quiz) -> Self {
        let mut fields = quiz.payload.clone();
        strip_identity(&mut fields);
        Card {
            id: Some(quiz.id),
            quiz_type: Some(quiz.quiz_type),
            content_id: Some(quiz.content_id),
            fields,
        }
    }
}

/// Flatten any of the known card response shapes into cards.
pub fn normalize_cards(response: Value) -> Fallible<Vec<Card>> {
    let list = match response {
        Value::Array(list) => list,
        Value::Object(mut object) => match object
            .remove("cards")
            .or_else(|| object.remove("items"))
        {
            Some(Value::Array(list)) => list,
            Some(_) => return fail("Card list is not an array."),
            None => return fail("Response has neither 'cards' nor 'items'."),
        },
        _ => return fail("Unexpected card response."),
    };
    list.into_iter().map(normalize_card).collect()
}

fn normalize_card(item: Value) -> Fallible<Card> {
    let Value::Object(mut object) = item else {
        return fail("Card entry is not an object.");
    };
    let nested = match object.remove("payload") {
        Some(Value::Object(payload)) => Some(payload),
        Some(other) => {
            // Not a nested payload; keep it as an ordinary field.
            object.insert("payload".to_string(), other);
            None
        }
        None => None,
    };
    let mut fields = match nested {
        Some(mut payload) => {
            // Outer identifying fields win over anything inside the payload.
            for key in ["id", "type", "content_id", "created_at"] {
                if let Some(value) = object.remove(key) {
                    payload.insert(key.to_string(), value);
                }
            }
            payload
        }
        None => object,
    };
    let id = fields.get("id").and_then(Value::as_i64);
    let quiz_type = match fields.get("type").and_then(Value::as_str) {
        Some(s) => Some(s.parse::<QuizType>()?),
        None => None,
    };
    let content_id = fields.get("content_id").and_then(Value::as_i64);
    strip_identity(&mut fields);
    Ok(Card {
        id,
        quiz_type,
        content_id,
        fields,
    })
}

fn strip_identity(fields: &mut Map<String, Value>) {
    fields.remove("id");
    fields.remove("type");
    fields.remove("content_id");
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_flat_shape() -> Fallible<()> {
        let cards = normalize_cards(json!({
            "cards": [
                {"id": 1, "type": "SHORT", "content_id": 9, "prompt": "p", "answer": "a",
                 "created_at": "2024-01-01T00:00:00"}
            ]
        }))?;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, Some(1));
        assert_eq!(cards[0].quiz_type, Some(QuizType::Short));
        assert_eq!(cards[0].content_id, Some(9));
        assert_eq!(cards[0].fields.get("prompt"), Some(&json!("p")));
        Ok(())
    }

    #[test]
    fn test_nested_shape_matches_flat_shape() -> Fallible<()> {
        let flat = normalize_cards(json!([
            {"id": 2, "type": "OX", "content_id": 3, "statement": "s", "answer": false}
        ]))?;
        let nested = normalize_cards(json!({
            "items": [
                {"id": 2, "type": "OX", "content_id": 3,
                 "payload": {"statement": "s", "answer": false}}
            ]
        }))?;
        assert_eq!(flat, nested);
        Ok(())
    }

    #[test]
    fn test_outer_fields_override_payload() -> Fallible<()> {
        let cards = normalize_cards(json!([
            {"id": 5, "type": "MCQ", "payload": {"id": 99, "question": "q"}}
        ]))?;
        assert_eq!(cards[0].id, Some(5));
        assert!(!cards[0].fields.contains_key("id"));
        Ok(())
    }

    #[test]
    fn test_serializes_flat() -> Fallible<()> {
        let cards = normalize_cards(json!([
            {"id": 1, "type": "SHORT", "payload": {"prompt": "p", "answer": "a"}}
        ]))?;
        assert_eq!(
            serde_json::to_value(&cards[0])?,
            json!({"id": 1, "type": "SHORT", "prompt": "p", "answer": "a"})
        );
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_shapes() {
        assert!(normalize_cards(json!("nope")).is_err());
        assert!(normalize_cards(json!({"data": []})).is_err());
        assert!(normalize_cards(json!([1, 2])).is_err());
    }

    #[test]
    fn test_card_payload() -> Fallible<()> {
        let cards = normalize_cards(json!([{"id": 1, "type": "MCQ", "question": "q"}]))?;
        let payload = cards[0].payload().unwrap();
        assert_eq!(payload.quiz_type(), QuizType::Mcq);
        Ok(())
    }
}
