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

//! Typed view over the free-form quiz payload.
//!
//! The server stores the payload as an arbitrary JSON object keyed by quiz
//! type. Edit screens need every required field present even when an older
//! or hand-imported quiz lacks some of them, so [`QuizPayload::from_source`]
//! is lenient and fills gaps with blank defaults.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde_json::Map;
use serde_json::Value;

use crate::forms::FormError;
use crate::forms::required;
use crate::types::quiz::QuizDraft;
use crate::types::quiz::QuizType;

/// Blank MCQ options shown when the source has none.
pub const DEFAULT_MCQ_OPTIONS: usize = 4;

/// Blank ORDER items shown when the source has none.
pub const DEFAULT_ORDER_ITEMS: usize = 4;

/// Blank MATCH rows shown when the source has none.
pub const DEFAULT_MATCH_ROWS: usize = 3;

#[derive(Clone, PartialEq, Debug)]
pub enum PayloadBody {
    Mcq {
        question: String,
        options: Vec<String>,
        answer_index: usize,
    },
    Short {
        prompt: String,
        answer: String,
    },
    Ox {
        statement: String,
        answer: bool,
    },
    Cloze {
        text: String,
        clozes: BTreeMap<String, String>,
    },
    Order {
        items: Vec<String>,
        answer_order: Vec<usize>,
    },
    Match {
        left: Vec<String>,
        right: Vec<String>,
        pairs: Vec<(usize, usize)>,
    },
}

#[derive(Clone, PartialEq, Debug)]
pub struct QuizPayload {
    pub body: PayloadBody,
    pub explain: Option<String>,
    pub tags: Vec<String>,
}

impl QuizPayload {
    /// Rebuild a payload of the given type from whatever the server sent.
    pub fn from_source(quiz_type: QuizType, source: &Map<String, Value>) -> Self {
        let body = match quiz_type {
            QuizType::Mcq => {
                let options = non_empty_or(string_list(source, "options"), DEFAULT_MCQ_OPTIONS);
                PayloadBody::Mcq {
                    question: string(source, "question"),
                    options,
                    answer_index: index(source.get("answer_index")).unwrap_or(0),
                }
            }
            QuizType::Short => PayloadBody::Short {
                prompt: string(source, "prompt"),
                answer: string(source, "answer"),
            },
            QuizType::Ox => PayloadBody::Ox {
                statement: string(source, "statement"),
                answer: boolean(source.get("answer")).unwrap_or(true),
            },
            QuizType::Cloze => PayloadBody::Cloze {
                text: string(source, "text"),
                clozes: string_map(source, "clozes"),
            },
            QuizType::Order => {
                let items = non_empty_or(string_list(source, "items"), DEFAULT_ORDER_ITEMS);
                let answer_order = source
                    .get("answer_order")
                    .and_then(Value::as_array)
                    .map(|values| values.iter().filter_map(|v| index(Some(v))).collect::<Vec<_>>())
                    .filter(|order| order.len() == items.len())
                    .unwrap_or_else(|| (0..items.len()).collect());
                PayloadBody::Order {
                    items,
                    answer_order,
                }
            }
            QuizType::Match => {
                let left = non_empty_or(string_list(source, "left"), DEFAULT_MATCH_ROWS);
                let right = non_empty_or(string_list(source, "right"), DEFAULT_MATCH_ROWS);
                let pairs = source
                    .get("pairs")
                    .and_then(Value::as_array)
                    .map(|values| values.iter().filter_map(pair).collect::<Vec<_>>())
                    .filter(|pairs| !pairs.is_empty())
                    .unwrap_or_else(|| (0..left.len().min(right.len())).map(|i| (i, i)).collect());
                PayloadBody::Match { left, right, pairs }
            }
        };
        let explain = source
            .get("explain")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty());
        QuizPayload {
            body,
            explain,
            tags: string_list(source, "tags"),
        }
    }

    /// An empty payload of the given type, as shown on the create screen.
    pub fn blank(quiz_type: QuizType) -> Self {
        Self::from_source(quiz_type, &Map::new())
    }

    pub fn quiz_type(&self) -> QuizType {
        match self.body {
            PayloadBody::Mcq { .. } => QuizType::Mcq,
            PayloadBody::Short { .. } => QuizType::Short,
            PayloadBody::Ox { .. } => QuizType::Ox,
            PayloadBody::Cloze { .. } => QuizType::Cloze,
            PayloadBody::Order { .. } => QuizType::Order,
            PayloadBody::Match { .. } => QuizType::Match,
        }
    }

    /// The payload as the JSON object the server stores.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match &self.body {
            PayloadBody::Mcq {
                question,
                options,
                answer_index,
            } => {
                map.insert("question".into(), Value::from(question.as_str()));
                map.insert("options".into(), Value::from(options.clone()));
                map.insert("answer_index".into(), Value::from(*answer_index));
            }
            PayloadBody::Short { prompt, answer } => {
                map.insert("prompt".into(), Value::from(prompt.as_str()));
                map.insert("answer".into(), Value::from(answer.as_str()));
            }
            PayloadBody::Ox { statement, answer } => {
                map.insert("statement".into(), Value::from(statement.as_str()));
                map.insert("answer".into(), Value::from(*answer));
            }
            PayloadBody::Cloze { text, clozes } => {
                map.insert("text".into(), Value::from(text.as_str()));
                let clozes: Map<String, Value> = clozes
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                    .collect();
                map.insert("clozes".into(), Value::Object(clozes));
            }
            PayloadBody::Order {
                items,
                answer_order,
            } => {
                map.insert("items".into(), Value::from(items.clone()));
                map.insert("answer_order".into(), Value::from(answer_order.clone()));
            }
            PayloadBody::Match { left, right, pairs } => {
                map.insert("left".into(), Value::from(left.clone()));
                map.insert("right".into(), Value::from(right.clone()));
                let pairs: Vec<Value> = pairs
                    .iter()
                    .map(|(l, r)| Value::from(vec![*l, *r]))
                    .collect();
                map.insert("pairs".into(), Value::Array(pairs));
            }
        }
        if let Some(explain) = &self.explain {
            map.insert("explain".into(), Value::from(explain.as_str()));
        }
        map.insert("tags".into(), Value::from(self.tags.clone()));
        map
    }

    pub fn into_draft(self) -> QuizDraft {
        QuizDraft {
            quiz_type: self.quiz_type(),
            payload: self.to_map(),
        }
    }

    /// Check the rules the server will enforce, so the form can block the
    /// submission with a readable message.
    pub fn validate(&self) -> Result<(), FormError> {
        match &self.body {
            PayloadBody::Mcq {
                question,
                options,
                answer_index,
            } => {
                required(question, "Enter a question.")?;
                if !(2..=6).contains(&options.len()) {
                    return Err(FormError::new("Provide between 2 and 6 options."));
                }
                let trimmed: Vec<&str> = options.iter().map(|o| o.trim()).collect();
                if trimmed.iter().any(|o| o.is_empty()) {
                    return Err(FormError::new("Options must not be empty."));
                }
                let unique: HashSet<&str> = trimmed.iter().copied().collect();
                if unique.len() != trimmed.len() {
                    return Err(FormError::new("Options must be unique."));
                }
                if *answer_index >= options.len() {
                    return Err(FormError::new("Select the correct option."));
                }
            }
            PayloadBody::Short { prompt, answer } => {
                required(prompt, "Enter a prompt.")?;
                required(answer, "Enter an answer.")?;
            }
            PayloadBody::Ox { statement, .. } => {
                required(statement, "Enter a statement.")?;
            }
            PayloadBody::Cloze { text, clozes } => {
                required(text, "Enter the cloze text.")?;
                for key in cloze_placeholders(text) {
                    if !key.is_empty() && !clozes.contains_key(&key) {
                        return Err(FormError::new(format!("Missing cloze value for '{key}'.")));
                    }
                }
            }
            PayloadBody::Order {
                items,
                answer_order,
            } => {
                if items.is_empty() {
                    return Err(FormError::new("Add at least one item."));
                }
                if items.iter().any(|i| i.trim().is_empty()) {
                    return Err(FormError::new("Items must not be empty."));
                }
                let mut sorted = answer_order.clone();
                sorted.sort_unstable();
                if sorted != (0..items.len()).collect::<Vec<_>>() {
                    return Err(FormError::new("The answer order must use every item once."));
                }
            }
            PayloadBody::Match { left, right, pairs } => {
                if left.is_empty() || right.is_empty() {
                    return Err(FormError::new("Both sides need at least one entry."));
                }
                if left.iter().chain(right.iter()).any(|s| s.trim().is_empty()) {
                    return Err(FormError::new("Match entries must not be empty."));
                }
                for (l, r) in pairs {
                    if *l >= left.len() || *r >= right.len() {
                        return Err(FormError::new("A pair refers to a missing entry."));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The `{{key}}` placeholders in a cloze text, in order of appearance.
pub fn cloze_placeholders(text: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let key = after[..end].to_string();
        if !keys.contains(&key) {
            keys.push(key);
        }
        rest = &after[end + 2..];
    }
    keys
}

fn string(source: &Map<String, Value>, key: &str) -> String {
    match source.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn string_list(source: &Map<String, Value>, key: &str) -> Vec<String> {
    match source.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn string_map(source: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    match source.get(key) {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), v)
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn non_empty_or(values: Vec<String>, blanks: usize) -> Vec<String> {
    if values.is_empty() {
        vec![String::new(); blanks]
    } else {
        values
    }
}

fn index(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn boolean(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_uppercase().as_str() {
            "O" | "TRUE" => Some(true),
            "X" | "FALSE" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn pair(value: &Value) -> Option<(usize, usize)> {
    let values = value.as_array()?;
    if values.len() != 2 {
        return None;
    }
    Some((index(values.first())?, index(values.get(1))?))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_every_type_has_required_fields_when_source_is_empty() {
        let required: [(QuizType, &[&str]); 6] = [
            (QuizType::Mcq, &["question", "options", "answer_index"]),
            (QuizType::Short, &["prompt", "answer"]),
            (QuizType::Ox, &["statement", "answer"]),
            (QuizType::Cloze, &["text", "clozes"]),
            (QuizType::Order, &["items", "answer_order"]),
            (QuizType::Match, &["left", "right", "pairs"]),
        ];
        for (quiz_type, fields) in required {
            let payload = QuizPayload::blank(quiz_type);
            assert_eq!(payload.quiz_type(), quiz_type);
            let map = payload.to_map();
            for field in fields {
                assert!(map.contains_key(*field), "{quiz_type} lacks {field}");
            }
        }
    }

    #[test]
    fn test_mcq_missing_options_yields_four_blanks() {
        let payload = QuizPayload::from_source(
            QuizType::Mcq,
            &object(json!({"question": "Capital of France?"})),
        );
        match payload.body {
            PayloadBody::Mcq {
                question,
                options,
                answer_index,
            } => {
                assert_eq!(question, "Capital of France?");
                assert_eq!(options, vec![String::new(); 4]);
                assert_eq!(answer_index, 0);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_present_fields_survive() {
        let source = object(json!({
            "question": "2 + 2?",
            "options": ["3", "4"],
            "answer_index": 1,
            "explain": "arithmetic",
            "tags": ["math"]
        }));
        let payload = QuizPayload::from_source(QuizType::Mcq, &source);
        assert_eq!(payload.to_map(), source);
    }

    #[test]
    fn test_order_with_mismatched_answer_order_falls_back_to_identity() {
        let payload = QuizPayload::from_source(
            QuizType::Order,
            &object(json!({"items": ["a", "b", "c"], "answer_order": [1]})),
        );
        assert_eq!(
            payload.body,
            PayloadBody::Order {
                items: vec!["a".into(), "b".into(), "c".into()],
                answer_order: vec![0, 1, 2],
            }
        );
    }

    #[test]
    fn test_match_defaults() {
        let payload = QuizPayload::blank(QuizType::Match);
        match payload.body {
            PayloadBody::Match { left, right, pairs } => {
                assert_eq!(left.len(), 3);
                assert_eq!(right.len(), 3);
                assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_ox_accepts_letter_answers() {
        let payload =
            QuizPayload::from_source(QuizType::Ox, &object(json!({"statement": "s", "answer": "X"})));
        assert_eq!(
            payload.body,
            PayloadBody::Ox {
                statement: "s".into(),
                answer: false
            }
        );
    }

    #[test]
    fn test_validate_mcq() {
        let blank = QuizPayload::blank(QuizType::Mcq);
        assert!(blank.validate().is_err());
        let duplicate = QuizPayload::from_source(
            QuizType::Mcq,
            &object(json!({"question": "q", "options": ["a", " a"], "answer_index": 0})),
        );
        assert_eq!(
            duplicate.validate().unwrap_err().message(),
            "Options must be unique."
        );
        let ok = QuizPayload::from_source(
            QuizType::Mcq,
            &object(json!({"question": "q", "options": ["a", "b"], "answer_index": 1})),
        );
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_cloze_requires_every_placeholder() {
        let payload = QuizPayload::from_source(
            QuizType::Cloze,
            &object(json!({"text": "{{c1}} founded {{c2}}", "clozes": {"c1": "Wang Geon"}})),
        );
        assert_eq!(
            payload.validate().unwrap_err().message(),
            "Missing cloze value for 'c2'."
        );
    }

    #[test]
    fn test_validate_order_permutation() {
        let payload = QuizPayload {
            body: PayloadBody::Order {
                items: vec!["a".into(), "b".into()],
                answer_order: vec![0, 0],
            },
            explain: None,
            tags: Vec::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_cloze_placeholders() {
        assert_eq!(
            cloze_placeholders("{{a}} and {{b}} and {{a}} and {{broken"),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_into_draft() {
        let draft = QuizPayload::blank(QuizType::Short).into_draft();
        assert_eq!(draft.quiz_type, QuizType::Short);
        assert_eq!(draft.payload.get("prompt"), Some(&json!("")));
    }
}
