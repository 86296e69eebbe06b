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
use serde_json::Map;
use serde_json::Value;

use crate::types::content::EraEntry;
use crate::types::content::TimelineEntry;
use crate::types::content::Visibility;
use crate::types::quiz::QuizType;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// What the generator should build questions around.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    #[default]
    Highlight,
    Timeline,
}

/// Body of `POST /ai/generate`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub content: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Empty means every type.
    #[serde(default)]
    pub types: Vec<QuizType>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub no_cache: bool,
    #[serde(default)]
    pub focus_mode: FocusMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<Map<String, Value>>>,
}

/// Body of `POST /ai/generate-and-import`: an import payload plus generation
/// settings.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GenerateAndImportRequest {
    #[serde(flatten)]
    pub import: ImportPayload,
    #[serde(default)]
    pub types: Vec<QuizType>,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Replace an existing content item of the same title owned by the user.
    #[serde(default)]
    pub upsert: bool,
    #[serde(default)]
    pub no_cache: bool,
    #[serde(default)]
    pub focus_mode: FocusMode,
}

/// Generation metadata the server attaches to every response.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GenerationMeta {
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub tokens_in: Option<i64>,
    #[serde(default)]
    pub tokens_out: Option<i64>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub cards: Vec<Map<String, Value>>,
    #[serde(default)]
    pub facts: Value,
    #[serde(default)]
    pub meta: GenerationMeta,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GenerateAndImportResponse {
    #[serde(flatten)]
    pub import: ImportResult,
    #[serde(default)]
    pub generated_count: usize,
    #[serde(default)]
    pub cards: Vec<Map<String, Value>>,
    #[serde(default)]
    pub facts: Value,
    #[serde(default)]
    pub meta: GenerationMeta,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AiHealth {
    pub status: String,
    #[serde(default)]
    pub extract_model: Option<String>,
    #[serde(default)]
    pub generate_model: Option<String>,
    #[serde(default)]
    pub fix_model: Option<String>,
}

/// A content item with its cards, as accepted by `POST /import/json` and the
/// exported `contents.json`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ImportPayload {
    pub title: String,
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
    #[serde(default)]
    pub cards: Vec<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ImportResult {
    pub content_id: i64,
    #[serde(default)]
    pub highlight_ids: Vec<i64>,
    #[serde(default)]
    pub quiz_ids: Vec<i64>,
    #[serde(default)]
    pub counts: BTreeMap<String, i64>,
}

/// `POST /import/json` answers with one result or a list, mirroring the body.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportOutcome {
    One(ImportResult),
    Many(Vec<ImportResult>),
}

impl ImportOutcome {
    pub fn into_vec(self) -> Vec<ImportResult> {
        match self {
            ImportOutcome::One(result) => vec![result],
            ImportOutcome::Many(results) => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_generate_request_wire_shape() -> Fallible<()> {
        let request = GenerateRequest {
            content: "text".to_string(),
            types: vec![QuizType::Mcq, QuizType::Match],
            difficulty: Difficulty::Hard,
            ..GenerateRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "content": "text",
                "highlights": [],
                "types": ["MCQ", "MATCH"],
                "difficulty": "hard",
                "no_cache": false,
                "focus_mode": "highlight"
            })
        );
        Ok(())
    }

    #[test]
    fn test_import_outcome_accepts_both_shapes() -> Fallible<()> {
        let one: ImportOutcome = serde_json::from_value(json!({
            "content_id": 1, "highlight_ids": [], "quiz_ids": [4, 5], "counts": {"quizzes": 2}
        }))?;
        assert_eq!(one.into_vec().len(), 1);
        let many: ImportOutcome = serde_json::from_value(json!([
            {"content_id": 1, "highlight_ids": [], "quiz_ids": [], "counts": {}},
            {"content_id": 2, "highlight_ids": [], "quiz_ids": [], "counts": {}}
        ]))?;
        let results = many.into_vec();
        assert_eq!(results[1].content_id, 2);
        Ok(())
    }

    #[test]
    fn test_generate_and_import_flattens_import_fields() -> Fallible<()> {
        let request = GenerateAndImportRequest {
            import: ImportPayload {
                title: "T".to_string(),
                content: "C".to_string(),
                ..ImportPayload::default()
            },
            upsert: true,
            ..GenerateAndImportRequest::default()
        };
        let value = serde_json::to_value(&request)?;
        assert_eq!(value["title"], json!("T"));
        assert_eq!(value["upsert"], json!(true));
        Ok(())
    }
}
