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

//! The AI quiz generation screen.

use crate::forms::FormError;
use crate::forms::highlights::HighlightSelection;
use crate::forms::required;
use crate::forms::tags::TagList;
use crate::types::ai::Difficulty;
use crate::types::ai::FocusMode;
use crate::types::ai::GenerateAndImportRequest;
use crate::types::ai::GenerateRequest;
use crate::types::ai::ImportPayload;
use crate::types::content::Visibility;
use crate::types::quiz::QuizType;

#[derive(Clone, Debug, Default)]
pub struct GenerateForm {
    pub title: String,
    pub content: String,
    pub highlights: HighlightSelection,
    pub keywords: TagList,
    /// Requested types, in the order they were ticked. Empty means all.
    types: Vec<QuizType>,
    pub difficulty: Difficulty,
    pub focus_mode: FocusMode,
    pub no_cache: bool,
    pub upsert: bool,
    pub visibility: Option<Visibility>,
}

impl GenerateForm {
    pub fn new(content: impl Into<String>, highlights: Vec<String>) -> Self {
        Self {
            content: content.into(),
            highlights: HighlightSelection::new(highlights),
            ..Self::default()
        }
    }

    /// Tick or untick a type. Returns whether it is now requested.
    pub fn toggle_type(&mut self, quiz_type: QuizType) -> bool {
        if let Some(pos) = self.types.iter().position(|t| *t == quiz_type) {
            self.types.remove(pos);
            false
        } else {
            self.types.push(quiz_type);
            true
        }
    }

    /// Types the server will generate: the ticked ones, or all of them.
    pub fn effective_types(&self) -> Vec<QuizType> {
        if self.types.is_empty() {
            QuizType::ALL.to_vec()
        } else {
            self.types.clone()
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.content, "Enter the text to generate quizzes from.")?;
        self.highlights.validate_for(&self.effective_types())
    }

    pub fn to_request(&self) -> Result<GenerateRequest, FormError> {
        self.validate()?;
        Ok(GenerateRequest {
            content: self.content.clone(),
            highlights: self.highlights.selected(),
            types: self.types.clone(),
            difficulty: self.difficulty,
            no_cache: self.no_cache,
            focus_mode: self.focus_mode,
            timeline: None,
        })
    }

    /// Generate and store the result as a new content item in one call.
    pub fn to_import_request(&self) -> Result<GenerateAndImportRequest, FormError> {
        required(&self.title, "Enter a title.")?;
        self.validate()?;
        Ok(GenerateAndImportRequest {
            import: ImportPayload {
                title: self.title.trim().to_string(),
                content: self.content.clone(),
                highlights: self.highlights.selected(),
                keywords: self.keywords.as_slice().to_vec(),
                visibility: self.visibility,
                ..ImportPayload::default()
            },
            types: self.types.clone(),
            difficulty: self.difficulty,
            upsert: self.upsert,
            no_cache: self.no_cache,
            focus_mode: self.focus_mode,
        })
    }
}
