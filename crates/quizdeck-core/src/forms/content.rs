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
use crate::forms::required;
use crate::forms::tags::TagList;
use crate::forms::timeline::EraEditor;
use crate::forms::timeline::TimelineEditor;
use crate::types::ai::ImportPayload;
use crate::types::content::Chronology;
use crate::types::content::Content;
use crate::types::content::ContentUpdate;
use crate::types::content::Visibility;

/// Editable state of the content editor.
#[derive(Clone, Debug, Default)]
pub struct ContentForm {
    pub title: String,
    pub body: String,
    pub highlights: TagList,
    pub keywords: TagList,
    pub categories: TagList,
    pub timeline: TimelineEditor,
    pub eras: EraEditor,
    pub chronology: Option<Chronology>,
    pub visibility: Visibility,
}

impl ContentForm {
    /// Mirror a loaded content item into editable state.
    pub fn from_content(content: &Content) -> Self {
        Self {
            title: content.title.clone(),
            body: content.content.clone(),
            highlights: TagList::from_values(&content.highlights),
            keywords: TagList::from_values(&content.keywords),
            categories: TagList::from_values(&content.categories),
            timeline: TimelineEditor::new(content.timeline.clone()),
            eras: EraEditor::new(content.eras.clone()),
            chronology: content.chronology.clone(),
            visibility: content.visibility,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.title, "Enter a title.")?;
        required(&self.body, "Enter the content text.")?;
        Ok(())
    }

    /// Full update body for `PATCH /contents/{id}`.
    pub fn to_update(&self) -> Result<ContentUpdate, FormError> {
        self.validate()?;
        Ok(ContentUpdate {
            title: Some(self.title.trim().to_string()),
            content: Some(self.body.clone()),
            highlights: Some(self.highlights.as_slice().to_vec()),
            keywords: Some(self.keywords.as_slice().to_vec()),
            timeline: Some(self.timeline.entries().to_vec()),
            category: None,
            categories: Some(self.categories.as_slice().to_vec()),
            eras: Some(self.eras.entries().to_vec()),
            chronology: self.chronology.clone(),
            visibility: Some(self.visibility),
        })
    }

    /// Body for creating the content through `POST /import/json`.
    pub fn to_import(&self) -> Result<ImportPayload, FormError> {
        self.validate()?;
        Ok(ImportPayload {
            title: self.title.trim().to_string(),
            content: self.body.clone(),
            highlights: self.highlights.as_slice().to_vec(),
            keywords: self.keywords.as_slice().to_vec(),
            timeline: self.timeline.entries().to_vec(),
            categories: self.categories.as_slice().to_vec(),
            eras: self.eras.entries().to_vec(),
            cards: Vec::new(),
            visibility: Some(self.visibility),
        })
    }
}
