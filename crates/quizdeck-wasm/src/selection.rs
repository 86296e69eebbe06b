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

use wasm_bindgen::prelude::*;

use quizdeck_core::QuizType;
use quizdeck_core::forms::highlights::HighlightSelection;

/// The generation screen's keyword picker.
#[wasm_bindgen]
pub struct KeywordSelection {
    inner: HighlightSelection,
}

#[wasm_bindgen]
impl KeywordSelection {
    /// `available_json` is a JSON array of strings.
    #[wasm_bindgen(constructor)]
    pub fn new(available_json: &str) -> Result<KeywordSelection, JsValue> {
        let available: Vec<String> = serde_json::from_str(available_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse keywords: {}", e)))?;
        Ok(Self {
            inner: HighlightSelection::new(available),
        })
    }

    /// Returns whether `entry` is now selected, or nothing if it is not on
    /// offer.
    #[wasm_bindgen]
    pub fn toggle(&mut self, entry: &str) -> Option<bool> {
        self.inner.toggle(entry)
    }

    #[wasm_bindgen]
    pub fn select_all(&mut self) {
        self.inner.select_all();
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Selected entries as a JSON array, in the order they were offered.
    #[wasm_bindgen]
    pub fn selected(&self) -> String {
        serde_json::to_string(&self.inner.selected()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen]
    pub fn selected_count(&self) -> usize {
        self.inner.selected_count()
    }

    /// Fails with the message to show when the selection cannot be used for
    /// `types_json`, a JSON array of quiz types. An empty array means every
    /// type.
    #[wasm_bindgen]
    pub fn validate(&self, types_json: &str) -> Result<(), JsValue> {
        let types: Vec<QuizType> = serde_json::from_str(types_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse quiz types: {}", e)))?;
        let types = if types.is_empty() {
            QuizType::ALL.to_vec()
        } else {
            types
        };
        self.inner
            .validate_for(&types)
            .map_err(|e| JsValue::from_str(e.message()))
    }
}
