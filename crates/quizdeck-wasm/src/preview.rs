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

//! Object URLs for local image previews.

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;
use web_sys::File;
use web_sys::Url;

/// Owns the `blob:` URLs shown while images are picked but not uploaded,
/// one per named slot (`idle`, `front`, ...). A URL is revoked when its
/// slot is replaced or cleared, and all of them when the value is dropped
/// or freed from JavaScript.
#[wasm_bindgen]
#[derive(Default)]
pub struct PreviewUrls {
    urls: BTreeMap<String, String>,
}

#[wasm_bindgen]
impl PreviewUrls {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a URL for `file` in `slot` and return it.
    #[wasm_bindgen]
    pub fn set(&mut self, slot: &str, file: &File) -> Result<String, JsValue> {
        let url = Url::create_object_url_with_blob(file)?;
        if let Some(old) = self.urls.insert(slot.to_string(), url.clone()) {
            revoke(&old);
        }
        Ok(url)
    }

    #[wasm_bindgen]
    pub fn get(&self, slot: &str) -> Option<String> {
        self.urls.get(slot).cloned()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self, slot: &str) {
        if let Some(old) = self.urls.remove(slot) {
            revoke(&old);
        }
    }

    #[wasm_bindgen]
    pub fn clear_all(&mut self) {
        for url in std::mem::take(&mut self.urls).into_values() {
            revoke(&url);
        }
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Drop for PreviewUrls {
    fn drop(&mut self) {
        self.clear_all();
    }
}

fn revoke(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        web_sys::console::warn_2(&"Failed to revoke preview URL".into(), &e);
    }
}
