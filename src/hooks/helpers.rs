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

use quizdeck_core::types::helper::LearningHelper;

use crate::client::ApiClient;

/// The helper list, fetched once and kept until [`LearningHelpers::refresh`].
pub struct LearningHelpers {
    client: ApiClient,
    helpers: Vec<LearningHelper>,
    loaded: bool,
    loading: bool,
    error: Option<String>,
}

impl LearningHelpers {
    /// Starts in the loading state; nothing is fetched until
    /// [`LearningHelpers::load`].
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            helpers: Vec::new(),
            loaded: false,
            loading: true,
            error: None,
        }
    }

    /// Fetch the list unless it is already cached.
    pub async fn load(&mut self) -> &[LearningHelper] {
        if !self.loaded {
            self.fetch().await;
        }
        &self.helpers
    }

    /// Drop the cached list and fetch it again.
    pub async fn refresh(&mut self) -> &[LearningHelper] {
        self.fetch().await;
        &self.helpers
    }

    async fn fetch(&mut self) {
        self.loading = true;
        match self.client.list_helpers().await {
            Ok(helpers) => {
                log::debug!("Loaded {} helpers", helpers.len());
                self.helpers = helpers;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Failed to load helpers: {e}");
                self.error = Some(e.user_message());
            }
        }
        self.loaded = true;
        self.loading = false;
    }

    pub fn helpers(&self) -> &[LearningHelper] {
        &self.helpers
    }

    /// Helpers a user of the given level may pick.
    pub fn unlocked_at(&self, level: i64) -> impl Iterator<Item = &LearningHelper> {
        self.helpers.iter().filter(move |h| h.is_unlocked_at(level))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
