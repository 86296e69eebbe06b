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

use serde_json::Value;

use crate::client::ApiClient;
use crate::client::ApiResult;

// Card styles are passed through untyped.

impl ApiClient {
    /// `GET /card-styles`.
    pub async fn list_card_styles(&self) -> ApiResult<Value> {
        self.get("/card-styles").await
    }

    /// `GET /card-styles/default`.
    pub async fn default_card_style(&self) -> ApiResult<Value> {
        self.get("/card-styles/default").await
    }
}
