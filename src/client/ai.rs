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

use quizdeck_core::types::ai::AiHealth;
use quizdeck_core::types::ai::GenerateAndImportRequest;
use quizdeck_core::types::ai::GenerateAndImportResponse;
use quizdeck_core::types::ai::GenerateRequest;
use quizdeck_core::types::ai::GenerateResponse;

use crate::client::ApiClient;
use crate::client::ApiResult;

impl ApiClient {
    /// `GET /ai/health`.
    pub async fn ai_health(&self) -> ApiResult<AiHealth> {
        self.get("/ai/health").await
    }

    /// `POST /ai/generate`: generate cards without storing anything.
    pub async fn generate(&self, request: &GenerateRequest) -> ApiResult<GenerateResponse> {
        self.post("/ai/generate", request).await
    }

    /// `POST /ai/generate-and-import`: generate cards and store them with the
    /// content in one call.
    pub async fn generate_and_import(
        &self,
        request: &GenerateAndImportRequest,
    ) -> ApiResult<GenerateAndImportResponse> {
        self.post("/ai/generate-and-import", request).await
    }
}
