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

use quizdeck_core::types::ai::ImportOutcome;
use quizdeck_core::types::ai::ImportPayload;
use reqwest::Method;
use reqwest::multipart::Form;

use crate::client::ApiClient;
use crate::client::ApiResult;
use crate::client::Upload;

impl ApiClient {
    /// `POST /import/json` with a single payload.
    pub async fn import_one(&self, payload: &ImportPayload) -> ApiResult<ImportOutcome> {
        self.post("/import/json", payload).await
    }

    /// `POST /import/json` with a list of payloads. Answers with one result
    /// per payload, in order.
    pub async fn import_many(&self, payloads: &[ImportPayload]) -> ApiResult<ImportOutcome> {
        self.post("/import/json", payloads).await
    }

    /// `POST /import/json-file`: let the server parse an uploaded document,
    /// either one payload or a list.
    pub async fn import_file(&self, file: Upload) -> ApiResult<ImportOutcome> {
        let form = Form::new().part("file", file.into_part()?);
        let builder = self
            .request(Method::POST, "/import/json-file")
            .multipart(form);
        self.send(builder).await
    }
}
