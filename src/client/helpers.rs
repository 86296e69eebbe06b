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

use quizdeck_core::types::helper::HelperCreate;
use quizdeck_core::types::helper::HelperUpdate;
use quizdeck_core::types::helper::HelperVariant;
use quizdeck_core::types::helper::LearningHelper;
use quizdeck_core::types::page::Items;
use reqwest::Method;
use reqwest::multipart::Form;

use crate::client::ApiClient;
use crate::client::ApiResult;
use crate::client::Upload;

impl ApiClient {
    /// `GET /helpers`. With an API key, each helper's `unlocked` flag reflects
    /// the caller's level.
    pub async fn list_helpers(&self) -> ApiResult<Vec<LearningHelper>> {
        let page: Items<LearningHelper> = self.get("/helpers").await?;
        Ok(page.items)
    }

    /// `GET /helpers/{id}`.
    pub async fn get_helper(&self, id: i64) -> ApiResult<LearningHelper> {
        self.get(&format!("/helpers/{id}")).await
    }

    /// `POST /helpers`.
    pub async fn create_helper(&self, helper: &HelperCreate) -> ApiResult<LearningHelper> {
        self.post("/helpers", helper).await
    }

    /// `PATCH /helpers/{id}`.
    pub async fn update_helper(&self, id: i64, update: &HelperUpdate) -> ApiResult<LearningHelper> {
        self.patch(&format!("/helpers/{id}"), update).await
    }

    /// `DELETE /helpers/{id}`.
    pub async fn delete_helper(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/helpers/{id}")).await
    }

    /// `POST /helpers/{id}/upload`: replace one variant's image.
    pub async fn upload_helper_image(
        &self,
        id: i64,
        variant: HelperVariant,
        image: Upload,
    ) -> ApiResult<LearningHelper> {
        let form = Form::new()
            .text("variant", variant.as_str())
            .part("file", image.into_part()?);
        let builder = self
            .request(Method::POST, &format!("/helpers/{id}/upload"))
            .multipart(form);
        self.send(builder).await
    }

    /// URL of `GET /helpers/{id}/image/{variant}`, for use as an image
    /// source. The endpoint is public.
    pub fn helper_image_url(&self, id: i64, variant: HelperVariant) -> String {
        self.url(&format!("/helpers/{id}/image/{variant}"))
    }
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::Router;
    use axum::extract::Multipart;
    use axum::extract::Path;
    use axum::routing::get;
    use axum::routing::post;
    use quizdeck_core::Fallible;
    use serde_json::Value;
    use serde_json::json;

    use super::*;
    use crate::testing::helper_json;
    use crate::testing::serve;

    async fn upload(Path(id): Path<i64>, mut multipart: Multipart) -> Json<Value> {
        let mut variant = String::new();
        let mut file_name = String::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "variant" => variant = field.text().await.unwrap(),
                "file" => file_name = field.file_name().unwrap_or_default().to_string(),
                _ => {}
            }
        }
        let mut helper = helper_json(id, "Owl", 1);
        helper["variants"][variant.as_str()] = json!(file_name);
        Json(helper)
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/helpers",
                get(|| async {
                    Json(json!({"items": [helper_json(1, "Owl", 1), helper_json(2, "Fox", 3)]}))
                }),
            )
            .route("/helpers/{id}/upload", post(upload))
    }

    #[tokio::test]
    async fn test_list_helpers_unwraps_items() -> Fallible<()> {
        let client = serve(app()).await?;
        let helpers = client.list_helpers().await?;
        assert_eq!(helpers.len(), 2);
        assert!(helpers[0].unlocked);
        assert!(!helpers[1].is_unlocked_at(2));
        assert!(helpers[1].is_unlocked_at(3));
        Ok(())
    }

    #[tokio::test]
    async fn test_upload_helper_image_sends_variant() -> Fallible<()> {
        let client = serve(app()).await?;
        let image = Upload::from_file_name("fox_correct.png", vec![0x89, 0x50, 0x4e, 0x47]);
        let helper = client
            .upload_helper_image(2, HelperVariant::Correct, image)
            .await?;
        assert_eq!(helper.variants.get(HelperVariant::Correct), Some("fox_correct.png"));
        Ok(())
    }

    #[test]
    fn test_helper_image_url() {
        let client = ApiClient::new("https://quiz.example.com/");
        assert_eq!(
            client.helper_image_url(4, HelperVariant::Incorrect),
            "https://quiz.example.com/helpers/4/image/incorrect"
        );
    }
}
