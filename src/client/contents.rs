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

use quizdeck_core::Card;
use quizdeck_core::normalize_cards;
use quizdeck_core::types::content::Content;
use quizdeck_core::types::content::ContentQuery;
use quizdeck_core::types::content::ContentUpdate;
use quizdeck_core::types::page::Page;
use quizdeck_core::types::page::PageQuery;
use quizdeck_core::types::quiz::Quiz;
use quizdeck_core::types::quiz::QuizDraft;
use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::client::ApiError;
use crate::client::ApiResult;

impl ApiClient {
    /// `GET /contents`.
    pub async fn list_contents(&self, query: &ContentQuery) -> ApiResult<Page<Content>> {
        self.get_with("/contents", query).await
    }

    /// `GET /contents/{id}`.
    pub async fn get_content(&self, id: i64) -> ApiResult<Content> {
        self.get(&format!("/contents/{id}")).await
    }

    /// `PATCH /contents/{id}`.
    pub async fn update_content(&self, id: i64, update: &ContentUpdate) -> ApiResult<Content> {
        self.patch(&format!("/contents/{id}"), update).await
    }

    /// `DELETE /contents/{id}`. Cascades to the content's quizzes.
    pub async fn delete_content(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/contents/{id}")).await
    }

    /// `GET /contents/{id}/quizzes`.
    pub async fn content_quizzes(&self, id: i64, query: &PageQuery) -> ApiResult<Page<Quiz>> {
        self.get_with(&format!("/contents/{id}/quizzes"), query)
            .await
    }

    /// `GET /contents/{id}/cards`, flattened into [`Card`]s whatever shape
    /// the server answers with.
    pub async fn content_cards(&self, id: i64) -> ApiResult<Vec<Card>> {
        let raw: Value = self.get(&format!("/contents/{id}/cards")).await?;
        normalize_cards(raw).map_err(|e| ApiError::Decode(e.message().to_string()))
    }

    /// `POST /contents/{id}/quizzes`.
    pub async fn create_content_quiz(&self, id: i64, draft: &QuizDraft) -> ApiResult<Quiz> {
        self.post(&format!("/contents/{id}/quizzes"), draft).await
    }

    /// `GET /contents/export`: the visible contents with their quizzes, as the
    /// raw JSON document the server offers for download.
    pub async fn export_contents(&self) -> ApiResult<Vec<u8>> {
        self.send_bytes(self.request(Method::GET, "/contents/export"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::Json;
    use axum::Router;
    use axum::extract::Path;
    use axum::extract::Query;
    use axum::routing::get;
    use quizdeck_core::Fallible;
    use quizdeck_core::QuizType;
    use serde_json::json;

    use super::*;
    use crate::testing::CREATED_AT;
    use crate::testing::content_json;
    use crate::testing::quiz_json;
    use crate::testing::serve;

    fn app() -> Router {
        Router::new()
            .route(
                "/contents",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    let title = format!("search:{}", params.get("q").cloned().unwrap_or_default());
                    let size: u32 = params
                        .get("size")
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(20);
                    Json(json!({
                        "items": [content_json(1, &title)],
                        "meta": {"page": 1, "size": size, "total": 12}
                    }))
                }),
            )
            .route(
                "/contents/{id}/cards",
                get(|Path(id): Path<i64>| async move {
                    if id == 1 {
                        Json(json!({"cards": [{
                            "id": 10,
                            "type": "MCQ",
                            "content_id": 1,
                            "created_at": CREATED_AT,
                            "question": "Who created Hangul?",
                            "options": ["Sejong", "Taejo"],
                            "answer_index": 0
                        }]}))
                    } else {
                        Json(json!([quiz_json(20, id)]))
                    }
                }),
            )
            .route(
                "/contents/export",
                get(|| async { "[{\"title\": \"Joseon\"}]" }),
            )
    }

    #[tokio::test]
    async fn test_list_contents_sends_query() -> Fallible<()> {
        let client = serve(app()).await?;
        let query = ContentQuery {
            q: Some("joseon".to_string()),
            size: Some(5),
            ..ContentQuery::default()
        };
        let page = client.list_contents(&query).await?;
        assert_eq!(page.items[0].title, "search:joseon");
        assert_eq!(page.meta.size, 5);
        assert!(page.has_next());
        let page = client.list_contents(&ContentQuery::default()).await?;
        assert_eq!(page.meta.size, 20);
        assert!(!page.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn test_content_cards_flat_shape() -> Fallible<()> {
        let client = serve(app()).await?;
        let cards = client.content_cards(1).await?;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, Some(10));
        assert_eq!(cards[0].quiz_type, Some(QuizType::Mcq));
        assert_eq!(cards[0].fields["question"], "Who created Hangul?");
        Ok(())
    }

    #[tokio::test]
    async fn test_content_cards_nested_payload_shape() -> Fallible<()> {
        let client = serve(app()).await?;
        let cards = client.content_cards(7).await?;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, Some(20));
        assert_eq!(cards[0].content_id, Some(7));
        assert_eq!(cards[0].quiz_type, Some(QuizType::Ox));
        assert_eq!(cards[0].fields["answer"], true);
        assert!(!cards[0].fields.contains_key("payload"));
        Ok(())
    }

    #[tokio::test]
    async fn test_export_returns_raw_bytes() -> Fallible<()> {
        let client = serve(app()).await?;
        let bytes = client.export_contents().await?;
        assert_eq!(bytes, b"[{\"title\": \"Joseon\"}]");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_content_is_not_found() -> Fallible<()> {
        let client = serve(app()).await?;
        let err = client.get_content(99).await.unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }
}
