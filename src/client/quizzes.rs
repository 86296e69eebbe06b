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

use quizdeck_core::types::page::Page;
use quizdeck_core::types::quiz::Quiz;
use quizdeck_core::types::quiz::QuizDraft;
use quizdeck_core::types::quiz::QuizQuery;
use quizdeck_core::types::quiz::QuizSubmission;
use quizdeck_core::types::quiz::QuizSubmitResult;

use crate::client::ApiClient;
use crate::client::ApiResult;

impl ApiClient {
    /// `GET /quizzes`.
    pub async fn list_quizzes(&self, query: &QuizQuery) -> ApiResult<Page<Quiz>> {
        self.get_with("/quizzes", query).await
    }

    /// `POST /quizzes`. Prefer [`ApiClient::create_content_quiz`], which ties
    /// the quiz to a content item.
    pub async fn create_quiz(&self, draft: &QuizDraft) -> ApiResult<Quiz> {
        self.post("/quizzes", draft).await
    }

    /// `GET /quizzes/{id}`.
    pub async fn get_quiz(&self, id: i64) -> ApiResult<Quiz> {
        self.get(&format!("/quizzes/{id}")).await
    }

    /// `PATCH /quizzes/{id}`.
    pub async fn update_quiz(&self, id: i64, draft: &QuizDraft) -> ApiResult<Quiz> {
        self.patch(&format!("/quizzes/{id}"), draft).await
    }

    /// `DELETE /quizzes/{id}`.
    pub async fn delete_quiz(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/quizzes/{id}")).await
    }

    /// `POST /quizzes/submit`. Correct answers earn points server-side.
    pub async fn submit_quiz(&self, submission: &QuizSubmission) -> ApiResult<QuizSubmitResult> {
        self.post("/quizzes/submit", submission).await
    }
}
