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
use quizdeck_core::types::page::PageQuery;
use quizdeck_core::types::session::RewardAssignment;
use quizdeck_core::types::session::StudySession;
use quizdeck_core::types::session::StudySessionCreate;
use quizdeck_core::types::session::StudySessionUpdate;

use crate::client::ApiClient;
use crate::client::ApiResult;

impl ApiClient {
    /// `POST /study-sessions`. Fails with 403 if the chosen helper is locked.
    pub async fn create_session(&self, session: &StudySessionCreate) -> ApiResult<StudySession> {
        self.post("/study-sessions", session).await
    }

    /// `GET /study-sessions`: the caller's own sessions.
    pub async fn list_sessions(&self, query: &PageQuery) -> ApiResult<Page<StudySession>> {
        self.get_with("/study-sessions", query).await
    }

    /// `GET /study-sessions/{id}`.
    pub async fn get_session(&self, id: i64) -> ApiResult<StudySession> {
        self.get(&format!("/study-sessions/{id}")).await
    }

    /// `PATCH /study-sessions/{id}`.
    pub async fn update_session(
        &self,
        id: i64,
        update: &StudySessionUpdate,
    ) -> ApiResult<StudySession> {
        self.patch(&format!("/study-sessions/{id}"), update).await
    }

    /// `DELETE /study-sessions/{id}`.
    pub async fn delete_session(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/study-sessions/{id}")).await
    }

    /// `POST /study-sessions/{id}/rewards`.
    pub async fn add_session_reward(&self, id: i64, reward_id: i64) -> ApiResult<StudySession> {
        self.post(
            &format!("/study-sessions/{id}/rewards"),
            &RewardAssignment { reward_id },
        )
        .await
    }

    /// `GET /public/study-sessions`. Needs no API key.
    pub async fn list_public_sessions(
        &self,
        query: &PageQuery,
    ) -> ApiResult<Page<StudySession>> {
        self.get_with("/public/study-sessions", query).await
    }

    /// `GET /public/study-sessions/{id}`.
    pub async fn get_public_session(&self, id: i64) -> ApiResult<StudySession> {
        self.get(&format!("/public/study-sessions/{id}")).await
    }

    /// `GET /admin/study-sessions`: every user's sessions.
    pub async fn admin_list_sessions(&self, query: &PageQuery) -> ApiResult<Page<StudySession>> {
        self.get_with("/admin/study-sessions", query).await
    }

    /// `PATCH /admin/study-sessions/{id}`.
    pub async fn admin_update_session(
        &self,
        id: i64,
        update: &StudySessionUpdate,
    ) -> ApiResult<StudySession> {
        self.patch(&format!("/admin/study-sessions/{id}"), update)
            .await
    }

    /// `POST /admin/public-study-sessions`. The server forces `is_public`.
    pub async fn admin_create_public_session(
        &self,
        session: &StudySessionCreate,
    ) -> ApiResult<StudySession> {
        self.post("/admin/public-study-sessions", session).await
    }
}
