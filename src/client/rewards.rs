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

use quizdeck_core::types::page::Items;
use quizdeck_core::types::reward::Reward;
use quizdeck_core::types::reward::RewardCreate;
use quizdeck_core::types::reward::RewardUpdate;

use crate::client::ApiClient;
use crate::client::ApiResult;

impl ApiClient {
    /// `GET /rewards`.
    pub async fn list_rewards(&self) -> ApiResult<Vec<Reward>> {
        let page: Items<Reward> = self.get("/rewards").await?;
        Ok(page.items)
    }

    /// `POST /rewards`.
    pub async fn create_reward(&self, reward: &RewardCreate) -> ApiResult<Reward> {
        self.post("/rewards", reward).await
    }

    /// `PATCH /rewards/{id}`.
    pub async fn update_reward(&self, id: i64, update: &RewardUpdate) -> ApiResult<Reward> {
        self.patch(&format!("/rewards/{id}"), update).await
    }

    /// `DELETE /rewards/{id}`.
    pub async fn delete_reward(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/rewards/{id}")).await
    }
}
