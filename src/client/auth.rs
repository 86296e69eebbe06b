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

use quizdeck_core::types::user::AdminUserCreate;
use quizdeck_core::types::user::AuthResponse;
use quizdeck_core::types::user::Credentials;
use quizdeck_core::types::user::HelperSelection;
use quizdeck_core::types::user::PasswordChange;
use quizdeck_core::types::user::UserProfile;

use crate::client::ApiClient;
use crate::client::ApiResult;

impl ApiClient {
    /// `POST /users`. Does not store the returned key; callers decide with
    /// [`ApiClient::set_api_key`].
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.post("/users", credentials).await
    }

    /// `POST /auth/login`.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.post("/auth/login", credentials).await
    }

    /// `GET /users/me`.
    pub async fn me(&self) -> ApiResult<UserProfile> {
        self.get("/users/me").await
    }

    /// `POST /users/me/password`. The server rotates the API key.
    pub async fn change_password(&self, change: &PasswordChange) -> ApiResult<AuthResponse> {
        self.post("/users/me/password", change).await
    }

    /// `DELETE /users/me`.
    pub async fn delete_me(&self) -> ApiResult<()> {
        self.delete("/users/me").await
    }

    /// `PATCH /users/me/helper`. Fails with 403 if the helper is locked.
    pub async fn select_helper(&self, helper_id: i64) -> ApiResult<UserProfile> {
        self.patch("/users/me/helper", &HelperSelection { helper_id })
            .await
    }

    /// `GET /admin/users`.
    pub async fn admin_list_users(&self) -> ApiResult<Vec<UserProfile>> {
        self.get("/admin/users").await
    }

    /// `POST /admin/users`.
    pub async fn admin_create_user(&self, user: &AdminUserCreate) -> ApiResult<UserProfile> {
        self.post("/admin/users", user).await
    }
}
