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

use serde::Deserialize;
use serde::Serialize;

use crate::types::helper::LearningHelper;
use crate::types::timestamp::Timestamp;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub points: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default = "default_points_to_next_level")]
    pub points_to_next_level: i64,
    #[serde(default)]
    pub is_max_level: bool,
    #[serde(default)]
    pub selected_helper_id: Option<i64>,
    #[serde(default)]
    pub selected_helper: Option<LearningHelper>,
}

fn default_level() -> i64 {
    1
}

fn default_points_to_next_level() -> i64 {
    100
}

/// Returned by registration, login and password change.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub api_key: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Body of `PATCH /users/me/helper`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HelperSelection {
    pub helper_id: i64,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AdminUserCreate {
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}
