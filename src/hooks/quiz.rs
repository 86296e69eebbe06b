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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use quizdeck_core::levels::is_max_level;
use quizdeck_core::levels::level_from_points;
use quizdeck_core::levels::points_to_next_level;
use quizdeck_core::types::quiz::QuizSubmission;
use quizdeck_core::types::quiz::QuizSubmitResult;
use quizdeck_core::types::user::UserProfile;
use tokio::spawn;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::client::ApiResult;

/// Where the signed-in user's standing lives.
pub trait AuthContext: Send + Sync + 'static {
    /// Apply the points and level from a submission.
    fn update_points(&self, result: &QuizSubmitResult);

    /// Replace the profile with a fresh copy from the server.
    fn replace_profile(&self, profile: UserProfile);
}

/// Submits answers and keeps the auth context's points in step.
pub struct QuizSubmitter<A: AuthContext> {
    client: ApiClient,
    auth: Arc<A>,
    refresh: Option<JoinHandle<()>>,
}

impl<A: AuthContext> QuizSubmitter<A> {
    pub fn new(client: ApiClient, auth: Arc<A>) -> Self {
        Self {
            client,
            auth,
            refresh: None,
        }
    }

    /// `POST /quizzes/submit`. On success the auth context gets the new
    /// points at once, and a profile refresh runs in the background.
    pub async fn submit(&mut self, quiz_id: i64, is_correct: bool) -> ApiResult<QuizSubmitResult> {
        let submission = QuizSubmission {
            quiz_id,
            is_correct,
        };
        let result = self.client.submit_quiz(&submission).await?;
        if result.leveled_up {
            log::info!("Level up: {:?}", result.level);
        }
        self.auth.update_points(&result);
        self.refresh = Some(self.spawn_refresh());
        Ok(result)
    }

    fn spawn_refresh(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        let auth = Arc::clone(&self.auth);
        spawn(async move {
            match client.me().await {
                Ok(profile) => auth.replace_profile(profile),
                Err(e) => log::warn!("Profile refresh failed: {e}"),
            }
        })
    }

    /// Wait for the last background profile refresh, if any.
    pub async fn wait_for_refresh(&mut self) {
        if let Some(handle) = self.refresh.take() {
            if let Err(e) = handle.await {
                log::warn!("Profile refresh task failed: {e}");
            }
        }
    }
}

/// An in-memory [`AuthContext`].
#[derive(Default)]
pub struct SharedProfile {
    profile: Mutex<Option<UserProfile>>,
}

impl SharedProfile {
    pub fn new(profile: Option<UserProfile>) -> Self {
        Self {
            profile: Mutex::new(profile),
        }
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.profile
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuthContext for SharedProfile {
    fn update_points(&self, result: &QuizSubmitResult) {
        let mut slot = self.profile.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(profile) = slot.as_mut() else {
            return;
        };
        if let Some(points) = result.points {
            profile.points = points;
        }
        profile.level = result.level.unwrap_or_else(|| level_from_points(profile.points));
        profile.points_to_next_level = result
            .points_to_next_level
            .unwrap_or_else(|| points_to_next_level(profile.points, profile.level));
        profile.is_max_level = is_max_level(profile.level);
    }

    fn replace_profile(&self, profile: UserProfile) {
        let mut slot = self.profile.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(profile);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicI64;
    use std::sync::atomic::Ordering;

    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::routing::post;
    use quizdeck_core::Fallible;
    use serde_json::Value;
    use serde_json::json;

    use super::*;
    use crate::testing::profile_json;
    use crate::testing::serve;

    /// A server that awards 10 points per correct answer, starting at 95.
    fn app() -> Router {
        let points = Arc::new(AtomicI64::new(95));
        let submit_points = Arc::clone(&points);
        Router::new()
            .route(
                "/quizzes/submit",
                post(move |Json(body): Json<Value>| {
                    let points = Arc::clone(&submit_points);
                    async move {
                        if body["quiz_id"] == 404 {
                            return (
                                StatusCode::NOT_FOUND,
                                Json(json!({"detail": "Quiz not found"})),
                            );
                        }
                        let before = points.load(Ordering::SeqCst);
                        let after = if body["is_correct"] == true {
                            points.fetch_add(10, Ordering::SeqCst) + 10
                        } else {
                            before
                        };
                        let level = level_from_points(after);
                        (
                            StatusCode::OK,
                            Json(json!({
                                "success": true,
                                "points": after,
                                "level": level,
                                "leveled_up": level > level_from_points(before),
                                "points_to_next_level": points_to_next_level(after, level)
                            })),
                        )
                    }
                }),
            )
            .route(
                "/users/me",
                get(move || {
                    let points = Arc::clone(&points);
                    async move {
                        let current = points.load(Ordering::SeqCst);
                        Json(profile_json(current, level_from_points(current)))
                    }
                }),
            )
    }

    #[tokio::test]
    async fn test_submit_updates_points_then_profile() -> Fallible<()> {
        let client = serve(app()).await?;
        let auth = Arc::new(SharedProfile::new(Some(serde_json::from_value(
            profile_json(95, 1),
        )?)));
        let mut submitter = QuizSubmitter::new(client, Arc::clone(&auth));

        let result = submitter.submit(3, true).await?;
        assert_eq!(result.points, Some(105));
        assert!(result.leveled_up);
        assert_eq!(result.extra["success"], true);

        let profile = auth.profile().unwrap();
        assert_eq!(profile.points, 105);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.points_to_next_level, 95);

        submitter.wait_for_refresh().await;
        let profile = auth.profile().unwrap();
        assert_eq!(profile.points, 105);
        assert_eq!(profile.email, "learner@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_profile_alone() -> Fallible<()> {
        let client = serve(app()).await?;
        let auth = Arc::new(SharedProfile::new(Some(serde_json::from_value(
            profile_json(95, 1),
        )?)));
        let mut submitter = QuizSubmitter::new(client, Arc::clone(&auth));

        let err = submitter.submit(404, true).await.unwrap_err();
        assert_eq!(err.user_message(), "Quiz not found");
        submitter.wait_for_refresh().await;
        assert_eq!(auth.profile().unwrap().points, 95);
        Ok(())
    }

    #[test]
    fn test_update_points_without_profile_is_a_no_op() {
        let auth = SharedProfile::default();
        auth.update_points(&QuizSubmitResult {
            points: Some(10),
            ..QuizSubmitResult::default()
        });
        assert_eq!(auth.profile(), None);
    }
}
