//! Admin console endpoints

use edu_core::Result;
use edu_core::model::{Ack, AdminStats, LearningSession, Quiz, Role, RoleUpdate, User};

use crate::client::ApiClient;
use crate::endpoints::segment;

/// `/api/admin/*`
///
/// The backend enforces the admin role; these calls fail with a 403 for
/// anyone else.
#[derive(Clone, Copy, Debug)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<AdminStats> {
        self.client.get("/api/admin/stats").await
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.client.get("/api/admin/users").await
    }

    pub async fn user(&self, user_id: &str) -> Result<User> {
        self.client.get(&format!("/api/admin/users/{}", segment(user_id))).await
    }

    pub async fn update_user_role(&self, user_id: &str, role: Role) -> Result<User> {
        self.client
            .put(&format!("/api/admin/users/{}/role", segment(user_id)), &RoleUpdate { role })
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Ack> {
        self.client.delete(&format!("/api/admin/users/{}", segment(user_id))).await
    }

    pub async fn quizzes(&self) -> Result<Vec<Quiz>> {
        self.client.get("/api/admin/quizzes").await
    }

    pub async fn quiz(&self, quiz_id: &str) -> Result<Quiz> {
        self.client.get(&format!("/api/admin/quizzes/{}", segment(quiz_id))).await
    }

    pub async fn delete_quiz(&self, quiz_id: &str) -> Result<Ack> {
        self.client.delete(&format!("/api/admin/quizzes/{}", segment(quiz_id))).await
    }

    pub async fn sessions(&self) -> Result<Vec<LearningSession>> {
        self.client.get("/api/admin/sessions").await
    }

    pub async fn session(&self, session_id: &str) -> Result<LearningSession> {
        self.client.get(&format!("/api/admin/sessions/{}", segment(session_id))).await
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/api/admin/sessions/{}", segment(session_id)))
            .await
    }
}
