//! Quiz endpoints

use edu_core::Result;
use edu_core::model::{GeneratedQuiz, Quiz, QuizAnalytics, QuizRequest, QuizResult, QuizSubmission};

use crate::client::ApiClient;
use crate::endpoints::segment;

/// `/api/quizzes/*`
#[derive(Clone, Copy, Debug)]
pub struct QuizApi<'a> {
    client: &'a ApiClient,
}

impl<'a> QuizApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask the backend to generate a quiz
    pub async fn generate(&self, request: &QuizRequest) -> Result<GeneratedQuiz> {
        self.client.post("/api/quizzes/generate", request).await
    }

    /// Quizzes of the signed-in user, newest first
    pub async fn list(&self) -> Result<Vec<Quiz>> {
        self.client.get("/api/quizzes").await
    }

    pub async fn get(&self, quiz_id: &str) -> Result<Quiz> {
        self.client.get(&format!("/api/quizzes/{}", segment(quiz_id))).await
    }

    /// Submit an answer sheet; `None` entries are unanswered
    pub async fn submit(&self, quiz_id: &str, answers: Vec<Option<usize>>) -> Result<QuizResult> {
        self.client
            .post(&format!("/api/quizzes/{}/submit", segment(quiz_id)), &QuizSubmission { answers })
            .await
    }

    pub async fn analytics(&self) -> Result<QuizAnalytics> {
        self.client.get("/api/quizzes/analytics/overview").await
    }
}
