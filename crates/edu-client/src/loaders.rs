//! Page Loaders
//!
//! Views that need two reads issue them concurrently and render once both
//! arrive. Either failure fails the load; there is no ordering between the
//! two requests.

use edu_core::Result;
use edu_core::model::{Quiz, QuizAnalytics, Recommendations};

use crate::client::ApiClient;

/// How many quizzes the dashboard shows
pub const RECENT_QUIZ_COUNT: usize = 3;

/// Data behind the learner dashboard
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub recommendations: Recommendations,
    pub recent_quizzes: Vec<Quiz>,
}

impl DashboardData {
    pub async fn load(client: &ApiClient) -> Result<Self> {
        let learning = client.learning();
        let quizzes = client.quizzes();

        let (recommendations, mut recent_quizzes) =
            futures::try_join!(learning.recommendations(), quizzes.list())?;
        recent_quizzes.truncate(RECENT_QUIZ_COUNT);

        Ok(Self {
            recommendations,
            recent_quizzes,
        })
    }
}

/// Data behind the quiz overview page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizOverview {
    pub quizzes: Vec<Quiz>,
    pub analytics: QuizAnalytics,
}

impl QuizOverview {
    pub async fn load(client: &ApiClient) -> Result<Self> {
        let quizzes = client.quizzes();
        let (list, analytics) = futures::try_join!(quizzes.list(), quizzes.analytics())?;

        Ok(Self {
            quizzes: list,
            analytics,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use edu_core::{ClientError, MemoryAuthStore};
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::transport::MockTransport;

    fn quiz_list(n: usize) -> serde_json::Value {
        (0..n).map(|i| json!({ "_id": format!("q{i}") })).collect()
    }

    #[tokio::test]
    async fn test_dashboard_keeps_three_recent_quizzes() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::GET, "/api/learning/recommendations", 200, json!({ "nextTopics": ["Vectors"], "studyMethods": [] }))
                .respond(Method::GET, "/api/quizzes", 200, quiz_list(5)),
        );
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryAuthStore::with_token("t")));

        let data = DashboardData::load(&client).await.unwrap();

        assert_eq!(data.recommendations.next_topics, vec!["Vectors".to_string()]);
        let ids: Vec<&str> = data.recent_quizzes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["q0", "q1", "q2"]);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_dashboard_fails_if_either_read_fails() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::GET, "/api/learning/recommendations", 500, json!({ "error": "boom" }))
                .respond(Method::GET, "/api/quizzes", 200, quiz_list(1)),
        );
        let client = ApiClient::new(transport, Arc::new(MemoryAuthStore::with_token("t")));

        let err = DashboardData::load(&client).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_quiz_overview() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::GET, "/api/quizzes", 200, quiz_list(4))
                .respond(Method::GET, "/api/quizzes/analytics/overview", 200, json!({ "totalQuizzes": 4, "averageScore": 80.0 })),
        );
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryAuthStore::with_token("t")));

        let overview = QuizOverview::load(&client).await.unwrap();
        assert_eq!(overview.quizzes.len(), 4);
        assert_eq!(overview.analytics.total_quizzes, 4);

        let mut paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        paths.sort();
        assert_eq!(paths, ["/api/quizzes", "/api/quizzes/analytics/overview"]);
    }
}
