//! AI tutoring endpoints

use edu_core::Result;
use edu_core::model::{
    Ack, ChatReply, ChatRequest, LearningSession, Recommendations, StartSessionRequest,
    StartedSession,
};

use crate::client::ApiClient;
use crate::endpoints::segment;

/// `/api/learning/*`
#[derive(Clone, Copy, Debug)]
pub struct LearningApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LearningApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn start_session(&self, request: &StartSessionRequest) -> Result<StartedSession> {
        self.client.post("/api/learning/session/start", request).await
    }

    pub async fn recommendations(&self) -> Result<Recommendations> {
        self.client.get("/api/learning/recommendations").await
    }

    /// Send one message to the tutor
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.client.post("/api/learning/chat", request).await
    }

    pub async fn sessions(&self) -> Result<Vec<LearningSession>> {
        self.client.get("/api/learning/sessions").await
    }

    pub async fn end_session(&self, session_id: &str) -> Result<Ack> {
        self.client
            .put_empty(&format!("/api/learning/session/{}/end", segment(session_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use edu_core::MemoryAuthStore;
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::transport::MockTransport;

    #[tokio::test]
    async fn test_learning_routes() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::POST, "/api/learning/session/start", 200, json!({ "sessionId": "s1" }))
                .respond(Method::POST, "/api/learning/chat", 200, json!({ "response": "Let's begin." }))
                .respond(Method::GET, "/api/learning/sessions", 200, json!([])),
        );
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryAuthStore::with_token("t")));
        let learning = client.learning();

        let started = learning
            .start_session(&StartSessionRequest {
                subject: "Physics".into(),
                topic: "Optics".into(),
                learning_objectives: vec![],
            })
            .await
            .unwrap();
        assert_eq!(started.session_id, "s1");

        let reply = learning
            .chat(&ChatRequest {
                message: "What is refraction?".into(),
                session_id: Some(started.session_id.clone()),
                subject: "Physics".into(),
                topic: "Optics".into(),
            })
            .await
            .unwrap();
        assert_eq!(reply.response, "Let's begin.");

        assert!(learning.sessions().await.unwrap().is_empty());
        learning.recommendations().await.unwrap();
        learning.end_session("s1").await.unwrap();

        let sent: Vec<(Method, String)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            sent,
            vec![
                (Method::POST, "/api/learning/session/start".to_string()),
                (Method::POST, "/api/learning/chat".to_string()),
                (Method::GET, "/api/learning/sessions".to_string()),
                (Method::GET, "/api/learning/recommendations".to_string()),
                (Method::PUT, "/api/learning/session/s1/end".to_string()),
            ]
        );

        let requests = transport.requests();
        let chat = &requests[1];
        assert_eq!(
            chat.body,
            Some(json!({
                "message": "What is refraction?",
                "sessionId": "s1",
                "subject": "Physics",
                "topic": "Optics",
            }))
        );
        assert!(transport.last_request().unwrap().body.is_none());
    }

    #[tokio::test]
    async fn test_end_session_accepts_no_content() {
        let transport = Arc::new(MockTransport::new().respond_raw(
            Method::PUT,
            "/api/learning/session/s1/end",
            204,
            "",
        ));
        let client = ApiClient::new(transport, Arc::new(MemoryAuthStore::with_token("t")));

        let ack = client.learning().end_session("s1").await.unwrap();
        assert_eq!(ack.message, None);
    }
}
