//! Translation endpoints

use edu_core::Result;
use edu_core::model::{
    EducationalContentRequest, LanguageList, QuizTranslateRequest, TranslateRequest,
    TranslatedContent, TranslatedQuiz, Translation,
};

use crate::client::ApiClient;

/// `/api/translation/*`
#[derive(Clone, Copy, Debug)]
pub struct TranslationApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TranslationApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn translate(&self, request: &TranslateRequest) -> Result<Translation> {
        self.client.post("/api/translation/translate", request).await
    }

    pub async fn languages(&self) -> Result<LanguageList> {
        self.client.get("/api/translation/languages").await
    }

    pub async fn educational_content(
        &self,
        request: &EducationalContentRequest,
    ) -> Result<TranslatedContent> {
        self.client
            .post("/api/translation/educational-content", request)
            .await
    }

    pub async fn quiz(&self, request: &QuizTranslateRequest) -> Result<TranslatedQuiz> {
        self.client.post("/api/translation/quiz-translate", request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use edu_core::MemoryAuthStore;
    use edu_core::model::Question;
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::transport::MockTransport;

    #[tokio::test]
    async fn test_translation_routes() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::POST, "/api/translation/translate", 200, json!({ "translatedText": "hola" }))
                .respond(Method::GET, "/api/translation/languages", 200, json!({ "languages": { "en": "English", "es": "Spanish" } }))
                .respond(Method::POST, "/api/translation/educational-content", 200, json!({ "translatedContent": "contenido" }))
                .respond(Method::POST, "/api/translation/quiz-translate", 200, json!({ "translatedQuestions": [{ "question": "¿Qué?", "options": ["a"] }] })),
        );
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryAuthStore::new()));
        let translation = client.translation();

        let text = translation
            .translate(&TranslateRequest {
                text: "hello".into(),
                from_lang: "en".into(),
                to_lang: "es".into(),
            })
            .await
            .unwrap();
        assert_eq!(text.translated_text, "hola");
        assert_eq!(
            transport.last_request().unwrap().body,
            Some(json!({ "text": "hello", "fromLang": "en", "toLang": "es" }))
        );

        let languages = translation.languages().await.unwrap();
        assert_eq!(languages.languages.get("es").map(String::as_str), Some("Spanish"));

        let content = translation
            .educational_content(&EducationalContentRequest {
                content: "content".into(),
                content_type: "text".into(),
                from_lang: "en".into(),
                to_lang: "es".into(),
            })
            .await
            .unwrap();
        assert_eq!(content.translated_content, "contenido");

        let quiz = translation
            .quiz(&QuizTranslateRequest {
                questions: vec![Question {
                    question: "What?".into(),
                    options: vec!["a".into()],
                    ..Question::default()
                }],
                from_lang: "en".into(),
                to_lang: "es".into(),
            })
            .await
            .unwrap();
        assert_eq!(quiz.translated_questions[0].question, "¿Qué?");
        assert_eq!(transport.requests().len(), 4);
    }
}
