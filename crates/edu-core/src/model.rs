//! Backend Payloads
//!
//! Entities are defined and validated by the EduAgent backend. The client
//! models the fields it reads and keeps the rest in `extra`, so a value read
//! from the backend can be written back unchanged.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields the client does not model
pub type Extra = Map<String, Value>;

// ============================================================================
// Auth
// ============================================================================

/// Account role
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Learning goals are stored as a list by registration and as free text by
/// the profile editor; both shapes occur in the wild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LearningGoals {
    List(Vec<String>),
    Text(String),
}

impl fmt::Display for LearningGoals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(goals) => f.write_str(&goals.join(", ")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProfile {
    #[serde(default)]
    pub subjects: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<LearningGoals>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A platform account
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend document id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_profile: Option<LearningProfile>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    /// Account id, whichever key the backend used for it
    pub fn user_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.extra.get("id").and_then(Value::as_str))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Login form
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up form
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,

    /// Requested role; the backend decides whether to grant it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Provisioning code forwarded for server-side authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_profile: Option<LearningProfile>,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: None,
            admin_code: None,
            learning_profile: None,
        }
    }

    /// Administrator sign-up. The code is checked by the backend only.
    pub fn admin(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        admin_code: impl Into<String>,
    ) -> Self {
        Self {
            role: Some(Role::Admin),
            admin_code: Some(admin_code.into()),
            learning_profile: Some(LearningProfile {
                subjects: vec!["Administration".into()],
                current_level: Some("advanced".into()),
                learning_goals: Some(LearningGoals::List(vec![
                    "System administration".into(),
                    "User management".into(),
                ])),
                extra: Extra::new(),
            }),
            ..Self::new(username, email, password)
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("learning_profile", &self.learning_profile)
            .finish_non_exhaustive()
    }
}

/// Partial profile edit
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_profile: Option<LearningProfile>,
}

/// Login / registration reply
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// Learning
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub subject: String,
    pub topic: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedSession {
    pub session_id: String,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    pub subject: String,
    pub topic: String,
}

/// Tutor reply to a chat message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    /// Any role this client does not render specially, e.g. `system`
    #[serde(other)]
    Other,
}

/// A single turn of a tutoring conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,

    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// The account a quiz or session belongs to. Admin listings populate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    Id(String),
    User { username: String, email: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningSession {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Owner>,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub messages: Vec<ChatMessage>,

    /// Length of the session in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_start: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(default)]
    pub next_topics: Vec<String>,

    #[serde(default)]
    pub study_methods: Vec<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Quizzes
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Quiz generation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub subject: String,
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub learning_gaps: Vec<String>,
}

/// A multiple-choice question
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,

    #[serde(default)]
    pub options: Vec<String>,

    /// Index into `options`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(default)]
    pub learning_gaps: Vec<String>,

    #[serde(default)]
    pub completed: bool,

    /// Percentage, once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Owner>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Quiz {
    /// An answer sheet with every question unanswered
    pub fn blank_answers(&self) -> Vec<Option<usize>> {
        vec![None; self.questions.len()]
    }
}

/// Reply to a generation request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    pub quiz_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Answer sheet; unanswered questions are sent as `null`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<Option<usize>>,
}

/// Scored submission
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Percentage needed to pass a quiz
pub const PASS_MARK: u32 = 70;

impl QuizResult {
    /// Correct answers as a rounded percentage, falling back to the
    /// backend's own score
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> Option<u32> {
        match (self.correct_answers, self.total_questions) {
            (Some(correct), Some(total)) if total > 0 => Some((correct * 100 + total / 2) / total),
            _ => self.score.map(|score| score.clamp(0.0, 100.0).round() as u32),
        }
    }

    pub fn passed(&self) -> bool {
        self.percentage().is_some_and(|pct| pct >= PASS_MARK)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnalytics {
    #[serde(default)]
    pub total_quizzes: u64,

    #[serde(default)]
    pub average_score: f64,

    #[serde(default)]
    pub recent_performance: Vec<Value>,

    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Translation
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub from_lang: String,
    pub to_lang: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Supported languages, code to display name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageList {
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContentRequest {
    pub content: String,
    pub content_type: String,
    pub from_lang: String,
    pub to_lang: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedContent {
    pub translated_content: String,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTranslateRequest {
    pub questions: Vec<Question>,
    pub from_lang: String,
    pub to_lang: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedQuiz {
    #[serde(default)]
    pub translated_questions: Vec<Question>,

    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_quizzes: u64,
    #[serde(default)]
    pub total_sessions: u64,
    #[serde(default)]
    pub admin_users: u64,
    #[serde(default)]
    pub regular_users: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub role: Role,
}

/// Acknowledgement for mutations that return no entity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_keeps_unmodelled_fields() {
        let raw = json!({
            "_id": "65f0c1",
            "username": "ada",
            "email": "ada@example.com",
            "role": "admin",
            "learningProfile": { "subjects": ["Mathematics"], "learningGoals": "Pass calculus" },
            "createdAt": "2024-03-01T10:00:00.000Z",
        });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.user_id(), Some("65f0c1"));
        assert_eq!(
            user.learning_profile.as_ref().and_then(|p| p.learning_goals.clone()),
            Some(LearningGoals::Text("Pass calculus".into()))
        );

        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_user_id_falls_back_to_plain_id() {
        let user: User = serde_json::from_value(json!({ "id": "u1", "username": "bo" })).unwrap();
        assert_eq!(user.user_id(), Some("u1"));
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_quiz_with_populated_owner() {
        let quiz: Quiz = serde_json::from_value(json!({
            "_id": "q1",
            "title": "Algebra basics",
            "subject": "Mathematics",
            "topic": "Algebra",
            "difficulty": "hard",
            "questions": [
                { "question": "2 + x = 4", "options": ["1", "2", "3", "4"], "correctAnswer": 1 }
            ],
            "userId": { "username": "ada", "email": "ada@example.com" },
            "completed": false
        }))
        .unwrap();

        assert_eq!(quiz.difficulty, Difficulty::Hard);
        assert_eq!(quiz.questions[0].correct_answer, Some(1));
        assert_eq!(quiz.blank_answers(), vec![None]);
        assert!(matches!(quiz.user_id, Some(Owner::User { ref username, .. }) if username == "ada"));
    }

    #[test]
    fn test_session_with_unknown_message_role() {
        let sessions: Vec<LearningSession> = serde_json::from_value(json!([{
            "_id": "s1",
            "subject": "Physics",
            "topic": "Optics",
            "messages": [
                { "role": "system", "content": "You are a tutor", "timestamp": "2024-03-01T10:00:00Z" },
                { "role": "user", "content": "Hi", "timestamp": "2024-03-01T10:00:05Z" }
            ]
        }]))
        .unwrap();

        let roles: Vec<MessageRole> = sessions[0].messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [MessageRole::Other, MessageRole::User]);
    }

    #[test]
    fn test_answer_sheet_tracks_progress() {
        let quiz = Quiz {
            questions: vec![Question::default(), Question::default(), Question::default()],
            ..Quiz::default()
        };

        let mut sheet = quiz.blank_answers();
        assert_eq!(crate::validation::unanswered(&sheet), 3);

        sheet[0] = Some(1);
        sheet[2] = Some(0);
        assert_eq!(crate::validation::unanswered(&sheet), 1);
        assert_eq!(
            serde_json::to_value(QuizSubmission { answers: sheet }).unwrap(),
            json!({ "answers": [1, null, 0] })
        );
    }

    #[test]
    fn test_result_percentage_and_pass_mark() {
        let result: QuizResult =
            serde_json::from_value(json!({ "correctAnswers": 7, "totalQuestions": 10, "results": [] })).unwrap();
        assert_eq!(result.percentage(), Some(70));
        assert!(result.passed());

        let result = QuizResult { correct_answers: Some(2), total_questions: Some(3), ..QuizResult::default() };
        assert_eq!(result.percentage(), Some(67));
        assert!(!result.passed());
    }

    #[test]
    fn test_result_percentage_falls_back_to_score() {
        let result = QuizResult { score: Some(85.4), total_questions: Some(0), ..QuizResult::default() };
        assert_eq!(result.percentage(), Some(85));
        assert_eq!(QuizResult::default().percentage(), None);
        assert!(!QuizResult::default().passed());
    }

    #[test]
    fn test_unanswered_questions_serialize_as_null() {
        let sheet = QuizSubmission { answers: vec![Some(2), None, Some(0)] };
        assert_eq!(serde_json::to_value(&sheet).unwrap(), json!({ "answers": [2, null, 0] }));
    }

    #[test]
    fn test_admin_registration_forwards_code() {
        let reg = Registration::admin("root", "root@example.com", "s3cret-pass", "CODE-FROM-OPS");
        let body = serde_json::to_value(&reg).unwrap();

        assert_eq!(body["role"], "admin");
        assert_eq!(body["adminCode"], "CODE-FROM-OPS");
        assert_eq!(body["learningProfile"]["currentLevel"], "advanced");
        assert!(!format!("{reg:?}").contains("s3cret-pass"));
    }

    #[test]
    fn test_plain_registration_omits_role() {
        let body = serde_json::to_value(Registration::new("bo", "bo@example.com", "password1")).unwrap();
        assert!(body.get("role").is_none());
        assert!(body.get("adminCode").is_none());
    }
}
