//! Client Routes
//!
//! Every view the front-ends can show, with the capability it requires.

use std::fmt;

use crate::guard::Capability;

/// A client-side route
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    AdminLogin,
    AdminRegister,
    Dashboard,
    Learning,
    Quizzes,
    /// Take a quiz
    Quiz(String),
    /// Results of a submitted quiz
    QuizResults(String),
    Translation,
    Profile,
    Admin,
    AdminUsers,
    AdminQuizzes,
    AdminSessions,
    AdminTranslation,
    AdminQuizGenerator,
}

impl Route {
    /// Path the router matches for this route
    pub fn path(&self) -> String {
        match self {
            Self::Quiz(id) => format!("/quiz/{id}"),
            Self::QuizResults(id) => format!("/quiz/{id}/results"),
            other => other.static_path().unwrap_or("/").to_string(),
        }
    }

    const fn static_path(&self) -> Option<&'static str> {
        Some(match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::AdminLogin => "/admin/login",
            Self::AdminRegister => "/admin/register",
            Self::Dashboard => "/dashboard",
            Self::Learning => "/learning",
            Self::Quizzes => "/quizzes",
            Self::Translation => "/translation",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
            Self::AdminUsers => "/admin/users",
            Self::AdminQuizzes => "/admin/quizzes",
            Self::AdminSessions => "/admin/sessions",
            Self::AdminTranslation => "/admin/translation",
            Self::AdminQuizGenerator => "/admin/quiz-generator",
            Self::Quiz(_) | Self::QuizResults(_) => return None,
        })
    }

    /// Capability a visitor needs before the route renders
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Home => Capability::Guest,
            Self::Login | Self::Register | Self::AdminLogin | Self::AdminRegister => Capability::None,
            Self::Dashboard
            | Self::Learning
            | Self::Quizzes
            | Self::Quiz(_)
            | Self::QuizResults(_)
            | Self::Translation
            | Self::Profile => Capability::User,
            Self::Admin
            | Self::AdminUsers
            | Self::AdminQuizzes
            | Self::AdminSessions
            | Self::AdminTranslation
            | Self::AdminQuizGenerator => Capability::Admin,
        }
    }

    /// Resolve a location (path, optionally with query or fragment) to a route
    pub fn parse(location: &str) -> Option<Self> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let segments: Vec<&str> = path.split('/').skip(1).collect();
        match segments.as_slice() {
            ["quiz", id] if !id.is_empty() => return Some(Self::Quiz((*id).to_string())),
            ["quiz", id, "results"] if !id.is_empty() => {
                return Some(Self::QuizResults((*id).to_string()));
            }
            _ => {}
        }

        Self::STATIC
            .iter()
            .find(|route| route.static_path() == Some(path))
            .cloned()
    }

    const STATIC: [Self; 16] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::AdminLogin,
        Self::AdminRegister,
        Self::Dashboard,
        Self::Learning,
        Self::Quizzes,
        Self::Translation,
        Self::Profile,
        Self::Admin,
        Self::AdminUsers,
        Self::AdminQuizzes,
        Self::AdminSessions,
        Self::AdminTranslation,
        Self::AdminQuizGenerator,
    ];
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
