//! Page Components

mod admin;
mod dashboard;
mod home;
mod learning;
mod login;
mod quiz;
mod quizzes;
mod register;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use learning::LearningPage;
pub use login::LoginPage;
pub use quiz::{QuizResultsPage, QuizTakingPage};
pub use quizzes::QuizzesPage;
pub use register::RegisterPage;
