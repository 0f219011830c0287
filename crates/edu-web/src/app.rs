//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use edu_core::Route as Page;

use crate::components::Guarded;
use crate::pages::{
    AdminPage, DashboardPage, HomePage, LearningPage, LoginPage, QuizResultsPage, QuizTakingPage, QuizzesPage,
    RegisterPage,
};
use crate::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    if let Err(e) = provide_session() {
        leptos::logging::error!("Failed to start: {e}");
        return view! { <p class="error">{e.user_message()}</p> }.into_any();
    }

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <Guarded capability=Page::Home.capability()><HomePage /></Guarded> }
                    />
                    <Route
                        path=path!("/login")
                        view=|| view! { <Guarded capability=Page::Login.capability()><LoginPage admin=false /></Guarded> }
                    />
                    <Route
                        path=path!("/admin/login")
                        view=|| view! { <Guarded capability=Page::AdminLogin.capability()><LoginPage admin=true /></Guarded> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <Guarded capability=Page::Register.capability()><RegisterPage admin=false /></Guarded> }
                    />
                    <Route
                        path=path!("/admin/register")
                        view=|| view! { <Guarded capability=Page::AdminRegister.capability()><RegisterPage admin=true /></Guarded> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <Guarded capability=Page::Dashboard.capability()><DashboardPage /></Guarded> }
                    />
                    <Route
                        path=path!("/learning")
                        view=|| view! { <Guarded capability=Page::Learning.capability()><LearningPage /></Guarded> }
                    />
                    <Route
                        path=path!("/quizzes")
                        view=|| view! { <Guarded capability=Page::Quizzes.capability()><QuizzesPage /></Guarded> }
                    />
                    <Route
                        path=path!("/quiz/:quiz_id")
                        view=|| view! { <Guarded capability=Page::Quiz(String::new()).capability()><QuizTakingPage /></Guarded> }
                    />
                    <Route
                        path=path!("/quiz/:quiz_id/results")
                        view=|| view! { <Guarded capability=Page::QuizResults(String::new()).capability()><QuizResultsPage /></Guarded> }
                    />
                    <Route
                        path=path!("/admin")
                        view=|| view! { <Guarded capability=Page::Admin.capability()><AdminPage /></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
