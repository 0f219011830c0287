//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"EduAgent"</h1>
                <p class="tagline">"Personal AI tutoring, quizzes and translation"</p>
                <div class="cta">
                    <a href="/register" class="btn btn-primary">"Get Started"</a>
                    <a href="/login" class="btn">"Sign In"</a>
                    <a href="/admin/login" class="btn">"Admin Console"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"Tutor"</h3>
                    <p>"Chat through any topic with an AI tutor that remembers the session."</p>
                </div>
                <div class="feature">
                    <h3>"Quizzes"</h3>
                    <p>"Generate quizzes aimed at the gaps you want to close."</p>
                </div>
                <div class="feature">
                    <h3>"Translation"</h3>
                    <p>"Read lessons and quizzes in your own language."</p>
                </div>
            </section>
        </div>
    }
}
