//! Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use edu_client::DashboardData;
use edu_core::Route;
use edu_core::model::Quiz;

use crate::components::Notice;
use crate::session::{use_auth, use_client, use_error_reporter};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = StoredValue::new(use_client());
    let auth = use_auth();
    let reporter = use_error_reporter();

    let (data, set_data) = signal(None::<DashboardData>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        let client = client.get_value();
        match DashboardData::load(&client).await {
            Ok(loaded) => set_data.set(Some(loaded)),
            Err(e) => set_error.set(Some(reporter.report(&e))),
        }
    });

    let username = move || auth.user.with(|user| user.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    let sign_out = move |_| {
        if let Err(e) = client.with_value(|client| client.auth().logout()) {
            leptos::logging::error!("Failed to clear token: {e}");
        }
        auth.sign_out();
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Welcome back, " {username}</h1>
                <nav>
                    <a href="/learning" class="btn btn-primary">"Start Learning"</a>
                    <a href="/quizzes" class="btn">"Quizzes"</a>
                    <button class="btn" on:click=sign_out>"Sign Out"</button>
                </nav>
            </header>

            <Notice message=error />

            {move || data.get().map(|data| view! {
                <section class="recommendations">
                    <h2>"Recommended next"</h2>
                    <ul>
                        {data.recommendations.next_topics.into_iter().map(|topic| view! { <li>{topic}</li> }).collect_view()}
                    </ul>
                    <h3>"Study methods"</h3>
                    <ul>
                        {data.recommendations.study_methods.into_iter().map(|method| view! { <li>{method}</li> }).collect_view()}
                    </ul>
                </section>

                <section class="recent-quizzes">
                    <h2>"Recent quizzes"</h2>
                    {data.recent_quizzes.into_iter().map(|quiz| view! { <QuizCard quiz=quiz /> }).collect_view()}
                </section>
            })}
        </div>
    }
}

#[component]
fn QuizCard(quiz: Quiz) -> impl IntoView {
    let status = match quiz.score {
        Some(score) if quiz.completed => format!("{score:.0}%"),
        _ => "Not taken".to_string(),
    };
    let created = quiz
        .created_at
        .map(|at| at.format("%b %e, %Y").to_string())
        .unwrap_or_default();

    view! {
        <div class="quiz-card">
            <h3><a href=Route::Quiz(quiz.id).path()>{quiz.title}</a></h3>
            <p class="meta">{quiz.subject} " / " {quiz.topic} " (" {quiz.difficulty.to_string()} ")"</p>
            <p class="status">{status}</p>
            <p class="date">{created}</p>
        </div>
    }
}
