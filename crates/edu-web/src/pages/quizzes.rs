//! Quiz Generator and Overview Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use edu_client::QuizOverview;
use edu_core::model::{Difficulty, QuizRequest};
use edu_core::{Route, validation};

use crate::components::Notice;
use crate::session::{use_client, use_error_reporter};

fn parse_difficulty(value: &str) -> Difficulty {
    match value {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

#[component]
pub fn QuizzesPage() -> impl IntoView {
    let client = StoredValue::new(use_client());
    let reporter = use_error_reporter();
    let navigate = use_navigate();

    let (overview, set_overview) = signal(None::<QuizOverview>);
    let (error, set_error) = signal(None::<String>);

    let (subject, set_subject) = signal(String::new());
    let (topic, set_topic) = signal(String::new());
    let (difficulty, set_difficulty) = signal(Difficulty::Medium);
    let (gaps, set_gaps) = signal(String::new());
    let (generating, set_generating) = signal(false);

    spawn_local(async move {
        match QuizOverview::load(&client.get_value()).await {
            Ok(loaded) => set_overview.set(Some(loaded)),
            Err(e) => set_error.set(Some(reporter.report(&e))),
        }
    });

    let generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if generating.get() {
            return;
        }

        let (subject, topic) = (subject.get(), topic.get());
        if let Err(e) = validation::require_subject_and_topic(&subject, &topic) {
            set_error.set(Some(e.user_message()));
            return;
        }
        let request = QuizRequest {
            subject,
            topic,
            difficulty: difficulty.get(),
            learning_gaps: validation::parse_learning_gaps(&gaps.get()),
        };

        set_error.set(None);
        set_generating.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.get_value().quizzes().generate(&request).await {
                Ok(generated) => navigate(&Route::Quiz(generated.quiz_id).path(), NavigateOptions::default()),
                Err(e) => set_error.set(Some(reporter.report(&e))),
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="quizzes">
            <h1>"Your Quizzes"</h1>
            <Notice message=error />

            <form class="quiz-generator" on:submit=generate>
                <h2>"Generate a quiz"</h2>
                <div class="field">
                    <label>"Subject"</label>
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Topic"</label>
                    <input
                        type="text"
                        prop:value=move || topic.get()
                        on:input=move |ev| set_topic.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Difficulty"</label>
                    <select
                        prop:value=move || difficulty.get().to_string()
                        on:change=move |ev| set_difficulty.set(parse_difficulty(&event_target_value(&ev)))
                    >
                        <option value="easy">"Easy"</option>
                        <option value="medium">"Medium"</option>
                        <option value="hard">"Hard"</option>
                    </select>
                </div>
                <div class="field">
                    <label>"Learning gaps (comma separated)"</label>
                    <input
                        type="text"
                        prop:value=move || gaps.get()
                        on:input=move |ev| set_gaps.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || generating.get()>
                    {move || if generating.get() { "Generating..." } else { "Generate Quiz" }}
                </button>
            </form>

            {move || overview.get().map(|overview| view! {
                <section class="analytics">
                    <div class="stat">
                        <span class="value">{overview.analytics.total_quizzes}</span>
                        <span class="label">"Quizzes taken"</span>
                    </div>
                    <div class="stat">
                        <span class="value">{format!("{:.1}%", overview.analytics.average_score)}</span>
                        <span class="label">"Average score"</span>
                    </div>
                </section>

                <table class="quiz-list">
                    <thead>
                        <tr><th>"Title"</th><th>"Subject"</th><th>"Difficulty"</th><th>"Score"</th></tr>
                    </thead>
                    <tbody>
                        {overview.quizzes.into_iter().map(|quiz| {
                            let score = quiz.score.map(|s| format!("{s:.0}%")).unwrap_or_else(|| "-".into());
                            let href = Route::Quiz(quiz.id).path();
                            view! {
                                <tr>
                                    <td><a href=href>{quiz.title}</a></td>
                                    <td>{quiz.subject}</td>
                                    <td>{quiz.difficulty.to_string()}</td>
                                    <td>{score}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            })}
        </div>
    }
}
