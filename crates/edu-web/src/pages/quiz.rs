//! Quiz Taking and Results Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use edu_core::model::Quiz;
use edu_core::{Route, validation};

use crate::components::Notice;
use crate::session::{use_client, use_error_reporter, use_last_result};

fn use_quiz_id() -> String {
    use_params_map().with_untracked(|params| params.get("quiz_id").unwrap_or_default())
}

#[component]
pub fn QuizTakingPage() -> impl IntoView {
    let quiz_id = use_quiz_id();
    let client = StoredValue::new(use_client());
    let reporter = use_error_reporter();
    let last_result = use_last_result();
    let navigate = use_navigate();

    let (quiz, set_quiz) = signal(None::<Quiz>);
    let (answers, set_answers) = signal(Vec::<Option<usize>>::new());
    let (current, set_current) = signal(0_usize);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    {
        let quiz_id = quiz_id.clone();
        spawn_local(async move {
            match client.get_value().quizzes().get(&quiz_id).await {
                Ok(loaded) => {
                    set_answers.set(loaded.blank_answers());
                    set_quiz.set(Some(loaded));
                }
                Err(e) => set_error.set(Some(reporter.report(&e))),
            }
        });
    }

    let total = move || quiz.with(|q| q.as_ref().map_or(0, |q| q.questions.len()));

    let submit = move |_| {
        if submitting.get() {
            return;
        }
        let sheet = answers.get();
        let skipped = validation::unanswered(&sheet);
        if skipped > 0 {
            let prompt = format!("You have {skipped} unanswered question(s). Submit anyway?");
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&prompt).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
        }

        set_submitting.set(true);
        let quiz_id = quiz_id.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.get_value().quizzes().submit(&quiz_id, sheet).await {
                Ok(result) => {
                    let target = Route::QuizResults(quiz_id.clone()).path();
                    last_result.0.set(Some((quiz_id, result)));
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => set_error.set(Some(reporter.report(&e))),
            }
            set_submitting.set(false);
        });
    };

    let question_view = move || {
        let index = current.get();
        quiz.with(|quiz| {
            let question = quiz.as_ref()?.questions.get(index)?.clone();
            let options = question
                .options
                .into_iter()
                .enumerate()
                .map(|(option, text)| {
                    let selected = move || answers.with(|a| a.get(index).copied().flatten() == Some(option));
                    view! {
                        <button
                            class="option"
                            class:selected=selected
                            on:click=move |_| set_answers.update(|a| {
                                if let Some(slot) = a.get_mut(index) {
                                    *slot = Some(option);
                                }
                            })
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view();

            Some(view! {
                <div class="question">
                    <h2>{question.question}</h2>
                    <div class="options">{options}</div>
                </div>
            })
        })
    };

    view! {
        <div class="quiz-taking">
            <a href=Route::Quizzes.path() class="back">"Back to Quizzes"</a>
            <Notice message=error />

            <Show when=move || quiz.with(Option::is_some) fallback=|| view! { <p class="loading">"Loading quiz..."</p> }>
                <header class="quiz-header">
                    <h1>{move || quiz.with(|q| q.as_ref().map(|q| q.title.clone()).unwrap_or_default())}</h1>
                    <p class="progress">
                        {move || format!(
                            "Question {} of {} ({} answered)",
                            current.get() + 1,
                            total(),
                            answers.with(|a| a.len() - validation::unanswered(a)),
                        )}
                    </p>
                </header>

                {question_view}
            </Show>

            <nav class="quiz-nav" class:hidden=move || quiz.with(Option::is_none)>
                <button
                    class="btn"
                    disabled=move || current.get() == 0
                    on:click=move |_| set_current.update(|i| *i = i.saturating_sub(1))
                >
                    "Previous"
                </button>
                <button
                    class="btn"
                    disabled=move || current.get() + 1 >= total()
                    on:click=move |_| set_current.update(|i| *i += 1)
                >
                    "Next"
                </button>
                <button class="btn btn-primary" disabled=move || submitting.get() on:click=submit>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Quiz" }}
                </button>
            </nav>
        </div>
    }
}

#[component]
pub fn QuizResultsPage() -> impl IntoView {
    let result = use_last_result().for_quiz(&use_quiz_id());

    let Some(result) = result else {
        return view! {
            <div class="results empty">
                <h2>"No Results Found"</h2>
                <p>"Unable to load quiz results. Please try again."</p>
                <a href=Route::Quizzes.path() class="btn btn-primary">"Back to Quizzes"</a>
            </div>
        }
        .into_any();
    };

    let percentage = result
        .percentage()
        .map_or_else(|| "-".to_string(), |pct| format!("{pct}%"));
    let summary = match (result.correct_answers, result.total_questions) {
        (Some(correct), Some(total)) => format!("You got {correct} out of {total} questions correct"),
        _ => String::new(),
    };
    let (class, verdict) = if result.passed() {
        ("results passed", "Passed!")
    } else {
        ("results failed", "Keep Practicing!")
    };

    view! {
        <div class=class>
            <h1>"Quiz Complete!"</h1>
            <div class="score">{percentage}</div>
            <p>{summary}</p>
            <div class="verdict">{verdict}</div>
            <nav>
                <a href=Route::Quizzes.path() class="btn btn-primary">"Take Another Quiz"</a>
                <a href=Route::Dashboard.path() class="btn">"Back to Dashboard"</a>
                <a href=Route::Learning.path() class="btn">"Keep Learning"</a>
            </nav>
        </div>
    }
    .into_any()
}
