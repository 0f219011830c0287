//! Learning Assistant Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use edu_core::model::{ChatMessage, ChatRequest, StartSessionRequest};
use edu_core::validation;

use crate::components::{MessageBubble, Notice};
use crate::session::{use_client, use_error_reporter};

#[component]
pub fn LearningPage() -> impl IntoView {
    let client = StoredValue::new(use_client());
    let reporter = use_error_reporter();

    let (subject, set_subject) = signal(String::new());
    let (topic, set_topic) = signal(String::new());
    let (session_id, set_session_id) = signal(None::<String>);
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    let start = move |_| {
        let (subject, topic) = (subject.get(), topic.get());
        if let Err(e) = validation::require_subject_and_topic(&subject, &topic) {
            set_notice.set(Some(e.user_message()));
            return;
        }

        set_notice.set(None);
        set_loading.set(true);
        let client = client.get_value();
        spawn_local(async move {
            let request = StartSessionRequest {
                subject: subject.clone(),
                topic: topic.clone(),
                learning_objectives: Vec::new(),
            };
            match client.learning().start_session(&request).await {
                Ok(started) => {
                    set_session_id.set(Some(started.session_id));
                    set_messages.set(vec![ChatMessage::assistant(format!(
                        "Hello! I'm your AI learning assistant. I'll help you with {subject} - {topic}. \
                         What would you like to learn or what questions do you have?"
                    ))]);
                }
                Err(e) => set_notice.set(Some(reporter.report(&e))),
            }
            set_loading.set(false);
        });
    };

    let send = move || {
        let message = input.get();
        if message.trim().is_empty() || loading.get() {
            return;
        }

        set_messages.update(|msgs| msgs.push(ChatMessage::user(message.clone())));
        set_input.set(String::new());
        set_loading.set(true);

        let request = ChatRequest {
            message,
            session_id: session_id.get(),
            subject: subject.get(),
            topic: topic.get(),
        };
        let client = client.get_value();
        spawn_local(async move {
            // Failures are shown as a tutor turn so the conversation keeps its place
            let reply = match client.learning().chat(&request).await {
                Ok(reply) => reply.response,
                Err(e) if e.is_rate_limited() => e.user_message(),
                Err(e) => {
                    let message = reporter.report(&e);
                    if e.redirect_target().is_some() {
                        message
                    } else {
                        "Sorry, I encountered an error. Please try again.".to_string()
                    }
                }
            };
            set_messages.update(|msgs| msgs.push(ChatMessage::assistant(reply)));
            set_loading.set(false);
        });
    };

    let end = move |_| {
        if let Some(id) = session_id.get() {
            let client = client.get_value();
            spawn_local(async move {
                if let Err(e) = client.learning().end_session(&id).await {
                    leptos::logging::error!("Error ending session: {e}");
                }
            });
        }
        set_session_id.set(None);
        set_messages.set(Vec::new());
        set_subject.set(String::new());
        set_topic.set(String::new());
    };

    view! {
        <div class="learning">
            <Notice message=notice />

            <Show
                when=move || session_id.with(Option::is_some)
                fallback=move || view! {
                    <div class="session-setup">
                        <h2>"Start a learning session"</h2>
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
                        <button class="btn btn-primary" on:click=start disabled=move || loading.get()>
                            "Start Session"
                        </button>
                    </div>
                }
            >
                <div class="chat-main">
                    <header class="chat-header">
                        <h2>{move || format!("{} - {}", subject.get(), topic.get())}</h2>
                        <button class="btn" on:click=end>"End Session"</button>
                    </header>

                    <div class="messages">
                        <For
                            each=move || messages.get().into_iter().enumerate()
                            key=|(index, _)| *index
                            children=move |(_, msg)| view! { <MessageBubble message=msg /> }
                        />
                        <Show when=move || loading.get()>
                            <div class="message loading">"..."</div>
                        </Show>
                    </div>

                    <div class="input-area">
                        <textarea
                            placeholder="Ask your tutor..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button on:click=move |_| send() disabled=move || loading.get()>
                            {move || if loading.get() { "..." } else { "Send" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
