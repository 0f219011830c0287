//! UI Components

use leptos::prelude::*;
use leptos_router::components::Redirect;

use edu_core::model::{ChatMessage, MessageRole};
use edu_core::{Capability, GuardOutcome, guard};

use crate::session::use_auth;

/// Renders `children` only when the current session satisfies `capability`
#[component]
pub fn Guarded(capability: Capability, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || match guard::evaluate(auth.snapshot(), capability) {
        GuardOutcome::Pending => view! {
            <div class="loading">
                <div class="spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect(route) => view! { <Redirect path=route.path() /> }.into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (class, label) = match message.role {
        MessageRole::User => ("message message-user", "You"),
        MessageRole::Assistant => ("message message-assistant", "Tutor"),
        MessageRole::Other => ("message message-other", "System"),
    };
    let time = message.timestamp.format("%H:%M").to_string();

    view! {
        <div class=class>
            <span class="role">{label}</span>
            <p class="content">{message.content}</p>
            <span class="time">{time}</span>
        </div>
    }
}

/// Inline error or notice
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <div class="notice">{text}</div> })
}
