//! Admin Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use edu_core::model::AdminStats;

use crate::components::Notice;
use crate::session::{use_client, use_error_reporter};

#[component]
pub fn AdminPage() -> impl IntoView {
    let client = use_client();
    let reporter = use_error_reporter();

    let (stats, set_stats) = signal(None::<AdminStats>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match client.admin().stats().await {
            Ok(loaded) => set_stats.set(Some(loaded)),
            Err(e) => set_error.set(Some(reporter.report(&e))),
        }
    });

    view! {
        <div class="admin">
            <h1>"Admin Dashboard"</h1>
            <Notice message=error />

            {move || stats.get().map(|stats| view! {
                <section class="stats">
                    <StatCard label="Users" value=stats.total_users />
                    <StatCard label="Admins" value=stats.admin_users />
                    <StatCard label="Learners" value=stats.regular_users />
                    <StatCard label="Quizzes" value=stats.total_quizzes />
                    <StatCard label="Sessions" value=stats.total_sessions />
                </section>
            })}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="value">{value}</span>
            <span class="label">{label}</span>
        </div>
    }
}
