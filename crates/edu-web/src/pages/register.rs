//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use edu_core::model::Registration;
use edu_core::{ClientError, Route, validation};

use crate::components::Notice;
use crate::session::{use_auth, use_client};

fn check_form(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), ClientError> {
    validation::require_text("Username", username)?;
    validation::require_text("Email", email)?;
    validation::check_new_password(password, confirm)
}

/// Sign-up form. With `admin` set it also asks for the provisioning code,
/// which only the backend checks.
#[component]
pub fn RegisterPage(admin: bool) -> impl IntoView {
    let client = StoredValue::new(use_client());
    let auth = use_auth();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (admin_code, set_admin_code) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }

        let (username, email, password) = (username.get(), email.get(), password.get());
        if let Err(e) = check_form(&username, &email, &password, &confirm.get()) {
            set_error.set(Some(e.user_message()));
            return;
        }
        if admin && admin_code.with(|code| code.trim().is_empty()) {
            set_error.set(Some("Admin code is required".into()));
            return;
        }

        let registration = if admin {
            Registration::admin(username, email, password, admin_code.get().trim())
        } else {
            Registration::new(username, email, password)
        };

        set_error.set(None);
        set_loading.set(true);

        let client = client.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.auth().register(&registration).await {
                Ok(response) => {
                    let landing = if response.user.is_admin() { Route::Admin } else { Route::Dashboard };
                    auth.sign_in(response.user);
                    navigate(&landing.path(), NavigateOptions::default());
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    };

    let (title, sign_in) = if admin {
        ("Create Admin Account", Route::AdminLogin)
    } else {
        ("Create Account", Route::Login)
    };

    view! {
        <div class="auth">
            <form class="auth-card" on:submit=submit>
                <h2>{title}</h2>
                <Notice message=error />
                <div class="field">
                    <label>"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Confirm Password"</label>
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || admin>
                    <div class="field">
                        <label>"Admin Code"</label>
                        <input
                            type="password"
                            prop:value=move || admin_code.get()
                            on:input=move |ev| set_admin_code.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>
                <p class="switch">
                    "Already registered? " <a href=sign_in.path()>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
