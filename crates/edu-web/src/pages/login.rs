//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use edu_core::model::Credentials;
use edu_core::{ClientError, Route, validation};

use crate::components::Notice;
use crate::session::{use_auth, use_client};

/// Sign-in form. With `admin` set, non-admin accounts are turned away.
#[component]
pub fn LoginPage(admin: bool) -> impl IntoView {
    let client = StoredValue::new(use_client());
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }

        let credentials = Credentials::new(email.get(), password.get());
        if let Err(e) = validation::require_text("Email", &credentials.email)
            .and_then(|()| validation::require_text("Password", &credentials.password))
        {
            set_error.set(Some(e.user_message()));
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let client = client.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            let auth_api = client.auth();
            let result = if admin {
                auth_api.admin_login(&credentials).await
            } else {
                auth_api.login(&credentials).await
            };

            match result {
                Ok(response) => {
                    let landing = if admin { Route::Admin } else { Route::Dashboard };
                    auth.sign_in(response.user);
                    navigate(&landing.path(), NavigateOptions::default());
                }
                // A 401 from the login endpoint means bad credentials
                Err(ClientError::SessionExpired) => {
                    set_error.set(Some("Invalid email or password.".into()));
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    };

    let (title, register) = if admin {
        ("Admin Sign In", Route::AdminRegister)
    } else {
        ("Sign In", Route::Register)
    };

    view! {
        <div class="auth">
            <form class="auth-card" on:submit=submit>
                <h2>{title}</h2>
                <Notice message=error />
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
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="switch">
                    "No account yet? " <a href=register.path()>"Register"</a>
                </p>
            </form>
        </div>
    }
}
