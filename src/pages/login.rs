//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use kanbanflow_core::domain::Credentials;
use kanbanflow_core::FormError;

use crate::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<FormError>);
    let (submitting, set_submitting) = signal(false);

    // On success the public guard moves on to the dashboard
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = Credentials { username: username.get_untracked(), password: password.get_untracked() };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                set_form_error.set(Some(e));
                return;
            }
        };

        set_form_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            if session.login(credentials).await.is_err() {
                set_submitting.set(false);
            }
        });
    };

    let error_text = move || {
        form_error
            .get()
            .map(|e| e.to_string())
            .or_else(|| session.error().map(|e| e.to_string()))
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"KanbanFlow"</h1>
                <p class="auth-subtitle">"Sign in to your account"</p>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label for="login-username">"Username"</label>
                        <input
                            id="login-username"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    {move || error_text().map(|text| view! { <p class="form-error">{text}</p> })}

                    <button type="submit" class="primary-btn wide" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "No account yet? "
                    <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
