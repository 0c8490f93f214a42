//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use kanbanflow_core::domain::Registration;
use kanbanflow_core::FormError;

use crate::context::use_session;

/// One text input bound to a signal
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<FormError>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = Registration {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(e) => {
                set_form_error.set(Some(e));
                return;
            }
        };

        set_form_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            if session.register(registration).await.is_err() {
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
                <p class="auth-subtitle">"Create your account"</p>

                <form on:submit=on_submit>
                    <Field id="register-username" label="Username" value=username set_value=set_username />
                    <Field id="register-email" label="Email" input_type="email" value=email set_value=set_email />
                    <div class="form-row">
                        <Field id="register-first-name" label="First name" value=first_name set_value=set_first_name />
                        <Field id="register-last-name" label="Last name" value=last_name set_value=set_last_name />
                    </div>
                    <Field id="register-password" label="Password" input_type="password" value=password set_value=set_password />

                    {move || error_text().map(|text| view! { <p class="form-error">{text}</p> })}

                    <button type="submit" class="primary-btn wide" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
