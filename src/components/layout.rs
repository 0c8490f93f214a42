//! Layout Component
//!
//! Header with the app title and the user menu around a page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let (show_menu, set_show_menu) = signal(false);

    let display_name = move || session.user().map(|u| u.display_name().to_string()).unwrap_or_default();
    let initial = move || session.user().map(|u| u.initial()).unwrap_or('U');
    let email = move || session.user().map(|u| u.email).unwrap_or_default();

    // The protected guard sends the user to /login once the session is gone
    let on_logout = move |_: web_sys::MouseEvent| {
        set_show_menu.set(false);
        spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <div class="layout">
            <header class="app-header">
                <div class="app-brand">
                    <div class="app-logo">"▤"</div>
                    <h1 class="app-title">"KanbanFlow"</h1>
                </div>

                <div class="user-menu">
                    <button class="user-menu-toggle" on:click=move |_| set_show_menu.update(|v| *v = !*v)>
                        <span class="avatar">{initial}</span>
                        <span class="user-name">{display_name}</span>
                        <span class="caret">"▾"</span>
                    </button>

                    <Show when=move || show_menu.get()>
                        <div class="user-menu-dropdown">
                            <div class="user-menu-info">
                                <p class="user-menu-name">{display_name}</p>
                                <p class="user-menu-email">{email}</p>
                            </div>
                            <button class="logout-btn" on:click=on_logout>"Log out"</button>
                        </div>
                    </Show>
                </div>
            </header>

            <main class="app-main">{children()}</main>
        </div>
    }
}
