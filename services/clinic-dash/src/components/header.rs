// services/clinic-dash/src/components/header.rs
//
// Clinic Dashboard - Header Component
//

use leptos::*;

#[component]
pub fn Header(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"🩺"</span>
                <h1 class="header-title">"Doctor Dashboard"</h1>
            </div>

            <div class="header-actions">
                <button class="btn btn-outline" on:click=move |_| on_logout.call(())>
                    <span class="btn-icon">"⎋"</span>
                    <span class="btn-text">"Logout"</span>
                </button>
            </div>
        </header>
    }
}
