// services/clinic-dash/src/components/toast.rs
//
// Clinic Dashboard - Toast Notification Component
//

use leptos::*;
use crate::state::ClinicState;

#[component]
pub fn ToastView(state: ClinicState) -> impl IntoView {
    view! {
        <div class="toast-container">
            {move || state.toast.get().map(|toast| view! {
                <div class="toast" on:click=move |_| state.toast.set(None)>
                    <span class="toast-title">{toast.title}</span>
                    <span class="toast-description">{toast.description}</span>
                </div>
            })}
        </div>
    }
}
