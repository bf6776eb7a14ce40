// services/clinic-dash/src/components/controls.rs
//
// Clinic Dashboard - Search, Priority Filter and Clear Data Controls
//

use clinickit::Priority;
use leptos::*;
use crate::state::ClinicState;

#[component]
pub fn Controls(state: ClinicState, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="controls">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search by name or token..."
                    prop:value=move || state.search_term.get()
                    on:input=move |ev| state.search_term.set(event_target_value(&ev))
                />
            </div>

            <div class="filter-buttons">
                {Priority::ALL
                    .into_iter()
                    .map(|priority| view! { <FilterButton state=state priority=priority /> })
                    .collect_view()}
            </div>

            <button class="btn btn-destructive" on:click=move |_| on_clear.call(())>
                <span class="btn-icon">"🗑"</span>
                <span class="btn-text">"Clear Data"</span>
            </button>
        </div>
    }
}

#[component]
fn FilterButton(state: ClinicState, priority: Priority) -> impl IntoView {
    let is_active = move || state.priority_filter.get() == Some(priority);

    view! {
        <button
            class=move || filter_button_class(priority, is_active())
            on:click=move |_| state.toggle_priority(priority)
        >
            <span class="btn-icon">"▼"</span>
            <span class="btn-text">{format!("{} Priority", priority)}</span>
        </button>
    }
}

fn filter_button_class(priority: Priority, active: bool) -> String {
    if !active {
        return "btn btn-outline".to_string();
    }
    let color = match priority {
        Priority::High => "btn-high",
        Priority::Medium => "btn-medium",
        Priority::Low => "btn-low",
    };
    format!("btn btn-active {}", color)
}
