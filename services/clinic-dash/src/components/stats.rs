// services/clinic-dash/src/components/stats.rs
//
// Clinic Dashboard - Statistics Cards Component
// Counts cover every appointment, not just the filtered table rows
//

use leptos::*;
use crate::state::ClinicState;

#[component]
pub fn StatsCards(state: ClinicState) -> impl IntoView {
    let stats = create_memo(move |_| state.stats());

    view! {
        <div class="stats-grid">
            <StatCard
                label="Today's Appointments"
                value=move || stats.get().today
                icon="🔍"
                class_name="stat-info"
            />

            <StatCard
                label="High Priority"
                value=move || stats.get().high
                icon="▼"
                class_name="stat-high"
            />

            <StatCard
                label="Medium Priority"
                value=move || stats.get().medium
                icon="▼"
                class_name="stat-medium"
            />

            <StatCard
                label="Low Priority"
                value=move || stats.get().low
                icon="▼"
                class_name="stat-low"
            />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: impl Fn() -> usize + 'static,
    icon: &'static str,
    class_name: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class_name)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <span class="stat-label">{label}</span>
                <span class="stat-value">{value}</span>
            </div>
        </div>
    }
}
