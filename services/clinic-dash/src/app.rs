// services/clinic-dash/src/app.rs
//
// Clinic Dashboard - Main Application Component
//

use clinickit::config::ClinicConfig;
use clinickit::{Session, XrayCatalog};
use leptos::*;

use crate::components::{AppointmentTable, Controls, Header, StatsCards, ToastView, XrayModal};
use crate::state::use_clinic_state;
use crate::storage::{redirect_to_login, BrowserSession, BrowserStore};

#[component]
pub fn App() -> impl IntoView {
    let config = ClinicConfig::default();
    let store = store_value(BrowserStore::new(&config.storage));
    let session = store_value(BrowserSession::new(&config.storage));

    // Initialize reactive state
    let state = use_clinic_state(XrayCatalog::new(&config.xray));

    // Send anonymous visitors to the login page
    create_effect(move |_| {
        if !session.with_value(|s| s.is_logged_in()) {
            log::info!("Not logged in, redirecting to /login");
            redirect_to_login();
        }
    });

    // Load stored appointments once
    create_effect(move |_| {
        store.with_value(|s| state.load(s));
    });

    let on_logout = Callback::new(move |_: ()| {
        session.with_value(|s| s.logout());
        redirect_to_login();
    });

    let on_clear = Callback::new(move |_: ()| {
        store.with_value(|s| state.reset_to_sample_data(s));
        state.show_toast(
            "Data Cleared",
            "All patient appointments have been reset to default.",
        );
    });

    view! {
        <div class="clinic-app">
            <Header on_logout=on_logout />

            <main class="dashboard">
                <StatsCards state=state />

                <section class="panel appointments-panel">
                    <h2 class="panel-title">"Appointment Management"</h2>
                    <p class="panel-description">
                        "View and manage all patient appointments. High priority patients are listed first."
                    </p>
                    <Controls state=state on_clear=on_clear />
                    <AppointmentTable state=state />
                </section>
            </main>

            <XrayModal state=state />
            <ToastView state=state />
        </div>
    }
}
