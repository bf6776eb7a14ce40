// services/clinic-dash/src/components/tables.rs
//
// Clinic Dashboard - Appointment Table Component
//

use clinickit::datetime::format_date_time;
use clinickit::{Appointment, Priority};
use leptos::*;
use crate::state::ClinicState;

#[component]
pub fn AppointmentTable(state: ClinicState) -> impl IntoView {
    let rows = create_memo(move |_| state.visible());

    view! {
        <div class="table-wrapper">
            <table class="appointments-table">
                <thead>
                    <tr>
                        <th>"Token"</th>
                        <th>"Patient"</th>
                        <th>"Symptoms"</th>
                        <th>"Priority"</th>
                        <th>"Appointment"</th>
                        <th>"X-ray"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !rows.with(|r| r.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td class="table-empty" colspan="6">"No appointments found"</td>
                            </tr>
                        }
                    >
                        <For
                            each=move || rows.get().into_iter().enumerate()
                            key=|(index, appointment)| row_key(*index, appointment)
                            children=move |(_, appointment)| view! {
                                <AppointmentRow state=state appointment=appointment />
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AppointmentRow(state: ClinicState, appointment: Appointment) -> impl IntoView {
    let xray_file = appointment.xray_file_name.clone();

    view! {
        <tr class="appointment-row">
            <td class="cell-token">{format!("#{}", appointment.token)}</td>
            <td class="cell-patient">
                <div class="patient-name">{appointment.name.clone()}</div>
                <div class="patient-meta">{patient_summary(&appointment)}</div>
                <div class="patient-meta">{appointment.phone.clone()}</div>
            </td>
            <td class="cell-symptoms">
                <div class="truncate">{appointment.symptoms.clone()}</div>
            </td>
            <td>
                <span class=format!("badge {}", badge_class(appointment.priority))>
                    {appointment.priority.as_str()}
                </span>
            </td>
            <td>{format_date_time(&appointment.appointment_date_time)}</td>
            <td>
                <button
                    class="btn btn-outline btn-sm"
                    on:click=move |_| state.select_xray(xray_file.clone())
                >
                    <span class="btn-icon">"🖼"</span>
                    <span class="btn-text">"View"</span>
                </button>
            </td>
        </tr>
    }
}

/// Rows are keyed by position and token; stored data may repeat a record.
fn row_key(index: usize, appointment: &Appointment) -> (usize, String) {
    (index, appointment.token.clone())
}

/// "29 yrs, Female"
fn patient_summary(appointment: &Appointment) -> String {
    format!("{} yrs, {}", appointment.age, appointment.gender)
}

fn badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge-high",
        Priority::Medium => "badge-medium",
        Priority::Low => "badge-low",
    }
}
