// services/clinic-dash/src/state.rs
//
// Clinic Dashboard - Reactive State Management
//

use chrono::NaiveDate;
use clinickit::sample::sample_appointments;
use clinickit::view_model::{
    aggregate_counts, merge_appointments, toggle_priority_filter, visible_appointments,
};
use clinickit::{Appointment, AppointmentStats, AppointmentStore, Priority, XrayCatalog};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 3_000;

/// Transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Main application state
/// All fields are signals or stored values, which are Copy, so ClinicState is Copy
#[derive(Clone, Copy)]
pub struct ClinicState {
    // Working list (samples merged with stored records)
    pub appointments: RwSignal<Vec<Appointment>>,

    // Table filters
    pub search_term: RwSignal<String>,
    pub priority_filter: RwSignal<Option<Priority>>,

    // X-ray modal
    pub selected_xray: RwSignal<Option<String>>,
    pub xray_modal_open: RwSignal<bool>,

    pub toast: RwSignal<Option<Toast>>,

    xray_catalog: StoredValue<XrayCatalog>,
    next_toast_id: StoredValue<u64>,
}

impl ClinicState {
    pub fn new(xray_catalog: XrayCatalog) -> Self {
        Self {
            appointments: create_rw_signal(vec![]),
            search_term: create_rw_signal(String::new()),
            priority_filter: create_rw_signal(None),
            selected_xray: create_rw_signal(None),
            xray_modal_open: create_rw_signal(false),
            toast: create_rw_signal(None),
            xray_catalog: store_value(xray_catalog),
            next_toast_id: store_value(0),
        }
    }

    /// Read the store once and merge with the sample set
    pub fn load(&self, store: &impl AppointmentStore) {
        let merged = merge_appointments(store.get_appointments(), sample_appointments());
        log::info!("Loaded {} appointments", merged.len());
        self.appointments.set(merged);
    }

    /// Clear the store and show only the sample set
    pub fn reset_to_sample_data(&self, store: &impl AppointmentStore) {
        store.clear_appointments();
        self.appointments.set(sample_appointments());
        log::info!("Appointments reset to sample data");
    }

    /// Rows for the table (tracks list, search and filter)
    pub fn visible(&self) -> Vec<Appointment> {
        let filter = self.priority_filter.get();
        self.appointments.with(|list| {
            self.search_term
                .with(|term| visible_appointments(list, term, filter))
        })
    }

    /// Stat card counts over the unfiltered list
    pub fn stats(&self) -> AppointmentStats {
        self.stats_on(today_utc().unwrap_or_default())
    }

    pub fn stats_on(&self, today: NaiveDate) -> AppointmentStats {
        self.appointments.with(|list| aggregate_counts(list, today))
    }

    pub fn toggle_priority(&self, clicked: Priority) {
        self.priority_filter
            .update(|current| *current = toggle_priority_filter(*current, clicked));
    }

    pub fn select_xray(&self, file_name: String) {
        self.selected_xray.set(Some(file_name));
        self.xray_modal_open.set(true);
    }

    pub fn clear_xray_selection(&self) {
        self.xray_modal_open.set(false);
        self.selected_xray.set(None);
    }

    pub fn xray_url(&self, file_name: &str) -> String {
        self.xray_catalog
            .with_value(|catalog| catalog.lookup_url(file_name).to_string())
    }

    /// Show a toast and dismiss it after a few seconds unless replaced
    pub fn show_toast(&self, title: &str, description: &str) {
        let id = self.next_toast_id.get_value() + 1;
        self.next_toast_id.set_value(id);

        self.toast.set(Some(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
        }));

        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            toast.update(|current| {
                if current.as_ref().map(|t| t.id) == Some(id) {
                    *current = None;
                }
            });
        });
    }
}

/// Current calendar date in UTC, from the browser clock
pub fn today_utc() -> Option<NaiveDate> {
    let iso = js_sys::Date::new_0().to_iso_string().as_string()?;
    date_from_iso(&iso)
}

/// Date part of an ISO-8601 timestamp such as `2025-04-30T10:30:00.000Z`
pub fn date_from_iso(iso: &str) -> Option<NaiveDate> {
    let date = iso.split('T').next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Hook to get/create clinic state
pub fn use_clinic_state(xray_catalog: XrayCatalog) -> ClinicState {
    ClinicState::new(xray_catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinickit::MemoryStore;

    fn tokens(list: &[Appointment]) -> Vec<String> {
        list.iter().map(|a| a.token.clone()).collect()
    }

    fn stored_riya() -> Appointment {
        let mut riya = sample_appointments().remove(0);
        riya.name = "Riya S. (stored)".to_string();
        riya.priority = Priority::Low;
        riya
    }

    #[test]
    fn test_load_merges_store_with_samples() {
        let runtime = create_runtime();
        let store = MemoryStore::with_appointments(vec![stored_riya()]);
        let state = ClinicState::new(XrayCatalog::default());

        state.load(&store);

        let list = state.appointments.get_untracked();
        assert_eq!(tokens(&list), vec!["1234", "1456", "1789"]);
        assert_eq!(list[0].name, "Riya S. (stored)");
        runtime.dispose();
    }

    #[test]
    fn test_reset_twice_leaves_samples_and_empty_store() {
        let runtime = create_runtime();
        let store = MemoryStore::with_appointments(vec![stored_riya()]);
        let state = ClinicState::new(XrayCatalog::default());
        state.load(&store);

        state.reset_to_sample_data(&store);
        let first = state.appointments.get_untracked();
        state.reset_to_sample_data(&store);

        assert_eq!(first, sample_appointments());
        assert_eq!(state.appointments.get_untracked(), first);
        assert!(store.is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_visible_sorts_and_filters_while_stats_stay_fixed() {
        let runtime = create_runtime();
        let store = MemoryStore::with_appointments(vec![stored_riya()]);
        let state = ClinicState::new(XrayCatalog::default());
        state.load(&store);
        let today = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();

        assert_eq!(tokens(&state.visible()), vec!["1456", "1234", "1789"]);
        let before = state.stats_on(today);

        state.toggle_priority(Priority::Medium);
        assert_eq!(tokens(&state.visible()), vec!["1456"]);
        state.search_term.set("neha".to_string());
        assert!(state.visible().is_empty());
        assert_eq!(state.stats_on(today), before);
        assert_eq!((before.high, before.medium, before.low, before.today), (0, 1, 2, 3));

        state.toggle_priority(Priority::Medium);
        assert_eq!(tokens(&state.visible()), vec!["1789"]);
        runtime.dispose();
    }

    #[test]
    fn test_xray_select_and_clear() {
        let runtime = create_runtime();
        let state = ClinicState::new(XrayCatalog::default());

        state.select_xray("hand-xray.jpeg".to_string());
        assert!(state.xray_modal_open.get_untracked());
        assert_eq!(state.selected_xray.get_untracked().as_deref(), Some("hand-xray.jpeg"));
        assert!(state.xray_url("hand-xray.jpeg").starts_with("https://"));
        assert_eq!(state.xray_url("jaw-xray.jpeg"), "/placeholder.svg?height=400&width=400");

        state.clear_xray_selection();
        assert!(!state.xray_modal_open.get_untracked());
        assert_eq!(state.selected_xray.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn test_date_from_iso() {
        assert_eq!(
            date_from_iso("2025-04-30T10:30:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 4, 30)
        );
        assert_eq!(date_from_iso("2025-04-30"), NaiveDate::from_ymd_opt(2025, 4, 30));
        assert_eq!(date_from_iso("Invalid Date"), None);
    }
}
