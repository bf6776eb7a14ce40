// Appointment view model
//
// Turns the raw appointment list into what the dashboards render: the
// filtered, priority-sorted table rows and the stat card counts. Also owns
// the X-ray modal selection and the reset-to-samples action.
//

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::info;

use crate::datetime::falls_on;
use crate::sample::sample_appointments;
use crate::store::AppointmentStore;
use crate::types::{Appointment, AppointmentStats, Priority};

/// Stored records first, then every sample whose token is not already stored.
pub fn merge_appointments(stored: Vec<Appointment>, samples: Vec<Appointment>) -> Vec<Appointment> {
    let stored_tokens: HashSet<&str> = stored.iter().map(|a| a.token.as_str()).collect();
    let extra: Vec<Appointment> = samples
        .into_iter()
        .filter(|a| !stored_tokens.contains(a.token.as_str()))
        .collect();

    let mut merged = stored;
    merged.extend(extra);
    merged
}

/// Case-insensitive name match OR literal token substring match.
/// An empty term matches everything.
pub fn matches_search(appointment: &Appointment, search_term: &str) -> bool {
    appointment
        .name
        .to_lowercase()
        .contains(&search_term.to_lowercase())
        || appointment.token.contains(search_term)
}

/// Rows for the appointment table: filtered, then stably sorted by priority.
pub fn visible_appointments(
    raw: &[Appointment],
    search_term: &str,
    priority_filter: Option<Priority>,
) -> Vec<Appointment> {
    let mut visible: Vec<Appointment> = raw
        .iter()
        .filter(|a| matches_search(a, search_term))
        .filter(|a| priority_filter.map_or(true, |p| a.priority == p))
        .cloned()
        .collect();

    // sort_by_key is stable, equal priorities keep their input order
    visible.sort_by_key(|a| a.priority.rank());
    visible
}

/// Stat card counts over the unfiltered list.
pub fn aggregate_counts(raw: &[Appointment], today: NaiveDate) -> AppointmentStats {
    raw.iter().fold(AppointmentStats::default(), |mut stats, a| {
        match a.priority {
            Priority::High => stats.high += 1,
            Priority::Medium => stats.medium += 1,
            Priority::Low => stats.low += 1,
        }
        if falls_on(&a.appointment_date_time, today) {
            stats.today += 1;
        }
        stats
    })
}

/// Filter button semantics: clicking the active filter clears it.
pub fn toggle_priority_filter(current: Option<Priority>, clicked: Priority) -> Option<Priority> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// View state for hosts that keep plain mutable state.
pub struct AppointmentViewModel<S: AppointmentStore> {
    store: S,
    samples: Vec<Appointment>,
    appointments: Vec<Appointment>,
    search_term: String,
    priority_filter: Option<Priority>,
    selected_xray: Option<String>,
    xray_modal_open: bool,
}

impl<S: AppointmentStore> AppointmentViewModel<S> {
    pub fn new(store: S) -> Self {
        Self::with_samples(store, sample_appointments())
    }

    pub fn with_samples(store: S, samples: Vec<Appointment>) -> Self {
        Self {
            store,
            samples,
            appointments: Vec::new(),
            search_term: String::new(),
            priority_filter: None,
            selected_xray: None,
            xray_modal_open: false,
        }
    }

    /// Read the store once and merge it with the samples.
    pub fn load(&mut self) {
        let stored = self.store.get_appointments();
        let stored_count = stored.len();
        self.appointments = merge_appointments(stored, self.samples.clone());
        info!(
            "Loaded {} appointments ({} from store)",
            self.appointments.len(),
            stored_count
        );
    }

    /// Clear the store and go back to exactly the sample set.
    pub fn reset_to_sample_data(&mut self) {
        self.store.clear_appointments();
        self.appointments = self.samples.clone();
        info!("Appointments reset to {} sample records", self.appointments.len());
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn visible(&self) -> Vec<Appointment> {
        visible_appointments(&self.appointments, &self.search_term, self.priority_filter)
    }

    pub fn stats(&self, today: NaiveDate) -> AppointmentStats {
        aggregate_counts(&self.appointments, today)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn priority_filter(&self) -> Option<Priority> {
        self.priority_filter
    }

    pub fn set_priority_filter(&mut self, filter: Option<Priority>) {
        self.priority_filter = filter;
    }

    pub fn toggle_priority_filter(&mut self, clicked: Priority) {
        self.priority_filter = toggle_priority_filter(self.priority_filter, clicked);
    }

    pub fn select_xray(&mut self, file_name: impl Into<String>) {
        self.selected_xray = Some(file_name.into());
        self.xray_modal_open = true;
    }

    pub fn clear_xray_selection(&mut self) {
        self.selected_xray = None;
        self.xray_modal_open = false;
    }

    pub fn selected_xray(&self) -> Option<&str> {
        self.selected_xray.as_deref()
    }

    pub fn is_xray_modal_open(&self) -> bool {
        self.xray_modal_open
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tokens(list: &[Appointment]) -> Vec<&str> {
        list.iter().map(|a| a.token.as_str()).collect()
    }

    fn patient(token: &str, name: &str, priority: Priority) -> Appointment {
        Appointment {
            token: token.to_string(),
            name: name.to_string(),
            age: "40".to_string(),
            gender: "Male".to_string(),
            phone: "9000000000".to_string(),
            email: format!("{}@example.com", token),
            symptoms: "Checkup".to_string(),
            priority,
            appointment_date_time: "2025-05-01T09:00".to_string(),
            xray_file_name: "leg-xray.jpeg".to_string(),
        }
    }

    fn mixed_list() -> Vec<Appointment> {
        vec![
            patient("10", "Low One", Priority::Low),
            patient("11", "High One", Priority::High),
            patient("12", "Medium One", Priority::Medium),
            patient("13", "Low Two", Priority::Low),
            patient("14", "High Two", Priority::High),
            patient("15", "Medium Two", Priority::Medium),
            patient("16", "High Three", Priority::High),
        ]
    }

    #[test]
    fn test_sample_set_default_order() {
        let visible = visible_appointments(&sample_appointments(), "", None);
        assert_eq!(tokens(&visible), vec!["1234", "1456", "1789"]);
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let visible = visible_appointments(&sample_appointments(), "neha", None);
        assert_eq!(tokens(&visible), vec!["1789"]);

        let visible = visible_appointments(&sample_appointments(), "ARJUN", None);
        assert_eq!(tokens(&visible), vec!["1456"]);
    }

    #[test]
    fn test_priority_filter_does_not_affect_stats() {
        let samples = sample_appointments();
        let visible = visible_appointments(&samples, "", Some(Priority::High));
        assert_eq!(tokens(&visible), vec!["1234"]);

        let today = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let stats = aggregate_counts(&samples, today);
        assert_eq!((stats.high, stats.medium, stats.low), (1, 1, 1));
    }

    #[test]
    fn test_empty_search_keeps_length_and_sorts() {
        let list = mixed_list();
        let visible = visible_appointments(&list, "", None);
        assert_eq!(visible.len(), list.len());
        let ranks: Vec<u8> = visible.iter().map(|a| a.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_sort_is_stable_within_priority() {
        let visible = visible_appointments(&mixed_list(), "", None);
        assert_eq!(
            tokens(&visible),
            vec!["11", "14", "16", "12", "15", "10", "13"]
        );
    }

    #[test]
    fn test_search_matches_token_or_name() {
        let list = vec![
            patient("4321", "Kiran Rao", Priority::Low),
            patient("9999", "Ravi 43", Priority::High),
            patient("5555", "Someone Else", Priority::Medium),
        ];

        // token-only match and name-only match both appear
        let visible = visible_appointments(&list, "43", None);
        assert_eq!(tokens(&visible), vec!["9999", "4321"]);

        // partial token search
        let visible = visible_appointments(&list, "55", None);
        assert_eq!(tokens(&visible), vec!["5555"]);

        let visible = visible_appointments(&list, "nobody", None);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_and_priority_are_combined() {
        let visible = visible_appointments(&mixed_list(), "two", Some(Priority::Low));
        assert_eq!(tokens(&visible), vec!["13"]);
    }

    #[test]
    fn test_counts_sum_to_length() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        for list in [Vec::new(), sample_appointments(), mixed_list()] {
            let stats = aggregate_counts(&list, today);
            assert_eq!(stats.total(), list.len());
        }
    }

    #[test]
    fn test_today_count_uses_date_prefix() {
        let mut list = mixed_list();
        list[0].appointment_date_time = "2025-04-30T08:00".to_string();
        list[1].appointment_date_time = "not a date".to_string();

        let stats = aggregate_counts(&list, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(stats.today, 5);

        let stats = aggregate_counts(&list, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
        assert_eq!(stats.today, 1);
    }

    #[test]
    fn test_merge_stored_wins_on_token() {
        let stored = vec![patient("1234", "X", Priority::Low)];
        let merged = merge_appointments(stored, sample_appointments());

        assert_eq!(merged.len(), 3);
        let matching: Vec<&Appointment> = merged.iter().filter(|a| a.token == "1234").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "X");
        assert_eq!(tokens(&merged), vec!["1234", "1456", "1789"]);
    }

    #[test]
    fn test_merge_with_empty_store_is_samples() {
        let merged = merge_appointments(Vec::new(), sample_appointments());
        assert_eq!(merged, sample_appointments());
    }

    #[test]
    fn test_toggle_priority_filter() {
        assert_eq!(toggle_priority_filter(None, Priority::High), Some(Priority::High));
        assert_eq!(toggle_priority_filter(Some(Priority::High), Priority::High), None);
        assert_eq!(
            toggle_priority_filter(Some(Priority::High), Priority::Low),
            Some(Priority::Low)
        );
    }

    #[test]
    fn test_view_model_load_merges_store() {
        let store = MemoryStore::with_appointments(vec![
            patient("1234", "Stored Riya", Priority::High),
            patient("2000", "New Patient", Priority::Medium),
        ]);
        let mut vm = AppointmentViewModel::new(store);
        assert!(vm.appointments().is_empty());

        vm.load();
        assert_eq!(vm.appointments().len(), 4);
        assert_eq!(tokens(&vm.visible()), vec!["1234", "2000", "1456", "1789"]);
        assert_eq!(vm.visible()[0].name, "Stored Riya");
    }

    #[test]
    fn test_view_model_filters() {
        let mut vm = AppointmentViewModel::new(MemoryStore::new());
        vm.load();

        vm.set_search_term("1");
        assert_eq!(vm.visible().len(), 3);

        vm.toggle_priority_filter(Priority::Medium);
        assert_eq!(tokens(&vm.visible()), vec!["1456"]);
        vm.toggle_priority_filter(Priority::Medium);
        assert_eq!(vm.priority_filter(), None);

        vm.set_priority_filter(Some(Priority::Low));
        vm.set_search_term("riya");
        assert!(vm.visible().is_empty());
        assert_eq!(vm.search_term(), "riya");

        let stats = vm.stats(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
        assert_eq!(stats, AppointmentStats { high: 1, medium: 1, low: 1, today: 3 });
    }

    #[test]
    fn test_xray_selection_toggle() {
        let mut vm = AppointmentViewModel::new(MemoryStore::new());
        assert!(!vm.is_xray_modal_open());
        assert_eq!(vm.selected_xray(), None);

        vm.select_xray("hand-xray.jpeg");
        assert!(vm.is_xray_modal_open());
        assert_eq!(vm.selected_xray(), Some("hand-xray.jpeg"));

        vm.select_xray("knee-xray.jpeg");
        assert_eq!(vm.selected_xray(), Some("knee-xray.jpeg"));

        vm.clear_xray_selection();
        assert!(!vm.is_xray_modal_open());
        assert_eq!(vm.selected_xray(), None);
    }

    #[test]
    fn test_reset_to_sample_data_is_idempotent() {
        let store = MemoryStore::with_appointments(vec![patient("1234", "X", Priority::Low)]);
        let mut vm = AppointmentViewModel::new(store);
        vm.load();
        vm.store()
            .save_appointment(patient("3000", "Later", Priority::High))
            .unwrap();

        vm.reset_to_sample_data();
        assert_eq!(vm.appointments(), sample_appointments().as_slice());
        assert!(vm.store().is_empty());

        vm.reset_to_sample_data();
        assert_eq!(vm.appointments(), sample_appointments().as_slice());
        assert!(vm.store().is_empty());

        // A later load sees the cleared store
        vm.load();
        assert_eq!(vm.appointments(), sample_appointments().as_slice());
    }
}
