// services/clinic-tui/src/state.rs
//
// Dashboard state management

use chrono::{DateTime, Local, NaiveDate, Utc};
use clinickit::{Appointment, AppointmentStats, AppointmentViewModel, MemorySession, Priority, Session, XrayCatalog};
use tracing::info;

use crate::store::JsonFileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: String,  // INFO, WARN, ERROR
    pub message: String,
}

pub struct DashboardState {
    pub view: AppointmentViewModel<JsonFileStore>,
    pub session: MemorySession,
    pub xray: XrayCatalog,

    // UI state
    pub input_mode: InputMode,
    pub selected_row: usize,

    // Activity log
    pub activity_log: Vec<LogEntry>,
}

impl DashboardState {
    pub fn new(store: JsonFileStore, xray: XrayCatalog) -> Self {
        Self {
            view: AppointmentViewModel::new(store),
            session: MemorySession::new(true),
            xray,
            input_mode: InputMode::Normal,
            selected_row: 0,
            activity_log: Vec::new(),
        }
    }

    pub fn load(&mut self) {
        self.view.load();
        let count = self.view.appointments().len();
        self.add_log("INFO", &format!("Loaded {} appointments", count));
    }

    pub fn visible(&self) -> Vec<Appointment> {
        self.view.visible()
    }

    pub fn stats(&self) -> AppointmentStats {
        self.view.stats(today_utc())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    // Search input

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn finish_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.view.search_term().to_string();
        term.push(c);
        self.view.set_search_term(term);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.view.search_term().to_string();
        term.pop();
        self.view.set_search_term(term);
        self.clamp_selection();
    }

    pub fn toggle_filter(&mut self, priority: Priority) {
        self.view.toggle_priority_filter(priority);
        match self.view.priority_filter() {
            Some(p) => self.add_log("INFO", &format!("Showing {} priority only", p)),
            None => self.add_log("INFO", "Priority filter cleared"),
        }
        self.clamp_selection();
    }

    // Row cursor

    pub fn select_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn select_down(&mut self) {
        if self.selected_row + 1 < self.visible().len() {
            self.selected_row += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    // X-ray popup

    pub fn view_selected_xray(&mut self) {
        let Some(appointment) = self.visible().into_iter().nth(self.selected_row) else {
            return;
        };
        self.add_log(
            "INFO",
            &format!("Viewing X-ray {} for #{}", appointment.xray_file_name, appointment.token),
        );
        self.view.select_xray(appointment.xray_file_name);
    }

    pub fn close_xray(&mut self) {
        self.view.clear_xray_selection();
    }

    pub fn selected_xray_url(&self) -> Option<&str> {
        self.view.selected_xray().map(|file| self.xray.lookup_url(file))
    }

    // Actions

    pub fn clear_data(&mut self) {
        self.view.reset_to_sample_data();
        self.selected_row = 0;
        self.add_log("WARN", "Data cleared: all patient appointments reset to default");
    }

    pub fn logout(&mut self) {
        self.session.logout();
        info!("Operator logged out");
        self.add_log("INFO", "Logged out");
    }

    pub fn add_log(&mut self, level: &str, message: &str) {
        self.activity_log.push(LogEntry {
            timestamp: Local::now(),
            level: level.to_string(),
            message: message.to_string(),
        });

        // Keep last 100 entries
        if self.activity_log.len() > 100 {
            self.activity_log.remove(0);
        }
    }
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
