// services/clinic-dash/src/storage.rs
//
// Clinic Dashboard - localStorage backed store and session
//

use clinickit::config::StorageConfig;
use clinickit::errors::{ClinicError, Result};
use clinickit::store::{decode_appointments, encode_appointments};
use clinickit::{Appointment, AppointmentStore, Session};
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    leptos::window().local_storage().ok().flatten()
}

fn js_error(context: &str, err: JsValue) -> ClinicError {
    ClinicError::Storage(format!("{}: {:?}", context, err))
}

/// Appointments kept as one JSON array under a single localStorage key.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            key: config.appointments_key.clone(),
        }
    }

    fn read_raw(&self) -> Result<Option<String>> {
        let storage = local_storage()
            .ok_or_else(|| ClinicError::Storage("localStorage unavailable".to_string()))?;
        storage
            .get_item(&self.key)
            .map_err(|e| js_error("read failed", e))
    }
}

impl AppointmentStore for BrowserStore {
    fn get_appointments(&self) -> Vec<Appointment> {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read stored appointments: {}", e);
                return Vec::new();
            }
        };

        decode_appointments(&raw).unwrap_or_else(|e| {
            log::warn!("Stored appointments are not a JSON array, ignoring: {}", e);
            Vec::new()
        })
    }

    fn save_appointment(&self, appointment: Appointment) -> Result<()> {
        let mut appointments = self.get_appointments();
        appointments.push(appointment);
        let json = encode_appointments(&appointments)?;

        let storage = local_storage()
            .ok_or_else(|| ClinicError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(&self.key, &json)
            .map_err(|e| js_error("write failed", e))
    }

    fn clear_appointments(&self) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("Could not clear stored appointments: {:?}", e);
            }
        }
    }
}

/// `"true"` under the session key means logged in.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    key: String,
}

impl BrowserSession {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            key: config.session_key.clone(),
        }
    }
}

impl Session for BrowserSession {
    fn is_logged_in(&self) -> bool {
        local_storage()
            .and_then(|storage| storage.get_item(&self.key).ok().flatten())
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    fn logout(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
        log::info!("Logged out");
    }
}

/// Leave the dashboard for the login page.
pub fn redirect_to_login() {
    if let Err(e) = leptos::window().location().set_href("/login") {
        log::error!("Redirect to /login failed: {:?}", e);
    }
}
