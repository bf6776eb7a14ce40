// Appointment storage contract and the shared JSON layout

use std::cell::RefCell;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::Appointment;

/// Key-value backed appointment persistence.
///
/// Reads and clears never fail from the caller's point of view: an
/// implementation that cannot read its backing store logs the problem and
/// reports an empty list.
pub trait AppointmentStore {
    /// Stored appointments in insertion order.
    fn get_appointments(&self) -> Vec<Appointment>;

    /// Append one appointment. Tokens are not de-duplicated here.
    fn save_appointment(&self, appointment: Appointment) -> Result<()>;

    /// Remove every stored appointment. A no-op on an empty store.
    fn clear_appointments(&self);
}

/// Decode a JSON array of appointments.
///
/// Records that do not decode (unknown priority, missing fields) are
/// quarantined: skipped with a warning instead of failing the whole read.
/// Blank input is an empty store.
pub fn decode_appointments(json: &str) -> Result<Vec<Appointment>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<Value> = serde_json::from_str(json)?;
    let total = records.len();

    let appointments: Vec<Appointment> = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match serde_json::from_value::<Appointment>(record) {
            Ok(appointment) => Some(appointment),
            Err(e) => {
                warn!("Quarantined stored appointment #{}: {}", idx, e);
                None
            }
        })
        .collect();

    if appointments.len() < total {
        warn!(
            "{} of {} stored appointments were quarantined",
            total - appointments.len(),
            total
        );
    }

    Ok(appointments)
}

pub fn encode_appointments(appointments: &[Appointment]) -> Result<String> {
    Ok(serde_json::to_string(appointments)?)
}

/// In-process store, used by tests and as a scratch store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    appointments: RefCell<Vec<Appointment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: RefCell::new(appointments),
        }
    }

    pub fn len(&self) -> usize {
        self.appointments.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.borrow().is_empty()
    }
}

impl AppointmentStore for MemoryStore {
    fn get_appointments(&self) -> Vec<Appointment> {
        self.appointments.borrow().clone()
    }

    fn save_appointment(&self, appointment: Appointment) -> Result<()> {
        debug!("Saving appointment token {}", appointment.token);
        self.appointments.borrow_mut().push(appointment);
        Ok(())
    }

    fn clear_appointments(&self) {
        self.appointments.borrow_mut().clear();
    }
}
