// services/clinic-tui/src/store.rs
//
// JSON file backed appointment store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clinickit::errors::Result;
use clinickit::store::{decode_appointments, encode_appointments};
use clinickit::{Appointment, AppointmentStore};
use tracing::{debug, warn};

/// The whole file is one JSON array of appointments.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Appointment>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_appointments(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, appointments: &[Appointment]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, encode_appointments(appointments)?)?;
        Ok(())
    }
}

impl AppointmentStore for JsonFileStore {
    fn get_appointments(&self) -> Vec<Appointment> {
        self.read_all().unwrap_or_else(|e| {
            warn!("Could not read {}: {}", self.path.display(), e);
            Vec::new()
        })
    }

    fn save_appointment(&self, appointment: Appointment) -> Result<()> {
        let mut appointments = self.read_all()?;
        debug!("Saving appointment token {} to {}", appointment.token, self.path.display());
        appointments.push(appointment);
        self.write_all(&appointments)
    }

    fn clear_appointments(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Could not clear {}: {}", self.path.display(), e),
        }
    }
}
