use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ClinicError;

/// Clinical urgency of an appointment. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank, lower is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(ClinicError::InvalidPriority(other.to_string())),
        }
    }
}

/// A patient appointment as stored by the dashboards.
///
/// Field names on the wire are camelCase (`appointmentDateTime`,
/// `xrayFileName`) so records written by the browser store stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub token: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub symptoms: String,
    pub priority: Priority,
    /// Local, unzoned `YYYY-MM-DDTHH:MM`.
    pub appointment_date_time: String,
    pub xray_file_name: String,
}

/// Stat card counts for the whole (unfiltered) list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub today: usize,
}

impl AppointmentStats {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    pub fn count_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}
