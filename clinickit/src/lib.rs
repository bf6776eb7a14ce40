// clinickit/src/lib.rs
//
// Shared appointment model, view model and storage contracts used by the
// browser dashboard (clinic-dash) and the terminal dashboard (clinic-tui).
//

pub mod config;
pub mod datetime;
pub mod errors;
pub mod sample;
pub mod session;
pub mod store;
pub mod types;
pub mod view_model;
pub mod xray;

pub use errors::ClinicError;
pub use session::{MemorySession, Session};
pub use store::{AppointmentStore, MemoryStore};
pub use types::{Appointment, AppointmentStats, Priority};
pub use view_model::AppointmentViewModel;
pub use xray::XrayCatalog;
