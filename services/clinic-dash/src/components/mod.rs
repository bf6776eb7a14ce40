// services/clinic-dash/src/components/mod.rs
//
// Clinic Dashboard - UI Components
//

mod header;
mod stats;
mod controls;
mod tables;
mod xray_modal;
mod toast;

pub use header::Header;
pub use stats::StatsCards;
pub use controls::Controls;
pub use tables::AppointmentTable;
pub use xray_modal::XrayModal;
pub use toast::ToastView;
