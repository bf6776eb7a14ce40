// services/clinic-dash/src/main.rs
//
// Clinic Dashboard - appointment list, priority filters and X-ray viewer
//
// Build and serve with: trunk serve services/clinic-dash/index.html
//

fn main() {
    clinic_dash::mount();
}
