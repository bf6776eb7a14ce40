// Built-in appointments shown when nothing is stored yet.

use crate::types::{Appointment, Priority};

#[allow(clippy::too_many_arguments)]
fn appointment(
    token: &str,
    name: &str,
    age: &str,
    gender: &str,
    phone: &str,
    email: &str,
    symptoms: &str,
    priority: Priority,
    appointment_date_time: &str,
    xray_file_name: &str,
) -> Appointment {
    Appointment {
        token: token.to_string(),
        name: name.to_string(),
        age: age.to_string(),
        gender: gender.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        symptoms: symptoms.to_string(),
        priority,
        appointment_date_time: appointment_date_time.to_string(),
        xray_file_name: xray_file_name.to_string(),
    }
}

/// The fixed sample set, in display order.
pub fn sample_appointments() -> Vec<Appointment> {
    vec![
        appointment(
            "1234",
            "Riya Sharma",
            "29",
            "Female",
            "9876543210",
            "riya@example.com",
            "Severe tooth pain on the right side. Unable to eat or drink.",
            Priority::High,
            "2025-04-30T10:30",
            "knee-xray.jpeg",
        ),
        appointment(
            "1456",
            "Arjun Mehta",
            "34",
            "Male",
            "9876543211",
            "arjun@example.com",
            "Jaw swelling for the past 3 days. Mild pain when chewing.",
            Priority::Medium,
            "2025-04-30T11:30",
            "spine-xray.jpeg",
        ),
        appointment(
            "1789",
            "Neha Singh",
            "22",
            "Female",
            "9876543212",
            "neha@example.com",
            "Bleeding gums when brushing. No pain.",
            Priority::Low,
            "2025-04-30T14:00",
            "hand-xray.jpeg",
        ),
    ]
}
