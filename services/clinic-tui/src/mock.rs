// services/clinic-tui/src/mock.rs
//
// Mock appointment generator for demo mode

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use clinickit::errors::{ClinicError, Result};
use clinickit::sample::sample_appointments;
use clinickit::{Appointment, AppointmentStore, Priority};
use rand::seq::SliceRandom;
use rand::Rng;

const PATIENTS: [(&str, &str); 8] = [
    ("Kavya Iyer", "Female"),
    ("Rohan Das", "Male"),
    ("Ananya Gupta", "Female"),
    ("Vikram Nair", "Male"),
    ("Meera Joshi", "Female"),
    ("Aditya Kulkarni", "Male"),
    ("Sneha Reddy", "Female"),
    ("Farhan Qureshi", "Male"),
];

const SYMPTOMS: [&str; 6] = [
    "Sharp pain in lower molar when biting.",
    "Sensitivity to cold drinks for two weeks.",
    "Swollen gums around wisdom tooth.",
    "Chipped front tooth after a fall.",
    "Persistent bad breath and mild bleeding.",
    "Routine checkup, no complaints.",
];

// The last one is not in the X-ray catalog and exercises the placeholder.
const XRAY_FILES: [&str; 5] = [
    "knee-xray.jpeg",
    "leg-xray.jpeg",
    "hand-xray.jpeg",
    "spine-xray.jpeg",
    "jaw-xray.jpeg",
];

/// Demo tokens are four-digit numbers.
const TOKEN_MIN: u32 = 1000;
const TOKEN_MAX: u32 = 9999;
const TOKEN_SPACE: usize = (TOKEN_MAX - TOKEN_MIN + 1) as usize;

pub struct MockAppointmentGenerator {
    used_tokens: HashSet<String>,
    used_in_range: usize,
}

impl MockAppointmentGenerator {
    pub fn new() -> Self {
        // Keep generated tokens clear of the samples so demo rows don't shadow them
        let mut generator = Self {
            used_tokens: HashSet::new(),
            used_in_range: 0,
        };
        for appointment in sample_appointments() {
            generator.reserve(appointment.token);
        }
        generator
    }

    /// Mark `token` as taken. Returns false if it already was.
    fn reserve(&mut self, token: String) -> bool {
        let in_range = token
            .parse::<u32>()
            .map(|n| (TOKEN_MIN..=TOKEN_MAX).contains(&n) && n.to_string() == token)
            .unwrap_or(false);
        if !self.used_tokens.insert(token) {
            return false;
        }
        if in_range {
            self.used_in_range += 1;
        }
        true
    }

    /// Tokens still available to `generate`.
    pub fn tokens_left(&self) -> usize {
        TOKEN_SPACE - self.used_in_range
    }

    /// Build one random appointment on `today` or the next two days.
    pub fn generate(&mut self, today: NaiveDate) -> Result<Appointment> {
        if self.tokens_left() == 0 {
            return Err(ClinicError::TokensExhausted { requested: 1, available: 0 });
        }

        let mut rng = rand::thread_rng();

        let token = loop {
            let candidate = rng.gen_range(TOKEN_MIN..=TOKEN_MAX).to_string();
            if self.reserve(candidate.clone()) {
                break candidate;
            }
        };

        let (name, gender) = PATIENTS[rng.gen_range(0..PATIENTS.len())];
        let symptoms = SYMPTOMS.choose(&mut rng).copied().unwrap_or(SYMPTOMS[0]);
        let xray = XRAY_FILES.choose(&mut rng).copied().unwrap_or(XRAY_FILES[0]);
        let priority = Priority::ALL[rng.gen_range(0..Priority::ALL.len())];

        let day = today + Duration::days(rng.gen_range(0..3));
        let hour = rng.gen_range(9..18);
        let minute = if rng.gen_bool(0.5) { 0 } else { 30 };

        let first_name = name.split(' ').next().unwrap_or(name).to_lowercase();

        Ok(Appointment {
            token,
            name: name.to_string(),
            age: rng.gen_range(18..80).to_string(),
            gender: gender.to_string(),
            phone: format!("98{:08}", rng.gen_range(0..100_000_000u32)),
            email: format!("{}@example.com", first_name),
            symptoms: symptoms.to_string(),
            priority,
            appointment_date_time: format!("{}T{:02}:{:02}", day.format("%Y-%m-%d"), hour, minute),
            xray_file_name: xray.to_string(),
        })
    }

    /// Write `count` generated appointments into `store`, avoiding tokens it
    /// already holds. Nothing is written if `count` doesn't fit.
    pub fn seed(&mut self, store: &impl AppointmentStore, count: usize, today: NaiveDate) -> Result<usize> {
        for appointment in store.get_appointments() {
            self.reserve(appointment.token);
        }

        let available = self.tokens_left();
        if count > available {
            return Err(ClinicError::TokensExhausted { requested: count, available });
        }

        for _ in 0..count {
            store.save_appointment(self.generate(today)?)?;
        }
        Ok(count)
    }
}

impl Default for MockAppointmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinickit::datetime::format_date_time;
    use clinickit::MemoryStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    }

    #[test]
    fn test_generated_tokens_are_unique_and_avoid_samples() {
        let mut generator = MockAppointmentGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let appointment = generator.generate(day()).unwrap();
            assert_eq!(appointment.token.len(), 4);
            assert!(!["1234", "1456", "1789"].contains(&appointment.token.as_str()));
            assert!(seen.insert(appointment.token));
        }
    }

    #[test]
    fn test_generated_date_time_is_parseable_and_near_today() {
        let mut generator = MockAppointmentGenerator::new();
        for _ in 0..50 {
            let appointment = generator.generate(day()).unwrap();
            let raw = &appointment.appointment_date_time;
            assert_ne!(&format_date_time(raw), raw);
            assert!(raw.starts_with("2025-04-30") || raw.starts_with("2025-05-01") || raw.starts_with("2025-05-02"));
        }
    }

    #[test]
    fn test_seed_writes_to_store() {
        let store = MemoryStore::new();
        let written = MockAppointmentGenerator::new().seed(&store, 5, day()).unwrap();
        assert_eq!(written, 5);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_second_seed_avoids_tokens_already_stored() {
        let store = MemoryStore::new();
        MockAppointmentGenerator::new().seed(&store, 3000, day()).unwrap();
        MockAppointmentGenerator::new().seed(&store, 3000, day()).unwrap();

        let tokens: HashSet<String> = store.get_appointments().into_iter().map(|a| a.token).collect();
        assert_eq!(store.len(), 6000);
        assert_eq!(tokens.len(), 6000);
    }

    #[test]
    fn test_seed_beyond_token_space_fails_without_writing() {
        let store = MemoryStore::new();
        let mut generator = MockAppointmentGenerator::new();
        assert_eq!(generator.tokens_left(), 8997);

        let err = generator.seed(&store, 8998, day()).unwrap_err();
        assert!(matches!(
            err,
            ClinicError::TokensExhausted { requested: 8998, available: 8997 }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_generate_errors_once_every_token_is_used() {
        let store = MemoryStore::new();
        let mut generator = MockAppointmentGenerator::new();
        assert_eq!(generator.seed(&store, 8997, day()).unwrap(), 8997);
        assert_eq!(generator.tokens_left(), 0);

        assert!(matches!(
            generator.generate(day()),
            Err(ClinicError::TokensExhausted { .. })
        ));
    }
}
