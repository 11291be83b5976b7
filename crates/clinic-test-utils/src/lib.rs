//! Testing utilities for the clinic workspace
//!
//! Shared fixtures with predictable ids, plus tracing setup for tests.

#![allow(missing_docs)]

use chrono::Duration;
use clinic_domain::{anchor, Appointment, AppointmentStatus};
use clinic_record::{Collection, RecordId};
use tracing_subscriber::EnvFilter;

/// Appointment `id` with the given status
pub fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: RecordId::new(id),
        appointment_number: format!("APPT-{id}"),
        patient_name: format!("Patient {id}"),
        doctor_name: "Dr. Test".to_string(),
        appointment_date: anchor() + Duration::hours(1),
        status,
        avatar: "/assets/images/avatars/avatar_1.jpg".to_string(),
    }
}

/// One appointment per status, with ids `appt-0`, `appt-1`, ...
pub fn appointments_with(statuses: &[AppointmentStatus]) -> Collection<Appointment> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| appointment(&format!("appt-{i}"), *status))
        .collect()
}

/// Record ids from string literals
pub fn ids(values: &[&str]) -> Vec<RecordId> {
    values.iter().copied().map(RecordId::new).collect()
}

/// Install a test-writer subscriber honoring `RUST_LOG`; repeat calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
