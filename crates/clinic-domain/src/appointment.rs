//! Appointments

use crate::fixture::{anchor, fixture_id, full_name, pick, Generate};
use chrono::{DateTime, Duration, Utc};
use clinic_record::{Record, RecordError, RecordId, RecordStatus, StatusColor};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and confirmed with the patient
    Confirmed,
    /// Awaiting confirmation
    Pending,
    /// Called off
    Cancelled,
    /// Took place
    Completed,
    /// On the calendar, not yet confirmed
    Scheduled,
}

impl RecordStatus for AppointmentStatus {
    /// Includes `Scheduled` so every status has a tab and tab counts sum to
    /// the total, even though generated fixtures never draw it.
    const ALL: &'static [Self] = &[
        Self::Confirmed,
        Self::Pending,
        Self::Cancelled,
        Self::Completed,
        Self::Scheduled,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::Scheduled => "scheduled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Scheduled => "Scheduled",
        }
    }

    fn color(&self) -> StatusColor {
        match self {
            Self::Completed => StatusColor::Success,
            Self::Confirmed => StatusColor::Info,
            Self::Cancelled => StatusColor::Error,
            Self::Pending | Self::Scheduled => StatusColor::Warning,
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecordError::unknown_status(Appointment::KIND, s))
    }
}

/// A booked visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Record id
    pub id: RecordId,
    /// Human facing number (`APPT-1234`)
    pub appointment_number: String,
    /// Patient full name
    pub patient_name: String,
    /// Attending doctor (`Dr. ...`)
    pub doctor_name: String,
    /// Start time
    pub appointment_date: DateTime<Utc>,
    /// Lifecycle status
    pub status: AppointmentStatus,
    /// Patient avatar path
    pub avatar: String,
}

impl Record for Appointment {
    type Status = AppointmentStatus;

    const KIND: &'static str = "appointment";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> AppointmentStatus {
        self.status
    }
}

/// Statuses the mock appointment list draws from
const FIXTURE_STATUSES: &[AppointmentStatus] = &[
    AppointmentStatus::Confirmed,
    AppointmentStatus::Pending,
    AppointmentStatus::Cancelled,
    AppointmentStatus::Completed,
];

impl Generate for Appointment {
    fn generate(rng: &mut StdRng, index: usize) -> Self {
        let (first, last) = full_name(rng);
        let (doctor_first, doctor_last) = full_name(rng);
        let minutes_ahead = rng.random_range(30..=7 * 24 * 60);

        Self {
            id: fixture_id(rng),
            appointment_number: format!("APPT-{}", rng.random_range(1000..=9999)),
            patient_name: format!("{first} {last}"),
            doctor_name: format!("Dr. {doctor_first} {doctor_last}"),
            appointment_date: anchor() + Duration::minutes(minutes_ahead),
            status: pick(rng, FIXTURE_STATUSES),
            avatar: format!("/assets/images/avatars/avatar_{}.jpg", index + 1),
        }
    }
}
