//! Patients (bookings view)

use crate::fixture::{anchor, fixture_id, full_name, pick, Generate};
use chrono::{DateTime, Duration, Utc};
use clinic_record::{Record, RecordError, RecordId, RecordStatus, StatusColor};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Patient registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    /// Under care
    Active,
    /// Discharged or lapsed
    Inactive,
    /// Registration not complete
    Pending,
}

impl RecordStatus for PatientStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Pending];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    fn color(&self) -> StatusColor {
        match self {
            Self::Active => StatusColor::Success,
            Self::Inactive => StatusColor::Error,
            Self::Pending => StatusColor::Warning,
        }
    }
}

impl Display for PatientStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecordError::unknown_status(Patient::KIND, s))
    }
}

/// A registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Record id
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Gender as displayed
    pub gender: String,
    /// Age in years
    pub age: u8,
    /// Avatar path
    pub avatar: String,
    /// Street address
    pub address: String,
    /// ABO/Rh blood type
    pub blood_type: String,
    /// Most recent visit
    pub last_visit: DateTime<Utc>,
    /// Registration status
    pub status: PatientStatus,
    /// Free-form medical notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Patient {
    /// Notes for display
    #[must_use]
    pub fn notes_or_placeholder(&self) -> &str {
        self.notes
            .as_deref()
            .unwrap_or("No additional notes available.")
    }
}

impl Record for Patient {
    type Status = PatientStatus;

    const KIND: &'static str = "patient";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> PatientStatus {
        self.status
    }
}

const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

const STREETS: &[&str] = &[
    "Maple Avenue",
    "Harbor Road",
    "Cedar Lane",
    "Elm Street",
    "Riverside Drive",
    "Hillcrest Way",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.test", "clinic.test"];

const NOTE_SENTENCES: &[&str] = &[
    "Follow-up in six weeks.",
    "Allergic to penicillin.",
    "Blood pressure stable on current medication.",
    "Requested a second opinion.",
    "Recovering well after surgery.",
    "Advised to increase physical activity.",
];

impl Generate for Patient {
    fn generate(rng: &mut StdRng, _index: usize) -> Self {
        let (first, last) = full_name(rng);
        let gender = if rng.random_bool(0.5) { "Female" } else { "Male" };
        let email = format!(
            "{}.{}{}@{}",
            first,
            last,
            rng.random_range(1..100),
            pick(rng, EMAIL_DOMAINS)
        )
        .to_lowercase();
        let phone = format!(
            "({}) {:03}-{:04}",
            rng.random_range(200..1000),
            rng.random_range(0..1000),
            rng.random_range(0..10_000)
        );
        let notes = format!("{} {}", pick(rng, NOTE_SENTENCES), pick(rng, NOTE_SENTENCES));

        Self {
            id: fixture_id(rng),
            name: format!("{first} {last}"),
            email,
            phone,
            gender: gender.to_string(),
            age: rng.random_range(18..=90),
            avatar: "/assets/images/avatars/logo22.png".to_string(),
            address: format!("{} {}", rng.random_range(1..2000), pick(rng, STREETS)),
            blood_type: pick(rng, BLOOD_TYPES).to_string(),
            last_visit: anchor() - Duration::days(rng.random_range(0..365)),
            status: pick(rng, PatientStatus::ALL),
            notes: Some(notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixtureSource;

    #[test]
    fn status_colors_match_lookup_table() {
        assert_eq!(PatientStatus::Active.color(), StatusColor::Success);
        assert_eq!(PatientStatus::Inactive.color(), StatusColor::Error);
        assert_eq!(PatientStatus::Pending.color(), StatusColor::Warning);
    }

    #[test]
    fn fixtures_are_plausible() {
        for patient in FixtureSource::<Patient>::new(15, 99).generate() {
            assert!((18..=90).contains(&patient.age));
            assert!(BLOOD_TYPES.contains(&patient.blood_type.as_str()));
            assert_eq!(patient.email, patient.email.to_lowercase());
            assert!(patient.last_visit <= anchor());
            assert!(patient.notes.is_some());
        }
    }

    #[test]
    fn notes_placeholder() {
        let mut patient = FixtureSource::<Patient>::new(1, 1).generate().remove(0);
        patient.notes = None;
        assert_eq!(patient.notes_or_placeholder(), "No additional notes available.");
    }

    #[test]
    fn parse_status() {
        assert_eq!("inactive".parse::<PatientStatus>(), Ok(PatientStatus::Inactive));
        assert!("archived".parse::<PatientStatus>().is_err());
    }
}
