//! Patient receipts (invoices)

use crate::fixture::{fixture_id, pick, Generate};
use clinic_record::{Record, RecordError, RecordId, RecordStatus, StatusColor};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Payment status of a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Settled
    #[serde(rename = "paid")]
    Paid,
    /// Partially paid or being processed
    #[serde(rename = "progress")]
    Progress,
    /// Past due date
    #[serde(rename = "out of date")]
    OutOfDate,
}

impl RecordStatus for InvoiceStatus {
    const ALL: &'static [Self] = &[Self::Paid, Self::Progress, Self::OutOfDate];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Progress => "progress",
            Self::OutOfDate => "out of date",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Progress => "Progress",
            Self::OutOfDate => "Out of date",
        }
    }

    fn color(&self) -> StatusColor {
        match self {
            Self::Progress => StatusColor::Warning,
            Self::OutOfDate => StatusColor::Error,
            Self::Paid => StatusColor::Success,
        }
    }
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecordError::unknown_status(Invoice::KIND, s))
    }
}

/// A patient receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Record id (shown as patient id)
    pub id: RecordId,
    /// Receipt number (`INV-1990`)
    pub invoice_number: String,
    /// Procedure billed
    pub category: String,
    /// Amount in cents
    pub price_cents: u64,
    /// Payment status
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Amount as `$1,234.50`
    #[must_use]
    pub fn price_display(&self) -> String {
        let dollars = (self.price_cents / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("${grouped}.{:02}", self.price_cents % 100)
    }
}

impl Record for Invoice {
    type Status = InvoiceStatus;

    const KIND: &'static str = "invoice";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }
}

const PROCEDURES: &[&str] = &[
    "Appendectomy",
    "Cataract Surgery",
    "Knee Replacement",
    "Tonsillectomy",
    "Coronary Bypass",
    "Hernia Repair",
];

impl Generate for Invoice {
    fn generate(rng: &mut StdRng, index: usize) -> Self {
        Self {
            id: fixture_id(rng),
            invoice_number: format!("INV-{}", 1990 + index),
            category: pick(rng, PROCEDURES).to_string(),
            price_cents: rng.random_range(8_300..=2_500_000),
            status: pick(rng, InvoiceStatus::ALL),
        }
    }
}
