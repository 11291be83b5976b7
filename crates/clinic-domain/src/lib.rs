//! Clinic Domain Records
//!
//! The concrete records shown by the dashboard list views, plus seeded
//! generators standing in for a backend.
//!
//! # Records
//!
//! | Record          | Status            | Colors                                   |
//! |-----------------|-------------------|------------------------------------------|
//! | [`Appointment`] | [`AppointmentStatus`] | completed/confirmed/cancelled/pending |
//! | [`Patient`]     | [`PatientStatus`]     | active/inactive/pending               |
//! | [`Invoice`]     | [`InvoiceStatus`]     | paid/progress/out of date             |
//! | [`NewsItem`]    | [`NewsCategory`]      | info                                  |
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_domain::{Appointment, FixtureSource};
//! use clinic_record::RecordStore;
//!
//! let store = RecordStore::from_source(&FixtureSource::<Appointment>::new(10, 42))?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod appointment;
mod fixture;
mod invoice;
mod news;
mod patient;

// Re-exports
pub use appointment::{Appointment, AppointmentStatus};
pub use fixture::{anchor, FixtureSource, Generate};
pub use invoice::{Invoice, InvoiceStatus};
pub use news::{health_news, HealthNewsSource, NewsCategory, NewsItem};
pub use patient::{Patient, PatientStatus};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for the clinic records
    pub use crate::{
        Appointment, AppointmentStatus, FixtureSource, Invoice, InvoiceStatus, NewsCategory,
        NewsItem, Patient, PatientStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
