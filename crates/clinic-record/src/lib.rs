//! Clinic Record Model
//!
//! Typed records, persistent collections and the record store behind every
//! dashboard list view.
//!
//! # Core Concepts
//!
//! - [`Record`]: Trait for domain entities (appointment, patient, invoice)
//! - [`RecordStatus`]: Closed status enumeration with an explicit color mapping
//! - [`RecordId`]: Unique string identifier
//! - [`Collection<R>`]: Ordered, cheaply cloneable snapshot of records
//! - [`RecordStore<R>`]: Owner of the collection; the only place deletes happen
//! - [`RecordSource<R>`]: Injected capability that supplies the initial records
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_record::{RecordStore, StaticSource};
//!
//! let store = RecordStore::from_source(&StaticSource::new(records))?;
//! let mut store = store;
//! store.delete(&id);
//! assert!(!store.contains(&id));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod collection;
mod error;
mod id;
mod record;
mod source;
mod store;

// Re-exports
pub use collection::Collection;
pub use error::RecordError;
pub use id::RecordId;
pub use record::{LabelVariant, Record, RecordStatus, StatusColor};
pub use source::{RecordSource, SourceError, StaticSource};
pub use store::RecordStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with records
    pub use crate::{
        Collection, LabelVariant, Record, RecordId, RecordSource, RecordStatus, RecordStore,
        StatusColor,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub(crate) enum Triage {
        Open,
        Closed,
    }

    impl RecordStatus for Triage {
        const ALL: &'static [Self] = &[Triage::Open, Triage::Closed];

        fn as_str(&self) -> &'static str {
            match self {
                Triage::Open => "open",
                Triage::Closed => "closed",
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Triage::Open => "Open",
                Triage::Closed => "Closed",
            }
        }

        fn color(&self) -> StatusColor {
            match self {
                Triage::Open => StatusColor::Warning,
                Triage::Closed => StatusColor::Success,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Ticket {
        pub(crate) id: RecordId,
        pub(crate) status: Triage,
    }

    impl Record for Ticket {
        type Status = Triage;

        const KIND: &'static str = "ticket";

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn status(&self) -> Triage {
            self.status
        }
    }

    pub(crate) fn ticket(id: &str, status: Triage) -> Ticket {
        Ticket {
            id: RecordId::new(id),
            status,
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn source_to_store_lifecycle() {
        let source = StaticSource::new(vec![
            ticket("a", Triage::Open),
            ticket("b", Triage::Closed),
            ticket("c", Triage::Open),
        ]);

        let mut store = RecordStore::from_source(&source).unwrap();
        assert_eq!(store.len(), 3);

        let snapshot = store.get_all().clone();
        store.delete(&RecordId::new("b"));

        // Earlier snapshot is untouched
        assert_eq!(snapshot.len(), 3);
        assert_eq!(store.get_all().ids(), vec![RecordId::new("a"), RecordId::new("c")]);
    }

    #[test]
    fn status_parse_uses_declaration_table() {
        assert_eq!(Triage::parse("open"), Some(Triage::Open));
        assert_eq!(Triage::parse("closed"), Some(Triage::Closed));
        assert_eq!(Triage::parse("Open"), None);
        assert_eq!(Triage::parse("all"), None);
    }
}
