//! Graphseed — synthetic dataset generation for Cypher graph databases
//!
//! Produces synthetic subject records (players, cases) and occurrence records
//! (matches, adverse-event reports) with randomized attributes drawn from a
//! fixed vocabulary, and writes them to pretty-printed JSON artifacts for
//! bulk import into an external graph database.
//!
//! The generation pipeline is a single pass: a [`DatasetProfile`] supplies the
//! vocabulary and date window, a [`Generator`] with an explicitly seeded RNG
//! produces the records, and [`export::write_artifacts`] persists them.
//! Records are never mutated after generation; any downstream mutation happens
//! inside the external database after import.
//!
//! # Quick Start
//!
//! ```rust
//! use graphseed::{DatasetProfile, Generator};
//!
//! let mut generator = Generator::new(DatasetProfile::cricket(), 42).unwrap();
//! let dataset = generator.generate(50, 20);
//! assert_eq!(dataset.subjects.len(), 50);
//! assert_eq!(dataset.occurrences.len(), 20);
//! ```

pub mod error;
pub mod export;
pub mod generate;
pub mod profile;
pub mod record;

pub use error::{GraphSeedError, GraphSeedResult};
pub use export::ArtifactPaths;
pub use generate::Generator;
pub use profile::DatasetProfile;
pub use record::{Dataset, OccurrenceRecord, SubjectRecord};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
