//! Normalized representation for component inventories.
//!
//! Both input documents (the Syft manifest and the SCANOSS match report) are
//! normalized to [`ComponentRecord`]s collected in a [`RecordTable`] before
//! merge and export.

mod record;

pub use record::*;
