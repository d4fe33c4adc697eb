//! RenoPlan flat-file layer
//!
//! Maps collections of domain entities to and from comma-delimited lines.
//! Reading and writing the lines themselves (files, stores) stays with
//! the caller; this crate only converts between in-memory lines and
//! validated entities, accumulating per-line error reports on import.

pub mod import;
pub mod record;

pub use import::{export_lines, import_lines, ImportOutcome, LineFailure};
pub use record::CsvRecord;
