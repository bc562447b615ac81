//! California license plate format matching.
//!
//! Holds the era-keyed rule table, the plate matcher that evaluates raw
//! input against it, and the sample catalogue used for random plates.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod formats;
pub mod matcher;
pub mod samples;

pub use error::CoreError;
pub use formats::{FormatRule, FormatTable};
pub use matcher::{BulkValidation, PlateMatcher, Validation, ValidationResult};
pub use samples::{RandomValidations, SampleCatalogue};
