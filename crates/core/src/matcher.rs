//! Plate matcher: normalization, validation, suggestions.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::formats::FormatTable;
use crate::samples::{RandomValidations, SampleCatalogue};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Era label reported for plates that match no rule.
pub const INVALID_ERA: &str = "Invalid";

/// Maximum number of characters in a cleaned plate.
pub const MAX_PLATE_LENGTH: usize = 7;

pub const EMPTY_PLATE_MESSAGE: &str = "Plate number cannot be empty";
pub const PLATE_LENGTH_MESSAGE: &str = "Plate must be 1-7 characters";
pub const NO_MATCH_MESSAGE: &str = "Does not match any California plate format";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of matching a plate against the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub era: &'static str,
    pub message: String,
}

impl Validation {
    fn valid(era: &'static str) -> Self {
        Self {
            is_valid: true,
            era,
            message: format!("Valid {era} format"),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            era: INVALID_ERA,
            message: message.to_string(),
        }
    }
}

/// Detailed information about one plate, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Input exactly as received.
    pub plate: String,
    pub is_valid: bool,
    /// Matched era label, or `"Invalid"`.
    pub format_type: &'static str,
    pub message: String,
    /// Length of the cleaned form, in characters.
    pub character_count: usize,
    /// Whether the raw input contains a space or hyphen.
    pub has_special_chars: bool,
    /// Letter-for-digit correction, only offered for invalid plates.
    pub suggested_correction: Option<String>,
}

/// Aggregate of a bulk validation request.
#[derive(Debug, Clone, Serialize)]
pub struct BulkValidation {
    pub count: usize,
    pub valid_count: usize,
    pub results: Vec<ValidationResult>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Trim and uppercase, keeping internal separators.
pub fn normalize(plate: &str) -> String {
    plate.trim_matches(is_trimmed).to_uppercase()
}

/// Unicode whitespace plus the ASCII file, group, record and unit
/// separators (U+001C..=U+001F), which plate input also sheds.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Drop spaces and hyphens from an already normalized plate.
pub fn clean(normalized: &str) -> String {
    normalized.chars().filter(|c| !is_separator(*c)).collect()
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '-'
}

/// Swap the letters most often typed in place of digits.
///
/// The candidate is compared with the raw input, not its uppercased form,
/// so lowercase input is offered a suggestion even when only the case
/// differs.
fn suggest_correction(raw: &str) -> Option<String> {
    let candidate = normalize(raw).replace('O', "0").replace('I', "1");
    (candidate != raw).then_some(candidate)
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Validates plates against an immutable rule table.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone)]
pub struct PlateMatcher {
    table: FormatTable,
    samples: SampleCatalogue,
}

impl PlateMatcher {
    pub fn new(table: FormatTable, samples: SampleCatalogue) -> Self {
        Self { table, samples }
    }

    /// Matcher over the California rule table and sample catalogue.
    pub fn california() -> Result<Self, CoreError> {
        Ok(Self::new(
            FormatTable::california()?,
            SampleCatalogue::california(),
        ))
    }

    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    pub fn samples(&self) -> &SampleCatalogue {
        &self.samples
    }

    /// `(era, pattern texts)` pairs in priority order.
    pub fn formats(&self) -> impl Iterator<Item = (&'static str, Vec<&'static str>)> + '_ {
        self.table.rules().iter().map(|rule| {
            let patterns = rule.patterns.iter().map(|p| p.source()).collect();
            (rule.era, patterns)
        })
    }

    /// Number of eras in the table.
    pub fn format_count(&self) -> usize {
        self.table.len()
    }

    /// Match a raw plate against the rule table; the first matching era wins.
    pub fn validate(&self, plate: &str) -> Validation {
        if plate.is_empty() {
            return Validation::invalid(EMPTY_PLATE_MESSAGE);
        }

        let normalized = normalize(plate);
        let cleaned = clean(&normalized);

        let length = cleaned.chars().count();
        if !(1..=MAX_PLATE_LENGTH).contains(&length) {
            return Validation::invalid(PLATE_LENGTH_MESSAGE);
        }

        match self.table.first_match(&normalized, &cleaned) {
            Some(era) => Validation::valid(era),
            None => Validation::invalid(NO_MATCH_MESSAGE),
        }
    }

    /// Validate a plate and derive the detailed result record.
    pub fn plate_info(&self, plate: &str) -> ValidationResult {
        let validation = self.validate(plate);
        let cleaned = clean(&normalize(plate));

        let suggested_correction = if validation.is_valid {
            None
        } else {
            suggest_correction(plate)
        };

        ValidationResult {
            plate: plate.to_string(),
            is_valid: validation.is_valid,
            format_type: validation.era,
            message: validation.message,
            character_count: cleaned.chars().count(),
            has_special_chars: plate.chars().any(is_separator),
            suggested_correction,
        }
    }

    /// Validate many plates, skipping missing and empty entries.
    pub fn bulk_validate<I, S>(&self, plates: I) -> BulkValidation
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let results: Vec<ValidationResult> = plates
            .into_iter()
            .flatten()
            .filter(|plate| !plate.as_ref().is_empty())
            .map(|plate| self.plate_info(plate.as_ref()))
            .collect();

        let valid_count = results.iter().filter(|r| r.is_valid).count();

        BulkValidation {
            count: results.len(),
            valid_count,
            results,
        }
    }

    /// Pick a sample plate uniformly at random.
    pub fn generate_random_plate(&self) -> &'static str {
        self.samples.choose(&mut rand::rng())
    }

    /// Pick a sample plate using the given random source.
    pub fn generate_random_plate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.samples.choose(rng)
    }

    /// Start an endless stream of random sample validations.
    pub fn random_validations(self: Arc<Self>) -> RandomValidations {
        RandomValidations::new(self)
    }
}
