//! Era-keyed plate format rules.
//!
//! The table is compiled once from [`CALIFORNIA_FORMATS`] and never mutated.
//! Declaration order is priority order: eras are tried top to bottom and
//! patterns within an era left to right.

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Static rule definitions as `(era, patterns)` pairs, in priority order.
pub const CALIFORNIA_FORMATS: &[(&str, &[&str])] = &[
    // Historical formats
    ("1914-1920", &[r"^\d{1,5}$"]),
    ("1920-1928", &[r"^\d{3} \d{3}$", r"^\d{6}$"]),
    ("1929-1934", &[r"^[A-Z]{3}-\d{3}$"]),
    ("1935-1956", &[r"^\d{1,3}[A-Z]{1,3}$", r"^[A-Z]{1,3}\d{1,3}$"]),
    // Modern formats
    ("1956-1969", &[r"^[A-Z]{3} \d{3}$"]),
    ("1970-1980", &[r"^\d{3} [A-Z]{3}$"]),
    ("1981-2000", &[r"^[1-9][A-Z]{3}\d{3}$"]),
    (
        "2001-present",
        &[
            r"^[1-9][A-Z]{3}\d{3}$",   // standard
            r"^[A-Z]{2}\d{3}[A-Z]{2}$", // commercial
            r"^[A-Z]{1,7}$",            // personalized
            r"^[A-Z]{3}\d{4}$",         // motorcycle
            r"^[A-Z]{1}\d{6}$",         // 1963 series
            r"^\d{7}$",                 // all numeric
        ],
    ),
    // Special series
    ("legislative", &[r"^S\d{6}$"]),
    ("exempt", &[r"^E\d{6}$"]),
    ("livery", &[r"^L\d{6}$"]),
];

// ---------------------------------------------------------------------------
// Compiled rules
// ---------------------------------------------------------------------------

/// A single compiled pattern together with the form of the input it is
/// tested against.
#[derive(Debug, Clone)]
pub struct FormatPattern {
    source: &'static str,
    regex: Regex,
    uses_separators: bool,
}

impl FormatPattern {
    fn compile(era: &'static str, pattern: &'static str) -> Result<Self, CoreError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
            CoreError::InvalidPattern {
                era,
                pattern,
                source,
            }
        })?;

        Ok(Self {
            source: pattern,
            regex,
            // Textual check: the hyphen of a class range like `A-Z` counts.
            uses_separators: pattern.contains(' ') || pattern.contains('-'),
        })
    }

    /// The pattern text as declared.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Whether this pattern is tested against the separator-preserving form.
    pub fn uses_separators(&self) -> bool {
        self.uses_separators
    }

    /// Test the appropriate input form against this pattern.
    pub fn matches(&self, normalized: &str, cleaned: &str) -> bool {
        let target = if self.uses_separators {
            normalized
        } else {
            cleaned
        };
        self.regex.is_match(target)
    }
}

/// One era and its ordered patterns.
#[derive(Debug, Clone)]
pub struct FormatRule {
    pub era: &'static str,
    pub patterns: Vec<FormatPattern>,
}

impl FormatRule {
    /// Whether any of this era's patterns matches.
    pub fn matches(&self, normalized: &str, cleaned: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches(normalized, cleaned))
    }
}

/// The full ordered rule table.
#[derive(Debug, Clone)]
pub struct FormatTable {
    rules: Vec<FormatRule>,
}

impl FormatTable {
    /// Compile a table from static `(era, patterns)` definitions.
    pub fn new(
        definitions: &'static [(&'static str, &'static [&'static str])],
    ) -> Result<Self, CoreError> {
        let rules = definitions
            .iter()
            .map(|&(era, patterns)| {
                let patterns = patterns
                    .iter()
                    .map(|&pattern| FormatPattern::compile(era, pattern))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(FormatRule { era, patterns })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self { rules })
    }

    /// The California table.
    pub fn california() -> Result<Self, CoreError> {
        Self::new(CALIFORNIA_FORMATS)
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[FormatRule] {
        &self.rules
    }

    /// Number of eras.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Era of the first rule matching either input form.
    pub fn first_match(&self, normalized: &str, cleaned: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(normalized, cleaned))
            .map(|rule| rule.era)
    }
}
