//! Sample plate catalogue and the endless random-validation iterator.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CoreError;
use crate::matcher::{PlateMatcher, ValidationResult};

/// Example plates handed out by the random endpoints.
///
/// Every entry must validate against the California table; the
/// `every_sample_plate_is_valid` test keeps the two in step.
pub const CALIFORNIA_SAMPLES: &[&str] = &[
    // Modern plates (2001-present)
    "1ABC123", "7XYZ789", "2DEF456", "8GHI012",
    "AB123CD", "XY789ZW", "LM456NO", "PQ901RS",
    "CALIF", "SUNNY", "COASTER", "SURFER",
    "ABC1234", "XYZ5678", "MNO9012", "PQR3456",
    "A123456", "B789012", "C345678", "D901234",
    "1234567", "8901234", "5678901", "2345678",
    // Vintage plates
    "123456", "ABC-123", "ABC 123", "123 ABC",
    // Special plates
    "S123456", "E789012", "L345678",
];

/// Fixed, non-empty list of sample plates.
#[derive(Debug, Clone)]
pub struct SampleCatalogue {
    plates: Vec<&'static str>,
}

impl SampleCatalogue {
    pub fn new(plates: &[&'static str]) -> Result<Self, CoreError> {
        if plates.is_empty() {
            return Err(CoreError::EmptyCatalogue);
        }
        Ok(Self {
            plates: plates.to_vec(),
        })
    }

    pub fn california() -> Self {
        Self {
            plates: CALIFORNIA_SAMPLES.to_vec(),
        }
    }

    pub fn plates(&self) -> &[&'static str] {
        &self.plates
    }

    /// Uniform pick, with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.plates[rng.random_range(0..self.plates.len())]
    }
}

/// Endless iterator of validations of randomly chosen sample plates.
///
/// Each `next()` draws one plate and validates it; the iterator never
/// returns `None`. Consumers stop it by dropping it.
pub struct RandomValidations {
    matcher: Arc<PlateMatcher>,
    rng: StdRng,
}

impl RandomValidations {
    /// Seeded from the operating system.
    pub fn new(matcher: Arc<PlateMatcher>) -> Self {
        Self::with_rng(matcher, StdRng::from_os_rng())
    }

    pub fn with_rng(matcher: Arc<PlateMatcher>, rng: StdRng) -> Self {
        Self { matcher, rng }
    }
}

impl Iterator for RandomValidations {
    type Item = ValidationResult;

    fn next(&mut self) -> Option<Self::Item> {
        let plate = self.matcher.generate_random_plate_with(&mut self.rng);
        Some(self.matcher.plate_info(plate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
