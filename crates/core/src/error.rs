#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid pattern for era {era}: {pattern}")]
    InvalidPattern {
        era: &'static str,
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Sample plate catalogue must not be empty")]
    EmptyCatalogue,
}
