use thiserror::Error;

/// Errors that abort a whole meal plan run
#[derive(Error, Debug)]
pub enum MealPlanError {
    /// Failed to fetch the meal plan page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page no longer has the layout the extractor expects
    #[error("Unexpected page structure: {0}")]
    StructureError(String),

    /// The messaging gateway rejected or never received the message
    #[error("Delivery failed: {0}")]
    DeliveryError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A setting required for this run is not configured
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),
}

/// Reasons a single meal block is dropped from the plan.
///
/// These never abort the run; the pipeline logs them and carries on with the
/// remaining blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// A required sub-region (category, title or price) is missing or empty
    #[error("meal block has no {0}")]
    MissingField(&'static str),

    /// The price sub-region has no amount in it
    #[error("no price amount in {0:?}")]
    MalformedPrice(String),
}

/// Render an error together with every error in its `source()` chain.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_error_messages() {
        assert_eq!(
            EntryError::MissingField("price").to_string(),
            "meal block has no price"
        );
        assert_eq!(
            EntryError::MalformedPrice("auf Anfrage".to_string()).to_string(),
            "no price amount in \"auf Anfrage\""
        );
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = MealPlanError::StructureError("no div.contents_aktiv".to_string());
        assert_eq!(
            error_chain(&err),
            "Unexpected page structure: no div.contents_aktiv"
        );
    }
}
