use thiserror::Error;

/// Errors that can occur while validating recipe input or preparing
/// paginated output.
///
/// Every variant that names a boundary carries the configured numeric limit
/// so the rendered message can be surfaced to the end user verbatim.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Required text is missing or whitespace-only
    #[error("{field} must not be empty")]
    InvalidField { field: String },

    /// A per-field character ceiling was exceeded
    #[error("{field} cannot be longer than {limit} characters")]
    FieldTooLong { field: String, limit: usize },

    /// The combined tag block exceeded its ceiling
    #[error("Tags cannot be longer than {limit} characters once combined")]
    TagsTooLong { limit: usize },

    /// The assembled recipe exceeded the overall ceiling
    #[error("The recipe cannot be longer than {limit} characters in total")]
    RecipeTooLong { limit: usize },

    /// An image URL did not parse as an absolute http(s) URL
    #[error("{field} must be an absolute http(s) URL")]
    InvalidUrl {
        field: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// A category value outside the closed set
    #[error("Unknown category: {value}")]
    InvalidCategory { value: String },

    /// A paginator was set up with unusable arguments; this is a programmer
    /// error, not a user-facing validation failure
    #[error("Invalid paginator setup: {0}")]
    Setup(String),

    /// Limit policy could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
