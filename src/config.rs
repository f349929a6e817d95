use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Named maximum lengths governing validation and pagination.
///
/// The caller supplies every ceiling; the library defines no defaults and
/// never hardcodes a limit. Values are character counts (Unicode scalar
/// values), matching what a chat surface displays rather than byte sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitPolicy {
    /// Maximum length of an author's display name
    pub max_author_name: usize,
    /// Maximum length of a single field's name
    pub max_field_name: usize,
    /// Maximum length of a single field's data
    pub max_field_data: usize,
    /// Maximum length of the recipe title
    pub max_title: usize,
    /// Maximum length of the combined tag block (category label included)
    pub max_recipe_tags_length: usize,
    /// Maximum aggregate length of the assembled recipe
    pub max_recipe_length: usize,
    /// Maximum length of one outgoing message page, wrap markup included
    pub max_message_length: usize,
}

impl LimitPolicy {
    /// Load the policy from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. limits.toml file in current directory
    ///
    /// Environment variable format: RECIPE__MAX_TITLE
    pub fn load() -> Result<Self, ConfigError> {
        load_limits()
    }
}

/// Load the limit policy from file and environment variables.
///
/// Every ceiling must be present in one of the sources; there are no
/// built-in defaults to fall back on, so a missing key is an error.
pub fn load_limits() -> Result<LimitPolicy, ConfigError> {
    let settings = Config::builder()
        // Optional limits file (can be missing when env supplies everything)
        .add_source(File::with_name("limits").required(false))
        // Environment variables with RECIPE prefix
        // Use double underscore: RECIPE__MAX_MESSAGE_LENGTH
        .add_source(
            Environment::with_prefix("RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
