use serde::{Deserialize, Serialize};
use url::Url;

use crate::category::Category;
use crate::config::LimitPolicy;
use crate::error::RecipeError;
use crate::tags::TagSet;

/// Name of the mandatory ingredients field.
pub const INGREDIENTS_LABEL: &str = "Ingredients";
/// Name of the mandatory cooking-steps field.
pub const COOKING_STEPS_LABEL: &str = "Cooking steps";
/// Name of the optional notes field.
pub const NOTES_LABEL: &str = "Additional notes";

/// All limits are character ceilings, so lengths are counted in Unicode
/// scalar values rather than bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Parse `raw` as an absolute http(s) URL.
///
/// `field` names the offending input in the failure so the message can be
/// shown to the user as-is.
pub(crate) fn parse_http_url(field: &str, raw: &str) -> Result<Url, RecipeError> {
    let url = Url::parse(raw.trim()).map_err(|source| RecipeError::InvalidUrl {
        field: field.to_string(),
        source: Some(source),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(RecipeError::InvalidUrl {
            field: field.to_string(),
            source: None,
        }),
    }
}

/// A validated recipe author.
///
/// Immutable once constructed; build one with [`Author::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    name: String,
    image_url: Url,
}

impl Author {
    /// Validate an author's display name and avatar URL against the policy.
    ///
    /// The name must be non-blank and, after trimming, no longer than
    /// `limits.max_author_name`; the URL must be an absolute http(s) URL.
    pub fn validate(name: &str, image_url: &str, limits: &LimitPolicy) -> Result<Self, RecipeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecipeError::InvalidField {
                field: "Author name".to_string(),
            });
        }
        if char_len(name) > limits.max_author_name {
            return Err(RecipeError::FieldTooLong {
                field: "Author name".to_string(),
                limit: limits.max_author_name,
            });
        }

        let image_url = parse_http_url("Author image URL", image_url)?;

        Ok(Author {
            name: name.to_string(),
            image_url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }

    /// Characters this author contributes to the recipe aggregate.
    ///
    /// The image URL is metadata and is not counted.
    pub fn total_length(&self) -> usize {
        char_len(&self.name)
    }
}

/// One validated name/data section of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeField {
    name: String,
    data: String,
}

impl RecipeField {
    /// Validate a (name, data) pair against the policy.
    ///
    /// Checks run in order: blank name, name ceiling, blank data, data
    /// ceiling; the first violation is reported and nothing is aggregated.
    pub fn validate(name: &str, data: &str, limits: &LimitPolicy) -> Result<Self, RecipeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecipeError::InvalidField {
                field: "Field name".to_string(),
            });
        }
        if char_len(name) > limits.max_field_name {
            return Err(RecipeError::FieldTooLong {
                field: "Field name".to_string(),
                limit: limits.max_field_name,
            });
        }

        let data = data.trim();
        if data.is_empty() {
            return Err(RecipeError::InvalidField {
                field: name.to_string(),
            });
        }
        if char_len(data) > limits.max_field_data {
            return Err(RecipeError::FieldTooLong {
                field: name.to_string(),
                limit: limits.max_field_data,
            });
        }

        Ok(RecipeField {
            name: name.to_string(),
            data: data.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Characters this field contributes to the recipe aggregate.
    pub fn total_length(&self) -> usize {
        char_len(&self.name) + char_len(&self.data)
    }
}

/// A fully validated recipe document.
///
/// Constructed once by the assembler and immutable thereafter; rendering
/// and persistence consume it, they never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    author: Author,
    title: String,
    fields: Vec<RecipeField>,
    category: Category,
    tags: TagSet,
    image_url: Option<Url>,
}

impl Recipe {
    pub(crate) fn new(
        author: Author,
        title: String,
        fields: Vec<RecipeField>,
        category: Category,
        tags: TagSet,
        image_url: Option<Url>,
    ) -> Self {
        Recipe {
            author,
            title,
            fields,
            category,
            tags,
            image_url,
        }
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fields in display order: ingredients, cooking steps, then notes when
    /// the draft supplied any.
    pub fn fields(&self) -> &[RecipeField] {
        &self.fields
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    /// Characters counted against the overall recipe ceiling: title, author
    /// name, and every field's name and data.
    ///
    /// The tag block is excluded from the aggregate; it has its own ceiling
    /// that the assembler enforces separately.
    pub fn total_length(&self) -> usize {
        char_len(&self.title)
            + self.author.total_length()
            + self
                .fields
                .iter()
                .map(RecipeField::total_length)
                .sum::<usize>()
    }

    /// Footer-style tag line: the category label as the implicit first tag,
    /// followed by the stored tags. The label itself is never stored.
    pub fn display_tags(&self) -> String {
        self.tags.display_with(self.category.label())
    }
}
