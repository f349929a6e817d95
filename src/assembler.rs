use log::debug;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::LimitPolicy;
use crate::error::RecipeError;
use crate::model::{
    char_len, parse_http_url, Author, Recipe, RecipeField, COOKING_STEPS_LABEL, INGREDIENTS_LABEL,
    NOTES_LABEL,
};
use crate::tags::TagSet;

/// Raw, unvalidated inputs for one recipe, exactly as collected from the
/// user. Nothing here is trusted; [`RecipeAssembler::assemble`] turns a
/// draft into a validated [`Recipe`] or rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub author_name: String,
    pub author_image_url: String,
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    /// Optional third field; blank input is silently omitted
    #[serde(default)]
    pub notes: Option<String>,
    /// Raw comma-separated tag string, normalized during assembly
    #[serde(default)]
    pub tags: Option<String>,
    pub category: Category,
    /// Optional recipe image; blank input is treated as absent
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Builds validated [`Recipe`]s from raw drafts against a limit policy.
///
/// Construction is all-or-nothing: the first violation aborts assembly and
/// no partial recipe ever escapes.
#[derive(Debug, Clone)]
pub struct RecipeAssembler {
    limits: LimitPolicy,
}

impl RecipeAssembler {
    pub fn new(limits: LimitPolicy) -> Self {
        RecipeAssembler { limits }
    }

    pub fn limits(&self) -> &LimitPolicy {
        &self.limits
    }

    /// Validate and compose a draft into an immutable [`Recipe`].
    ///
    /// Checks run in a fixed order so the reported failure is predictable:
    /// title, author (and optional recipe image), ingredients, cooking
    /// steps, optional notes, tag block, and finally the aggregate ceiling.
    /// The aggregate is checked only after every sub-component passed its
    /// own ceiling, and its failure names the overall limit rather than a
    /// culprit.
    pub fn assemble(&self, draft: &RecipeDraft) -> Result<Recipe, RecipeError> {
        // Title first: oversize titles are the most common bad input.
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(RecipeError::InvalidField {
                field: "Title".to_string(),
            });
        }
        if char_len(title) > self.limits.max_title {
            return Err(RecipeError::FieldTooLong {
                field: "Title".to_string(),
                limit: self.limits.max_title,
            });
        }

        let author = Author::validate(&draft.author_name, &draft.author_image_url, &self.limits)?;

        let image_url = match draft.image_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_http_url("Recipe image URL", raw)?),
            _ => None,
        };

        let mut fields = vec![
            RecipeField::validate(INGREDIENTS_LABEL, &draft.ingredients, &self.limits)?,
            RecipeField::validate(COOKING_STEPS_LABEL, &draft.steps, &self.limits)?,
        ];
        if let Some(notes) = draft.notes.as_deref() {
            if !notes.trim().is_empty() {
                fields.push(RecipeField::validate(NOTES_LABEL, notes, &self.limits)?);
            }
        }

        // Tags are normalized before any length accounting; the ceiling is
        // measured on the display form, category label included.
        let tags = TagSet::parse(draft.tags.as_deref());
        let tag_block = tags.display_with(draft.category.label());
        if char_len(&tag_block) > self.limits.max_recipe_tags_length {
            return Err(RecipeError::TagsTooLong {
                limit: self.limits.max_recipe_tags_length,
            });
        }

        let recipe = Recipe::new(
            author,
            title.to_string(),
            fields,
            draft.category,
            tags,
            image_url,
        );
        if recipe.total_length() > self.limits.max_recipe_length {
            return Err(RecipeError::RecipeTooLong {
                limit: self.limits.max_recipe_length,
            });
        }

        debug!(
            "assembled recipe \"{}\": {} fields, {} of {} chars",
            recipe.title(),
            recipe.fields().len(),
            recipe.total_length(),
            self.limits.max_recipe_length
        );
        Ok(recipe)
    }
}
