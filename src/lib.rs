//! Validation and pagination core for user-submitted recipes.
//!
//! Raw text flows one way: tag normalization, per-unit validation against a
//! caller-supplied [`LimitPolicy`], then aggregate validation into an
//! immutable [`Recipe`]. Separately, a [`Paginator`] packs rendered listing
//! rows into pages that fit a message-size ceiling, wrap markup included.
//! Everything here is synchronous and pure; persistence, transport, and the
//! chat surface live outside this crate and only exchange strings with it.

pub mod assembler;
pub mod category;
pub mod config;
pub mod drafts;
pub mod error;
pub mod model;
pub mod pagination;
pub mod tags;

pub use assembler::{RecipeAssembler, RecipeDraft};
pub use category::{Category, Rgb};
pub use config::{load_limits, LimitPolicy};
pub use drafts::{DraftStore, DraftToken};
pub use error::RecipeError;
pub use model::{
    Author, Recipe, RecipeField, COOKING_STEPS_LABEL, INGREDIENTS_LABEL, NOTES_LABEL,
};
pub use pagination::{PageWrap, Paginator};
pub use tags::{normalize_tags, TagSet};

/// Validate a raw draft against `limits`, producing an immutable recipe.
///
/// # Example
/// ```
/// use recipe_forge::{assemble_recipe, Category, LimitPolicy, RecipeDraft};
///
/// let limits = LimitPolicy {
///     max_author_name: 256,
///     max_field_name: 256,
///     max_field_data: 1024,
///     max_title: 256,
///     max_recipe_tags_length: 2048,
///     max_recipe_length: 6000,
///     max_message_length: 2000,
/// };
/// let draft = RecipeDraft {
///     author_name: "Alice".into(),
///     author_image_url: "https://example.com/alice.png".into(),
///     title: "Pancakes".into(),
///     ingredients: "2 eggs, 1 cup flour, 1 cup milk".into(),
///     steps: "Whisk everything, then fry in butter.".into(),
///     notes: None,
///     tags: Some("Breakfast, Sweet".into()),
///     category: Category::Pastry,
///     image_url: None,
/// };
///
/// let recipe = assemble_recipe(&draft, &limits)?;
/// assert_eq!(recipe.display_tags(), "Pastry, breakfast, sweet");
/// # Ok::<(), recipe_forge::RecipeError>(())
/// ```
pub fn assemble_recipe(draft: &RecipeDraft, limits: &LimitPolicy) -> Result<Recipe, RecipeError> {
    RecipeAssembler::new(limits.clone()).assemble(draft)
}

/// Paginate pre-rendered listing rows under `limits`, one code block per
/// page.
///
/// # Example
/// ```
/// use recipe_forge::{paginate_lines, LimitPolicy};
///
/// # let limits = LimitPolicy {
/// #     max_author_name: 256,
/// #     max_field_name: 256,
/// #     max_field_data: 1024,
/// #     max_title: 256,
/// #     max_recipe_tags_length: 2048,
/// #     max_recipe_length: 6000,
/// #     max_message_length: 2000,
/// # };
/// let rows = vec!["1  Pancakes".to_string(), "2  Goulash".to_string()];
/// let pages = paginate_lines("Id  Title", "No recipes yet", &rows, &limits)?;
///
/// assert_eq!(pages.len(), 1);
/// assert!(pages[0].starts_with("```\nId  Title\n"));
/// # Ok::<(), recipe_forge::RecipeError>(())
/// ```
pub fn paginate_lines(
    header: &str,
    empty_message: &str,
    rows: &[String],
    limits: &LimitPolicy,
) -> Result<Vec<String>, RecipeError> {
    let paginator = Paginator::new(header, empty_message, PageWrap::code_block(), limits)?;
    Ok(paginator.paginate(rows, |row| row.clone()))
}
