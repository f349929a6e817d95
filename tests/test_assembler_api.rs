use recipe_forge::{
    Category, LimitPolicy, Recipe, RecipeAssembler, RecipeDraft, RecipeError, COOKING_STEPS_LABEL,
    INGREDIENTS_LABEL, NOTES_LABEL,
};

fn limits() -> LimitPolicy {
    LimitPolicy {
        max_author_name: 256,
        max_field_name: 256,
        max_field_data: 1024,
        max_title: 256,
        max_recipe_tags_length: 2048,
        max_recipe_length: 6000,
        max_message_length: 2000,
    }
}

fn draft() -> RecipeDraft {
    RecipeDraft {
        author_name: "Alice".to_string(),
        author_image_url: "https://example.com/alice.png".to_string(),
        title: "Borscht".to_string(),
        ingredients: "Beets, cabbage, potatoes".to_string(),
        steps: "Simmer everything for an hour".to_string(),
        notes: None,
        tags: None,
        category: Category::Vegetarian,
        image_url: None,
    }
}

/// Test the happy path: a minimal draft assembles with both mandatory
/// fields, in order, and nothing else.
#[test]
fn test_minimal_draft_assembles() {
    let recipe = RecipeAssembler::new(limits()).assemble(&draft()).unwrap();

    assert_eq!(recipe.title(), "Borscht");
    assert_eq!(recipe.author().name(), "Alice");
    assert_eq!(recipe.category(), Category::Vegetarian);
    assert!(recipe.tags().is_empty());
    assert!(recipe.image_url().is_none());

    let names: Vec<&str> = recipe.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec![INGREDIENTS_LABEL, COOKING_STEPS_LABEL]);
}

/// Test the title boundary: exactly at the ceiling passes, one past it
/// fails with the ceiling in the message.
#[test]
fn test_title_boundary() {
    let assembler = RecipeAssembler::new(limits());

    let mut at_limit = draft();
    at_limit.title = "t".repeat(256);
    assert!(assembler.assemble(&at_limit).is_ok());

    let mut over_limit = draft();
    over_limit.title = "t".repeat(257);
    let err = assembler.assemble(&over_limit).unwrap_err();
    assert!(matches!(
        err,
        RecipeError::FieldTooLong { ref field, limit: 256 } if field == "Title"
    ));
    assert!(err.to_string().contains("256"));
}

/// Test the field-data boundary: exactly at the ceiling passes, one past
/// it fails with the literal number in the message.
#[test]
fn test_field_data_boundary() {
    let assembler = RecipeAssembler::new(limits());

    let mut at_limit = draft();
    at_limit.ingredients = "i".repeat(1024);
    assert!(assembler.assemble(&at_limit).is_ok());

    let mut over_limit = draft();
    over_limit.ingredients = "i".repeat(1025);
    let err = assembler.assemble(&over_limit).unwrap_err();
    assert!(err.to_string().contains("1024"), "{err}");
}

/// Test that raw tag input is normalized through assembly: whitespace
/// stripped, lowercased, duplicates dropped, first-seen order kept.
#[test]
fn test_tags_are_normalized_through_assembly() {
    let mut input = draft();
    input.tags = Some("Tag1, Tag2,      Tag1".to_string());
    input.category = Category::Other;

    let recipe = RecipeAssembler::new(limits()).assemble(&input).unwrap();

    assert_eq!(recipe.tags().as_slice(), ["tag1", "tag2"]);
    assert_eq!(recipe.display_tags(), "Other, tag1, tag2");
}

/// Test the aggregate arithmetic: the total is the title plus the author
/// name plus every field's name and data, and tags do not contribute.
#[test]
fn test_total_length_arithmetic() {
    let assembler = RecipeAssembler::new(limits());

    let mut input = draft();
    input.notes = Some("Serve with sour cream".to_string());
    let recipe = assembler.assemble(&input).unwrap();

    let expected = "Borscht".chars().count()
        + "Alice".chars().count()
        + INGREDIENTS_LABEL.chars().count()
        + "Beets, cabbage, potatoes".chars().count()
        + COOKING_STEPS_LABEL.chars().count()
        + "Simmer everything for an hour".chars().count()
        + NOTES_LABEL.chars().count()
        + "Serve with sour cream".chars().count();
    assert_eq!(recipe.total_length(), expected);

    let mut tagged = input.clone();
    tagged.tags = Some("slavic, soup, winter".to_string());
    let tagged_recipe = assembler.assemble(&tagged).unwrap();
    assert_eq!(tagged_recipe.total_length(), recipe.total_length());
}

/// Test the overall ceiling: parts that each clear their own ceilings can
/// still overrun the recipe total, and that check comes last.
#[test]
fn test_aggregate_ceiling_is_checked_last() {
    let tight = LimitPolicy {
        max_recipe_length: 300,
        ..limits()
    };

    let mut input = draft();
    input.title = "t".repeat(128);
    input.ingredients = "i".repeat(128);
    input.steps = "s".repeat(128);

    let err = RecipeAssembler::new(tight).assemble(&input).unwrap_err();
    assert!(matches!(err, RecipeError::RecipeTooLong { limit: 300 }));
    assert!(err.to_string().contains("300"));
}

/// Test that blank optional inputs are dropped rather than validated.
#[test]
fn test_blank_optionals_are_omitted() {
    let mut input = draft();
    input.notes = Some("   ".to_string());
    input.image_url = Some(String::new());

    let recipe = RecipeAssembler::new(limits()).assemble(&input).unwrap();
    assert_eq!(recipe.fields().len(), 2);
    assert!(recipe.image_url().is_none());
}

/// Test that a present but malformed recipe image is rejected.
#[test]
fn test_invalid_recipe_image_is_rejected() {
    let mut input = draft();
    input.image_url = Some("not a url".to_string());

    let err = RecipeAssembler::new(limits()).assemble(&input).unwrap_err();
    assert!(matches!(err, RecipeError::InvalidUrl { .. }));
    assert!(err.to_string().contains("Recipe image URL"));
}

/// Test that validation order is fixed: a bad title is reported even when
/// the author is also invalid.
#[test]
fn test_title_reported_before_author() {
    let mut input = draft();
    input.title = " ".to_string();
    input.author_name = String::new();

    let err = RecipeAssembler::new(limits()).assemble(&input).unwrap_err();
    assert!(matches!(err, RecipeError::InvalidField { ref field } if field == "Title"));
}

/// Test that a validated recipe survives a serialization round trip.
#[test]
fn test_recipe_serde_round_trip() {
    let mut input = draft();
    input.tags = Some("soup, winter".to_string());
    input.image_url = Some("https://example.com/borscht.jpg".to_string());

    let recipe = RecipeAssembler::new(limits()).assemble(&input).unwrap();
    let json = serde_json::to_string(&recipe).unwrap();
    let restored: Recipe = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, recipe);
    assert_eq!(restored.total_length(), recipe.total_length());
}

/// Test that drafts parse from the JSON shape the binary accepts, with the
/// optional keys absent.
#[test]
fn test_draft_parses_without_optional_keys() {
    let json = r#"{
        "author_name": "Alice",
        "author_image_url": "https://example.com/alice.png",
        "title": "Borscht",
        "ingredients": "Beets",
        "steps": "Simmer",
        "category": "Vegetarian"
    }"#;

    let parsed: RecipeDraft = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.category, Category::Vegetarian);
    assert!(parsed.notes.is_none());
    assert!(parsed.tags.is_none());
    assert!(parsed.image_url.is_none());

    assert!(RecipeAssembler::new(limits()).assemble(&parsed).is_ok());
}
