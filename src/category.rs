use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// Display color attached to a category, as an RGB triple.
///
/// The library only exposes the value; rendering surfaces decide what to do
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Closed set of recipe classifications.
///
/// Every category has a fixed human-readable label and a fixed display
/// color; both lookups are exhaustive so adding a variant without extending
/// the tables fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Meat,
    Fish,
    Vegetarian,
    Vegan,
    Drinks,
    Pastry,
    Dessert,
    Snack,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 9] = [
        Category::Meat,
        Category::Fish,
        Category::Vegetarian,
        Category::Vegan,
        Category::Drinks,
        Category::Pastry,
        Category::Dessert,
        Category::Snack,
        Category::Other,
    ];

    /// Human-readable label, also used as the implicit first tag when the
    /// tag block is displayed.
    pub fn label(self) -> &'static str {
        match self {
            Category::Meat => "Meat",
            Category::Fish => "Fish",
            Category::Vegetarian => "Vegetarian",
            Category::Vegan => "Vegan",
            Category::Drinks => "Drinks",
            Category::Pastry => "Pastry",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
            Category::Other => "Other",
        }
    }

    /// Display color for surfaces that support a color accent.
    pub fn color(self) -> Rgb {
        match self {
            Category::Meat => Rgb(192, 57, 43),
            Category::Fish => Rgb(41, 128, 185),
            Category::Vegetarian => Rgb(39, 174, 96),
            Category::Vegan => Rgb(22, 160, 133),
            Category::Drinks => Rgb(142, 68, 173),
            Category::Pastry => Rgb(230, 126, 34),
            Category::Dessert => Rgb(241, 196, 15),
            Category::Snack => Rgb(211, 84, 0),
            Category::Other => Rgb(127, 140, 141),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = RecipeError;

    /// Parse a category from its label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RecipeError::InvalidCategory {
                value: needle.to_string(),
            })
    }
}
