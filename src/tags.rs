use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered, duplicate-free set of normalized recipe tags.
///
/// Normalization happens on construction: tags are lowercased and stripped
/// of every whitespace character, so no two stored elements compare equal.
/// Ceiling checks are deliberately not done here; they belong to the
/// assembler, which measures the joined block against the limit policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Normalize a raw comma-separated tag string into a `TagSet`.
    ///
    /// `None`, empty, and whitespace-only input all produce an empty set;
    /// absent tags are not an error. Each comma-separated piece has all of
    /// its whitespace removed (internal runs included, so `"tag  1"` becomes
    /// `"tag1"`), is lowercased, and is dropped if nothing remains.
    /// Duplicates keep the first occurrence's position.
    pub fn parse(raw: Option<&str>) -> TagSet {
        let Some(raw) = raw else {
            return TagSet::default();
        };

        let mut tags: Vec<String> = Vec::new();
        for piece in raw.split(',') {
            let tag = normalize_token(piece);
            if tag.is_empty() || tags.contains(&tag) {
                continue;
            }
            tags.push(tag);
        }
        TagSet(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Character length of the joined representation, the amount a tag block
    /// contributes to any aggregate that includes it.
    pub fn joined_len(&self) -> usize {
        self.to_string().chars().count()
    }

    /// Joined representation with `first` prepended, used to place the
    /// implicit category label ahead of the stored tags for display.
    pub fn display_with(&self, first: &str) -> String {
        if self.0.is_empty() {
            first.to_string()
        } else {
            format!("{first}, {self}")
        }
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Normalize a raw comma-separated tag string.
///
/// Convenience alias for [`TagSet::parse`].
pub fn normalize_tags(raw: Option<&str>) -> TagSet {
    TagSet::parse(raw)
}

fn normalize_token(piece: &str) -> String {
    piece
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
