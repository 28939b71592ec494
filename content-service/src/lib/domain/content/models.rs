use std::fmt;

use super::errors::ContentIdError;
use super::errors::DescriptionError;

/// Widget unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub i64);

impl WidgetId {
    /// Validate a raw identifier from the wire.
    ///
    /// # Errors
    /// * `NotPositive` - Zero or negative id
    pub fn new(id: i64) -> Result<Self, ContentIdError> {
        positive("widget_id", id).map(Self)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Article unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// Validate a raw identifier from the wire.
    ///
    /// # Errors
    /// * `NotPositive` - Zero or negative id
    pub fn new(id: i64) -> Result<Self, ContentIdError> {
        positive("article_id", id).map(Self)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn positive(field: &'static str, id: i64) -> Result<i64, ContentIdError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ContentIdError::NotPositive { field, id })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: WidgetId,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub header: String,
}

/// Widget description value object.
///
/// Trimmed, non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescription(String);

impl WidgetDescription {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Blank description
    /// * `TooLong` - Longer than 255 characters
    pub fn new(description: String) -> Result<Self, DescriptionError> {
        let description = description.trim();

        if description.is_empty() {
            return Err(DescriptionError::Empty);
        }

        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(description.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
