//! Scalar field rules shared by the catalog records.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

/// A scalar field failed its format or length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Author name is the empty string.
    EmptyAuthorName,
    /// Magazine name length is outside `2..=16`.
    MagazineNameLength { len: usize },
    /// Magazine category is the empty string.
    EmptyCategory,
    /// Article title length is outside `5..=50`.
    TitleLength { len: usize },
}

impl FieldError {
    /// Short machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyAuthorName => "empty_author_name",
            Self::MagazineNameLength { .. } => "magazine_name_length",
            Self::EmptyCategory => "empty_category",
            Self::TitleLength { .. } => "title_length",
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}..={MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {TITLE_MIN_CHARS}..={TITLE_MAX_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for FieldError {}

pub(crate) fn validate_author_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), FieldError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(FieldError::MagazineNameLength { len });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), FieldError> {
    if category.is_empty() {
        return Err(FieldError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), FieldError> {
    let len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(FieldError::TitleLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(validate_magazine_name("ab").is_ok());
        assert!(validate_magazine_name(&"a".repeat(16)).is_ok());
        assert_eq!(
            validate_magazine_name("a"),
            Err(FieldError::MagazineNameLength { len: 1 })
        );
        assert_eq!(
            validate_magazine_name(&"a".repeat(17)),
            Err(FieldError::MagazineNameLength { len: 17 })
        );
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // five two-byte characters
        assert!(validate_title("ééééé").is_ok());
        assert_eq!(
            validate_title("éééé"),
            Err(FieldError::TitleLength { len: 4 })
        );
        assert!(validate_title(&"t".repeat(50)).is_ok());
        assert!(validate_title(&"t".repeat(51)).is_err());
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(validate_author_name(""), Err(FieldError::EmptyAuthorName));
        assert_eq!(validate_category(""), Err(FieldError::EmptyCategory));
        assert!(validate_author_name(" ").is_ok());
    }

    #[test]
    fn display_mentions_offending_length() {
        let message = FieldError::TitleLength { len: 3 }.to_string();
        assert!(message.contains("got 3"), "unexpected message: {message}");
    }
}
