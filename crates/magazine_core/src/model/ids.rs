//! Typed entity identifiers.
//!
//! Each kind gets its own newtype so an author id can never be passed where a
//! magazine id is expected. Ids are random v4 UUIDs assigned at construction.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocates a fresh, never reused identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Stable identity of an [`Author`](crate::model::author::Author).
    AuthorId
);
entity_id!(
    /// Stable identity of a [`Magazine`](crate::model::magazine::Magazine).
    MagazineId
);
entity_id!(
    /// Stable identity of an [`Article`](crate::model::article::Article).
    ArticleId
);

#[cfg(test)]
mod tests {
    use super::{ArticleId, AuthorId};

    #[test]
    fn generated_ids_are_unique_and_non_nil() {
        let first = AuthorId::generate();
        let second = AuthorId::generate();

        assert_ne!(first, second);
        assert!(!first.as_uuid().is_nil());
    }

    #[test]
    fn display_matches_uuid_text() {
        let id = ArticleId::generate();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
