//! Error types for System Design Deconstructed

use thiserror::Error;

/// Problems found while validating a concept registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Two records share the same anchor id
    #[error("Duplicate concept id: {0}")]
    DuplicateId(String),

    /// A record has an empty id and cannot be navigated to
    #[error("Concept at position {0} has an empty id")]
    EmptyId(usize),

    /// A record has no title to show on its card or nav entry
    #[error("Concept has an empty title: {0}")]
    EmptyTitle(String),

    /// A record has no code sample
    #[error("Concept has an empty code sample: {0}")]
    EmptyCode(String),
}

/// Result type alias using ContentError
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::DuplicateId("logic-tree".to_string());
        assert_eq!(format!("{}", err), "Duplicate concept id: logic-tree");

        let err = ContentError::EmptyId(3);
        assert_eq!(format!("{}", err), "Concept at position 3 has an empty id");
    }
}
