//! Error types for the Playfair library.

use thiserror::Error;

/// Errors produced by the Playfair library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayfairError {
    /// The key contains no letters from which a grid can be derived.
    #[error("Key must contain at least one letter A-Z")]
    InvalidKey,

    /// Strict normalization met a character outside A-Z.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A letter was presented to the position index that is not in the grid.
    #[error("Letter {0:?} is not present in the grid")]
    LetterNotFound(char),

    /// A digram was built from two identical letters.
    #[error("Digram letters must differ, got {0:?} twice")]
    RepeatedLetter(char),

    /// The configured filler letter cannot be used.
    #[error("Filler {0:?} must be a grid letter distinct from the other filler")]
    InvalidFiller(char),

    /// A worker pool of zero threads was requested.
    #[error("Thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result type alias for Playfair operations.
pub type Result<T> = std::result::Result<T, PlayfairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = PlayfairError::InvalidKey;
        assert_eq!(format!("{}", err), "Key must contain at least one letter A-Z");
    }

    #[test]
    fn test_display_invalid_character() {
        let err = PlayfairError::InvalidCharacter {
            character: '7',
            position: 3,
        };
        assert_eq!(format!("{}", err), "Invalid character '7' at position 3");
    }

    #[test]
    fn test_display_letter_not_found() {
        let err = PlayfairError::LetterNotFound('J');
        assert_eq!(format!("{}", err), "Letter 'J' is not present in the grid");
    }

    #[test]
    fn test_display_invalid_thread_count() {
        let err = PlayfairError::InvalidThreadCount(0);
        assert_eq!(format!("{}", err), "Thread count must be at least 1, got 0");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(PlayfairError::InvalidKey, PlayfairError::InvalidKey);
        assert_ne!(
            PlayfairError::LetterNotFound('A'),
            PlayfairError::LetterNotFound('B')
        );
    }

    #[test]
    fn test_error_clone() {
        let err = PlayfairError::RepeatedLetter('L');
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
