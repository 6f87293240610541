//! Explicit lookup outcome

/// Outcome of resolving something a client handed back to us
///
/// Replaces `found: false` style flags. `Invalid` means the opaque input
/// could not be decoded at all; callers answer it exactly like `NotFound`,
/// but it stays distinguishable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    NotFound,
    Invalid,
}

impl<T> Resolution<T> {
    /// Convert to an `Option`, folding `Invalid` into `None`
    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::NotFound | Resolution::Invalid => None,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Resolution::NotFound, Resolution::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_and_not_found_both_fold_to_none() {
        assert_eq!(Resolution::<u8>::Invalid.found(), None);
        assert_eq!(Resolution::<u8>::NotFound.found(), None);
        assert_eq!(Resolution::Found(3).found(), Some(3));
    }

    #[test]
    fn from_option() {
        assert_eq!(Resolution::from(Some("x")), Resolution::Found("x"));
        assert_eq!(Resolution::<&str>::from(None), Resolution::NotFound);
    }
}
