use thiserror::Error;

/// Error returned by the fallible list operations.
///
/// The [`Display`](std::fmt::Display) messages match what the classic
/// console implementations of these lists print before bailing out, so a
/// caller that just wants to report the failure can print the error as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index-addressed operation was given a position the list does not
    /// have. Inserting at `len` is allowed (it appends); anything past that
    /// is out of bounds, as is any index at or past `len` for removal and
    /// lookup.
    #[error("Index out of bounds")]
    OutOfBounds,
    /// A deletion was attempted on a list with no elements.
    #[error("List is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn messages_match_the_console_originals() {
        assert_eq!(ListError::OutOfBounds.to_string(), "Index out of bounds");
        assert_eq!(ListError::Empty.to_string(), "List is empty");
    }
}
