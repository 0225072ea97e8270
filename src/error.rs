use thiserror::Error;

pub type Result<T, E> = std::result::Result<T, RaceError<E>>;

/// Outcome of a lost race: either the deadline fired first, or the operation
/// itself failed and its error is carried through untouched.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RaceError<E> {
    #[error("operation timed out")]
    TimedOut,

    #[error("operation failed: {0}")]
    OperationFailed(E),
}

impl<E> RaceError<E> {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, RaceError::TimedOut)
    }

    /// Returns the operation's own error, if that is what lost the race.
    pub fn into_operation_error(self) -> Option<E> {
        match self {
            RaceError::TimedOut => None,
            RaceError::OperationFailed(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_out_is_distinguishable() {
        let err: RaceError<&str> = RaceError::TimedOut;
        assert!(err.is_timed_out());
        assert_eq!(err.into_operation_error(), None);
    }

    #[test]
    fn operation_error_is_carried_verbatim() {
        let err = RaceError::OperationFailed("boom");
        assert!(!err.is_timed_out());
        assert_eq!(err.to_string(), "operation failed: boom");
        assert_eq!(err.into_operation_error(), Some("boom"));
    }
}
