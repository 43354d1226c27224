/// The success-or-failure value returned by every API operation.
///
/// Exactly one side carries data. Unlike [`Result`], the accessors never
/// panic: asking a failure for its value yields `None`, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an Outcome may be a failure that should be inspected"]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Transform the success value, leaving a failure untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_failure<G, F: FnOnce(E) -> G>(self, f: F) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Convert into a [`Result`] so callers can use `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_side() {
        let outcome: Outcome<u32, String> = Outcome::success(7);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&7));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_failure_side() {
        let outcome: Outcome<u32, String> = Outcome::failure("boom".into());
        assert!(!outcome.is_success());
        assert!(outcome.is_failure());
        assert!(outcome.value().is_none());
        assert_eq!(outcome.error().map(String::as_str), Some("boom"));
    }

    #[test]
    fn test_map_keeps_failure() {
        let failed: Outcome<u32, &str> = Outcome::failure("nope");
        assert_eq!(failed.map(|v| v * 2), Outcome::Failure("nope"));

        let ok: Outcome<u32, &str> = Outcome::success(21);
        assert_eq!(ok.map(|v| v * 2).into_value(), Some(42));
    }

    #[test]
    fn test_result_conversions() {
        let outcome: Outcome<u8, &str> = Err("bad").into();
        assert_eq!(outcome.clone().into_error(), Some("bad"));
        assert_eq!(outcome.into_result(), Err("bad"));

        let outcome: Outcome<u8, &str> = Ok(1).into();
        assert_eq!(outcome.into_result(), Ok(1));
    }
}
