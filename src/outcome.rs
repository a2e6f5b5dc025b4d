/// The result of one pipeline stage: whatever was produced plus every error
/// collected on the way.
///
/// Unlike `Result`, both halves are always present, so a caller can report
/// all diagnostics of a pass instead of only the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T, E> {
    /// What the stage produced.
    pub success: T,
    /// Errors collected in source order.
    pub errors:  Vec<E>,
}

/// A payload that can be empty.
///
/// Decides what [`Outcome::is_ok`] means for a given success type.
pub trait Payload {
    /// Returns `true` if there is something in the payload.
    fn is_present(&self) -> bool;
}

impl<T> Payload for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Payload for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub const fn new(success: T, errors: Vec<E>) -> Self {
        Self { success, errors }
    }

    /// Returns `true` if at least one error was collected.
    #[must_use]
    pub fn has_err(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Splits the outcome into its two halves.
    pub fn into_parts(self) -> (T, Vec<E>) {
        (self.success, self.errors)
    }

    /// Converts every error with `f`, keeping the payload untouched.
    pub fn map_err<F>(self, f: impl FnMut(E) -> F) -> Outcome<T, F> {
        Outcome { success: self.success,
                  errors:  self.errors.into_iter().map(f).collect(), }
    }
}

impl<T: Payload, E> Outcome<T, E> {
    /// Returns `true` if the success payload is present.
    ///
    /// # Example
    /// ```
    /// use lox::outcome::Outcome;
    ///
    /// let empty: Outcome<Vec<u8>, String> = Outcome::new(Vec::new(), Vec::new());
    /// let full: Outcome<Option<u8>, String> = Outcome::new(Some(1), vec!["oops".into()]);
    ///
    /// assert!(!empty.is_ok());
    /// assert!(full.is_ok());
    /// assert!(full.has_err());
    /// ```
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.success.is_present()
    }
}
