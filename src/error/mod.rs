use alloc::sync::Arc;

pub(crate) mod calendar;
pub(crate) mod duration;
pub(crate) mod fmt;

/// An error that can occur in this crate.
///
/// There are three broad categories of errors:
///
/// * The input given to a strict parsing routine was absent. (See
/// [`fmt::iso8601::parse_optional`](crate::fmt::iso8601::parse_optional).)
/// * The input given to a parsing routine is not a valid ISO 8601 duration
/// in the grammar supported by this crate.
/// * Arithmetic overflowed. Either adding two durations overflowed one of
/// their components, or applying a duration to a datetime produced a
/// datetime outside the range supported by the datetime type.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides only the
/// predicates [`Error::is_absent`], [`Error::is_parse`] and
/// [`Error::is_range`].
///
/// # Design
///
/// Only one error type exists for all operations. An error is a chain of
/// causes: the first element is the highest level description (for example,
/// which input failed to parse) and the last element is the root cause (for
/// example, which byte was unexpected). The `Display` implementation joins
/// the chain with `: `.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and to keep
    /// its size equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// of this crate specifically. For example, when implementing
    /// [`Calendar`](crate::calendar::Calendar) for a custom datetime type.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from a strict parsing routine
    /// being given no input at all.
    ///
    /// This is distinct from being given an empty string, which is reported
    /// as a parse error.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::fmt::iso8601;
    ///
    /// let err = iso8601::parse_optional(None::<&str>).unwrap_err();
    /// assert!(err.is_absent());
    /// assert!(!err.is_parse());
    ///
    /// let err = iso8601::parse_optional(Some("")).unwrap_err();
    /// assert!(!err.is_absent());
    /// assert!(err.is_parse());
    /// ```
    pub fn is_absent(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Absent)
    }

    /// Returns true when this error originated from input that does not
    /// match the ISO 8601 duration grammar.
    ///
    /// This includes component values that are too big to represent.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert!(Duration::parse("P1M2Y").unwrap_err().is_parse());
    /// assert!(Duration::parse("P4294967296D").unwrap_err().is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::FmtIso8601(_))
    }

    /// Returns true when this error originated from arithmetic producing a
    /// value outside the range supported by its type.
    ///
    /// This occurs when adding two durations overflows one of their
    /// components, or when applying a duration to a datetime goes outside of
    /// the datetime's supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use isoduration::{calendar, Duration};
    ///
    /// let err = calendar::add(NaiveDateTime::MAX, Duration::from_days(1))
    ///     .unwrap_err();
    /// assert!(err.is_range());
    ///
    /// let err = Duration::from_hours(u32::MAX)
    ///     .checked_add(Duration::from_hours(1))
    ///     .unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        matches!(*self.root().kind(), Calendar(_) | Duration(_))
    }
}

impl Error {
    /// Creates a new error indicating that a strict parsing routine was
    /// given no input.
    #[inline(never)]
    #[cold]
    pub(crate) fn absent() -> Error {
        Error::from(ErrorKind::Absent)
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        // OK because `err.inner` is guaranteed to be `Some` above.
        let inner = err.inner.as_mut().unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        // OK because we just created this error so the Arc has one
        // reference.
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            return core::fmt::Display::fmt(self, f);
        }
        let Some(ref inner) = self.inner else {
            return f.debug_struct("Error").field("kind", &"None").finish();
        };
        f.debug_struct("Error")
            .field("kind", &inner.kind)
            .field("cause", &inner.cause)
            .finish()
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Absent,
    Adhoc(AdhocError),
    Calendar(self::calendar::Error),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    FmtIso8601(self::fmt::iso8601::Error),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Absent => f.write_str(
                "no input was given, but a duration string was required",
            ),
            Adhoc(ref msg) => core::fmt::Display::fmt(msg, f),
            Calendar(ref err) => core::fmt::Display::fmt(err, f),
            Duration(ref err) => core::fmt::Display::fmt(err, f),
            Fmt(ref err) => core::fmt::Display::fmt(err, f),
            FmtIso8601(ref err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown isoduration error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This backs the `Error::from_args` public API, which permits users to
/// manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `ErrorContext::with_context` work without needing
/// to rely on public `From` impls for the internal structured error types.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the error produced by `consequent` with this (`self`)
    /// error as the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    /// The closure avoids paying the cost of contextual error creation
    /// (which allocates) in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn chain_renders_outermost_first() {
        let root = Err::<(), _>(Error::from_args(format_args!("root cause")));
        let err = root
            .with_context(|| Error::from_args(format_args!("outer")))
            .unwrap_err();
        assert_eq!(format!("{err}"), "outer: root cause");
        assert_eq!(format!("{err:?}"), "outer: root cause");
    }

    #[test]
    fn predicates_look_at_root_cause() {
        let err = Err::<(), _>(Error::absent())
            .with_context(|| {
                Error::from_args(format_args!("while reading config"))
            })
            .unwrap_err();
        assert!(err.is_absent());
        assert!(!err.is_parse());
        assert!(!err.is_range());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
