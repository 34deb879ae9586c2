/*!
A parser and printer for ISO 8601 durations.

This module supports the `PnYnMnWnDTnHnMnS` notation from ISO 8601, where
each `n` is a non-negative integer and each component is optional. The
grammar accepted is strict:

* The string must start with an uppercase `P`.
* Date components come next, using the designators `Y`, `M`, `W` and `D`.
* If there are any time components, they follow a single `T` and use the
designators `H`, `M` and `S`. A `T` must be followed by at least one time
component.
* `M` means months before the `T` and minutes after it.
* Components must be written from largest unit to smallest, and each unit
may appear at most once.
* There must be at least one component. Every component is a run of ASCII
digits followed by its designator. Nothing else (signs, fractions,
whitespace, lowercase designators) is allowed anywhere.
* Each number must fit into a `u32`.

The printer always emits the canonical form. It omits zero components and
writes `T` only when there is a non-zero time component. The zero duration
is written as `P0D`.

# Example

```
use isoduration::{fmt::iso8601, Duration};

let duration = iso8601::parse("P1Y2M3W4DT5H6M7S")?;
assert_eq!(duration, Duration::new(1, 2, 3, 4, 5, 6, 7));
assert_eq!(iso8601::to_string(&duration), "P1Y2M3W4DT5H6M7S");

// Components are never normalized into one another.
let duration = iso8601::parse("PT90M")?;
assert_eq!(duration.get_minutes(), 90);
assert_eq!(duration.get_hours(), 0);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Strict and non-strict parsing

Every parsing routine comes in two flavors. The strict flavor (for example,
[`parse`]) returns an [`Error`] describing why the input was rejected. The
non-strict flavor (for example, [`try_parse`]) accepts exactly the same
inputs, but returns `None` on failure instead.

```
use isoduration::{fmt::iso8601, Duration};

assert_eq!(iso8601::try_parse("P3W"), Some(Duration::from_weeks(3)));
assert_eq!(iso8601::try_parse("P3W2W"), None);
assert!(iso8601::parse("P3W2W").is_err());
```

The `_optional` variants additionally accept input that may be missing
altogether. Missing input is not the same thing as empty input: strict
parsing of missing input returns an error for which
[`Error::is_absent`] returns true.
*/

use alloc::string::String;

use crate::{error::Error, fmt::Write, Duration};

mod parser;
mod printer;

/// The default parser used by `Duration::parse` and `FromStr`.
pub(crate) static DEFAULT_DURATION_PARSER: DurationParser =
    DurationParser::new();

/// The default printer used by `Display` and Serde serialization.
pub(crate) static DEFAULT_DURATION_PRINTER: DurationPrinter =
    DurationPrinter::new();

/// Parse the given input as an ISO 8601 duration.
///
/// This is a convenience routine for using the default
/// [`DurationParser`]. It is equivalent to [`Duration::parse`].
///
/// # Errors
///
/// This returns an error if the input does not match the ISO 8601 duration
/// grammar described in the [module documentation](self).
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601, Duration};
///
/// assert_eq!(iso8601::parse("PT5H")?, Duration::from_hours(5));
/// assert!(iso8601::parse("P1H").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Duration, Error> {
    DEFAULT_DURATION_PARSER.parse_duration(input)
}

/// Parse the given input as an ISO 8601 duration, returning `None` if it
/// is invalid.
///
/// This accepts exactly the same inputs as [`parse`].
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601, Duration};
///
/// assert_eq!(iso8601::try_parse("P1D"), Some(Duration::from_days(1)));
/// assert_eq!(iso8601::try_parse("P1Z"), None);
/// ```
#[inline]
pub fn try_parse<I: AsRef<[u8]>>(input: I) -> Option<Duration> {
    parse(input).ok()
}

/// Parse the given input, which may be missing, as an ISO 8601 duration.
///
/// # Errors
///
/// When `input` is `None`, this returns an error for which
/// [`Error::is_absent`] is true. Otherwise, this returns an error under the
/// same conditions as [`parse`].
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601, Duration};
///
/// let duration = iso8601::parse_optional(Some("P2M"))?;
/// assert_eq!(duration, Duration::from_months(2));
///
/// let err = iso8601::parse_optional(None::<&str>).unwrap_err();
/// assert!(err.is_absent());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn parse_optional<I: AsRef<[u8]>>(
    input: Option<I>,
) -> Result<Duration, Error> {
    match input {
        None => Err(Error::absent()),
        Some(input) => parse(input),
    }
}

/// Parse the given input, which may be missing, as an ISO 8601 duration,
/// returning `None` if it is missing or invalid.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601, Duration};
///
/// assert_eq!(
///     iso8601::try_parse_optional(Some("PT1S")),
///     Some(Duration::from_seconds(1)),
/// );
/// assert_eq!(iso8601::try_parse_optional(None::<&str>), None);
/// assert_eq!(iso8601::try_parse_optional(Some("")), None);
/// ```
#[inline]
pub fn try_parse_optional<I: AsRef<[u8]>>(
    input: Option<I>,
) -> Option<Duration> {
    input.and_then(try_parse)
}

/// Print the given duration in its canonical ISO 8601 form.
///
/// This is a convenience routine for using the default
/// [`DurationPrinter`]. It is equivalent to `duration.to_string()`.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601, Duration};
///
/// assert_eq!(iso8601::to_string(&Duration::ZERO), "P0D");
/// assert_eq!(
///     iso8601::to_string(&Duration::from_years(1).seconds(1)),
///     "P1YT1S",
/// );
/// ```
#[inline]
pub fn to_string(duration: &Duration) -> String {
    DEFAULT_DURATION_PRINTER.duration_to_string(duration)
}

/// A parser for ISO 8601 durations.
///
/// This parser has no configuration today. It exists as a value so that it
/// can be stored in a `static` or `const` and extended with options
/// without breaking callers.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601::DurationParser, Duration};
///
/// static PARSER: DurationParser = DurationParser::new();
///
/// let duration = PARSER.parse_duration("P1MT1M")?;
/// assert_eq!(duration, Duration::from_months(1).minutes(1));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DurationParser {
    p: parser::DurationParser,
}

impl DurationParser {
    /// Create a new ISO 8601 duration parser with the default
    /// configuration.
    #[inline]
    pub const fn new() -> DurationParser {
        DurationParser { p: parser::DurationParser::new() }
    }

    /// Parse an ISO 8601 duration string into a [`Duration`] value.
    ///
    /// The input must be consumed entirely. Trailing bytes of any kind are
    /// an error.
    ///
    /// # Errors
    ///
    /// This returns an error if the input does not match the grammar
    /// described in the [module documentation](self). The error names the
    /// input and the reason it was rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::fmt::iso8601::DurationParser;
    ///
    /// let parser = DurationParser::new();
    /// let err = parser.parse_duration("P1Y---2M").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "failed to parse \"P1Y---2M\" as an ISO 8601 duration: \
    ///      expected a number starting the next component or the end \
    ///      of input, but found `-`",
    /// );
    /// ```
    #[inline]
    pub fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        let result = self.p.parse_duration(input);
        if let Err(ref _err) = result {
            trace!("rejected ISO 8601 duration: {_err}");
        }
        result
    }
}

impl Default for DurationParser {
    fn default() -> DurationParser {
        DurationParser::new()
    }
}

/// A printer for ISO 8601 durations.
///
/// This printer has no configuration today. The output is always the
/// canonical form: zero components are omitted, designators are uppercase
/// and the zero duration is written as `P0D`.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601::DurationPrinter, Duration};
///
/// let printer = DurationPrinter::new();
/// let duration = Duration::from_weeks(1).hours(12);
/// assert_eq!(printer.duration_to_string(&duration), "P1WT12H");
/// ```
#[derive(Debug)]
pub struct DurationPrinter {
    p: printer::DurationPrinter,
}

impl DurationPrinter {
    /// Create a new ISO 8601 duration printer with the default
    /// configuration.
    #[inline]
    pub const fn new() -> DurationPrinter {
        DurationPrinter { p: printer::DurationPrinter::new() }
    }

    /// Format a `Duration` into a string.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{fmt::iso8601::DurationPrinter, Duration};
    ///
    /// const PRINTER: DurationPrinter = DurationPrinter::new();
    ///
    /// let duration = Duration::from_years(2).days(3).minutes(4);
    /// assert_eq!(PRINTER.duration_to_string(&duration), "P2Y3DT4M");
    /// ```
    pub fn duration_to_string(&self, duration: &Duration) -> String {
        let mut buf = String::with_capacity(4);
        // OK because writing to `String` never fails.
        self.print_duration(duration, &mut buf).unwrap();
        buf
    }

    /// Print a `Duration` to the given writer.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given [`Write`]
    /// implementation would fail. Some such implementations, like for
    /// `String` and `Vec<u8>`, never fail.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{fmt::iso8601::DurationPrinter, Duration};
    ///
    /// const PRINTER: DurationPrinter = DurationPrinter::new();
    ///
    /// let mut buf = vec![];
    /// PRINTER.print_duration(&Duration::ZERO, &mut buf)?;
    /// assert_eq!(buf, b"P0D");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn print_duration<W: Write>(
        &self,
        duration: &Duration,
        wtr: W,
    ) -> Result<(), Error> {
        self.p.print_duration(duration, wtr)
    }
}

impl Default for DurationPrinter {
    fn default() -> DurationPrinter {
        DurationPrinter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_entry_points() {
        assert!(parse_optional(None::<&str>).unwrap_err().is_absent());
        assert!(parse_optional(Some("")).unwrap_err().is_parse());
        assert_eq!(
            parse_optional(Some("P1W")).unwrap(),
            Duration::from_weeks(1)
        );

        assert_eq!(try_parse_optional(None::<&str>), None);
        assert_eq!(try_parse_optional(Some("P")), None);
        assert_eq!(
            try_parse_optional(Some("PT1M")),
            Some(Duration::from_minutes(1))
        );
    }

    #[test]
    fn strict_and_non_strict_agree() {
        let inputs = [
            "", "P", "PT", "P0D", "P1Y", "PT5H", "P1H", "PT1D", "P1M2Y",
            "P1Z", "P1Y---2M", "P1Y2M+++", "P1YT", "P1Y2", "P1T1H",
            "PT1HT1M", "P1Y1Y", "p1y", "-P1D", "P4294967296D",
            "P1Y2M3W4DT5H6M7S",
        ];
        for input in inputs {
            assert_eq!(parse(input).ok(), try_parse(input), "{input:?}");
        }
    }

    #[test]
    fn absent_error_message() {
        insta::assert_snapshot!(
            parse_optional(None::<&str>).unwrap_err(),
            @"no input was given, but a duration string was required",
        );
    }
}
