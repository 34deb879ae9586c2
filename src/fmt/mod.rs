/*!
Configurable support for printing and parsing durations.

The main entry point is the [`iso8601`] module. It contains the
[`DurationParser`](iso8601::DurationParser) and
[`DurationPrinter`](iso8601::DurationPrinter) types, along with the free
functions [`iso8601::parse`] and [`iso8601::to_string`] for converting
between a [`Duration`](crate::Duration) and its textual form.

Most users won't need this module directly: `Duration` implements
[`core::str::FromStr`] and [`core::fmt::Display`], both of which use the
ISO 8601 format.

# The `Write` trait

Printing is done through this crate's own [`Write`] trait instead of
[`core::fmt::Write`]. It is implemented for `String` and `Vec<u8>`, and
adapters are provided for any [`core::fmt::Write`] implementation
([`StdFmtWrite`]) and, when the `std` feature is enabled, any
[`std::io::Write`] implementation ([`StdIoWrite`]).

# Serde

When the `serde` crate feature is enabled, `Duration` implements
`Serialize` and `Deserialize` using the ISO 8601 format, and the
[`serde`](self::serde) module provides helpers for use with Serde's `with`
attribute.
*/

use alloc::{string::String, vec::Vec};

use crate::{
    error::{fmt::Error as E, Error},
    fmt::util::Decimal,
};

pub mod iso8601;
#[cfg(feature = "serde")]
pub mod serde;
mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the remaining unparsed input.
/// This makes it possible to write a parser as a composition of small
/// routines that each consume a prefix of their input.
#[derive(Clone, Eq, Hash, PartialEq)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V: core::fmt::Debug> core::fmt::Debug for Parsed<'i, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &crate::util::escape::Bytes(self.input))
            .finish()
    }
}

/// A trait for printing durations.
///
/// This trait is used by the [`DurationPrinter`](iso8601::DurationPrinter)
/// to write its output. It is implemented for `String` and `Vec<u8>`, and
/// [`StdFmtWrite`] and [`StdIoWrite`] can be used to adapt other writers.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::{iso8601::DurationPrinter, Write}, Duration, Error};
///
/// /// A writer that counts how many bytes were written.
/// #[derive(Debug, Default)]
/// struct Counter(usize);
///
/// impl Write for Counter {
///     fn write_str(&mut self, string: &str) -> Result<(), Error> {
///         self.0 += string.len();
///         Ok(())
///     }
/// }
///
/// let mut counter = Counter::default();
/// let duration = Duration::from_days(10).hours(5);
/// DurationPrinter::new().print_duration(&duration, &mut counter)?;
/// assert_eq!(counter.0, "P10DT5H".len());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the write
    /// succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write + ?Sized> Write for &mut W {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `std::io::Write` implementations with
/// [`fmt::Write`](Write).
///
/// This is useful when one wants to print a duration directly to a file or
/// to stdout without an intermediate `String`.
///
/// # Example
///
/// ```no_run
/// use isoduration::{fmt::{iso8601::DurationPrinter, StdIoWrite}, Duration};
///
/// let stdout = std::io::stdout().lock();
/// let duration = Duration::from_weeks(2);
/// DurationPrinter::new().print_duration(&duration, StdIoWrite(stdout))?;
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct StdIoWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdIoWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0
            .write_all(string.as_bytes())
            .map_err(|err| Error::from(E::StdIoWriteAdapter(err.kind())))
    }
}

/// An adapter for using `core::fmt::Write` implementations with
/// [`fmt::Write`](Write).
///
/// This is used by the `Display` implementation of `Duration`, where the
/// sink is a `core::fmt::Formatter`.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::{iso8601::DurationPrinter, StdFmtWrite}, Duration};
///
/// let mut buf = String::new();
/// let duration = Duration::from_minutes(90);
/// DurationPrinter::new().print_duration(&duration, StdFmtWrite(&mut buf))?;
/// assert_eq!(buf, "PT90M");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct StdFmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for StdFmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0
            .write_str(string)
            .map_err(|_| Error::from(E::StdFmtWriteAdapter))
    }
}

/// An extension trait to `Write` that provides crate internal routines.
///
/// These routines aren't exposed because they make use of crate internal
/// types.
pub(crate) trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this
    /// buffer.
    #[inline]
    fn write_int(&mut self, n: u32) -> Result<(), Error> {
        self.write_str(Decimal::new(n).as_str())
    }
}

impl<W: Write> WriteExt for W {}
