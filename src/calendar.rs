/*!
Applying durations to datetimes.

A [`Duration`] has no fixed length. Adding one month to January 31 and
adding one month to February 1 moves a datetime by a different number of
days. So a duration can only be turned into a concrete point in time by
applying it to a datetime, one component at a time.

The routines in this module, [`add`] and [`subtract`], apply the
components of a duration in a fixed order, from largest unit to smallest:

1. years, as a number of months (12 per year),
2. months,
3. weeks, as a number of days (7 per week),
4. days,
5. hours, minutes and seconds, each as an exact number of seconds.

Zero components are skipped. When subtracting, each step moves backward
instead of forward, but the order is the same.

Month arithmetic clamps the day of the month when it would be invalid. For
example, one month after January 31 is February 28 (or 29). Because years
are applied as months, one year after February 29 is February 28. And since
years are applied before days, the order is observable:

```
use chrono::NaiveDate;
use isoduration::{calendar, Duration};

let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    .and_hms_opt(0, 0, 0).unwrap();
let duration: Duration = "P1Y1D".parse()?;
let got = calendar::add(leap_day, duration)?;
assert_eq!(got.date(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Datetime types

Any type implementing the [`Calendar`] trait can be used. This crate
provides implementations for [`chrono::NaiveDateTime`] and
[`chrono::DateTime`] (in any time zone).

The `+` and `-` operators are also overloaded for those chrono types. Like
chrono's own operators, they panic when the result is out of range.

```
use chrono::{TimeZone, Utc};
use isoduration::Duration;

let dt = Utc.with_ymd_and_hms(2024, 1, 31, 9, 30, 0).unwrap();
let got = dt + Duration::from_months(1).hours(1);
assert_eq!(got.to_string(), "2024-02-29 10:30:00 UTC");
```
*/

use chrono::{DateTime, Days, Months, NaiveDateTime, TimeDelta, TimeZone};

use crate::{
    error::{calendar::Error as E, Error},
    Duration, Unit,
};

/// A datetime type that durations can be applied to.
///
/// Each method moves the datetime by a signed number of calendar units, and
/// returns `None` when the result cannot be represented.
///
/// # Example: a custom datetime type
///
/// This shows how to apply durations to a simple wrapper type.
///
/// ```
/// use chrono::NaiveDateTime;
/// use isoduration::{calendar::{self, Calendar}, Duration};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Deadline(NaiveDateTime);
///
/// impl Calendar for Deadline {
///     fn try_add_months(self, months: i64) -> Option<Deadline> {
///         self.0.try_add_months(months).map(Deadline)
///     }
///
///     fn try_add_days(self, days: i64) -> Option<Deadline> {
///         self.0.try_add_days(days).map(Deadline)
///     }
///
///     fn try_add_seconds(self, seconds: i64) -> Option<Deadline> {
///         self.0.try_add_seconds(seconds).map(Deadline)
///     }
/// }
///
/// let start = Deadline("2024-01-01T00:00:00".parse()?);
/// let end = calendar::add(start, Duration::from_weeks(2))?;
/// assert_eq!(end, Deadline("2024-01-15T00:00:00".parse()?));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Calendar: Sized {
    /// Moves this datetime by the given number of months, clamping the day
    /// of the month to the last day of the resulting month when necessary.
    fn try_add_months(self, months: i64) -> Option<Self>;

    /// Moves this datetime by the given number of calendar days.
    fn try_add_days(self, days: i64) -> Option<Self>;

    /// Moves this datetime by the given number of seconds of elapsed time.
    fn try_add_seconds(self, seconds: i64) -> Option<Self>;
}

impl Calendar for NaiveDateTime {
    fn try_add_months(self, months: i64) -> Option<NaiveDateTime> {
        let magnitude =
            Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        if months < 0 {
            self.checked_sub_months(magnitude)
        } else {
            self.checked_add_months(magnitude)
        }
    }

    fn try_add_days(self, days: i64) -> Option<NaiveDateTime> {
        let magnitude = Days::new(days.unsigned_abs());
        if days < 0 {
            self.checked_sub_days(magnitude)
        } else {
            self.checked_add_days(magnitude)
        }
    }

    fn try_add_seconds(self, seconds: i64) -> Option<NaiveDateTime> {
        self.checked_add_signed(TimeDelta::try_seconds(seconds)?)
    }
}

/// Calendar units are applied to the local datetime in the time zone, while
/// seconds are applied to the instant. Moving by months or days can fail
/// when the resulting local datetime doesn't exist in the time zone (for
/// example, because of a DST gap).
impl<Tz: TimeZone> Calendar for DateTime<Tz> {
    fn try_add_months(self, months: i64) -> Option<DateTime<Tz>> {
        let magnitude =
            Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        if months < 0 {
            self.checked_sub_months(magnitude)
        } else {
            self.checked_add_months(magnitude)
        }
    }

    fn try_add_days(self, days: i64) -> Option<DateTime<Tz>> {
        let magnitude = Days::new(days.unsigned_abs());
        if days < 0 {
            self.checked_sub_days(magnitude)
        } else {
            self.checked_add_days(magnitude)
        }
    }

    fn try_add_seconds(self, seconds: i64) -> Option<DateTime<Tz>> {
        self.checked_add_signed(TimeDelta::try_seconds(seconds)?)
    }
}

/// Moves the given datetime forward in time by the given duration.
///
/// See the [module documentation](self) for the order in which components
/// are applied.
///
/// # Errors
///
/// This returns an error if any step moves the datetime outside the range
/// supported by its type. The error names the component that couldn't be
/// applied, and [`Error::is_range`] returns true for it.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use isoduration::{calendar, Duration};
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
///     .and_hms_opt(23, 0, 0).unwrap();
/// let got = calendar::add(dt, "P1W1DT2H".parse()?)?;
/// assert_eq!(got.to_string(), "2024-03-19 01:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn add<C: Calendar>(datetime: C, duration: Duration) -> Result<C, Error> {
    apply(datetime, duration, Direction::Forward)
}

/// Moves the given datetime backward in time by the given duration.
///
/// See the [module documentation](self) for the order in which components
/// are applied. This is not always the inverse of [`add`], since month
/// arithmetic clamps the day of the month.
///
/// # Errors
///
/// This returns an error if any step moves the datetime outside the range
/// supported by its type.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use isoduration::{calendar, Duration};
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
///     .and_hms_opt(0, 0, 0).unwrap();
/// let got = calendar::subtract(dt, Duration::from_months(1))?;
/// assert_eq!(got.to_string(), "2024-02-29 00:00:00");
/// // Adding it back doesn't restore the original datetime.
/// let got = calendar::add(got, Duration::from_months(1))?;
/// assert_eq!(got.to_string(), "2024-03-29 00:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn subtract<C: Calendar>(
    datetime: C,
    duration: Duration,
) -> Result<C, Error> {
    apply(datetime, duration, Direction::Backward)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Forward,
    Backward,
}

fn apply<C: Calendar>(
    mut datetime: C,
    duration: Duration,
    direction: Direction,
) -> Result<C, Error> {
    for unit in Unit::ALL {
        let value = duration.get(unit);
        if value == 0 {
            continue;
        }
        datetime = step(datetime, unit, value, direction).ok_or_else(|| {
            let amount = i64::from(value);
            let err = match direction {
                Direction::Forward => E::Add { unit, amount },
                Direction::Backward => E::Subtract { unit, amount },
            };
            debug!("{err}");
            Error::from(err)
        })?;
    }
    Ok(datetime)
}

/// Applies a single non-zero component to the datetime.
fn step<C: Calendar>(
    datetime: C,
    unit: Unit,
    value: u32,
    direction: Direction,
) -> Option<C> {
    let mut amount = i64::from(value);
    if direction == Direction::Backward {
        amount = -amount;
    }
    // None of these multiplications can overflow, since `amount` is at most
    // `u32::MAX` in magnitude.
    match unit {
        Unit::Year => datetime.try_add_months(amount * 12),
        Unit::Month => datetime.try_add_months(amount),
        Unit::Week => datetime.try_add_days(amount * 7),
        Unit::Day => datetime.try_add_days(amount),
        Unit::Hour => datetime.try_add_seconds(amount * 3600),
        Unit::Minute => datetime.try_add_seconds(amount * 60),
        Unit::Second => datetime.try_add_seconds(amount),
    }
}

/// Adds a duration to a naive datetime.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`add`] to handle this
/// case as an error.
impl core::ops::Add<Duration> for NaiveDateTime {
    type Output = NaiveDateTime;

    #[inline]
    fn add(self, rhs: Duration) -> NaiveDateTime {
        add(self, rhs).expect("`NaiveDateTime + Duration` out of range")
    }
}

impl core::ops::AddAssign<Duration> for NaiveDateTime {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

/// Subtracts a duration from a naive datetime.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`subtract`] to handle
/// this case as an error.
impl core::ops::Sub<Duration> for NaiveDateTime {
    type Output = NaiveDateTime;

    #[inline]
    fn sub(self, rhs: Duration) -> NaiveDateTime {
        subtract(self, rhs).expect("`NaiveDateTime - Duration` out of range")
    }
}

impl core::ops::SubAssign<Duration> for NaiveDateTime {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

/// Adds a duration to a zoned datetime.
///
/// # Panics
///
/// This panics if the result is out of range or doesn't exist in the time
/// zone. Use [`add`] to handle this case as an error.
impl<Tz: TimeZone> core::ops::Add<Duration> for DateTime<Tz> {
    type Output = DateTime<Tz>;

    #[inline]
    fn add(self, rhs: Duration) -> DateTime<Tz> {
        add(self, rhs).expect("`DateTime + Duration` out of range")
    }
}

impl<Tz: TimeZone> core::ops::AddAssign<Duration> for DateTime<Tz> {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.clone() + rhs;
    }
}

/// Subtracts a duration from a zoned datetime.
///
/// # Panics
///
/// This panics if the result is out of range or doesn't exist in the time
/// zone. Use [`subtract`] to handle this case as an error.
impl<Tz: TimeZone> core::ops::Sub<Duration> for DateTime<Tz> {
    type Output = DateTime<Tz>;

    #[inline]
    fn sub(self, rhs: Duration) -> DateTime<Tz> {
        subtract(self, rhs).expect("`DateTime - Duration` out of range")
    }
}

impl<Tz: TimeZone> core::ops::SubAssign<Duration> for DateTime<Tz> {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.clone() - rhs;
    }
}
