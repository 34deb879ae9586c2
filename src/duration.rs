use crate::{
    calendar::{self, Calendar},
    error::{duration::Error as E, Error},
    fmt::iso8601::{DEFAULT_DURATION_PARSER, DEFAULT_DURATION_PRINTER},
    Unit,
};

/// A duration of time written in ISO 8601 notation.
///
/// A `Duration` is made up of seven independent components: years, months,
/// weeks, days, hours, minutes and seconds. Each component is a
/// non-negative integer that fits into a `u32`. Components are never
/// normalized into one another. That is, 7 days is not the same duration as
/// 1 week, and 90 minutes stays 90 minutes. This is because calendar units
/// don't have a fixed length. A month might be 28 days or 31 days, and this
/// can only be known once the duration is applied to a particular datetime.
///
/// # Creating durations
///
/// A duration can be created from all seven components with
/// [`Duration::new`], from a single component with one of the `from_*`
/// constructors, or by starting from one of those and using the
/// builder-style setters:
///
/// ```
/// use isoduration::Duration;
///
/// let d1 = Duration::new(0, 1, 0, 2, 3, 0, 0);
/// let d2 = Duration::from_months(1).days(2).hours(3);
/// assert_eq!(d1, d2);
/// ```
///
/// # Parsing and printing
///
/// The `Duration` type provides convenient trait implementations of
/// [`std::str::FromStr`] and [`std::fmt::Display`]:
///
/// ```
/// use isoduration::Duration;
///
/// let duration: Duration = "P2M10DT2H30M".parse()?;
/// assert_eq!(duration.to_string(), "P2M10DT2H30M");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The printer always emits the canonical form. Zero components are left
/// out, and the zero duration is written as `P0D`. See the
/// [`fmt::iso8601`](crate::fmt::iso8601) module for details about the
/// grammar accepted by the parser.
///
/// # Equality
///
/// Two durations are equal when all of their components are equal. The
/// `Hash` implementation is consistent with this, so durations can be used
/// as keys in a `HashMap` or members of a `HashSet`. There is deliberately
/// no `Ord` implementation, since there is no meaningful way to compare
/// `P1M` with `P30D` without a reference datetime.
///
/// # Arithmetic
///
/// Durations can be added together component-wise with
/// [`Duration::checked_add`] or the `+` operator, and applied to datetimes
/// with [`Duration::add_to`] and [`Duration::subtract_from`] (or the
/// [`calendar`](crate::calendar) module).
///
/// ```
/// use chrono::NaiveDate;
/// use isoduration::Duration;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
///     .and_hms_opt(0, 0, 0).unwrap();
/// let got = Duration::from_months(1).days(1).add_to(dt)?;
/// assert_eq!(got.to_string(), "2024-03-01 00:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Duration {
    years: u32,
    months: u32,
    weeks: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

/// Infallible routines for creating durations and accessing their
/// components.
impl Duration {
    /// The zero duration. Every component is zero.
    ///
    /// This is also the value returned by `Duration::default()`.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert!(Duration::ZERO.is_zero());
    /// assert_eq!(Duration::ZERO, Duration::default());
    /// assert_eq!(Duration::ZERO.to_string(), "P0D");
    /// ```
    pub const ZERO: Duration = Duration::new(0, 0, 0, 0, 0, 0, 0);

    /// Creates a new duration from all of its components.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let duration = Duration::new(1, 2, 3, 4, 5, 6, 7);
    /// assert_eq!(duration.to_string(), "P1Y2M3W4DT5H6M7S");
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        years: u32,
        months: u32,
        weeks: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Duration {
        Duration { years, months, weeks, days, hours, minutes, seconds }
    }

    /// Creates a duration with the given number of years and every other
    /// component set to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let duration = Duration::from_years(5);
    /// assert_eq!(duration.get_years(), 5);
    /// assert_eq!(duration.to_string(), "P5Y");
    /// ```
    #[inline]
    pub const fn from_years(years: u32) -> Duration {
        Duration::ZERO.years(years)
    }

    /// Creates a duration with the given number of months and every other
    /// component set to zero.
    #[inline]
    pub const fn from_months(months: u32) -> Duration {
        Duration::ZERO.months(months)
    }

    /// Creates a duration with the given number of weeks and every other
    /// component set to zero.
    ///
    /// Note that this is not equal to a duration of 7 times as many days.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert_ne!(Duration::from_weeks(1), Duration::from_days(7));
    /// ```
    #[inline]
    pub const fn from_weeks(weeks: u32) -> Duration {
        Duration::ZERO.weeks(weeks)
    }

    /// Creates a duration with the given number of days and every other
    /// component set to zero.
    #[inline]
    pub const fn from_days(days: u32) -> Duration {
        Duration::ZERO.days(days)
    }

    /// Creates a duration with the given number of hours and every other
    /// component set to zero.
    #[inline]
    pub const fn from_hours(hours: u32) -> Duration {
        Duration::ZERO.hours(hours)
    }

    /// Creates a duration with the given number of minutes and every other
    /// component set to zero.
    #[inline]
    pub const fn from_minutes(minutes: u32) -> Duration {
        Duration::ZERO.minutes(minutes)
    }

    /// Creates a duration with the given number of seconds and every other
    /// component set to zero.
    #[inline]
    pub const fn from_seconds(seconds: u32) -> Duration {
        Duration::ZERO.seconds(seconds)
    }

    /// Returns a copy of this duration with the years component set to the
    /// value given.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let duration = Duration::from_days(3).years(1);
    /// assert_eq!(duration.to_string(), "P1Y3D");
    /// ```
    #[inline]
    pub const fn years(self, years: u32) -> Duration {
        Duration { years, ..self }
    }

    /// Returns a copy of this duration with the months component set to the
    /// value given.
    #[inline]
    pub const fn months(self, months: u32) -> Duration {
        Duration { months, ..self }
    }

    /// Returns a copy of this duration with the weeks component set to the
    /// value given.
    #[inline]
    pub const fn weeks(self, weeks: u32) -> Duration {
        Duration { weeks, ..self }
    }

    /// Returns a copy of this duration with the days component set to the
    /// value given.
    #[inline]
    pub const fn days(self, days: u32) -> Duration {
        Duration { days, ..self }
    }

    /// Returns a copy of this duration with the hours component set to the
    /// value given.
    #[inline]
    pub const fn hours(self, hours: u32) -> Duration {
        Duration { hours, ..self }
    }

    /// Returns a copy of this duration with the minutes component set to the
    /// value given.
    #[inline]
    pub const fn minutes(self, minutes: u32) -> Duration {
        Duration { minutes, ..self }
    }

    /// Returns a copy of this duration with the seconds component set to the
    /// value given.
    #[inline]
    pub const fn seconds(self, seconds: u32) -> Duration {
        Duration { seconds, ..self }
    }

    /// Returns the number of years in this duration.
    #[inline]
    pub const fn get_years(&self) -> u32 {
        self.years
    }

    /// Returns the number of months in this duration.
    #[inline]
    pub const fn get_months(&self) -> u32 {
        self.months
    }

    /// Returns the number of weeks in this duration.
    #[inline]
    pub const fn get_weeks(&self) -> u32 {
        self.weeks
    }

    /// Returns the number of days in this duration.
    #[inline]
    pub const fn get_days(&self) -> u32 {
        self.days
    }

    /// Returns the number of hours in this duration.
    #[inline]
    pub const fn get_hours(&self) -> u32 {
        self.hours
    }

    /// Returns the number of minutes in this duration.
    #[inline]
    pub const fn get_minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the number of seconds in this duration.
    #[inline]
    pub const fn get_seconds(&self) -> u32 {
        self.seconds
    }

    /// Returns the value of the component corresponding to the unit given.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{Duration, Unit};
    ///
    /// let duration = Duration::from_months(6).minutes(30);
    /// assert_eq!(duration.get(Unit::Month), 6);
    /// assert_eq!(duration.get(Unit::Minute), 30);
    /// assert_eq!(duration.get(Unit::Hour), 0);
    /// ```
    #[inline]
    pub fn get(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
        }
    }

    /// Returns a copy of this duration with the component corresponding to
    /// the unit given set to `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{Duration, Unit};
    ///
    /// let mut duration = Duration::ZERO;
    /// for unit in Unit::ALL {
    ///     duration = duration.with(unit, 1);
    /// }
    /// assert_eq!(duration.to_string(), "P1Y1M1W1DT1H1M1S");
    /// ```
    #[inline]
    pub fn with(self, unit: Unit, value: u32) -> Duration {
        match unit {
            Unit::Year => self.years(value),
            Unit::Month => self.months(value),
            Unit::Week => self.weeks(value),
            Unit::Day => self.days(value),
            Unit::Hour => self.hours(value),
            Unit::Minute => self.minutes(value),
            Unit::Second => self.seconds(value),
        }
    }

    /// Returns true if every component of this duration is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert!(Duration::ZERO.is_zero());
    /// assert!(Duration::from_seconds(0).is_zero());
    /// assert!(!Duration::from_seconds(1).is_zero());
    /// ```
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    /// Returns a stable 32-bit fingerprint of this duration.
    ///
    /// Unlike the `Hash` implementation, whose output depends on the hasher
    /// used, the value returned here never changes between program runs or
    /// releases of this crate. This makes it suitable for persisting or for
    /// sharing with other systems. It is computed as an FNV-style fold over
    /// the components, from years to seconds:
    ///
    /// ```text
    /// hash = 2166136261
    /// for each component: hash = (hash * 16777619) ^ component
    /// ```
    ///
    /// with all arithmetic wrapping on overflow. Equal durations always have
    /// equal fingerprints.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert_eq!(Duration::ZERO.fingerprint(), 1177189415);
    /// assert_eq!(
    ///     Duration::from_days(1).fingerprint(),
    ///     "P1D".parse::<Duration>()?.fingerprint(),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub const fn fingerprint(&self) -> u32 {
        const OFFSET_BASIS: u32 = 2166136261;
        const PRIME: u32 = 16777619;

        let mut hash = OFFSET_BASIS;
        hash = hash.wrapping_mul(PRIME) ^ self.years;
        hash = hash.wrapping_mul(PRIME) ^ self.months;
        hash = hash.wrapping_mul(PRIME) ^ self.weeks;
        hash = hash.wrapping_mul(PRIME) ^ self.days;
        hash = hash.wrapping_mul(PRIME) ^ self.hours;
        hash = hash.wrapping_mul(PRIME) ^ self.minutes;
        hash = hash.wrapping_mul(PRIME) ^ self.seconds;
        hash
    }
}

/// Fallible routines for parsing and arithmetic.
impl Duration {
    /// Parse an ISO 8601 duration string.
    ///
    /// This is the same as `input.parse::<Duration>()`, except it also
    /// accepts byte strings.
    ///
    /// # Errors
    ///
    /// This returns an error if the input isn't a valid ISO 8601 duration.
    /// See the [`fmt::iso8601`](crate::fmt::iso8601) module for the exact
    /// grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let duration = Duration::parse("P1Y2M3W4DT5H6M7S")?;
    /// assert_eq!(duration, Duration::new(1, 2, 3, 4, 5, 6, 7));
    ///
    /// let err = Duration::parse("P1M2Y").unwrap_err();
    /// assert!(err.is_parse());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Duration, Error> {
        DEFAULT_DURATION_PARSER.parse_duration(input)
    }

    /// Parse an ISO 8601 duration string, returning `None` if it is
    /// invalid.
    ///
    /// This accepts exactly the same inputs as [`Duration::parse`].
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert_eq!(Duration::try_parse("PT5H"), Some(Duration::from_hours(5)));
    /// assert_eq!(Duration::try_parse("PT5D"), None);
    /// ```
    #[inline]
    pub fn try_parse<I: AsRef<[u8]>>(input: I) -> Option<Duration> {
        Duration::parse(input).ok()
    }

    /// Adds two durations together component-wise.
    ///
    /// No carrying happens between components. For example, adding 30
    /// minutes to 45 minutes results in 75 minutes, not 1 hour and 15
    /// minutes.
    ///
    /// # Errors
    ///
    /// This returns an error if any component of the sum exceeds
    /// `u32::MAX`. The error names the component that overflowed, and
    /// [`Error::is_range`] returns true for it.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let d1 = Duration::from_minutes(30).seconds(10);
    /// let d2 = Duration::from_hours(1).minutes(45);
    /// assert_eq!(d1.checked_add(d2)?.to_string(), "PT1H75M10S");
    ///
    /// let err = Duration::from_days(u32::MAX)
    ///     .checked_add(Duration::from_days(1))
    ///     .unwrap_err();
    /// assert!(err.is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add(self, other: Duration) -> Result<Duration, Error> {
        let mut sum = Duration::ZERO;
        for unit in Unit::ALL {
            let value = self
                .get(unit)
                .checked_add(other.get(unit))
                .ok_or(E::Overflow { unit })?;
            sum = sum.with(unit, value);
        }
        Ok(sum)
    }

    /// Adds two durations together component-wise, clamping each component
    /// to `u32::MAX` instead of overflowing.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let d = Duration::from_hours(u32::MAX).minutes(1);
    /// let sum = d.saturating_add(Duration::from_hours(5).minutes(2));
    /// assert_eq!(sum, Duration::from_hours(u32::MAX).minutes(3));
    /// ```
    pub fn saturating_add(self, other: Duration) -> Duration {
        let mut sum = Duration::ZERO;
        for unit in Unit::ALL {
            let value = self.get(unit).saturating_add(other.get(unit));
            sum = sum.with(unit, value);
        }
        sum
    }

    /// Applies this duration to the datetime given, moving it forward in
    /// time.
    ///
    /// This is equivalent to [`calendar::add`]. See its documentation for
    /// the order in which components are applied.
    ///
    /// # Errors
    ///
    /// This returns an error if the result would fall outside the range
    /// supported by the datetime type.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use isoduration::Duration;
    ///
    /// let dt = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    ///     .and_hms_opt(12, 0, 0).unwrap();
    /// let got = Duration::from_years(1).add_to(dt)?;
    /// assert_eq!(got.to_string(), "2025-02-28 12:00:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn add_to<C: Calendar>(&self, datetime: C) -> Result<C, Error> {
        calendar::add(datetime, *self)
    }

    /// Applies this duration to the datetime given, moving it backward in
    /// time.
    ///
    /// This is equivalent to [`calendar::subtract`].
    ///
    /// # Errors
    ///
    /// This returns an error if the result would fall outside the range
    /// supported by the datetime type.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use isoduration::Duration;
    ///
    /// let dt = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    ///     .and_hms_opt(0, 0, 0).unwrap();
    /// let got = Duration::from_months(1).subtract_from(dt)?;
    /// assert_eq!(got.to_string(), "2024-02-29 00:00:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn subtract_from<C: Calendar>(&self, datetime: C) -> Result<C, Error> {
        calendar::subtract(datetime, *self)
    }
}

/// Adds two durations component-wise.
///
/// # Panics
///
/// This panics if any component overflows a `u32`. Use
/// [`Duration::checked_add`] to handle overflow as an error.
impl core::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("adding durations overflowed")
    }
}

/// Adds two durations component-wise in place.
///
/// # Panics
///
/// This panics if any component overflows a `u32`. Use
/// [`Duration::checked_add`] to handle overflow as an error.
impl core::ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |sum, d| sum + d)
    }
}

impl core::fmt::Debug for Duration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Duration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::fmt::StdFmtWrite;

        DEFAULT_DURATION_PRINTER
            .print_duration(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Duration, Error> {
        DEFAULT_DURATION_PARSER.parse_duration(string)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        deserializer.deserialize_str(crate::fmt::serde::DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        use quickcheck::Arbitrary;

        // Most durations in the wild only have a few components set, so
        // each component is zero about half of the time.
        let mut duration = Duration::ZERO;
        for unit in Unit::ALL {
            if bool::arbitrary(g) {
                duration = duration.with(unit, u32::arbitrary(g));
            }
        }
        duration
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            (
                (self.years, self.months, self.weeks, self.days),
                (self.hours, self.minutes, self.seconds),
            )
                .shrink()
                .map(
                    |(
                        (years, months, weeks, days),
                        (hours, minutes, seconds),
                    )| {
                        Duration::new(
                            years, months, weeks, days, hours, minutes,
                            seconds,
                        )
                    },
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn from_sets_exactly_one_component() {
        let constructors: [(Unit, fn(u32) -> Duration); 7] = [
            (Unit::Year, Duration::from_years),
            (Unit::Month, Duration::from_months),
            (Unit::Week, Duration::from_weeks),
            (Unit::Day, Duration::from_days),
            (Unit::Hour, Duration::from_hours),
            (Unit::Minute, Duration::from_minutes),
            (Unit::Second, Duration::from_seconds),
        ];
        for (unit, from) in constructors {
            let duration = from(42);
            for other in Unit::ALL {
                let expected = if other == unit { 42 } else { 0 };
                assert_eq!(
                    duration.get(other),
                    expected,
                    "{unit:?}/{other:?}"
                );
            }
        }
    }

    #[test]
    fn equality_is_component_wise() {
        assert_ne!(Duration::from_weeks(1), Duration::from_days(7));
        assert_ne!(Duration::from_hours(1), Duration::from_minutes(60));
        assert_ne!(Duration::from_years(1), Duration::from_months(12));
        assert_eq!(
            Duration::from_years(1).days(2),
            Duration::from_days(2).years(1),
        );
        assert_eq!(Duration::default(), Duration::ZERO);
    }

    #[test]
    fn fingerprint_is_fnv_fold() {
        assert_eq!(Duration::ZERO.fingerprint(), 1177189415);
        assert_eq!(Duration::from_days(1).fingerprint(), 121882844);
        assert_eq!(
            Duration::new(1, 2, 3, 4, 5, 6, 7).fingerprint(),
            3835236751,
        );
    }

    #[test]
    fn sum_does_not_carry() {
        let d1 = Duration::new(1, 11, 3, 6, 23, 59, 59);
        let d2 = Duration::new(1, 1, 1, 1, 1, 1, 1);
        assert_eq!(d1 + d2, Duration::new(2, 12, 4, 7, 24, 60, 60));
        assert_eq!(d1 + Duration::ZERO, d1);
    }

    #[test]
    fn sum_overflow() {
        let err = Duration::from_weeks(u32::MAX)
            .checked_add(Duration::from_weeks(1))
            .unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"adding durations overflowed the weeks component (the maximum is 4294967295)",
        );
    }

    #[test]
    #[should_panic]
    fn sum_overflow_operator_panics() {
        let _ = Duration::from_seconds(u32::MAX) + Duration::from_seconds(1);
    }

    #[test]
    fn sum_iterator() {
        let total: Duration = [
            Duration::from_days(1),
            Duration::from_hours(2),
            Duration::from_days(3),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Duration::from_days(4).hours(2));
    }

    #[test]
    fn debug_is_iso8601() {
        let duration = Duration::from_weeks(2).seconds(9);
        assert_eq!(alloc::format!("{duration:?}"), "P2WT9S");
        assert_eq!(duration.to_string(), "P2WT9S");
    }

    quickcheck! {
        fn prop_roundtrip(duration: Duration) -> bool {
            let printed = duration.to_string();
            Duration::parse(&printed).unwrap() == duration
        }

        fn prop_equal_means_equal_fingerprint(duration: Duration) -> bool {
            let copy = Duration::parse(duration.to_string()).unwrap();
            copy.fingerprint() == duration.fingerprint()
        }

        fn prop_add_commutes(d1: Duration, d2: Duration) -> bool {
            d1.checked_add(d2).ok() == d2.checked_add(d1).ok()
        }

        fn prop_add_zero_is_identity(duration: Duration) -> bool {
            duration.checked_add(Duration::ZERO).unwrap() == duration
        }

        fn prop_checked_add_agrees_with_saturating(
            d1: Duration,
            d2: Duration
        ) -> bool {
            match d1.checked_add(d2) {
                Ok(sum) => sum == d1.saturating_add(d2),
                Err(err) => err.is_range(),
            }
        }

        fn prop_with_then_get(
            duration: Duration,
            unit: Unit,
            value: u32
        ) -> bool {
            let updated = duration.with(unit, value);
            updated.get(unit) == value
                && Unit::ALL
                    .iter()
                    .filter(|&&other| other != unit)
                    .all(|&other| updated.get(other) == duration.get(other))
        }
    }
}
