/// A unit of time recognized in an ISO 8601 duration.
///
/// Each unit corresponds to exactly one component of a
/// [`Duration`](crate::Duration). Units can be used to access components
/// generically via [`Duration::get`](crate::Duration::get) and
/// [`Duration::with`](crate::Duration::with).
///
/// # Example: ordering
///
/// `Unit` has an ordering defined such that bigger units compare greater
/// than smaller units. This is also the order in which components must be
/// written in an ISO 8601 duration: from largest to smallest.
///
/// ```
/// use isoduration::Unit;
///
/// assert!(Unit::Year > Unit::Second);
/// assert!(Unit::Week > Unit::Day);
/// assert!(Unit::Day > Unit::Hour);
/// assert!(Unit::Hour > Unit::Minute);
/// assert_eq!(Unit::Hour, Unit::Hour);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    /// A second.
    Second = 0,
    /// A minute.
    Minute = 1,
    /// An hour.
    Hour = 2,
    /// A day.
    Day = 3,
    /// A week. In calendar arithmetic, a week is always 7 days.
    Week = 4,
    /// A month. Months have variable length in calendar arithmetic.
    Month = 5,
    /// A year. In calendar arithmetic, a year is always 12 months.
    Year = 6,
}

impl Unit {
    /// All units, from largest to smallest.
    ///
    /// This is the order in which components appear in an ISO 8601
    /// duration, and the order in which they are applied to a datetime.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Returns true when this unit is written after the `T` time designator
    /// in an ISO 8601 duration.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Unit;
    ///
    /// assert!(Unit::Hour.is_time());
    /// assert!(Unit::Second.is_time());
    /// assert!(!Unit::Day.is_time());
    /// assert!(!Unit::Month.is_time());
    /// ```
    pub fn is_time(self) -> bool {
        self <= Unit::Hour
    }

    /// Returns the ASCII unit designator used for this unit in an ISO 8601
    /// duration.
    ///
    /// Note that both [`Unit::Month`] and [`Unit::Minute`] use `M`. Which
    /// one is meant depends on whether it appears before or after the `T`
    /// time designator.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Unit;
    ///
    /// assert_eq!(Unit::Year.designator(), 'Y');
    /// assert_eq!(Unit::Month.designator(), 'M');
    /// assert_eq!(Unit::Minute.designator(), 'M');
    /// ```
    pub fn designator(self) -> char {
        match self {
            Unit::Year => 'Y',
            Unit::Month => 'M',
            Unit::Week => 'W',
            Unit::Day => 'D',
            Unit::Hour => 'H',
            Unit::Minute => 'M',
            Unit::Second => 'S',
        }
    }

    /// A human readable singular description of this unit of time.
    pub(crate) fn singular(&self) -> &'static str {
        match *self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(&self) -> &'static str {
        match *self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&Unit::ALL).unwrap()
    }
}
