use crate::{
    error::Error,
    fmt::{Write, WriteExt},
    Duration, Unit,
};

/// A printer for ISO 8601 durations.
#[derive(Debug)]
pub(super) struct DurationPrinter {
    /// There are currently no configuration options for this printer.
    _priv: (),
}

impl DurationPrinter {
    /// Create a new ISO 8601 duration printer with the default
    /// configuration.
    pub(super) const fn new() -> DurationPrinter {
        DurationPrinter { _priv: () }
    }

    /// Print the given duration to the writer given.
    ///
    /// This only returns an error when the given writer returns an error.
    pub(super) fn print_duration<W: Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> Result<(), Error> {
        wtr.write_str("P")?;

        let mut non_zero = false;
        for unit in [Unit::Year, Unit::Month, Unit::Week, Unit::Day] {
            non_zero |= self.print_unit(duration, unit, &mut wtr)?;
        }

        let has_time = duration.get_hours() != 0
            || duration.get_minutes() != 0
            || duration.get_seconds() != 0;
        if has_time {
            wtr.write_str("T")?;
            for unit in [Unit::Hour, Unit::Minute, Unit::Second] {
                non_zero |= self.print_unit(duration, unit, &mut wtr)?;
            }
        }

        // The empty duration is written as a zero number of days, since `P`
        // on its own isn't a valid duration.
        if !non_zero {
            wtr.write_str("0D")?;
        }
        Ok(())
    }

    /// Prints a single component when it is non-zero.
    ///
    /// Returns true when something was written.
    fn print_unit<W: Write>(
        &self,
        duration: &Duration,
        unit: Unit,
        mut wtr: W,
    ) -> Result<bool, Error> {
        let value = duration.get(unit);
        if value == 0 {
            return Ok(false);
        }
        wtr.write_int(value)?;
        wtr.write_char(unit.designator())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn p(duration: Duration) -> String {
        let mut buf = String::new();
        DurationPrinter::new().print_duration(&duration, &mut buf).unwrap();
        buf
    }

    #[test]
    fn print_duration_basic() {
        insta::assert_snapshot!(p(Duration::ZERO), @"P0D");
        insta::assert_snapshot!(p(Duration::from_years(1)), @"P1Y");
        insta::assert_snapshot!(p(Duration::from_months(1)), @"P1M");
        insta::assert_snapshot!(p(Duration::from_weeks(1)), @"P1W");
        insta::assert_snapshot!(p(Duration::from_days(1)), @"P1D");
        insta::assert_snapshot!(p(Duration::from_hours(1)), @"PT1H");
        insta::assert_snapshot!(p(Duration::from_minutes(1)), @"PT1M");
        insta::assert_snapshot!(p(Duration::from_seconds(1)), @"PT1S");
        insta::assert_snapshot!(
            p(Duration::new(1, 2, 3, 4, 5, 6, 7)),
            @"P1Y2M3W4DT5H6M7S",
        );
    }

    #[test]
    fn print_duration_sparse() {
        insta::assert_snapshot!(
            p(Duration::from_years(1).seconds(1)),
            @"P1YT1S",
        );
        insta::assert_snapshot!(
            p(Duration::from_months(1).minutes(1)),
            @"P1MT1M",
        );
        insta::assert_snapshot!(
            p(Duration::from_weeks(2).days(3)),
            @"P2W3D",
        );
        insta::assert_snapshot!(
            p(Duration::from_hours(5).seconds(30)),
            @"PT5H30S",
        );
    }

    #[test]
    fn print_duration_no_carrying() {
        insta::assert_snapshot!(p(Duration::from_days(7)), @"P7D");
        insta::assert_snapshot!(p(Duration::from_minutes(90)), @"PT90M");
        insta::assert_snapshot!(p(Duration::from_months(24)), @"P24M");
        insta::assert_snapshot!(
            p(Duration::new(
                u32::MAX,
                u32::MAX,
                u32::MAX,
                u32::MAX,
                u32::MAX,
                u32::MAX,
                u32::MAX,
            )),
            @"P4294967295Y4294967295M4294967295W4294967295DT4294967295H4294967295M4294967295S",
        );
    }
}
