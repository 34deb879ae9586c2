use crate::{
    error::{fmt::iso8601::Error as E, Error, ErrorContext},
    fmt::{util::parse_u32_prefix, Parsed},
    Duration, Unit,
};

/// The scan state accumulated while parsing the components of a duration.
///
/// Components are recorded as they are found. The state enforces that each
/// new component has a strictly smaller unit than the one before it, which
/// rejects both repeated and misordered components.
#[derive(Debug, Default)]
struct DurationUnits {
    /// The parsed value of each unit, indexed by `Unit as usize`.
    values: [u32; 7],
    /// The smallest (and thus most recent) unit recorded so far.
    min: Option<Unit>,
}

impl DurationUnits {
    /// Records `value` for `unit`.
    ///
    /// This returns an error if `unit` is not strictly smaller than every
    /// unit recorded before it.
    fn set_unit_value(&mut self, unit: Unit, value: u32) -> Result<(), Error> {
        if let Some(previous) = self.min {
            if unit >= previous {
                return Err(Error::from(E::UnitOutOfOrder { unit, previous }));
            }
        }
        self.values[unit as usize] = value;
        self.min = Some(unit);
        Ok(())
    }

    /// Returns the smallest unit recorded so far, if any.
    fn get_min(&self) -> Option<Unit> {
        self.min
    }

    /// Converts the recorded values into a duration. Units that were never
    /// recorded are zero.
    fn to_duration(&self) -> Duration {
        let mut duration = Duration::ZERO;
        for unit in Unit::ALL {
            duration = duration.with(unit, self.values[unit as usize]);
        }
        duration
    }
}

/// A parser for ISO 8601 durations.
#[derive(Debug)]
pub(super) struct DurationParser {
    /// There are currently no configuration options for this parser.
    _priv: (),
}

impl DurationParser {
    /// Create a new ISO 8601 duration parser with the default configuration.
    pub(super) const fn new() -> DurationParser {
        DurationParser { _priv: () }
    }

    pub(super) fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        #[inline(never)]
        fn imp(p: &DurationParser, input: &[u8]) -> Result<Duration, Error> {
            p.parse_full(input).with_context(|| E::invalid(input))
        }
        imp(self, input.as_ref())
    }

    /// Parses the entirety of `input` as a duration.
    ///
    /// Unlike the individual component routines, this requires that every
    /// byte of `input` is consumed.
    fn parse_full(&self, input: &[u8]) -> Result<Duration, Error> {
        let Parsed { input: body, .. } =
            self.parse_duration_designator(input)?;
        if input.len() < 3 {
            return Err(Error::from(E::TooShort { len: input.len() }));
        }

        let mut units = DurationUnits::default();
        let Parsed { input, .. } = self.parse_date_units(body, &mut units)?;
        let Parsed { value: has_time, mut input } =
            self.parse_time_designator(input);
        if has_time {
            let parsed = self.parse_time_units(input, &mut units)?;
            input = parsed.input;

            if units.get_min().map_or(true, |min| !min.is_time()) {
                return Err(Error::from(E::ExpectedTimeUnits));
            }
        }
        if let Some(&byte) = input.first() {
            return Err(Error::from(self.unexpected(byte, has_time)));
        }
        if units.get_min().is_none() {
            return Err(Error::from(E::NoComponents));
        }
        Ok(units.to_duration())
    }

    /// Parses consecutive date units from an ISO 8601 duration string into
    /// the `DurationUnits` given.
    ///
    /// This stops at the first byte that cannot start a new component.
    fn parse_date_units<'i>(
        &self,
        mut input: &'i [u8],
        units: &mut DurationUnits,
    ) -> Result<Parsed<'i, ()>, Error> {
        loop {
            let parsed = parse_u32_prefix(input)?;
            input = parsed.input;
            let Some(value) = parsed.value else { break };

            let parsed = self.parse_unit_date_designator(input)?;
            input = parsed.input;
            let unit = parsed.value;

            units.set_unit_value(unit, value)?;
        }
        Ok(Parsed { value: (), input })
    }

    /// Parses consecutive time units from an ISO 8601 duration string into
    /// the `DurationUnits` given.
    ///
    /// This stops at the first byte that cannot start a new component.
    fn parse_time_units<'i>(
        &self,
        mut input: &'i [u8],
        units: &mut DurationUnits,
    ) -> Result<Parsed<'i, ()>, Error> {
        loop {
            let parsed = parse_u32_prefix(input)?;
            input = parsed.input;
            let Some(value) = parsed.value else { break };

            let parsed = self.parse_unit_time_designator(input)?;
            input = parsed.input;
            let unit = parsed.value;

            units.set_unit_value(unit, value)?;
        }
        Ok(Parsed { value: (), input })
    }

    fn parse_unit_date_designator<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Unit>, Error> {
        let (&first, input) = input
            .split_first()
            .ok_or(E::ExpectedDateDesignatorFoundEndOfInput)?;
        let unit = match first {
            b'Y' => Unit::Year,
            b'M' => Unit::Month,
            b'W' => Unit::Week,
            b'D' => Unit::Day,
            _ => {
                return Err(Error::from(E::ExpectedDateDesignatorFoundByte {
                    byte: first,
                }));
            }
        };
        Ok(Parsed { value: unit, input })
    }

    fn parse_unit_time_designator<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Unit>, Error> {
        let (&first, input) = input
            .split_first()
            .ok_or(E::ExpectedTimeDesignatorFoundEndOfInput)?;
        let unit = match first {
            b'H' => Unit::Hour,
            b'M' => Unit::Minute,
            b'S' => Unit::Second,
            _ => {
                return Err(Error::from(E::ExpectedTimeDesignatorFoundByte {
                    byte: first,
                }));
            }
        };
        Ok(Parsed { value: unit, input })
    }

    // DurationDesignator ::: P
    fn parse_duration_designator<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ()>, Error> {
        let (&first, input) = input
            .split_first()
            .ok_or(E::ExpectedDurationDesignatorFoundEndOfInput)?;
        if first != b'P' {
            return Err(Error::from(E::ExpectedDurationDesignatorFoundByte {
                byte: first,
            }));
        }
        Ok(Parsed { value: (), input })
    }

    // TimeDesignator ::: T
    fn parse_time_designator<'i>(&self, input: &'i [u8]) -> Parsed<'i, bool> {
        match input.split_first() {
            Some((&b'T', tail)) => Parsed { value: true, input: tail },
            _ => Parsed { value: false, input },
        }
    }

    /// Builds the error for a byte found where only a new component (or the
    /// end of input) may appear.
    #[cold]
    #[inline(never)]
    fn unexpected(&self, byte: u8, has_time: bool) -> E {
        match byte {
            b'T' if has_time => E::DuplicateTimeDesignator,
            b'Y' | b'M' | b'W' | b'D' | b'H' | b'S' => {
                E::MissingValueForDesignator { byte }
            }
            _ => E::UnexpectedByte { byte },
        }
    }
}
