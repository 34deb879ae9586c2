use crate::{error, util::escape, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DuplicateTimeDesignator,
    ExpectedDateDesignatorFoundByte { byte: u8 },
    ExpectedDateDesignatorFoundEndOfInput,
    ExpectedDurationDesignatorFoundByte { byte: u8 },
    ExpectedDurationDesignatorFoundEndOfInput,
    ExpectedTimeDesignatorFoundByte { byte: u8 },
    ExpectedTimeDesignatorFoundEndOfInput,
    ExpectedTimeUnits,
    Invalid { input: alloc::boxed::Box<[u8]> },
    MissingValueForDesignator { byte: u8 },
    NoComponents,
    TooShort { len: usize },
    UnexpectedByte { byte: u8 },
    UnitOutOfOrder { unit: Unit, previous: Unit },
    ValueTooBig,
}

impl Error {
    pub(crate) fn invalid(input: &[u8]) -> Error {
        Error::Invalid { input: input.into() }
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtIso8601(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            DuplicateTimeDesignator => f.write_str(
                "found a second time designator `T` in an ISO 8601 \
                 duration string, but it may appear at most once",
            ),
            ExpectedDateDesignatorFoundByte { byte } => write!(
                f,
                "expected to find date unit designator suffix \
                 (`Y`, `M`, `W` or `D`), but found `{byte}` instead",
                byte = escape::Byte(byte),
            ),
            ExpectedDateDesignatorFoundEndOfInput => f.write_str(
                "expected to find date unit designator suffix \
                 (`Y`, `M`, `W` or `D`), but found end of input",
            ),
            ExpectedDurationDesignatorFoundByte { byte } => write!(
                f,
                "expected to find duration beginning with `P`, \
                 but found `{byte}` instead",
                byte = escape::Byte(byte),
            ),
            ExpectedDurationDesignatorFoundEndOfInput => f.write_str(
                "expected to find duration beginning with `P`, \
                 but found end of input",
            ),
            ExpectedTimeDesignatorFoundByte { byte } => write!(
                f,
                "expected to find time unit designator suffix \
                 (`H`, `M` or `S`), but found `{byte}` instead",
                byte = escape::Byte(byte),
            ),
            ExpectedTimeDesignatorFoundEndOfInput => f.write_str(
                "expected to find time unit designator suffix \
                 (`H`, `M` or `S`), but found end of input",
            ),
            ExpectedTimeUnits => f.write_str(
                "found a time designator `T` in an ISO 8601 duration \
                 string, but did not find any time units after it",
            ),
            Invalid { ref input } => write!(
                f,
                "failed to parse {input:?} as an ISO 8601 duration",
                input = escape::Bytes(input),
            ),
            MissingValueForDesignator { byte } => write!(
                f,
                "found unit designator `{byte}` without a number \
                 immediately before it",
                byte = escape::Byte(byte),
            ),
            NoComponents => f.write_str(
                "an ISO 8601 duration must contain at least one \
                 component, but none were found",
            ),
            TooShort { len } => write!(
                f,
                "an ISO 8601 duration requires at least 3 bytes \
                 (`P`, a number and a unit designator), but found {len}",
            ),
            UnexpectedByte { byte } => write!(
                f,
                "expected a number starting the next component \
                 or the end of input, but found `{byte}`",
                byte = escape::Byte(byte),
            ),
            UnitOutOfOrder { unit, previous } => write!(
                f,
                "found value with unit {unit} after unit {previous}, \
                 but units must be written from largest to smallest \
                 (and they can't be repeated)",
                unit = unit.singular(),
                previous = previous.singular(),
            ),
            ValueTooBig => write!(
                f,
                "number too big to parse into a duration component \
                 (the maximum is {max})",
                max = u32::MAX,
            ),
        }
    }
}
