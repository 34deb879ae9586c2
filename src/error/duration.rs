use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Overflow { unit: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Overflow { unit } => write!(
                f,
                "adding durations overflowed the {unit} component \
                 (the maximum is {max})",
                unit = unit.plural(),
                max = u32::MAX,
            ),
        }
    }
}
