use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Add { unit: Unit, amount: i64 },
    Subtract { unit: Unit, amount: i64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Calendar(err).into()
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
            Add { unit, amount } => write!(
                f,
                "adding {amount} {unit} to datetime \
                 overflowed its supported range",
                unit = unit.plural(),
            ),
            Subtract { unit, amount } => write!(
                f,
                "subtracting {amount} {unit} from datetime \
                 overflowed its supported range",
                unit = unit.plural(),
            ),
        }
    }
}
