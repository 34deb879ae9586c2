/*!
ISO 8601 durations for Rust.

This crate provides a [`Duration`] type for the `PnYnMnWnDTnHnMnS` notation
from ISO 8601, along with a strict parser, a canonical printer and
arithmetic for applying durations to datetimes.

A `Duration` is made up of seven independent, non-negative components:
years, months, weeks, days, hours, minutes and seconds. Components are never
normalized into one another, so `P1W` and `P7D` are different values, and
`PT90M` stays ninety minutes.

# Example

```
use chrono::NaiveDate;
use isoduration::Duration;

let duration: Duration = "P1Y2M10DT2H30M".parse()?;
assert_eq!(duration.get_years(), 1);
assert_eq!(duration.get_minutes(), 30);
assert_eq!(duration.to_string(), "P1Y2M10DT2H30M");

let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    .and_hms_opt(0, 0, 0).unwrap();
assert_eq!((start + duration).to_string(), "2025-03-11 02:30:00");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Overview

* [`Duration`] is the duration value. It is `Copy`, can be compared for
equality and hashed, and provides component-wise addition.
* [`Unit`] names the seven components, in the order they are written.
* The [`fmt::iso8601`] module contains the parser and printer, including
non-strict parsing routines that return an `Option` instead of an error.
* The [`calendar`] module applies durations to datetimes. It works with
[`chrono`]'s datetime types out of the box, and with any other type that
implements [`calendar::Calendar`].
* [`Error`] is the single error type used throughout the crate.

# Crate features

* **std** (enabled by default) -
  When enabled, [`Error`] implements `std::error::Error` and
  [`fmt::StdIoWrite`] is available. Without it, this crate only requires
  `core` and `alloc`.
* **logging** -
  When enabled, the `log` crate is used to emit messages when parsing or
  datetime arithmetic fails. This is useful for tracking down why a
  configuration value was rejected.
* **serde** -
  When enabled, [`Duration`] implements `serde::Serialize` and
  `serde::Deserialize` using its ISO 8601 string form, and the
  [`fmt::serde`] module provides helpers for Serde's `with` attribute.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry their context on the heap, so `alloc` is always required.
extern crate alloc;

pub use crate::{duration::Duration, error::Error, unit::Unit};

#[macro_use]
mod logging;

pub mod calendar;
mod duration;
mod error;
pub mod fmt;
mod unit;
mod util;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn hash_set_membership() {
        let _ = env_logger::try_init();

        let mut set = HashSet::new();
        set.insert(Duration::from_weeks(1));
        set.insert("P1W".parse::<Duration>().unwrap());
        set.insert(Duration::from_days(7));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Duration::parse("P7D").unwrap()));
    }

    #[test]
    fn value_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Duration>();
        assert_send_sync::<Unit>();
        assert_send_sync::<Error>();
        assert_send_sync::<fmt::iso8601::DurationParser>();
        assert_send_sync::<fmt::iso8601::DurationPrinter>();
    }
}
