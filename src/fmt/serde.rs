/*!
This module provides helpers to use with [Serde].

The helpers are exposed as modules meant to be used with
Serde's [`with` attribute].

[`Duration`](crate::Duration) already implements `Serialize` and
`Deserialize` using its ISO 8601 string form, so a plain `Duration` field
needs no attribute at all. The helpers here control how a *missing* duration
is treated.

# Module hierarchy

Only the leaves of the tree are usable with Serde's `with` attribute. For
each leaf, the full path is spelled out for easy copy & paste.

* [`duration`]
    * [`isoduration::fmt::serde::duration::required`](self::duration::required)
    * [`isoduration::fmt::serde::duration::optional`](self::duration::optional)

The `required` helper rejects a `null` value with the same error reported by
[`iso8601::parse_optional`](crate::fmt::iso8601::parse_optional) when given
no input. The `optional` helper maps `null` to `None`.

# Example

```
use isoduration::Duration;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "isoduration::fmt::serde::duration::required")]
    retention: Duration,
    #[serde(with = "isoduration::fmt::serde::duration::optional")]
    grace: Option<Duration>,
}

let json = r#"{"retention":"P1Y6M","grace":null}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.retention, Duration::from_years(1).months(6));
assert_eq!(got.grace, None);
assert_eq!(serde_json::to_string(&got)?, json);

let json = r#"{"retention":null,"grace":null}"#;
let err = serde_json::from_str::<Record>(&json).unwrap_err();
assert!(err.to_string().starts_with(
    "no input was given, but a duration string was required",
));

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

use serde::de;

use crate::{fmt::iso8601::DEFAULT_DURATION_PARSER, Duration};

/// A visitor for parsing a `Duration` from its ISO 8601 string form.
pub(crate) struct DurationVisitor;

impl<'de> de::Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("an ISO 8601 duration string")
    }

    #[inline]
    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Duration, E> {
        DEFAULT_DURATION_PARSER
            .parse_duration(value)
            .map_err(de::Error::custom)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Duration, E> {
        self.visit_bytes(value.as_bytes())
    }
}

/// Convenience routines for (de)serializing [`Duration`](crate::Duration)
/// values that may be missing.
pub mod duration {
    use serde::de;

    use crate::{error::Error, Duration};

    /// A visitor for a duration that must be present.
    struct RequiredVisitor;

    impl<'de> de::Visitor<'de> for RequiredVisitor {
        type Value = Duration;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("an ISO 8601 duration string")
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            de: D,
        ) -> Result<Duration, D::Error> {
            de.deserialize_str(super::DurationVisitor)
        }

        #[inline]
        fn visit_none<E: de::Error>(self) -> Result<Duration, E> {
            Err(de::Error::custom(Error::absent()))
        }

        #[inline]
        fn visit_unit<E: de::Error>(self) -> Result<Duration, E> {
            self.visit_none()
        }
    }

    /// A visitor for a duration that may be `None`.
    struct OptionalVisitor;

    impl<'de> de::Visitor<'de> for OptionalVisitor {
        type Value = Option<Duration>;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("an ISO 8601 duration string or `None`")
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            de: D,
        ) -> Result<Option<Duration>, D::Error> {
            de.deserialize_str(super::DurationVisitor).map(Some)
        }

        #[inline]
        fn visit_none<E: de::Error>(self) -> Result<Option<Duration>, E> {
            Ok(None)
        }
    }

    /// (De)serialize a required ISO 8601 duration.
    ///
    /// A `null` value is rejected with an error that says no input was
    /// given.
    pub mod required {
        /// Serialize a required duration as an ISO 8601 string.
        #[inline]
        pub fn serialize<S: serde::Serializer>(
            duration: &crate::Duration,
            se: S,
        ) -> Result<S::Ok, S::Error> {
            se.collect_str(duration)
        }

        /// Deserialize a required duration from an ISO 8601 string.
        #[inline]
        pub fn deserialize<'de, D: serde::Deserializer<'de>>(
            de: D,
        ) -> Result<crate::Duration, D::Error> {
            de.deserialize_option(super::RequiredVisitor)
        }
    }

    /// (De)serialize an optional ISO 8601 duration.
    pub mod optional {
        /// Serialize an optional duration as an ISO 8601 string, or `None`.
        #[inline]
        pub fn serialize<S: serde::Serializer>(
            duration: &Option<crate::Duration>,
            se: S,
        ) -> Result<S::Ok, S::Error> {
            match *duration {
                None => se.serialize_none(),
                Some(ref duration) => se.collect_str(duration),
            }
        }

        /// Deserialize an optional duration from an ISO 8601 string or
        /// `None`.
        #[inline]
        pub fn deserialize<'de, D: serde::Deserializer<'de>>(
            de: D,
        ) -> Result<Option<crate::Duration>, D::Error> {
            de.deserialize_option(super::OptionalVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::Duration;

    #[test]
    fn duration_plain() {
        #[derive(Debug, serde::Deserialize, serde::Serialize)]
        struct Data {
            d: Duration,
        }

        let json = r#"{"d":"P1Y2M3W4DT5H6M7S"}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.d, Duration::new(1, 2, 3, 4, 5, 6, 7));
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let json = r#"{"d":"P1M2Y"}"#;
        let err = serde_json::from_str::<Data>(&json).unwrap_err();
        assert!(err.to_string().starts_with(
            "failed to parse \"P1M2Y\" as an ISO 8601 duration: \
             found value with unit year after unit month",
        ));
    }

    #[test]
    fn duration_required() {
        #[derive(Debug, serde::Deserialize, serde::Serialize)]
        struct Data {
            #[serde(with = "crate::fmt::serde::duration::required")]
            d: Duration,
        }

        let json = r#"{"d":"PT90M"}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.d, Duration::from_minutes(90));
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let got: Data = serde_json::from_str(r#"{"d":"P0D"}"#).unwrap();
        assert!(got.d.is_zero());

        let err = serde_json::from_str::<Data>(r#"{"d":null}"#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("no input was given, but a duration string"));
    }

    #[test]
    fn duration_optional() {
        #[derive(Debug, serde::Deserialize, serde::Serialize)]
        struct Data {
            #[serde(with = "crate::fmt::serde::duration::optional")]
            d: Option<Duration>,
        }

        let json = r#"{"d":"P3W"}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.d, Some(Duration::from_weeks(3)));
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let json = r#"{"d":null}"#;
        let got: Data = serde_json::from_str(&json).unwrap();
        assert_eq!(got.d, None);
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let err =
            serde_json::from_str::<Data>(r#"{"d":"P1Y "}"#).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse \"P1Y \""));
    }
}
