use isoduration::{fmt::iso8601, Duration, Unit};

#[test]
fn accepts() {
    crate::init();

    let tests: &[(&str, Duration)] = &[
        ("P1Y", Duration::from_years(1)),
        ("PT5H", Duration::from_hours(5)),
        ("P1Y2M3W4DT5H6M7S", Duration::new(1, 2, 3, 4, 5, 6, 7)),
        ("P0D", Duration::ZERO),
        ("PT0S", Duration::ZERO),
        ("P0Y0M0W0DT0H0M0S", Duration::ZERO),
        ("P1MT1M", Duration::from_months(1).minutes(1)),
        ("P10W", Duration::from_weeks(10)),
        ("PT36H", Duration::from_hours(36)),
        ("P1DT12H", Duration::from_days(1).hours(12)),
        ("P01Y002M", Duration::from_years(1).months(2)),
        ("PT4294967295S", Duration::from_seconds(u32::MAX)),
    ];
    for &(input, expected) in tests {
        assert_eq!(Duration::parse(input).unwrap(), expected, "{input:?}");
        assert_eq!(input.parse::<Duration>().unwrap(), expected, "{input:?}");
        assert_eq!(iso8601::try_parse(input), Some(expected), "{input:?}");
    }
}

#[test]
fn rejects() {
    crate::init();

    let tests = [
        "", "P", "PT", "P1H", "PT1D", "P1M2Y", "PT1M2H", "P1Z", "P1Y---2M",
        "P1Y2M+++", "P1YT", "P1Y2", "P1T1H", "PT1HT1M", "P1Y1Y", "p1y",
        "-P1D", "+P1D", "P4294967296D", "P1.5Y", "P1,5Y", " P1Y", "P1Y ",
        "P1y", "pt1h", "PT1h", "P1W1W", "P1D1W", "PTT1H", "P1DT", "P1YT1",
        "PY", "P1YM", "P\u{00E9}", "P1D\n",
    ];
    for input in tests {
        let err = Duration::parse(input).unwrap_err();
        assert!(err.is_parse(), "{input:?}: {err}");
        assert!(!err.is_range(), "{input:?}: {err}");
        assert!(!err.is_absent(), "{input:?}: {err}");
        assert_eq!(Duration::try_parse(input), None, "{input:?}");
    }
}

#[test]
fn rejects_invalid_utf8() {
    let err = Duration::parse(b"P1\xFFD").unwrap_err();
    insta::assert_snapshot!(
        err,
        @r###"failed to parse "P1\xffD" as an ISO 8601 duration: expected to find date unit designator suffix (`Y`, `M`, `W` or `D`), but found `\xFF` instead"###,
    );
}

#[test]
fn error_messages() {
    let p = |input: &str| Duration::parse(input).unwrap_err().to_string();

    insta::assert_snapshot!(
        p("P1Z"),
        @r###"failed to parse "P1Z" as an ISO 8601 duration: expected to find date unit designator suffix (`Y`, `M`, `W` or `D`), but found `Z` instead"###,
    );
    insta::assert_snapshot!(
        p("P1m"),
        @r###"failed to parse "P1m" as an ISO 8601 duration: expected to find date unit designator suffix (`Y`, `M`, `W` or `D`), but found `m` instead"###,
    );
    insta::assert_snapshot!(
        p("PT1s"),
        @r###"failed to parse "PT1s" as an ISO 8601 duration: expected to find time unit designator suffix (`H`, `M` or `S`), but found `s` instead"###,
    );
    insta::assert_snapshot!(
        p("P"),
        @r###"failed to parse "P" as an ISO 8601 duration: an ISO 8601 duration requires at least 3 bytes (`P`, a number and a unit designator), but found 1"###,
    );
    insta::assert_snapshot!(
        p("P1Y2M+++"),
        @r###"failed to parse "P1Y2M+++" as an ISO 8601 duration: expected a number starting the next component or the end of input, but found `+`"###,
    );
    insta::assert_snapshot!(
        p("P1D\n"),
        @r###"failed to parse "P1D\n" as an ISO 8601 duration: expected a number starting the next component or the end of input, but found `\n`"###,
    );
}

#[test]
fn missing_input() {
    let err = iso8601::parse_optional(None::<&str>).unwrap_err();
    assert!(err.is_absent());
    assert!(!err.is_parse());
    assert_eq!(iso8601::try_parse_optional(None::<&str>), None);

    // An empty string is present, just invalid.
    let err = iso8601::parse_optional(Some("")).unwrap_err();
    assert!(!err.is_absent());
    assert!(err.is_parse());
}

#[test]
fn month_and_minute_are_positional() {
    let d = Duration::parse("P2MT3M").unwrap();
    assert_eq!(d.get(Unit::Month), 2);
    assert_eq!(d.get(Unit::Minute), 3);

    let d = Duration::parse("PT3M").unwrap();
    assert_eq!(d.get(Unit::Month), 0);
    assert_eq!(d.get(Unit::Minute), 3);
}

#[test]
fn each_single_component_parses() {
    for unit in Unit::ALL {
        let expected = Duration::ZERO.with(unit, 9);
        let input = if unit.is_time() {
            format!("PT9{}", unit.designator())
        } else {
            format!("P9{}", unit.designator())
        };
        assert_eq!(Duration::parse(&input).unwrap(), expected, "{input}");
    }
}
