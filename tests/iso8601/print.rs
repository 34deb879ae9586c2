use isoduration::{
    fmt::{iso8601, StdFmtWrite, StdIoWrite},
    Duration, Unit,
};

#[test]
fn canonical_forms() {
    let tests: &[(Duration, &str)] = &[
        (Duration::ZERO, "P0D"),
        (Duration::from_years(1), "P1Y"),
        (Duration::from_hours(5), "PT5H"),
        (Duration::new(1, 2, 3, 4, 5, 6, 7), "P1Y2M3W4DT5H6M7S"),
        (Duration::from_days(2).seconds(1), "P2DT1S"),
        (Duration::from_months(1).minutes(1), "P1MT1M"),
        (Duration::from_weeks(1).days(7), "P1W7D"),
    ];
    for &(duration, expected) in tests {
        assert_eq!(duration.to_string(), expected);
        assert_eq!(iso8601::to_string(&duration), expected);
        assert_eq!(format!("{duration:?}"), expected);
    }
}

#[test]
fn canonical_input_round_trips() {
    let inputs = [
        "P0D", "P1Y", "P2M", "P3W", "P4D", "PT5H", "PT6M", "PT7S",
        "P1Y2M3W4DT5H6M7S", "P1YT1S", "P12MT60M", "PT4294967295S",
    ];
    for input in inputs {
        let duration = Duration::parse(input).unwrap();
        assert_eq!(duration.to_string(), input);
    }
}

#[test]
fn non_canonical_input_is_normalized() {
    let p = |input: &str| Duration::parse(input).unwrap().to_string();

    insta::assert_snapshot!(p("PT0S"), @"P0D");
    insta::assert_snapshot!(p("P0Y1M"), @"P1M");
    insta::assert_snapshot!(p("P007D"), @"P7D");
    insta::assert_snapshot!(p("P1DT0H"), @"P1D");
    insta::assert_snapshot!(p("P0YT0H1S"), @"PT1S");
}

#[test]
fn writers() {
    let duration = Duration::from_years(3).hours(4);
    let printer = iso8601::DurationPrinter::new();

    let mut buf = String::new();
    printer.print_duration(&duration, StdFmtWrite(&mut buf)).unwrap();
    assert_eq!(buf, "P3YT4H");

    let mut buf = vec![];
    printer.print_duration(&duration, StdIoWrite(&mut buf)).unwrap();
    assert_eq!(buf, b"P3YT4H");

    assert_eq!(printer.duration_to_string(&duration), "P3YT4H");
}

#[test]
fn io_write_failure_is_reported() {
    let duration = Duration::from_days(10);
    let printer = iso8601::DurationPrinter::new();

    // Room for `P1` only.
    let mut buf = [0u8; 2];
    let err = printer
        .print_duration(&duration, StdIoWrite(&mut buf[..]))
        .unwrap_err();
    insta::assert_snapshot!(
        err,
        @"failed to write to I/O stream: write zero",
    );
    assert!(!err.is_parse());
    assert!(!err.is_range());
    assert!(!err.is_absent());
}

#[test]
fn every_single_component_round_trips() {
    for unit in Unit::ALL {
        for value in [1, 59, 60, 1_000_000, u32::MAX] {
            let duration = Duration::ZERO.with(unit, value);
            let printed = duration.to_string();
            assert_eq!(Duration::parse(&printed).unwrap(), duration);
        }
    }
}
