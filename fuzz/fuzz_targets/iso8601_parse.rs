#![cfg_attr(fuzzing, no_main)]

use std::borrow::Cow;

use libfuzzer_sys::fuzz_target;

use isoduration::fmt::iso8601;

mod shim;

fn do_fuzz(data: &[u8]) {
    const PARSER: iso8601::DurationParser = iso8601::DurationParser::new();
    const PRINTER: iso8601::DurationPrinter = iso8601::DurationPrinter::new();

    let Ok(first) = PARSER.parse_duration(data) else {
        // The non-strict parser must reject exactly what the strict one
        // rejects.
        assert_eq!(iso8601::try_parse(data), None);
        return;
    };
    let mut printed = Vec::with_capacity(data.len());
    PRINTER
        .print_duration(&first, &mut printed)
        .expect("printing to a Vec<u8> never fails");

    match PARSER.parse_duration(&printed) {
        Ok(second) => {
            assert_eq!(
                first, second,
                "expected the initially parsed value \
                 to be equal to the value after printing and re-parsing",
            );
            assert_eq!(first.fingerprint(), second.fingerprint());
        }
        Err(e) if cfg!(not(feature = "relaxed")) => {
            let printed_str = String::from_utf8_lossy(&printed);
            panic!(
                "should be able to parse a printed value; \
                 failed with `{e}` at: `{printed_str}`{}, \
                 corresponding to {first:?}",
                if matches!(printed_str, Cow::Owned(_)) {
                    Cow::from(format!(" (lossy; actual bytes: {printed:?})"))
                } else {
                    Cow::from("")
                }
            );
        }
        Err(_) => {}
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
