use std::collections::HashMap;

use isoduration::Duration;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Policy {
    name: String,
    retention: Duration,
    #[serde(with = "isoduration::fmt::serde::duration::optional", default)]
    grace: Option<Duration>,
}

#[test]
fn struct_round_trip() {
    let json = r#"{"name":"logs","retention":"P90D","grace":"PT12H"}"#;
    let policy: Policy = serde_json::from_str(json).unwrap();
    assert_eq!(policy.retention, Duration::from_days(90));
    assert_eq!(policy.grace, Some(Duration::from_hours(12)));
    assert_eq!(serde_json::to_string(&policy).unwrap(), json);
}

#[test]
fn missing_optional_field() {
    let json = r#"{"name":"logs","retention":"P1Y"}"#;
    let policy: Policy = serde_json::from_str(json).unwrap();
    assert_eq!(policy.grace, None);
}

#[test]
fn invalid_duration_is_reported() {
    let json = r#"{"name":"logs","retention":"P1Y---2M"}"#;
    let err = serde_json::from_str::<Policy>(json).unwrap_err();
    assert!(err.to_string().contains("failed to parse \"P1Y---2M\""));
}

#[test]
fn durations_as_map_keys() -> anyhow::Result<()> {
    let json = r#"{"P1W":"weekly","P7D":"every seven days"}"#;
    let map: HashMap<Duration, String> = serde_json::from_str(json)?;
    assert_eq!(map.len(), 2);
    assert_eq!(map[&Duration::from_weeks(1)], "weekly");
    assert_eq!(map[&Duration::from_days(7)], "every seven days");
    Ok(())
}
