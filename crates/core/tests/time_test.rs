use pretty_assertions::assert_eq;
use rstest::rstest;
use termtable_core::models::time::TimeOfDay;

#[rstest]
#[case("9:5", "09:05")]
#[case("09:00", "09:00")]
#[case("7:45", "07:45")]
#[case("23:59", "23:59")]
#[case("08:15:30", "08:15")]
#[case(" 10:20 ", "10:20")]
fn parse_formats_canonically(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(TimeOfDay::parse_or_default(input).to_string(), expected);
}

#[rstest]
#[case("")]
#[case("noon")]
#[case("12")]
#[case("ab:cd")]
#[case("10:")]
#[case("10:15:xx")]
#[case("10:15:30:45")]
fn malformed_input_falls_back_to_nine(#[case] input: &str) {
    assert!(TimeOfDay::parse(input).is_none());
    assert_eq!(TimeOfDay::parse_or_default(input), TimeOfDay::new(9, 0));
}

#[test]
fn out_of_range_components_are_clamped() {
    assert_eq!(TimeOfDay::parse_or_default("25:99").to_string(), "23:59");
    assert_eq!(TimeOfDay::new(30, 70), TimeOfDay::new(23, 59));
}

#[test]
fn minutes_count_from_midnight() {
    assert_eq!(TimeOfDay::new(0, 0).minutes_since_midnight(), 0);
    assert_eq!(TimeOfDay::new(9, 5).minutes_since_midnight(), 545);
    assert_eq!(TimeOfDay::new(23, 59).minutes_since_midnight(), 1439);
}

#[test]
fn ordering_follows_the_clock() {
    assert!(TimeOfDay::new(8, 30) < TimeOfDay::new(9, 0));
    assert!(TimeOfDay::new(9, 30) > TimeOfDay::new(9, 5));
    assert_eq!(TimeOfDay::new(9, 30), TimeOfDay::new(9, 30));
}

#[rstest]
#[case(TimeOfDay::new(9, 0), TimeOfDay::new(10, 30), true)]
#[case(TimeOfDay::new(9, 0), TimeOfDay::new(9, 1), true)]
#[case(TimeOfDay::new(9, 0), TimeOfDay::new(9, 0), false)]
#[case(TimeOfDay::new(10, 30), TimeOfDay::new(9, 0), false)]
fn range_requires_a_strictly_later_end(
    #[case] start: TimeOfDay,
    #[case] end: TimeOfDay,
    #[case] valid: bool,
) {
    assert_eq!(TimeOfDay::is_valid_range(start, end), valid);
}

#[test]
fn serializes_without_seconds() {
    let json = serde_json::to_string(&TimeOfDay::new(7, 5)).unwrap();
    assert_eq!(json, "\"07:05\"");
}

#[test]
fn deserializes_with_or_without_seconds() {
    let time: TimeOfDay = serde_json::from_str("\"14:45:00\"").unwrap();
    assert_eq!(time, TimeOfDay::new(14, 45));

    let time: TimeOfDay = serde_json::from_str("\"8:05\"").unwrap();
    assert_eq!(time, TimeOfDay::new(8, 5));
}
