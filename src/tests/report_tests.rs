use super::*;
use proptest::prelude::*;

fn entries(pairs: &[(&str, &str)]) -> Vec<LogEntry> {
    pairs.iter().map(|(n, m)| LogEntry::new(*n, *m)).collect()
}

#[test]
fn test_groups_follow_first_occurrence() {
    let history = entries(&[("b", "1"), ("a", "2"), ("b", "3"), ("c", "4"), ("a", "5")]);
    let report = GroupedReport::from_entries(&history, false);

    let names: Vec<&str> = report.groups().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_eq!(
        report.get("a"),
        Some(&ReportValue::Many(vec!["2".to_string(), "5".to_string()]))
    );
    assert_eq!(report.get("c"), Some(&ReportValue::Many(vec!["4".to_string()])));
    assert_eq!(report.get("missing"), None);
}

#[test]
fn test_slim_collapses_single_messages_only() {
    let history = entries(&[("Page A", "ok"), ("Page B", "x"), ("Page B", "y")]);
    let report = GroupedReport::from_entries(&history, true);

    assert_eq!(report.get("Page A"), Some(&ReportValue::Single("ok".to_string())));
    assert_eq!(
        report.get("Page B"),
        Some(&ReportValue::Many(vec!["x".to_string(), "y".to_string()]))
    );
}

#[test]
fn test_pretty_json_uses_four_space_indent() {
    let history = entries(&[("Page A", "ok")]);
    let json = GroupedReport::from_entries(&history, false)
        .to_pretty_json()
        .expect("Failed to render report");
    assert_eq!(json, "{\n    \"Page A\": [\n        \"ok\"\n    ]\n}");

    let slim = GroupedReport::from_entries(&history, true)
        .to_pretty_json()
        .expect("Failed to render report");
    assert_eq!(slim, "{\n    \"Page A\": \"ok\"\n}");
}

#[test]
fn test_empty_report_renders_empty_object() {
    let report = GroupedReport::from_entries(&[], true);
    assert!(report.is_empty());
    assert_eq!(report.to_pretty_json().expect("Failed to render report"), "{}");
}

#[test]
fn test_json_key_order_is_preserved() {
    let history = entries(&[("zeta", "1"), ("alpha", "2")]);
    let json = GroupedReport::from_entries(&history, true)
        .to_pretty_json()
        .expect("Failed to render report");
    let zeta = json.find("zeta").expect("zeta missing");
    let alpha = json.find("alpha").expect("alpha missing");
    assert!(zeta < alpha, "keys should keep first-occurrence order");
}

fn arb_history() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-d]", "[a-z ]{0,6}"), 0..30)
}

proptest! {
    #[test]
    fn prop_grouping_preserves_call_order(history in arb_history()) {
        let log: Vec<LogEntry> = history.iter().map(|(n, m)| LogEntry::new(n.as_str(), m.as_str())).collect();
        let report = GroupedReport::from_entries(&log, false);

        let mut expected_names: Vec<&str> = Vec::new();
        for (name, _) in &history {
            if !expected_names.contains(&name.as_str()) {
                expected_names.push(name);
            }
        }
        let names: Vec<&str> = report.groups().iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(names, expected_names);

        for (name, value) in report.groups() {
            let expected: Vec<String> = history
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, m)| m.clone())
                .collect();
            prop_assert_eq!(value, &ReportValue::Many(expected));
        }
    }

    #[test]
    fn prop_slim_matches_full_for_repeated_names(history in arb_history()) {
        let log: Vec<LogEntry> = history.iter().map(|(n, m)| LogEntry::new(n.as_str(), m.as_str())).collect();
        let full = GroupedReport::from_entries(&log, false);
        let slim = GroupedReport::from_entries(&log, true);

        for ((name, full_value), (slim_name, slim_value)) in full.groups().iter().zip(slim.groups()) {
            prop_assert_eq!(name, slim_name);
            match full_value {
                ReportValue::Many(messages) if messages.len() == 1 => {
                    prop_assert_eq!(slim_value, &ReportValue::Single(messages[0].clone()));
                }
                _ => {
                    prop_assert_eq!(slim_value, full_value);
                }
            }
        }
    }
}
