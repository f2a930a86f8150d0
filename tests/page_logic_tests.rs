// Native checks over the page's pure logic: countdown math, CSV
// serialization, reset placeholders, result formatting.

use hackignite::components::problems_table::{
    placeholder_category, placeholder_title, CSV_FILENAME, PLACEHOLDER_POINTS,
};
use hackignite::components::register::looks_like_link;
use hackignite::config::{ResultEntry, SiteConfig};
use hackignite::countdown::{parse_deadline, CountdownState, Remaining};
use hackignite::csv::rows_to_csv;

#[test]
fn test_countdown_format_shape() {
    let deadline = parse_deadline("2025-12-04T23:59:00+05:30").unwrap();
    let now = deadline - 86_400_000 - 3_723_000; // 1d 1h 2m 3s earlier
    match CountdownState::at(deadline, now) {
        CountdownState::Running(r) => {
            let text = r.to_string();
            assert_eq!(text, "01d : 01h : 02m : 03s");
            // DDd : HHh : MMm : SSs, every field two digits
            let fields: Vec<&str> = text.split(" : ").collect();
            assert_eq!(fields.len(), 4);
            for (field, unit) in fields.iter().zip(["d", "h", "m", "s"]) {
                assert!(field.ends_with(unit));
                assert_eq!(field.len(), 3);
                assert!(field[..2].chars().all(|c| c.is_ascii_digit()));
            }
        }
        CountdownState::Closed => panic!("deadline was in the future"),
    }
}

#[test]
fn test_countdown_strictly_decreases() {
    let deadline = 5_000_000;
    let mut last = i64::MAX;
    let mut now = 0;
    while let CountdownState::Running(r) = CountdownState::at(deadline, now) {
        assert!(r.total_seconds() < last);
        last = r.total_seconds();
        now += 1000;
    }
    assert!(CountdownState::at(deadline, now).is_closed());
}

#[test]
fn test_past_deadline_closes_on_first_evaluation() {
    let deadline = parse_deadline("2020-01-01T00:00:00+00:00").unwrap();
    assert!(CountdownState::at(deadline, deadline + 1).is_closed());
}

#[test]
fn test_remaining_decomposition_matches_total() {
    let r = Remaining::from_millis(2 * 86_400_000 + 3 * 3_600_000 + 4 * 60_000 + 5_000);
    assert_eq!(r.total_seconds(), ((2 * 24 + 3) * 60 + 4) * 60 + 5);
}

#[test]
fn test_csv_export_escaping() {
    let rows = vec![
        vec!["A".to_string(), "B".to_string()],
        vec!["c\"d".to_string(), "e,f".to_string()],
    ];
    assert_eq!(rows_to_csv(&rows), "\"A\",\"B\"\n\"c\"\"d\",\"e,f\"");
}

#[test]
fn test_csv_filename_is_stable() {
    // The download name is part of the page's published contract.
    assert_eq!(CSV_FILENAME, "hackignite_problems.csv");
}

#[test]
fn test_reset_placeholders_for_three_rows() {
    let titles: Vec<String> = (0..3).map(placeholder_title).collect();
    assert_eq!(
        titles,
        vec![
            "Problem 1 — (edit this cell)",
            "Problem 2 — (edit this cell)",
            "Problem 3 — (edit this cell)"
        ]
    );
    let categories: Vec<String> = (0..3).map(placeholder_category).collect();
    assert_eq!(categories, vec!["Category 1", "Category 2", "Category 3"]);
    assert_eq!(PLACEHOLDER_POINTS, "100");
}

#[test]
fn test_results_formatting() {
    let entries = vec![
        ResultEntry {
            team: "X".to_string(),
            prize: Some("1st".to_string()),
        },
        ResultEntry {
            team: "Team Beta".to_string(),
            prize: None,
        },
    ];
    assert_eq!(entries[0].line(), "X — 1st");
    assert_eq!(entries[1].line(), "Team Beta — ");
}

#[test]
fn test_results_entries_parse_from_json() {
    let raw = r#"[
        { "team": "Team Alpha", "prize": "1st Prize" },
        { "team": "Team Beta", "prize": null }
    ]"#;
    let entries: Vec<ResultEntry> = serde_json::from_str(raw).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].line(), "Team Alpha — 1st Prize");
}

#[test]
fn test_registration_guard() {
    assert!(looks_like_link(&SiteConfig::default().registration_url));
    assert!(!looks_like_link("paste-your-form-link-here"));
}
