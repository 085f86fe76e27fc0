use chrono::NaiveDate;
use salesbook_core::{SalesMan, SocialPerformanceRecord};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn salesman_new_sets_fields() {
    let salesman = SalesMan::new(90, "John", "Doe");

    assert_eq!(salesman.id, 90);
    assert_eq!(salesman.first_name, "John");
    assert_eq!(salesman.last_name, "Doe");
}

#[test]
fn record_new_sets_fields() {
    let record = SocialPerformanceRecord::new("Great teamwork", date(2025, 10, 19), 9);

    assert_eq!(record.description, "Great teamwork");
    assert_eq!(record.date, date(2025, 10, 19));
    assert_eq!(record.score, 9);
}

#[test]
fn salesman_serialization_uses_expected_wire_fields() {
    let salesman = SalesMan::new(42, "Alice", "Smith");

    let json = serde_json::to_value(&salesman).unwrap();
    assert_eq!(json["sid"], 42);
    assert_eq!(json["firstname"], "Alice");
    assert_eq!(json["lastname"], "Smith");

    let decoded: SalesMan = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, salesman);
}

#[test]
fn record_serialization_uses_iso_date_text() {
    let record = SocialPerformanceRecord::new("Excellent client feedback", date(2025, 10, 20), 10);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["description"], "Excellent client feedback");
    assert_eq!(json["date"], "2025-10-20");
    assert_eq!(json["score"], 10);

    let decoded: SocialPerformanceRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn iso_date_text_sorts_like_calendar_dates() {
    let days = [
        date(2025, 10, 20),
        date(2024, 12, 31),
        date(2025, 1, 2),
        date(2025, 10, 19),
    ];

    let mut as_text: Vec<String> = days.iter().map(|day| day.to_string()).collect();
    as_text.sort();

    let mut by_date = days;
    by_date.sort();
    let chronological: Vec<String> = by_date.iter().map(|day| day.to_string()).collect();
    assert_eq!(as_text, chronological);
}
