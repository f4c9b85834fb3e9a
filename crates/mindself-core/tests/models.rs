use mindself_core::models::history::{HistoryRecord, parse_record_id};
use mindself_core::models::trend::TrendPoint;

fn record(score: u32, max_score: u32) -> HistoryRecord {
    HistoryRecord {
        id: parse_record_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
        scale_id: "gad7".to_string(),
        title: "GAD-7 Anxiety Scale".to_string(),
        short_title: "GAD-7".to_string(),
        raw_score: score,
        score,
        max_score,
        level: "Mild".to_string(),
        safety_flagged: false,
        recorded_at: "2026-03-01T09:00:00Z".parse().unwrap(),
    }
}

#[test]
fn percent_rounds_half_up() {
    assert_eq!(record(7, 21).percent(), 33);
    assert_eq!(record(14, 21).percent(), 67);
    assert_eq!(record(21, 21).percent(), 100);
    assert_eq!(record(1, 8).percent(), 13);
}

#[test]
fn percent_of_zero_max_is_zero() {
    assert_eq!(record(0, 0).percent(), 0);
}

#[test]
fn trend_point_keeps_the_headline_score() {
    let r = record(14, 21);
    let point = TrendPoint::from(&r);
    assert_eq!(point.recorded_at, r.recorded_at);
    assert_eq!((point.score, point.max_score), (14, 21));
    assert_eq!(point.percent(), r.percent());
}

#[test]
fn record_ids_are_trimmed_before_parsing() {
    assert!(parse_record_id("  67e55044-10b1-426f-9247-bb680e5fe0c8\n").is_ok());
    assert!(parse_record_id("67e55044").is_err());
}

#[test]
fn records_without_safety_field_deserialize() {
    let json = r#"{
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "scale_id": "gad7",
        "title": "GAD-7 Anxiety Scale",
        "short_title": "GAD-7",
        "raw_score": 7,
        "score": 7,
        "max_score": 21,
        "level": "Mild",
        "recorded_at": "2026-03-01T09:00:00Z"
    }"#;
    let parsed: HistoryRecord = serde_json::from_str(json).unwrap();
    assert!(!parsed.safety_flagged);
}
