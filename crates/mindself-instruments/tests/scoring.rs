use mindself_instruments::error::InstrumentError;
use mindself_instruments::scoring::{AdvicePriority, TOTAL};
use mindself_instruments::{all_instruments, get_instrument, get_scale, score};

fn uniform(scale_id: &str, answer: u32) -> Vec<u32> {
    vec![answer; get_scale(scale_id).unwrap().questions.len()]
}

#[test]
fn phq9_all_zero_is_minimal_without_safety_flag() {
    let result = score("phq9", &uniform("phq9", 0)).unwrap();
    assert_eq!(result.total.raw, 0);
    assert_eq!(result.total.standardized, 0);
    assert_eq!(result.total.band.level, "Minimal");
    assert!(result.safety_flag.is_none());
    assert!(result.alerts.is_empty());
    assert_eq!(result.advice.len(), 1);
}

#[test]
fn phq9_all_max_is_severe_and_flagged() {
    let result = score("phq9", &uniform("phq9", 3)).unwrap();
    assert_eq!(result.total.raw, 27);
    assert_eq!(result.total.max, 27);
    assert_eq!(result.total.band.level, "Severe");
    assert!(result.safety_flag.is_some());
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].subscale_id, TOTAL);
}

#[test]
fn phq9_safety_flag_depends_only_on_item_nine() {
    for answer in 0..=3 {
        let mut answers = vec![0; 9];
        answers[8] = answer;
        let result = score("phq9", &answers).unwrap();
        assert_eq!(result.safety_flag.is_some(), answer >= 1, "item 9 = {answer}");

        let mut answers = vec![3; 9];
        answers[8] = answer;
        let result = score("phq9", &answers).unwrap();
        assert_eq!(result.safety_flag.is_some(), answer >= 1, "item 9 = {answer}, others max");
    }
}

#[test]
fn phq9_cut_points() {
    let level = |total: u32| {
        let mut answers = vec![0u32; 9];
        let mut remaining = total;
        for answer in answers.iter_mut() {
            let take = remaining.min(3);
            *answer = take;
            remaining -= take;
        }
        score("phq9", &answers).unwrap().total.band.level
    };
    assert_eq!(level(4), "Minimal");
    assert_eq!(level(5), "Mild");
    assert_eq!(level(9), "Mild");
    assert_eq!(level(10), "Moderate");
    assert_eq!(level(15), "Moderately severe");
    assert_eq!(level(19), "Moderately severe");
    assert_eq!(level(20), "Severe");
}

#[test]
fn pss10_midpoint_is_a_fixed_point_of_reversal() {
    let result = score("pss10", &uniform("pss10", 2)).unwrap();
    assert!(result.items.iter().all(|item| item.contribution == 2));
    assert_eq!(result.total.raw, 20);
    assert_eq!(result.total.band.level, "Moderate stress");
}

#[test]
fn pss10_reversed_item_extremes() {
    let mut answers = vec![0; 10];
    answers[3] = 0;
    let low = score("pss10", &answers).unwrap();
    assert!(low.items[3].reversed);
    assert_eq!(low.items[3].contribution, 4);

    answers[3] = 4;
    let high = score("pss10", &answers).unwrap();
    assert_eq!(high.items[3].value, 4);
    assert_eq!(high.items[3].contribution, 0);
    assert_eq!(low.total.raw - high.total.raw, 4);
}

#[test]
fn reversed_items_invert_the_extremes_on_every_scale() {
    for instrument in all_instruments() {
        let definition = instrument.definition();
        if !definition.questions.iter().any(|q| q.reverse) {
            continue;
        }
        let lowest = vec![0; definition.questions.len()];
        let highest = vec![definition.options.len() as u32 - 1; definition.questions.len()];

        let low = instrument.score(&lowest).unwrap();
        let high = instrument.score(&highest).unwrap();
        for (question, (l, h)) in definition.questions.iter().zip(low.items.iter().zip(&high.items)) {
            if question.reverse {
                assert_eq!(l.contribution, definition.max_value(), "{}", definition.id);
                assert_eq!(h.contribution, definition.min_value(), "{}", definition.id);
            } else {
                assert_eq!(l.contribution, definition.min_value(), "{}", definition.id);
                assert_eq!(h.contribution, definition.max_value(), "{}", definition.id);
            }
        }
    }
}

#[test]
fn who5_all_max_is_one_hundred_percent() {
    let result = score("who5", &uniform("who5", 5)).unwrap();
    assert_eq!(result.total.raw, 25);
    assert_eq!(result.total.standardized, 100);
    assert_eq!(result.total.band.level, "Good well-being");
    assert!(result.alerts.is_empty());
}

#[test]
fn who5_low_well_being_raises_an_alert() {
    let result = score("who5", &[1, 1, 1, 2, 2]).unwrap();
    assert_eq!(result.total.raw, 7);
    assert_eq!(result.total.standardized, 28);
    assert_eq!(result.total.band.level, "Low well-being");
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.advice[0].priority, AdvicePriority::High);
}

#[test]
fn who5_reports_each_dimension() {
    let result = score("who5", &[5, 4, 2, 1, 0]).unwrap();
    let dimensions: Vec<(&str, u32, &str)> = result
        .subscales
        .iter()
        .map(|s| (s.subscale_id.as_str(), s.standardized, s.band.level.as_str()))
        .collect();
    assert_eq!(
        dimensions,
        [
            ("positive_mood", 100, "Excellent"),
            ("calmness", 80, "Excellent"),
            ("vitality", 40, "Average"),
            ("rested", 20, "Below average"),
            ("interest", 0, "Poor"),
        ]
    );
    assert_eq!(result.total.standardized, 48);
    assert_eq!(result.alerts.len(), 0);
}

#[test]
fn who5_below_fifty_suggests_phq9() {
    let result = score("who5", &[2, 2, 2, 2, 4]).unwrap();
    assert_eq!(result.total.standardized, 48);
    let follow_up = result.follow_up.as_ref().unwrap();
    assert_eq!(follow_up.scale_id, "phq9");
    assert!(get_instrument(&follow_up.scale_id).is_ok());

    let who5 = get_instrument("who5").unwrap();
    assert!(who5.to_summary(&result).contains("Next step: "));

    let result = score("who5", &[2, 2, 2, 2, 5]).unwrap();
    assert_eq!(result.total.standardized, 52);
    assert!(result.follow_up.is_none());

    assert!(score("phq9", &[3; 9]).unwrap().follow_up.is_none());
}

#[test]
fn sds_index_is_raw_times_one_and_a_quarter() {
    // Every option 0: plain items give 1, reversed items give 4.
    let result = score("sds", &uniform("sds", 0)).unwrap();
    assert_eq!(result.total.raw, 50);
    assert_eq!(result.total.standardized, 63);
    assert_eq!(result.total.max, 100);
    assert_eq!(result.total.band.level, "Moderate depression");
    assert!(result.safety_flag.is_none());
}

#[test]
fn sds_safety_flag_uses_the_point_value() {
    let mut answers = uniform("sds", 0);
    answers[18] = 1;
    assert!(score("sds", &answers).unwrap().safety_flag.is_none());

    answers[18] = 2;
    assert!(score("sds", &answers).unwrap().safety_flag.is_some());
}

#[test]
fn rosenberg_reverses_negative_items() {
    let result = score("rosenberg", &uniform("rosenberg", 0)).unwrap();
    assert_eq!(result.total.raw, 25);
    assert_eq!(result.total.band.level, "Normal self-esteem");

    let result = score("rosenberg", &[3, 3, 0, 3, 0, 3, 3, 0, 0, 0]).unwrap();
    assert_eq!(result.total.raw, 40);
    assert_eq!(result.total.band.level, "High self-esteem");
}

#[test]
fn dass21_scores_each_subscale_on_the_doubled_metric() {
    let result = score("dass21", &uniform("dass21", 1)).unwrap();

    let raw = result.raw_scores();
    assert_eq!(raw["depression"], 7);
    assert_eq!(raw["anxiety"], 7);
    assert_eq!(raw["stress"], 7);
    assert_eq!(raw[TOTAL], 21);

    let severity = result.severity();
    assert_eq!(severity["depression"].level, "Moderate");
    assert_eq!(severity["anxiety"].level, "Moderate");
    assert_eq!(severity["stress"].level, "Normal");
    assert_eq!(severity[TOTAL].level, "Mild distress");
    assert_eq!(result.standardized_scores()["stress"], 14);

    assert!(result.alerts.is_empty());
    let priorities: Vec<_> = result.advice.iter().map(|a| a.priority).collect();
    assert_eq!(
        priorities,
        [AdvicePriority::Medium, AdvicePriority::Medium, AdvicePriority::General]
    );
    assert!(result.advice.last().unwrap().subscale_id.is_none());
}

#[test]
fn dass21_subscales_follow_item_membership() {
    // Only the stress items (1, 6, 8, 11, 12, 14, 18) answered at the top.
    let mut answers = vec![0; 21];
    for item in [1, 6, 8, 11, 12, 14, 18] {
        answers[item - 1] = 3;
    }
    let result = score("dass21", &answers).unwrap();
    assert_eq!(result.subscale("stress").unwrap().standardized, 42);
    assert_eq!(result.subscale("depression").unwrap().standardized, 0);
    assert_eq!(result.subscale("anxiety").unwrap().standardized, 0);
    assert_eq!(result.subscale("stress").unwrap().band.level, "Extremely severe");
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].subscale_id, "stress");
}

#[test]
fn dass21_all_max_alerts_everywhere() {
    let result = score("dass21", &uniform("dass21", 3)).unwrap();
    assert_eq!(result.total.standardized, 126);
    assert_eq!(result.total.band.level, "Severe distress");
    assert_eq!(result.alerts.len(), 4);
}

#[test]
fn scoring_is_deterministic() {
    for instrument in all_instruments() {
        let definition = instrument.definition();
        let answers: Vec<u32> = (0..definition.questions.len())
            .map(|i| (i % definition.options.len()) as u32)
            .collect();
        let first = instrument.score(&answers).unwrap();
        let second = instrument.score(&answers).unwrap();
        assert_eq!(first, second, "{}", definition.id);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn unknown_scale_is_rejected() {
    assert!(matches!(
        score("mmpi", &[0; 9]),
        Err(InstrumentError::UnknownScale(_))
    ));
}

#[test]
fn short_answer_sequence_is_rejected() {
    match score("phq9", &[0; 8]) {
        Err(InstrumentError::InvalidAnswerCount {
            scale_id,
            expected,
            actual,
        }) => {
            assert_eq!(scale_id, "phq9");
            assert_eq!(expected, 9);
            assert_eq!(actual, 8);
        }
        other => panic!("expected InvalidAnswerCount, got {other:?}"),
    }
}

#[test]
fn out_of_range_answer_is_rejected() {
    let mut answers = vec![0; 9];
    answers[4] = 4;
    match score("phq9", &answers) {
        Err(InstrumentError::InvalidAnswerValue {
            index,
            value,
            option_count,
            ..
        }) => {
            assert_eq!(index, 4);
            assert_eq!(value, 4);
            assert_eq!(option_count, 4);
        }
        other => panic!("expected InvalidAnswerValue, got {other:?}"),
    }

    assert!(score("who5", &[6, 0, 0, 0, 0]).is_err());
}

#[test]
fn history_record_uses_the_headline_score() {
    let definition = get_scale("sds").unwrap();
    let result = score("sds", &uniform("sds", 0)).unwrap();
    let at: jiff::Timestamp = "2026-03-01T09:30:00Z".parse().unwrap();

    let record = result.to_history_record(definition, at);
    assert_eq!(record.scale_id, "sds");
    assert_eq!(record.short_title, "SDS");
    assert_eq!(record.raw_score, 50);
    assert_eq!(record.score, 63);
    assert_eq!(record.max_score, 100);
    assert_eq!(record.level, "Moderate depression");
    assert!(!record.safety_flagged);
    assert_eq!(record.recorded_at, at);
}

#[test]
fn summary_lists_subscales_and_advice() {
    let dass = get_instrument("dass21").unwrap();
    let result = dass.score(&[1; 21]).unwrap();
    let summary = dass.to_summary(&result);

    assert!(summary.starts_with("## DASS-21"));
    assert!(summary.contains("Overall distress**: 42 / 126 (Mild distress)"));
    assert!(summary.contains("- Stress: 14 / 42 (Normal)"));
    assert!(summary.contains("Raw score: 21"));
    assert!(summary.contains("balanced diet"));

    let phq9 = get_instrument("phq9").unwrap();
    let summary = phq9.to_summary(&phq9.score(&[3; 9]).unwrap());
    assert!(summary.contains("> Safety note"));
    assert!(!summary.contains("Raw score"));
}
